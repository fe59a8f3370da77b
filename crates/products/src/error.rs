//! Product validation errors.

use storefront_core::DomainError;
use thiserror::Error;

/// Which input rule a product broke.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidProductReason {
    #[error("name cannot be empty")]
    EmptyName,

    #[error("slug cannot be empty")]
    EmptySlug,

    #[error("price cannot be negative (got {0})")]
    NegativePrice(i64),
}

/// A product that cannot be rendered.
///
/// The renderer never produces a partial card; the caller decides whether to
/// skip the product, show a placeholder or abort.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid product{}: {}", slug_suffix(.slug), .reason)]
pub struct InvalidProductError {
    pub reason: InvalidProductReason,
    /// Slug of the offending product, when it has one.
    pub slug: Option<String>,
}

impl InvalidProductError {
    pub fn new(reason: InvalidProductReason) -> Self {
        Self { reason, slug: None }
    }

    pub fn for_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }
}

fn slug_suffix(slug: &Option<String>) -> String {
    match slug {
        Some(slug) => format!(" `{slug}`"),
        None => String::new(),
    }
}

impl From<InvalidProductError> for DomainError {
    fn from(err: InvalidProductError) -> Self {
        DomainError::validation(err.to_string())
    }
}
