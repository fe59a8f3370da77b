//! Per-product rendering outcome.
//!
//! The page, not the renderer, decides what happens to a product that fails
//! validation: it keeps its grid position and shows a placeholder card.

use storefront_products::{CurrencyFormatter, Product, ProductCardRenderer, ProductCardView};
use storefront_ui::{Card, CardSections};

pub const PLACEHOLDER_TITLE: &str = "Product unavailable";
pub const PLACEHOLDER_DESCRIPTION: &str = "This item could not be displayed.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardSlot {
    Product(ProductCardView),
    Placeholder {
        slug: Option<String>,
        /// Validation failure, for logs only; never shown to shoppers.
        reason: String,
    },
}

impl CardSlot {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, CardSlot::Placeholder { .. })
    }

    pub fn as_product(&self) -> Option<&ProductCardView> {
        match self {
            CardSlot::Product(view) => Some(view),
            CardSlot::Placeholder { .. } => None,
        }
    }
}

impl Card for CardSlot {
    fn sections(&self) -> CardSections {
        match self {
            CardSlot::Product(view) => view.sections(),
            CardSlot::Placeholder { .. } => {
                let mut sections = CardSections::titled(PLACEHOLDER_TITLE);
                sections.header.description = Some(PLACEHOLDER_DESCRIPTION.to_string());
                sections
            }
        }
    }
}

/// Render each product independently; failures become placeholders.
pub fn render_product_slots<F: CurrencyFormatter>(
    products: &[Product],
    renderer: &ProductCardRenderer<F>,
) -> Vec<CardSlot> {
    products
        .iter()
        .map(|product| match renderer.render(product) {
            Ok(view) => CardSlot::Product(view),
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    slug = err.slug.as_deref().unwrap_or(""),
                    "invalid product; rendering placeholder"
                );
                CardSlot::Placeholder {
                    slug: err.slug.clone(),
                    reason: err.reason.to_string(),
                }
            }
        })
        .collect()
}
