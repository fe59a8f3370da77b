use serde::{Deserialize, Serialize};
use storefront_core::ValueObject;

use crate::error::{InvalidProductError, InvalidProductReason};
use crate::money::{Currency, Money};

/// Prefix of every product detail path.
pub const PRODUCT_PATH_PREFIX: &str = "/products/";

/// A product as supplied by the page that lists it.
///
/// Field names on the wire follow the card's props (`inStock`). The record is
/// not validated on construction; [`Product::validate`] (called by the
/// renderer) enforces the display rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    /// Price in minor currency units (e.g. cents).
    pub price: i64,
    pub in_stock: bool,
    pub slug: String,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        price: i64,
        in_stock: bool,
        slug: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            in_stock,
            slug: slug.into(),
        }
    }

    /// Check the display rules: non-empty name, non-empty slug, non-negative price.
    ///
    /// Returns the checked slug. The name is shown verbatim, so only a
    /// zero-length name is rejected.
    pub fn validate(&self) -> Result<Slug, InvalidProductError> {
        if self.name.is_empty() {
            let err = InvalidProductError::new(InvalidProductReason::EmptyName);
            return Err(if self.slug.is_empty() {
                err
            } else {
                err.for_slug(self.slug.clone())
            });
        }

        let slug = Slug::new(self.slug.as_str())?;

        if self.price < 0 {
            return Err(
                InvalidProductError::new(InvalidProductReason::NegativePrice(self.price))
                    .for_slug(slug.as_str()),
            );
        }
        Ok(slug)
    }

    pub fn price_in(&self, currency: Currency) -> Money {
        Money::new(self.price, currency)
    }
}

/// URL-safe product identifier.
///
/// Slugs are taken as given (no re-encoding); the only rule enforced is that
/// they are not empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl ValueObject for Slug {}

impl Slug {
    pub fn new(value: impl Into<String>) -> Result<Self, InvalidProductError> {
        let value = value.into();
        if value.is_empty() {
            return Err(InvalidProductError::new(InvalidProductReason::EmptySlug));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Detail page path: `/products/{slug}`.
    pub fn product_path(&self) -> String {
        format!("{PRODUCT_PATH_PREFIX}{}", self.0)
    }
}

impl TryFrom<String> for Slug {
    type Error = InvalidProductError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Slug::new(value)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

impl core::fmt::Display for Slug {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_product_passes() {
        let product = Product::new("Wireless Headphones", 9999, true, "wireless-headphones");
        assert_eq!(product.validate(), Ok(Slug::new("wireless-headphones").unwrap()));
        assert_eq!(product.price_in(Currency::Usd).to_string(), "$99.99");
    }

    #[test]
    fn zero_price_is_allowed() {
        assert!(Product::new("Sticker", 0, true, "sticker").validate().is_ok());
    }

    #[test]
    fn rejects_empty_name() {
        let err = Product::new("", 100, true, "x").validate().unwrap_err();
        assert_eq!(err.reason, InvalidProductReason::EmptyName);
        assert_eq!(err.slug.as_deref(), Some("x"));
    }

    #[test]
    fn whitespace_name_and_slug_are_not_empty() {
        let slug = Product::new(" ", 100, true, "x").validate().unwrap();
        assert_eq!(slug.as_str(), "x");

        let slug = Product::new("X", 100, true, " ").validate().unwrap();
        assert_eq!(slug.product_path(), "/products/ ");
    }

    #[test]
    fn validate_returns_the_checked_slug() {
        let slug = Product::new("Laptop Stand", 4999, false, "laptop-stand")
            .validate()
            .unwrap();
        assert_eq!(slug, Slug::new("laptop-stand").unwrap());

        let err = Product::new("X", -1, true, "x").validate().unwrap_err();
        assert_eq!(err.slug.as_deref(), Some("x"));
    }

    #[test]
    fn rejects_empty_slug() {
        let err = Product::new("X", 100, true, "").validate().unwrap_err();
        assert_eq!(err.reason, InvalidProductReason::EmptySlug);
        assert_eq!(err.slug, None);
    }

    #[test]
    fn rejects_negative_price() {
        let err = Product::new("X", -1, true, "x").validate().unwrap_err();
        assert_eq!(err.reason, InvalidProductReason::NegativePrice(-1));
    }

    #[test]
    fn name_is_checked_before_price() {
        let err = Product::new("", -5, false, "").validate().unwrap_err();
        assert_eq!(err.reason, InvalidProductReason::EmptyName);
    }

    #[test]
    fn deserializes_card_props() {
        let json = r#"{"name":"Smart Watch","price":24999,"inStock":true,"slug":"smart-watch"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product, Product::new("Smart Watch", 24999, true, "smart-watch"));

        let back = serde_json::to_value(&product).unwrap();
        assert_eq!(back["inStock"], serde_json::Value::Bool(true));
    }

    #[test]
    fn slug_builds_detail_path() {
        let slug = Slug::new("laptop-stand").unwrap();
        assert_eq!(slug.product_path(), "/products/laptop-stand");
        assert_eq!(slug.to_string(), "laptop-stand");
        assert!(Slug::new("").is_err());
        assert!(serde_json::from_str::<Slug>(r#""""#).is_err());
    }
}
