//! Product card renderer: [`Product`] in, [`ProductCardView`] out.

use crate::error::InvalidProductError;
use crate::money::{Currency, CurrencyFormatter, LocaleFormatter};
use crate::product::Product;
use crate::view::{ActionControl, Availability, ProductCardView};

/// Renders products priced in one currency.
///
/// Holds no mutable state, so a single renderer can be shared across threads
/// and products rendered in any order.
#[derive(Debug, Clone)]
pub struct ProductCardRenderer<F = LocaleFormatter> {
    currency: Currency,
    formatter: F,
}

impl ProductCardRenderer {
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            formatter: LocaleFormatter,
        }
    }
}

impl Default for ProductCardRenderer {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

impl<F: CurrencyFormatter> ProductCardRenderer<F> {
    pub fn with_formatter(currency: Currency, formatter: F) -> Self {
        Self {
            currency,
            formatter,
        }
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Validate `product` and derive its card view.
    pub fn render(&self, product: &Product) -> Result<ProductCardView, InvalidProductError> {
        let slug = product.validate()?;

        let availability = Availability::from_in_stock(product.in_stock);
        let action = if availability.is_in_stock() {
            ActionControl::navigate(slug.product_path())
        } else {
            ActionControl::unavailable()
        };

        tracing::debug!(
            slug = %slug,
            in_stock = product.in_stock,
            currency = %self.currency,
            "rendered product card"
        );

        Ok(ProductCardView {
            title: product.name.clone(),
            formatted_price: self.formatter.format(product.price, self.currency),
            availability,
            action,
        })
    }
}

/// Render with USD pricing and the default formatter.
pub fn render_product_card(product: &Product) -> Result<ProductCardView, InvalidProductError> {
    ProductCardRenderer::new(Currency::Usd).render(product)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidProductReason;
    use crate::money::parse_formatted;

    #[test]
    fn in_stock_product_gets_enabled_link() {
        let product = Product::new("Wireless Headphones", 9999, true, "wireless-headphones");
        let view = render_product_card(&product).unwrap();

        assert_eq!(view.title, "Wireless Headphones");
        assert_eq!(view.formatted_price, "$99.99");
        assert_eq!(view.availability_label(), "In Stock");
        assert!(view.action.enabled);
        assert_eq!(
            view.action.target.as_deref(),
            Some("/products/wireless-headphones")
        );
    }

    #[test]
    fn out_of_stock_product_gets_disabled_control() {
        let product = Product::new("Laptop Stand", 4999, false, "laptop-stand");
        let view = render_product_card(&product).unwrap();

        assert_eq!(view.title, "Laptop Stand");
        assert_eq!(view.formatted_price, "$49.99");
        assert_eq!(view.availability_label(), "Out of Stock");
        assert!(!view.action.enabled);
        assert_eq!(view.action.target, None);
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = render_product_card(&Product::new("", 100, true, "x")).unwrap_err();
        assert_eq!(err.reason, InvalidProductReason::EmptyName);
    }

    #[test]
    fn negative_price_is_rejected() {
        let err = render_product_card(&Product::new("X", -1, true, "x")).unwrap_err();
        assert_eq!(err.reason, InvalidProductReason::NegativePrice(-1));
    }

    #[test]
    fn blank_name_is_displayed_verbatim() {
        let view = render_product_card(&Product::new(" ", 100, true, "x")).unwrap();
        assert_eq!(view.title, " ");
        assert_eq!(view.action.target.as_deref(), Some("/products/x"));
    }

    #[test]
    fn view_serializes_as_rendered_card_contract() {
        let view = render_product_card(&Product::new(
            "Wireless Headphones",
            9999,
            true,
            "wireless-headphones",
        ))
        .unwrap();
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["title"], "Wireless Headphones");
        assert_eq!(json["formattedPrice"], "$99.99");
        assert_eq!(json["availabilityLabel"], "In Stock");
        assert_eq!(json["actionControl"]["enabled"], true);
        assert_eq!(json["actionControl"]["target"], "/products/wireless-headphones");

        let view = render_product_card(&Product::new("Laptop Stand", 4999, false, "laptop-stand"))
            .unwrap();
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["title"], "Laptop Stand");
        assert_eq!(json["formattedPrice"], "$49.99");
        assert_eq!(json["availabilityLabel"], "Out of Stock");
        assert_eq!(json["actionControl"]["enabled"], false);
        assert_eq!(json["actionControl"]["target"], serde_json::Value::Null);
        assert!(json.get("availability").is_none());
        assert!(json.get("action").is_none());

        let back: ProductCardView = serde_json::from_value(json).unwrap();
        assert_eq!(back, view);
    }

    #[test]
    fn custom_formatter_is_used() {
        struct CodeSuffix;
        impl CurrencyFormatter for CodeSuffix {
            fn format(&self, minor: i64, currency: Currency) -> String {
                format!("{minor} {currency}")
            }
        }

        let renderer = ProductCardRenderer::with_formatter(Currency::Eur, CodeSuffix);
        let view = renderer.render(&Product::new("X", 5, true, "x")).unwrap();
        assert_eq!(view.formatted_price, "5 EUR");
        assert_eq!(renderer.currency(), Currency::Eur);
    }

    #[test]
    fn renders_independently_across_threads() {
        let renderer = &ProductCardRenderer::new(Currency::Usd);
        let products: Vec<Product> = (0..32)
            .map(|i| Product::new(format!("Item {i}"), i * 101, i % 2 == 0, format!("item-{i}")))
            .collect();

        let sequential: Vec<_> = products.iter().map(|p| renderer.render(p)).collect();
        let parallel: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = products
                .iter()
                .rev()
                .map(|p| scope.spawn(move || renderer.render(p)))
                .collect();
            let mut results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
            results.reverse();
            results
        });

        assert_eq!(sequential, parallel);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn product_strategy() -> impl Strategy<Value = Product> {
            (
                "[A-Za-z][A-Za-z0-9 ]{0,40}",
                0i64..=i64::MAX,
                any::<bool>(),
                "[a-z0-9][a-z0-9-]{0,30}",
            )
                .prop_map(|(name, price, in_stock, slug)| {
                    Product::new(name, price, in_stock, slug)
                })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: the formatted price parses back to the input price.
            #[test]
            fn formatted_price_round_trips(product in product_strategy()) {
                let view = render_product_card(&product).unwrap();
                prop_assert_eq!(parse_formatted(&view.formatted_price, Currency::Usd), Ok(product.price));
            }

            /// Property: label, enabled state and target all follow `in_stock`.
            #[test]
            fn stock_drives_label_and_action(product in product_strategy()) {
                let view = render_product_card(&product).unwrap();

                prop_assert_eq!(view.availability_label() == "In Stock", product.in_stock);
                prop_assert_eq!(view.action.enabled, product.in_stock);
                if product.in_stock {
                    prop_assert_eq!(view.action.target, Some(format!("/products/{}", product.slug)));
                } else {
                    prop_assert_eq!(view.action.target, None);
                }
                prop_assert_eq!(view.title, product.name);
            }

            /// Property: malformed products never produce a view.
            #[test]
            fn malformed_products_fail(
                product in product_strategy(),
                breakage in 0u8..3,
                negative in i64::MIN..0,
            ) {
                let mut product = product;
                match breakage {
                    0 => product.name.clear(),
                    1 => product.slug.clear(),
                    _ => product.price = negative,
                }
                prop_assert!(render_product_card(&product).is_err());
            }
        }
    }
}
