//! Products display module.
//!
//! Maps a [`Product`] record to the card a shopper sees: title, formatted
//! price, availability label and a "view product" control. Everything here is
//! pure (no IO, no shared state); rendering of the resulting card is delegated
//! to the generic card capability in `storefront-ui`.

pub mod error;
pub mod money;
pub mod product;
pub mod renderer;
pub mod view;

pub use error::{InvalidProductError, InvalidProductReason};
pub use money::{
    parse_formatted, Currency, CurrencyFormatter, LocaleFormatter, Money, MoneyParseError,
    ParseCurrencyError,
};
pub use product::{Product, Slug};
pub use renderer::{render_product_card, ProductCardRenderer};
pub use view::{ActionControl, Availability, ProductCardView};
