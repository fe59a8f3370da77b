//! `storefront-ui` — the generic card capability.
//!
//! Cards are described as data ([`CardSections`]) through the [`Card`] trait
//! and rendered to static HTML with Leptos SSR. Styling is configured through
//! an explicit [`Theme`] on every call; there is no global theme state.
//!
//! ```rust
//! use storefront_ui::{render_card, CardAction, GenericCard, Theme};
//!
//! let card = GenericCard::new("First Card")
//!     .description("Card Description")
//!     .action(CardAction::label("Action"));
//!
//! let html = render_card(&card, &Theme::default());
//! assert!(html.contains("First Card"));
//! ```

pub mod card;
pub mod components;
pub mod styles;
pub mod theme;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

pub use card::{Card, CardAction, CardHeader, CardSections, GenericCard};
pub use components::{CardActionView, CardView};
pub use theme::{Appearance, ParseAppearanceError, Theme};

/// Render one card to an HTML fragment.
pub fn render_card(card: &dyn Card, theme: &Theme) -> String {
    let sections = card.sections();
    view! { <CardView sections=sections theme=theme.clone() /> }.to_html()
}
