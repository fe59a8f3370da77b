//! `storefront-web` — the storefront landing page.
//!
//! Assembles generic cards and product cards into a static HTML document
//! using Leptos server-side rendering. No hydration, no client runtime.
//!
//! ```rust
//! use storefront_web::{render_landing_page, LandingPage, SiteConfig};
//!
//! let html = render_landing_page(&LandingPage::demo(), &SiteConfig::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("$99.99"));
//! ```

pub mod components;
pub mod config;
pub mod landing;
pub mod slots;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use storefront_products::ProductCardRenderer;

pub use components::LandingDocument;
pub use config::{ConfigError, SiteConfig};
pub use landing::{LandingPage, NavLink};
pub use slots::{render_product_slots, CardSlot};

/// Render the complete landing page document, `<!DOCTYPE html>` included.
///
/// Products that fail validation are shown as placeholder cards; the rest of
/// the page still renders.
pub fn render_landing_page(page: &LandingPage, config: &SiteConfig) -> String {
    let renderer = ProductCardRenderer::new(config.currency);
    let slots = render_product_slots(&page.products, &renderer);
    let placeholders = slots.iter().filter(|slot| slot.is_placeholder()).count();

    tracing::info!(
        generic_cards = page.generic_cards.len(),
        products = slots.len() - placeholders,
        placeholders,
        theme = config.theme.appearance.as_str(),
        "rendering landing page"
    );

    let doc = view! {
        <LandingDocument page=page.clone() slots=slots theme=config.theme.clone() />
    };

    // Leptos doesn't emit a doctype
    format!("<!DOCTYPE html>\n{}", doc.to_html())
}
