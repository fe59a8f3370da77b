//! Landing page content.

use serde::{Deserialize, Serialize};
use storefront_products::Product;
use storefront_ui::{CardAction, GenericCard};

pub const GENERIC_SECTION_TITLE: &str = "Generic Cards (from @workspace/ui)";
pub const PRODUCT_SECTION_TITLE: &str = "Product Cards (from @workspace/products-frontend)";

/// A static image asset with fixed dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageImage {
    pub src: String,
    pub alt: String,
    pub width: u32,
    pub height: u32,
    /// Invert colours under the dark theme (monochrome marks).
    pub invert_on_dark: bool,
}

impl PageImage {
    pub fn new(src: impl Into<String>, alt: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            width,
            height,
            invert_on_dark: false,
        }
    }

    pub fn invert_on_dark(mut self) -> Self {
        self.invert_on_dark = true;
        self
    }
}

/// An outbound link in the page's call-to-action row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    /// Opens in a new tab with `rel="noopener noreferrer"`.
    pub external: bool,
    pub icon: Option<PageImage>,
}

impl NavLink {
    pub fn external(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            external: true,
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: PageImage) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// Everything shown on the landing page. The page owns its product list;
/// products are rendered one card each, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandingPage {
    pub title: String,
    pub logo: PageImage,
    pub generic_cards: Vec<GenericCard>,
    pub products: Vec<Product>,
    pub links: Vec<NavLink>,
}

impl LandingPage {
    /// The demo page: three generic cards, three products, two links.
    pub fn demo() -> Self {
        let generic_cards = vec![
            GenericCard::new("First Card")
                .description("Card Description")
                .action(CardAction::label("Action"))
                .content("Card Content")
                .footer("Card Footer"),
            GenericCard::new("Second Card")
                .description("Another description")
                .action(CardAction::label("Action"))
                .content("More content here")
                .footer("Footer text"),
            GenericCard::new("Third Card")
                .description("Yet another card")
                .action(CardAction::label("Do it"))
                .content("Even more content")
                .footer("Final footer"),
        ];

        let products = vec![
            Product::new("Wireless Headphones", 9999, true, "wireless-headphones"),
            Product::new("Smart Watch", 24999, true, "smart-watch"),
            Product::new("Laptop Stand", 4999, false, "laptop-stand"),
        ];

        let links = vec![
            NavLink::external(
                "Deploy Now",
                "https://vercel.com/new?utm_source=create-next-app&utm_medium=appdir-template-tw&utm_campaign=create-next-app",
            )
            .with_icon(PageImage::new("/vercel.svg", "Vercel logomark", 16, 16).invert_on_dark()),
            NavLink::external(
                "Documentation",
                "https://nextjs.org/docs?utm_source=create-next-app&utm_medium=appdir-template-tw&utm_campaign=create-next-app",
            ),
        ];

        Self {
            title: "Storefront".to_string(),
            logo: PageImage::new("/next.svg", "Next.js logo", 100, 20).invert_on_dark(),
            generic_cards,
            products,
            links,
        }
    }
}
