//! The derived, render-ready shape of a product card.

use serde::{Deserialize, Serialize};
use storefront_ui::{Card, CardAction, CardHeader, CardSections};

pub const IN_STOCK_LABEL: &str = "In Stock";
pub const OUT_OF_STOCK_LABEL: &str = "Out of Stock";
pub const VIEW_PRODUCT_LABEL: &str = "View Product";
pub const UNAVAILABLE_HINT: &str = "Currently unavailable";

/// Stock state; serialized as its shopper-facing label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl Availability {
    pub fn from_in_stock(in_stock: bool) -> Self {
        if in_stock {
            Availability::InStock
        } else {
            Availability::OutOfStock
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Availability::InStock => IN_STOCK_LABEL,
            Availability::OutOfStock => OUT_OF_STOCK_LABEL,
        }
    }

    pub fn is_in_stock(self) -> bool {
        self == Availability::InStock
    }
}

/// The card's "view product" control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionControl {
    pub label: String,
    pub enabled: bool,
    /// Navigation target; always `None` when disabled.
    pub target: Option<String>,
    /// Tooltip shown on a disabled control.
    pub hint: Option<String>,
}

impl ActionControl {
    pub fn navigate(target: String) -> Self {
        Self {
            label: VIEW_PRODUCT_LABEL.to_string(),
            enabled: true,
            target: Some(target),
            hint: None,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            label: VIEW_PRODUCT_LABEL.to_string(),
            enabled: false,
            target: None,
            hint: Some(UNAVAILABLE_HINT.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCardView {
    pub title: String,
    pub formatted_price: String,
    #[serde(rename = "availabilityLabel")]
    pub availability: Availability,
    #[serde(rename = "actionControl")]
    pub action: ActionControl,
}

impl ProductCardView {
    pub fn availability_label(&self) -> &'static str {
        self.availability.label()
    }
}

impl Card for ProductCardView {
    fn sections(&self) -> CardSections {
        let action = CardAction {
            label: self.action.label.clone(),
            href: self.action.target.clone(),
            enabled: self.action.enabled,
            hint: self.action.hint.clone(),
        };

        CardSections {
            header: CardHeader {
                title: self.title.clone(),
                description: Some(self.availability_label().to_string()),
                action: Some(action),
            },
            content: Some(self.formatted_price.clone()),
            footer: None,
        }
    }
}
