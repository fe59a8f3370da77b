//! The generic card capability.
//!
//! A card is a fixed set of sections: a header (title, optional description,
//! optional action), an optional content block and an optional footer. Any
//! type that can describe itself in those terms implements [`Card`] and can be
//! rendered by [`crate::render_card`].

use serde::{Deserialize, Serialize};

/// Something that can be laid out as a card.
pub trait Card {
    /// Sections to render, derived from the implementor's state.
    fn sections(&self) -> CardSections;
}

/// Header section of a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardHeader {
    pub title: String,
    pub description: Option<String>,
    pub action: Option<CardAction>,
}

/// An interactive control in the card header.
///
/// Enabled actions with an `href` render as links; anything else renders as a
/// disabled button, with `hint` surfaced as its tooltip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardAction {
    pub label: String,
    pub href: Option<String>,
    pub enabled: bool,
    pub hint: Option<String>,
}

impl CardAction {
    /// A plain label with no navigation (the generic cards' "Action" slot).
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
            enabled: true,
            hint: None,
        }
    }

    /// An enabled control navigating to `href`.
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
            enabled: true,
            hint: None,
        }
    }

    /// A disabled control with no target.
    pub fn disabled(label: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
            enabled: false,
            hint,
        }
    }

    /// The navigation target, if this control is both enabled and linked.
    pub fn target(&self) -> Option<&str> {
        if self.enabled { self.href.as_deref() } else { None }
    }
}

/// All sections of a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSections {
    pub header: CardHeader,
    pub content: Option<String>,
    pub footer: Option<String>,
}

impl CardSections {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            header: CardHeader {
                title: title.into(),
                description: None,
                action: None,
            },
            content: None,
            footer: None,
        }
    }
}

/// A card with free-form text sections, for content that is not a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericCard {
    sections: CardSections,
}

impl GenericCard {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            sections: CardSections::titled(title),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.sections.header.description = Some(description.into());
        self
    }

    pub fn action(mut self, action: CardAction) -> Self {
        self.sections.header.action = Some(action);
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.sections.content = Some(content.into());
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.sections.footer = Some(footer.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.sections.header.title
    }
}

impl Card for GenericCard {
    fn sections(&self) -> CardSections {
        self.sections.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_card_builder_fills_every_section() {
        let card = GenericCard::new("First Card")
            .description("Card Description")
            .action(CardAction::label("Action"))
            .content("Card Content")
            .footer("Card Footer");

        let sections = card.sections();
        assert_eq!(sections.header.title, "First Card");
        assert_eq!(sections.header.description.as_deref(), Some("Card Description"));
        assert_eq!(sections.header.action, Some(CardAction::label("Action")));
        assert_eq!(sections.content.as_deref(), Some("Card Content"));
        assert_eq!(sections.footer.as_deref(), Some("Card Footer"));
    }

    #[test]
    fn bare_card_has_only_a_title() {
        let sections = GenericCard::new("Only title").sections();
        assert_eq!(sections, CardSections::titled("Only title"));
    }

    #[test]
    fn disabled_action_has_no_target_even_with_href() {
        let mut action = CardAction::link("Go", "/somewhere");
        assert_eq!(action.target(), Some("/somewhere"));

        action.enabled = false;
        assert_eq!(action.target(), None);
        assert_eq!(CardAction::disabled("Go", None).target(), None);
    }
}
