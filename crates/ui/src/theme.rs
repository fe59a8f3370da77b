//! Explicit theme configuration handed to the rendering layer.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Light or dark colour scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    pub fn as_str(self) -> &'static str {
        match self {
            Appearance::Light => "light",
            Appearance::Dark => "dark",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown appearance `{0}` (expected `light` or `dark`)")]
pub struct ParseAppearanceError(pub String);

impl FromStr for Appearance {
    type Err = ParseAppearanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Appearance::Light),
            "dark" => Ok(Appearance::Dark),
            _ => Err(ParseAppearanceError(s.to_string())),
        }
    }
}

/// Theme passed to every render call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub appearance: Appearance,
    /// CSS colour used for enabled card actions.
    pub accent: String,
}

pub const DEFAULT_ACCENT: &str = "#18181b";

impl Default for Theme {
    fn default() -> Self {
        Self {
            appearance: Appearance::Light,
            accent: DEFAULT_ACCENT.to_string(),
        }
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            appearance: Appearance::Dark,
            ..Self::default()
        }
    }

    /// Inline custom properties for the themed root element.
    pub fn css_vars(&self) -> String {
        format!("--card-accent: {};", self.accent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_appearance_case_insensitively() {
        assert_eq!("Dark".parse::<Appearance>(), Ok(Appearance::Dark));
        assert_eq!(" light ".parse::<Appearance>(), Ok(Appearance::Light));
        assert!("sepia".parse::<Appearance>().is_err());
    }

    #[test]
    fn default_theme_is_light_with_default_accent() {
        let theme = Theme::default();
        assert_eq!(theme.appearance, Appearance::Light);
        assert_eq!(theme.css_vars(), "--card-accent: #18181b;");
        assert_eq!(Theme::dark().appearance.as_str(), "dark");
    }
}
