//! Site configuration, read from the environment.

use std::path::PathBuf;

use storefront_products::{Currency, ParseCurrencyError};
use storefront_ui::{Appearance, ParseAppearanceError, Theme};
use thiserror::Error;

pub const THEME_ENV: &str = "STOREFRONT_THEME";
pub const ACCENT_ENV: &str = "STOREFRONT_ACCENT";
pub const CURRENCY_ENV: &str = "STOREFRONT_CURRENCY";
pub const OUTPUT_ENV: &str = "STOREFRONT_OUT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("STOREFRONT_THEME: {0}")]
    Theme(#[from] ParseAppearanceError),

    #[error("STOREFRONT_CURRENCY: {0}")]
    Currency(#[from] ParseCurrencyError),

    #[error("STOREFRONT_ACCENT cannot be blank")]
    BlankAccent,
}

/// Everything the page renderer needs besides the page content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SiteConfig {
    pub theme: Theme,
    pub currency: Currency,
    /// Where to write the page; stdout when `None`.
    pub output: Option<PathBuf>,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = SiteConfig::default();

        if let Some(value) = lookup(THEME_ENV) {
            config.theme.appearance = value.parse::<Appearance>()?;
        }

        if let Some(value) = lookup(ACCENT_ENV) {
            if value.trim().is_empty() {
                return Err(ConfigError::BlankAccent);
            }
            config.theme.accent = value.trim().to_string();
        }

        match lookup(CURRENCY_ENV) {
            Some(value) => config.currency = value.parse::<Currency>()?,
            None => tracing::debug!(currency = %config.currency, "no currency configured; using default"),
        }

        config.output = lookup(OUTPUT_ENV)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = SiteConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.currency, Currency::Usd);
        assert_eq!(config.theme, Theme::default());
        assert_eq!(config.output, None);
    }

    #[test]
    fn reads_every_setting() {
        let config = SiteConfig::from_lookup(lookup(&[
            (THEME_ENV, "dark"),
            (ACCENT_ENV, " #2563eb "),
            (CURRENCY_ENV, "eur"),
            (OUTPUT_ENV, "out/index.html"),
        ]))
        .unwrap();

        assert_eq!(config.theme.appearance, Appearance::Dark);
        assert_eq!(config.theme.accent, "#2563eb");
        assert_eq!(config.currency, Currency::Eur);
        assert_eq!(config.output, Some(PathBuf::from("out/index.html")));
    }

    #[test]
    fn rejects_unknown_values() {
        let err = SiteConfig::from_lookup(lookup(&[(CURRENCY_ENV, "BTC")])).unwrap_err();
        assert_eq!(err, ConfigError::Currency(ParseCurrencyError("BTC".to_string())));
        assert_eq!(
            err.to_string(),
            "STOREFRONT_CURRENCY: unsupported currency code `BTC`"
        );

        let err = SiteConfig::from_lookup(lookup(&[(THEME_ENV, "neon")])).unwrap_err();
        assert!(matches!(err, ConfigError::Theme(_)));

        let err = SiteConfig::from_lookup(lookup(&[(ACCENT_ENV, "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::BlankAccent);
    }

    #[test]
    fn blank_output_means_stdout() {
        let config = SiteConfig::from_lookup(lookup(&[(OUTPUT_ENV, "")])).unwrap();
        assert_eq!(config.output, None);
    }
}
