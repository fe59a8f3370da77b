//! Money in minor units and its display formatting.
//!
//! Amounts are stored as integer minor units (cents for USD). Formatting splits
//! them with integer division and never goes through floating point, so every
//! formatted amount parses back to exactly the value it came from.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use storefront_core::ValueObject;
use thiserror::Error;

/// Currencies the storefront can display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Jpy,
}

impl Currency {
    /// ISO 4217 code.
    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Jpy => "¥",
        }
    }

    /// Number of minor-unit digits (2 for cents, 0 for yen).
    pub fn exponent(self) -> u32 {
        match self {
            Currency::Jpy => 0,
            _ => 2,
        }
    }

    /// Minor units per major unit.
    pub fn scale(self) -> u64 {
        10u64.pow(self.exponent())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unsupported currency code `{0}`")]
pub struct ParseCurrencyError(pub String);

impl FromStr for Currency {
    type Err = ParseCurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "GBP" => Ok(Currency::Gbp),
            "JPY" => Ok(Currency::Jpy),
            _ => Err(ParseCurrencyError(s.to_string())),
        }
    }
}

/// An amount of money in minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    pub minor: i64,
    pub currency: Currency,
}

impl ValueObject for Money {}

impl Money {
    pub fn new(minor: i64, currency: Currency) -> Self {
        Self { minor, currency }
    }

    /// Whole major units, ignoring sign.
    pub fn major(&self) -> u64 {
        self.minor.unsigned_abs() / self.currency.scale()
    }

    /// Leftover minor units after [`Money::major`], ignoring sign.
    pub fn minor_remainder(&self) -> u64 {
        self.minor.unsigned_abs() % self.currency.scale()
    }

    pub fn is_negative(&self) -> bool {
        self.minor < 0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&LocaleFormatter.format(self.minor, self.currency))
    }
}

/// Turns a minor-unit amount into display text.
///
/// This is the seam for locale-specific formatting; the storefront ships with
/// [`LocaleFormatter`].
pub trait CurrencyFormatter: Send + Sync {
    fn format(&self, minor: i64, currency: Currency) -> String;
}

/// en-US style formatting: `$1,234,567.89`, `-$0.50`, `¥500`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocaleFormatter;

const GROUP_SEPARATOR: char = ',';
const DECIMAL_SEPARATOR: char = '.';

impl CurrencyFormatter for LocaleFormatter {
    fn format(&self, minor: i64, currency: Currency) -> String {
        let money = Money::new(minor, currency);
        let mut out = String::new();

        if money.is_negative() {
            out.push('-');
        }
        out.push_str(currency.symbol());
        out.push_str(&group_thousands(money.major()));

        let exponent = currency.exponent() as usize;
        if exponent > 0 {
            out.push(DECIMAL_SEPARATOR);
            out.push_str(&format!("{:0width$}", money.minor_remainder(), width = exponent));
        }

        out
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    #[error("missing currency symbol `{0}`")]
    MissingSymbol(&'static str),

    #[error("malformed amount `{0}`")]
    Malformed(String),

    #[error("expected {expected} fractional digits, found {found}")]
    FractionDigits { expected: u32, found: usize },

    #[error("amount does not fit in 64-bit minor units")]
    Overflow,
}

/// Parse text produced by [`LocaleFormatter`] back into minor units.
pub fn parse_formatted(text: &str, currency: Currency) -> Result<i64, MoneyParseError> {
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let rest = rest
        .strip_prefix(currency.symbol())
        .ok_or(MoneyParseError::MissingSymbol(currency.symbol()))?;

    let (major_text, fraction_text) = match rest.split_once(DECIMAL_SEPARATOR) {
        Some((major, fraction)) => (major, Some(fraction)),
        None => (rest, None),
    };

    let major = parse_grouped(major_text)?;

    let exponent = currency.exponent();
    let fraction = match fraction_text {
        Some(fraction) => {
            if fraction.len() != exponent as usize || exponent == 0 {
                return Err(MoneyParseError::FractionDigits {
                    expected: exponent,
                    found: fraction.len(),
                });
            }
            parse_digits(fraction)?
        }
        None if exponent == 0 => 0,
        None => {
            return Err(MoneyParseError::FractionDigits {
                expected: exponent,
                found: 0,
            });
        }
    };

    let magnitude = major
        .checked_mul(currency.scale())
        .and_then(|m| m.checked_add(fraction))
        .ok_or(MoneyParseError::Overflow)?;

    if negative {
        0i64.checked_sub_unsigned(magnitude)
            .ok_or(MoneyParseError::Overflow)
    } else {
        i64::try_from(magnitude).map_err(|_| MoneyParseError::Overflow)
    }
}

fn parse_grouped(text: &str) -> Result<u64, MoneyParseError> {
    let malformed = || MoneyParseError::Malformed(text.to_string());

    let mut groups = text.split(GROUP_SEPARATOR);
    let first = groups.next().ok_or_else(malformed)?;
    // The formatter always groups, so a leading group is 1 to 3 digits.
    if first.is_empty() || first.len() > 3 {
        return Err(malformed());
    }

    let mut digits = String::from(first);
    for group in groups {
        if group.len() != 3 {
            return Err(malformed());
        }
        digits.push_str(group);
    }

    if digits.len() > 1 && digits.starts_with('0') {
        return Err(malformed());
    }

    parse_digits(&digits).map_err(|err| match err {
        MoneyParseError::Overflow => MoneyParseError::Overflow,
        _ => malformed(),
    })
}

fn parse_digits(text: &str) -> Result<u64, MoneyParseError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MoneyParseError::Malformed(text.to_string()));
    }
    text.parse::<u64>().map_err(|_| MoneyParseError::Overflow)
}
