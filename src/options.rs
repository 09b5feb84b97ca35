//! Engine configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a negative currency amount is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum NegativeCurrencyStyle {
    /// `-$1.00`
    #[default]
    Minus,
    /// `($1.00)`
    Accounting,
}

/// Process-wide overrides applied on top of the current locale's defaults.
///
/// A `None` separator means "use the locale's separator". Overrides stay in
/// effect until replaced or reset with [`Localization::reset_config`].
///
/// [`Localization::reset_config`]: crate::Localization::reset_config
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Config {
    /// Decimal separator override.
    pub decimal_separator: Option<char>,
    /// Thousands (grouping) separator override.
    pub thousands_separator: Option<char>,
    /// Rendering of negative currency values.
    pub negative_currency: NegativeCurrencyStyle,
}

impl Config {
    /// Configuration with both separators overridden.
    pub fn with_separators(decimal: char, thousands: char) -> Self {
        Config {
            decimal_separator: Some(decimal),
            thousands_separator: Some(thousands),
            ..Config::default()
        }
    }
}

/// Resolved separators used by a single format or parse call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Separators {
    pub decimal: char,
    pub thousands: char,
}
