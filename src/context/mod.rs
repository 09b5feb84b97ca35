//! The localization context: current locale, configuration, messages and
//! compiled pattern caches.
//!
//! Every operation reads the current locale when it runs, so a call to
//! [`Localization::set_locale`] is visible to the next format or parse.

mod date;
mod messages;
mod number;

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::{Arc, Mutex};

use crate::ast::{DatePattern, NumberPattern};
use crate::cache::PatternCache;
use crate::locale::{
    fallback_chain, resolve_data, BuiltinLocales, LocaleData, LocaleProvider, NameContext,
    NameWidth, DEFAULT_LOCALE,
};
use crate::message::MessageCatalog;
use crate::options::{Config, Separators};
use crate::warning::{TracingSink, Warning, WarningSink};

/// Prefix marking a message key in [`Localization::localize_string`].
pub const DEFAULT_LOCALIZABLE_PREFIX: char = '@';

/// Locale-aware formatting and parsing of dates, numbers and messages.
///
/// # Examples
/// ```
/// use ldmlfmt::Localization;
///
/// let mut l10n = Localization::new();
/// assert_eq!(l10n.format_number(4119626293.0, "largeNumber"), "4B");
///
/// l10n.set_locale("de");
/// assert_eq!(l10n.get_decimal_separator(), ',');
/// ```
pub struct Localization {
    locale: String,
    config: Config,
    provider: Arc<dyn LocaleProvider>,
    sink: Arc<dyn WarningSink>,
    catalog: MessageCatalog,
    missing: Mutex<HashMap<String, String>>,
    localizable_prefix: char,
    number_patterns: PatternCache<NumberPattern>,
    date_patterns: PatternCache<DatePattern>,
    /// Date patterns already checked for ambiguous fields.
    parse_checked: Mutex<HashSet<String>>,
}

impl Localization {
    /// Context for `en` with the built-in locales and warnings sent to
    /// `tracing`.
    pub fn new() -> Self {
        Localization {
            locale: DEFAULT_LOCALE.to_string(),
            config: Config::default(),
            provider: Arc::new(BuiltinLocales::new()),
            sink: Arc::new(TracingSink),
            catalog: MessageCatalog::new(),
            missing: Mutex::new(HashMap::new()),
            localizable_prefix: DEFAULT_LOCALIZABLE_PREFIX,
            number_patterns: PatternCache::new(),
            date_patterns: PatternCache::new(),
            parse_checked: Mutex::new(HashSet::new()),
        }
    }

    /// Replace the source of locale tables.
    pub fn with_provider(mut self, provider: impl LocaleProvider + 'static) -> Self {
        self.provider = Arc::new(provider);
        self
    }

    /// Replace the receiver of warnings.
    pub fn with_warning_sink(mut self, sink: Arc<dyn WarningSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
    }

    /// Fallback chain of the current locale.
    pub fn locale_chain(&self) -> Vec<String> {
        fallback_chain(self.provider.as_ref(), &self.locale)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replace the configuration.
    pub fn configure(&mut self, config: Config) {
        self.config = config;
    }

    /// Drop every override and use the locale's defaults again.
    pub fn reset_config(&mut self) {
        self.config = Config::default();
    }

    pub fn get_month_names(&self, width: NameWidth, context: NameContext) -> [&'static str; 12] {
        *self.locale_data().month_names(width, context)
    }

    pub fn get_day_names(&self, width: NameWidth) -> [&'static str; 7] {
        *self.locale_data().days.get(width)
    }

    /// AM and PM markers.
    pub fn get_period_names(&self) -> [&'static str; 2] {
        self.locale_data().periods
    }

    pub fn get_quarter_names(&self, width: NameWidth) -> [&'static str; 4] {
        *self.locale_data().quarters.get(width)
    }

    pub fn get_time_separator(&self) -> char {
        self.locale_data().time_separator
    }

    /// First day of the week, 0 = Sunday.
    pub fn first_day_of_week_index(&self) -> u8 {
        self.locale_data().first_day_of_week
    }

    /// Decimal separator in effect: the configured one, else the locale's.
    pub fn get_decimal_separator(&self) -> char {
        self.separators().decimal
    }

    /// Thousands separator in effect: the configured one, else the locale's.
    pub fn get_thousands_separator(&self) -> char {
        self.separators().thousands
    }

    pub(crate) fn locale_data(&self) -> &LocaleData {
        resolve_data(self.provider.as_ref(), &self.locale)
    }

    pub(crate) fn separators(&self) -> Separators {
        let locale = self.locale_data();
        Separators {
            decimal: self.config.decimal_separator.unwrap_or(locale.decimal_separator),
            thousands: self.config.thousands_separator.unwrap_or(locale.thousands_separator),
        }
    }

    pub(crate) fn warn(&self, warning: Warning) {
        self.sink.warn(&warning.to_string());
    }

    pub(crate) fn warn_invalid(&self, pattern: &str, reason: impl fmt::Display) {
        self.warn(Warning::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        });
    }
}

impl Default for Localization {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Localization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Localization")
            .field("locale", &self.locale)
            .field("config", &self.config)
            .field("localizable_prefix", &self.localizable_prefix)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_overrides_locale_separators() {
        let mut l10n = Localization::new();
        l10n.set_locale("ru");
        assert_eq!(l10n.get_decimal_separator(), ',');
        assert_eq!(l10n.get_thousands_separator(), '\u{a0}');

        l10n.configure(Config::with_separators('.', ','));
        assert_eq!(l10n.get_decimal_separator(), '.');

        l10n.reset_config();
        assert_eq!(l10n.get_thousands_separator(), '\u{a0}');
    }

    #[test]
    fn test_locale_chain_follows_current_locale() {
        let mut l10n = Localization::new();
        l10n.set_locale("pt-AO");
        assert_eq!(l10n.locale_chain(), vec!["pt-AO", "pt-PT", "pt", "en"]);
        assert_eq!(l10n.locale_data().currency_symbol, "€");
    }
}
