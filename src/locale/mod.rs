//! Locale data and fallback resolution.
//!
//! Locale tables are read-only data consumed through [`LocaleProvider`]. The
//! engine never branches on a language: everything locale specific is looked
//! up in the [`LocaleData`] of the first fallback-chain member the provider
//! knows.

mod builtin;

pub use builtin::BuiltinLocales;

/// Locale every fallback chain ends at.
pub const DEFAULT_LOCALE: &str = "en";

/// Upper bound on chain length; guards against cyclic parent tables.
const MAX_CHAIN_LEN: usize = 16;

/// Width of a calendar name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameWidth {
    /// "Jan", "Mon"
    Abbreviated,
    /// "January", "Monday"
    Wide,
    /// "J", "M"
    Narrow,
}

impl NameWidth {
    pub const ALL: [NameWidth; 3] = [NameWidth::Abbreviated, NameWidth::Wide, NameWidth::Narrow];

    /// Width selected by an LDML field repeat count of 3, 4 or 5.
    pub(crate) fn from_count(count: usize) -> Option<NameWidth> {
        match count {
            3 => Some(NameWidth::Abbreviated),
            4 => Some(NameWidth::Wide),
            5 => Some(NameWidth::Narrow),
            _ => None,
        }
    }
}

/// Grammatical context of a month name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameContext {
    /// Used inside a date ("2 марта")
    Format,
    /// Used on its own ("март")
    Standalone,
}

/// Names in the three widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Names<const N: usize> {
    pub abbreviated: [&'static str; N],
    pub wide: [&'static str; N],
    pub narrow: [&'static str; N],
}

impl<const N: usize> Names<N> {
    pub fn get(&self, width: NameWidth) -> &[&'static str; N] {
        match width {
            NameWidth::Abbreviated => &self.abbreviated,
            NameWidth::Wide => &self.wide,
            NameWidth::Narrow => &self.narrow,
        }
    }
}

/// Locale patterns for the named date formats that differ between locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePatterns {
    pub short_date: &'static str,
    pub short_time: &'static str,
    pub long_date: &'static str,
    pub long_time: &'static str,
    pub month_and_day: &'static str,
    pub month_and_year: &'static str,
    pub quarter_and_year: &'static str,
    pub short_date_short_time: &'static str,
    pub long_date_long_time: &'static str,
}

/// Read-only locale table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleData {
    pub months: Names<12>,
    pub months_standalone: Names<12>,
    pub days: Names<7>,
    pub quarters: Names<4>,
    /// AM and PM markers.
    pub periods: [&'static str; 2],
    pub date_patterns: DatePatterns,
    /// 0 = Sunday, 1 = Monday, ...
    pub first_day_of_week: u8,
    pub currency_symbol: &'static str,
    pub decimal_separator: char,
    pub thousands_separator: char,
    pub time_separator: char,
}

impl LocaleData {
    pub fn month_names(&self, width: NameWidth, context: NameContext) -> &[&'static str; 12] {
        match context {
            NameContext::Format => self.months.get(width),
            NameContext::Standalone => self.months_standalone.get(width),
        }
    }
}

/// Source of locale tables and parent-locale relations.
pub trait LocaleProvider: Send + Sync {
    /// Locale table for exactly this tag, if the provider has one.
    fn data(&self, tag: &str) -> Option<&LocaleData>;

    /// Explicit parent of `tag` (CLDR `parentLocales`), if listed.
    ///
    /// Returning `"root"` ends the chain walk.
    fn parent(&self, tag: &str) -> Option<&str>;
}

/// Ordered fallback chain for `tag`, most specific first, ending at
/// [`DEFAULT_LOCALE`].
///
/// Each step takes the provider's listed parent, or strips the rightmost
/// subtag when none is listed: `pt-AO → pt-PT → pt → en`.
pub fn fallback_chain(provider: &dyn LocaleProvider, tag: &str) -> Vec<String> {
    let mut chain: Vec<String> = Vec::new();
    let mut current = normalize_tag(tag);

    while !current.is_empty() && chain.len() < MAX_CHAIN_LEN {
        if chain.contains(&current) {
            break;
        }
        chain.push(current.clone());

        match provider.parent(&current) {
            Some("root") => break,
            Some(parent) => current = parent.to_string(),
            None => match current.rfind('-') {
                Some(index) => current.truncate(index),
                None => break,
            },
        }
    }

    if !chain.iter().any(|t| t == DEFAULT_LOCALE) {
        chain.push(DEFAULT_LOCALE.to_string());
    }
    chain
}

/// Locale table for `tag`: the first chain member the provider knows.
pub(crate) fn resolve_data<'p>(provider: &'p dyn LocaleProvider, tag: &str) -> &'p LocaleData {
    fallback_chain(provider, tag)
        .iter()
        .find_map(|t| provider.data(t))
        .unwrap_or(&builtin::EN)
}

fn normalize_tag(tag: &str) -> String {
    tag.trim().replace('_', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_uses_parent_table() {
        let provider = BuiltinLocales::new();
        assert_eq!(fallback_chain(&provider, "pt-AO"), vec!["pt-AO", "pt-PT", "pt", "en"]);
    }

    #[test]
    fn test_chain_strips_subtags() {
        let provider = BuiltinLocales::new();
        assert_eq!(fallback_chain(&provider, "de-AT-x"), vec!["de-AT-x", "de-AT", "de", "en"]);
        assert_eq!(fallback_chain(&provider, "en-US"), vec!["en-US", "en"]);
        assert_eq!(fallback_chain(&provider, "en"), vec!["en"]);
    }

    #[test]
    fn test_chain_accepts_underscores() {
        let provider = BuiltinLocales::new();
        assert_eq!(fallback_chain(&provider, "ru_RU"), vec!["ru-RU", "ru", "en"]);
    }

    #[test]
    fn test_resolve_data_walks_chain() {
        let provider = BuiltinLocales::new();
        assert_eq!(resolve_data(&provider, "ru-RU").first_day_of_week, 1);
        assert_eq!(resolve_data(&provider, "en-US").first_day_of_week, 0);
        assert_eq!(resolve_data(&provider, "xx").currency_symbol, "$");
    }

    #[test]
    fn test_width_from_count() {
        assert_eq!(NameWidth::from_count(3), Some(NameWidth::Abbreviated));
        assert_eq!(NameWidth::from_count(4), Some(NameWidth::Wide));
        assert_eq!(NameWidth::from_count(5), Some(NameWidth::Narrow));
        assert_eq!(NameWidth::from_count(2), None);
    }
}
