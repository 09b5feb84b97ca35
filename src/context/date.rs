use std::sync::Arc;

use chrono::{Local, NaiveDateTime};

use super::Localization;
use crate::ast::{DatePartKind, DatePattern};
use crate::descriptor::{DateFormat, Normalized};
use crate::formatter::format_date;
use crate::named::NamedDateFormat;
use crate::parser::parse_date_pattern;
use crate::scanner::{infer_pattern, scan_date};
use crate::warning::Warning;

impl Localization {
    /// Format a date.
    ///
    /// Returns `None` for a missing value or a pattern that does not compile.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use ldmlfmt::Localization;
    ///
    /// let l10n = Localization::new();
    /// let date = NaiveDate::from_ymd_opt(2015, 3, 2).unwrap().and_hms_opt(3, 4, 5).unwrap();
    /// assert_eq!(l10n.format_date(Some(&date), "shortDate").as_deref(), Some("3/2/2015"));
    /// assert_eq!(l10n.format_date(Some(&date), "quarterAndYear").as_deref(), Some("Q1 2015"));
    /// ```
    pub fn format_date(
        &self,
        value: Option<&NaiveDateTime>,
        format: impl Into<DateFormat>,
    ) -> Option<String> {
        let value = value?;
        let format = format.into();

        if let Normalized::Custom {
            formatter: Some(formatter),
            ..
        } = format.normalize()
        {
            return Some(formatter(value));
        }

        match self.date_pattern_text(&format) {
            Some(pattern) => {
                let compiled = self.compile_date_pattern(pattern)?;
                Some(format_date(value, &compiled, self.locale_data()))
            }
            None => Some(value.to_string()),
        }
    }

    /// Parse a date, filling missing components from the current local time.
    pub fn parse_date(&self, text: &str, format: impl Into<DateFormat>) -> Option<NaiveDateTime> {
        self.parse_date_at(text, format, Local::now().naive_local())
    }

    /// Parse a date, filling missing components from `now`.
    ///
    /// A custom parser replaces parsing entirely. A custom formatter without
    /// a parser is probed for a pattern to parse with; when none can be
    /// inferred a warning is raised and `None` returned.
    pub fn parse_date_at(
        &self,
        text: &str,
        format: impl Into<DateFormat>,
        now: NaiveDateTime,
    ) -> Option<NaiveDateTime> {
        if text.is_empty() {
            return None;
        }
        let format = format.into();

        let compiled = match format.normalize() {
            Normalized::Custom {
                parser: Some(parser),
                ..
            } => return parser(text),
            Normalized::Custom {
                formatter: Some(formatter),
                parser: None,
            } => {
                let Some(inferred) = infer_pattern(&**formatter, self.locale_data()) else {
                    self.warn(Warning::DateParserMissing);
                    return None;
                };
                self.compile_date_pattern(&inferred)?
            }
            _ => {
                let pattern = self
                    .date_pattern_text(&format)
                    .unwrap_or_else(|| NamedDateFormat::ShortDate.pattern(self.locale_data()));
                let compiled = self.compile_date_pattern(pattern)?;
                self.check_ambiguity(pattern, &compiled);
                compiled
            }
        };

        scan_date(text, &compiled, self.locale_data(), now)
    }

    /// Whether the format renders a wide month name.
    pub fn format_uses_month_name(&self, format: impl Into<DateFormat>) -> bool {
        self.compiled_for_inspection(format.into())
            .is_some_and(|pattern| pattern.uses_month_name())
    }

    /// Whether the format renders a wide day-of-week name.
    pub fn format_uses_day_name(&self, format: impl Into<DateFormat>) -> bool {
        self.compiled_for_inspection(format.into())
            .is_some_and(|pattern| pattern.uses_day_name())
    }

    /// Date parts the format renders, in pattern order.
    ///
    /// # Examples
    /// ```
    /// use ldmlfmt::{DatePartKind, Localization};
    ///
    /// let l10n = Localization::new();
    /// assert_eq!(
    ///     l10n.get_format_parts("shortDate"),
    ///     vec![DatePartKind::Month, DatePartKind::Day, DatePartKind::Year]
    /// );
    /// assert!(l10n.get_format_parts("dayofweek").is_empty());
    /// ```
    pub fn get_format_parts(&self, format: impl Into<DateFormat>) -> Vec<DatePartKind> {
        self.compiled_for_inspection(format.into())
            .map(|pattern| pattern.parts())
            .unwrap_or_default()
    }

    /// Pattern text a non-custom descriptor stands for, or `None` for the
    /// default rendering.
    fn date_pattern_text<'f>(&self, format: &'f DateFormat) -> Option<&'f str> {
        let locale = self.locale_data();
        let named_or_pattern = |name: &'f str| -> &'f str {
            match NamedDateFormat::from_name(name) {
                Some(named) => named.pattern(locale),
                None => name,
            }
        };

        match format.normalize() {
            Normalized::Named(name) => Some(named_or_pattern(name)),
            Normalized::Pattern(pattern) => Some(pattern),
            Normalized::Options { kind: Some(kind), .. } => Some(named_or_pattern(kind)),
            Normalized::Options { kind: None, .. }
            | Normalized::Default
            | Normalized::Custom { .. } => None,
        }
    }

    fn compiled_for_inspection(&self, format: DateFormat) -> Option<Arc<DatePattern>> {
        let pattern = self.date_pattern_text(&format)?;
        self.compile_date_pattern(pattern)
    }

    fn compile_date_pattern(&self, pattern: &str) -> Option<Arc<DatePattern>> {
        match self.date_patterns.get_or_compile(pattern, parse_date_pattern) {
            (Ok(compiled), _) => Some(compiled),
            (Err(err), fresh) => {
                if fresh {
                    self.warn_invalid(pattern, err);
                }
                None
            }
        }
    }

    fn check_ambiguity(&self, pattern: &str, compiled: &DatePattern) {
        let first_check = match self.parse_checked.lock() {
            Ok(mut checked) => checked.insert(pattern.to_string()),
            Err(_) => false,
        };
        if first_check && compiled.has_ambiguous_fields() {
            self.warn(Warning::AmbiguousPattern {
                pattern: pattern.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    #[test]
    fn test_default_format_uses_display() {
        let l10n = Localization::new();
        assert_eq!(
            l10n.format_date(Some(&date(2015, 3, 2)), DateFormat::Default).as_deref(),
            Some("2015-03-02 00:00:00")
        );
        assert_eq!(l10n.format_date(None, "shortDate"), None);
    }

    #[test]
    fn test_named_pattern_follows_locale() {
        let mut l10n = Localization::new();
        l10n.set_locale("de");
        assert_eq!(
            l10n.format_date(Some(&date(2015, 3, 2)), "shortDate").as_deref(),
            Some("02.03.2015")
        );
    }

    #[test]
    fn test_default_parse_uses_short_date() {
        let l10n = Localization::new();
        let now = date(2020, 6, 6);
        assert_eq!(
            l10n.parse_date_at("3/2/2015", DateFormat::Default, now),
            Some(date(2015, 3, 2))
        );
        assert_eq!(l10n.parse_date_at("2", DateFormat::Default, now), None);
        assert_eq!(l10n.parse_date_at("", "shortDate", now), None);
    }
}
