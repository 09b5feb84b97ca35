//! Format descriptors: what callers pass to say how a value is rendered.
//!
//! A descriptor is a named format, a raw LDML pattern, a pair of custom
//! functions, or an options bag. Every descriptor is classified once into a
//! [`Normalized`] form before the date or number engine sees it.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDateTime;

/// Custom rendering function.
pub type FormatterFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// Custom parsing function.
pub type ParserFn<T> = Arc<dyn Fn(&str) -> Option<T> + Send + Sync>;

/// Descriptor for date values.
pub type DateFormat = Format<NaiveDateTime>;

/// Descriptor for number values.
pub type NumberFormat = Format<f64>;

/// Number of digits a named number format renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Precision {
    /// Fraction digits (integer digits for `decimal`).
    Digits(u32),
    /// As many fraction digits as the shortest exact representation needs.
    Unbounded,
}

impl From<u32> for Precision {
    fn from(digits: u32) -> Self {
        Precision::Digits(digits)
    }
}

/// A custom formatter and/or parser.
pub struct CustomFormat<T> {
    pub formatter: Option<FormatterFn<T>>,
    pub parser: Option<ParserFn<T>>,
}

impl<T> Clone for CustomFormat<T> {
    fn clone(&self) -> Self {
        CustomFormat {
            formatter: self.formatter.clone(),
            parser: self.parser.clone(),
        }
    }
}

impl<T> fmt::Debug for CustomFormat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomFormat")
            .field("formatter", &self.formatter.as_ref().map(|_| "<fn>"))
            .field("parser", &self.parser.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Options bag: a format type plus modifiers.
///
/// `formatter` and `parser` take precedence over `kind`.
pub struct FormatOptions<T> {
    /// A named date format, or a number combinator such as `"fixedPoint"`.
    pub kind: Option<String>,
    pub precision: Option<Precision>,
    /// ISO 4217 code used by the `currency` kind.
    pub currency: Option<String>,
    pub formatter: Option<FormatterFn<T>>,
    pub parser: Option<ParserFn<T>>,
}

impl<T> Default for FormatOptions<T> {
    fn default() -> Self {
        FormatOptions {
            kind: None,
            precision: None,
            currency: None,
            formatter: None,
            parser: None,
        }
    }
}

impl<T> Clone for FormatOptions<T> {
    fn clone(&self) -> Self {
        FormatOptions {
            kind: self.kind.clone(),
            precision: self.precision,
            currency: self.currency.clone(),
            formatter: self.formatter.clone(),
            parser: self.parser.clone(),
        }
    }
}

impl<T> fmt::Debug for FormatOptions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatOptions")
            .field("kind", &self.kind)
            .field("precision", &self.precision)
            .field("currency", &self.currency)
            .field("formatter", &self.formatter.as_ref().map(|_| "<fn>"))
            .field("parser", &self.parser.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl<T> FormatOptions<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn precision(mut self, precision: impl Into<Precision>) -> Self {
        self.precision = Some(precision.into());
        self
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currency = Some(code.into());
        self
    }

    pub fn formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    pub fn parser<P>(mut self, parser: P) -> Self
    where
        P: Fn(&str) -> Option<T> + Send + Sync + 'static,
    {
        self.parser = Some(Arc::new(parser));
        self
    }
}

/// How a value is formatted or parsed.
pub enum Format<T> {
    /// No descriptor.
    Default,
    /// A named format or combinator; unknown names are used as patterns.
    Named(String),
    /// An LDML pattern, never looked up as a name.
    Pattern(String),
    Custom(CustomFormat<T>),
    Options(FormatOptions<T>),
}

impl<T> Format<T> {
    pub fn named(name: impl Into<String>) -> Self {
        Format::Named(name.into())
    }

    pub fn pattern(pattern: impl Into<String>) -> Self {
        Format::Pattern(pattern.into())
    }

    /// Custom formatter without a parser.
    pub fn formatter<F>(formatter: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Format::Custom(CustomFormat {
            formatter: Some(Arc::new(formatter)),
            parser: None,
        })
    }

    /// Custom formatter and parser.
    pub fn custom<F, P>(formatter: F, parser: P) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
        P: Fn(&str) -> Option<T> + Send + Sync + 'static,
    {
        Format::Custom(CustomFormat {
            formatter: Some(Arc::new(formatter)),
            parser: Some(Arc::new(parser)),
        })
    }

    /// Classify the descriptor.
    pub(crate) fn normalize(&self) -> Normalized<'_, T> {
        match self {
            Format::Default => Normalized::Default,
            Format::Named(name) => Normalized::Named(name),
            Format::Pattern(pattern) => Normalized::Pattern(pattern),
            Format::Custom(custom) => Normalized::Custom {
                formatter: custom.formatter.as_ref(),
                parser: custom.parser.as_ref(),
            },
            Format::Options(options) if options.formatter.is_some() || options.parser.is_some() => {
                Normalized::Custom {
                    formatter: options.formatter.as_ref(),
                    parser: options.parser.as_ref(),
                }
            }
            Format::Options(options) => Normalized::Options {
                kind: options.kind.as_deref(),
                precision: options.precision,
                currency: options.currency.as_deref(),
            },
        }
    }
}

impl<T> Default for Format<T> {
    fn default() -> Self {
        Format::Default
    }
}

impl<T> Clone for Format<T> {
    fn clone(&self) -> Self {
        match self {
            Format::Default => Format::Default,
            Format::Named(name) => Format::Named(name.clone()),
            Format::Pattern(pattern) => Format::Pattern(pattern.clone()),
            Format::Custom(custom) => Format::Custom(custom.clone()),
            Format::Options(options) => Format::Options(options.clone()),
        }
    }
}

impl<T> fmt::Debug for Format<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Default => f.write_str("Default"),
            Format::Named(name) => f.debug_tuple("Named").field(name).finish(),
            Format::Pattern(pattern) => f.debug_tuple("Pattern").field(pattern).finish(),
            Format::Custom(custom) => f.debug_tuple("Custom").field(custom).finish(),
            Format::Options(options) => f.debug_tuple("Options").field(options).finish(),
        }
    }
}

impl<T> From<&str> for Format<T> {
    fn from(name: &str) -> Self {
        Format::Named(name.to_string())
    }
}

impl<T> From<String> for Format<T> {
    fn from(name: String) -> Self {
        Format::Named(name)
    }
}

impl<T> From<&Format<T>> for Format<T> {
    fn from(format: &Format<T>) -> Self {
        format.clone()
    }
}

impl<T> From<CustomFormat<T>> for Format<T> {
    fn from(custom: CustomFormat<T>) -> Self {
        Format::Custom(custom)
    }
}

impl<T> From<FormatOptions<T>> for Format<T> {
    fn from(options: FormatOptions<T>) -> Self {
        Format::Options(options)
    }
}

/// A descriptor after classification.
pub(crate) enum Normalized<'a, T> {
    Default,
    Named(&'a str),
    Pattern(&'a str),
    Options {
        kind: Option<&'a str>,
        precision: Option<Precision>,
        currency: Option<&'a str>,
    },
    Custom {
        formatter: Option<&'a FormatterFn<T>>,
        parser: Option<&'a ParserFn<T>>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatter_wins_over_kind() {
        let format: NumberFormat = FormatOptions::new()
            .kind("percent")
            .formatter(|v: &f64| format!("!{v}"))
            .into();
        match format.normalize() {
            Normalized::Custom { formatter, parser } => {
                assert!(formatter.is_some());
                assert!(parser.is_none());
            }
            _ => panic!("expected custom functions"),
        }
    }

    #[test]
    fn test_options_without_functions() {
        let format: NumberFormat = FormatOptions::new().kind("fixedPoint").precision(2).into();
        match format.normalize() {
            Normalized::Options {
                kind,
                precision,
                currency,
            } => {
                assert_eq!(kind, Some("fixedPoint"));
                assert_eq!(precision, Some(Precision::Digits(2)));
                assert_eq!(currency, None);
            }
            _ => panic!("expected options"),
        }
    }

    #[test]
    fn test_string_conversions_are_named() {
        let format: DateFormat = "shortDate".into();
        assert!(matches!(format.normalize(), Normalized::Named("shortDate")));
        let pattern = DateFormat::pattern("year");
        assert!(matches!(pattern.normalize(), Normalized::Pattern("year")));
    }

    #[test]
    fn test_debug_hides_closures() {
        let format = NumberFormat::formatter(|v: &f64| v.to_string());
        assert_eq!(
            format!("{format:?}"),
            "Custom(CustomFormat { formatter: Some(\"<fn>\"), parser: None })"
        );
    }
}
