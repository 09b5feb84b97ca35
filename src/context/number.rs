use std::sync::Arc;

use super::Localization;
use crate::ast::NumberPattern;
use crate::descriptor::{Normalized, NumberFormat, Precision};
use crate::formatter::{format_named, format_non_finite, format_pattern, NamedStyle};
use crate::named::{currency_symbol, NamedNumberFormat, NumberKind, Power};
use crate::options::NegativeCurrencyStyle;
use crate::parser::parse_number_pattern;
use crate::scanner::{scan_number, NumberScan};
use crate::warning::Warning;

const DECIMAL: NamedNumberFormat = NamedNumberFormat {
    kind: NumberKind::Decimal,
    power: None,
};

/// How a non-custom number descriptor renders.
enum NumberStyle<'f> {
    Named {
        format: NamedNumberFormat,
        precision: Option<Precision>,
        currency: Option<&'f str>,
    },
    Pattern(&'f str),
}

impl<'f> NumberStyle<'f> {
    fn from_name(name: &'f str, precision: Option<Precision>, currency: Option<&'f str>) -> Self {
        match NamedNumberFormat::parse(name) {
            Some(format) => NumberStyle::Named {
                format,
                precision,
                currency,
            },
            None => NumberStyle::Pattern(name),
        }
    }

    fn decimal() -> Self {
        NumberStyle::Named {
            format: DECIMAL,
            precision: None,
            currency: None,
        }
    }
}

impl Localization {
    /// Format a number.
    ///
    /// NaN renders as an empty string and infinities as `Infinity` and
    /// `-Infinity`. A pattern that does not compile falls back to `decimal`.
    ///
    /// # Examples
    /// ```
    /// use ldmlfmt::{FormatOptions, Localization};
    ///
    /// let l10n = Localization::new();
    /// assert_eq!(l10n.format_number(12345.67, "#,##0.00 РУБ"), "12,345.67 РУБ");
    /// assert_eq!(
    ///     l10n.format_number(4.645, FormatOptions::new().kind("fixedPoint").precision(2)),
    ///     "4.65"
    /// );
    /// ```
    pub fn format_number(&self, value: f64, format: impl Into<NumberFormat>) -> String {
        let format = format.into();
        let style = match format.normalize() {
            Normalized::Custom {
                formatter: Some(formatter),
                ..
            } => return formatter(&value),
            normalized => number_style(normalized),
        };

        if let Some(text) = format_non_finite(value) {
            return text;
        }

        match style {
            NumberStyle::Named {
                format,
                precision,
                currency,
            } => format_named(value, format, precision, &self.named_style(currency)),
            NumberStyle::Pattern(pattern) => match self.compile_number_pattern(pattern) {
                Some(compiled) => format_pattern(value, &compiled, self.separators()),
                None => format_named(value, DECIMAL, None, &self.named_style(None)),
            },
        }
    }

    /// Parse a number.
    ///
    /// The sign comes from a leading `-` or from the text having the shape
    /// the descriptor gives negative values.
    ///
    /// # Examples
    /// ```
    /// use ldmlfmt::Localization;
    ///
    /// let l10n = Localization::new();
    /// assert_eq!(l10n.parse_number("(12,345)", "#,##0.##;(#,##0.##)"), Some(-12345.0));
    /// assert_eq!(l10n.parse_number("1K %", "thousands percent"), Some(10.0));
    /// ```
    pub fn parse_number(&self, text: &str, format: impl Into<NumberFormat>) -> Option<f64> {
        let format = format.into();
        let style = match format.normalize() {
            Normalized::Custom {
                parser: Some(parser),
                ..
            } => return parser(text),
            Normalized::Custom {
                formatter: Some(_),
                parser: None,
            } => {
                self.warn(Warning::NumberParserMissing);
                return None;
            }
            Normalized::Default => {
                return scan_number(text, &NumberScan::default(), self.separators());
            }
            normalized => number_style(normalized),
        };

        let scan = match style {
            NumberStyle::Named {
                format,
                precision,
                currency,
            } => self.named_scan(format, precision, currency),
            NumberStyle::Pattern(pattern) => {
                let compiled = self.compile_number_pattern(pattern)?;
                NumberScan {
                    negative_templates: vec![format_pattern(-1.0, &compiled, self.separators())],
                    percent: compiled.positive.percent,
                    ..NumberScan::default()
                }
            }
        };
        scan_number(text, &scan, self.separators())
    }

    /// Symbol of a currency code, or of the current locale when no code is
    /// given. Unknown codes are returned as they are.
    pub fn get_currency_symbol<'a>(&'a self, code: Option<&'a str>) -> &'a str {
        match code {
            Some(code) => currency_symbol(code).unwrap_or(code),
            None => self.locale_data().currency_symbol,
        }
    }

    fn named_style<'a>(&'a self, currency: Option<&'a str>) -> NamedStyle<'a> {
        NamedStyle {
            separators: self.separators(),
            currency_symbol: self.get_currency_symbol(currency),
            negative_currency: self.config.negative_currency,
        }
    }

    fn named_scan(
        &self,
        format: NamedNumberFormat,
        precision: Option<Precision>,
        currency: Option<&str>,
    ) -> NumberScan {
        let style = self.named_style(currency);
        let mut negative_templates = vec![format_named(-1.0, format, precision, &style)];
        if format.kind == NumberKind::Currency {
            let other = match style.negative_currency {
                NegativeCurrencyStyle::Minus => NegativeCurrencyStyle::Accounting,
                NegativeCurrencyStyle::Accounting => NegativeCurrencyStyle::Minus,
            };
            let other_style = NamedStyle {
                negative_currency: other,
                ..style
            };
            negative_templates.push(format_named(-1.0, format, precision, &other_style));
        }

        NumberScan {
            negative_templates,
            power: match format.power {
                Some(Power::Fixed(power)) => Some(power),
                _ => None,
            },
            auto_power: format.power == Some(Power::Auto),
            percent: format.kind == NumberKind::Percent,
            exponential: format.kind == NumberKind::Exponential,
        }
    }

    fn compile_number_pattern(&self, pattern: &str) -> Option<Arc<NumberPattern>> {
        match self.number_patterns.get_or_compile(pattern, parse_number_pattern) {
            (Ok(compiled), _) => Some(compiled),
            (Err(err), fresh) => {
                if fresh {
                    self.warn_invalid(pattern, err);
                }
                None
            }
        }
    }
}

fn number_style<'f>(normalized: Normalized<'f, f64>) -> NumberStyle<'f> {
    match normalized {
        Normalized::Named(name) => NumberStyle::from_name(name, None, None),
        Normalized::Pattern(pattern) => NumberStyle::Pattern(pattern),
        Normalized::Options {
            kind: Some(kind),
            precision,
            currency,
        } => NumberStyle::from_name(kind, precision, currency),
        Normalized::Options {
            kind: None,
            precision,
            currency,
        } => NumberStyle::Named {
            format: DECIMAL,
            precision,
            currency,
        },
        Normalized::Default | Normalized::Custom { .. } => NumberStyle::decimal(),
    }
}
