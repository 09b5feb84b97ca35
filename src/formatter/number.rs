//! Number formatting: LDML patterns and named combinators.

use super::digits::{group_digits, Digits};
use crate::ast::NumberPattern;
use crate::descriptor::Precision;
use crate::named::{power_suffix, NamedNumberFormat, NumberKind, Power, MAX_POWER};
use crate::options::{NegativeCurrencyStyle, Separators};

/// Digits beyond this many significant ones are rounded away by patterns.
const MAX_SIGNIFICANT_DIGITS: usize = 15;

/// Group size used by the named kinds.
const NAMED_GROUPING: [usize; 1] = [3];

/// Default fraction digits of the `exponential` kind.
const DEFAULT_EXPONENTIAL_PRECISION: usize = 1;

/// Locale-resolved settings for named formats.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NamedStyle<'a> {
    pub separators: Separators,
    pub currency_symbol: &'a str,
    pub negative_currency: NegativeCurrencyStyle,
}

/// Text for NaN and infinities, which no format renders.
pub(crate) fn format_non_finite(value: f64) -> Option<String> {
    if value.is_nan() {
        Some(String::new())
    } else if value.is_infinite() {
        Some(if value.is_sign_positive() { "Infinity" } else { "-Infinity" }.to_string())
    } else {
        None
    }
}

/// Format a finite value with a compiled LDML pattern.
pub(crate) fn format_pattern(
    value: f64,
    pattern: &NumberPattern,
    separators: Separators,
) -> String {
    let sub = pattern.select(value.is_sign_negative());

    let mut digits = Digits::from_f64(value);
    if sub.percent {
        digits.shift(2);
    }
    digits.round_fraction(sub.max_frac);
    digits.round_significant(MAX_SIGNIFICANT_DIGITS);

    let mut integer = pad_start(digits.integer_digits(), sub.min_int);
    let fraction = pad_end(digits.fraction_digits(), sub.min_frac);
    if integer.is_empty() && fraction.is_empty() {
        integer.push('0');
    }

    let mut body = group_digits(&integer, &sub.grouping, separators.thousands);
    if !fraction.is_empty() {
        body.push(separators.decimal);
        body.push_str(&fraction);
    }

    format!("{}{}{}", sub.prefix, body, sub.suffix)
}

/// Power of 1000 chosen by `largeNumber`: the largest one keeping
/// `|value| / 1000^power >= 1`, capped at trillions.
fn auto_power(value: f64) -> u8 {
    let mut magnitude = value.abs();
    let mut power = 0;
    while magnitude >= 1000.0 && power < MAX_POWER {
        magnitude /= 1000.0;
        power += 1;
    }
    power
}

/// Format a finite value with a named combinator.
///
/// The value is scaled by its power of 1000 first, the kind renders the
/// scaled value, and the scale suffix goes right after the last digit.
pub(crate) fn format_named(
    value: f64,
    format: NamedNumberFormat,
    precision: Option<Precision>,
    style: &NamedStyle<'_>,
) -> String {
    let power = match format.power {
        None => 0,
        Some(Power::Fixed(power)) => power.min(MAX_POWER),
        Some(Power::Auto) => auto_power(value),
    };

    let mut digits = Digits::from_f64(value);
    digits.shift(-3 * i32::from(power));

    let separators = style.separators;
    let body = match format.kind {
        NumberKind::Decimal => {
            let width = match precision {
                Some(Precision::Digits(width)) => width as usize,
                _ => 0,
            };
            let mut integer = pad_start(digits.integer_digits(), width);
            if integer.is_empty() {
                integer.push('0');
            }
            join(integer, &digits.fraction_digits(), separators.decimal)
        }
        NumberKind::FixedPoint | NumberKind::Currency => {
            fixed(&mut digits, precision, separators)
        }
        NumberKind::Percent => {
            digits.shift(2);
            let mut text = fixed(&mut digits, precision, separators);
            text.push('%');
            text
        }
        NumberKind::Exponential => {
            let places = match precision {
                Some(Precision::Digits(places)) => places as usize,
                _ => DEFAULT_EXPONENTIAL_PRECISION,
            };
            exponential(&mut digits, places, separators.decimal)
        }
    };

    let negative = value < 0.0 && body.chars().any(|c| matches!(c, '1'..='9'));
    let mut text = match format.kind {
        NumberKind::Currency => {
            let amount = format!("{}{}", style.currency_symbol, body);
            match (negative, style.negative_currency) {
                (false, _) => amount,
                (true, NegativeCurrencyStyle::Minus) => format!("-{amount}"),
                (true, NegativeCurrencyStyle::Accounting) => format!("({amount})"),
            }
        }
        _ if negative => format!("-{body}"),
        _ => body,
    };

    insert_after_last_digit(&mut text, power_suffix(power));
    text
}

/// Fraction digits per `precision`, integer digits grouped by three.
fn fixed(digits: &mut Digits, precision: Option<Precision>, separators: Separators) -> String {
    let fraction = match precision {
        Some(Precision::Unbounded) => digits.fraction_digits(),
        Some(Precision::Digits(places)) => {
            digits.round_fraction(places as usize);
            pad_end(digits.fraction_digits(), places as usize)
        }
        None => {
            digits.round_fraction(0);
            String::new()
        }
    };
    let mut integer = digits.integer_digits();
    if integer.is_empty() {
        integer.push('0');
    }
    let grouped = group_digits(&integer, &NAMED_GROUPING, separators.thousands);
    join(grouped, &fraction, separators.decimal)
}

/// `1.2E+4` style rendering with `places` mantissa fraction digits.
fn exponential(digits: &mut Digits, places: usize, decimal: char) -> String {
    let exponent = if digits.is_zero() {
        0
    } else {
        digits.round_significant(places + 1);
        digits.exponent()
    };
    let mantissa = digits.significant_digits(places + 1);
    let (first, rest) = mantissa.split_at(1);
    let sign = if exponent < 0 { '-' } else { '+' };
    format!(
        "{}E{}{}",
        join(first.to_string(), rest, decimal),
        sign,
        exponent.unsigned_abs()
    )
}

fn join(mut integer: String, fraction: &str, decimal: char) -> String {
    if !fraction.is_empty() {
        integer.push(decimal);
        integer.push_str(fraction);
    }
    integer
}

fn pad_start(text: String, width: usize) -> String {
    if text.len() >= width {
        return text;
    }
    let mut padded = "0".repeat(width - text.len());
    padded.push_str(&text);
    padded
}

fn pad_end(mut text: String, width: usize) -> String {
    while text.len() < width {
        text.push('0');
    }
    text
}

fn insert_after_last_digit(text: &mut String, suffix: &str) {
    if suffix.is_empty() {
        return;
    }
    match text.char_indices().filter(|(_, c)| c.is_ascii_digit()).last() {
        Some((index, _)) => text.insert_str(index + 1, suffix),
        None => text.push_str(suffix),
    }
}
