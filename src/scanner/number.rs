//! Number parsing: digits, sign and scale are read independently.

use crate::named::power_from_suffix;
use crate::options::Separators;

/// Texts with more significant digits than this are refused.
const MAX_PARSED_DIGITS: usize = 15;

/// How a number was formatted, as far as parsing cares.
#[derive(Debug, Clone, Default)]
pub(crate) struct NumberScan {
    /// Renderings of `-1` under the descriptor. A text whose shape matches
    /// one of them is negative.
    pub negative_templates: Vec<String>,
    /// Fixed power of 1000 to multiply by.
    pub power: Option<u8>,
    /// Read the power from a `K`/`M`/`B`/`T` suffix.
    pub auto_power: bool,
    /// Divide by 100.
    pub percent: bool,
    /// The text is in `1.2E+4` notation.
    pub exponential: bool,
}

/// Parse `text` as a number.
pub(crate) fn scan_number(text: &str, scan: &NumberScan, separators: Separators) -> Option<f64> {
    if scan.exponential {
        return scan_exponential(text, separators.decimal);
    }
    let digits = extract_digits(text, separators.decimal)?;

    let power = if scan.auto_power {
        detect_power(text)
    } else {
        scan.power.unwrap_or(0)
    };
    let mut exponent = 3 * i32::from(power);
    if scan.percent {
        exponent -= 2;
    }

    let sign = if is_negative(text, &scan.negative_templates, separators) {
        "-"
    } else {
        ""
    };
    let literal = if digits.starts_with('.') {
        format!("{sign}0{digits}e{exponent}")
    } else {
        format!("{sign}{digits}e{exponent}")
    };
    literal.parse::<f64>().ok()
}

fn scan_exponential(text: &str, decimal: char) -> Option<f64> {
    let normalized: String = text
        .trim()
        .chars()
        .map(|c| if c == decimal { '.' } else { c })
        .collect();
    normalized.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// The digits of `text` with its first decimal separator as `.`.
///
/// Everything else is skipped; a second decimal separator ends the number.
fn extract_digits(text: &str, decimal: char) -> Option<String> {
    let mut digits = String::new();
    let mut seen_point = false;
    for ch in text.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
        } else if ch == decimal {
            if seen_point {
                break;
            }
            digits.push('.');
            seen_point = true;
        }
    }
    if digits.ends_with('.') {
        digits.pop();
    }
    if digits.is_empty() {
        return None;
    }

    let significant = digits
        .trim_start_matches(|c: char| c == '0' || c == '.')
        .chars()
        .filter(char::is_ascii_digit)
        .count();
    if significant > MAX_PARSED_DIGITS {
        return None;
    }
    Some(digits)
}

fn is_negative(text: &str, templates: &[String], separators: Separators) -> bool {
    let first = text.chars().find(|&c| c.is_ascii_digit() || c == '-');
    if first == Some('-') {
        return true;
    }
    let shape = collapse_numbers(text, separators);
    templates
        .iter()
        .any(|template| collapse_numbers(template, separators) == shape)
}

/// Replace every run of digits and separators with a single `1`.
fn collapse_numbers(text: &str, separators: Separators) -> String {
    let mut result = String::new();
    let mut in_number = false;
    for ch in text.chars() {
        let numeric = ch.is_ascii_digit() || ch == separators.decimal || ch == separators.thousands;
        if numeric {
            if !in_number {
                result.push('1');
            }
        } else {
            result.push(ch);
        }
        in_number = numeric;
    }
    result
}

/// Power named by the first scale letter that follows a digit.
fn detect_power(text: &str) -> u8 {
    let chars: Vec<char> = text.chars().collect();
    chars
        .windows(2)
        .find_map(|pair| {
            if pair[0].is_ascii_digit() {
                power_from_suffix(pair[1])
            } else {
                None
            }
        })
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EN: Separators = Separators {
        decimal: '.',
        thousands: ',',
    };

    fn plain(text: &str) -> Option<f64> {
        scan_number(text, &NumberScan::default(), EN)
    }

    #[test]
    fn test_digits_only() {
        assert_eq!(plain("1.2"), Some(1.2));
        assert_eq!(plain("12,000"), Some(12000.0));
        assert_eq!(plain("$ 1.2"), Some(1.2));
        assert_eq!(plain("1.2 руб."), Some(1.2));
        assert_eq!(plain(".2"), Some(0.2));
        assert_eq!(plain("-10"), Some(-10.0));
    }

    #[test]
    fn test_nothing_to_read() {
        assert_eq!(plain(""), None);
        assert_eq!(plain("."), None);
        assert_eq!(plain("abc"), None);
    }

    #[test]
    fn test_too_many_digits() {
        assert_eq!(plain("1234567890123456"), None);
        assert_eq!(plain("0.000123456789012345"), Some(0.000123456789012345));
    }

    #[test]
    fn test_negative_by_template() {
        let scan = NumberScan {
            negative_templates: vec!["(1)".to_string()],
            ..NumberScan::default()
        };
        assert_eq!(scan_number("(12,34.56)", &scan, EN), Some(-1234.56));
        assert_eq!(scan_number("12,345", &scan, EN), Some(12345.0));
    }

    #[test]
    fn test_powers_and_percent() {
        let auto = NumberScan {
            auto_power: true,
            percent: true,
            ..NumberScan::default()
        };
        assert_eq!(scan_number("1.2M %", &auto, EN), Some(12000.0));

        let thousands = NumberScan {
            power: Some(1),
            ..NumberScan::default()
        };
        assert_eq!(scan_number("41K", &thousands, EN), Some(41000.0));
    }

    #[test]
    fn test_exponential_notation() {
        let scan = NumberScan {
            exponential: true,
            ..NumberScan::default()
        };
        assert_eq!(scan_number("1.2E+4", &scan, EN), Some(12000.0));
        assert_eq!(scan_number("-1.23E-3", &scan, EN), Some(-0.00123));
        assert_eq!(scan_number("1.2 E", &scan, EN), None);
    }

    #[test]
    fn test_detect_power_needs_a_digit() {
        assert_eq!(detect_power("K 12"), 0);
        assert_eq!(detect_power("4b"), 3);
    }
}
