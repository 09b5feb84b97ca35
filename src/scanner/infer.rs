//! Pattern inference for custom date formatters.
//!
//! A formatter with no parser is run on a base moment and on probes that
//! each change one component. Where a probe's output differs from the base
//! output is where that component is rendered; the gaps are literals.

use chrono::{NaiveDate, NaiveDateTime};

use crate::ast::DateFieldKind;
use crate::locale::{LocaleData, NameWidth};

/// Span of the base text rendering one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    start: usize,
    end: usize,
    kind: DateFieldKind,
}

/// Tuesday, 2009-09-08 06:05:04.000. Every probe is a Tuesday too, so a
/// rendered weekday stays put.
fn moment(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    milli: u32,
) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_milli_opt(hour, minute, second, milli)
}

/// Index of the weekday of the base moment in locale day tables.
const BASE_WEEKDAY: usize = 2;

/// Month of the base moment, zero based.
const BASE_MONTH: usize = 8;

/// Infer an LDML pattern that parses what `format` renders.
///
/// Returns `None` when the output does not move with any component or
/// when two components claim overlapping text.
pub(crate) fn infer_pattern(
    format: &dyn Fn(&NaiveDateTime) -> String,
    locale: &LocaleData,
) -> Option<String> {
    let base = moment(2009, 9, 8, 6, 5, 4, 0)?;
    let base_text = format(&base);

    let probes = [
        (DateFieldKind::FractionalSecond, moment(2009, 9, 8, 6, 5, 4, 111)?),
        (DateFieldKind::Second, moment(2009, 9, 8, 6, 5, 2, 0)?),
        (DateFieldKind::Minute, moment(2009, 9, 8, 6, 2, 4, 0)?),
        (DateFieldKind::Hour24, moment(2009, 9, 8, 2, 5, 4, 0)?),
        (DateFieldKind::Day, moment(2009, 9, 1, 6, 5, 4, 0)?),
        (DateFieldKind::Month, moment(2009, 12, 8, 6, 5, 4, 0)?),
        (DateFieldKind::Year, moment(2015, 9, 8, 6, 5, 4, 0)?),
    ];

    let mut spans: Vec<Span> = Vec::new();
    for (kind, probe) in probes {
        if let Some((start, end)) = diff_span(&base_text, &format(&probe)) {
            spans.push(Span { start, end, kind });
        }
    }

    // An afternoon probe tells a 24-hour clock from a 12-hour one.
    let afternoon = format(&moment(2009, 9, 8, 18, 5, 4, 0)?);
    if let Some((start, end)) = diff_span(&base_text, &afternoon) {
        let hour = spans.iter_mut().find(|s| s.kind == DateFieldKind::Hour24);
        let overlaps_hour = hour
            .as_ref()
            .is_some_and(|h| start < h.end && h.start < end);
        if !overlaps_hour {
            if let Some(hour) = hour {
                hour.kind = DateFieldKind::Hour12;
            }
            spans.push(Span {
                start,
                end,
                kind: DateFieldKind::Period,
            });
        }
    } else if let Some(hour) = spans.iter_mut().find(|s| s.kind == DateFieldKind::Hour24) {
        hour.kind = DateFieldKind::Hour12;
    }

    if let Some(span) = find_weekday(&base_text, locale) {
        if !spans.iter().any(|s| span.start < s.end && s.start < span.end) {
            spans.push(span);
        }
    }

    if spans.is_empty() {
        return None;
    }
    spans.sort_by_key(|s| s.start);
    if spans.windows(2).any(|pair| pair[0].end > pair[1].start) {
        return None;
    }

    let mut pattern = String::new();
    let mut cursor = 0;
    for span in &spans {
        push_quoted(&mut pattern, &base_text[cursor..span.start]);
        pattern.push_str(&field_letters(span, &base_text[span.start..span.end], locale));
        cursor = span.end;
    }
    push_quoted(&mut pattern, &base_text[cursor..]);

    tracing::debug!(pattern = %pattern, "inferred date pattern from formatter");
    Some(pattern)
}

/// Byte range of `base` that differs from `other`, widened to the whole
/// surrounding run of digits or letters.
fn diff_span(base: &str, other: &str) -> Option<(usize, usize)> {
    if base == other {
        return None;
    }

    let prefix: usize = base
        .chars()
        .zip(other.chars())
        .take_while(|(a, b)| a == b)
        .map(|(a, _)| a.len_utf8())
        .sum();
    let max_suffix = base.len().min(other.len()) - prefix;
    let mut suffix = 0;
    for (a, b) in base[prefix..].chars().rev().zip(other[prefix..].chars().rev()) {
        if a != b || suffix + a.len_utf8() > max_suffix {
            break;
        }
        suffix += a.len_utf8();
    }

    let mut start = prefix;
    let mut end = (base.len() - suffix).max(start);

    let seed = base[start..end]
        .chars()
        .next()
        .or_else(|| base[..start].chars().next_back())
        .or_else(|| base[end..].chars().next())?;
    let same_class: fn(char) -> bool = if seed.is_ascii_digit() {
        |c| c.is_ascii_digit()
    } else {
        char::is_alphabetic
    };

    while let Some(c) = base[..start].chars().next_back() {
        if !same_class(c) {
            break;
        }
        start -= c.len_utf8();
    }
    while let Some(c) = base[end..].chars().next() {
        if !same_class(c) {
            break;
        }
        end += c.len_utf8();
    }

    if start == end {
        None
    } else {
        Some((start, end))
    }
}

fn find_weekday(text: &str, locale: &LocaleData) -> Option<Span> {
    [NameWidth::Wide, NameWidth::Abbreviated]
        .iter()
        .map(|&width| locale.days.get(width)[BASE_WEEKDAY])
        .filter(|name| !name.is_empty())
        .find_map(|name| {
            text.find(name).map(|start| Span {
                start,
                end: start + name.len(),
                kind: DateFieldKind::DayOfWeek,
            })
        })
}

fn field_letters(span: &Span, text: &str, locale: &LocaleData) -> String {
    let len = text.chars().count();
    let numeric = text.chars().all(|c| c.is_ascii_digit());
    let letter = span.kind.letter();

    let width = match span.kind {
        DateFieldKind::Year => {
            if len == 2 {
                2
            } else {
                1
            }
        }
        DateFieldKind::Month if !numeric => {
            if text.eq_ignore_ascii_case(locale.months.wide[BASE_MONTH]) {
                4
            } else {
                3
            }
        }
        DateFieldKind::DayOfWeek => {
            if text == locale.days.wide[BASE_WEEKDAY] {
                4
            } else {
                3
            }
        }
        DateFieldKind::Period => 1,
        DateFieldKind::FractionalSecond => len.clamp(1, 3),
        _ => len.clamp(1, 2),
    };
    letter.to_string().repeat(width)
}

fn push_quoted(pattern: &mut String, literal: &str) {
    if literal.is_empty() {
        return;
    }
    pattern.push('\'');
    pattern.push_str(&literal.replace('\'', "''"));
    pattern.push('\'');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::format_date;
    use crate::locale::{BuiltinLocales, LocaleProvider};
    use crate::parser::parse_date_pattern;

    fn infer_from(pattern: &str) -> Option<String> {
        let locales = BuiltinLocales::new();
        let data = *locales.data("en").unwrap();
        let compiled = parse_date_pattern(pattern).unwrap();
        let formatter = move |value: &NaiveDateTime| format_date(value, &compiled, &data);
        infer_pattern(&formatter, &data)
    }

    #[test]
    fn test_numeric_pattern() {
        assert_eq!(
            infer_from("dd/MM/yyyy HH:mm:ss").as_deref(),
            Some("dd'/'MM'/'y' 'HH':'mm':'ss")
        );
    }

    #[test]
    fn test_names_and_periods() {
        assert_eq!(
            infer_from("EEEE, MMMM d, y h:mm a").as_deref(),
            Some("EEEE', 'MMMM' 'd', 'y' 'h':'mm' 'a")
        );
    }

    #[test]
    fn test_short_year_and_milliseconds() {
        assert_eq!(infer_from("yy.SSS").as_deref(), Some("yy'.'SSS"));
    }

    #[test]
    fn test_constant_output_fails() {
        let locales = BuiltinLocales::new();
        let constant = |_: &NaiveDateTime| "always".to_string();
        assert_eq!(infer_pattern(&constant, locales.data("en").unwrap()), None);
    }

    #[test]
    fn test_diff_span_widens_to_runs() {
        assert_eq!(diff_span("2009", "2015"), Some((0, 4)));
        assert_eq!(diff_span("6:05 AM", "6:05 PM"), Some((5, 7)));
        assert_eq!(diff_span("8 September", "8 December"), Some((2, 11)));
        assert_eq!(diff_span("same", "same"), None);
    }
}
