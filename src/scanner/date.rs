//! Date parsing with compiled LDML patterns.
//!
//! Tokens are matched left to right. Fields with several possible lengths
//! yield candidates in preference order and the matcher backtracks when a
//! later token fails, so `M/d/y` reads both `2/2/2015` and `02/20/2015`.
//! Components the text does not carry are filled from a reference moment.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::ast::{DateField, DateFieldKind, DatePattern, DateToken};
use crate::locale::{LocaleData, NameWidth};

/// Two-digit years below this are in the 2000s, others in the 1900s.
const TWO_DIGIT_YEAR_PIVOT: i32 = 30;

/// Longest digit run read for a lazy year field.
const MAX_YEAR_DIGITS: usize = 9;

/// Calendar components, coarsest first. Defaulting walks this order.
const COMPONENT_COUNT: usize = 7;
const YEAR: usize = 0;
const MONTH: usize = 1;
const DAY: usize = 2;
const HOUR: usize = 3;
const MINUTE: usize = 4;
const SECOND: usize = 5;
const MILLISECOND: usize = 6;

/// Values read from the text.
#[derive(Debug, Clone, Copy, Default)]
struct Scanned {
    components: [Option<i64>; COMPONENT_COUNT],
    /// 0 = AM, 1 = PM
    period: Option<usize>,
    /// 1 to 4
    quarter: Option<i64>,
}

/// Parse `text`, filling missing components from `now`.
pub(crate) fn scan_date(
    text: &str,
    pattern: &DatePattern,
    locale: &LocaleData,
    now: NaiveDateTime,
) -> Option<NaiveDateTime> {
    let mut scanned = Scanned::default();
    if !match_tokens(text, &pattern.tokens, locale, &mut scanned) {
        return None;
    }
    resolve(&scanned, pattern, now)
}

fn match_tokens(
    text: &str,
    tokens: &[DateToken],
    locale: &LocaleData,
    scanned: &mut Scanned,
) -> bool {
    let Some((first, rest)) = tokens.split_first() else {
        return text.is_empty();
    };

    match first {
        DateToken::Literal(literal) => match strip_prefix_ignore_case(text, literal) {
            Some(remaining) => match_tokens(remaining, rest, locale, scanned),
            None => false,
        },
        DateToken::TimeSeparator => [locale.time_separator, ':'].iter().any(|&separator| {
            match text.strip_prefix(separator) {
                Some(remaining) => match_tokens(remaining, rest, locale, scanned),
                None => false,
            }
        }),
        DateToken::Field(field) => {
            for (value, remaining) in candidates(text, *field, locale) {
                let saved = *scanned;
                record(scanned, field.kind, value);
                if match_tokens(remaining, rest, locale, scanned) {
                    return true;
                }
                *scanned = saved;
            }
            false
        }
    }
}

fn record(scanned: &mut Scanned, kind: DateFieldKind, value: i64) {
    let index = match kind {
        DateFieldKind::Year => YEAR,
        DateFieldKind::Month | DateFieldKind::StandaloneMonth => MONTH,
        DateFieldKind::Day => DAY,
        DateFieldKind::Hour24 | DateFieldKind::Hour12 => HOUR,
        DateFieldKind::Minute => MINUTE,
        DateFieldKind::Second => SECOND,
        DateFieldKind::FractionalSecond => MILLISECOND,
        DateFieldKind::Period => {
            scanned.period = Some(value as usize);
            return;
        }
        DateFieldKind::Quarter => {
            scanned.quarter = Some(value);
            return;
        }
        DateFieldKind::DayOfWeek => return,
    };
    scanned.components[index] = Some(value);
}

/// Possible readings of `field` at the start of `text`, best first.
fn candidates<'t>(text: &'t str, field: DateField, locale: &LocaleData) -> Vec<(i64, &'t str)> {
    let run = text.bytes().take_while(u8::is_ascii_digit).count();

    match field.kind {
        DateFieldKind::Year if field.width == 2 => {
            if run < 2 {
                return Vec::new();
            }
            let value = digit_value(&text[..2]) as i32;
            let year = if value < TWO_DIGIT_YEAR_PIVOT {
                2000 + value
            } else {
                1900 + value
            };
            vec![(i64::from(year), &text[2..])]
        }
        DateFieldKind::Year => (1..=run.min(MAX_YEAR_DIGITS))
            .map(|len| (digit_value(&text[..len]), &text[len..]))
            .collect(),
        DateFieldKind::FractionalSecond => (1..=run.min(field.width))
            .rev()
            .map(|len| (millis_value(&text[..len]), &text[len..]))
            .collect(),
        DateFieldKind::Period => {
            let names = locale
                .periods
                .iter()
                .enumerate()
                .map(|(index, name)| (index, *name));
            match_names(text, names)
        }
        DateFieldKind::DayOfWeek => {
            let names = NameWidth::ALL.iter().flat_map(|&width| {
                locale.days.get(width).iter().enumerate().map(|(i, n)| (i, *n))
            });
            match_names(text, names)
        }
        DateFieldKind::Month | DateFieldKind::StandaloneMonth if field.width >= 3 => {
            let names = NameWidth::ALL.iter().flat_map(|&width| {
                locale
                    .months
                    .get(width)
                    .iter()
                    .chain(locale.months_standalone.get(width).iter())
                    .enumerate()
                    .map(|(i, n)| (i % 12 + 1, *n))
            });
            match_names(text, names)
        }
        DateFieldKind::Quarter if field.width >= 3 => {
            let names = NameWidth::ALL.iter().flat_map(|&width| {
                locale.quarters.get(width).iter().enumerate().map(|(i, n)| (i + 1, *n))
            });
            match_names(text, names)
        }
        kind => {
            let (min, max) = numeric_range(kind);
            let lengths: [usize; 2] = if field.width >= 2 { [2, 1] } else { [1, 2] };
            lengths
                .iter()
                .filter(|&&len| len <= run)
                .map(|&len| (digit_value(&text[..len]), &text[len..]))
                .filter(|&(value, _)| (min..=max).contains(&value))
                .collect()
        }
    }
}

fn numeric_range(kind: DateFieldKind) -> (i64, i64) {
    match kind {
        DateFieldKind::Month | DateFieldKind::StandaloneMonth => (1, 12),
        DateFieldKind::Quarter => (1, 4),
        DateFieldKind::Day => (1, 31),
        DateFieldKind::Hour24 => (0, 23),
        DateFieldKind::Hour12 => (1, 12),
        _ => (0, 59),
    }
}

/// Names that prefix `text`, longest first, as (value, remainder).
fn match_names<'t, 'n>(
    text: &'t str,
    names: impl Iterator<Item = (usize, &'n str)>,
) -> Vec<(i64, &'t str)> {
    let mut matches: Vec<(usize, i64, &'t str)> = names
        .filter(|(_, name)| !name.is_empty())
        .filter_map(|(value, name)| {
            strip_prefix_ignore_case(text, name)
                .map(|rest| (name.chars().count(), value as i64, rest))
        })
        .collect();
    matches.sort_by(|a, b| b.0.cmp(&a.0));
    matches.dedup_by(|a, b| a.1 == b.1 && a.2.len() == b.2.len());
    matches.into_iter().map(|(_, value, rest)| (value, rest)).collect()
}

fn digit_value(digits: &str) -> i64 {
    digits
        .bytes()
        .fold(0i64, |acc, b| acc * 10 + i64::from(b - b'0'))
}

/// Fractional-second digits as milliseconds (`5 → 500`, `55 → 550`).
fn millis_value(digits: &str) -> i64 {
    let mut value = digit_value(&digits[..digits.len().min(3)]);
    for _ in digits.len()..3 {
        value *= 10;
    }
    value
}

/// `text` without a case-insensitive `prefix`.
pub(crate) fn strip_prefix_ignore_case<'t>(text: &'t str, prefix: &str) -> Option<&'t str> {
    let mut chars = text.char_indices();
    for expected in prefix.chars() {
        let (_, actual) = chars.next()?;
        if actual != expected && !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    let end = chars.next().map_or(text.len(), |(index, _)| index);
    Some(&text[end..])
}

/// Build the value from scanned components.
///
/// Start from January 1 of the reference year at midnight. Every component
/// up to the finest one the pattern has takes the scanned value, or the
/// reference value when the text did not carry it. Finer components keep
/// the start value.
fn resolve(scanned: &Scanned, pattern: &DatePattern, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let finest = pattern
        .fields()
        .filter_map(|field| component_index(field.kind))
        .max();

    let start: [i64; COMPONENT_COUNT] = [i64::from(now.year()), 1, 1, 0, 0, 0, 0];
    let reference: [i64; COMPONENT_COUNT] = [
        i64::from(now.year()),
        i64::from(now.month()),
        i64::from(now.day()),
        i64::from(now.hour()),
        i64::from(now.minute()),
        i64::from(now.second()),
        i64::from((now.nanosecond() / 1_000_000).min(999)),
    ];

    let mut components = scanned.components;
    if components[MONTH].is_none() {
        components[MONTH] = scanned.quarter.map(|quarter| (quarter - 1) * 3 + 1);
    }

    let mut values = start;
    if let Some(finest) = finest {
        for index in 0..=finest {
            values[index] = components[index].unwrap_or(reference[index]);
        }
    }

    if let (Some(period), Some(hour)) = (scanned.period, scanned.components[HOUR]) {
        if !(1..=12).contains(&hour) {
            return None;
        }
        values[HOUR] = match (period, hour) {
            (0, 12) => 0,
            (1, 12) => 12,
            (1, hour) => hour + 12,
            (_, hour) => hour,
        };
    }

    let date = NaiveDate::from_ymd_opt(
        i32::try_from(values[YEAR]).ok()?,
        u32::try_from(values[MONTH]).ok()?,
        u32::try_from(values[DAY]).ok()?,
    )?;
    date.and_hms_milli_opt(
        u32::try_from(values[HOUR]).ok()?,
        u32::try_from(values[MINUTE]).ok()?,
        u32::try_from(values[SECOND]).ok()?,
        u32::try_from(values[MILLISECOND]).ok()?,
    )
}

fn component_index(kind: DateFieldKind) -> Option<usize> {
    match kind {
        DateFieldKind::Year => Some(YEAR),
        DateFieldKind::Month | DateFieldKind::StandaloneMonth | DateFieldKind::Quarter => {
            Some(MONTH)
        }
        DateFieldKind::Day => Some(DAY),
        DateFieldKind::Hour24 | DateFieldKind::Hour12 => Some(HOUR),
        DateFieldKind::Minute => Some(MINUTE),
        DateFieldKind::Second => Some(SECOND),
        DateFieldKind::FractionalSecond => Some(MILLISECOND),
        DateFieldKind::DayOfWeek | DateFieldKind::Period => None,
    }
}
