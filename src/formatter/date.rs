//! Date formatting with compiled LDML patterns.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::ast::{DateField, DateFieldKind, DatePattern, DateToken};
use crate::locale::{LocaleData, NameContext};

/// Render `value` with a compiled pattern.
pub(crate) fn format_date(
    value: &NaiveDateTime,
    pattern: &DatePattern,
    locale: &LocaleData,
) -> String {
    let mut result = String::new();
    for token in &pattern.tokens {
        match token {
            DateToken::Literal(text) => result.push_str(text),
            DateToken::TimeSeparator => result.push(':'),
            DateToken::Field(field) => format_field(&mut result, value, *field, locale),
        }
    }
    result
}

fn format_field(out: &mut String, value: &NaiveDateTime, field: DateField, locale: &LocaleData) {
    let width = field.width;
    match field.kind {
        DateFieldKind::Year => {
            if width == 2 {
                push_padded(out, value.year().rem_euclid(100) as u32, 2);
            } else {
                out.push_str(&format!("{:0width$}", value.year(), width = width));
            }
        }
        DateFieldKind::Month | DateFieldKind::StandaloneMonth => {
            let index = value.month0() as usize;
            match field.name_width() {
                Some(name_width) => {
                    let context = if field.kind == DateFieldKind::Month {
                        NameContext::Format
                    } else {
                        NameContext::Standalone
                    };
                    out.push_str(locale.month_names(name_width, context)[index]);
                }
                None => push_padded(out, value.month(), width.min(2)),
            }
        }
        DateFieldKind::Quarter => {
            let index = value.month0() as usize / 3;
            match field.name_width() {
                Some(name_width) => out.push_str(locale.quarters.get(name_width)[index]),
                None => push_padded(out, index as u32 + 1, width.min(2)),
            }
        }
        DateFieldKind::DayOfWeek => {
            let index = value.weekday().num_days_from_sunday() as usize;
            if let Some(name_width) = field.name_width() {
                out.push_str(locale.days.get(name_width)[index]);
            }
        }
        DateFieldKind::Period => {
            let index = usize::from(value.hour() >= 12);
            out.push_str(locale.periods[index]);
        }
        DateFieldKind::Day => push_padded(out, value.day(), width.min(2)),
        DateFieldKind::Hour24 => push_padded(out, value.hour(), width.min(2)),
        DateFieldKind::Hour12 => {
            let hour = match value.hour() % 12 {
                0 => 12,
                hour => hour,
            };
            push_padded(out, hour, width.min(2));
        }
        DateFieldKind::Minute => push_padded(out, value.minute(), width.min(2)),
        DateFieldKind::Second => push_padded(out, value.second(), width.min(2)),
        DateFieldKind::FractionalSecond => {
            let millis = (value.nanosecond() / 1_000_000).min(999);
            let digits = format!("{millis:03}");
            out.extend(digits.chars().chain(std::iter::repeat('0')).take(width));
        }
    }
}

fn push_padded(out: &mut String, value: u32, width: usize) {
    out.push_str(&format!("{value:0width$}"));
}
