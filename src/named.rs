//! Named formats and their mapping to patterns or numeric behavior.
//!
//! Date names resolve to an LDML pattern, some of it taken from the current
//! locale. Number names are space-separated combinators such as
//! `"percent largeNumber"`: one formatting kind plus an optional scale power.

use crate::locale::LocaleData;

/// A named date format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedDateFormat {
    Day,
    DayOfWeek,
    Hour,
    LongDate,
    LongDateLongTime,
    LongTime,
    Millisecond,
    Minute,
    Month,
    MonthAndDay,
    MonthAndYear,
    Quarter,
    QuarterAndYear,
    Second,
    ShortDate,
    ShortDateShortTime,
    ShortTime,
    ShortYear,
    Year,
    DateTimeLocal,
}

impl NamedDateFormat {
    /// Look up a named format, ignoring ASCII case.
    ///
    /// # Examples
    /// ```
    /// use ldmlfmt::named::NamedDateFormat;
    ///
    /// assert_eq!(NamedDateFormat::from_name("shortDate"), Some(NamedDateFormat::ShortDate));
    /// assert_eq!(NamedDateFormat::from_name("dd/MM/yyyy"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<NamedDateFormat> {
        let format = match name.to_ascii_lowercase().as_str() {
            "day" => NamedDateFormat::Day,
            "dayofweek" => NamedDateFormat::DayOfWeek,
            "hour" => NamedDateFormat::Hour,
            "longdate" => NamedDateFormat::LongDate,
            "longdatelongtime" => NamedDateFormat::LongDateLongTime,
            "longtime" => NamedDateFormat::LongTime,
            "millisecond" => NamedDateFormat::Millisecond,
            "minute" => NamedDateFormat::Minute,
            "month" => NamedDateFormat::Month,
            "monthandday" => NamedDateFormat::MonthAndDay,
            "monthandyear" => NamedDateFormat::MonthAndYear,
            "quarter" => NamedDateFormat::Quarter,
            "quarterandyear" => NamedDateFormat::QuarterAndYear,
            "second" => NamedDateFormat::Second,
            "shortdate" => NamedDateFormat::ShortDate,
            "shortdateshorttime" => NamedDateFormat::ShortDateShortTime,
            "shorttime" => NamedDateFormat::ShortTime,
            "shortyear" => NamedDateFormat::ShortYear,
            "year" => NamedDateFormat::Year,
            "datetime-local" => NamedDateFormat::DateTimeLocal,
            _ => return None,
        };
        Some(format)
    }

    /// The LDML pattern this format renders with in the given locale.
    pub fn pattern(self, locale: &LocaleData) -> &'static str {
        let patterns = &locale.date_patterns;
        match self {
            NamedDateFormat::ShortDate => patterns.short_date,
            NamedDateFormat::ShortTime => patterns.short_time,
            NamedDateFormat::LongDate => patterns.long_date,
            NamedDateFormat::LongTime => patterns.long_time,
            NamedDateFormat::MonthAndDay => patterns.month_and_day,
            NamedDateFormat::MonthAndYear => patterns.month_and_year,
            NamedDateFormat::QuarterAndYear => patterns.quarter_and_year,
            NamedDateFormat::ShortDateShortTime => patterns.short_date_short_time,
            NamedDateFormat::LongDateLongTime => patterns.long_date_long_time,
            NamedDateFormat::Day => "d",
            NamedDateFormat::Year => "y",
            NamedDateFormat::Month => "LLLL",
            NamedDateFormat::ShortYear => "yy",
            NamedDateFormat::DayOfWeek => "EEEE",
            NamedDateFormat::Quarter => "QQQ",
            NamedDateFormat::Hour => "HH",
            NamedDateFormat::Minute => "mm",
            NamedDateFormat::Second => "ss",
            NamedDateFormat::Millisecond => "SSS",
            NamedDateFormat::DateTimeLocal => "yyyy-MM-ddTHH':'mm':'ss",
        }
    }
}

/// Formatting kind of a named number format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    Decimal,
    FixedPoint,
    Percent,
    Currency,
    Exponential,
}

/// Scale applied before rendering: divide by `1000^power`, append a suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Power {
    /// `largeNumber`: the largest power that keeps the magnitude at or above 1.
    Auto,
    /// 1 = thousands, 2 = millions, 3 = billions, 4 = trillions.
    Fixed(u8),
}

/// Highest scale power with a suffix.
pub const MAX_POWER: u8 = 4;

/// Suffix for a scale power (`1 → "K"` ... `4 → "T"`, 0 → none).
pub fn power_suffix(power: u8) -> &'static str {
    match power {
        1 => "K",
        2 => "M",
        3 => "B",
        4 => "T",
        _ => "",
    }
}

/// Power denoted by a scale suffix letter, ignoring case.
pub fn power_from_suffix(letter: char) -> Option<u8> {
    match letter.to_ascii_uppercase() {
        'K' => Some(1),
        'M' => Some(2),
        'B' => Some(3),
        'T' => Some(4),
        _ => None,
    }
}

/// A parsed number combinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NamedNumberFormat {
    pub kind: NumberKind,
    pub power: Option<Power>,
}

impl NamedNumberFormat {
    /// Parse a space-separated combinator, ignoring ASCII case.
    ///
    /// Returns `None` when no word names a kind or a power, in which case the
    /// string is an LDML pattern. A power without a kind means fixed point.
    ///
    /// # Examples
    /// ```
    /// use ldmlfmt::named::{NamedNumberFormat, NumberKind, Power};
    ///
    /// let named = NamedNumberFormat::parse("percent largeNumber").unwrap();
    /// assert_eq!(named.kind, NumberKind::Percent);
    /// assert_eq!(named.power, Some(Power::Auto));
    ///
    /// assert_eq!(NamedNumberFormat::parse("millions").unwrap().kind, NumberKind::FixedPoint);
    /// assert_eq!(NamedNumberFormat::parse("#,##0.00"), None);
    /// ```
    pub fn parse(text: &str) -> Option<NamedNumberFormat> {
        let mut kind = None;
        let mut power = None;

        for word in text.split(' ') {
            match word.to_ascii_lowercase().as_str() {
                "decimal" => kind = Some(NumberKind::Decimal),
                "fixedpoint" => kind = Some(NumberKind::FixedPoint),
                "percent" => kind = Some(NumberKind::Percent),
                "currency" => kind = Some(NumberKind::Currency),
                "exponential" => kind = Some(NumberKind::Exponential),
                "largenumber" => power = Some(Power::Auto),
                "thousands" => power = Some(Power::Fixed(1)),
                "millions" => power = Some(Power::Fixed(2)),
                "billions" => power = Some(Power::Fixed(3)),
                "trillions" => power = Some(Power::Fixed(4)),
                _ => {}
            }
        }

        if power.is_some() && kind.is_none() {
            kind = Some(NumberKind::FixedPoint);
        }
        kind.map(|kind| NamedNumberFormat { kind, power })
    }
}

/// Symbol for an ISO 4217 currency code, or `None` if unknown.
pub fn currency_symbol(code: &str) -> Option<&'static str> {
    let symbol = match code.to_ascii_uppercase().as_str() {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "CNY" => "CN¥",
        "RUB" => "₽",
        "INR" => "₹",
        "KRW" => "₩",
        "BRL" => "R$",
        "CAD" => "CA$",
        "AUD" => "A$",
        "CHF" => "CHF",
        "DKK" => "kr.",
        _ => return None,
    };
    Some(symbol)
}
