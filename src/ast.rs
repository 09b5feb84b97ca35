//! AST types for compiled LDML patterns.

use std::fmt;

use crate::locale::NameWidth;

/// A compiled number pattern such as `#,##0.00;(#,##0.00)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberPattern {
    pub positive: SubPattern,
    /// Used for values below zero (and negative zero).
    pub negative: SubPattern,
    /// Whether the pattern spelled out its negative part after a `;`.
    pub explicit_negative: bool,
}

impl NumberPattern {
    /// Sub-pattern for a value of the given sign.
    pub fn select(&self, negative: bool) -> &SubPattern {
        if negative {
            &self.negative
        } else {
            &self.positive
        }
    }
}

/// One side of a number pattern.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubPattern {
    /// Literal text before the digits.
    pub prefix: String,
    /// Literal text after the digits.
    pub suffix: String,
    /// Number of `0` placeholders in the integer part.
    pub min_int: usize,
    /// Integer group sizes, innermost first. The last size repeats.
    pub grouping: Vec<usize>,
    pub min_frac: usize,
    pub max_frac: usize,
    /// An unquoted `%` multiplies the value by 100.
    pub percent: bool,
}

/// The kind of a date pattern field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateFieldKind {
    Year,             // y
    Month,            // M
    StandaloneMonth,  // L
    Quarter,          // Q
    DayOfWeek,        // E
    Period,           // a
    Day,              // d
    Hour24,           // H
    Hour12,           // h
    Minute,           // m
    Second,           // s
    FractionalSecond, // S
}

impl DateFieldKind {
    /// The field a pattern letter denotes.
    pub fn from_letter(letter: char) -> Option<DateFieldKind> {
        let kind = match letter {
            'y' => DateFieldKind::Year,
            'M' => DateFieldKind::Month,
            'L' => DateFieldKind::StandaloneMonth,
            'Q' => DateFieldKind::Quarter,
            'E' => DateFieldKind::DayOfWeek,
            'a' => DateFieldKind::Period,
            'd' => DateFieldKind::Day,
            'H' => DateFieldKind::Hour24,
            'h' => DateFieldKind::Hour12,
            'm' => DateFieldKind::Minute,
            's' => DateFieldKind::Second,
            'S' => DateFieldKind::FractionalSecond,
            _ => return None,
        };
        Some(kind)
    }

    pub fn letter(self) -> char {
        match self {
            DateFieldKind::Year => 'y',
            DateFieldKind::Month => 'M',
            DateFieldKind::StandaloneMonth => 'L',
            DateFieldKind::Quarter => 'Q',
            DateFieldKind::DayOfWeek => 'E',
            DateFieldKind::Period => 'a',
            DateFieldKind::Day => 'd',
            DateFieldKind::Hour24 => 'H',
            DateFieldKind::Hour12 => 'h',
            DateFieldKind::Minute => 'm',
            DateFieldKind::Second => 's',
            DateFieldKind::FractionalSecond => 'S',
        }
    }
}

/// A field with its repeat count, e.g. `MMMM` is `Month` of width 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateField {
    pub kind: DateFieldKind,
    pub width: usize,
}

impl DateField {
    pub fn new(kind: DateFieldKind, width: usize) -> Self {
        DateField { kind, width }
    }

    /// Width of the names this field renders, or `None` for numeric fields.
    pub fn name_width(&self) -> Option<NameWidth> {
        match self.kind {
            DateFieldKind::Month | DateFieldKind::StandaloneMonth | DateFieldKind::Quarter
                if self.width >= 3 =>
            {
                NameWidth::from_count(self.width.min(5))
            }
            DateFieldKind::DayOfWeek => {
                NameWidth::from_count(self.width.clamp(3, 5))
            }
            _ => None,
        }
    }

    /// Whether the field renders as digits.
    pub fn is_numeric(&self) -> bool {
        !matches!(self.kind, DateFieldKind::Period) && self.name_width().is_none()
    }
}

/// An element of a compiled date pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateToken {
    Field(DateField),
    Literal(String),
    /// Unquoted `:`.
    TimeSeparator,
}

/// Date components reported by [`DatePattern::parts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatePartKind {
    Month,
    Day,
    Year,
    Hours,
    Minutes,
    Seconds,
    Milliseconds,
}

impl DatePartKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DatePartKind::Month => "month",
            DatePartKind::Day => "day",
            DatePartKind::Year => "year",
            DatePartKind::Hours => "hours",
            DatePartKind::Minutes => "minutes",
            DatePartKind::Seconds => "seconds",
            DatePartKind::Milliseconds => "milliseconds",
        }
    }
}

impl fmt::Display for DatePartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A compiled date pattern. Token order is significant for both formatting
/// and parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    pub tokens: Vec<DateToken>,
}

impl DatePattern {
    /// Fields in pattern order.
    pub fn fields(&self) -> impl Iterator<Item = &DateField> {
        self.tokens.iter().filter_map(|token| match token {
            DateToken::Field(field) => Some(field),
            _ => None,
        })
    }

    pub fn has_field(&self, kind: DateFieldKind) -> bool {
        self.fields().any(|f| f.kind == kind)
    }

    /// A format-context month rendered as a wide or narrow name.
    pub fn uses_month_name(&self) -> bool {
        self.fields()
            .any(|f| f.kind == DateFieldKind::Month && f.width >= 4)
    }

    /// A day of week rendered as a wide or narrow name.
    pub fn uses_day_name(&self) -> bool {
        self.fields()
            .any(|f| f.kind == DateFieldKind::DayOfWeek && f.width >= 4)
    }

    /// Distinct date components in the order they first appear.
    pub fn parts(&self) -> Vec<DatePartKind> {
        let mut parts = Vec::new();
        for field in self.fields() {
            let part = match field.kind {
                DateFieldKind::Month => DatePartKind::Month,
                DateFieldKind::Day => DatePartKind::Day,
                DateFieldKind::Year => DatePartKind::Year,
                DateFieldKind::Hour24 | DateFieldKind::Hour12 => DatePartKind::Hours,
                DateFieldKind::Minute => DatePartKind::Minutes,
                DateFieldKind::Second => DatePartKind::Seconds,
                DateFieldKind::FractionalSecond => DatePartKind::Milliseconds,
                DateFieldKind::StandaloneMonth
                | DateFieldKind::Quarter
                | DateFieldKind::DayOfWeek
                | DateFieldKind::Period => continue,
            };
            if !parts.contains(&part) {
                parts.push(part);
            }
        }
        parts
    }

    /// Two numeric fields touch with no literal between them and the first
    /// one is a single letter, so a parse cannot tell where it ends.
    pub fn has_ambiguous_fields(&self) -> bool {
        self.tokens.windows(2).any(|pair| match pair {
            [DateToken::Field(first), DateToken::Field(second)] => {
                first.is_numeric()
                    && second.is_numeric()
                    && first.kind != DateFieldKind::FractionalSecond
                    && first.width < 2
            }
            _ => false,
        })
    }
}
