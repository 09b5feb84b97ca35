//! Value formatting engine

mod date;
mod digits;
mod number;

pub(crate) use date::format_date;
pub(crate) use number::{format_named, format_non_finite, format_pattern, NamedStyle};
