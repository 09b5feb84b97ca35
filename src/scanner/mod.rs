//! Text scanning: reading values back out of formatted text

mod date;
mod infer;
mod number;

pub(crate) use date::scan_date;
pub(crate) use infer::infer_pattern;
pub(crate) use number::{scan_number, NumberScan};
