//! Compilers for LDML date and number patterns.

mod date;
pub mod lexer;
mod number;
pub mod tokens;

pub use date::parse_date_pattern;
pub use number::parse_number_pattern;
