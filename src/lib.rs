//! ldmlfmt - locale-aware LDML formatting and parsing
//!
//! This crate formats and parses dates, numbers and message strings. A value
//! is rendered through a format descriptor: a named format such as
//! `"shortDate"` or `"percent largeNumber"`, an LDML pattern such as
//! `"dd/MM/yyyy"` or `"#,##0.00;(#,##0.00)"`, or a pair of custom functions.
//! Parsing takes the same descriptor and reconstructs the value, filling the
//! date components the text does not carry from a reference moment.
//!
//! ```
//! use chrono::NaiveDate;
//! use ldmlfmt::Localization;
//!
//! let mut l10n = Localization::new();
//! let date = NaiveDate::from_ymd_opt(2015, 3, 2).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! assert_eq!(l10n.format_date(Some(&date), "dd/MM/yyyy").as_deref(), Some("02/03/2015"));
//!
//! l10n.set_locale("ru");
//! assert_eq!(l10n.format_date(Some(&date), "d MMMM").as_deref(), Some("2 марта"));
//! ```

pub mod ast;
pub mod descriptor;
pub mod error;
pub mod locale;
pub mod message;
pub mod named;
pub mod options;
pub mod parser;
pub mod warning;

mod cache;
mod context;
mod formatter;
mod scanner;

pub use ast::{DatePartKind, DatePattern, NumberPattern};
pub use context::{Localization, DEFAULT_LOCALIZABLE_PREFIX};
pub use descriptor::{CustomFormat, DateFormat, Format, FormatOptions, NumberFormat, Precision};
pub use error::PatternError;
pub use locale::{BuiltinLocales, LocaleData, LocaleProvider, NameContext, NameWidth};
pub use message::{MessageCatalog, MessageFormatter};
pub use options::{Config, NegativeCurrencyStyle};
pub use warning::{RecordingSink, TracingSink, Warning, WarningSink};
