//! Warnings reported through an injected sink instead of being raised.

use std::fmt;
use std::sync::Mutex;

/// A recoverable misconfiguration detected by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A number parse was requested with a custom formatter but no parser.
    NumberParserMissing,
    /// A date parse was requested with a custom formatter but no parser,
    /// and no pattern could be inferred from the formatter.
    DateParserMissing,
    /// A format pattern failed to compile.
    InvalidPattern { pattern: String, reason: String },
    /// A date pattern has adjacent numeric fields that parsing cannot split.
    AmbiguousPattern { pattern: String },
}

impl Warning {
    /// Stable identifier of this warning.
    pub fn id(&self) -> &'static str {
        match self {
            Warning::NumberParserMissing => "W0011",
            Warning::DateParserMissing => "W0012",
            Warning::InvalidPattern { .. } => "W0013",
            Warning::AmbiguousPattern { .. } => "W0014",
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - ", self.id())?;
        match self {
            Warning::NumberParserMissing => {
                f.write_str("Number parsing is invoked while the parser is not defined")
            }
            Warning::DateParserMissing => {
                f.write_str("Date parsing is invoked while the parser is not defined")
            }
            Warning::InvalidPattern { pattern, reason } => {
                write!(f, "The format pattern '{pattern}' is invalid: {reason}")
            }
            Warning::AmbiguousPattern { pattern } => {
                write!(f, "The following format may be parsed incorrectly: {pattern}")
            }
        }
    }
}

/// Receiver for engine warnings. Implementations must not panic.
pub trait WarningSink: Send + Sync {
    fn warn(&self, message: &str);
}

/// Default sink: forwards every warning to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn warn(&self, message: &str) {
        tracing::warn!(target: "ldmlfmt", "{message}");
    }
}

/// Sink that keeps every message, in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded messages.
    pub fn messages(&self) -> Vec<String> {
        match self.messages.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.messages().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl WarningSink for RecordingSink {
    fn warn(&self, message: &str) {
        match self.messages.lock() {
            Ok(mut guard) => guard.push(message.to_string()),
            Err(poisoned) => poisoned.into_inner().push(message.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_starts_after_id_prefix() {
        let text = Warning::NumberParserMissing.to_string();
        assert_eq!(
            &text[8..],
            "Number parsing is invoked while the parser is not defined"
        );
        assert!(text.starts_with("W0011 - "));
    }

    #[test]
    fn test_recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        sink.warn("first");
        sink.warn("second");
        assert_eq!(sink.messages(), vec!["first", "second"]);
    }
}
