//! Token types for the LDML pattern lexer.

/// A token in a date or number pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    // Literals
    Literal(char),
    Quoted(String),

    // Number placeholders
    Zero,         // 0
    Hash,         // #
    Group,        // ,
    DecimalPoint, // .
    Percent,      // %
    SectionSep,   // ;

    // Date fields: a run of one pattern letter
    Field { letter: char, width: usize },
    TimeSeparator, // :

    // End of input
    Eof,
}

/// A token with its byte span in the source.
#[derive(Debug, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub start: usize,
    pub end: usize,
}
