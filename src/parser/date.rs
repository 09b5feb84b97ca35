use crate::ast::{DateField, DateFieldKind, DatePattern, DateToken};
use crate::error::PatternError;
use crate::parser::lexer::{LexMode, Lexer};
use crate::parser::tokens::Token;

/// Compile a date pattern such as `EEEE, MMMM d, y`.
///
/// Adjacent literal characters and quoted runs are merged into one literal
/// token.
pub fn parse_date_pattern(pattern: &str) -> Result<DatePattern, PatternError> {
    if pattern.is_empty() {
        return Err(PatternError::EmptyPattern);
    }

    let mut tokens: Vec<DateToken> = Vec::new();
    for spanned in Lexer::new(pattern, LexMode::Date).tokenize()? {
        match spanned.token {
            Token::Field { letter, width } => {
                if let Some(kind) = DateFieldKind::from_letter(letter) {
                    tokens.push(DateToken::Field(DateField::new(kind, width)));
                }
            }
            Token::TimeSeparator => tokens.push(DateToken::TimeSeparator),
            Token::Literal(ch) => push_literal(&mut tokens, &ch.to_string()),
            Token::Quoted(text) => push_literal(&mut tokens, &text),
            _ => {}
        }
    }

    Ok(DatePattern { tokens })
}

fn push_literal(tokens: &mut Vec<DateToken>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(DateToken::Literal(last)) = tokens.last_mut() {
        last.push_str(text);
    } else {
        tokens.push(DateToken::Literal(text.to_string()));
    }
}
