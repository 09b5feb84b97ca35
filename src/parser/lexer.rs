//! Lexer for LDML date and number patterns.
//!
//! The same lexer serves both pattern kinds; the [`LexMode`] decides which
//! characters are syntax:
//! - Number mode: `0 # , . % ;` are placeholders, everything else is literal
//! - Date mode: runs of a pattern letter become one field token, an unquoted
//!   `:` is the time separator
//! - Both modes: `'text'` is a quoted literal and `''` is a single quote

use crate::error::PatternError;
use crate::parser::tokens::{SpannedToken, Token};

/// Letters with a meaning in date patterns.
pub const DATE_LETTERS: &[char] = &['y', 'M', 'L', 'Q', 'E', 'a', 'd', 'H', 'h', 'm', 's', 'S'];

/// Which pattern grammar the lexer follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexMode {
    Number,
    Date,
}

/// A lexer for pattern strings.
pub struct Lexer<'a> {
    /// The input string being tokenized.
    pub(crate) input: &'a str,
    /// The current byte position in the input.
    position: usize,
    mode: LexMode,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str, mode: LexMode) -> Self {
        Self {
            input,
            position: 0,
            mode,
        }
    }

    /// Returns the next token from the input.
    pub fn next_token(&mut self) -> Result<SpannedToken, PatternError> {
        let start = self.position;
        let ch = match self.current_char() {
            Some(ch) => ch,
            None => {
                return Ok(SpannedToken {
                    token: Token::Eof,
                    start,
                    end: start,
                })
            }
        };

        let token = if ch == '\'' {
            self.lex_quoted()?
        } else {
            match self.mode {
                LexMode::Number => self.lex_number_char(ch),
                LexMode::Date => self.lex_date_char(ch),
            }
        };

        Ok(SpannedToken {
            token,
            start,
            end: self.position,
        })
    }

    fn lex_number_char(&mut self, ch: char) -> Token {
        self.advance();
        match ch {
            '0' => Token::Zero,
            '#' => Token::Hash,
            ',' => Token::Group,
            '.' => Token::DecimalPoint,
            '%' => Token::Percent,
            ';' => Token::SectionSep,
            _ => Token::Literal(ch),
        }
    }

    fn lex_date_char(&mut self, ch: char) -> Token {
        if DATE_LETTERS.contains(&ch) {
            let width = self.count_run(|c| c == ch);
            return Token::Field { letter: ch, width };
        }
        self.advance();
        if ch == ':' {
            Token::TimeSeparator
        } else {
            Token::Literal(ch)
        }
    }

    /// Returns the character at the current position, if any.
    fn current_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    /// Returns the character after the current one, if any.
    fn peek_char(&self) -> Option<char> {
        let mut chars = self.input[self.position..].chars();
        chars.next();
        chars.next()
    }

    /// Advances the position by one character.
    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position += ch.len_utf8();
        }
    }

    /// Counts and consumes consecutive characters matching the predicate.
    /// Returns the count (always >= 1 since current char matches).
    #[inline]
    fn count_run<F>(&mut self, predicate: F) -> usize
    where
        F: Fn(char) -> bool,
    {
        let mut count = 0;
        while let Some(ch) = self.current_char() {
            if predicate(ch) {
                count += 1;
                self.advance();
            } else {
                break;
            }
        }
        count
    }

    /// Lexes a quoted literal ('...'), or an escaped quote ('').
    fn lex_quoted(&mut self) -> Result<Token, PatternError> {
        let start = self.position;

        if self.peek_char() == Some('\'') {
            self.advance();
            self.advance();
            return Ok(Token::Literal('\''));
        }

        self.advance(); // Skip the opening quote
        let mut content = String::new();
        loop {
            match self.current_char() {
                Some('\'') if self.peek_char() == Some('\'') => {
                    content.push('\'');
                    self.advance();
                    self.advance();
                }
                Some('\'') => {
                    self.advance(); // Skip the closing quote
                    return Ok(Token::Quoted(content));
                }
                Some(ch) => {
                    content.push(ch);
                    self.advance();
                }
                None => return Err(PatternError::UnterminatedQuote { position: start }),
            }
        }
    }

    /// Returns all remaining tokens, excluding the final `Eof`.
    /// This consumes the lexer.
    pub fn tokenize(mut self) -> Result<Vec<SpannedToken>, PatternError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            if matches!(token.token, Token::Eof) {
                break;
            }
            tokens.push(token);
        }
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str, mode: LexMode) -> Vec<Token> {
        Lexer::new(input, mode)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.token)
            .collect()
    }

    #[test]
    fn test_empty_input() {
        let mut lexer = Lexer::new("", LexMode::Date);
        assert!(matches!(lexer.next_token().unwrap().token, Token::Eof));
    }

    #[test]
    fn test_date_runs_become_single_fields() {
        assert_eq!(
            kinds("yyyy-MM", LexMode::Date),
            vec![
                Token::Field { letter: 'y', width: 4 },
                Token::Literal('-'),
                Token::Field { letter: 'M', width: 2 },
            ]
        );
    }

    #[test]
    fn test_date_time_separator_and_quotes() {
        assert_eq!(
            kinds("HH:mm'h' ''", LexMode::Date),
            vec![
                Token::Field { letter: 'H', width: 2 },
                Token::TimeSeparator,
                Token::Field { letter: 'm', width: 2 },
                Token::Quoted("h".to_string()),
                Token::Literal(' '),
                Token::Literal('\''),
            ]
        );
    }

    #[test]
    fn test_quote_doubling_inside_quotes() {
        assert_eq!(
            kinds("'o''clock'", LexMode::Date),
            vec![Token::Quoted("o'clock".to_string())]
        );
    }

    #[test]
    fn test_number_placeholders() {
        assert_eq!(
            kinds("#,#0.0%;x", LexMode::Number),
            vec![
                Token::Hash,
                Token::Group,
                Token::Hash,
                Token::Zero,
                Token::DecimalPoint,
                Token::Zero,
                Token::Percent,
                Token::SectionSep,
                Token::Literal('x'),
            ]
        );
    }

    #[test]
    fn test_letters_are_literals_in_number_mode() {
        assert_eq!(
            kinds("d", LexMode::Number),
            vec![Token::Literal('d')]
        );
    }

    #[test]
    fn test_unterminated_quote_reports_position() {
        let err = Lexer::new("0 'abc", LexMode::Number).tokenize().unwrap_err();
        assert_eq!(err, PatternError::UnterminatedQuote { position: 2 });
    }

    #[test]
    fn test_spans_cover_multibyte_literals() {
        let tokens = Lexer::new("дd", LexMode::Date).tokenize().unwrap();
        assert_eq!((tokens[0].start, tokens[0].end), (0, 2));
        assert_eq!((tokens[1].start, tokens[1].end), (2, 3));
    }
}
