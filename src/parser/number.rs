use crate::ast::{NumberPattern, SubPattern};
use crate::error::PatternError;
use crate::parser::lexer::{LexMode, Lexer};
use crate::parser::tokens::Token;

/// Compile a number pattern such as `#,##0.00;(#,##0.00)`.
///
/// A missing negative part means `-` followed by the positive part. An
/// explicit negative part contributes its prefix and suffix; the digit layout
/// always comes from the positive part.
///
/// # Examples
/// ```
/// use ldmlfmt::parser::parse_number_pattern;
///
/// let pattern = parse_number_pattern("#,##0.0#").unwrap();
/// assert_eq!(pattern.positive.grouping, vec![3]);
/// assert_eq!((pattern.positive.min_frac, pattern.positive.max_frac), (1, 2));
/// assert_eq!(pattern.negative.prefix, "-");
/// ```
pub fn parse_number_pattern(pattern: &str) -> Result<NumberPattern, PatternError> {
    if pattern.is_empty() {
        return Err(PatternError::EmptyPattern);
    }

    let tokens: Vec<Token> = Lexer::new(pattern, LexMode::Number)
        .tokenize()?
        .into_iter()
        .map(|t| t.token)
        .collect();

    let sections: Vec<&[Token]> = tokens
        .split(|t| matches!(t, Token::SectionSep))
        .collect();
    if sections.len() > 2 {
        return Err(PatternError::TooManySubPatterns {
            found: sections.len(),
        });
    }

    let positive = parse_sub_pattern(sections[0])?;
    match sections.get(1) {
        Some(tokens) => {
            let explicit = parse_sub_pattern(tokens)?;
            let negative = SubPattern {
                prefix: explicit.prefix,
                suffix: explicit.suffix,
                percent: explicit.percent,
                ..positive.clone()
            };
            Ok(NumberPattern {
                positive,
                negative,
                explicit_negative: true,
            })
        }
        None => {
            let negative = SubPattern {
                prefix: format!("-{}", positive.prefix),
                ..positive.clone()
            };
            Ok(NumberPattern {
                positive,
                negative,
                explicit_negative: false,
            })
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Stage {
    Prefix,
    Body,
    Suffix,
}

fn parse_sub_pattern(tokens: &[Token]) -> Result<SubPattern, PatternError> {
    let mut sub = SubPattern::default();
    let mut body = String::new();
    let mut stage = Stage::Prefix;

    for (index, token) in tokens.iter().enumerate() {
        if stage == Stage::Prefix && starts_body(tokens, index) {
            stage = Stage::Body;
        }
        if stage == Stage::Body {
            match token {
                Token::Zero => body.push('0'),
                Token::Hash => body.push('#'),
                Token::Group => body.push(','),
                Token::DecimalPoint if !body.contains('.') => body.push('.'),
                _ => stage = Stage::Suffix,
            }
            if stage == Stage::Body {
                continue;
            }
        }

        let text = match stage {
            Stage::Suffix => &mut sub.suffix,
            _ => &mut sub.prefix,
        };
        match token {
            Token::Literal(ch) => text.push(*ch),
            Token::Quoted(quoted) => text.push_str(quoted),
            Token::Zero => text.push('0'),
            Token::Hash => text.push('#'),
            Token::Group => text.push(','),
            Token::DecimalPoint => text.push('.'),
            Token::Percent => {
                text.push('%');
                sub.percent = true;
            }
            Token::Field { .. } | Token::TimeSeparator | Token::SectionSep | Token::Eof => {}
        }
    }

    if body.is_empty() {
        return Err(PatternError::MissingDigits);
    }
    apply_body(&mut sub, &body);
    Ok(sub)
}

/// The digit run starts at a placeholder, or at a decimal point directly
/// followed by one.
fn starts_body(tokens: &[Token], index: usize) -> bool {
    match tokens[index] {
        Token::Zero | Token::Hash => true,
        Token::DecimalPoint => matches!(
            tokens.get(index + 1),
            Some(Token::Zero) | Some(Token::Hash)
        ),
        _ => false,
    }
}

fn apply_body(sub: &mut SubPattern, body: &str) {
    let (integer, fraction) = match body.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (body, ""),
    };

    sub.min_int = integer.chars().filter(|&c| c == '0').count();

    let mut grouping: Vec<usize> = integer
        .split(',')
        .skip(1)
        .map(|group| group.chars().filter(|&c| c == '0' || c == '#').count())
        .filter(|&size| size > 0)
        .collect();
    grouping.reverse();
    sub.grouping = grouping;

    sub.min_frac = fraction.chars().filter(|&c| c == '0').count();
    sub.max_frac = sub.min_frac + fraction.chars().filter(|&c| c == '#').count();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_and_suffix_literals() {
        let pattern = parse_number_pattern("#,##0.00 РУБ").unwrap();
        assert_eq!(pattern.positive.prefix, "");
        assert_eq!(pattern.positive.suffix, " РУБ");
        assert_eq!(pattern.positive.min_int, 1);
        assert_eq!(pattern.positive.min_frac, 2);
        assert!(!pattern.explicit_negative);
    }

    #[test]
    fn test_explicit_negative_keeps_positive_layout() {
        let pattern = parse_number_pattern("##,##0.##;$minus^ {##,##0}").unwrap();
        assert_eq!(pattern.negative.prefix, "$minus^ {");
        assert_eq!(pattern.negative.suffix, "}");
        assert_eq!(pattern.negative.max_frac, 2);
        assert!(pattern.explicit_negative);
    }

    #[test]
    fn test_indian_grouping() {
        let pattern = parse_number_pattern("#,##,##0").unwrap();
        assert_eq!(pattern.positive.grouping, vec![3, 2]);
    }

    #[test]
    fn test_leading_point_starts_body() {
        let pattern = parse_number_pattern(".00").unwrap();
        assert_eq!(pattern.positive.prefix, "");
        assert_eq!(pattern.positive.min_int, 0);
        assert_eq!(pattern.positive.min_frac, 2);
    }

    #[test]
    fn test_point_in_suffix_is_literal() {
        let pattern = parse_number_pattern("0 руб.").unwrap();
        assert_eq!(pattern.positive.suffix, " руб.");
        assert_eq!(pattern.positive.max_frac, 0);
    }

    #[test]
    fn test_percent_flag() {
        let pattern = parse_number_pattern("#0.#%").unwrap();
        assert!(pattern.positive.percent);
        assert_eq!(pattern.positive.suffix, "%");

        let quoted = parse_number_pattern("#0'%'").unwrap();
        assert!(!quoted.positive.percent);
        assert_eq!(quoted.positive.suffix, "%");
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse_number_pattern(""), Err(PatternError::EmptyPattern));
        assert_eq!(
            parse_number_pattern("0;0;0"),
            Err(PatternError::TooManySubPatterns { found: 3 })
        );
        assert_eq!(parse_number_pattern("abc"), Err(PatternError::MissingDigits));
    }
}
