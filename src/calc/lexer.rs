// ABOUTME: Lexer for arithmetic expressions - turns text into positioned tokens.
// ABOUTME: Knows only numbers, the five operators, parentheses and comma.

use std::fmt;

use crate::error::CalcError;

/// Kind of a lexical token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Int(i64),
    Float(f64),
    Plus,
    Minus,
    Star,
    StarStar,
    Slash,
    SlashSlash,
    LParen,
    RParen,
    Comma,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Int(n) => write!(f, "{}", n),
            TokenKind::Float(x) => write!(f, "{}", x),
            TokenKind::Plus => f.write_str("+"),
            TokenKind::Minus => f.write_str("-"),
            TokenKind::Star => f.write_str("*"),
            TokenKind::StarStar => f.write_str("**"),
            TokenKind::Slash => f.write_str("/"),
            TokenKind::SlashSlash => f.write_str("//"),
            TokenKind::LParen => f.write_str("("),
            TokenKind::RParen => f.write_str(")"),
            TokenKind::Comma => f.write_str(","),
        }
    }
}

/// A token with its byte offset in the source expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: usize,
}

/// Split an expression into tokens. Whitespace is skipped.
pub fn tokenize(input: &str) -> Result<Vec<Token>, CalcError> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i];
        let pos = i;

        let kind = match c {
            b' ' | b'\t' | b'\n' | b'\r' => {
                i += 1;
                continue;
            }
            b'0'..=b'9' | b'.' => {
                let (kind, end) = lex_number(input, pos)?;
                i = end;
                tokens.push(Token { kind, pos });
                continue;
            }
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'*' if bytes.get(i + 1) == Some(&b'*') => {
                i += 1;
                TokenKind::StarStar
            }
            b'*' => TokenKind::Star,
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                i += 1;
                TokenKind::SlashSlash
            }
            b'/' => TokenKind::Slash,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b',' => TokenKind::Comma,
            _ => {
                let ch = input[pos..].chars().next().unwrap_or('\u{FFFD}');
                return Err(CalcError::UnexpectedChar { ch, pos });
            }
        };

        i += 1;
        tokens.push(Token { kind, pos });
    }

    Ok(tokens)
}

/// Lex a numeric literal starting at `start`, returning the token and the end offset.
fn lex_number(input: &str, start: usize) -> Result<(TokenKind, usize), CalcError> {
    let bytes = input.as_bytes();
    let mut end = start;
    let mut seen_dot = false;

    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => end += 1,
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }

    let text = &input[start..end];
    let invalid = || CalcError::InvalidNumber {
        text: text.to_string(),
        pos: start,
    };

    if text == "." {
        return Err(invalid());
    }

    if seen_dot {
        let value: f64 = text.parse().map_err(|_| invalid())?;
        return Ok((TokenKind::Float(value), end));
    }

    // "007" is ambiguous; only a run of zeros may start with 0.
    if text.len() > 1 && text.starts_with('0') && text.bytes().any(|b| b != b'0') {
        return Err(invalid());
    }

    match text.parse::<i64>() {
        Ok(value) => Ok((TokenKind::Int(value), end)),
        Err(_) => Err(CalcError::Overflow),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_tokenize_operators() {
        assert_eq!(
            kinds("1 ** 2 // 3"),
            vec![
                TokenKind::Int(1),
                TokenKind::StarStar,
                TokenKind::Int(2),
                TokenKind::SlashSlash,
                TokenKind::Int(3),
            ]
        );
    }

    #[test]
    fn test_tokenize_decimals() {
        assert_eq!(
            kinds("1.5 .5 5."),
            vec![
                TokenKind::Float(1.5),
                TokenKind::Float(0.5),
                TokenKind::Float(5.0)
            ]
        );
    }

    #[test]
    fn test_tokenize_positions() {
        let tokens = tokenize("12 + (3)").unwrap();
        let positions: Vec<_> = tokens.iter().map(|t| t.pos).collect();
        assert_eq!(positions, vec![0, 3, 5, 6, 7]);
    }

    #[test]
    fn test_tokenize_rejects_letters() {
        let err = tokenize("2 + x").unwrap_err();
        assert_eq!(err, CalcError::UnexpectedChar { ch: 'x', pos: 4 });
    }

    #[test]
    fn test_tokenize_rejects_lone_dot_and_leading_zero() {
        assert!(matches!(
            tokenize("1 + ."),
            Err(CalcError::InvalidNumber { .. })
        ));
        assert!(matches!(
            tokenize("007"),
            Err(CalcError::InvalidNumber { .. })
        ));
        assert_eq!(kinds("00"), vec![TokenKind::Int(0)]);
    }

    #[test]
    fn test_tokenize_integer_overflow() {
        assert_eq!(
            tokenize("99999999999999999999"),
            Err(CalcError::Overflow)
        );
    }
}
