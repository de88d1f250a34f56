use num_bigint::BigInt;

use crate::diagnostics::SourceSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// ASCII digits only.
    Number,
    /// ASCII letters only.
    Identifier,
    /// Any other operand-shaped run, e.g. `a1` or `5%3`.
    Invalid,
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub lexeme: &'a str,
    pub span: SourceSpan,
}

/// Forward-only tokenizer over a normalized expression.
///
/// Whitespace is expected to be stripped already; any character that is not
/// an operator or parenthesis extends the current operand run.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
        }
    }

    fn operand(&mut self, start: usize) -> Token<'a> {
        let mut end = start;
        while let Some(&(idx, ch)) = self.chars.peek() {
            if punctuation(ch).is_some() {
                break;
            }
            self.chars.next();
            end = idx + ch.len_utf8();
        }
        let lexeme = &self.source[start..end];
        let kind = if lexeme.bytes().all(|b| b.is_ascii_digit()) {
            TokenKind::Number
        } else if lexeme.bytes().all(|b| b.is_ascii_alphabetic()) {
            TokenKind::Identifier
        } else {
            TokenKind::Invalid
        };
        Token {
            kind,
            lexeme,
            span: SourceSpan::new(start, end),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let &(start, ch) = self.chars.peek()?;
        match punctuation(ch) {
            Some(kind) => {
                self.chars.next();
                let end = start + ch.len_utf8();
                Some(Token {
                    kind,
                    lexeme: &self.source[start..end],
                    span: SourceSpan::new(start, end),
                })
            }
            None => Some(self.operand(start)),
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

fn punctuation(ch: char) -> Option<TokenKind> {
    let kind = match ch {
        '+' => TokenKind::Plus,
        '-' => TokenKind::Minus,
        '*' => TokenKind::Star,
        '/' => TokenKind::Slash,
        '^' => TokenKind::Caret,
        '(' => TokenKind::LParen,
        ')' => TokenKind::RParen,
        _ => return None,
    };
    Some(kind)
}

/// Whole-string identifier check: one or more ASCII letters.
pub fn is_identifier(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Parses an integer literal with an optional leading sign.
///
/// Only `[+-]?[0-9]+` is accepted; separators and other radix prefixes are
/// rejected before they reach the big-integer parser.
pub fn parse_integer(text: &str) -> Option<BigInt> {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
