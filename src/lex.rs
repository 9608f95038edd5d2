use std::fmt::Display;

use miette::SourceSpan;

use crate::EvalError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'de> {
    pub kind: TokenKind,
    pub literal: &'de str,
    /// Byte offset of `literal` in the whole expression.
    pub offset: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    LeftParen,
    RightParen,
    Plus,
    Minus,
    Star,
    Slash,
    /// Anything else. Not validated until the parser reaches it.
    Literal,
}

impl TokenKind {
    fn from_symbol(c: char) -> Option<Self> {
        Some(match c {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            _ => return None,
        })
    }

    pub fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Plus | TokenKind::Minus | TokenKind::Star | TokenKind::Slash
        )
    }
}

impl Token<'_> {
    pub fn span(&self) -> SourceSpan {
        SourceSpan::from(self.offset..self.offset + self.literal.len())
    }

    /// A literal is handed to the float parser only if it starts like a number.
    pub fn looks_numeric(&self) -> bool {
        self.kind == TokenKind::Literal
            && self
                .literal
                .starts_with(|c: char| c.is_ascii_digit() || c == '.')
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lit = self.literal;
        match self.kind {
            TokenKind::LeftParen => write!(f, "LEFT_PAREN {lit}"),
            TokenKind::RightParen => write!(f, "RIGHT_PAREN {lit}"),
            TokenKind::Plus => write!(f, "PLUS {lit}"),
            TokenKind::Minus => write!(f, "MINUS {lit}"),
            TokenKind::Star => write!(f, "STAR {lit}"),
            TokenKind::Slash => write!(f, "SLASH {lit}"),
            TokenKind::Literal if self.looks_numeric() => write!(f, "NUMBER {lit}"),
            TokenKind::Literal => write!(f, "UNKNOWN {lit}"),
        }
    }
}

pub struct Lexer<'de> {
    whole: &'de str,
    rest: &'de str,
    pub byte: usize,
}

impl<'de> Lexer<'de> {
    pub fn new(input: &'de str) -> Self {
        Lexer {
            whole: input,
            rest: input,
            byte: 0,
        }
    }
}

impl<'de> Iterator for Lexer<'de> {
    type Item = Token<'de>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut chars = self.rest.chars();
            let c = chars.next()?;
            let cur = self.rest;
            let offset = self.byte;

            if c.is_whitespace() {
                self.rest = chars.as_str();
                self.byte += c.len_utf8();
                continue;
            }

            if let Some(kind) = TokenKind::from_symbol(c) {
                self.rest = chars.as_str();
                self.byte += c.len_utf8();
                return Some(Token {
                    kind,
                    literal: &cur[..c.len_utf8()],
                    offset,
                });
            }

            // Accumulate up to the next separator; letters and stray symbols included.
            let end = cur
                .find(|c: char| c.is_whitespace() || TokenKind::from_symbol(c).is_some())
                .unwrap_or(cur.len());
            let literal = &cur[..end];
            self.rest = &cur[end..];
            self.byte += end;

            debug_assert_eq!(&self.whole[offset..self.byte], literal);
            return Some(Token {
                kind: TokenKind::Literal,
                literal,
                offset,
            });
        }
    }
}

/// Splits `input` into tokens, dropping whitespace.
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, EvalError> {
    let tokens: Vec<_> = Lexer::new(input).collect();
    if tokens.is_empty() {
        return Err(EvalError::EmptyExpression);
    }
    log::debug!("tokenized {} token(s) from {input:?}", tokens.len());
    Ok(tokens)
}
