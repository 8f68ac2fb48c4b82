//! Logos-based formula lexer
//!
//! Splits on whitespace and folds `(`, `)` and `,` out as tokens of their
//! own, even in the middle of a word: `P(x,y)` lexes as
//! `P ( x , y )`.

use logos::Logos;
use text_size::{TextRange, TextSize};

use crate::base::Symbol;

/// Kind of a formula token. Alphabet membership is decided later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    LParen,
    RParen,
    Comma,
    /// Any other run of non-whitespace characters
    Word,
}

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub range: TextRange,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let span = self.inner.span();
        let range = TextRange::new(
            TextSize::new(span.start as u32),
            TextSize::new(span.end as u32),
        );

        let kind = match logos_token {
            Ok(t) => t.into(),
            // Every non-whitespace character matches some token.
            Err(()) => TokenKind::Word,
        };

        Some(Token {
            kind,
            text: self.inner.slice(),
            range,
        })
    }
}

/// Tokenize formula text into its ordered symbol sequence.
pub fn tokenize(input: &str) -> Vec<Symbol> {
    Lexer::new(input).map(|t| Symbol::new(t.text)).collect()
}

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"\s+")]
enum LogosToken {
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token(",")]
    Comma,

    #[regex(r"[^\s(),]+")]
    Word,
}

impl From<LogosToken> for TokenKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::LParen => TokenKind::LParen,
            LogosToken::RParen => TokenKind::RParen,
            LogosToken::Comma => TokenKind::Comma,
            LogosToken::Word => TokenKind::Word,
        }
    }
}
