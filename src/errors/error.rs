//! Error taxonomy for every pipeline stage
//!
//! All errors are terminal for the current input: each stage stops at the
//! first violation and reports exactly one of these.

use std::path::PathBuf;

use thiserror::Error;

use super::codes::ErrorCode;
use crate::alphabet::SymbolClass;
use crate::base::{Symbol, unescape};
use crate::parser::NonTerminal;

/// Rejections raised while validating the declared alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlphabetError {
    /// A fixed-size class has the wrong number of members.
    #[error(
        "incorrect cardinality; exactly {expected} {} must be supplied, found {found}",
        .class.describe(*.expected)
    )]
    Cardinality {
        class: SymbolClass,
        expected: usize,
        found: usize,
    },

    /// A predicate's arity is not a non-negative integer.
    #[error(
        "arity of predicate '{}' is not a non-negative integer: '{arity}'",
        unescape(.predicate)
    )]
    ArityFormat { predicate: Symbol, arity: String },

    /// A symbol occurs twice within one class.
    #[error("duplicate {}: '{}'", .class.describe(1), unescape(.symbol))]
    Duplicate { class: SymbolClass, symbol: Symbol },

    /// A symbol occurs in two different classes.
    #[error(
        "found a duplicate in {} and {}: '{}'",
        .first.plural(),
        .second.plural(),
        unescape(.symbol)
    )]
    Overlap {
        first: SymbolClass,
        second: SymbolClass,
        symbol: Symbol,
    },

    /// A symbol is structural punctuation.
    #[error("{} '{}' cannot be one of '(', ')' or ','", .class.describe(1), unescape(.symbol))]
    Forbidden { class: SymbolClass, symbol: Symbol },
}

impl AlphabetError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Cardinality { .. } => ErrorCode::E0101,
            Self::ArityFormat { .. } => ErrorCode::E0102,
            Self::Duplicate { .. } => ErrorCode::E0103,
            Self::Overlap { .. } => ErrorCode::E0104,
            Self::Forbidden { .. } => ErrorCode::E0105,
        }
    }
}

/// Why a predicate occurrence failed the arity check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArityViolation {
    #[error("predicate symbol must be directly followed by '('")]
    MissingOpenParen,
    #[error("zero-arity predicates cannot take an argument list")]
    ZeroArity,
    #[error("argument list runs past the end of the formula")]
    Truncated,
    #[error("')' arrived before argument {argument}")]
    EarlyClose { argument: usize },
    #[error("argument {argument} is missing; commas must alternate with arguments")]
    MissingArgument { argument: usize },
    #[error("expected ',' after argument {argument} but found '{}'", unescape(.found))]
    ExpectedComma { argument: usize, found: Symbol },
    #[error("expected ')' after the last argument but found '{}'", unescape(.found))]
    ExpectedClose { found: Symbol },
}

/// Rejections raised by the structural checks that run before parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    #[error("opening and closing parentheses do not match ({open} '(' vs {close} ')')")]
    Balance { open: usize, close: usize },

    #[error("predicate '{}' (arity {arity}) at token {position}: {reason}", unescape(.predicate))]
    Arity {
        predicate: Symbol,
        arity: usize,
        position: usize,
        reason: ArityViolation,
    },

    #[error("'$' at token {position} is a forbidden input symbol; it denotes end of input")]
    ReservedSentinel { position: usize },
}

impl FormulaError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Balance { .. } => ErrorCode::E0201,
            Self::Arity { .. } => ErrorCode::E0202,
            Self::ReservedSentinel { .. } => ErrorCode::E0203,
        }
    }
}

/// Failures of the recursive-descent parser.
///
/// The parser never recovers; the partial tree is dropped with the error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The current token is not in the expected set.
    #[error(
        "{nonterminal}: expected {expected} but found '{}' at token {position}",
        unescape(.found)
    )]
    Expected {
        nonterminal: NonTerminal,
        expected: String,
        found: Symbol,
        position: usize,
    },

    /// The sentinel was reached inside a production.
    #[error("{nonterminal}: expected {expected} but reached end of input")]
    UnexpectedEnd {
        nonterminal: NonTerminal,
        expected: String,
    },

    /// A complete formula was parsed but tokens remain.
    #[error("expected end of input but found '{}' at token {position}", unescape(.found))]
    TrailingInput { found: Symbol, position: usize },

    #[error("formula nesting exceeds the limit of {limit} at token {position}")]
    TooDeep { limit: usize, position: usize },

    /// The tree was never extended beyond its root.
    #[error("nothing was parsed; the formula is empty")]
    Empty,
}

impl ParseError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Expected { .. } => ErrorCode::E0301,
            Self::UnexpectedEnd { .. } => ErrorCode::E0302,
            Self::TrailingInput { .. } => ErrorCode::E0303,
            Self::TooDeep { .. } => ErrorCode::E0304,
            Self::Empty => ErrorCode::E0305,
        }
    }
}

/// Failures reading inputs or writing outputs.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported file extension for {}; expected a .txt file", .path.display())]
    UnsupportedExtension { path: PathBuf },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Read { .. } => ErrorCode::E0901,
            Self::UnsupportedExtension { .. } => ErrorCode::E0902,
            Self::Write { .. } => ErrorCode::E0903,
        }
    }
}

/// Any failure of the pipeline.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Alphabet(#[from] AlphabetError),
    #[error(transparent)]
    Formula(#[from] FormulaError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Load(#[from] LoadError),
}

impl Error {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Alphabet(e) => e.code(),
            Self::Formula(e) => e.code(),
            Self::Parse(e) => e.code(),
            Self::Load(e) => e.code(),
        }
    }

    /// Format as `CODE: message`
    pub fn format(&self) -> String {
        format!("{}: {}", self.code(), self)
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
