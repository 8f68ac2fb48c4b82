//! Formula lexing, structural validation and recursive-descent parsing
//!
//! ## Architecture
//!
//! ```text
//! Formula text
//!     ↓
//! Lexer (logos) → token sequence
//!     ↓
//! Structural checks → sentinel, parenthesis balance, predicate arity
//!     ↓
//! Parser → ParseTree (arena of labelled nodes)
//! ```
//!
//! The grammar itself lives in [`productions`], shared with the grammar
//! generator so both read the same nine productions.

#[allow(clippy::module_inception)]
mod parser;

mod lexer;
pub mod productions;
mod structure;
mod tree;

pub use lexer::{Lexer, Token, TokenKind, tokenize};
pub use parser::{DEFAULT_MAX_DEPTH, parse, parse_with_limit};
pub use productions::{
    FORMULA_ALTERNATIVES, FormulaAlternative, FormulaRule, NonTerminal, Peek, TokenClass,
    select_formula,
};
pub use structure::{check_arity, check_balance, check_sentinel, check_structure};
pub use tree::{NodeId, NodeLabel, ParseTree, Preorder};

#[cfg(test)]
mod tests;
