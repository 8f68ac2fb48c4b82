#![allow(clippy::unwrap_used, clippy::expect_used)]

mod tests_loader;

use crate::alphabet::{RawAlphabet, RawPredicate};
use crate::base::Symbol;

pub(super) fn symbols(words: &[&str]) -> Vec<Symbol> {
    words.iter().map(Symbol::new).collect()
}

pub(super) fn predicate(symbol: &str, arity: &str) -> RawPredicate {
    RawPredicate {
        symbol: Symbol::new(symbol),
        arity: arity.to_string(),
    }
}

/// A well-formed alphabet every validator test mutates.
pub(super) fn valid_raw() -> RawAlphabet {
    RawAlphabet {
        variables: symbols(&["x", "y"]),
        constants: symbols(&["a", "b"]),
        predicates: vec![predicate("P", "1"), predicate("R", "2")],
        equality: symbols(&["="]),
        connectives: symbols(&["AND", "OR", "IMPLIES", "IFF", "NOT"]),
        quantifiers: symbols(&["FORALL", "EXISTS"]),
    }
}
