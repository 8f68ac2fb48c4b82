#![allow(clippy::unwrap_used, clippy::expect_used)]

mod tests_parser;

use crate::alphabet::{Alphabet, RawAlphabet, RawPredicate, validate};
use crate::base::Symbol;
use crate::parser::tokenize;

fn words(s: &str) -> Vec<Symbol> {
    s.split_whitespace().map(Symbol::new).collect()
}

/// `x y` / `a b` / `P[1] R[2] S[0]` / `=` / `and or implies iff not` /
/// `forall exists`
pub(super) fn alphabet() -> Alphabet {
    let raw = RawAlphabet {
        variables: words("x y"),
        constants: words("a b"),
        predicates: [("P", "1"), ("R", "2"), ("S", "0")]
            .into_iter()
            .map(|(symbol, arity)| RawPredicate {
                symbol: symbol.into(),
                arity: arity.into(),
            })
            .collect(),
        equality: words("="),
        connectives: words("and or implies iff not"),
        quantifiers: words("forall exists"),
    };
    validate(&raw).unwrap()
}

pub(super) fn tokens(formula: &str) -> Vec<Symbol> {
    tokenize(formula)
}
