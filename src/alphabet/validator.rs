//! Alphabet validation
//!
//! Rules run in a fixed order and the first failure wins:
//! 1. cardinality of equality, connectives and quantifiers
//! 2. predicate arities parse as non-negative integers
//! 3. no duplicates within a class
//! 4. no symbol shared by two classes (all 15 pairs)
//! 5. no symbol equal to `(`, `)` or `,`

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use tracing::debug;

use super::{Alphabet, RawAlphabet, SymbolClass};
use crate::base::Symbol;
use crate::base::constants::{CONNECTIVE_COUNT, EQUALITY_COUNT, PUNCTUATION, QUANTIFIER_COUNT};
use crate::errors::AlphabetError;

/// Classes checked for duplicates. Equality has exactly one member.
const DUPLICATE_CHECKED: [SymbolClass; 5] = [
    SymbolClass::Variable,
    SymbolClass::Constant,
    SymbolClass::Predicate,
    SymbolClass::Connective,
    SymbolClass::Quantifier,
];

/// Order in which class pairs and forbidden symbols are checked.
const CHECK_ORDER: [SymbolClass; 6] = [
    SymbolClass::Variable,
    SymbolClass::Constant,
    SymbolClass::Predicate,
    SymbolClass::Quantifier,
    SymbolClass::Connective,
    SymbolClass::Equality,
];

/// Validate a raw alphabet, producing the read-only [`Alphabet`].
pub fn validate(raw: &RawAlphabet) -> Result<Alphabet, AlphabetError> {
    check_cardinality(raw)?;
    let predicates = parse_arities(raw)?;
    check_duplicates(raw)?;
    check_disjoint(raw)?;
    check_forbidden(raw)?;

    let [equality] = fixed(SymbolClass::Equality, &raw.equality)?;
    let alphabet = Alphabet {
        variables: raw.variables.iter().cloned().collect(),
        constants: raw.constants.iter().cloned().collect(),
        predicates,
        equality,
        connectives: fixed(SymbolClass::Connective, &raw.connectives)?,
        quantifiers: fixed(SymbolClass::Quantifier, &raw.quantifiers)?,
    };
    debug!(
        variables = alphabet.variables.len(),
        constants = alphabet.constants.len(),
        predicates = alphabet.predicates.len(),
        "alphabet validated"
    );
    Ok(alphabet)
}

fn check_cardinality(raw: &RawAlphabet) -> Result<(), AlphabetError> {
    let required = [
        (SymbolClass::Equality, EQUALITY_COUNT, &raw.equality),
        (SymbolClass::Connective, CONNECTIVE_COUNT, &raw.connectives),
        (SymbolClass::Quantifier, QUANTIFIER_COUNT, &raw.quantifiers),
    ];
    for (class, expected, members) in required {
        let found = members.len();
        if expected != found {
            return Err(AlphabetError::Cardinality {
                class,
                expected,
                found,
            });
        }
    }
    Ok(())
}

fn parse_arities(raw: &RawAlphabet) -> Result<IndexMap<Symbol, usize>, AlphabetError> {
    let mut predicates = IndexMap::with_capacity(raw.predicates.len());
    for predicate in &raw.predicates {
        let arity = predicate
            .arity
            .trim()
            .parse::<usize>()
            .map_err(|_| AlphabetError::ArityFormat {
                predicate: predicate.symbol.clone(),
                arity: predicate.arity.clone(),
            })?;
        // Duplicate names are reported by `check_duplicates`; keep the first.
        predicates.entry(predicate.symbol.clone()).or_insert(arity);
    }
    Ok(predicates)
}

fn check_duplicates(raw: &RawAlphabet) -> Result<(), AlphabetError> {
    for class in DUPLICATE_CHECKED {
        let mut seen = FxHashSet::default();
        if let Some(symbol) = raw.members(class).into_iter().find(|s| !seen.insert(*s)) {
            return Err(AlphabetError::Duplicate {
                class,
                symbol: symbol.clone(),
            });
        }
    }
    Ok(())
}

fn check_disjoint(raw: &RawAlphabet) -> Result<(), AlphabetError> {
    let members: Vec<(SymbolClass, Vec<&Symbol>)> =
        CHECK_ORDER.iter().map(|&c| (c, raw.members(c))).collect();

    for (i, (first, first_members)) in members.iter().enumerate() {
        for (second, second_members) in &members[i + 1..] {
            let lookup: FxHashSet<&Symbol> = second_members.iter().copied().collect();
            if let Some(symbol) = first_members.iter().find(|s| lookup.contains(*s)) {
                return Err(AlphabetError::Overlap {
                    first: *first,
                    second: *second,
                    symbol: (*symbol).clone(),
                });
            }
        }
    }
    Ok(())
}

fn check_forbidden(raw: &RawAlphabet) -> Result<(), AlphabetError> {
    for class in CHECK_ORDER {
        if let Some(symbol) = raw
            .members(class)
            .into_iter()
            .find(|s| PUNCTUATION.contains(&s.as_str()))
        {
            return Err(AlphabetError::Forbidden {
                class,
                symbol: symbol.clone(),
            });
        }
    }
    Ok(())
}

/// Copy a class whose size was already checked into a fixed array.
fn fixed<const N: usize>(
    class: SymbolClass,
    symbols: &[Symbol],
) -> Result<[Symbol; N], AlphabetError> {
    symbols
        .to_vec()
        .try_into()
        .map_err(|v: Vec<Symbol>| AlphabetError::Cardinality {
            class,
            expected: N,
            found: v.len(),
        })
}
