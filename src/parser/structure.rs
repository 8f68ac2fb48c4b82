//! Structural checks run on the token sequence before parsing
//!
//! - the end-of-input marker must not occur literally
//! - parentheses must balance
//! - every predicate occurrence must carry exactly its declared number of
//!   comma-separated arguments

use tracing::debug;

use crate::alphabet::Alphabet;
use crate::base::Symbol;
use crate::base::constants::{COMMA, L_PAREN, R_PAREN, SENTINEL};
use crate::errors::{ArityViolation, FormulaError};

/// Run every structural check, stopping at the first failure.
pub fn check_structure(alphabet: &Alphabet, tokens: &[Symbol]) -> Result<(), FormulaError> {
    check_sentinel(tokens)?;
    check_balance(tokens)?;
    check_arity(alphabet, tokens)?;
    debug!(tokens = tokens.len(), "formula structure checked");
    Ok(())
}

/// Reject a literal end-of-input marker.
pub fn check_sentinel(tokens: &[Symbol]) -> Result<(), FormulaError> {
    match tokens.iter().position(|t| t == SENTINEL) {
        Some(position) => Err(FormulaError::ReservedSentinel { position }),
        None => Ok(()),
    }
}

/// Count `(` against `)`.
pub fn check_balance(tokens: &[Symbol]) -> Result<(), FormulaError> {
    let open = tokens.iter().filter(|t| *t == L_PAREN).count();
    let close = tokens.iter().filter(|t| *t == R_PAREN).count();
    if open == close {
        Ok(())
    } else {
        Err(FormulaError::Balance { open, close })
    }
}

/// Check every predicate occurrence against its declared arity.
pub fn check_arity(alphabet: &Alphabet, tokens: &[Symbol]) -> Result<(), FormulaError> {
    for (position, token) in tokens.iter().enumerate() {
        let Some(arity) = alphabet.arity(token) else {
            continue;
        };
        check_occurrence(tokens, position, arity).map_err(|reason| FormulaError::Arity {
            predicate: token.clone(),
            arity,
            position,
            reason,
        })?;
    }
    Ok(())
}

/// `Z ( arg , arg , ... )` with exactly `arity` arguments.
///
/// Argument `k` (1-based) sits at offset `2k` past the predicate, the
/// separators in between, and `)` at offset `2 * arity + 1`.
fn check_occurrence(tokens: &[Symbol], start: usize, arity: usize) -> Result<(), ArityViolation> {
    let at = |offset: usize| tokens.get(start + offset).map(Symbol::as_str);

    match at(1) {
        Some(L_PAREN) => {}
        Some(_) => return Err(ArityViolation::MissingOpenParen),
        None => return Err(ArityViolation::Truncated),
    }
    if arity == 0 {
        return Err(ArityViolation::ZeroArity);
    }

    for argument in 1..=arity {
        let offset = 2 * argument;
        match at(offset) {
            None => return Err(ArityViolation::Truncated),
            Some(R_PAREN) => return Err(ArityViolation::EarlyClose { argument }),
            Some(COMMA) => return Err(ArityViolation::MissingArgument { argument }),
            Some(_) => {}
        }

        match (at(offset + 1), argument < arity) {
            (None, _) => return Err(ArityViolation::Truncated),
            (Some(COMMA), true) | (Some(R_PAREN), false) => {}
            (Some(R_PAREN), true) => {
                return Err(ArityViolation::EarlyClose {
                    argument: argument + 1,
                });
            }
            (Some(found), true) => {
                return Err(ArityViolation::ExpectedComma {
                    argument,
                    found: Symbol::new(found),
                });
            }
            (Some(found), false) => {
                return Err(ArityViolation::ExpectedClose {
                    found: Symbol::new(found),
                });
            }
        }
    }
    Ok(())
}
