//! Alphabet model, loader and validator
//!
//! ```text
//! definition lines ──load──▶ Definition { RawAlphabet, formula tokens }
//!                                  │
//!                              validate
//!                                  ▼
//!                              Alphabet (read-only)
//! ```
//!
//! A [`RawAlphabet`] is whatever the definition file said, including
//! malformed arities and duplicates. An [`Alphabet`] can only be obtained
//! through [`validate`], so holding one means every rule has passed.

mod loader;
mod validator;

use std::fmt;

use indexmap::{IndexMap, IndexSet};

use crate::base::Symbol;
use crate::base::constants::{CONNECTIVE_COUNT, QUANTIFIER_COUNT};

pub use loader::{Category, DefinitionLine, classify_line, load_definition, load_str};
pub use validator::validate;

// ============================================================================
// SYMBOL CLASSES
// ============================================================================

/// The six disjoint classes of declared symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SymbolClass {
    Variable,
    Constant,
    Predicate,
    Equality,
    Connective,
    Quantifier,
}

impl SymbolClass {
    pub const ALL: [SymbolClass; 6] = [
        Self::Variable,
        Self::Constant,
        Self::Predicate,
        Self::Equality,
        Self::Connective,
        Self::Quantifier,
    ];

    pub fn singular(&self) -> &'static str {
        match self {
            Self::Variable => "variable",
            Self::Constant => "constant",
            Self::Predicate => "predicate symbol",
            Self::Equality => "equality symbol",
            Self::Connective => "connective",
            Self::Quantifier => "quantifier",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            Self::Variable => "variables",
            Self::Constant => "constants",
            Self::Predicate => "predicate symbols",
            Self::Equality => "equality",
            Self::Connective => "connectives",
            Self::Quantifier => "quantifiers",
        }
    }

    /// Noun phrase agreeing with `count`.
    pub fn describe(&self, count: usize) -> &'static str {
        if count == 1 {
            self.singular()
        } else {
            self.plural()
        }
    }
}

impl fmt::Display for SymbolClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.plural())
    }
}

/// Positional role of each declared connective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectiveRole {
    And,
    Or,
    Implies,
    Iff,
    Not,
}

impl ConnectiveRole {
    /// Declaration order in the `connectives:` section.
    pub const ALL: [ConnectiveRole; CONNECTIVE_COUNT] =
        [Self::And, Self::Or, Self::Implies, Self::Iff, Self::Not];

    /// Roles usable between two formulas.
    pub const BINARY: [ConnectiveRole; 4] = [Self::And, Self::Or, Self::Implies, Self::Iff];

    fn index(self) -> usize {
        self as usize
    }
}

/// Positional role of each declared quantifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuantifierRole {
    Universal,
    Existential,
}

impl QuantifierRole {
    /// Declaration order in the `quantifiers:` section.
    pub const ALL: [QuantifierRole; QUANTIFIER_COUNT] = [Self::Universal, Self::Existential];

    fn index(self) -> usize {
        self as usize
    }
}

// ============================================================================
// RAW (UNVALIDATED) DEFINITION
// ============================================================================

/// A predicate as written, `symbol[arity]`, before the arity is checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPredicate {
    pub symbol: Symbol,
    pub arity: String,
}

/// Symbol classes exactly as loaded, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawAlphabet {
    pub variables: Vec<Symbol>,
    pub constants: Vec<Symbol>,
    pub predicates: Vec<RawPredicate>,
    pub equality: Vec<Symbol>,
    pub connectives: Vec<Symbol>,
    pub quantifiers: Vec<Symbol>,
}

impl RawAlphabet {
    pub fn predicate_symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.predicates.iter().map(|p| &p.symbol)
    }

    /// Members of `class`, in declaration order.
    pub fn members(&self, class: SymbolClass) -> Vec<&Symbol> {
        match class {
            SymbolClass::Variable => self.variables.iter().collect(),
            SymbolClass::Constant => self.constants.iter().collect(),
            SymbolClass::Predicate => self.predicate_symbols().collect(),
            SymbolClass::Equality => self.equality.iter().collect(),
            SymbolClass::Connective => self.connectives.iter().collect(),
            SymbolClass::Quantifier => self.quantifiers.iter().collect(),
        }
    }
}

/// Everything a definition file declares: the alphabet and the formula.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Definition {
    pub alphabet: RawAlphabet,
    /// Formula tokens in source order, escaped like every other symbol.
    pub formula: Vec<Symbol>,
}

// ============================================================================
// VALIDATED ALPHABET
// ============================================================================

/// A validated alphabet.
///
/// Classes are pairwise disjoint, duplicate-free and free of punctuation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    variables: IndexSet<Symbol>,
    constants: IndexSet<Symbol>,
    predicates: IndexMap<Symbol, usize>,
    equality: Symbol,
    connectives: [Symbol; CONNECTIVE_COUNT],
    quantifiers: [Symbol; QUANTIFIER_COUNT],
}

impl Alphabet {
    pub fn variables(&self) -> impl Iterator<Item = &Symbol> {
        self.variables.iter()
    }

    pub fn constants(&self) -> impl Iterator<Item = &Symbol> {
        self.constants.iter()
    }

    /// Predicate symbols with their arities, in declaration order.
    pub fn predicates(&self) -> impl Iterator<Item = (&Symbol, usize)> {
        self.predicates.iter().map(|(s, a)| (s, *a))
    }

    pub fn predicate_symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.predicates.keys()
    }

    pub fn arity(&self, symbol: &str) -> Option<usize> {
        self.predicates.get(symbol).copied()
    }

    pub fn equality(&self) -> &Symbol {
        &self.equality
    }

    pub fn connective(&self, role: ConnectiveRole) -> &Symbol {
        &self.connectives[role.index()]
    }

    pub fn connectives(&self) -> &[Symbol] {
        &self.connectives
    }

    pub fn binary_connectives(&self) -> impl Iterator<Item = &Symbol> {
        ConnectiveRole::BINARY
            .into_iter()
            .map(|r| self.connective(r))
    }

    pub fn negation(&self) -> &Symbol {
        self.connective(ConnectiveRole::Not)
    }

    pub fn quantifier(&self, role: QuantifierRole) -> &Symbol {
        &self.quantifiers[role.index()]
    }

    pub fn quantifiers(&self) -> &[Symbol] {
        &self.quantifiers
    }

    pub fn is_variable(&self, token: &str) -> bool {
        self.variables.contains(token)
    }

    pub fn is_constant(&self, token: &str) -> bool {
        self.constants.contains(token)
    }

    pub fn is_predicate(&self, token: &str) -> bool {
        self.predicates.contains_key(token)
    }

    pub fn is_equality(&self, token: &str) -> bool {
        self.equality == token
    }

    pub fn is_quantifier(&self, token: &str) -> bool {
        self.quantifiers.iter().any(|q| q == token)
    }

    pub fn is_binary_connective(&self, token: &str) -> bool {
        self.binary_connectives().any(|c| c == token)
    }

    pub fn is_negation(&self, token: &str) -> bool {
        self.negation() == token
    }

    /// The class `token` was declared in, if any.
    pub fn classify(&self, token: &str) -> Option<SymbolClass> {
        if self.is_variable(token) {
            Some(SymbolClass::Variable)
        } else if self.is_constant(token) {
            Some(SymbolClass::Constant)
        } else if self.is_predicate(token) {
            Some(SymbolClass::Predicate)
        } else if self.is_equality(token) {
            Some(SymbolClass::Equality)
        } else if self.connectives.iter().any(|c| c == token) {
            Some(SymbolClass::Connective)
        } else if self.is_quantifier(token) {
            Some(SymbolClass::Quantifier)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests;
