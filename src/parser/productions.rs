//! Grammar table
//!
//! The nine productions, written once and shared by the parser (which
//! consults [`FORMULA_ALTERNATIVES`] to pick an `F` alternative) and the
//! grammar generator (which substitutes alphabet symbols into
//! [`PRODUCTIONS`]).
//!
//! ```text
//! F → ( F C F ) | ( T = T ) | Q V F | NOT F | P
//! T → V | K
//! C → AND | OR | IMPLIES | IFF
//! Q → UNIVERSAL | EXISTENTIAL
//! V → <variable>      K → <constant>      Z → <predicate symbol>
//! P → Z ( J )
//! J → V | V , J
//! ```
//!
//! `F` is the only non-terminal that needs more than one token of
//! lookahead: both parenthesized forms start with `(`, and only the token
//! two positions ahead (the equality symbol or not) tells them apart.

use std::fmt;

use crate::alphabet::Alphabet;
use crate::base::Symbol;
use crate::base::constants::{COMMA, L_PAREN, R_PAREN};

// ============================================================================
// NON-TERMINALS
// ============================================================================

/// Grammar categories labelling interior parse-tree nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum NonTerminal {
    Formula,
    Predicate,
    PredicateSymbol,
    Term,
    Variable,
    Connective,
    Constant,
    Quantifier,
    VariableList,
}

impl NonTerminal {
    /// All non-terminals, in `V_n` order.
    pub const ALL: [NonTerminal; 9] = [
        Self::Formula,
        Self::Predicate,
        Self::PredicateSymbol,
        Self::Term,
        Self::Variable,
        Self::Connective,
        Self::Constant,
        Self::Quantifier,
        Self::VariableList,
    ];

    /// The start symbol.
    pub const START: NonTerminal = Self::Formula;

    /// Single-letter grammar symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Formula => "F",
            Self::Predicate => "P",
            Self::PredicateSymbol => "Z",
            Self::Term => "T",
            Self::Variable => "V",
            Self::Connective => "C",
            Self::Constant => "K",
            Self::Quantifier => "Q",
            Self::VariableList => "J",
        }
    }

    /// Human-readable category name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Formula => "formula",
            Self::Predicate => "predicate",
            Self::PredicateSymbol => "predicate symbol",
            Self::Term => "term",
            Self::Variable => "variable",
            Self::Connective => "connective",
            Self::Constant => "constant",
            Self::Quantifier => "quantifier",
            Self::VariableList => "variable list",
        }
    }
}

impl fmt::Display for NonTerminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ============================================================================
// TOKEN CLASSES AND LOOKAHEAD
// ============================================================================

/// The set a single lookahead token is tested against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    LParen,
    RParen,
    Comma,
    Equality,
    Negation,
    BinaryConnective,
    Quantifier,
    Variable,
    Constant,
    PredicateSymbol,
    /// The end-of-input marker
    End,
}

impl TokenClass {
    /// Test a token; `None` is the end-of-input marker.
    pub fn matches(&self, alphabet: &Alphabet, token: Option<&str>) -> bool {
        let Some(token) = token else {
            return *self == Self::End;
        };
        match self {
            Self::LParen => token == L_PAREN,
            Self::RParen => token == R_PAREN,
            Self::Comma => token == COMMA,
            Self::Equality => alphabet.is_equality(token),
            Self::Negation => alphabet.is_negation(token),
            Self::BinaryConnective => alphabet.is_binary_connective(token),
            Self::Quantifier => alphabet.is_quantifier(token),
            Self::Variable => alphabet.is_variable(token),
            Self::Constant => alphabet.is_constant(token),
            Self::PredicateSymbol => alphabet.is_predicate(token),
            Self::End => false,
        }
    }
}

/// One lookahead test: the token `offset` positions past the cursor is
/// (or, when `negated`, is not) in `class`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Peek {
    pub offset: usize,
    pub class: TokenClass,
    pub negated: bool,
}

impl Peek {
    pub const fn is(offset: usize, class: TokenClass) -> Self {
        Self {
            offset,
            class,
            negated: false,
        }
    }

    pub const fn is_not(offset: usize, class: TokenClass) -> Self {
        Self {
            offset,
            class,
            negated: true,
        }
    }

    pub fn test(&self, alphabet: &Alphabet, tokens: &[Symbol], pos: usize) -> bool {
        let token = tokens.get(pos + self.offset).map(Symbol::as_str);
        self.class.matches(alphabet, token) != self.negated
    }
}

// ============================================================================
// FORMULA ALTERNATIVES
// ============================================================================

/// The five alternatives of `F`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormulaRule {
    /// `( F C F )`
    Binary,
    /// `( T = T )`
    Equation,
    /// `Q V F`
    Quantified,
    /// `NOT F`
    Negation,
    /// `P`
    Atom,
}

/// An `F` alternative together with the lookahead that selects it.
#[derive(Debug, Clone, Copy)]
pub struct FormulaAlternative {
    pub rule: FormulaRule,
    pub lookahead: &'static [Peek],
}

impl FormulaAlternative {
    /// Number of tokens inspected, counting the current one.
    pub fn depth(&self) -> usize {
        self.lookahead
            .iter()
            .map(|p| p.offset + 1)
            .max()
            .unwrap_or(0)
    }

    pub fn matches(&self, alphabet: &Alphabet, tokens: &[Symbol], pos: usize) -> bool {
        self.lookahead.iter().all(|p| p.test(alphabet, tokens, pos))
    }
}

/// Selection table for `F`; at most one alternative matches any position.
pub const FORMULA_ALTERNATIVES: [FormulaAlternative; 5] = [
    FormulaAlternative {
        rule: FormulaRule::Binary,
        lookahead: &[
            Peek::is(0, TokenClass::LParen),
            Peek::is_not(2, TokenClass::Equality),
        ],
    },
    FormulaAlternative {
        rule: FormulaRule::Equation,
        lookahead: &[
            Peek::is(0, TokenClass::LParen),
            Peek::is(2, TokenClass::Equality),
        ],
    },
    FormulaAlternative {
        rule: FormulaRule::Quantified,
        lookahead: &[Peek::is(0, TokenClass::Quantifier)],
    },
    FormulaAlternative {
        rule: FormulaRule::Negation,
        lookahead: &[Peek::is(0, TokenClass::Negation)],
    },
    FormulaAlternative {
        rule: FormulaRule::Atom,
        lookahead: &[Peek::is(0, TokenClass::PredicateSymbol)],
    },
];

/// Pick the `F` alternative for the token at `pos`.
pub fn select_formula(alphabet: &Alphabet, tokens: &[Symbol], pos: usize) -> Option<FormulaRule> {
    FORMULA_ALTERNATIVES
        .iter()
        .find(|alt| alt.matches(alphabet, tokens, pos))
        .map(|alt| alt.rule)
}

// ============================================================================
// PRODUCTION TEMPLATES
// ============================================================================

/// Alphabet classes that expand to one alternative per declared symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminalSet {
    BinaryConnectives,
    Quantifiers,
    PredicateSymbols,
    Constants,
    Variables,
}

/// One element of a production's right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Nt(NonTerminal),
    Punct(&'static str),
    /// The declared equality symbol
    Equality,
    /// The declared NOT connective
    Negation,
    /// Any one member of a declared class
    Each(TerminalSet),
}

/// A production template `lhs → alt | alt | ...`.
#[derive(Debug, Clone, Copy)]
pub struct Production {
    pub lhs: NonTerminal,
    pub alternatives: &'static [&'static [Element]],
}

use Element::{Each, Equality, Negation, Nt, Punct};
use NonTerminal as N;

const BINARY_FORMULA: &[Element] = &[
    Punct(L_PAREN),
    Nt(N::Formula),
    Nt(N::Connective),
    Nt(N::Formula),
    Punct(R_PAREN),
];

const EQUATION: &[Element] = &[
    Punct(L_PAREN),
    Nt(N::Term),
    Equality,
    Nt(N::Term),
    Punct(R_PAREN),
];

const APPLICATION: &[Element] = &[
    Nt(N::PredicateSymbol),
    Punct(L_PAREN),
    Nt(N::VariableList),
    Punct(R_PAREN),
];

/// The nine productions, in output order.
pub const PRODUCTIONS: [Production; 9] = [
    Production {
        lhs: N::Formula,
        alternatives: &[
            BINARY_FORMULA,
            &[Nt(N::Quantifier), Nt(N::Variable), Nt(N::Formula)],
            &[Negation, Nt(N::Formula)],
            EQUATION,
            &[Nt(N::Predicate)],
        ],
    },
    Production {
        lhs: N::Term,
        alternatives: &[&[Nt(N::Variable)], &[Nt(N::Constant)]],
    },
    Production {
        lhs: N::Connective,
        alternatives: &[&[Each(TerminalSet::BinaryConnectives)]],
    },
    Production {
        lhs: N::Quantifier,
        alternatives: &[&[Each(TerminalSet::Quantifiers)]],
    },
    Production {
        lhs: N::Predicate,
        alternatives: &[APPLICATION],
    },
    Production {
        lhs: N::VariableList,
        alternatives: &[
            &[Nt(N::Variable)],
            &[Nt(N::Variable), Punct(COMMA), Nt(N::VariableList)],
        ],
    },
    Production {
        lhs: N::PredicateSymbol,
        alternatives: &[&[Each(TerminalSet::PredicateSymbols)]],
    },
    Production {
        lhs: N::Constant,
        alternatives: &[&[Each(TerminalSet::Constants)]],
    },
    Production {
        lhs: N::Variable,
        alternatives: &[&[Each(TerminalSet::Variables)]],
    },
];
