//! Grammar generator
//!
//! Projects a validated [`Alphabet`] onto the formal grammar
//! `(V_t, V_n, P, S)` it induces. The output is a pure function of the
//! alphabet: the same alphabet always renders to the same bytes.
//!
//! Non-terminals render with a trailing `*` (`F*`, `T*`, ...) so they
//! cannot be confused with a declared terminal spelled `F` or `T`.

use std::fmt;

use crate::alphabet::Alphabet;
use crate::base::Symbol;
use crate::base::constants::PUNCTUATION;
use crate::base::unescape;
use crate::parser::NonTerminal;
use crate::parser::productions::{Element, PRODUCTIONS, TerminalSet};

/// Preamble written ahead of the grammar in a report.
const PREAMBLE: [&str; 5] = [
    "A formal grammar is defined as a quadruple (V_t, V_n, P, S), where:",
    "- V_t is a set of terminal symbols",
    "- V_n is a set of non-terminal symbols",
    "- P is set of production rules",
    "- S is the start symbol, which is a non-terminal",
];

/// A symbol on the right-hand side of a production.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum GrammarSymbol {
    /// Display spelling of a terminal (unescaped)
    Terminal(String),
    NonTerminal(NonTerminal),
}

impl fmt::Display for GrammarSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Terminal(text) => f.write_str(text),
            Self::NonTerminal(nt) => write!(f, "{nt}*"),
        }
    }
}

/// `lhs → alternatives[0] | alternatives[1] | ...`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProductionRule {
    pub lhs: NonTerminal,
    pub alternatives: Vec<Vec<GrammarSymbol>>,
}

impl fmt::Display for ProductionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rhs = self
            .alternatives
            .iter()
            .map(|alt| {
                alt.iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join(" | ");
        if rhs.is_empty() {
            write!(f, "{}* ->", self.lhs)
        } else {
            write!(f, "{}* -> {rhs}", self.lhs)
        }
    }
}

/// The grammar induced by an alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GrammarDescription {
    /// `V_t`, unescaped, in declaration order followed by punctuation
    pub terminals: Vec<String>,
    /// `V_n`
    pub non_terminals: Vec<NonTerminal>,
    /// `P`
    pub productions: Vec<ProductionRule>,
    /// `S`
    pub start: NonTerminal,
}

/// Derive the grammar for `alphabet`.
pub fn generate(alphabet: &Alphabet) -> GrammarDescription {
    let terminals = alphabet
        .variables()
        .chain(alphabet.constants())
        .chain(alphabet.predicate_symbols())
        .chain(alphabet.connectives())
        .chain(alphabet.quantifiers())
        .chain(std::iter::once(alphabet.equality()))
        .map(|s| unescape(s))
        .chain(PUNCTUATION.iter().map(|p| p.to_string()))
        .collect();

    let productions = PRODUCTIONS
        .iter()
        .map(|production| ProductionRule {
            lhs: production.lhs,
            alternatives: production
                .alternatives
                .iter()
                .flat_map(|alt| expand(alphabet, alt))
                .collect(),
        })
        .collect();

    GrammarDescription {
        terminals,
        non_terminals: NonTerminal::ALL.to_vec(),
        productions,
        start: NonTerminal::START,
    }
}

/// Substitute alphabet symbols into one template alternative. An element
/// naming a whole class multiplies the alternative by the class size.
fn expand(alphabet: &Alphabet, template: &[Element]) -> Vec<Vec<GrammarSymbol>> {
    let mut expanded: Vec<Vec<GrammarSymbol>> = vec![Vec::new()];
    for element in template {
        let choices: Vec<GrammarSymbol> = match *element {
            Element::Nt(nt) => vec![GrammarSymbol::NonTerminal(nt)],
            Element::Punct(p) => vec![terminal(p)],
            Element::Equality => vec![terminal(alphabet.equality())],
            Element::Negation => vec![terminal(alphabet.negation())],
            Element::Each(set) => members(alphabet, set)
                .into_iter()
                .map(terminal)
                .collect(),
        };
        expanded = expanded
            .into_iter()
            .flat_map(|prefix| {
                choices.iter().map(move |choice| {
                    let mut alt = prefix.clone();
                    alt.push(choice.clone());
                    alt
                })
            })
            .collect();
    }
    expanded
}

fn members(alphabet: &Alphabet, set: TerminalSet) -> Vec<&str> {
    match set {
        TerminalSet::BinaryConnectives => {
            alphabet.binary_connectives().map(Symbol::as_str).collect()
        }
        TerminalSet::Quantifiers => alphabet.quantifiers().iter().map(Symbol::as_str).collect(),
        TerminalSet::PredicateSymbols => alphabet.predicate_symbols().map(Symbol::as_str).collect(),
        TerminalSet::Constants => alphabet.constants().map(Symbol::as_str).collect(),
        TerminalSet::Variables => alphabet.variables().map(Symbol::as_str).collect(),
    }
}

fn terminal(escaped: &str) -> GrammarSymbol {
    GrammarSymbol::Terminal(unescape(escaped))
}

impl GrammarDescription {
    /// The production for `lhs`.
    pub fn production(&self, lhs: NonTerminal) -> Option<&ProductionRule> {
        self.productions.iter().find(|p| p.lhs == lhs)
    }

    /// `V_t = {...}`
    pub fn terminals_line(&self) -> String {
        format!("V_t = {{{}}}", self.terminals.join(", "))
    }

    /// `V_n = {...}`
    pub fn non_terminals_line(&self) -> String {
        let names: Vec<String> = self.non_terminals.iter().map(|nt| format!("{nt}*")).collect();
        format!("V_n = {{{}}}", names.join(", "))
    }

    /// `S = {F*}`
    pub fn start_line(&self) -> String {
        format!("S = {{{}*}}", self.start)
    }

    /// The grammar as ordered text lines.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            self.terminals_line(),
            String::new(),
            self.non_terminals_line(),
            String::new(),
            "P = {".to_string(),
            String::new(),
        ];
        let productions = self.productions.iter().map(ToString::to_string);
        lines.extend(productions);
        lines.extend([
            String::new(),
            "}".to_string(),
            String::new(),
            self.start_line(),
        ]);
        lines
    }

    /// Full report for `input_name`: preamble followed by the grammar.
    pub fn report(&self, input_name: &str) -> String {
        let mut out = String::new();
        for line in PREAMBLE {
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&format!(
            "The formal grammar for the supplied input file, {input_name}, is defined by the sets \
             V_t, V_n, P, and S as follows:\n\n"
        ));
        out.push_str(&self.to_string());
        out
    }
}

impl fmt::Display for GrammarDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
