//! Definition-file loader
//!
//! Lines are first tagged as a category header or a continuation of the
//! most recent header, then tokenized per category. The loader never
//! rejects input; malformed arities travel on as strings and are caught
//! by the validator.

use tracing::{debug, warn};

use super::{Definition, RawPredicate};
use crate::base::{Symbol, escape};
use crate::parser::tokenize;

/// The seven sections of a definition file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Variables,
    Constants,
    Predicates,
    Equality,
    Connectives,
    Quantifiers,
    Formula,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Self::Variables,
        Self::Constants,
        Self::Predicates,
        Self::Equality,
        Self::Connectives,
        Self::Quantifiers,
        Self::Formula,
    ];

    /// The case-sensitive header label, colon included.
    pub fn header(&self) -> &'static str {
        match self {
            Self::Variables => "variables:",
            Self::Constants => "constants:",
            Self::Predicates => "predicates:",
            Self::Equality => "equality:",
            Self::Connectives => "connectives:",
            Self::Quantifiers => "quantifiers:",
            Self::Formula => "formula:",
        }
    }
}

/// One line of a definition file, tagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionLine<'a> {
    /// A header, with whatever follows the label on the same line.
    Header {
        category: Category,
        rest: &'a str,
    },
    Continuation(&'a str),
}

/// Tag a raw line as header or continuation.
pub fn classify_line(line: &str) -> DefinitionLine<'_> {
    let trimmed = line.trim_start();
    for category in Category::ALL {
        if let Some(rest) = trimmed.strip_prefix(category.header()) {
            return DefinitionLine::Header { category, rest };
        }
    }
    DefinitionLine::Continuation(line)
}

/// Load definition text into its raw alphabet and formula tokens.
pub fn load_str(text: &str) -> Definition {
    load_definition(text.lines())
}

/// Load definition lines into their raw alphabet and formula tokens.
pub fn load_definition<I, S>(lines: I) -> Definition
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut definition = Definition::default();
    let mut current: Option<Category> = None;

    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        let content = match classify_line(line) {
            DefinitionLine::Header { category, rest } => {
                current = Some(category);
                rest
            }
            DefinitionLine::Continuation(content) => content,
        };

        match current {
            Some(category) => push_content(&mut definition, category, content),
            None if !content.trim().is_empty() => {
                warn!(
                    line = index + 1,
                    "ignoring content before the first category header"
                );
            }
            None => {}
        }
    }

    let alphabet = &definition.alphabet;
    debug!(
        variables = alphabet.variables.len(),
        constants = alphabet.constants.len(),
        predicates = alphabet.predicates.len(),
        formula_tokens = definition.formula.len(),
        "loaded definition"
    );
    definition
}

fn push_content(definition: &mut Definition, category: Category, content: &str) {
    let alphabet = &mut definition.alphabet;
    match category {
        Category::Variables => alphabet.variables.extend(words(content)),
        Category::Constants => alphabet.constants.extend(words(content)),
        Category::Equality => alphabet.equality.extend(words(content)),
        Category::Connectives => alphabet.connectives.extend(words(content)),
        Category::Quantifiers => alphabet.quantifiers.extend(words(content)),
        Category::Predicates => alphabet
            .predicates
            .extend(content.split_whitespace().map(parse_predicate)),
        Category::Formula => definition
            .formula
            .extend(tokenize(content).iter().map(|t| escape(t))),
    }
}

fn words(content: &str) -> impl Iterator<Item = Symbol> + '_ {
    content.split_whitespace().map(escape)
}

/// Split `symbol[arity]` into its parts.
///
/// Text after the closing bracket is kept as part of the symbol. A token
/// without brackets gets an empty arity.
fn parse_predicate(token: &str) -> RawPredicate {
    let (symbol, arity) = match token.split_once('[') {
        Some((head, tail)) => match tail.split_once(']') {
            Some((arity, rest)) => (format!("{head}{rest}"), arity),
            None => (head.to_string(), tail),
        },
        None => (token.to_string(), ""),
    };
    RawPredicate {
        symbol: escape(&symbol),
        arity: arity.to_string(),
    }
}
