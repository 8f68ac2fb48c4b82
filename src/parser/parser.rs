//! Recursive descent parser for first-order formulas
//!
//! Consumes a validated token sequence against the nine-production grammar
//! and builds a [`ParseTree`]. There is no error recovery: the first
//! production failure aborts the parse and the partial tree is dropped.

use tracing::{info, trace};

use super::productions::{FormulaRule, NonTerminal, select_formula};
use super::tree::{NodeId, NodeLabel, ParseTree};
use crate::alphabet::Alphabet;
use crate::base::constants::{COMMA, L_PAREN, R_PAREN};
use crate::base::{Symbol, unescape};
use crate::errors::ParseError;

/// Default bound on `F` nesting.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Parse `tokens` with the default nesting limit.
pub fn parse(alphabet: &Alphabet, tokens: &[Symbol]) -> Result<ParseTree, ParseError> {
    parse_with_limit(alphabet, tokens, DEFAULT_MAX_DEPTH)
}

/// Parse `tokens`, failing once `F` nests deeper than `max_depth`.
pub fn parse_with_limit(
    alphabet: &Alphabet,
    tokens: &[Symbol],
    max_depth: usize,
) -> Result<ParseTree, ParseError> {
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }
    let mut parser = Parser::new(alphabet, tokens, max_depth);
    let root = parser.tree.root();
    parser.parse_formula(root)?;
    parser.finish()
}

/// The parser state
struct Parser<'a> {
    alphabet: &'a Alphabet,
    tokens: &'a [Symbol],
    pos: usize,
    depth: usize,
    max_depth: usize,
    tree: ParseTree,
}

impl<'a> Parser<'a> {
    fn new(alphabet: &'a Alphabet, tokens: &'a [Symbol], max_depth: usize) -> Self {
        Self {
            alphabet,
            tokens,
            pos: 0,
            depth: 0,
            max_depth,
            tree: ParseTree::new(NonTerminal::START),
        }
    }

    fn finish(self) -> Result<ParseTree, ParseError> {
        if let Some(found) = self.current() {
            return Err(ParseError::TrailingInput {
                found: found.clone(),
                position: self.pos,
            });
        }
        if self.tree.is_bare() {
            return Err(ParseError::Empty);
        }
        info!(
            tokens = self.tokens.len(),
            nodes = self.tree.node_count(),
            "formula parsed successfully"
        );
        Ok(self.tree)
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    /// The token under the cursor; `None` is the end-of-input marker.
    fn current(&self) -> Option<&'a Symbol> {
        self.tokens.get(self.pos)
    }

    fn at(&self, text: &str) -> bool {
        self.current().is_some_and(|t| t == text)
    }

    fn at_where(&self, pred: impl Fn(&Alphabet, &str) -> bool) -> bool {
        self.current()
            .is_some_and(|t| pred(self.alphabet, t.as_str()))
    }

    // =========================================================================
    // Token consumption and node building
    // =========================================================================

    /// Attach the current token under `parent` and advance.
    fn bump(&mut self, parent: NodeId) {
        if let Some(token) = self.current() {
            self.tree
                .add_child(parent, NodeLabel::Terminal(token.clone()));
            self.pos += 1;
        }
    }

    /// Consume the literal `text`, or fail on behalf of `nt`.
    fn expect(&mut self, parent: NodeId, nt: NonTerminal, text: &str) -> Result<(), ParseError> {
        if self.at(text) {
            self.bump(parent);
            Ok(())
        } else {
            Err(self.error(nt, format!("'{}'", unescape(text))))
        }
    }

    /// Consume one token accepted by `pred`, or fail on behalf of `nt`.
    fn expect_where(
        &mut self,
        parent: NodeId,
        nt: NonTerminal,
        expected: &str,
        pred: impl Fn(&Alphabet, &str) -> bool,
    ) -> Result<(), ParseError> {
        if self.at_where(pred) {
            self.bump(parent);
            Ok(())
        } else {
            Err(self.error(nt, expected))
        }
    }

    fn node(&mut self, parent: NodeId, nt: NonTerminal) -> NodeId {
        self.tree.add_child(parent, NodeLabel::NonTerminal(nt))
    }

    fn error(&self, nonterminal: NonTerminal, expected: impl Into<String>) -> ParseError {
        let expected = expected.into();
        match self.current() {
            Some(found) => ParseError::Expected {
                nonterminal,
                expected,
                found: found.clone(),
                position: self.pos,
            },
            None => ParseError::UnexpectedEnd {
                nonterminal,
                expected,
            },
        }
    }

    // =========================================================================
    // Grammar rules
    // =========================================================================

    /// F = ( F C F ) | ( T = T ) | Q V F | NOT F | P
    fn parse_formula(&mut self, node: NodeId) -> Result<(), ParseError> {
        if self.depth >= self.max_depth {
            return Err(ParseError::TooDeep {
                limit: self.max_depth,
                position: self.pos,
            });
        }
        self.depth += 1;

        let rule = select_formula(self.alphabet, self.tokens, self.pos);
        trace!(?rule, position = self.pos, depth = self.depth, "F");

        match rule {
            Some(FormulaRule::Binary) => {
                self.bump(node);
                let left = self.node(node, NonTerminal::Formula);
                self.parse_formula(left)?;
                let connective = self.node(node, NonTerminal::Connective);
                self.parse_connective(connective)?;
                let right = self.node(node, NonTerminal::Formula);
                self.parse_formula(right)?;
                self.expect(node, NonTerminal::Formula, R_PAREN)?;
            }
            Some(FormulaRule::Equation) => {
                self.bump(node);
                let left = self.node(node, NonTerminal::Term);
                self.parse_term(left)?;
                let equality = self.alphabet.equality().clone();
                self.expect(node, NonTerminal::Formula, &equality)?;
                let right = self.node(node, NonTerminal::Term);
                self.parse_term(right)?;
                self.expect(node, NonTerminal::Formula, R_PAREN)?;
            }
            Some(FormulaRule::Quantified) => {
                let quantifier = self.node(node, NonTerminal::Quantifier);
                self.parse_quantifier(quantifier)?;
                let variable = self.node(node, NonTerminal::Variable);
                self.parse_variable(variable)?;
                let body = self.node(node, NonTerminal::Formula);
                self.parse_formula(body)?;
            }
            Some(FormulaRule::Negation) => {
                self.bump(node);
                let body = self.node(node, NonTerminal::Formula);
                self.parse_formula(body)?;
            }
            Some(FormulaRule::Atom) => {
                let predicate = self.node(node, NonTerminal::Predicate);
                self.parse_predicate(predicate)?;
            }
            None => {
                let expected = format!(
                    "'(', a quantifier, '{}' or a predicate symbol",
                    unescape(self.alphabet.negation())
                );
                return Err(self.error(NonTerminal::Formula, expected));
            }
        }

        self.depth -= 1;
        Ok(())
    }

    /// T = V | K
    fn parse_term(&mut self, node: NodeId) -> Result<(), ParseError> {
        if self.at_where(Alphabet::is_variable) {
            let variable = self.node(node, NonTerminal::Variable);
            self.parse_variable(variable)
        } else if self.at_where(Alphabet::is_constant) {
            let constant = self.node(node, NonTerminal::Constant);
            self.parse_constant(constant)
        } else {
            Err(self.error(NonTerminal::Term, "a variable or constant"))
        }
    }

    /// C = AND | OR | IMPLIES | IFF
    fn parse_connective(&mut self, node: NodeId) -> Result<(), ParseError> {
        self.expect_where(
            node,
            NonTerminal::Connective,
            "a connective",
            Alphabet::is_binary_connective,
        )
    }

    /// Q = UNIVERSAL | EXISTENTIAL
    fn parse_quantifier(&mut self, node: NodeId) -> Result<(), ParseError> {
        self.expect_where(
            node,
            NonTerminal::Quantifier,
            "a quantifier",
            Alphabet::is_quantifier,
        )
    }

    /// V = <variable>
    fn parse_variable(&mut self, node: NodeId) -> Result<(), ParseError> {
        self.expect_where(
            node,
            NonTerminal::Variable,
            "a variable",
            Alphabet::is_variable,
        )
    }

    /// K = <constant>
    fn parse_constant(&mut self, node: NodeId) -> Result<(), ParseError> {
        self.expect_where(
            node,
            NonTerminal::Constant,
            "a constant",
            Alphabet::is_constant,
        )
    }

    /// Z = <predicate symbol>
    fn parse_predicate_symbol(&mut self, node: NodeId) -> Result<(), ParseError> {
        self.expect_where(
            node,
            NonTerminal::PredicateSymbol,
            "a predicate symbol",
            Alphabet::is_predicate,
        )
    }

    /// P = Z ( J )
    fn parse_predicate(&mut self, node: NodeId) -> Result<(), ParseError> {
        let symbol = self.node(node, NonTerminal::PredicateSymbol);
        self.parse_predicate_symbol(symbol)?;
        self.expect(node, NonTerminal::Predicate, L_PAREN)?;
        let list = self.node(node, NonTerminal::VariableList);
        self.parse_variable_list(list)?;
        self.expect(node, NonTerminal::Predicate, R_PAREN)
    }

    /// J = V | V , J
    ///
    /// Right recursion is unrolled into a loop; each `, J` still gets its
    /// own nested `J` node.
    fn parse_variable_list(&mut self, node: NodeId) -> Result<(), ParseError> {
        let mut list = node;
        loop {
            let variable = self.node(list, NonTerminal::Variable);
            self.parse_variable(variable)?;
            if !self.at(COMMA) {
                return Ok(());
            }
            self.bump(list);
            list = self.node(list, NonTerminal::VariableList);
        }
    }
}
