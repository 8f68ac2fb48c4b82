//! Staged driver: load → validate alphabet → check structure → parse →
//! generate grammar.
//!
//! Each stage is fail-fast. The first failure is recorded once on the
//! injected [`DiagnosticsSink`] and returned; nothing downstream runs.

use tracing::debug;

use crate::alphabet::{self, Alphabet, Definition};
use crate::base::Symbol;
use crate::diagnostics::{DiagnosticRecord, DiagnosticsSink, NullSink};
use crate::errors::{Error, Result};
use crate::grammar::{self, GrammarDescription};
use crate::parser::{self, DEFAULT_MAX_DEPTH, ParseTree};

/// Message recorded when every stage passes.
pub const SUCCESS_MESSAGE: &str = "FO formula parsed successfully";

/// Pipeline options
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Maximum nesting of `F` before the parser gives up
    pub max_depth: usize,
    /// Identifier written into every diagnostic record
    pub input_name: String,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            input_name: "<input>".to_string(),
        }
    }
}

impl PipelineOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_input_name(mut self, input_name: impl Into<String>) -> Self {
        self.input_name = input_name.into();
        self
    }
}

/// Everything a successful run produces.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub alphabet: Alphabet,
    pub tokens: Vec<Symbol>,
    pub tree: ParseTree,
    pub grammar: GrammarDescription,
}

/// The pipeline, bound to its options and diagnostics sink.
pub struct Pipeline<S = NullSink> {
    options: PipelineOptions,
    sink: S,
}

impl Pipeline<NullSink> {
    /// A pipeline that discards diagnostics.
    pub fn quiet(options: PipelineOptions) -> Self {
        Self::new(options, NullSink)
    }
}

impl<S: DiagnosticsSink> Pipeline<S> {
    pub fn new(options: PipelineOptions, sink: S) -> Self {
        Self { options, sink }
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Run on the full text of a definition file.
    pub fn run_str(&self, text: &str) -> Result<PipelineOutput> {
        self.run_definition(alphabet::load_str(text))
    }

    /// Run on definition-file lines.
    pub fn run_lines<I, L>(&self, lines: I) -> Result<PipelineOutput>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        self.run_definition(alphabet::load_definition(lines))
    }

    /// Run on an already loaded definition.
    pub fn run_definition(&self, definition: Definition) -> Result<PipelineOutput> {
        let Definition { alphabet, formula } = definition;

        let alphabet = self.report(alphabet::validate(&alphabet))?;
        self.report(parser::check_structure(&alphabet, &formula))?;
        let tree = self.report(parser::parse_with_limit(
            &alphabet,
            &formula,
            self.options.max_depth,
        ))?;
        let grammar = grammar::generate(&alphabet);
        debug!(
            productions = grammar.productions.len(),
            terminals = grammar.terminals.len(),
            "grammar generated"
        );

        let record = DiagnosticRecord::ok(&self.options.input_name, SUCCESS_MESSAGE);
        self.sink.record(record);
        Ok(PipelineOutput {
            alphabet,
            tokens: formula,
            tree,
            grammar,
        })
    }

    /// Record a failure under this pipeline's input name.
    pub fn record_failure(&self, error: &Error) {
        let record = DiagnosticRecord::err(&self.options.input_name, error.to_string());
        self.sink.record(record);
    }

    fn report<T, E: Into<Error>>(&self, result: std::result::Result<T, E>) -> Result<T> {
        result.map_err(|e| {
            let error = e.into();
            self.record_failure(&error);
            error
        })
    }
}

/// Run `text` through the pipeline with default options and no diagnostics.
pub fn run(text: &str) -> Result<PipelineOutput> {
    Pipeline::quiet(PipelineOptions::default()).run_str(text)
}
