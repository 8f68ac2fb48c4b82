use serde::Serialize;

use crate::base::Symbol;
use crate::grammar::GrammarDescription;
use crate::parser::ParseTree;
use crate::pipeline::PipelineOutput;

/// JSON view of one successful run.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub input: &'a str,
    pub tokens: &'a [Symbol],
    pub tree: &'a ParseTree,
    pub grammar: &'a GrammarDescription,
}

/// Serialize a pipeline result as pretty-printed JSON.
pub fn to_json(input: &str, output: &PipelineOutput) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport {
        input,
        tokens: &output.tokens,
        tree: &output.tree,
        grammar: &output.grammar,
    })
}
