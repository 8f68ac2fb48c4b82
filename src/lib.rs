//! # folgram
//!
//! Alphabet validation, recursive-descent parsing and grammar derivation
//! for first-order logic formulas.
//!
//! A definition file declares an alphabet (variables, constants,
//! predicates with arities, an equality symbol, five connectives, two
//! quantifiers) and one formula over it. The crate validates the alphabet,
//! checks the formula's structure, parses it against a fixed nine-production
//! grammar and derives the concrete grammar instantiated by the alphabet.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project     → Definition-file reading, log file, output paths
//!   ↓
//! export      → DOT and JSON rendering of results
//!   ↓
//! pipeline    → Staged driver, diagnostics recording
//!   ↓
//! grammar     → Grammar description derived from an alphabet
//!   ↓
//! parser      → Logos lexer, structural checks, recursive-descent parser
//!   ↓
//! alphabet    → Definition loading and alphabet validation
//!   ↓
//! diagnostics → Timestamped OK/ERR records and sinks
//!   ↓
//! errors      → Error codes and per-stage error enums
//!   ↓
//! base        → Symbol, reserved spellings, escaping
//! ```

// ============================================================================
// MODULES (dependency order: base → errors → alphabet → parser → grammar → pipeline)
// ============================================================================

/// Foundation types: Symbol, reserved spellings, escaping
pub mod base;

/// Error codes and per-stage error enums
pub mod errors;

/// Diagnostic records and sinks
pub mod diagnostics;

/// Definition loading and alphabet validation
pub mod alphabet;

/// Lexer, structural checks and recursive-descent parser
pub mod parser;

/// Grammar description derived from a validated alphabet
pub mod grammar;

/// Staged driver from definition text to results
pub mod pipeline;

/// DOT and JSON exporters
pub mod export;

/// Filesystem I/O
pub mod project;

// Re-export the main entry points
pub use alphabet::{Alphabet, Definition, RawAlphabet, SymbolClass, load_definition, validate};
pub use base::Symbol;
pub use diagnostics::{DiagnosticRecord, DiagnosticsSink, MemorySink, NullSink, Status};
pub use errors::{Error, ErrorCode, Result};
pub use grammar::{GrammarDescription, generate};
pub use parser::{NonTerminal, ParseTree, check_structure, parse, tokenize};
pub use pipeline::{Pipeline, PipelineOptions, PipelineOutput, run};
