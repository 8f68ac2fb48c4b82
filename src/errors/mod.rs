//! Error handling
//!
//! - Categorized error codes for filtering and documentation
//! - One error enum per pipeline stage, unified by [`Error`]

mod codes;
mod error;

pub use codes::ErrorCode;
pub use error::{AlphabetError, ArityViolation, Error, FormulaError, LoadError, ParseError, Result};
