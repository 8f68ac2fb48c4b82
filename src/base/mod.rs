//! Foundation types shared by every stage.
//!
//! - [`Symbol`] - cheap-to-clone symbol strings
//! - [`constants`] - reserved spellings (punctuation, sentinel, headers)
//! - [`escape`] / [`unescape`] - the display escape contract applied at load time
//!
//! This module has NO dependencies on other folgram modules.

pub mod constants;
mod escape;

pub use escape::{escape, unescape};

/// A terminal spelling as it appears in the definition file.
///
/// Symbols are stored in their escaped form (see [`escape`]).
pub type Symbol = smol_str::SmolStr;
