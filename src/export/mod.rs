//! Result exporters: DOT text for the parse tree and, with the `serde`
//! feature, JSON for the tree and grammar together.

mod dot;
#[cfg(feature = "serde")]
mod json;

pub use dot::{escape_dot, to_dot};
#[cfg(feature = "serde")]
pub use json::{JsonReport, to_json};
