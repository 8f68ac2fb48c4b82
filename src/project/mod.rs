//! Project I/O: reading definition files and writing results.
//!
//! Everything touching the filesystem lives here; the core stages work on
//! strings and return values only.

pub mod file_loader;
mod log_file;
mod outputs;

pub use file_loader::{get_extension, read_definition, validate_extension};
pub use log_file::LogFileSink;
pub use outputs::{OutputPaths, write_output};
