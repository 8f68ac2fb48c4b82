//! Definition-file loading

use std::fs;
use std::path::Path;

use crate::base::constants::DEFINITION_EXT;
use crate::errors::LoadError;

/// Get file extension from path
pub fn get_extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|e| e.to_str())
}

/// Validate that the path names a `.txt` definition file
pub fn validate_extension(path: &Path) -> Result<(), LoadError> {
    match get_extension(path) {
        Some(DEFINITION_EXT) => Ok(()),
        _ => Err(LoadError::UnsupportedExtension {
            path: path.to_path_buf(),
        }),
    }
}

/// Read a definition file into its lines.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not have a `.txt` extension
/// - The file cannot be read
pub fn read_definition(path: &Path) -> Result<Vec<String>, LoadError> {
    validate_extension(path)?;
    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "read definition file");
    Ok(content.lines().map(str::to_string).collect())
}

#[cfg(test)]
mod tests;
