use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::diagnostics::TIMESTAMP_FORMAT;
use crate::errors::LoadError;

/// Where the grammar and parse tree of one run are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub grammar: PathBuf,
    pub parse_tree: PathBuf,
}

impl OutputPaths {
    /// `<timestamp><stem>-outputgrammar.txt` and
    /// `<timestamp><stem>-outputparsetree.dot` inside `out_dir`.
    pub fn for_input(input: &Path, out_dir: &Path, timestamp: DateTime<Local>) -> Self {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let prefix = format!("{}{}", timestamp.format(TIMESTAMP_FORMAT), stem);
        Self {
            grammar: out_dir.join(format!("{prefix}-outputgrammar.txt")),
            parse_tree: out_dir.join(format!("{prefix}-outputparsetree.dot")),
        }
    }
}

/// Write `contents` to `path`, creating parent directories as needed.
pub fn write_output(path: &Path, contents: &str) -> Result<(), LoadError> {
    let write_err = |source| LoadError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, contents).map_err(write_err)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    #[test]
    fn test_output_paths_use_timestamp_and_stem() {
        let ts = Local.with_ymd_and_hms(2023, 11, 2, 14, 30, 0).unwrap();
        let paths = OutputPaths::for_input(Path::new("defs/input.txt"), Path::new("out"), ts);
        assert_eq!(
            paths.grammar,
            PathBuf::from("out/02-Nov-2023-14:30:00input-outputgrammar.txt")
        );
        assert_eq!(
            paths.parse_tree,
            PathBuf::from("out/02-Nov-2023-14:30:00input-outputparsetree.dot")
        );
    }

    #[test]
    fn test_write_output_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("grammar.txt");
        write_output(&path, "S = F*\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "S = F*\n");
    }
}
