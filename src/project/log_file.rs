use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::diagnostics::{DiagnosticRecord, DiagnosticsSink};

/// Appends each record as one tab-delimited line to a log file.
///
/// Write failures are reported through `tracing` and otherwise ignored, so a
/// broken log never changes the pipeline's result.
#[derive(Debug)]
pub struct LogFileSink {
    path: PathBuf,
    lock: Mutex<()>,
}

impl LogFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, record: &DiagnosticRecord) -> std::io::Result<()> {
        let _guard = self.lock.lock();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{record}")?;
        file.flush()
    }
}

impl DiagnosticsSink for LogFileSink {
    fn record(&self, record: DiagnosticRecord) {
        if let Err(e) = self.append(&record) {
            tracing::warn!(path = %self.path.display(), "failed to append to log: {}", e);
        }
    }
}
