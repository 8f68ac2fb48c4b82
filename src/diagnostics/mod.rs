//! Diagnostics: one structured record per pipeline outcome.
//!
//! Core stages never touch a log file. The pipeline reports through an
//! injected [`DiagnosticsSink`]; persistence is the sink's business.

use std::fmt;

use chrono::{DateTime, Local};
use parking_lot::Mutex;

/// Timestamp format used in rendered records and output file names.
pub const TIMESTAMP_FORMAT: &str = "%d-%b-%Y-%H:%M:%S";

/// Outcome recorded by a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    Ok,
    Err,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Err => "ERR",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single diagnostic: when, for which input, outcome, and message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticRecord {
    pub timestamp: DateTime<Local>,
    pub input: String,
    pub status: Status,
    pub message: String,
}

impl DiagnosticRecord {
    /// A record stamped with the current local time.
    pub fn now(input: impl Into<String>, status: Status, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            input: input.into(),
            status,
            message: message.into(),
        }
    }

    pub fn ok(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::now(input, Status::Ok, message)
    }

    pub fn err(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::now(input, Status::Err, message)
    }

    pub fn is_error(&self) -> bool {
        self.status == Status::Err
    }
}

/// Tab-delimited: `timestamp<TAB>input<TAB>status<TAB>message`.
impl fmt::Display for DiagnosticRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.input,
            self.status,
            self.message
        )
    }
}

/// Receiver of diagnostic records.
pub trait DiagnosticsSink {
    fn record(&self, record: DiagnosticRecord);
}

impl<S: DiagnosticsSink + ?Sized> DiagnosticsSink for &S {
    fn record(&self, record: DiagnosticRecord) {
        (**self).record(record)
    }
}

/// Discards every record.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DiagnosticsSink for NullSink {
    fn record(&self, _record: DiagnosticRecord) {}
}

/// Keeps records in memory, in arrival order.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<DiagnosticRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<DiagnosticRecord> {
        self.records.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn last(&self) -> Option<DiagnosticRecord> {
        self.records.lock().last().cloned()
    }
}

impl DiagnosticsSink for MemorySink {
    fn record(&self, record: DiagnosticRecord) {
        self.records.lock().push(record);
    }
}

/// Forwards records to `tracing`: errors at `warn`, successes at `info`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn record(&self, record: DiagnosticRecord) {
        match record.status {
            Status::Ok => tracing::info!(input = %record.input, "{}", record.message),
            Status::Err => tracing::warn!(input = %record.input, "{}", record.message),
        }
    }
}
