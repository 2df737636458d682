//! Located, recoverable extraction errors.
//!
//! Per-call-site problems never abort a run. They are rendered into plain
//! error lines of the form `<file>(<line>,<column>): <message>` and
//! accumulated in an [`ErrorSink`], which is flushed once at the end of the
//! run (stderr always, log file when configured).

use std::fmt;

/// A position in a source file, 1-indexed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: String,
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({},{})", self.file, self.line, self.column)
    }
}

/// Accumulates located error lines in run order.
#[derive(Debug, Default)]
pub struct ErrorSink {
    entries: Vec<String>,
}

impl ErrorSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one error at a source location.
    pub fn record(&mut self, location: &SourceLocation, message: &str) {
        self.entries.push(format!("{}: {}", location, message));
    }

    /// Append all entries from another sink, preserving their order.
    pub fn extend(&mut self, other: ErrorSink) {
        self.entries.extend(other.entries);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Render the log file contents: one error per line.
    pub fn to_log(&self) -> String {
        format!("{}\n", self.entries.join("\n"))
    }
}
