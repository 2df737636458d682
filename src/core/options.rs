use std::path::PathBuf;

/// Immutable configuration for one extraction run.
///
/// Built once from CLI arguments and shared (read-only) by every phase of
/// the pipeline.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Root directory to scan, resolved against the working directory.
    pub root: PathBuf,
    /// Destination path for the final catalog.
    pub output: PathBuf,
    /// Glob pattern for candidate files, relative to `root`.
    /// Defaults to [`crate::core::scan::DEFAULT_PATTERNS`] when absent.
    pub pattern: Option<String>,
    /// Key-prefix filter; keys starting with this string are dropped silently.
    pub exclude: Option<String>,
    /// Destination path for the error log. When absent, errors are only
    /// surfaced on stderr.
    pub logs: Option<PathBuf>,
    /// When true and `output` already exists, the existing catalog is loaded
    /// and used as the merge base instead of being overwritten.
    pub merge: bool,
}
