//! Candidate file discovery.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::glob;

/// Default patterns: all TypeScript sources (`.ts` and `.tsx`) under any
/// `src` directory. Two patterns because `glob` has no `{ts,tsx}` brace
/// alternation.
pub const DEFAULT_PATTERNS: &[&str] = &["**/src/**/*.ts", "**/src/**/*.tsx"];

/// Find all files under `root` matching `pattern` (or [`DEFAULT_PATTERNS`]).
///
/// Patterns are joined under `root`, so results resolve against the
/// working directory the same way `root` does. An invalid pattern is a
/// fatal discovery error; an empty match set is not.
///
/// Results are sorted so downstream merging and error logs are
/// reproducible regardless of platform iteration order.
pub fn scan_source_files(root: &Path, pattern: Option<&str>) -> Result<Vec<PathBuf>> {
    let patterns: Vec<&str> = match pattern {
        Some(pattern) => vec![pattern],
        None => DEFAULT_PATTERNS.to_vec(),
    };

    let mut files = Vec::new();
    for pattern in patterns {
        let full_pattern = root.join(pattern);
        let full_pattern = full_pattern.to_string_lossy();

        let entries = glob(&full_pattern)
            .with_context(|| format!("Invalid file pattern: {}", full_pattern))?;
        for entry in entries {
            let path = entry.context("Failed to read a globbed path")?;
            if path.is_file() {
                files.push(path);
            }
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}
