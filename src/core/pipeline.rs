//! The extraction pipeline.
//!
//! discover → per-file extraction (read, parse, collect, extract, insert)
//! → ordered aggregation → error log flush → optional merge with the
//! existing catalog → final write.
//!
//! Per-file phases run in parallel; fragments are collected in stable file
//! order and merged sequentially, so leaf overrides and error logs are
//! reproducible. Per-call-site problems are recorded and skipped, never
//! propagated: a run over an imperfect tree still writes everything that
//! could be extracted.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use rayon::prelude::*;

use crate::core::catalog::{
    Catalog, count_leaves, insert_key, load_catalog, merge_catalogs, write_catalog,
};
use crate::core::collect::collect_calls;
use crate::core::error::ErrorSink;
use crate::core::extract::CallPattern;
use crate::core::options::ExtractOptions;
use crate::core::parse::parse_source;
use crate::core::scan::scan_source_files;

/// Counts reported after a completed run.
#[derive(Debug, Clone, Copy)]
pub struct ExtractSummary {
    pub files: usize,
    pub keys: usize,
    pub errors: usize,
}

/// Build one file's catalog fragment.
///
/// Recoverable problems (malformed call sites, insertion conflicts, a file
/// that does not parse) land in `errors`; only failing to read the file is
/// fatal.
pub fn extract_from_file(
    path: &Path,
    options: &ExtractOptions,
    errors: &mut ErrorSink,
) -> Result<Catalog> {
    let file = path.to_string_lossy().to_string();
    let code = fs::read_to_string(path)
        .with_context(|| format!("Failed to read source file: {}", file))?;

    let parsed = match parse_source(code, &file) {
        Ok(parsed) => parsed,
        Err(failure) => {
            errors.record(&failure.location, &format!("syntax error: {}", failure.message));
            return Ok(Catalog::new());
        }
    };

    let mut fragment = Catalog::new();
    for pattern in CallPattern::ALL {
        for call in collect_calls(&parsed.module, |call| pattern.matches(call)) {
            let location = parsed.location(call.span.lo);
            match pattern.try_extract(&call, &parsed) {
                Ok(pairs) => {
                    for pair in pairs {
                        if let Some(prefix) = &options.exclude
                            && pair.key.starts_with(prefix.as_str())
                        {
                            continue;
                        }
                        if let Err(err) = insert_key(&mut fragment, &pair.key, &pair.value) {
                            errors.record(&location, &err.to_string());
                        }
                    }
                }
                Err(message) => errors.record(&location, &message),
            }
        }
    }
    Ok(fragment)
}

/// Run a full extraction.
///
/// Returns counts for reporting; recoverable errors are flushed to stderr
/// and, when configured, to the error log. Fatal errors (discovery, I/O,
/// serialization) abort the run before the output is touched.
pub fn extract(options: &ExtractOptions) -> Result<ExtractSummary> {
    let files = scan_source_files(&options.root, options.pattern.as_deref())?;

    let fragments: Vec<(Catalog, ErrorSink)> = files
        .par_iter()
        .map(|path| {
            let mut file_errors = ErrorSink::new();
            let fragment = extract_from_file(path, options, &mut file_errors)?;
            Ok((fragment, file_errors))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut aggregate = Catalog::new();
    let mut errors = ErrorSink::new();
    for (fragment, file_errors) in fragments {
        merge_catalogs(&mut aggregate, fragment);
        errors.extend(file_errors);
    }

    if !errors.is_empty() {
        for entry in errors.entries() {
            eprintln!("{} {}", "error:".bold().red(), entry);
        }
        if let Some(logs) = &options.logs {
            if let Some(parent) = logs.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
            fs::write(logs, errors.to_log())
                .with_context(|| format!("Failed to write error log: {}", logs.display()))?;
        }
    }

    let catalog = if options.merge && options.output.exists() {
        let mut base = load_catalog(&options.output)?;
        merge_catalogs(&mut base, aggregate);
        base
    } else {
        aggregate
    };

    let keys = count_leaves(&catalog);
    write_catalog(&options.output, &catalog)?;

    Ok(ExtractSummary {
        files: files.len(),
        keys,
        errors: errors.len(),
    })
}
