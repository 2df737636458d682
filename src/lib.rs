//! Nlsx - localization key extraction for TypeScript sources
//!
//! Nlsx is a CLI tool and library that scans a tree of TypeScript source
//! files for localization call sites (`nls.localize(...)` and
//! `Command.toLocalizedCommand(...)`), extracts (key, default value)
//! pairs, and writes them as a nested JSON translation catalog. Malformed
//! call sites are reported with their source location and skipped, so one
//! bad call never loses the rest of the tree's strings.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments and dispatch)
//! - `core`: The extraction engine (scan, parse, collect, extract,
//!   catalog, pipeline)

pub mod cli;
pub mod core;
