//! The extraction engine.
//!
//! Pipeline phases, each a standalone module:
//!
//! 1. `scan`: discover candidate files under the root.
//! 2. `parse`: build an isolated single-file syntax tree.
//! 3. `collect` + `extract`: find recognized call sites and pull
//!    (key, default value) pairs out of them.
//! 4. `catalog`: assemble pairs into the nested catalog, merge fragments,
//!    write the final document.
//!
//! `pipeline` sequences the phases; `options` and `error` carry the run's
//! configuration and recoverable error records.

pub mod catalog;
pub mod collect;
pub mod error;
pub mod extract;
pub mod options;
pub mod parse;
pub mod pipeline;
pub mod scan;

pub use catalog::{Catalog, insert_key, merge_catalogs};
pub use error::{ErrorSink, SourceLocation};
pub use extract::{CallPattern, ExtractedPair};
pub use options::ExtractOptions;
pub use pipeline::{ExtractSummary, extract, extract_from_file};
pub use scan::{DEFAULT_PATTERNS, scan_source_files};
