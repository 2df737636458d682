//! The nested localization catalog.
//!
//! A catalog maps key segments to either a string leaf or a nested
//! catalog; a given path is never both. Two combination operations with
//! deliberately different strictness:
//!
//! - [`insert_key`] (within one run): leaf-vs-nested collisions fail fast,
//!   since re-using a key path inside the scanned tree is almost always a
//!   bug.
//! - [`merge_catalogs`] (fragment aggregation and merge mode): never
//!   conflicts, the overlay wins at leaves, so stale translations in an
//!   existing catalog are intentionally overridden.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use serde_json::{Map, Value, ser::PrettyFormatter};

/// Key order is preserved, so output documents are deterministic in
/// insertion order.
pub type Catalog = Map<String, Value>;

/// Insert `value` at the `/`-delimited `key`, creating intermediate nested
/// catalogs as needed.
///
/// Fails if an intermediate segment already holds a string, or if the
/// terminal segment already holds a nested catalog. A failed insertion
/// leaves the catalog unchanged.
pub fn insert_key(catalog: &mut Catalog, key: &str, value: &str) -> Result<()> {
    let segments: Vec<&str> = key.split('/').collect();
    let Some((last, parents)) = segments.split_last() else {
        bail!("empty translation key");
    };

    let mut current = catalog;
    let mut walked: Vec<&str> = Vec::with_capacity(parents.len());
    for segment in parents {
        walked.push(segment);
        // entry() only inserts when the segment is vacant, so bailing on a
        // string leaves the catalog unchanged.
        let next = current
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        match next {
            Value::Object(map) => current = map,
            _ => bail!(
                "key prefix '{}' already holds a translation value",
                walked.join("/")
            ),
        }
    }

    if matches!(current.get(*last), Some(Value::Object(_))) {
        bail!("key '{}' already refers to a nested section", key);
    }
    current.insert(last.to_string(), Value::String(value.to_string()));
    Ok(())
}

/// Recursively merge `overlay` into `base`.
///
/// Nested catalogs on both sides merge; for everything else the overlay
/// wins, including leaf values. Never errors.
pub fn merge_catalogs(base: &mut Catalog, overlay: Catalog) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                merge_catalogs(existing, incoming);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

/// Count the string leaves in a catalog.
pub fn count_leaves(catalog: &Catalog) -> usize {
    catalog
        .values()
        .map(|value| match value {
            Value::Object(nested) => count_leaves(nested),
            _ => 1,
        })
        .sum()
}

/// Load an existing catalog document. The root must be an object.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse catalog: {}", path.display()))?;
    match value {
        Value::Object(map) => Ok(map),
        _ => bail!("Root of catalog file must be an object: {}", path.display()),
    }
}

/// Write a catalog with 4-space indentation and a trailing newline,
/// creating parent directories as needed.
pub fn write_catalog(path: &Path, catalog: &Catalog) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    catalog
        .serialize(&mut serializer)
        .context("Failed to serialize catalog")?;
    buffer.push(b'\n');

    fs::write(path, buffer).with_context(|| format!("Failed to write file: {}", path.display()))
}
