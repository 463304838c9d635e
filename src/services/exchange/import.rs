// Event store import
// Reads a JSON file that fully replaces the event store

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde_json::Value;

use crate::services::store::{self, EventStore};

/// Parse an event store from imported JSON text.
///
/// Any non-null JSON object passes the shape check (entries that don't look
/// like date-keyed label lists are skipped); anything else is an error.
/// Unlike the remote sync path, an imported store is meant to *replace* the
/// local one — the caller performs the overwrite.
pub fn from_json(contents: &str) -> Result<EventStore> {
    let value: Value =
        serde_json::from_str(contents).context("Import file is not valid JSON")?;

    store::from_json_object(&value).ok_or_else(|| anyhow!("Import file is not a JSON object"))
}

/// Read and parse an import file.
pub fn read_from(path: &Path) -> Result<EventStore> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read import file {:?}", path))?;
    from_json(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::exchange::write_to;
    use crate::services::store::add_event;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_import_round_trips_an_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");

        let mut store = EventStore::new();
        add_event(&mut store, "2025-3-1".parse().unwrap(), "nocka");
        add_event(&mut store, "2025-3-2".parse().unwrap(), "urlop");
        write_to(&store, Some(&path)).unwrap();

        let imported = read_from(&path).unwrap();
        assert_eq!(imported, store);
    }

    #[test]
    fn test_shallow_shape_check_accepts_unrelated_object() {
        // {"x":1} is a non-null object: accepted, contributes no entries.
        let imported = from_json(r#"{"x":1}"#).unwrap();
        assert!(imported.is_empty());
    }

    #[test]
    fn test_non_object_json_is_rejected() {
        assert!(from_json("null").is_err());
        assert!(from_json("[1,2,3]").is_err());
        assert!(from_json("42").is_err());
    }

    #[test]
    fn test_unparseable_file_is_rejected() {
        assert!(from_json("{definitely not json").is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(read_from(Path::new("/nonexistent/import.json")).is_err());
    }
}
