// Event store export
// Pretty-printed JSON snapshot named with the current date

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;

use crate::services::store::EventStore;

/// Default export filename, stamped with the current date.
pub fn default_filename() -> String {
    format!("shift-calendar-{}.json", Local::now().format("%Y-%m-%d"))
}

/// Encode the full event store as pretty-printed JSON.
pub fn to_json(store: &EventStore) -> Result<String> {
    serde_json::to_string_pretty(store).context("Failed to encode event store for export")
}

/// Write the full event store to `path`, or to the date-stamped default
/// filename in the working directory. Returns the path written.
pub fn write_to(store: &EventStore, path: Option<&Path>) -> Result<PathBuf> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(default_filename()));

    let json = to_json(store)?;
    fs::write(&path, json)
        .with_context(|| format!("Failed to write export file {:?}", path))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::store::add_event;

    #[test]
    fn test_default_filename_is_date_stamped() {
        let name = default_filename();
        assert!(name.starts_with("shift-calendar-"));
        assert!(name.ends_with(".json"));
    }

    #[test]
    fn test_to_json_is_pretty_printed() {
        let mut store = EventStore::new();
        add_event(&mut store, "2025-3-10".parse().unwrap(), "urlop");

        let json = to_json(&store).unwrap();
        assert!(json.contains('\n'), "export should be pretty-printed");
        assert!(json.contains("\"2025-3-10\""));
    }

    #[test]
    fn test_write_to_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("backup.json");

        let mut store = EventStore::new();
        add_event(&mut store, "2025-3-10".parse().unwrap(), "nocka");

        let written = write_to(&store, Some(&target)).unwrap();
        assert_eq!(written, target);
        assert!(target.exists());
    }
}
