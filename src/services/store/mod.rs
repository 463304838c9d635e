// Event store service
// The in-memory date-keyed event map and its persistence

use std::collections::BTreeMap;

use anyhow::{Context, Result};

use crate::models::DateKey;
use crate::services::database::Database;

/// Date-key to ordered event-label list.
///
/// Invariant: a key present in the store always maps to a non-empty list;
/// mutation helpers delete the key when its list empties.
pub type EventStore = BTreeMap<DateKey, Vec<String>>;

/// Key-value record name for the persisted event store.
pub const EVENTS_RECORD: &str = "calendar_events";

/// Add a label at a date. Duplicate labels at one date are suppressed.
/// Returns true when the store changed.
pub fn add_event(store: &mut EventStore, date: DateKey, label: &str) -> bool {
    let label = label.trim();
    if label.is_empty() {
        return false;
    }

    let labels = store.entry(date).or_default();
    if labels.iter().any(|existing| existing == label) {
        return false;
    }

    labels.push(label.to_string());
    true
}

/// Remove one label at a date, dropping the key when the list empties.
/// Returns true when the label was found and removed.
pub fn remove_event(store: &mut EventStore, date: DateKey, label: &str) -> bool {
    let Some(labels) = store.get_mut(&date) else {
        return false;
    };
    let Some(position) = labels.iter().position(|existing| existing == label) else {
        return false;
    };

    labels.remove(position);
    if labels.is_empty() {
        store.remove(&date);
    }
    true
}

/// Decode an event store from an untyped JSON value.
///
/// `None` unless the value is an object. Entries whose key is not a date key
/// or whose value is not an array are skipped rather than rejected, matching
/// the shallow shape check of the original data sources; non-string array
/// items and empty lists are dropped so the store invariant holds.
pub fn from_json_object(value: &serde_json::Value) -> Option<EventStore> {
    let object = value.as_object()?;

    let mut store = EventStore::new();
    for (raw_key, raw_labels) in object {
        let Ok(date) = raw_key.parse::<DateKey>() else {
            log::debug!("Skipping entry with non-date key '{}'", raw_key);
            continue;
        };
        let Some(items) = raw_labels.as_array() else {
            log::debug!("Skipping non-list entry at '{}'", raw_key);
            continue;
        };

        let labels: Vec<String> = items
            .iter()
            .filter_map(|item| item.as_str())
            .map(str::to_string)
            .collect();
        if !labels.is_empty() {
            store.insert(date, labels);
        }
    }

    Some(store)
}

/// Service for loading and saving the event store.
pub struct StoreService<'a> {
    db: &'a Database,
}

impl<'a> StoreService<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Load the persisted event store.
    ///
    /// A missing record yields an empty store. A malformed record is
    /// recoverable: it is logged and the store starts empty rather than
    /// failing startup.
    pub fn load(&self) -> Result<EventStore> {
        let Some(raw) = self.db.get(EVENTS_RECORD)? else {
            return Ok(EventStore::new());
        };

        match serde_json::from_str(&raw) {
            Ok(store) => Ok(store),
            Err(err) => {
                log::warn!("Persisted event store is malformed, starting empty: {}", err);
                Ok(EventStore::new())
            }
        }
    }

    /// Persist the full event store. A failed write is an explicit error.
    pub fn save(&self, store: &EventStore) -> Result<()> {
        let encoded =
            serde_json::to_string(store).context("Failed to encode event store")?;
        self.db.set(EVENTS_RECORD, &encoded)
    }
}
