// Remote sync service
// Fetch -> union-merge -> persist, with a typed failure taxonomy

mod fetcher;
mod merge;

pub use fetcher::{normalize_url, ScheduleFetcher};
pub use merge::merge;

use anyhow::Result;
use thiserror::Error;

use crate::models::settings::AppSettings;
use crate::services::database::Database;
use crate::services::store::{EventStore, StoreService};

/// Failures of the remote schedule fetch. One user-visible error per sync
/// attempt; there are no automatic retries beyond the single
/// primary -> fallback step.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Network error during schedule fetch: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Schedule fetch failed with HTTP status {0}")]
    Status(reqwest::StatusCode),

    #[error("Schedule payload is not a JSON object")]
    InvalidPayload,

    #[error("Schedule unavailable from both branches (main: {primary}; master: {fallback})")]
    BothSourcesFailed { primary: String, fallback: String },
}

/// Result of one sync run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncOutcome {
    /// Dates present in the remote payload.
    pub incoming_entries: usize,
    /// Whether the merge added anything new locally.
    pub changed: bool,
}

pub struct SyncService<'a> {
    db: &'a Database,
    fetcher: ScheduleFetcher,
}

impl<'a> SyncService<'a> {
    pub fn new(db: &'a Database) -> Result<Self> {
        Ok(Self {
            db,
            fetcher: ScheduleFetcher::new()?,
        })
    }

    /// Fetch the remote schedule and union-merge it into `store`.
    ///
    /// The merged store is persisted after the merge whether or not anything
    /// changed; local-only events are never touched.
    pub fn run(&self, store: &mut EventStore, settings: &AppSettings) -> Result<SyncOutcome> {
        let incoming = self.fetcher.fetch(&settings.schedule_url)?;
        let changed = merge(store, &incoming);

        StoreService::new(self.db).save(store)?;

        Ok(SyncOutcome {
            incoming_entries: incoming.len(),
            changed,
        })
    }
}
