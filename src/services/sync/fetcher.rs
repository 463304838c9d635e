// Remote schedule fetcher
// Blocking HTTP download of the remote JSON schedule, with the
// primary -> fallback branch attempt and URL normalization

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde_json::Value;
use url::Url;

use crate::models::settings::{SCHEDULE_REPO, SCHEDULE_URL_MAIN, SCHEDULE_URL_MASTER};
use crate::services::store::{self, EventStore};

use super::SyncError;

/// Rewrite web-viewer links to their raw-content equivalents so the fetch
/// gets JSON instead of an HTML page:
/// - `github.com/.../blob/...` becomes `raw.githubusercontent.com/...`
/// - `gist.github.com` becomes `gist.githubusercontent.com`
///
/// Anything unparseable is returned unchanged.
pub fn normalize_url(url: &str) -> String {
    let Ok(mut parsed) = Url::parse(url) else {
        return url.to_string();
    };

    match parsed.host_str() {
        Some("github.com") if parsed.path().contains("/blob/") => {
            let path = parsed.path().replacen("/blob/", "/", 1);
            if parsed.set_host(Some("raw.githubusercontent.com")).is_ok() {
                parsed.set_path(&path);
            }
        }
        Some("gist.github.com") => {
            let _ = parsed.set_host(Some("gist.githubusercontent.com"));
        }
        _ => {}
    }

    parsed.to_string()
}

/// Whether the configured URL should use the default two-branch attempt
/// rather than a single direct request.
fn uses_default_source(url: &str) -> bool {
    url.is_empty() || url == SCHEDULE_URL_MAIN || url.contains(SCHEDULE_REPO)
}

pub struct ScheduleFetcher {
    client: Client,
}

impl ScheduleFetcher {
    pub fn new() -> Result<Self> {
        // No timeout beyond the transport default; the fetch is a one-shot
        // user action.
        let client = Client::builder()
            .build()
            .context("Failed to build schedule HTTP client")?;

        Ok(Self { client })
    }

    /// Fetch the remote schedule for the configured URL.
    ///
    /// The default configuration tries the main branch, then the master
    /// branch of the same file; a custom URL is normalized and requested
    /// once. No retries in either case.
    pub fn fetch(&self, configured_url: &str) -> Result<EventStore, SyncError> {
        if !uses_default_source(configured_url) {
            return self.fetch_once(&normalize_url(configured_url));
        }

        match self.fetch_once(SCHEDULE_URL_MAIN) {
            Ok(store) => Ok(store),
            Err(primary) => {
                log::warn!(
                    "Primary schedule source failed ({}), trying fallback branch",
                    primary
                );
                self.fetch_once(SCHEDULE_URL_MASTER)
                    .map_err(|fallback| SyncError::BothSourcesFailed {
                        primary: primary.to_string(),
                        fallback: fallback.to_string(),
                    })
            }
        }
    }

    fn fetch_once(&self, url: &str) -> Result<EventStore, SyncError> {
        log::info!("Fetching schedule from {}", url);
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::Status(status));
        }

        let payload: Value = response.json()?;
        store::from_json_object(&payload).ok_or(SyncError::InvalidPayload)
    }
}
