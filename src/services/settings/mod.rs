// Settings service
// Loading, validating and persisting the application settings record

use anyhow::{Context, Result};

use crate::models::settings::{AppSettings, SCHEDULE_URL_MAIN};
use crate::models::FirstDayOfWeek;
use crate::services::database::Database;
use crate::services::sync::normalize_url;

/// Key-value record name for the persisted settings.
pub const SETTINGS_RECORD: &str = "calendar_settings";

pub struct SettingsService<'a> {
    db: &'a Database,
}

impl<'a> SettingsService<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Load the persisted settings merged over the built-in defaults.
    ///
    /// Missing fields fall back silently (serde defaults); a missing or
    /// malformed record falls back to the full defaults.
    pub fn load(&self) -> Result<AppSettings> {
        let Some(raw) = self.db.get(SETTINGS_RECORD)? else {
            return Ok(AppSettings::default());
        };

        match serde_json::from_str::<AppSettings>(&raw) {
            Ok(mut settings) => {
                if settings.validate().is_err() {
                    log::warn!(
                        "Persisted work hours {} are out of range, using default",
                        settings.work_hours
                    );
                    settings.work_hours = AppSettings::default().work_hours;
                }
                Ok(settings)
            }
            Err(err) => {
                log::warn!("Persisted settings are malformed, using defaults: {}", err);
                Ok(AppSettings::default())
            }
        }
    }

    /// Persist the settings record.
    pub fn save(&self, settings: &AppSettings) -> Result<()> {
        let encoded =
            serde_json::to_string(settings).context("Failed to encode settings")?;
        self.db.set(SETTINGS_RECORD, &encoded)
    }

    /// Change the first day of the week and persist immediately.
    pub fn set_first_day(
        &self,
        settings: &mut AppSettings,
        first_day: FirstDayOfWeek,
    ) -> Result<()> {
        settings.first_day_of_week = first_day;
        self.save(settings)
    }

    /// Change the shift length and persist immediately.
    ///
    /// Out-of-range values (outside 1–24) are silently ignored: no mutation,
    /// no persistence. Returns whether the value was applied.
    pub fn set_work_hours(&self, settings: &mut AppSettings, hours: u32) -> Result<bool> {
        if !AppSettings::valid_work_hours(hours) {
            log::debug!("Ignoring out-of-range work hours value {}", hours);
            return Ok(false);
        }

        settings.work_hours = hours;
        self.save(settings)?;
        Ok(true)
    }

    /// Toggle weekend highlighting and persist immediately.
    pub fn set_highlight_weekends(
        &self,
        settings: &mut AppSettings,
        highlight: bool,
    ) -> Result<()> {
        settings.highlight_weekends = highlight;
        self.save(settings)
    }

    /// Change the remote schedule URL, normalizing web-viewer links to their
    /// raw-content form. Blank input is ignored. Returns whether the value
    /// was applied.
    pub fn set_schedule_url(&self, settings: &mut AppSettings, url: &str) -> Result<bool> {
        let normalized = normalize_url(url.trim());
        if normalized.is_empty() {
            return Ok(false);
        }

        settings.schedule_url = normalized;
        self.save(settings)?;
        Ok(true)
    }

    /// Restore the default schedule URL and persist immediately.
    pub fn reset_schedule_url(&self, settings: &mut AppSettings) -> Result<()> {
        settings.schedule_url = SCHEDULE_URL_MAIN.to_string();
        self.save(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn setup_test_db() -> Database {
        let db = Database::new(":memory:").unwrap();
        db.initialize_schema().unwrap();
        db
    }

    #[test]
    fn test_load_defaults_when_missing() {
        let db = setup_test_db();
        let service = SettingsService::new(&db);

        let settings = service.load().unwrap();
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn test_load_merges_partial_record_over_defaults() {
        let db = setup_test_db();
        db.set(SETTINGS_RECORD, r#"{"firstDayOfWeek":"sunday"}"#).unwrap();

        let service = SettingsService::new(&db);
        let settings = service.load().unwrap();
        assert_eq!(settings.first_day_of_week, FirstDayOfWeek::Sunday);
        assert_eq!(settings.work_hours, 12);
    }

    #[test]
    fn test_load_malformed_record_falls_back_to_defaults() {
        let db = setup_test_db();
        db.set(SETTINGS_RECORD, "###").unwrap();

        let service = SettingsService::new(&db);
        assert_eq!(service.load().unwrap(), AppSettings::default());
    }

    #[test]
    fn test_set_work_hours_persists() {
        let db = setup_test_db();
        let service = SettingsService::new(&db);
        let mut settings = AppSettings::default();

        assert!(service.set_work_hours(&mut settings, 8).unwrap());
        assert_eq!(service.load().unwrap().work_hours, 8);
    }

    #[test]
    fn test_out_of_range_work_hours_silently_ignored() {
        let db = setup_test_db();
        let service = SettingsService::new(&db);
        let mut settings = AppSettings::default();

        assert!(!service.set_work_hours(&mut settings, 0).unwrap());
        assert!(!service.set_work_hours(&mut settings, 25).unwrap());
        assert_eq!(settings.work_hours, 12);
        // Nothing was persisted either.
        assert_eq!(db.get(SETTINGS_RECORD).unwrap(), None);
    }

    #[test]
    fn test_set_schedule_url_normalizes_viewer_links() {
        let db = setup_test_db();
        let service = SettingsService::new(&db);
        let mut settings = AppSettings::default();

        service
            .set_schedule_url(&mut settings, "https://github.com/user/repo/blob/main/plan.json")
            .unwrap();
        assert_eq!(
            settings.schedule_url,
            "https://raw.githubusercontent.com/user/repo/main/plan.json"
        );
    }

    #[test]
    fn test_reset_schedule_url() {
        let db = setup_test_db();
        let service = SettingsService::new(&db);
        let mut settings = AppSettings::default();
        settings.schedule_url = "https://example.com/other.json".to_string();

        service.reset_schedule_url(&mut settings).unwrap();
        assert_eq!(settings.schedule_url, SCHEDULE_URL_MAIN);
    }
}
