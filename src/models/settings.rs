// Application settings model

use serde::{Deserialize, Serialize};

/// Repository holding the default remote schedule file.
pub const SCHEDULE_REPO: &str = "json-lista";

/// Primary remote schedule location (main branch).
pub const SCHEDULE_URL_MAIN: &str =
    "https://raw.githubusercontent.com/skokivPr/json-lista/main/grafik.json";

/// Fallback remote schedule location (master branch of the same file).
pub const SCHEDULE_URL_MASTER: &str =
    "https://raw.githubusercontent.com/skokivPr/json-lista/master/grafik.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstDayOfWeek {
    Monday,
    Sunday,
}

impl std::str::FromStr for FirstDayOfWeek {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monday" => Ok(Self::Monday),
            "sunday" => Ok(Self::Sunday),
            other => Err(format!(
                "Invalid first day of week '{}' (expected 'monday' or 'sunday')",
                other
            )),
        }
    }
}

/// User-configurable application settings.
///
/// Every field carries a serde default so a partially persisted record (or
/// one written by an older version) merges over the built-in defaults on
/// load instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    #[serde(default = "default_first_day")]
    pub first_day_of_week: FirstDayOfWeek,
    /// Length of one shift in hours, 1–24.
    #[serde(default = "default_work_hours")]
    pub work_hours: u32,
    #[serde(default = "default_highlight_weekends")]
    pub highlight_weekends: bool,
    /// Remote schedule source. The default pair of branch URLs is tried when
    /// this is empty, the default, or still points at the default repository.
    #[serde(default = "default_schedule_url")]
    pub schedule_url: String,
}

fn default_first_day() -> FirstDayOfWeek {
    FirstDayOfWeek::Monday
}

fn default_work_hours() -> u32 {
    12
}

fn default_highlight_weekends() -> bool {
    true
}

fn default_schedule_url() -> String {
    SCHEDULE_URL_MAIN.to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            first_day_of_week: default_first_day(),
            work_hours: default_work_hours(),
            highlight_weekends: default_highlight_weekends(),
            schedule_url: default_schedule_url(),
        }
    }
}

impl AppSettings {
    /// Whether `hours` is an acceptable shift length.
    pub fn valid_work_hours(hours: u32) -> bool {
        (1..=24).contains(&hours)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !Self::valid_work_hours(self.work_hours) {
            return Err(format!(
                "Work hours must be between 1 and 24, got {}",
                self.work_hours
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AppSettings::default();
        assert_eq!(settings.first_day_of_week, FirstDayOfWeek::Monday);
        assert_eq!(settings.work_hours, 12);
        assert!(settings.highlight_weekends);
        assert_eq!(settings.schedule_url, SCHEDULE_URL_MAIN);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_record_merges_over_defaults() {
        // Only one field persisted; the rest fall back silently.
        let settings: AppSettings = serde_json::from_str(r#"{"workHours": 8}"#).unwrap();
        assert_eq!(settings.work_hours, 8);
        assert_eq!(settings.first_day_of_week, FirstDayOfWeek::Monday);
        assert_eq!(settings.schedule_url, SCHEDULE_URL_MAIN);
    }

    #[test]
    fn test_first_day_serializes_lowercase() {
        let json = serde_json::to_string(&AppSettings::default()).unwrap();
        assert!(json.contains("\"firstDayOfWeek\":\"monday\""));
    }

    #[test]
    fn test_work_hours_bounds() {
        assert!(AppSettings::valid_work_hours(1));
        assert!(AppSettings::valid_work_hours(24));
        assert!(!AppSettings::valid_work_hours(0));
        assert!(!AppSettings::valid_work_hours(25));
    }
}
