// Date key model
// Composite year/month/day identifier used as the event store key

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Composite date identifier formatted as `"{year}-{month}-{day}"` with a
/// zero-based month and no zero padding (e.g. `2025-3-10` is April 10, 2025).
///
/// This is the key format of the persisted event store and of remote
/// schedule payloads, so the unpadded zero-based form is load-bearing:
/// changing it would orphan existing data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey {
    pub year: i32,
    /// Zero-based month (0 = January, 11 = December).
    pub month0: u32,
    pub day: u32,
}

impl DateKey {
    pub fn new(year: i32, month0: u32, day: u32) -> Self {
        Self { year, month0, day }
    }

    /// Today's date as a key, in local time.
    pub fn today() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month0: date.month0(),
            day: date.day(),
        }
    }

    /// Converts back to a calendar date. `None` for keys that never name a
    /// real day (month > 11, day 0, Feb 30, ...); such keys can arrive in
    /// imported files and are simply never matched by date-based lookups.
    pub fn to_date(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month0.checked_add(1)?, self.day)
    }

    /// True when the key falls inside the given month.
    pub fn in_month(self, year: i32, month0: u32) -> bool {
        self.year == year && self.month0 == month0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month0, self.day)
    }
}

impl FromStr for DateKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, '-');
        let year = parts
            .next()
            .and_then(|p| p.parse::<i32>().ok())
            .ok_or_else(|| format!("Invalid date key '{}': bad year", s))?;
        let month0 = parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(|| format!("Invalid date key '{}': bad month", s))?;
        let day = parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(|| format!("Invalid date key '{}': bad day", s))?;

        Ok(Self { year, month0, day })
    }
}

// Serialized through the string form so map keys in JSON match the
// persisted wire format.
impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}
