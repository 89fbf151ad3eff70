use chrono::{DateTime, Local, NaiveDate, TimeZone as _};
use serde::{Deserialize, Serialize};

/// A row in the activity feed. The upstream feed delivers the timestamp as
/// a string, so the date is parsed lazily and may be missing.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ActivityEntry {
    pub id: u32,
    pub title: String,
    pub category: ActivityCategory,
    pub date: String,
}

impl ActivityEntry {
    /// Parses the feed timestamp: RFC 3339, or a bare `YYYY-MM-DD` taken as
    /// local midnight. Returns `None` for anything else.
    pub fn date(&self) -> Option<DateTime<Local>> {
        if let Ok(date) = DateTime::parse_from_rfc3339(&self.date) {
            return Some(date.with_timezone(&Local));
        }
        let day = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()?;
        Local
            .from_local_datetime(&day.and_hms_opt(0, 0, 0)?)
            .earliest()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Hash, PartialEq, Eq)]
pub enum ActivityCategory {
    Training,
    Outreach,
    Maintenance,
    Meeting,
}

impl ActivityCategory {
    pub fn name(&self) -> &'static str {
        match self {
            ActivityCategory::Training => "Training",
            ActivityCategory::Outreach => "Outreach",
            ActivityCategory::Maintenance => "Maintenance",
            ActivityCategory::Meeting => "Meeting",
        }
    }
}
