//! Duration and timestamp formatting for tables and messages.
//!
//! ```rust
//! use chrono::Duration;
//! use studytrack::libs::formatter::{format_duration, format_seconds};
//!
//! assert_eq!(format_duration(&(Duration::hours(2) + Duration::minutes(30))), "02:30");
//! assert_eq!(format_seconds(3725), "01:02:05");
//! ```

use chrono::{DateTime, Duration, Local, Utc};
use serde::{Deserialize, Serialize};

/// One history row, ready for display or JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedSession {
    pub id: i64,

    pub subject: String,

    pub start: String,

    pub end: String,

    pub duration: String,

    pub status: String,
}

/// `HH:MM`; negative durations show as `00:00`.
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// `HH:MM:SS` for a number of seconds; hours are not capped at 24.
pub fn format_seconds(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!("{:02}:{:02}:{:02}", seconds / 3600, seconds % 3600 / 60, seconds % 60)
}

/// Wall-clock time in the local timezone.
pub fn format_local_time(time: &DateTime<Utc>) -> String {
    time.with_timezone(&Local).format("%H:%M").to_string()
}

pub fn format_local_datetime(time: &DateTime<Utc>) -> String {
    time.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}
