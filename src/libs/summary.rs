//! Aggregation of completed study time by subject and by day.

use crate::libs::error::TrackerError;
use crate::libs::study::{SessionStatus, StudySession};
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use std::collections::BTreeMap;

/// Inclusive range of UTC calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, TrackerError> {
        if from > to {
            return Err(TrackerError::InvalidDateRange(from.to_string(), to.to_string()));
        }
        Ok(Self { from, to })
    }

    pub fn day(date: NaiveDate) -> Self {
        Self { from: date, to: date }
    }

    /// Half-open `[start, end)` instants covering the range.
    pub fn bounds(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        let start = self.from.and_time(chrono::NaiveTime::MIN).and_utc();
        let end = (self.to + Duration::days(1)).and_time(chrono::NaiveTime::MIN).and_utc();
        (start, end)
    }
}

/// Parses `YYYY-MM-DD` or one of `today`, `yesterday`, `week`, `month`.
///
/// `week` and `month` resolve to their first day; used as a range start they
/// cover the current week or month up to `today`.
pub fn parse_date(input: &str, today: NaiveDate) -> anyhow::Result<NaiveDate> {
    match input.trim().to_lowercase().as_str() {
        "today" => Ok(today),
        "yesterday" => Ok(today - Duration::days(1)),
        "week" => Ok(today - Duration::days(today.weekday().num_days_from_monday() as i64)),
        "month" => Ok(today.with_day(1).unwrap_or(today)),
        other => Ok(NaiveDate::parse_from_str(other, "%Y-%m-%d")?),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectTotal {
    pub subject: String,
    pub total_seconds: i64,
    pub sessions: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub duration: Duration,
}

/// Per-day totals of completed sessions, keyed by the UTC date they started on.
pub fn daily_totals(sessions: &[StudySession]) -> Vec<DailySummary> {
    let mut by_date: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    for session in sessions.iter().filter(|s| s.status == SessionStatus::Completed) {
        *by_date.entry(session.start_time.date_naive()).or_default() += session.duration_seconds.unwrap_or(0);
    }

    by_date
        .into_iter()
        .map(|(date, seconds)| DailySummary {
            date,
            duration: Duration::seconds(seconds),
        })
        .collect()
}

pub trait SummaryCalculator {
    /// Sorts by date and returns `(days, total, average per day)`.
    fn calculate_totals(self) -> (Self, Duration, Duration)
    where
        Self: Sized;
}

impl SummaryCalculator for Vec<DailySummary> {
    fn calculate_totals(mut self) -> (Self, Duration, Duration) {
        self.sort_by_key(|ds| ds.date);

        let total_duration = self.iter().fold(Duration::zero(), |acc, ds| acc + ds.duration);

        let count = self.len() as i64;
        let average_duration = if count > 0 {
            Duration::seconds(total_duration.num_seconds() / count)
        } else {
            Duration::zero()
        };

        (self, total_duration, average_duration)
    }
}

pub fn grand_total(totals: &[SubjectTotal]) -> Duration {
    Duration::seconds(totals.iter().map(|t| t.total_seconds).sum())
}
