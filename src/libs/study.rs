//! Study session lifecycle and time accounting.
//!
//! A session moves through `Active -> Paused -> Active ... -> Completed`.
//! Time is banked into `accumulated_seconds` whenever a running segment ends
//! (pause or stop), so the elapsed study time never includes paused periods.
//!
//! All transitions take `now` explicitly; callers pass `Utc::now()` truncated
//! to whole seconds, tests pass fixed instants.
//!
//! ```rust
//! use chrono::{Duration, TimeZone, Utc};
//! use studytrack::libs::study::StudySession;
//!
//! let t0 = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
//! let mut session = StudySession::start(1, "Math", t0)?;
//! session.pause(t0 + Duration::minutes(25))?;
//! session.resume(t0 + Duration::minutes(30))?;
//! session.stop(t0 + Duration::minutes(50))?;
//! assert_eq!(session.duration_seconds, Some(45 * 60));
//! # Ok::<(), studytrack::libs::error::TrackerError>(())
//! ```

use crate::libs::error::TrackerError;
use crate::libs::formatter::{format_local_time, format_seconds, FormattedSession};
use chrono::{DateTime, Duration, SubsecRound, Utc};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Longer subjects are cut to this many characters.
pub const MAX_SUBJECT_LEN: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Active,
    Paused,
    Completed,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Active => "active",
            SessionStatus::Paused => "paused",
            SessionStatus::Completed => "completed",
        }
    }

    /// Active and paused sessions are "open": a user may hold at most one.
    pub fn is_open(&self) -> bool {
        !matches!(self, SessionStatus::Completed)
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SessionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(SessionStatus::Active),
            "paused" => Ok(SessionStatus::Paused),
            "completed" => Ok(SessionStatus::Completed),
            other => Err(format!("unknown session status '{}'", other)),
        }
    }
}

impl ToSql for SessionStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for SessionStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        text.parse().map_err(|e: String| FromSqlError::Other(e.into()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudySession {
    pub id: Option<i64>,
    pub user_id: i64,
    pub subject: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub status: SessionStatus,
    /// Seconds banked from finished running segments.
    pub accumulated_seconds: i64,
    /// Start of the current running segment; `Some` only while active.
    pub resumed_at: Option<DateTime<Utc>>,
    /// Final duration; `Some` only once completed.
    pub duration_seconds: Option<i64>,
}

impl StudySession {
    pub fn start(user_id: i64, subject: &str, now: DateTime<Utc>) -> Result<Self, TrackerError> {
        let subject = normalize_subject(subject)?;
        let now = now.trunc_subsecs(0);

        Ok(Self {
            id: None,
            user_id,
            subject,
            start_time: now,
            end_time: None,
            status: SessionStatus::Active,
            accumulated_seconds: 0,
            resumed_at: Some(now),
            duration_seconds: None,
        })
    }

    pub fn pause(&mut self, now: DateTime<Utc>) -> Result<(), TrackerError> {
        if self.status != SessionStatus::Active {
            return Err(TrackerError::NotActive);
        }
        self.bank_running_segment(now);
        self.status = SessionStatus::Paused;
        Ok(())
    }

    pub fn resume(&mut self, now: DateTime<Utc>) -> Result<(), TrackerError> {
        if self.status != SessionStatus::Paused {
            return Err(TrackerError::NotPaused);
        }
        self.resumed_at = Some(now.trunc_subsecs(0));
        self.status = SessionStatus::Active;
        Ok(())
    }

    pub fn stop(&mut self, now: DateTime<Utc>) -> Result<(), TrackerError> {
        match self.status {
            SessionStatus::Completed => return Err(TrackerError::AlreadyCompleted(self.id.unwrap_or_default())),
            SessionStatus::Active => self.bank_running_segment(now),
            SessionStatus::Paused => {}
        }
        self.status = SessionStatus::Completed;
        self.end_time = Some(now.trunc_subsecs(0));
        self.duration_seconds = Some(self.accumulated_seconds);
        Ok(())
    }

    /// Studied time so far, including the running segment when active.
    pub fn elapsed_seconds(&self, now: DateTime<Utc>) -> i64 {
        match (self.status, self.resumed_at) {
            (SessionStatus::Active, Some(resumed_at)) => self.accumulated_seconds + segment_seconds(resumed_at, now),
            _ => self.accumulated_seconds,
        }
    }

    /// Overwrites the duration of a completed session, keeping `end_time` consistent with it.
    pub fn set_duration_minutes(&mut self, minutes: f64) -> Result<(), TrackerError> {
        if self.status != SessionStatus::Completed {
            return Err(TrackerError::NotCompleted(self.id.unwrap_or_default()));
        }
        let invalid = || TrackerError::InvalidDuration(minutes.to_string());

        let seconds = (minutes * 60.0).trunc();
        if !seconds.is_finite() || seconds < 0.0 || seconds >= i64::MAX as f64 {
            return Err(invalid());
        }
        let seconds = seconds as i64;
        let end_time = Duration::try_seconds(seconds)
            .and_then(|duration| self.start_time.checked_add_signed(duration))
            .ok_or_else(invalid)?;

        self.accumulated_seconds = seconds;
        self.duration_seconds = Some(seconds);
        self.end_time = Some(end_time);
        Ok(())
    }

    pub fn view(&self, now: DateTime<Utc>) -> SessionView {
        SessionView {
            id: self.id.unwrap_or_default(),
            subject: self.subject.clone(),
            status: self.status,
            start_time_utc: self.start_time,
            end_time_utc: self.end_time,
            elapsed_seconds: self.elapsed_seconds(now),
        }
    }

    fn bank_running_segment(&mut self, now: DateTime<Utc>) {
        if let Some(resumed_at) = self.resumed_at.take() {
            self.accumulated_seconds += segment_seconds(resumed_at, now);
        }
    }
}

/// Serializable snapshot handed to `--json` output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionView {
    pub id: i64,
    pub subject: String,
    pub status: SessionStatus,
    pub start_time_utc: DateTime<Utc>,
    pub end_time_utc: Option<DateTime<Utc>>,
    pub elapsed_seconds: i64,
}

pub trait SessionGroup {
    /// Formats sessions into display rows; open sessions show their elapsed time so far.
    fn format(&self, now: DateTime<Utc>) -> Vec<FormattedSession>;
}

impl SessionGroup for Vec<StudySession> {
    fn format(&self, now: DateTime<Utc>) -> Vec<FormattedSession> {
        self.iter()
            .map(|s| FormattedSession {
                id: s.id.unwrap_or_default(),
                subject: s.subject.clone(),
                start: format_local_time(&s.start_time),
                end: s.end_time.map_or_else(|| "-".to_string(), |e| format_local_time(&e)),
                duration: format_seconds(s.duration_seconds.unwrap_or_else(|| s.elapsed_seconds(now))),
                status: s.status.to_string(),
            })
            .collect()
    }
}

/// Length of a running segment; a clock that went backwards counts as zero.
fn segment_seconds(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    (to - from).num_seconds().max(0)
}

fn normalize_subject(subject: &str) -> Result<String, TrackerError> {
    let subject = subject.trim();
    if subject.is_empty() {
        return Err(TrackerError::SubjectRequired);
    }
    Ok(subject.chars().take(MAX_SUBJECT_LEN).collect())
}
