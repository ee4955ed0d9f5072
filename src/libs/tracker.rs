//! Study session operations on behalf of one logged-in user.
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use studytrack::db::sessions::Sessions;
//! use studytrack::libs::tracker::Tracker;
//!
//! let mut tracker = Tracker::new(Sessions::new()?, 1);
//! tracker.start("Linear algebra", Utc::now())?;
//! tracker.pause(Utc::now())?;
//! tracker.resume(Utc::now())?;
//! let finished = tracker.stop(Utc::now())?;
//! println!("studied {}s", finished.duration_seconds.unwrap_or(0));
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::db::sessions::Sessions;
use crate::libs::error::TrackerError;
use crate::libs::study::StudySession;
use crate::libs::summary::{daily_totals, DailySummary, DateRange, SubjectTotal};
use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use tracing::info;

pub struct Tracker {
    sessions: Sessions,
    user_id: i64,
}

impl Tracker {
    pub fn new(sessions: Sessions, user_id: i64) -> Self {
        Self { sessions, user_id }
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn start(&mut self, subject: &str, now: DateTime<Utc>) -> Result<StudySession> {
        let session = StudySession::start(self.user_id, subject, now)?;
        let session = self.sessions.insert_open(&session)?;
        info!(session_id = ?session.id, subject = %session.subject, "study session started");
        Ok(session)
    }

    pub fn pause(&mut self, now: DateTime<Utc>) -> Result<StudySession> {
        self.transition(|session| session.pause(now))
    }

    pub fn resume(&mut self, now: DateTime<Utc>) -> Result<StudySession> {
        self.transition(|session| session.resume(now))
    }

    pub fn stop(&mut self, now: DateTime<Utc>) -> Result<StudySession> {
        let session = self.transition(|session| session.stop(now))?;
        info!(
            session_id = ?session.id,
            duration_seconds = ?session.duration_seconds,
            "study session completed"
        );
        Ok(session)
    }

    pub fn current(&self) -> Result<Option<StudySession>> {
        self.sessions.fetch_open(self.user_id)
    }

    /// Sessions started on `date` (UTC), newest first.
    pub fn history(&self, date: NaiveDate) -> Result<Vec<StudySession>> {
        let (from, to) = DateRange::day(date).bounds();
        self.sessions.fetch_between(self.user_id, from, to)
    }

    pub fn modify(&mut self, session_id: i64, minutes: f64) -> Result<StudySession> {
        let mut session = self
            .sessions
            .get_by_id(session_id)?
            .ok_or(TrackerError::SessionNotFound(session_id))?;
        if session.user_id != self.user_id {
            return Err(TrackerError::Forbidden(session_id).into());
        }

        session.set_duration_minutes(minutes)?;
        self.sessions.update(&session)?;
        info!(session_id, duration_seconds = ?session.duration_seconds, "study session edited");
        Ok(session)
    }

    /// Deletes the user's sessions among `ids`; ids owned by others are ignored.
    pub fn delete(&mut self, ids: &[i64]) -> Result<usize> {
        if ids.is_empty() {
            return Err(TrackerError::NoSessionIds.into());
        }
        let deleted = self.sessions.delete_owned(self.user_id, ids)?;
        if deleted == 0 {
            return Err(TrackerError::NoSessionsToDelete.into());
        }
        Ok(deleted)
    }

    pub fn subject_totals(&self, range: DateRange) -> Result<Vec<SubjectTotal>> {
        let (from, to) = range.bounds();
        self.sessions.subject_totals(self.user_id, from, to)
    }

    pub fn daily_totals(&self, range: DateRange) -> Result<Vec<DailySummary>> {
        let (from, to) = range.bounds();
        let sessions = self.sessions.fetch_between(self.user_id, from, to)?;
        Ok(daily_totals(&sessions))
    }

    fn transition<F>(&mut self, apply: F) -> Result<StudySession>
    where
        F: FnOnce(&mut StudySession) -> Result<(), TrackerError>,
    {
        self.sessions.update_open(self.user_id, apply)
    }
}
