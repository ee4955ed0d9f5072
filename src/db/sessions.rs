//! Persistence of study sessions.
//!
//! Every query is scoped by `user_id`; ownership of single-row lookups is
//! checked by the caller (see `libs::tracker`).

use crate::db::db::Db;
use crate::libs::error::TrackerError;
use crate::libs::study::{SessionStatus, StudySession};
use crate::libs::summary::SubjectTotal;
use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row, TransactionBehavior};
use tracing::debug;

const SESSION_COLUMNS: &str =
    "id, user_id, subject, start_time, end_time, status, accumulated_seconds, resumed_at, duration_seconds";

const INSERT_SESSION: &str = "INSERT INTO study_sessions
    (user_id, subject, start_time, end_time, status, accumulated_seconds, resumed_at, duration_seconds)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";

const UPDATE_SESSION: &str = "UPDATE study_sessions SET
    subject = ?1, end_time = ?2, status = ?3, accumulated_seconds = ?4, resumed_at = ?5, duration_seconds = ?6
    WHERE id = ?7 AND user_id = ?8";

const UPDATE_OPEN_SESSION: &str = "UPDATE study_sessions SET
    end_time = ?1, status = ?2, accumulated_seconds = ?3, resumed_at = ?4, duration_seconds = ?5
    WHERE id = ?6 AND user_id = ?7 AND status = ?8";

const SELECT_SUBJECT_TOTALS: &str = "SELECT subject, SUM(duration_seconds), COUNT(*)
    FROM study_sessions
    WHERE user_id = ?1 AND status = 'completed' AND start_time >= ?2 AND start_time < ?3
    GROUP BY subject
    ORDER BY SUM(duration_seconds) DESC, subject ASC";

pub struct Sessions {
    db: Db,
}

impl Sessions {
    pub fn new() -> Result<Self> {
        Ok(Self { db: Db::new()? })
    }

    pub fn from_db(db: Db) -> Self {
        Self { db }
    }

    pub fn conn(&self) -> &Connection {
        &self.db.conn
    }

    /// Inserts a freshly started session unless the user already has an open one.
    pub fn insert_open(&mut self, session: &StudySession) -> Result<StudySession> {
        let tx = self.db.conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        if let Some(open) = fetch_open(&tx, session.user_id)? {
            return Err(TrackerError::AlreadyRunning(open.subject).into());
        }

        let inserted = tx.execute(
            INSERT_SESSION,
            params![
                session.user_id,
                session.subject,
                session.start_time,
                session.end_time,
                session.status,
                session.accumulated_seconds,
                session.resumed_at,
                session.duration_seconds,
            ],
        );
        if let Err(rusqlite::Error::SqliteFailure(err, _)) = &inserted {
            if err.code == rusqlite::ErrorCode::ConstraintViolation {
                return Err(TrackerError::AlreadyRunning(session.subject.clone()).into());
            }
        }
        inserted?;

        let id = tx.last_insert_rowid();
        tx.commit()?;
        debug!(session_id = id, user_id = session.user_id, "inserted study session");

        Ok(StudySession {
            id: Some(id),
            ..session.clone()
        })
    }

    /// Applies `apply` to the user's open session and stores the result.
    ///
    /// Read and write share one immediate transaction, and the write only
    /// lands if the row still has the status it was read with.
    pub fn update_open<F>(&mut self, user_id: i64, apply: F) -> Result<StudySession>
    where
        F: FnOnce(&mut StudySession) -> Result<(), TrackerError>,
    {
        let tx = self.db.conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let mut session = fetch_open(&tx, user_id)?.ok_or(TrackerError::NoOpenSession)?;
        let id = session.id.ok_or(TrackerError::NoOpenSession)?;
        let prior_status = session.status;
        apply(&mut session)?;

        let updated = tx.execute(
            UPDATE_OPEN_SESSION,
            params![
                session.end_time,
                session.status,
                session.accumulated_seconds,
                session.resumed_at,
                session.duration_seconds,
                id,
                user_id,
                prior_status,
            ],
        )?;
        if updated == 0 {
            return Err(TrackerError::NoOpenSession.into());
        }
        tx.commit()?;

        debug!(session_id = id, from = %prior_status, to = %session.status, "study session transition");
        Ok(session)
    }

    pub fn update(&self, session: &StudySession) -> Result<()> {
        let id = session.id.ok_or(TrackerError::SessionNotFound(0))?;
        let updated = self.db.conn.execute(
            UPDATE_SESSION,
            params![
                session.subject,
                session.end_time,
                session.status,
                session.accumulated_seconds,
                session.resumed_at,
                session.duration_seconds,
                id,
                session.user_id,
            ],
        )?;
        if updated == 0 {
            return Err(TrackerError::SessionNotFound(id).into());
        }
        Ok(())
    }

    /// Looks a session up regardless of owner.
    pub fn get_by_id(&self, id: i64) -> Result<Option<StudySession>> {
        let sql = format!("SELECT {} FROM study_sessions WHERE id = ?1", SESSION_COLUMNS);
        let session = self.db.conn.query_row(&sql, params![id], session_from_row).optional()?;
        Ok(session)
    }

    pub fn fetch_open(&self, user_id: i64) -> Result<Option<StudySession>> {
        fetch_open(&self.db.conn, user_id)
    }

    /// Sessions started in `[from, to)`, newest first.
    pub fn fetch_between(&self, user_id: i64, from: DateTime<Utc>, to: DateTime<Utc>) -> Result<Vec<StudySession>> {
        let sql = format!(
            "SELECT {} FROM study_sessions WHERE user_id = ?1 AND start_time >= ?2 AND start_time < ?3 ORDER BY start_time DESC, id DESC",
            SESSION_COLUMNS
        );
        let mut stmt = self.db.conn.prepare(&sql)?;
        let sessions = stmt
            .query_map(params![user_id, from, to], session_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(sessions)
    }

    /// Completed study time per subject for sessions started in `[from, to)`.
    pub fn subject_totals(&self, user_id: i64, from: DateTime<Utc>, to: DateTime<Utc>) -> Result<Vec<SubjectTotal>> {
        let mut stmt = self.db.conn.prepare(SELECT_SUBJECT_TOTALS)?;
        let totals = stmt
            .query_map(params![user_id, from, to], |row| {
                Ok(SubjectTotal {
                    subject: row.get(0)?,
                    total_seconds: row.get::<_, Option<i64>>(1)?.unwrap_or(0),
                    sessions: row.get::<_, i64>(2)? as usize,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(totals)
    }

    /// Deletes those of `ids` that belong to `user_id`; returns how many rows went away.
    pub fn delete_owned(&mut self, user_id: i64, ids: &[i64]) -> Result<usize> {
        if ids.is_empty() {
            return Ok(0);
        }

        let placeholders = (0..ids.len()).map(|i| format!("?{}", i + 2)).collect::<Vec<_>>().join(", ");
        let sql = format!("DELETE FROM study_sessions WHERE user_id = ?1 AND id IN ({})", placeholders);

        let mut values: Vec<i64> = Vec::with_capacity(ids.len() + 1);
        values.push(user_id);
        values.extend_from_slice(ids);

        let tx = self.db.conn.transaction()?;
        let deleted = tx.execute(&sql, params_from_iter(values.iter()))?;
        tx.commit()?;

        debug!(user_id, deleted, "deleted study sessions");
        Ok(deleted)
    }
}

fn fetch_open(conn: &Connection, user_id: i64) -> Result<Option<StudySession>> {
    let sql = format!(
        "SELECT {} FROM study_sessions WHERE user_id = ?1 AND status <> ?2 ORDER BY id DESC LIMIT 1",
        SESSION_COLUMNS
    );
    let session = conn
        .query_row(&sql, params![user_id, SessionStatus::Completed], session_from_row)
        .optional()?;
    Ok(session)
}

fn session_from_row(row: &Row) -> rusqlite::Result<StudySession> {
    Ok(StudySession {
        id: Some(row.get(0)?),
        user_id: row.get(1)?,
        subject: row.get(2)?,
        start_time: row.get(3)?,
        end_time: row.get(4)?,
        status: row.get(5)?,
        accumulated_seconds: row.get(6)?,
        resumed_at: row.get(7)?,
        duration_seconds: row.get(8)?,
    })
}
