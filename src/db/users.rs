//! Registered accounts.

use crate::db::db::Db;
use crate::libs::error::TrackerError;
use anyhow::Result;
use rusqlite::{params, OptionalExtension, Row};

const INSERT_USER: &str = "INSERT INTO users (username, password_hash) VALUES (?1, ?2)";
const SELECT_BY_USERNAME: &str = "SELECT id, username, password_hash FROM users WHERE username = ?1";
const SELECT_BY_ID: &str = "SELECT id, username, password_hash FROM users WHERE id = ?1";

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
}

impl User {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(User {
            id: row.get(0)?,
            username: row.get(1)?,
            password_hash: row.get(2)?,
        })
    }
}

pub struct Users {
    db: Db,
}

impl Users {
    pub fn new() -> Result<Self> {
        Ok(Self { db: Db::new()? })
    }

    pub fn from_db(db: Db) -> Self {
        Self { db }
    }

    pub fn insert(&self, username: &str, password_hash: &str) -> Result<User> {
        let inserted = self.db.conn.execute(INSERT_USER, params![username, password_hash]);
        if let Err(rusqlite::Error::SqliteFailure(err, _)) = &inserted {
            if err.code == rusqlite::ErrorCode::ConstraintViolation {
                return Err(TrackerError::UsernameTaken(username.to_string()).into());
            }
        }
        inserted?;

        Ok(User {
            id: self.db.conn.last_insert_rowid(),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
        })
    }

    pub fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let user = self
            .db
            .conn
            .query_row(SELECT_BY_USERNAME, params![username], User::from_row)
            .optional()?;
        Ok(user)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<User>> {
        let user = self.db.conn.query_row(SELECT_BY_ID, params![id], User::from_row).optional()?;
        Ok(user)
    }
}
