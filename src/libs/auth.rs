//! Account registration, login and the persisted "current user".
//!
//! The logged-in user is kept in `auth.json` in the data directory. Every
//! session command resolves the user through [`AuthStore::require`].

use crate::db::users::{User, Users};
use crate::libs::data_storage::DataStorage;
use crate::libs::error::TrackerError;
use crate::libs::password::{hash_password, verify_password};
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const AUTH_FILE_NAME: &str = "auth.json";
pub const MAX_USERNAME_LEN: usize = 64;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AuthSession {
    pub user_id: i64,
    pub username: String,
    pub logged_in_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Logout {
    LoggedOut(String),
    /// The login file existed but could not be read.
    Discarded,
    NotLoggedIn,
}

#[derive(Debug, Clone)]
pub struct AuthStore {
    path: PathBuf,
}

impl AuthStore {
    pub fn new() -> Result<Self> {
        Ok(Self {
            path: DataStorage::new().get_path(AUTH_FILE_NAME)?,
        })
    }

    pub fn at<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn current(&self) -> Result<Option<AuthSession>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    pub fn require(&self) -> Result<AuthSession> {
        self.current()?.ok_or_else(|| TrackerError::NotLoggedIn.into())
    }

    fn save(&self, session: &AuthSession) -> Result<()> {
        let file = File::create(&self.path)?;
        serde_json::to_writer_pretty(&file, session)?;
        Ok(())
    }

    /// Returns `true` if a login was removed.
    pub fn clear(&self) -> Result<bool> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Removes the login file whether or not it can be parsed.
    pub fn logout(&self) -> Result<Logout> {
        let current = self.current();
        if !self.clear()? {
            return Ok(Logout::NotLoggedIn);
        }
        match current {
            Ok(Some(session)) => Ok(Logout::LoggedOut(session.username)),
            Ok(None) => Ok(Logout::NotLoggedIn),
            Err(e) => {
                warn!(error = %e, "discarded unreadable login file");
                Ok(Logout::Discarded)
            }
        }
    }

    fn ensure_logged_out(&self) -> Result<()> {
        if let Some(session) = self.current()? {
            return Err(TrackerError::AlreadyLoggedIn(session.username).into());
        }
        Ok(())
    }

    pub fn register(&self, users: &Users, username: &str, password: &str, confirmation: &str) -> Result<User> {
        self.ensure_logged_out()?;

        let username = validate_username(username)?;
        if password.is_empty() {
            return Err(TrackerError::PasswordRequired.into());
        }
        if password != confirmation {
            return Err(TrackerError::PasswordMismatch.into());
        }
        if users.find_by_username(&username)?.is_some() {
            return Err(TrackerError::UsernameTaken(username).into());
        }

        let user = users.insert(&username, &hash_password(password))?;
        info!(user_id = user.id, username = %user.username, "registered user");
        Ok(user)
    }

    pub fn login(&self, users: &Users, username: &str, password: &str) -> Result<AuthSession> {
        self.ensure_logged_out()?;

        let user = users
            .find_by_username(username.trim())?
            .filter(|user| verify_password(password, &user.password_hash))
            .ok_or(TrackerError::InvalidCredentials)?;

        let session = AuthSession {
            user_id: user.id,
            username: user.username,
            logged_in_at: Utc::now(),
        };
        self.save(&session)?;
        debug!(user_id = session.user_id, "login persisted");
        Ok(session)
    }
}

fn validate_username(username: &str) -> Result<String, TrackerError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(TrackerError::UsernameRequired);
    }
    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(TrackerError::UsernameTooLong(MAX_USERNAME_LEN));
    }
    Ok(username.to_string())
}
