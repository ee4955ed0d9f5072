//! Domain errors for study sessions and accounts.
//!
//! Commands propagate these through `anyhow`, so the `Display` text here is
//! what the user sees after the error prefix.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    // === Session errors ===
    #[error("A study session is already in progress ({0})")]
    AlreadyRunning(String),

    #[error("Subject is required")]
    SubjectRequired,

    #[error("No active study session found")]
    NoOpenSession,

    #[error("The study session is not running")]
    NotActive,

    #[error("The study session is not paused")]
    NotPaused,

    #[error("Study session {0} is already completed")]
    AlreadyCompleted(i64),

    #[error("Study session {0} is still in progress; stop it before editing")]
    NotCompleted(i64),

    #[error("Study session {0} not found")]
    SessionNotFound(i64),

    #[error("You are not allowed to modify study session {0}")]
    Forbidden(i64),

    #[error("No session ids provided")]
    NoSessionIds,

    #[error("No sessions found that can be deleted")]
    NoSessionsToDelete,

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Invalid date range: {0} is after {1}")]
    InvalidDateRange(String, String),

    // === Account errors ===
    #[error("Please log in first")]
    NotLoggedIn,

    #[error("Already logged in as '{0}'")]
    AlreadyLoggedIn(String),

    #[error("Username is required")]
    UsernameRequired,

    #[error("Username must be at most {0} characters")]
    UsernameTooLong(usize),

    #[error("Password is required")]
    PasswordRequired,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Username '{0}' is already taken, please choose another one")]
    UsernameTaken(String),

    #[error("Invalid username or password")]
    InvalidCredentials,

    // === Infrastructure ===
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}
