//! SQLite persistence.
//!
//! [`db::Db`] opens the database file and applies pending
//! [`migrations`]; the repositories wrap a `Db` each.
//!
//! ```rust,no_run
//! use studytrack::db::{db::Db, sessions::Sessions, users::Users};
//!
//! let users = Users::from_db(Db::open("studytrack.db")?);
//! let sessions = Sessions::from_db(Db::open("studytrack.db")?);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod db;
pub mod migrations;

/// Study sessions per user: insert, transitions, history and per-subject totals.
pub mod sessions;

/// Registered accounts and their password hashes.
pub mod users;
