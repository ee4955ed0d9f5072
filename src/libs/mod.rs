//! Core library modules.
//!
//! - **Sessions**: `study` (state machine), `tracker` (user-scoped operations)
//! - **Reporting**: `summary`, `countdown`, `formatter`, `view`
//! - **Accounts**: `auth`, `password`
//! - **Infrastructure**: `config`, `data_storage`, `error`, `logging`, `messages`

pub mod auth;
pub mod config;
pub mod countdown;
pub mod data_storage;
pub mod error;
pub mod formatter;
pub mod logging;
pub mod messages;
pub mod password;
pub mod study;
pub mod summary;
pub mod tracker;
pub mod view;
