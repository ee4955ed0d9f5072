//! # Studytrack
//!
//! A command-line study timer. Register an account, start a session for a
//! subject, pause and resume it as often as needed, stop it, then review the
//! day's history, per-subject totals, and a countdown to your target date
//! measured in effective study hours.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use studytrack::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
