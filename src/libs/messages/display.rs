//! Text for every [`Message`] variant.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === ACCOUNT MESSAGES ===
            Message::Registered(username) => format!("Account '{}' created. You can log in now.", username),
            Message::LoggedIn(username) => format!("Logged in as '{}'", username),
            Message::LoggedOut(username) => format!("Logged out '{}'", username),
            Message::NotLoggedIn => "Not logged in".to_string(),
            Message::UnreadableLoginRemoved => "Removed an unreadable login file".to_string(),
            Message::WhoAmI(username) => format!("Logged in as '{}'", username),
            Message::AccountMissing(username) => {
                format!("The account '{}' no longer exists. Please log out and log in again.", username)
            }
            Message::PromptUsername => "Username".to_string(),
            Message::PromptPassword => "Password".to_string(),
            Message::PromptPasswordConfirm => "Repeat password".to_string(),
            Message::PasswordMismatchPrompt => "The two passwords must match!".to_string(),

            // === SESSION MESSAGES ===
            Message::SessionStarted(subject) => format!("Study session started: {}", subject),
            Message::SessionPaused(subject, elapsed) => format!("Paused '{}' after {}", subject, elapsed),
            Message::SessionResumed(subject) => format!("Resumed '{}'", subject),
            Message::SessionStopped(subject, duration) => format!("Finished '{}': {}", subject, duration),
            Message::SessionEdited(id, duration) => format!("Session {} updated, duration is now {}", id, duration),
            Message::SessionsDeleted(count) => format!("Successfully deleted {} record(s)", count),
            Message::ConfirmDeleteSessions(count) => format!("Delete {} session(s)?", count),
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::ActiveSessionHeader => "Current session".to_string(),
            Message::NoActiveSession => "No study session in progress".to_string(),
            Message::HistoryHeader(date) => format!("Study sessions for {}", date),
            Message::NoSessionsForDate(date) => format!("No study sessions recorded for {}", date),

            // === SUMMARY MESSAGES ===
            Message::SummaryHeader(from, to) => {
                if from == to {
                    format!("Study time for {}", from)
                } else {
                    format!("Study time from {} to {}", from, to)
                }
            }
            Message::NoStudyTimeInRange => "No completed study sessions in this period".to_string(),
            Message::SummaryTotal(total) => format!("Total: {}", total),
            Message::SummaryDailyAverage(average) => format!("Average per study day: {}", average),
            Message::DailyTotalsHeader => "By day".to_string(),

            // === COUNTDOWN MESSAGES ===
            Message::CountdownHeader(target) => format!("Countdown to {}", target),
            Message::CountdownRemaining {
                days,
                hours,
                minutes,
                seconds,
            } => format!("{} effective day(s) {}:{}:{}", days, hours, minutes, seconds),
            Message::CountdownTotalHours(hours) => format!("{} effective hours left", hours),
            Message::CountdownOver => "The countdown is over".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigNotFound => "No configuration file to remove".to_string(),
            Message::ConfigModuleCountdown => "Countdown settings".to_string(),
            Message::ConfigUnreadable(error) => format!("Existing configuration could not be read ({}); starting from defaults", error),
            Message::PromptCountdownTarget => "Target date and time (YYYY-MM-DD HH:MM:SS)".to_string(),
            Message::PromptEffectiveStartHour => "First effective study hour of the day (0-23)".to_string(),
            Message::PromptEffectiveEndHour => "Last effective study hour of the day (1-24)".to_string(),
            Message::InvalidCountdownTarget => "Use the format YYYY-MM-DD HH:MM:SS".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("✓ Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("✗ Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All database migrations completed successfully".to_string(),
            Message::DatabaseVersion(version) => format!("Database schema version: {}", version),
            Message::DatabaseNeedsUpdate => "Database needs migration".to_string(),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
            Message::NothingToRollback => "Nothing to rollback".to_string(),
            Message::RollingBack(from, to) => format!("Rolling back from v{} to v{}", from, to),
            Message::RollbackCompleted(version) => format!("Rollback to v{} completed", version),
        };
        write!(f, "{}", text)
    }
}
