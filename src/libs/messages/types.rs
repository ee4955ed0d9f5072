/// Every piece of user-facing text, grouped by feature.
///
/// The text itself lives in the `Display` impl in `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === ACCOUNT MESSAGES ===
    Registered(String), // username
    LoggedIn(String),   // username
    LoggedOut(String),  // username
    NotLoggedIn,
    UnreadableLoginRemoved,
    WhoAmI(String), // username
    AccountMissing(String),
    PromptUsername,
    PromptPassword,
    PromptPasswordConfirm,
    PasswordMismatchPrompt,

    // === SESSION MESSAGES ===
    SessionStarted(String), // subject
    SessionPaused(String, String),  // subject, elapsed
    SessionResumed(String), // subject
    SessionStopped(String, String), // subject, duration
    SessionEdited(i64, String),     // id, duration
    SessionsDeleted(usize),
    ConfirmDeleteSessions(usize),
    OperationCancelled,
    ActiveSessionHeader,
    NoActiveSession,
    HistoryHeader(String), // date
    NoSessionsForDate(String),

    // === SUMMARY MESSAGES ===
    SummaryHeader(String, String), // from, to
    NoStudyTimeInRange,
    SummaryTotal(String),
    SummaryDailyAverage(String),
    DailyTotalsHeader,

    // === COUNTDOWN MESSAGES ===
    CountdownHeader(String), // target
    CountdownRemaining {
        days: i64,
        hours: String,
        minutes: String,
        seconds: String,
    },
    CountdownTotalHours(String),
    CountdownOver,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigModuleCountdown,
    ConfigUnreadable(String), // error
    PromptCountdownTarget,
    PromptEffectiveStartHour,
    PromptEffectiveEndHour,
    InvalidCountdownTarget,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseNeedsUpdate,
    DatabaseUpToDate,
    MigrationHistory,
    NothingToRollback,
    RollingBack(u32, u32),  // from, to
    RollbackCompleted(u32), // version
}
