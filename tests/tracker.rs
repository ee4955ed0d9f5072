#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
    use studytrack::db::db::Db;
    use studytrack::db::sessions::Sessions;
    use studytrack::db::users::Users;
    use studytrack::libs::error::TrackerError;
    use studytrack::libs::study::SessionStatus;
    use studytrack::libs::summary::DateRange;
    use studytrack::libs::tracker::Tracker;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TrackerTestContext {
        alice: Tracker,
        bob: Tracker,
        temp_dir: TempDir,
    }

    impl TrackerTestContext {
        fn db(&self) -> Db {
            Db::open(self.temp_dir.path().join("test.db")).unwrap()
        }
    }

    impl TestContext for TrackerTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("test.db");

            let users = Users::from_db(Db::open(&db_path).unwrap());
            let alice = users.insert("alice", "pbkdf2:sha256:1$salt$aGFzaA==").unwrap();
            let bob = users.insert("bob", "pbkdf2:sha256:1$salt$aGFzaA==").unwrap();

            TrackerTestContext {
                alice: Tracker::new(Sessions::from_db(Db::open(&db_path).unwrap()), alice.id),
                bob: Tracker::new(Sessions::from_db(Db::open(&db_path).unwrap()), bob.id),
                temp_dir,
            }
        }
    }

    fn t(day: u32, h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, day, h, m, 0).unwrap()
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
    }

    fn tracker_error(err: &anyhow::Error) -> &TrackerError {
        err.downcast_ref::<TrackerError>().expect("expected a TrackerError")
    }

    fn study(tracker: &mut Tracker, subject: &str, from: DateTime<Utc>, minutes: i64) -> i64 {
        let session = tracker.start(subject, from).unwrap();
        tracker.stop(from + Duration::minutes(minutes)).unwrap();
        session.id.unwrap()
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_full_lifecycle_is_persisted(ctx: &mut TrackerTestContext) {
        let started = ctx.alice.start("Math", t(1, 9, 0)).unwrap();
        assert!(started.id.is_some());

        ctx.alice.pause(t(1, 9, 25)).unwrap();
        let current = ctx.alice.current().unwrap().unwrap();
        assert_eq!(current.status, SessionStatus::Paused);
        assert_eq!(current.accumulated_seconds, 25 * 60);

        ctx.alice.resume(t(1, 9, 30)).unwrap();
        let stopped = ctx.alice.stop(t(1, 9, 50)).unwrap();
        assert_eq!(stopped.id, started.id);
        assert_eq!(stopped.duration_seconds, Some(45 * 60));

        assert!(ctx.alice.current().unwrap().is_none());

        let history = ctx.alice.history(date(1)).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0], stopped);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_only_one_open_session(ctx: &mut TrackerTestContext) {
        ctx.alice.start("Math", t(1, 9, 0)).unwrap();

        let err = ctx.alice.start("Physics", t(1, 9, 5)).unwrap_err();
        assert!(matches!(tracker_error(&err), TrackerError::AlreadyRunning(subject) if subject == "Math"));

        ctx.alice.pause(t(1, 9, 10)).unwrap();
        let err = ctx.alice.start("Physics", t(1, 9, 15)).unwrap_err();
        assert!(matches!(tracker_error(&err), TrackerError::AlreadyRunning(_)));

        // Other users are unaffected
        ctx.bob.start("Physics", t(1, 9, 15)).unwrap();
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_schema_rejects_second_open_row(ctx: &mut TrackerTestContext) {
        ctx.alice.start("Math", t(1, 9, 0)).unwrap();

        let db = ctx.db();
        let result = db.conn.execute(
            "INSERT INTO study_sessions (user_id, subject, start_time, status) VALUES (?1, 'Rogue', ?2, 'paused')",
            rusqlite::params![ctx.alice.user_id(), t(1, 10, 0)],
        );
        assert!(result.is_err());
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_transitions_without_open_session(ctx: &mut TrackerTestContext) {
        for err in [
            ctx.alice.pause(t(1, 9, 0)).unwrap_err(),
            ctx.alice.resume(t(1, 9, 0)).unwrap_err(),
            ctx.alice.stop(t(1, 9, 0)).unwrap_err(),
        ] {
            assert!(matches!(tracker_error(&err), TrackerError::NoOpenSession));
        }

        ctx.alice.start("Math", t(1, 9, 0)).unwrap();
        let err = ctx.alice.resume(t(1, 9, 1)).unwrap_err();
        assert!(matches!(tracker_error(&err), TrackerError::NotPaused));
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_second_handle_cannot_reopen_completed_session(ctx: &mut TrackerTestContext) {
        let mut other_shell = Tracker::new(Sessions::from_db(ctx.db()), ctx.alice.user_id());

        let id = ctx.alice.start("Math", t(1, 9, 0)).unwrap().id.unwrap();
        other_shell.stop(t(1, 9, 30)).unwrap();

        let err = ctx.alice.pause(t(1, 9, 40)).unwrap_err();
        assert!(matches!(tracker_error(&err), TrackerError::NoOpenSession));

        let stored = ctx.alice.history(date(1)).unwrap().remove(0);
        assert_eq!(stored.id, Some(id));
        assert_eq!(stored.status, SessionStatus::Completed);
        assert_eq!(stored.duration_seconds, Some(30 * 60));
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_failed_transition_leaves_row_untouched(ctx: &mut TrackerTestContext) {
        ctx.alice.start("Math", t(1, 9, 0)).unwrap();
        ctx.alice.resume(t(1, 9, 5)).unwrap_err();

        let current = ctx.alice.current().unwrap().unwrap();
        assert_eq!(current.status, SessionStatus::Active);
        assert_eq!(current.resumed_at, Some(t(1, 9, 0)));
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_history_is_per_day_and_newest_first(ctx: &mut TrackerTestContext) {
        let first = study(&mut ctx.alice, "Math", t(2, 8, 0), 30);
        let second = study(&mut ctx.alice, "Physics", t(2, 13, 0), 45);
        study(&mut ctx.alice, "Math", t(3, 8, 0), 60);
        study(&mut ctx.bob, "Math", t(2, 9, 0), 60);

        let history = ctx.alice.history(date(2)).unwrap();
        let ids: Vec<i64> = history.iter().filter_map(|s| s.id).collect();
        assert_eq!(ids, vec![second, first]);

        assert!(ctx.alice.history(date(4)).unwrap().is_empty());
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_modify_duration(ctx: &mut TrackerTestContext) {
        let id = study(&mut ctx.alice, "Math", t(1, 9, 0), 30);

        let edited = ctx.alice.modify(id, 90.0).unwrap();
        assert_eq!(edited.duration_seconds, Some(5400));
        assert_eq!(edited.end_time, Some(t(1, 10, 30)));

        let stored = ctx.alice.history(date(1)).unwrap().remove(0);
        assert_eq!(stored.duration_seconds, Some(5400));
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_modify_checks_ownership_and_state(ctx: &mut TrackerTestContext) {
        let id = study(&mut ctx.alice, "Math", t(1, 9, 0), 30);

        let err = ctx.bob.modify(id, 10.0).unwrap_err();
        assert!(matches!(tracker_error(&err), TrackerError::Forbidden(x) if *x == id));

        let err = ctx.alice.modify(9999, 10.0).unwrap_err();
        assert!(matches!(tracker_error(&err), TrackerError::SessionNotFound(9999)));

        let err = ctx.alice.modify(id, -5.0).unwrap_err();
        assert!(matches!(tracker_error(&err), TrackerError::InvalidDuration(_)));

        let open = ctx.alice.start("Physics", t(1, 11, 0)).unwrap().id.unwrap();
        let err = ctx.alice.modify(open, 10.0).unwrap_err();
        assert!(matches!(tracker_error(&err), TrackerError::NotCompleted(_)));
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_delete_only_own_sessions(ctx: &mut TrackerTestContext) {
        let a1 = study(&mut ctx.alice, "Math", t(1, 9, 0), 30);
        let a2 = study(&mut ctx.alice, "Math", t(1, 10, 0), 30);
        let b1 = study(&mut ctx.bob, "Math", t(1, 9, 0), 30);

        let deleted = ctx.alice.delete(&[a1, a2, b1, 4242]).unwrap();
        assert_eq!(deleted, 2);
        assert!(ctx.alice.history(date(1)).unwrap().is_empty());
        assert_eq!(ctx.bob.history(date(1)).unwrap().len(), 1);

        let err = ctx.alice.delete(&[b1]).unwrap_err();
        assert!(matches!(tracker_error(&err), TrackerError::NoSessionsToDelete));

        let err = ctx.alice.delete(&[]).unwrap_err();
        assert!(matches!(tracker_error(&err), TrackerError::NoSessionIds));
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_delete_open_session_allows_new_start(ctx: &mut TrackerTestContext) {
        let open = ctx.alice.start("Math", t(1, 9, 0)).unwrap().id.unwrap();
        assert_eq!(ctx.alice.delete(&[open]).unwrap(), 1);
        assert!(ctx.alice.current().unwrap().is_none());
        ctx.alice.start("Physics", t(1, 9, 5)).unwrap();
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_subject_totals(ctx: &mut TrackerTestContext) {
        study(&mut ctx.alice, "Math", t(1, 9, 0), 30);
        study(&mut ctx.alice, "Physics", t(1, 11, 0), 90);
        study(&mut ctx.alice, "Math", t(2, 9, 0), 45);
        study(&mut ctx.alice, "Math", t(5, 9, 0), 600);
        study(&mut ctx.bob, "Math", t(1, 9, 0), 300);
        // Open sessions are not counted
        ctx.alice.start("Chemistry", t(2, 12, 0)).unwrap();

        let totals = ctx.alice.subject_totals(DateRange::new(date(1), date(2)).unwrap()).unwrap();
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].subject, "Physics");
        assert_eq!(totals[0].total_seconds, 90 * 60);
        assert_eq!(totals[0].sessions, 1);
        assert_eq!(totals[1].subject, "Math");
        assert_eq!(totals[1].total_seconds, 75 * 60);
        assert_eq!(totals[1].sessions, 2);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_daily_totals(ctx: &mut TrackerTestContext) {
        study(&mut ctx.alice, "Math", t(1, 9, 0), 30);
        study(&mut ctx.alice, "Physics", t(1, 11, 0), 30);
        study(&mut ctx.alice, "Math", t(3, 9, 0), 120);

        let days = ctx.alice.daily_totals(DateRange::new(date(1), date(3)).unwrap()).unwrap();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, date(1));
        assert_eq!(days[0].duration, Duration::hours(1));
        assert_eq!(days[1].date, date(3));
        assert_eq!(days[1].duration, Duration::hours(2));
    }
}
