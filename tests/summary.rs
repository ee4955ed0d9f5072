#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, TimeZone, Utc};
    use studytrack::libs::study::StudySession;
    use studytrack::libs::summary::{
        daily_totals, grand_total, parse_date, DailySummary, DateRange, SubjectTotal, SummaryCalculator,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date_keywords() {
        // A Wednesday
        let today = date(2025, 3, 12);

        assert_eq!(parse_date("today", today).unwrap(), today);
        assert_eq!(parse_date("Yesterday", today).unwrap(), date(2025, 3, 11));
        assert_eq!(parse_date("week", today).unwrap(), date(2025, 3, 10));
        assert_eq!(parse_date("month", today).unwrap(), date(2025, 3, 1));
        assert_eq!(parse_date(" 2024-02-29 ", today).unwrap(), date(2024, 2, 29));
    }

    #[test]
    fn test_parse_date_invalid() {
        let today = date(2025, 3, 12);
        assert!(parse_date("2025-02-30", today).is_err());
        assert!(parse_date("12/03/2025", today).is_err());
        assert!(parse_date("", today).is_err());
    }

    #[test]
    fn test_date_range() {
        assert!(DateRange::new(date(2025, 3, 2), date(2025, 3, 1)).is_err());

        let range = DateRange::new(date(2025, 3, 1), date(2025, 3, 2)).unwrap();
        let (from, to) = range.bounds();
        assert_eq!(from, Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap());
        assert_eq!(to, Utc.with_ymd_and_hms(2025, 3, 3, 0, 0, 0).unwrap());

        let (from, to) = DateRange::day(date(2025, 3, 1)).bounds();
        assert_eq!(to - from, Duration::days(1));
    }

    #[test]
    fn test_daily_totals_skip_open_sessions() {
        let t0 = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();

        let mut a = StudySession::start(1, "Math", t0).unwrap();
        a.stop(t0 + Duration::minutes(40)).unwrap();
        let mut b = StudySession::start(1, "Math", t0 + Duration::days(1)).unwrap();
        b.stop(t0 + Duration::days(1) + Duration::minutes(20)).unwrap();
        let open = StudySession::start(1, "Math", t0 + Duration::hours(2)).unwrap();

        let days = daily_totals(&[b, open, a]);
        assert_eq!(
            days,
            vec![
                DailySummary {
                    date: date(2025, 3, 1),
                    duration: Duration::minutes(40),
                },
                DailySummary {
                    date: date(2025, 3, 2),
                    duration: Duration::minutes(20),
                },
            ]
        );
    }

    #[test]
    fn test_calculate_totals() {
        let days = vec![
            DailySummary {
                date: date(2025, 3, 3),
                duration: Duration::hours(3),
            },
            DailySummary {
                date: date(2025, 3, 1),
                duration: Duration::hours(1),
            },
        ];

        let (days, total, average) = days.calculate_totals();
        assert_eq!(days[0].date, date(2025, 3, 1));
        assert_eq!(total, Duration::hours(4));
        assert_eq!(average, Duration::hours(2));

        let (empty, total, average) = Vec::<DailySummary>::new().calculate_totals();
        assert!(empty.is_empty());
        assert_eq!(total, Duration::zero());
        assert_eq!(average, Duration::zero());
    }

    #[test]
    fn test_grand_total() {
        let totals = vec![
            SubjectTotal {
                subject: "Math".to_string(),
                total_seconds: 3600,
                sessions: 2,
            },
            SubjectTotal {
                subject: "Physics".to_string(),
                total_seconds: 1800,
                sessions: 1,
            },
        ];
        assert_eq!(grand_total(&totals), Duration::seconds(5400));
        assert_eq!(grand_total(&[]), Duration::zero());
    }
}
