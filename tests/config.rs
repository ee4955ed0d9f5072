#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::fs;
    use std::path::PathBuf;
    use studytrack::libs::config::{Config, CONFIG_FILE_NAME};
    use studytrack::libs::countdown::CountdownConfig;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        path: PathBuf,
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            ConfigTestContext {
                path: temp_dir.path().join(CONFIG_FILE_NAME),
                _temp_dir: temp_dir,
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_gives_defaults(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.path).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.countdown.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read(ctx: &mut ConfigTestContext) {
        let config = Config {
            countdown: Some(CountdownConfig {
                target: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap().and_hms_opt(9, 0, 0).unwrap(),
                effective_start_hour: 7,
                effective_end_hour: 23,
            }),
        };
        config.save_to(&ctx.path).unwrap();

        let content = fs::read_to_string(&ctx.path).unwrap();
        assert!(content.contains("\"effective_start_hour\": 7"));

        assert_eq!(Config::read_from(&ctx.path).unwrap(), config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_empty_section_is_omitted(ctx: &mut ConfigTestContext) {
        Config::default().save_to(&ctx.path).unwrap();
        let content = fs::read_to_string(&ctx.path).unwrap();
        assert!(!content.contains("countdown"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_hours_rejected(ctx: &mut ConfigTestContext) {
        fs::write(
            &ctx.path,
            r#"{"countdown": {"target": "2026-06-01T09:00:00", "effective_start_hour": 20, "effective_end_hour": 10}}"#,
        )
        .unwrap();
        assert!(Config::read_from(&ctx.path).is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_json_rejected(ctx: &mut ConfigTestContext) {
        fs::write(&ctx.path, "{ not json").unwrap();
        assert!(Config::read_from(&ctx.path).is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_or_default_recovers_from_bad_file(ctx: &mut ConfigTestContext) {
        fs::write(&ctx.path, "{ not json").unwrap();
        assert_eq!(Config::read_or_default(&ctx.path), Config::default());

        let config = Config {
            countdown: Some(CountdownConfig::default()),
        };
        config.save_to(&ctx.path).unwrap();
        assert_eq!(Config::read_or_default(&ctx.path), config);
    }
}
