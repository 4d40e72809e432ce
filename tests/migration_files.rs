#[cfg(test)]
mod tests {
    use chrono::Local;
    use migro::engine::{EngineError, MigrationEngine, StopToken};
    use migro::libs::migrator::{MigrationOptions, Migrator};
    use migro::libs::result::MigrationResult;
    use migro::libs::version::VersionError;
    use migro::libs::writer::{migration_pair_paths, normalize_extension};
    use std::fs;
    use std::time::Duration;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Engine stub for tests that never reach engine delegation.
    struct NullEngine {
        stop: StopToken,
    }

    impl NullEngine {
        fn new() -> Self {
            NullEngine { stop: StopToken::new() }
        }
    }

    impl MigrationEngine for NullEngine {
        fn up(&mut self, _limit: Option<u64>) -> Result<(), EngineError> {
            Ok(())
        }
        fn down(&mut self, _limit: Option<u64>) -> Result<(), EngineError> {
            Ok(())
        }
        fn migrate_to(&mut self, _version: u64) -> Result<(), EngineError> {
            Ok(())
        }
        fn force(&mut self, _version: i64) -> Result<(), EngineError> {
            Ok(())
        }
        fn drop_all(&mut self) -> Result<(), EngineError> {
            Ok(())
        }
        fn version(&mut self) -> Result<(u64, bool), EngineError> {
            Err(EngineError::NoVersion)
        }
        fn set_prefetch(&mut self, _count: u32) {}
        fn set_lock_timeout(&mut self, _timeout: Duration) {}
        fn stop_token(&self) -> StopToken {
            self.stop.clone()
        }
        fn close(&mut self) -> Result<(), EngineError> {
            Ok(())
        }
    }

    struct EmitterTestContext {
        dir: TempDir,
    }

    impl TestContext for EmitterTestContext {
        fn setup() -> Self {
            EmitterTestContext {
                dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn sample_diff() -> MigrationResult {
        let mut result = MigrationResult::new();
        result.add_up("users", "CREATE TABLE users (id BIGINT PRIMARY KEY)");
        result.add_up("users", "CREATE INDEX idx_users_id ON users(id)");
        result.add_up("accounts", "CREATE TABLE accounts (id BIGINT PRIMARY KEY)");
        result.add_down("users", "DROP TABLE users");
        result.add_down("accounts", "DROP TABLE accounts");
        result
    }

    fn migrator_with_diff(ctx: &EmitterTestContext, diff: fn() -> MigrationResult) -> Migrator<NullEngine> {
        Migrator::new(NullEngine::new(), ctx.dir.path(), Box::new(move || Ok(diff())))
    }

    fn sequential_options(name: &str) -> MigrationOptions {
        MigrationOptions {
            name: name.to_string(),
            sequential: true,
            ..MigrationOptions::default()
        }
    }

    #[test]
    fn test_extension_normalization() {
        assert_eq!(normalize_extension(None), ".sql");
        assert_eq!(normalize_extension(Some("")), ".sql");
        assert_eq!(normalize_extension(Some("txt")), ".txt");
        assert_eq!(normalize_extension(Some(".txt")), ".txt");
    }

    #[test_context(EmitterTestContext)]
    #[test]
    fn test_pair_written_with_up_and_down_suffixes(ctx: &mut EmitterTestContext) {
        let migrator = migrator_with_diff(ctx, sample_diff);

        let (up, down) = migrator.make_migration(&sequential_options("init")).unwrap().unwrap();

        assert_eq!(up, ctx.dir.path().join("000001_init.up.sql"));
        assert_eq!(down, ctx.dir.path().join("000001_init.down.sql"));
        assert!(up.exists());
        assert!(down.exists());
    }

    #[test_context(EmitterTestContext)]
    #[test]
    fn test_statements_grouped_under_table_headers(ctx: &mut EmitterTestContext) {
        let migrator = migrator_with_diff(ctx, sample_diff);

        let (up, down) = migrator.make_migration(&sequential_options("init")).unwrap().unwrap();

        let up_content = fs::read_to_string(up).unwrap();
        assert_eq!(
            up_content,
            "--accounts\n\
             CREATE TABLE accounts (id BIGINT PRIMARY KEY);\n\
             --users\n\
             CREATE TABLE users (id BIGINT PRIMARY KEY);\n\
             CREATE INDEX idx_users_id ON users(id);\n"
        );

        let down_content = fs::read_to_string(down).unwrap();
        assert_eq!(
            down_content,
            "--accounts\n\
             DROP TABLE accounts;\n\
             --users\n\
             DROP TABLE users;\n"
        );
    }

    #[test_context(EmitterTestContext)]
    #[test]
    fn test_consecutive_migrations_get_consecutive_versions(ctx: &mut EmitterTestContext) {
        let migrator = migrator_with_diff(ctx, sample_diff);

        let (first_up, _) = migrator.make_migration(&sequential_options("first")).unwrap().unwrap();
        let (second_up, _) = migrator.make_migration(&sequential_options("second")).unwrap().unwrap();

        assert_eq!(first_up, ctx.dir.path().join("000001_first.up.sql"));
        assert_eq!(second_up, ctx.dir.path().join("000002_second.up.sql"));
    }

    #[test_context(EmitterTestContext)]
    #[test]
    fn test_empty_diff_writes_nothing(ctx: &mut EmitterTestContext) {
        let migrator = migrator_with_diff(ctx, MigrationResult::new);

        let outcome = migrator.make_migration(&sequential_options("noop")).unwrap();

        assert!(outcome.is_none());
        assert_eq!(fs::read_dir(ctx.dir.path()).unwrap().count(), 0);
    }

    #[test_context(EmitterTestContext)]
    #[test]
    fn test_duplicate_version_fails_before_any_write(ctx: &mut EmitterTestContext) {
        fs::write(ctx.dir.path().join("42_taken.up.sql"), "").unwrap();

        let err = migration_pair_paths(ctx.dir.path(), "42", "fresh", ".sql").unwrap_err();

        assert!(err.to_string().contains("Duplicate migration version: 42"));
        assert!(!ctx.dir.path().join("42_fresh.up.sql").exists());
        assert!(!ctx.dir.path().join("42_fresh.down.sql").exists());
    }

    #[test_context(EmitterTestContext)]
    #[test]
    fn test_time_version_collision_detected_end_to_end(ctx: &mut EmitterTestContext) {
        // Pin the version with a year-only pattern so the collision is
        // reproducible.
        let year = Local::now().format("%Y").to_string();
        fs::write(ctx.dir.path().join(format!("{}_taken.up.sql", year)), "").unwrap();

        let migrator = migrator_with_diff(ctx, sample_diff);
        let options = MigrationOptions {
            name: "fresh".to_string(),
            format: Some("%Y".to_string()),
            ..MigrationOptions::default()
        };

        let err = migrator.make_migration(&options).unwrap_err();

        assert!(err.to_string().contains("Duplicate migration version"));
        assert!(!ctx.dir.path().join(format!("{}_fresh.up.sql", year)).exists());
    }

    #[test_context(EmitterTestContext)]
    #[test]
    fn test_sequential_with_time_options_rejected(ctx: &mut EmitterTestContext) {
        let migrator = migrator_with_diff(ctx, sample_diff);

        let options = MigrationOptions {
            name: "conflicted".to_string(),
            sequential: true,
            format: Some("unix".to_string()),
            ..MigrationOptions::default()
        };

        let err = migrator.make_migration(&options).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<VersionError>(),
            Some(VersionError::SequentialWithFormat)
        ));
        assert_eq!(fs::read_dir(ctx.dir.path()).unwrap().count(), 0);
    }

    #[test_context(EmitterTestContext)]
    #[test]
    fn test_custom_extension_used_for_pair(ctx: &mut EmitterTestContext) {
        let migrator = migrator_with_diff(ctx, sample_diff);

        let options = MigrationOptions {
            name: "custom".to_string(),
            ext: Some("ddl".to_string()),
            sequential: true,
            ..MigrationOptions::default()
        };

        let (up, down) = migrator.make_migration(&options).unwrap().unwrap();

        assert_eq!(up, ctx.dir.path().join("000001_custom.up.ddl"));
        assert_eq!(down, ctx.dir.path().join("000001_custom.down.ddl"));
    }
}
