//! Migration orchestrator wrapping the pluggable engine.
//!
//! [`Migrator`] ties the three collaborators together: the migration engine
//! supplied by the embedding application, the migrations directory on disk,
//! and the schema diff source that produces new migration content. Engine
//! operations are pure pass-through; the only real work happens in
//! [`Migrator::make_migration`], which names a version and emits the file
//! pair.
//!
//! ## Diff source
//!
//! The diff source is a closure returning a [`MigrationResult`], typically
//! backed by a schema comparison between the application's model and the
//! live database. It runs lazily, only when `make_migration` is invoked.

use crate::engine::{EngineError, MigrationEngine, StopToken};
use crate::libs::result::MigrationResult;
use crate::libs::version::{next_sequential, time_version, VersionError};
use crate::libs::writer;
use crate::msg_debug;
use anyhow::Result;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Produces the schema diff a new migration pair is rendered from.
pub type DiffSource = Box<dyn Fn() -> Result<MigrationResult> + Send>;

/// Naming options for a new migration pair.
#[derive(Debug, Clone)]
pub struct MigrationOptions {
    /// Title part of the file names.
    pub name: String,
    /// File extension; `None` or empty means `.sql`.
    pub ext: Option<String>,
    /// Use a sequential counter instead of a timestamp.
    pub sequential: bool,
    /// Digit width for sequential versions.
    pub digits: usize,
    /// Time pattern for timestamped versions, or `unix`/`unixNano`.
    pub format: Option<String>,
    /// IANA timezone name for timestamped versions; `None` means local.
    pub timezone: Option<String>,
}

impl Default for MigrationOptions {
    fn default() -> Self {
        Self {
            name: String::new(),
            ext: None,
            sequential: false,
            digits: 6,
            format: None,
            timezone: None,
        }
    }
}

/// Orchestrates migration creation and delegates execution to the engine.
pub struct Migrator<E: MigrationEngine> {
    engine: E,
    migrations_dir: PathBuf,
    diff_source: DiffSource,
    verbose: bool,
}

impl<E: MigrationEngine> Migrator<E> {
    pub fn new(engine: E, migrations_dir: impl Into<PathBuf>, diff_source: DiffSource) -> Self {
        Self {
            engine,
            migrations_dir: migrations_dir.into(),
            diff_source,
            verbose: false,
        }
    }

    pub fn migrations_dir(&self) -> &Path {
        &self.migrations_dir
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Applies the command-line tuning flags to the engine.
    pub fn configure_engine(&mut self, prefetch: u32, lock_timeout_secs: u64) {
        self.engine.set_prefetch(prefetch);
        self.engine.set_lock_timeout(Duration::from_secs(lock_timeout_secs));
    }

    pub fn stop_token(&self) -> StopToken {
        self.engine.stop_token()
    }

    /// Creates a new migration pair from the diff source.
    ///
    /// Returns the up/down paths of the written pair, or `None` when the
    /// diff came back empty and nothing was written. The duplicate-version
    /// check happens before any file I/O.
    pub fn make_migration(&self, options: &MigrationOptions) -> Result<Option<(PathBuf, PathBuf)>> {
        let result = (self.diff_source)()?;

        if result.is_empty() {
            return Ok(None);
        }

        // The flag layer already rejects this combination for CLI users;
        // library callers get the same contract here.
        if options.sequential && (options.format.is_some() || options.timezone.is_some()) {
            return Err(VersionError::SequentialWithFormat.into());
        }

        let ext = writer::normalize_extension(options.ext.as_deref());

        let version = if options.sequential {
            next_sequential(&self.migrations_dir, &ext, options.digits)?
        } else {
            time_version(options.timezone.as_deref(), options.format.as_deref())?
        };
        msg_debug!(format!("Computed migration version: {}", version));

        let (up, down) = writer::migration_pair_paths(&self.migrations_dir, &version, &options.name, &ext)?;
        writer::write_pair(&up, &down, &result)?;

        Ok(Some((up, down)))
    }

    pub fn up(&mut self, limit: Option<u64>) -> Result<(), EngineError> {
        self.engine.up(limit)
    }

    pub fn down(&mut self, limit: Option<u64>) -> Result<(), EngineError> {
        self.engine.down(limit)
    }

    pub fn goto(&mut self, version: u64) -> Result<(), EngineError> {
        self.engine.migrate_to(version)
    }

    pub fn force(&mut self, version: i64) -> Result<(), EngineError> {
        self.engine.force(version)
    }

    pub fn drop_all(&mut self) -> Result<(), EngineError> {
        self.engine.drop_all()
    }

    pub fn version(&mut self) -> Result<(u64, bool), EngineError> {
        self.engine.version()
    }

    pub fn close(&mut self) -> Result<(), EngineError> {
        self.engine.close()
    }
}
