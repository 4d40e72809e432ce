//! Migration engine seam.
//!
//! The crate never talks to a database itself. Everything that touches
//! ordered migration execution, dirty-state tracking or locking lives behind
//! the [`MigrationEngine`] trait, implemented by the embedding application
//! for its database driver of choice.
//!
//! ## Contract
//!
//! - **Step Application**: `up`/`down` with an optional limit (`None` = all)
//! - **Targeted Moves**: `migrate_to` walks to an exact version, `force`
//!   stamps a version without running anything
//! - **State Queries**: `version` reports the current version and dirty flag
//! - **Interrupt**: engines poll the shared [`StopToken`] between migrations
//!   and stop cleanly once it has been triggered
//!
//! The [`EngineError::NoChange`] sentinel deserves care: the command surface
//! treats it as an informational outcome, never as a failure.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Errors surfaced by a migration engine.
///
/// Every variant except [`EngineError::NoChange`] is fatal to the running
/// command. `NoChange` signals that the requested operation had nothing to
/// do, which callers report informationally.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The operation had no migrations to apply or revert.
    #[error("no change")]
    NoChange,

    /// No migration has ever been applied, so there is no current version.
    #[error("no migration has been applied")]
    NoVersion,

    /// A previous migration attempt failed partway through.
    #[error("database is dirty at version {0}")]
    Dirty(u64),

    /// The engine could not acquire the database lock in time.
    #[error("timed out waiting for database lock")]
    LockTimeout,

    /// The database rejected or failed an operation.
    #[error("database error: {0}")]
    Database(String),

    /// The migration source (files, embedded data) is unreadable or invalid.
    #[error("migration source error: {0}")]
    Source(String),
}

/// Cooperative stop signal shared between the command surface and an engine.
///
/// The interrupt listener triggers the token on Ctrl+C; engines check
/// [`StopToken::is_triggered`] between migrations and finish the one in
/// flight before returning.
#[derive(Debug, Clone, Default)]
pub struct StopToken(Arc<AtomicBool>);

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests that the engine stop after the currently running migration.
    pub fn trigger(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_triggered(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Contract between the command surface and an external migration engine.
///
/// Implementations own the database connection, the migration source and the
/// whole apply/rollback state machine. The `limit` arguments mirror the CLI:
/// `None` means "all pending", `Some(n)` means exactly `n` steps.
pub trait MigrationEngine {
    /// Applies pending up migrations, all of them when `limit` is `None`.
    fn up(&mut self, limit: Option<u64>) -> Result<(), EngineError>;

    /// Reverts applied migrations, all of them when `limit` is `None`.
    fn down(&mut self, limit: Option<u64>) -> Result<(), EngineError>;

    /// Migrates up or down until the schema sits at exactly `version`.
    fn migrate_to(&mut self, version: u64) -> Result<(), EngineError>;

    /// Stamps `version` without running migrations, clearing any dirty state.
    /// A version of `-1` means "no version", as if nothing had been applied.
    fn force(&mut self, version: i64) -> Result<(), EngineError>;

    /// Drops everything inside the database.
    fn drop_all(&mut self) -> Result<(), EngineError>;

    /// Returns the current version and whether the database is dirty.
    fn version(&mut self) -> Result<(u64, bool), EngineError>;

    /// Number of migrations to load in advance while executing.
    fn set_prefetch(&mut self, count: u32);

    /// How long to wait for the database lock before giving up.
    fn set_lock_timeout(&mut self, timeout: Duration);

    /// Shared token the engine polls between migrations.
    fn stop_token(&self) -> StopToken;

    /// Releases the migration source and the database connection.
    fn close(&mut self) -> Result<(), EngineError>;
}
