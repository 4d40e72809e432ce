//! Table-grouped schema diff container.
//!
//! A [`MigrationResult`] is what a schema diff source hands back: SQL
//! statements grouped by the table they affect, split into the up side and
//! the down side of a migration pair. Groups are kept in a `BTreeMap` so the
//! emitted files have a deterministic table order from run to run.

use std::collections::BTreeMap;

/// Statements for one side of a migration, keyed by table name.
pub type StatementGroups = BTreeMap<String, Vec<String>>;

/// Schema diff split into up and down statement groups.
///
/// An empty result means the diff source found nothing to migrate; the
/// caller reports "no change" and writes no files.
///
/// # Example
///
/// ```rust
/// use migro::libs::result::MigrationResult;
///
/// let mut result = MigrationResult::new();
/// result.add_up("users", "CREATE TABLE users (id BIGINT PRIMARY KEY)");
/// result.add_down("users", "DROP TABLE users");
/// assert!(!result.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MigrationResult {
    up: StatementGroups,
    down: StatementGroups,
}

impl MigrationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a statement to the up side of the given table's group.
    pub fn add_up(&mut self, table: impl Into<String>, statement: impl Into<String>) {
        self.up.entry(table.into()).or_default().push(statement.into());
    }

    /// Appends a statement to the down side of the given table's group.
    pub fn add_down(&mut self, table: impl Into<String>, statement: impl Into<String>) {
        self.down.entry(table.into()).or_default().push(statement.into());
    }

    pub fn up(&self) -> &StatementGroups {
        &self.up
    }

    pub fn down(&self) -> &StatementGroups {
        &self.down
    }

    /// True when neither side carries any statement.
    pub fn is_empty(&self) -> bool {
        self.up.is_empty() && self.down.is_empty()
    }
}
