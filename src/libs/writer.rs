//! Migration file pair emission.
//!
//! Turns a [`MigrationResult`] into the two text files of a migration pair,
//! `<version>_<name>.up<ext>` and `<version>_<name>.down<ext>`. Each table
//! group is rendered under a `--<table>` comment header with one terminated
//! statement per line:
//!
//! ```text
//! --users
//! CREATE TABLE users (id BIGINT PRIMARY KEY);
//! CREATE INDEX idx_users_id ON users(id);
//! ```
//!
//! The duplicate-version scan runs before either file is touched, so a
//! collision never leaves a half-written pair behind.

use crate::libs::messages::Message;
use crate::libs::result::{MigrationResult, StatementGroups};
use crate::msg_error_anyhow;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Normalizes a user-supplied extension to exactly one leading dot.
///
/// An unset or empty extension falls back to `.sql`.
pub fn normalize_extension(ext: Option<&str>) -> String {
    match ext {
        None | Some("") => ".sql".to_string(),
        Some(ext) => format!(".{}", ext.strip_prefix('.').unwrap_or(ext)),
    }
}

/// Resolves the up/down file paths for a new pair, rejecting version collisions.
///
/// Any existing file matching `<version>_*<ext>` in the migrations directory
/// makes the version a duplicate, regardless of its name part.
pub fn migration_pair_paths(migrations_dir: &Path, version: &str, name: &str, ext: &str) -> Result<(PathBuf, PathBuf)> {
    let collision_pattern = migrations_dir.join(format!("{}_*{}", version, ext));
    let collisions: Vec<_> = glob::glob(&collision_pattern.to_string_lossy())
        .context("invalid migrations path pattern")?
        .filter_map(std::result::Result::ok)
        .collect();

    if !collisions.is_empty() {
        return Err(msg_error_anyhow!(Message::DuplicateMigrationVersion(version.to_string())));
    }

    let up = migrations_dir.join(format!("{}_{}.up{}", version, name, ext));
    let down = migrations_dir.join(format!("{}_{}.down{}", version, name, ext));

    Ok((up, down))
}

/// Writes both files of the pair from the diff result.
pub fn write_pair(up_path: &Path, down_path: &Path, result: &MigrationResult) -> Result<()> {
    fs::write(up_path, render_side(result.up())).with_context(|| format!("failed to write {}", up_path.display()))?;
    fs::write(down_path, render_side(result.down())).with_context(|| format!("failed to write {}", down_path.display()))?;

    Ok(())
}

fn render_side(groups: &StatementGroups) -> String {
    let mut buffer = String::new();

    for (table, statements) in groups {
        buffer.push_str(&format!("--{}\n", table));
        for sql in statements {
            buffer.push_str(&format!("{};\n", sql));
        }
    }

    buffer
}
