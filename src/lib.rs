//! # Migro - Embeddable Database Migration CLI
//!
//! A command-line surface for database schema migrations. The crate owns the
//! thin parts of a migration workflow and delegates the hard parts to a
//! pluggable engine.
//!
//! ## Features
//!
//! - **Version Naming**: Timestamped or zero-padded sequential version identifiers
//! - **File Generation**: Up/down SQL file pairs rendered from a table-grouped diff
//! - **Collision Safety**: Duplicate version detection before anything is written
//! - **Engine Delegation**: Apply, rollback, goto, force, drop and version queries
//!   pass through to a [`engine::MigrationEngine`] implementation
//! - **Graceful Interrupt**: Ctrl+C requests a stop after the running migration
//! - **Confirmation Prompts**: Destructive operations ask before acting
//!
//! ## Usage
//!
//! The embedding application supplies the engine and the schema diff source,
//! then hands control to the command surface:
//!
//! ```rust,ignore
//! use migro::commands::Cli;
//! use migro::libs::migrator::Migrator;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let engine = MyEngine::connect("postgres://localhost/app")?;
//!     let mut migrator = Migrator::new(engine, "migrations", Box::new(my_schema_diff));
//!     Cli::menu(&mut migrator).await
//! }
//! ```

pub mod commands;
pub mod engine;
pub mod libs;
