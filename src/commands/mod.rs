//! Command surface for the migration CLI.
//!
//! Declares the clap command tree and dispatches each subcommand to its
//! module. The surface itself stays thin: flags are applied to the engine,
//! an interrupt listener is spawned, and every state change is delegated to
//! the migrator. The engine is closed after every command; close errors are
//! logged but never override the command's own outcome.

pub mod create;
pub mod down;
pub mod drop;
pub mod force;
pub mod goto;
pub mod up;
pub mod version;

use crate::engine::{EngineError, MigrationEngine, StopToken};
use crate::libs::messages::Message;
use crate::libs::migrator::Migrator;
use crate::{msg_error, msg_info, msg_warning};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Create a set of timestamped or sequential up/down migrations")]
    Create(create::CreateArgs),
    #[command(about = "Migrate to a specific schema version")]
    Goto(goto::GotoArgs),
    #[command(about = "Apply all or N up migrations")]
    Up(up::UpArgs),
    #[command(about = "Apply all or N down migrations")]
    Down(down::DownArgs),
    #[command(about = "Drop everything inside the database")]
    Drop(drop::DropArgs),
    #[command(about = "Set the schema version without running migrations (ignores dirty state)")]
    Force(force::ForceArgs),
    #[command(about = "Print the current migration version")]
    Version,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[arg(long, global = true, help = "Print verbose logging")]
    verbose: bool,
    #[arg(long, global = true, default_value_t = 10, help = "Number of migrations to load in advance before executing")]
    prefetch: u32,
    #[arg(long, global = true, default_value_t = 15, help = "Seconds allowed to acquire the database lock")]
    lock_timeout: u64,
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parses process arguments and runs the selected command.
    pub async fn menu<E: MigrationEngine>(migrator: &mut Migrator<E>) -> Result<()> {
        Self::parse().run(migrator).await
    }

    /// Runs an already parsed invocation against the migrator.
    pub async fn run<E: MigrationEngine>(self, migrator: &mut Migrator<E>) -> Result<()> {
        init_tracing();

        migrator.set_verbose(self.verbose);
        migrator.configure_engine(self.prefetch, self.lock_timeout);
        spawn_interrupt_listener(migrator.stop_token());

        let outcome = match self.command {
            Commands::Create(args) => create::cmd(args, migrator).await,
            Commands::Goto(args) => goto::cmd(args, migrator).await,
            Commands::Up(args) => up::cmd(args, migrator).await,
            Commands::Down(args) => down::cmd(args, migrator).await,
            Commands::Drop(args) => drop::cmd(args, migrator).await,
            Commands::Force(args) => force::cmd(args, migrator).await,
            Commands::Version => version::cmd(migrator).await,
        };

        if let Err(e) = migrator.close() {
            msg_error!(Message::EngineCloseFailed(e.to_string()));
        }

        outcome
    }
}

/// Installs a tracing subscriber when debug mode routes messages there.
fn init_tracing() {
    if crate::libs::messages::macros::is_debug_mode() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }
}

/// Requests a graceful engine stop on Ctrl+C.
fn spawn_interrupt_listener(stop: StopToken) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                msg_info!(Message::StoppingAfterCurrentMigration);
                stop.trigger();
            }
            Err(e) => {
                msg_warning!(Message::SignalListenerFailed(e.to_string()));
            }
        }
    });
}

/// Maps the engine's no-change sentinel to an informational outcome.
pub(crate) fn run_engine(result: std::result::Result<(), EngineError>) -> Result<()> {
    match result {
        Err(EngineError::NoChange) => {
            msg_info!(Message::NoChange);
            Ok(())
        }
        other => other.map_err(Into::into),
    }
}

/// Reports elapsed wall time when verbose logging is on.
pub(crate) fn report_elapsed<E: MigrationEngine>(migrator: &Migrator<E>, started: Instant) {
    if migrator.verbose() {
        msg_info!(Message::FinishedIn(started.elapsed().as_millis()));
    }
}
