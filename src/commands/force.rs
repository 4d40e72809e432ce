use super::report_elapsed;
use crate::engine::MigrationEngine;
use crate::libs::messages::Message;
use crate::libs::migrator::Migrator;
use crate::msg_bail_anyhow;
use anyhow::Result;
use clap::Args;
use std::time::Instant;

#[derive(Debug, Args)]
pub struct ForceArgs {
    /// Version to stamp; -1 means no version, as if nothing had been applied
    #[arg(allow_hyphen_values = true)]
    version: i64,
}

pub async fn cmd<E: MigrationEngine>(args: ForceArgs, migrator: &mut Migrator<E>) -> Result<()> {
    if args.version < -1 {
        msg_bail_anyhow!(Message::ForceVersionOutOfRange);
    }

    let started = Instant::now();
    migrator.force(args.version)?;
    report_elapsed(migrator, started);

    Ok(())
}
