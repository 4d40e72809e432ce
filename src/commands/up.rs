use super::{report_elapsed, run_engine};
use crate::engine::MigrationEngine;
use crate::libs::migrator::Migrator;
use anyhow::Result;
use clap::Args;
use std::time::Instant;

#[derive(Debug, Args)]
pub struct UpArgs {
    /// Number of up migrations to apply (all when omitted)
    limit: Option<u64>,
}

pub async fn cmd<E: MigrationEngine>(args: UpArgs, migrator: &mut Migrator<E>) -> Result<()> {
    let started = Instant::now();
    run_engine(migrator.up(args.limit))?;
    report_elapsed(migrator, started);

    Ok(())
}
