use super::{report_elapsed, run_engine};
use crate::engine::MigrationEngine;
use crate::libs::migrator::Migrator;
use anyhow::Result;
use clap::Args;
use std::time::Instant;

#[derive(Debug, Args)]
pub struct GotoArgs {
    /// Schema version to migrate to
    version: u64,
}

pub async fn cmd<E: MigrationEngine>(args: GotoArgs, migrator: &mut Migrator<E>) -> Result<()> {
    let started = Instant::now();
    run_engine(migrator.goto(args.version))?;
    report_elapsed(migrator, started);

    Ok(())
}
