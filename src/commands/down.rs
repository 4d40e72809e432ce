use super::{report_elapsed, run_engine};
use crate::engine::MigrationEngine;
use crate::libs::messages::Message;
use crate::libs::migrator::Migrator;
use crate::{msg_bail_anyhow, msg_info};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::time::Instant;

#[derive(Debug, Args)]
pub struct DownArgs {
    /// Number of down migrations to apply
    #[arg(conflicts_with = "all")]
    limit: Option<u64>,
    #[arg(long, help = "Apply all down migrations without asking")]
    all: bool,
}

pub async fn cmd<E: MigrationEngine>(args: DownArgs, migrator: &mut Migrator<E>) -> Result<()> {
    let limit = resolve_limit(&args)?;

    let started = Instant::now();
    run_engine(migrator.down(limit))?;
    report_elapsed(migrator, started);

    Ok(())
}

/// Turns the argument combination into a step limit.
///
/// A bare `down` reverts everything, which is destructive enough to warrant
/// an explicit confirmation first.
fn resolve_limit(args: &DownArgs) -> Result<Option<u64>> {
    if args.all {
        return Ok(None);
    }

    match args.limit {
        Some(limit) => Ok(Some(limit)),
        None => {
            let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::ConfirmApplyAllDown.to_string())
                .default(false)
                .interact()?;

            if !confirmed {
                msg_bail_anyhow!(Message::ApplyAllDownAborted);
            }

            msg_info!(Message::ApplyingAllDown);
            Ok(None)
        }
    }
}
