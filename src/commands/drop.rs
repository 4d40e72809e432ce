use super::report_elapsed;
use crate::engine::MigrationEngine;
use crate::libs::messages::Message;
use crate::libs::migrator::Migrator;
use crate::{msg_bail_anyhow, msg_info};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::time::Instant;

#[derive(Debug, Args)]
pub struct DropArgs {
    #[arg(short, long, help = "Bypass the confirmation prompt")]
    force: bool,
}

pub async fn cmd<E: MigrationEngine>(args: DropArgs, migrator: &mut Migrator<E>) -> Result<()> {
    if !args.force {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDropSchema.to_string())
            .default(false)
            .interact()?;

        if !confirmed {
            msg_bail_anyhow!(Message::DropSchemaAborted);
        }

        msg_info!(Message::DroppingSchema);
    }

    let started = Instant::now();
    migrator.drop_all()?;
    report_elapsed(migrator, started);

    Ok(())
}
