use crate::engine::MigrationEngine;
use crate::libs::messages::Message;
use crate::libs::migrator::{MigrationOptions, Migrator};
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Title for the new migration file pair
    name: String,
    #[arg(long, help = "File extension for the generated pair (default: sql)")]
    ext: Option<String>,
    #[arg(long, help = "Use sequential numbers instead of timestamps", conflicts_with_all = ["format", "tz"])]
    seq: bool,
    #[arg(long, default_value_t = 6, help = "The number of digits to use in sequences")]
    digits: usize,
    #[arg(long, help = "Time pattern for the version, or 'unix' / 'unixNano' for epoch values")]
    format: Option<String>,
    #[arg(long, help = "Timezone used when formatting timestamped versions (default: local)")]
    tz: Option<String>,
}

pub async fn cmd<E: MigrationEngine>(args: CreateArgs, migrator: &mut Migrator<E>) -> Result<()> {
    let options = MigrationOptions {
        name: args.name,
        ext: args.ext,
        sequential: args.seq,
        digits: args.digits,
        format: args.format,
        timezone: args.tz,
    };

    match migrator.make_migration(&options)? {
        Some((up, down)) => {
            msg_success!(Message::MigrationFilesCreated(up.display().to_string(), down.display().to_string()));
        }
        None => {
            msg_info!(Message::NoChange);
        }
    }

    Ok(())
}
