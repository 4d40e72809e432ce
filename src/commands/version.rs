use crate::engine::MigrationEngine;
use crate::libs::messages::Message;
use crate::libs::migrator::Migrator;
use crate::msg_print;
use anyhow::Result;

pub async fn cmd<E: MigrationEngine>(migrator: &mut Migrator<E>) -> Result<()> {
    let (version, dirty) = migrator.version()?;

    if dirty {
        msg_print!(Message::CurrentVersionDirty(version));
    } else {
        msg_print!(Message::CurrentVersion(version));
    }

    Ok(())
}
