//! Display implementation for migro application messages.
//!
//! Converts structured [`Message`] values into the exact text shown on the
//! terminal. Keeping every string here means a wording change never touches
//! command logic, and message parameters stay type-checked at the call site.
//!
//! Version output (`CurrentVersion`, `CurrentVersionDirty`) is intentionally
//! bare: scripts parse it, so no prefix or decoration is added.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            // === MIGRATION FILE MESSAGES ===
            Message::NoChange => "No change".to_string(),
            Message::MigrationFilesCreated(up, down) => {
                format!("Created migration files:\n   {}\n   {}", up, down)
            }
            Message::DuplicateMigrationVersion(version) => {
                format!("Duplicate migration version: {}", version)
            }

            // === ENGINE MESSAGES ===
            Message::StoppingAfterCurrentMigration => "Stopping after this running migration ...".to_string(),
            Message::EngineCloseFailed(e) => format!("Encountered an error while closing the migration engine: {}", e),
            Message::FinishedIn(ms) => format!("Finished after {} ms", ms),
            Message::CurrentVersion(version) => format!("{}", version),
            Message::CurrentVersionDirty(version) => format!("{} (dirty)", version),

            // === CONFIRMATION MESSAGES ===
            Message::ConfirmApplyAllDown => "Are you sure you want to apply all down migrations?".to_string(),
            Message::ApplyingAllDown => "Applying all down migrations".to_string(),
            Message::ApplyAllDownAborted => "Not applying all down migrations".to_string(),
            Message::ConfirmDropSchema => "Are you sure you want to drop the entire database schema?".to_string(),
            Message::DroppingSchema => "Dropping the entire database schema".to_string(),
            Message::DropSchemaAborted => "Aborted dropping the entire database schema".to_string(),

            // === VALIDATION MESSAGES ===
            Message::ForceVersionOutOfRange => "Version argument must be -1 or greater".to_string(),

            // === SIGNAL MESSAGES ===
            Message::SignalListenerFailed(e) => format!("Failed to listen for interrupt signal: {}", e),
        };
        write!(f, "{}", message)
    }
}
