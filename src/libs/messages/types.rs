//! Message type definitions for all user-facing CLI output.
//!
//! Every string the CLI shows to a user is a variant here, rendered by the
//! `Display` implementation in [`super::display`]. Variants carry typed
//! parameters instead of preformatted text so call sites stay free of
//! wording decisions.

#[derive(Debug, Clone)]
pub enum Message {
    // === MIGRATION FILE MESSAGES ===
    NoChange,
    MigrationFilesCreated(String, String), // up path, down path
    DuplicateMigrationVersion(String),     // version

    // === ENGINE MESSAGES ===
    StoppingAfterCurrentMigration,
    EngineCloseFailed(String), // error
    FinishedIn(u128),          // milliseconds
    CurrentVersion(u64),
    CurrentVersionDirty(u64),

    // === CONFIRMATION MESSAGES ===
    ConfirmApplyAllDown,
    ApplyingAllDown,
    ApplyAllDownAborted,
    ConfirmDropSchema,
    DroppingSchema,
    DropSchemaAborted,

    // === VALIDATION MESSAGES ===
    ForceVersionOutOfRange,

    // === SIGNAL MESSAGES ===
    SignalListenerFailed(String), // error
}
