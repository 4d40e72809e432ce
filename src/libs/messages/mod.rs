//! Centralized user-facing messaging for the migration CLI.
//!
//! All console output flows through the [`Message`] enum and the `msg_*`
//! macros, keeping wording in one place and routing output either to plain
//! console printing or to `tracing` when debug mode is active.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
