//! Core library modules for the migro crate.
//!
//! ## Features
//!
//! - **Version Naming**: Sequential and time-based version identifiers
//! - **Diff Container**: Table-grouped up/down statement sets
//! - **File Emission**: Collision-checked migration pair writing
//! - **Orchestration**: The migrator tying engine, directory and diff together
//! - **Messaging**: Centralized user-facing output

pub mod messages;
pub mod migrator;
pub mod result;
pub mod version;
pub mod writer;
