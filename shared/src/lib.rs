//! Shared types for the tab engine
//!
//! Common types used across crates: menu catalog models, the tab
//! event sourcing types (commands, events, snapshots) and billing
//! ledger records.

pub mod models;
pub mod tab;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
