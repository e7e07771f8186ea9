//! Data models
//!
//! Shared between the engine and its clients.

pub mod daily_stats;
pub mod menu_item;

// Re-exports
pub use daily_stats::*;
pub use menu_item::*;
