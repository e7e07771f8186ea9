//! Tab Event Sourcing Module
//!
//! Wire types for the tab event sourcing system:
//! - Commands: operator requests to change a tab
//! - Events: immutable facts a processed command left behind
//! - Snapshots: tab state folded from the event stream

pub mod command;
pub mod event;
pub mod snapshot;
pub mod types;

// Re-exports
pub use command::{TabCommand, TabCommandPayload};
pub use event::{EventPayload, TabEvent, TabEventType};
pub use snapshot::TabSnapshot;
pub use types::*;
