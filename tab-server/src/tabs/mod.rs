//! Tab Event Sourcing Module
//!
//! This module implements tab lifecycle management using event sourcing:
//!
//! - **manager**: Core TabManager for command processing and event generation
//! - **storage**: redb-based persistence layer for events, snapshots, menu and ledger
//! - **queue**: Kitchen queue and bill-view projections
//! - **ledger**: Daily revenue aggregation
//! - **money**: Decimal money arithmetic and input validation
//!
//! # Architecture
//!
//! ```text
//! Command → TabManager → Event → Storage (redb)
//!               ↓                     ↓
//!            Broadcast         Snapshot Update
//!               ↓
//!         All Subscribers
//! ```
//!
//! # Data Flow
//!
//! 1. Caller submits a TabCommand
//! 2. TabManager validates and processes the command
//! 3. TabEvents are generated with global sequence numbers
//! 4. Events are persisted to redb (transactional)
//! 5. Snapshots and the settlement ledger are updated in the same transaction
//! 6. Events are broadcast to all subscribers
//! 7. CommandResponse is returned to the caller

pub mod actions;
pub mod appliers;
pub mod ledger;
pub mod manager;
pub mod money;
pub mod queue;
pub mod storage;
pub mod traits;

// Re-exports
pub use manager::{ManagerError, ManagerResult, TabManager};
pub use queue::PendingDish;
pub use storage::TabStorage;

// Re-export shared types for convenience
pub use shared::tab::{
    CommandError, CommandErrorCode, CommandResponse, EventPayload, TabCommand, TabCommandPayload,
    TabEvent, TabEventType, TabSnapshot,
};
