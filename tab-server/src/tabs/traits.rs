//! Core traits for the command pipeline
//!
//! Commands are validated by `CommandHandler` implementations which emit
//! events; events are folded into snapshots by `EventApplier`
//! implementations. Appliers are pure so replaying the stored stream
//! reproduces the exact same state.

use crate::tabs::appliers::{
    EventAction, LineMarkedDoneApplier, LineRemovedApplier, OrderPlacedApplier, TabClosedApplier,
    TabOpenedApplier, TableRegisteredApplier,
};
use crate::tabs::storage::{StorageError, TabStorage};
use async_trait::async_trait;
use enum_dispatch::enum_dispatch;
use redb::WriteTransaction;
use shared::tab::{TabEvent, TabSnapshot};
use std::collections::HashMap;
use thiserror::Error;

/// Domain errors raised while handling a command
#[derive(Debug, Error)]
pub enum TabError {
    #[error("Tab not found: {0}")]
    TabNotFound(u32),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type TabResult<T> = Result<T, TabError>;

/// Metadata extracted from the command envelope
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    pub command_id: String,
    pub operator_id: String,
    pub operator_name: String,
    /// Client timestamp (Unix milliseconds)
    pub timestamp: i64,
}

/// Command handler - validates a command against current state and emits events
///
/// Handlers never mutate snapshots directly; every state change flows
/// through an applier so replay stays authoritative.
#[async_trait]
pub trait CommandHandler {
    async fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> TabResult<Vec<TabEvent>>;
}

/// Event applier - pure state transition for one event type
#[enum_dispatch]
pub trait EventApplier {
    fn apply(&self, snapshot: &mut TabSnapshot, event: &TabEvent);
}

/// Command execution context
///
/// Wraps the open write transaction so handlers observe uncommitted state,
/// allocates event sequence numbers, and caches every snapshot touched
/// while the command runs. The manager persists the cached snapshots at
/// commit time.
pub struct CommandContext<'a> {
    txn: &'a WriteTransaction,
    storage: &'a TabStorage,
    /// Highest sequence number consumed so far
    sequence: u64,
    snapshots: HashMap<u32, TabSnapshot>,
}

impl<'a> CommandContext<'a> {
    pub fn new(txn: &'a WriteTransaction, storage: &'a TabStorage, current_sequence: u64) -> Self {
        Self {
            txn,
            storage,
            sequence: current_sequence,
            snapshots: HashMap::new(),
        }
    }

    /// Allocate the next event sequence number
    pub fn next_sequence(&mut self) -> u64 {
        self.sequence += 1;
        self.sequence
    }

    /// Highest sequence number consumed by this command
    pub fn current_sequence(&self) -> u64 {
        self.sequence
    }

    /// Load a snapshot, preferring ones already touched by this command
    pub fn load_snapshot(&mut self, tab_id: u32) -> TabResult<TabSnapshot> {
        self.find_snapshot(tab_id)?
            .ok_or(TabError::TabNotFound(tab_id))
    }

    /// Load a snapshot if it exists, without treating absence as an error
    pub fn find_snapshot(&mut self, tab_id: u32) -> TabResult<Option<TabSnapshot>> {
        if let Some(snapshot) = self.snapshots.get(&tab_id) {
            return Ok(Some(snapshot.clone()));
        }
        match self.storage.get_snapshot_txn(self.txn, tab_id)? {
            Some(snapshot) => {
                self.snapshots.insert(tab_id, snapshot.clone());
                Ok(Some(snapshot))
            }
            None => Ok(None),
        }
    }

    /// Stage a snapshot so later events in the same command observe it
    pub fn save_snapshot(&mut self, snapshot: TabSnapshot) {
        self.snapshots.insert(snapshot.tab_id, snapshot);
    }

    /// Snapshots touched by this command, persisted by the manager at commit
    pub fn touched_snapshots(&self) -> impl Iterator<Item = &TabSnapshot> {
        self.snapshots.values()
    }

    /// Allocate a walk-in tab ID above the reserved range and every live tab
    pub fn allocate_ad_hoc_tab_id(&mut self, reserved_max: u32) -> TabResult<u32> {
        let floor = self.storage.max_tab_id_txn(self.txn)?.max(reserved_max);
        Ok(self.storage.next_ad_hoc_tab_id(self.txn, floor)?)
    }
}
