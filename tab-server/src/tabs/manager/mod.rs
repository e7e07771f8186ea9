//! TabManager - command processing and event generation
//!
//! Owns the full lifecycle of a command: validation, event emission with
//! global sequence numbers, snapshot folds, settlement bookkeeping, one
//! redb transaction per command, and the post-commit broadcast.
//!
//! # Command Flow
//!
//! ```text
//! execute_command(cmd)
//!     ├─ 1. Dedup check on command_id
//!     ├─ 2. Open write transaction
//!     ├─ 3. Build CommandContext
//!     ├─ 4. Dispatch to the matching action, collect events
//!     ├─ 5. Fold events into snapshots
//!     ├─ 6. Record settlements, drop closed walk-in tabs
//!     ├─ 7. Persist events and snapshots
//!     ├─ 8. Mark command processed
//!     ├─ 9. Commit
//!     ├─ 10. Broadcast event(s)
//!     └─ 11. Respond
//! ```

mod error;
pub use error::*;

use super::actions::CommandAction;
use super::appliers::EventAction;
use super::ledger;
use super::money;
use super::queue::{self, PendingDish};
use super::storage::{StorageError, TabStorage};
use super::traits::{CommandContext, CommandHandler, CommandMetadata, EventApplier};
use shared::models::{DailyStats, LedgerEntry};
use shared::tab::{
    BillTotals, CommandResponse, EventPayload, LineGroup, TabCommand, TabEvent, TabKind,
    TabSnapshot,
};
use std::collections::HashSet;
use std::path::Path;
use tokio::sync::broadcast;

/// Event broadcast channel capacity (handles bursts: full floor x several events per tab)
const EVENT_CHANNEL_CAPACITY: usize = 65536;

/// TabManager for command processing
///
/// `epoch` is regenerated on every startup; a subscriber that sees a new
/// epoch knows its incremental state is stale and must resync from zero.
pub struct TabManager {
    storage: TabStorage,
    event_tx: broadcast::Sender<TabEvent>,
    /// Instance id, fresh per process
    epoch: String,
}

impl std::fmt::Debug for TabManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabManager")
            .field("storage", &"<TabStorage>")
            .field("event_tx", &"<broadcast::Sender>")
            .field("epoch", &self.epoch)
            .finish()
    }
}

impl TabManager {
    /// Create a new TabManager with the given database path
    pub fn new(db_path: impl AsRef<Path>) -> ManagerResult<Self> {
        let storage = TabStorage::open(db_path)?;
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        let epoch = uuid::Uuid::new_v4().to_string();
        tracing::info!(epoch = %epoch, "TabManager started with new epoch");
        Ok(Self {
            storage,
            event_tx,
            epoch,
        })
    }

    /// Create a TabManager with existing storage (for testing)
    #[cfg(test)]
    pub fn with_storage(storage: TabStorage) -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        let epoch = uuid::Uuid::new_v4().to_string();
        Self {
            storage,
            event_tx,
            epoch,
        }
    }

    /// Epoch of this server instance
    pub fn epoch(&self) -> &str {
        &self.epoch
    }

    /// Subscribe to event broadcasts
    pub fn subscribe(&self) -> broadcast::Receiver<TabEvent> {
        self.event_tx.subscribe()
    }

    /// Get the underlying storage
    pub fn storage(&self) -> &TabStorage {
        &self.storage
    }

    /// Execute a command and return the response
    pub fn execute_command(&self, cmd: TabCommand) -> CommandResponse {
        match self.process_command(cmd.clone()) {
            Ok((response, events)) => {
                // Fan out only after the commit succeeded
                for event in events {
                    if self.event_tx.send(event).is_err() {
                        tracing::warn!("Event broadcast skipped: no subscribers");
                        break;
                    }
                }
                response
            }
            Err(err) => CommandResponse::error(cmd.command_id, err.into()),
        }
    }

    /// Execute a command and return both the response and generated events
    ///
    /// Unlike `execute_command`, this returns the events to the caller while
    /// still broadcasting them internally.
    pub fn execute_command_with_events(
        &self,
        cmd: TabCommand,
    ) -> (CommandResponse, Vec<TabEvent>) {
        match self.process_command(cmd.clone()) {
            Ok((response, events)) => {
                // Fan out only after the commit succeeded
                for event in &events {
                    if self.event_tx.send(event.clone()).is_err() {
                        tracing::warn!("Event broadcast skipped: no subscribers");
                        break;
                    }
                }
                (response, events)
            }
            Err(err) => (CommandResponse::error(cmd.command_id, err.into()), vec![]),
        }
    }

    /// Process a command and return the response with generated events
    ///
    /// The command becomes a [`CommandAction`], the action emits events,
    /// the events are folded into snapshots, and everything lands in one
    /// write transaction.
    fn process_command(
        &self,
        cmd: TabCommand,
    ) -> ManagerResult<(CommandResponse, Vec<TabEvent>)> {
        tracing::debug!(command_id = %cmd.command_id, payload = ?cmd.payload, "Processing command");

        // 1. Idempotency fast path, no transaction yet
        if self.storage.is_command_processed(&cmd.command_id)? {
            tracing::warn!(command_id = %cmd.command_id, "Duplicate command");
            return Ok((CommandResponse::duplicate(cmd.command_id), vec![]));
        }

        // 2. Open the write transaction
        let txn = self.storage.begin_write()?;

        // Re-check under the transaction; the fast path raced
        if self
            .storage
            .is_command_processed_txn(&txn, &cmd.command_id)?
        {
            return Ok((CommandResponse::duplicate(cmd.command_id), vec![]));
        }

        // 3. Read the sequence the context allocates from
        let current_sequence = self.storage.get_current_sequence_txn(&txn)?;

        // 4. Build the context and command metadata
        let mut ctx = CommandContext::new(&txn, &self.storage, current_sequence);
        let metadata = CommandMetadata {
            command_id: cmd.command_id.clone(),
            operator_id: cmd.operator_id.clone(),
            operator_name: cmd.operator_name.clone(),
            timestamp: cmd.timestamp,
        };

        // 5. Dispatch to the action
        let action: CommandAction = (&cmd).into();
        let events = futures::executor::block_on(action.execute(&mut ctx, &metadata))
            .map_err(ManagerError::from)?;

        // 6. Fold events into snapshots
        for event in &events {
            // Load or create snapshot for this tab; creation events
            // overwrite the placeholder kind
            let mut snapshot = match ctx.find_snapshot(event.tab_id).map_err(ManagerError::from)? {
                Some(snapshot) => snapshot,
                None => TabSnapshot::new(event.tab_id, TabKind::Fixed),
            };

            let applier: EventAction = event.into();
            applier.apply(&mut snapshot, event);
            ctx.save_snapshot(snapshot);
        }

        // 7. Record settlements and drop closed walk-in tabs
        //
        // Fixed tables survive a close with cleared lines; walk-in tabs
        // disappear entirely. The ledger entry is written in the same
        // transaction so revenue and tab state never diverge.
        let mut dropped: HashSet<u32> = HashSet::new();
        for event in &events {
            if let EventPayload::TabClosed {
                kind,
                amount,
                with_service,
                ..
            } = &event.payload
            {
                let entry = LedgerEntry {
                    tab_id: event.tab_id,
                    amount: *amount,
                    timestamp: event.timestamp,
                    with_service: *with_service,
                };
                self.storage.append_ledger_entry(&txn, event.sequence, &entry)?;

                if kind.is_ad_hoc() {
                    self.storage.remove_snapshot(&txn, event.tab_id)?;
                    dropped.insert(event.tab_id);
                }
            }
        }

        // 8. Persist events
        for event in &events {
            self.storage.store_event(&txn, event)?;
        }

        // 9. Persist surviving snapshots
        for snapshot in ctx.touched_snapshots() {
            if dropped.contains(&snapshot.tab_id) {
                continue;
            }
            self.storage.store_snapshot(&txn, snapshot)?;
        }

        // 10. Update sequence counter
        let max_sequence = events
            .iter()
            .map(|e| e.sequence)
            .max()
            .unwrap_or(current_sequence);
        if max_sequence > current_sequence {
            self.storage.set_sequence(&txn, max_sequence)?;
        }

        // 11. Mark command processed
        self.storage.mark_command_processed(&txn, &cmd.command_id)?;

        // 12. Commit transaction
        txn.commit().map_err(StorageError::from)?;

        // 13. Respond
        let tab_id = events.first().map(|e| e.tab_id);
        tracing::info!(command_id = %cmd.command_id, tab_id = ?tab_id, event_count = events.len(), "Command processed successfully");
        Ok((CommandResponse::success(cmd.command_id, tab_id), events))
    }

    // ========== Public Query Methods ==========

    /// Get a snapshot by tab ID
    pub fn get_snapshot(&self, tab_id: u32) -> ManagerResult<Option<TabSnapshot>> {
        Ok(self.storage.get_snapshot(tab_id)?)
    }

    /// Get all live tabs (idle fixed tables included), ordered by tab ID
    pub fn get_all_tabs(&self) -> ManagerResult<Vec<TabSnapshot>> {
        let mut tabs = self.storage.get_all_snapshots()?;
        tabs.sort_by_key(|t| t.tab_id);
        Ok(tabs)
    }

    /// Get tabs that currently hold at least one order line, ordered by tab ID
    pub fn get_open_tabs(&self) -> ManagerResult<Vec<TabSnapshot>> {
        let mut tabs = self.storage.get_all_snapshots()?;
        tabs.retain(|t| !t.is_empty());
        tabs.sort_by_key(|t| t.tab_id);
        Ok(tabs)
    }

    /// Bill preview for one tab
    ///
    /// The preview always shows the service charge; whether it is actually
    /// collected is decided at close time.
    pub fn compute_totals(&self, tab_id: u32) -> ManagerResult<BillTotals> {
        let snapshot = self
            .storage
            .get_snapshot(tab_id)?
            .ok_or(ManagerError::TabNotFound(tab_id))?;
        Ok(money::compute_totals(snapshot.subtotal, true))
    }

    /// Bill view with lines grouped by item name
    pub fn grouped_lines(&self, tab_id: u32) -> ManagerResult<Vec<LineGroup>> {
        let snapshot = self
            .storage
            .get_snapshot(tab_id)?
            .ok_or(ManagerError::TabNotFound(tab_id))?;
        Ok(queue::grouped_lines(&snapshot))
    }

    /// Pending kitchen dishes across all tabs, oldest order first
    pub fn pending_dishes(&self) -> ManagerResult<Vec<PendingDish>> {
        let tabs = self.storage.get_all_snapshots()?;
        Ok(queue::pending_dishes(&tabs))
    }

    /// Count of kitchen dishes already served
    pub fn completed_dish_count(&self) -> ManagerResult<usize> {
        let tabs = self.storage.get_all_snapshots()?;
        Ok(queue::completed_dish_count(&tabs))
    }

    /// Daily revenue figures folded from the settlement ledger
    pub fn daily_stats(&self) -> ManagerResult<DailyStats> {
        let history = self.storage.get_ledger_entries()?;
        Ok(ledger::compute_stats(history))
    }

    /// Clear the settlement ledger, returning the number of entries removed
    pub fn reset_daily_stats(&self) -> ManagerResult<u64> {
        let removed = self.storage.clear_ledger()?;
        tracing::info!(removed, "Daily ledger reset");
        Ok(removed)
    }

    /// Get current sequence number
    pub fn get_current_sequence(&self) -> ManagerResult<u64> {
        Ok(self.storage.get_current_sequence()?)
    }

    /// Get events since a given sequence
    pub fn get_events_since(&self, since_sequence: u64) -> ManagerResult<Vec<TabEvent>> {
        Ok(self.storage.get_events_since(since_sequence)?)
    }

    /// Get all events for a specific tab
    pub fn get_events_for_tab(&self, tab_id: u32) -> ManagerResult<Vec<TabEvent>> {
        Ok(self.storage.get_events_for_tab(tab_id)?)
    }

    /// Replay a tab's event stream into a fresh snapshot
    ///
    /// The result must match the stored snapshot; a mismatch means the
    /// fold logic drifted between versions.
    pub fn rebuild_snapshot(&self, tab_id: u32) -> ManagerResult<TabSnapshot> {
        let events = self.storage.get_events_for_tab(tab_id)?;
        if events.is_empty() {
            return Err(ManagerError::TabNotFound(tab_id));
        }

        let mut snapshot = TabSnapshot::new(tab_id, TabKind::Fixed);
        for event in &events {
            let applier: EventAction = event.into();
            applier.apply(&mut snapshot, event);
        }

        Ok(snapshot)
    }
}

// Make TabManager Clone-able via Arc
impl Clone for TabManager {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            event_tx: self.event_tx.clone(),
            epoch: self.epoch.clone(),
        }
    }
}

#[cfg(test)]
mod tests;
