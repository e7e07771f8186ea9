//! TableRegistered event applier
//!
//! Initializes a fixed table's snapshot. The manager hands the applier a
//! blank snapshot for the event's tab ID; this stamps it.

use crate::tabs::traits::EventApplier;
use shared::tab::{EventPayload, TabEvent, TabKind, TabSnapshot};

/// TableRegistered applier
pub struct TableRegisteredApplier;

impl EventApplier for TableRegisteredApplier {
    fn apply(&self, snapshot: &mut TabSnapshot, event: &TabEvent) {
        if let EventPayload::TableRegistered {} = &event.payload {
            snapshot.kind = TabKind::Fixed;
            snapshot.created_at = event.timestamp;

            // Update sequence and timestamp
            snapshot.last_sequence = event.sequence;
            snapshot.updated_at = event.timestamp;

            // Update checksum
            snapshot.update_checksum();
        }
    }
}
