//! TabClosed event applier
//!
//! Empties the snapshot after settlement. Fixed tables stay registered
//! (idle, ready for the next seating); the manager drops walk-in
//! snapshots entirely after this applier runs.

use crate::tabs::traits::EventApplier;
use shared::tab::{EventPayload, TabEvent, TabSnapshot};

/// TabClosed applier
pub struct TabClosedApplier;

impl EventApplier for TabClosedApplier {
    fn apply(&self, snapshot: &mut TabSnapshot, event: &TabEvent) {
        if let EventPayload::TabClosed { .. } = &event.payload {
            snapshot.lines.clear();
            snapshot.subtotal = 0.0;

            // Update sequence and timestamp
            snapshot.last_sequence = event.sequence;
            snapshot.updated_at = event.timestamp;

            // Update checksum
            snapshot.update_checksum();
        }
    }
}
