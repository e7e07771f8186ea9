//! OrderPlaced event applier
//!
//! Appends the ordered lines to the snapshot. Line data comes entirely
//! from the event payload, so replay is immune to later menu edits.

use crate::tabs::money;
use crate::tabs::traits::EventApplier;
use shared::tab::{EventPayload, TabEvent, TabSnapshot};

/// OrderPlaced applier
pub struct OrderPlacedApplier;

impl EventApplier for OrderPlacedApplier {
    fn apply(&self, snapshot: &mut TabSnapshot, event: &TabEvent) {
        if let EventPayload::OrderPlaced { lines, .. } = &event.payload {
            snapshot.lines.extend(lines.iter().cloned());

            // Update sequence and timestamp
            snapshot.last_sequence = event.sequence;
            snapshot.updated_at = event.timestamp;

            // Recalculate subtotal using precise decimal arithmetic
            money::recalculate_subtotal(snapshot);

            // Update checksum
            snapshot.update_checksum();
        }
    }
}
