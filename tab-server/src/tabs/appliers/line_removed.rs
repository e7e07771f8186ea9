//! LineRemoved event applier
//!
//! Drops one line from the snapshot and recomputes the bill.

use crate::tabs::money;
use crate::tabs::traits::EventApplier;
use shared::tab::{EventPayload, TabEvent, TabSnapshot};

/// LineRemoved applier
pub struct LineRemovedApplier;

impl EventApplier for LineRemovedApplier {
    fn apply(&self, snapshot: &mut TabSnapshot, event: &TabEvent) {
        if let EventPayload::LineRemoved { line_id, .. } = &event.payload {
            snapshot.lines.retain(|l| l.line_id != *line_id);

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
