//! LineMarkedDone event applier
//!
//! Flips one line from pending to done. The bill is unchanged.

use crate::tabs::traits::EventApplier;
use shared::tab::{EventPayload, LineStatus, TabEvent, TabSnapshot};

/// LineMarkedDone applier
pub struct LineMarkedDoneApplier;

impl EventApplier for LineMarkedDoneApplier {
    fn apply(&self, snapshot: &mut TabSnapshot, event: &TabEvent) {
        if let EventPayload::LineMarkedDone { line_id, .. } = &event.payload {
            if let Some(line) = snapshot.lines.iter_mut().find(|l| l.line_id == *line_id) {
                line.status = LineStatus::Done;
            }

            // Update sequence and timestamp
            snapshot.last_sequence = event.sequence;
            snapshot.updated_at = event.timestamp;

            // Update checksum
            snapshot.update_checksum();
        }
    }
}
