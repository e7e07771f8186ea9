//! TabOpened event applier
//!
//! Initializes a walk-in tab's snapshot with the customer name.

use crate::tabs::traits::EventApplier;
use shared::tab::{EventPayload, TabEvent, TabKind, TabSnapshot};

/// TabOpened applier
pub struct TabOpenedApplier;

impl EventApplier for TabOpenedApplier {
    fn apply(&self, snapshot: &mut TabSnapshot, event: &TabEvent) {
        if let EventPayload::TabOpened { customer_name } = &event.payload {
            snapshot.kind = TabKind::AdHoc {
                customer_name: customer_name.clone(),
            };
            snapshot.created_at = event.timestamp;

            // Update sequence and timestamp
            snapshot.last_sequence = event.sequence;
            snapshot.updated_at = event.timestamp;

            // Update checksum
            snapshot.update_checksum();
        }
    }
}
