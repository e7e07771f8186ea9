//! Tab snapshot - computed state from event stream
//!
//! Each snapshot carries a `state_checksum` so a replica that folds the
//! same events can cheaply detect when its fold has diverged from the
//! server's.

use super::types::{LineStatus, OrderLine, TabKind};
use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// Tab snapshot - computed from event stream
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TabSnapshot {
    /// Tab ID (fixed table number or server-assigned walk-in ID)
    pub tab_id: u32,
    /// Fixed table or named walk-in tab
    pub kind: TabKind,
    /// Open order lines
    pub lines: Vec<OrderLine>,
    /// Sum of line prices
    pub subtotal: f64,
    /// When the tab was opened (Unix millis)
    pub created_at: i64,
    /// When the last event touched the tab (Unix millis)
    pub updated_at: i64,
    /// Sequence of the last event folded into this snapshot
    pub last_sequence: u64,
    /// Divergence checksum (hex string) over lines.len, subtotal,
    /// last_sequence and kind
    #[serde(default)]
    pub state_checksum: String,
}

impl TabSnapshot {
    /// Create a new empty tab
    pub fn new(tab_id: u32, kind: TabKind) -> Self {
        let now = crate::util::now_millis();
        let mut snapshot = Self {
            tab_id,
            kind,
            lines: Vec::new(),
            subtotal: 0.0,
            created_at: now,
            updated_at: now,
            last_sequence: 0,
            state_checksum: String::new(),
        };
        snapshot.update_checksum();
        snapshot
    }

    /// Human-readable label for receipts and notifications
    pub fn display_label(&self) -> String {
        self.kind.display_label(self.tab_id)
    }

    /// Whether the tab has no open lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines still waiting for preparation
    pub fn pending_lines(&self) -> impl Iterator<Item = &OrderLine> {
        self.lines.iter().filter(|l| l.status == LineStatus::Pending)
    }

    /// Checksum over the fields two correct folds must agree on
    ///
    /// 16-character hex string. The subtotal is hashed in cents so float
    /// formatting differences cannot affect it.
    pub fn compute_checksum(&self) -> String {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::Hasher as _;

        let mut hasher = DefaultHasher::new();
        self.lines.len().hash(&mut hasher);
        ((self.subtotal * 100.0).round() as i64).hash(&mut hasher);
        self.last_sequence.hash(&mut hasher);
        (self.kind.is_ad_hoc() as u8).hash(&mut hasher);

        format!("{:016x}", hasher.finish())
    }

    /// Refresh `state_checksum` from the current field values
    pub fn update_checksum(&mut self) {
        self.state_checksum = self.compute_checksum();
    }

    /// False when the stored checksum no longer matches the state
    pub fn verify_checksum(&self) -> bool {
        self.state_checksum == self.compute_checksum()
    }
}

impl Default for TabSnapshot {
    fn default() -> Self {
        Self::new(0, TabKind::Fixed)
    }
}
