//! Tab commands - operator requests to mutate tab state

use super::types::OrderLineInput;
use serde::{Deserialize, Serialize};

/// Tab command envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabCommand {
    /// Unique command ID, used for idempotent processing
    pub command_id: String,
    /// Operator who issued the command
    pub operator_id: String,
    /// Operator display name captured at issue time
    pub operator_name: String,
    /// Client timestamp (Unix milliseconds)
    pub timestamp: i64,
    /// Command payload
    pub payload: TabCommandPayload,
}

/// Command payload variants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TabCommandPayload {
    /// Register a fixed floor-plan table
    ///
    /// Idempotent: re-registering an existing table is a no-op.
    RegisterTable { table_id: u32 },

    /// Open a named walk-in tab
    OpenTab { customer_name: String },

    /// Add units of a menu item to a tab
    PlaceOrder {
        tab_id: u32,
        item: OrderLineInput,
        quantity: i32,
    },

    /// Mark one order line as prepared
    MarkLineDone { tab_id: u32, line_id: String },

    /// Remove one order line
    RemoveLine { tab_id: u32, line_id: String },

    /// Settle a tab and clear it
    CloseTab { tab_id: u32, with_service: bool },
}

impl TabCommand {
    /// Create a command with a fresh ID and the current client time
    pub fn new(
        operator_id: impl Into<String>,
        operator_name: impl Into<String>,
        payload: TabCommandPayload,
    ) -> Self {
        Self {
            command_id: uuid::Uuid::new_v4().to_string(),
            operator_id: operator_id.into(),
            operator_name: operator_name.into(),
            timestamp: crate::util::now_millis(),
            payload,
        }
    }
}
