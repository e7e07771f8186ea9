//! Tab events - immutable facts recorded after command processing

use super::types::{OrderLine, TabKind};
use serde::{Deserialize, Serialize};

/// Tab event - immutable audit record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabEvent {
    /// Unique event id
    pub event_id: String,
    /// Global sequence number; replay order is defined by this alone
    pub sequence: u64,
    /// Tab this event belongs to
    pub tab_id: u32,
    /// Server-assigned Unix millis, set at commit
    pub timestamp: i64,
    /// Timestamp carried over from the originating command, kept for
    /// audit; may differ from server time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_timestamp: Option<i64>,
    /// Operator that issued the command
    pub operator_id: String,
    /// Operator display name captured at command time
    pub operator_name: String,
    /// Originating command id, links the event back to its command
    pub command_id: String,
    /// Discriminant mirrored out of the payload for cheap filtering
    pub event_type: TabEventType,
    /// Event payload
    pub payload: EventPayload,
}

/// Event type enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TabEventType {
    // Lifecycle
    TableRegistered,
    TabOpened,
    TabClosed,

    // Lines
    OrderPlaced,
    LineMarkedDone,
    LineRemoved,
}

impl std::fmt::Display for TabEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TabEventType::TableRegistered => write!(f, "TABLE_REGISTERED"),
            TabEventType::TabOpened => write!(f, "TAB_OPENED"),
            TabEventType::TabClosed => write!(f, "TAB_CLOSED"),
            TabEventType::OrderPlaced => write!(f, "ORDER_PLACED"),
            TabEventType::LineMarkedDone => write!(f, "LINE_MARKED_DONE"),
            TabEventType::LineRemoved => write!(f, "LINE_REMOVED"),
        }
    }
}

/// Event payload variants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventPayload {
    // ========== Lifecycle ==========
    TableRegistered {},

    TabOpened {
        customer_name: String,
    },

    TabClosed {
        /// Kind at close time (drives disposal: ad-hoc tabs are dropped)
        kind: TabKind,
        subtotal: f64,
        /// Final charged amount (service fee included when applied)
        amount: f64,
        with_service: bool,
    },

    // ========== Lines ==========
    OrderPlaced {
        /// Complete snapshots of the added lines
        lines: Vec<OrderLine>,
        /// Display label of the tab at order time (for notifications)
        tab_label: String,
    },

    LineMarkedDone {
        line_id: String,
        item_name: String,
    },

    LineRemoved {
        line_id: String,
        item_name: String,
    },
}

impl TabEvent {
    /// Create a new event with a fresh id and the server timestamp
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        sequence: u64,
        tab_id: u32,
        operator_id: String,
        operator_name: String,
        command_id: String,
        client_timestamp: Option<i64>,
        event_type: TabEventType,
        payload: EventPayload,
    ) -> Self {
        Self {
            event_id: uuid::Uuid::new_v4().to_string(),
            sequence,
            tab_id,
            timestamp: crate::util::now_millis(),
            client_timestamp,
            operator_id,
            operator_name,
            command_id,
            event_type,
            payload,
        }
    }

    /// Build an event carrying the command's operator and timestamp metadata
    pub fn from_command(
        sequence: u64,
        tab_id: u32,
        command: &super::TabCommand,
        event_type: TabEventType,
        payload: EventPayload,
    ) -> Self {
        Self::new(
            sequence,
            tab_id,
            command.operator_id.clone(),
            command.operator_name.clone(),
            command.command_id.clone(),
            Some(command.timestamp),
            event_type,
            payload,
        )
    }
}
