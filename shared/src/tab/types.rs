//! Shared types for tab event sourcing

use serde::{Deserialize, Serialize};

// ============================================================================
// Order Lines
// ============================================================================

/// Preparation status of one order line
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineStatus {
    #[default]
    Pending,
    Done,
}

/// Order line snapshot - complete snapshot for event recording
///
/// One line is one unit of a menu item. Ordering N units emits N lines,
/// each individually trackable by the kitchen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    /// Line instance ID (server-assigned, stable across reorderings)
    pub line_id: String,
    /// Menu item this line was created from
    pub menu_item_id: String,
    /// Item name (snapshot, immune to later catalog edits)
    pub name: String,
    /// Unit price (snapshot, immune to later catalog edits)
    pub price: f64,
    /// Category label (snapshot, drives routing)
    pub category: String,
    /// Preparation status
    pub status: LineStatus,
    /// When the line was ordered (Unix millis, server clock)
    pub ordered_at: i64,
}

impl OrderLine {
    pub fn is_pending(&self) -> bool {
        self.status == LineStatus::Pending
    }

    pub fn is_done(&self) -> bool {
        self.status == LineStatus::Done
    }
}

/// Order line input - for placing orders (without line_id)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLineInput {
    /// Menu item ID
    pub menu_item_id: String,
    /// Item name
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Category label
    pub category: String,
}

// ============================================================================
// Tab Kind
// ============================================================================

/// Highest tab ID reserved for fixed floor-plan tables
///
/// Walk-in tabs are always allocated above this range.
pub const FIXED_TABLE_MAX: u32 = 100;

/// How a tab came to exist
///
/// Fixed tabs are the numbered floor-plan tables registered at startup.
/// Ad-hoc tabs are opened on demand for a named walk-in customer and are
/// discarded once settled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TabKind {
    #[default]
    Fixed,
    AdHoc { customer_name: String },
}

impl TabKind {
    /// Human-readable label for receipts and notifications
    pub fn display_label(&self, tab_id: u32) -> String {
        match self {
            TabKind::Fixed => format!("Table {tab_id}"),
            TabKind::AdHoc { customer_name } => customer_name.clone(),
        }
    }

    pub fn is_ad_hoc(&self) -> bool {
        matches!(self, TabKind::AdHoc { .. })
    }
}

// ============================================================================
// Routing
// ============================================================================

/// Category whose items are prepared by the kitchen
pub const DISH_CATEGORY: &str = "Mains";

/// Lowercase substring marking a category as a beverage
pub const BEVERAGE_KEYWORD: &str = "drink";

/// Preparation station an order line is routed to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderRoute {
    Kitchen,
    Beverage,
    Generic,
}

impl OrderRoute {
    /// Classify a category label.
    ///
    /// Dishes require an exact category match; beverages match any
    /// category containing the keyword, case-insensitively. Everything
    /// else is generic.
    pub fn classify(category: &str) -> Self {
        if category == DISH_CATEGORY {
            OrderRoute::Kitchen
        } else if category.to_lowercase().contains(BEVERAGE_KEYWORD) {
            OrderRoute::Beverage
        } else {
            OrderRoute::Generic
        }
    }
}

// ============================================================================
// Billing Views
// ============================================================================

/// Bill totals for one tab
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BillTotals {
    /// Sum of line prices
    pub subtotal: f64,
    /// Service charge at the fixed rate (zero when not applied)
    pub service_charge: f64,
    /// subtotal + service_charge
    pub total: f64,
}

/// Lines of one item grouped for bill display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineGroup {
    pub name: String,
    pub unit_price: f64,
    /// Number of lines in the group
    pub quantity: i32,
    /// unit_price * quantity
    pub line_total: f64,
    /// Most recently ordered line in the group (removal target)
    pub last_line_id: String,
}

// ============================================================================
// Command Responses
// ============================================================================

/// Command response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse {
    /// The command ID this responds to
    pub command_id: String,
    /// Whether the command succeeded
    pub success: bool,
    /// Tab affected (set when the command resolved one)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_id: Option<u32>,
    /// Error details if failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CommandError>,
}

impl CommandResponse {
    pub fn success(command_id: String, tab_id: Option<u32>) -> Self {
        Self {
            command_id,
            success: true,
            tab_id,
            error: None,
        }
    }

    pub fn error(command_id: String, error: CommandError) -> Self {
        Self {
            command_id,
            success: false,
            tab_id: None,
            error: Some(error),
        }
    }

    pub fn duplicate(command_id: String) -> Self {
        Self {
            command_id,
            success: true,
            tab_id: None,
            error: None,
        }
    }
}

/// Command error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandError {
    pub code: CommandErrorCode,
    pub message: String,
}

impl CommandError {
    pub fn new(code: CommandErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Command error codes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandErrorCode {
    TabNotFound,
    ValidationFailed,
    InvalidOperation,
    InternalError,
    // Storage errors
    StorageFull,
    OutOfMemory,
    StorageCorrupted,
    SystemBusy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_dish_requires_exact_category() {
        assert_eq!(OrderRoute::classify("Mains"), OrderRoute::Kitchen);
        // Substring or case variants are not dishes
        assert_eq!(OrderRoute::classify("mains"), OrderRoute::Generic);
        assert_eq!(OrderRoute::classify("Mains & Sides"), OrderRoute::Generic);
    }

    #[test]
    fn test_classify_beverage_by_keyword() {
        assert_eq!(OrderRoute::classify("Soft Drinks"), OrderRoute::Beverage);
        assert_eq!(OrderRoute::classify("Alcoholic Drinks"), OrderRoute::Beverage);
        assert_eq!(OrderRoute::classify("DRINKS"), OrderRoute::Beverage);
        assert_eq!(OrderRoute::classify("Desserts"), OrderRoute::Generic);
    }

    #[test]
    fn test_display_label() {
        assert_eq!(TabKind::Fixed.display_label(7), "Table 7");
        let walk_in = TabKind::AdHoc {
            customer_name: "Maria".to_string(),
        };
        assert_eq!(walk_in.display_label(104), "Maria");
    }
}
