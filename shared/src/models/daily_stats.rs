//! Billing Ledger Models

use serde::{Deserialize, Serialize};

/// Ledger entry - immutable record of one settled tab
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedgerEntry {
    /// Tab the bill was settled for
    pub tab_id: u32,
    /// Final charged amount (service charge included when applied)
    pub amount: f64,
    /// Settlement timestamp (Unix millis)
    pub timestamp: i64,
    /// Whether the service charge was applied
    pub with_service: bool,
}

/// Daily statistics - computed from the ledger on every read
///
/// The aggregates are always derived by summing/counting `history`,
/// so they cannot drift from it.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DailyStats {
    /// Sum of all settled amounts
    pub total_revenue: f64,
    /// Number of settled bills
    pub completed_orders_count: u64,
    /// Settlement records in commit order (oldest first)
    pub history: Vec<LedgerEntry>,
}
