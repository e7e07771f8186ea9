//! Daily revenue aggregation
//!
//! The ledger is the source of truth for end-of-day figures. Aggregates
//! are folded from the entries on every read, so `total_revenue` always
//! equals the sum over `history` and `completed_orders_count` its length.

use rust_decimal::Decimal;
use shared::models::{DailyStats, LedgerEntry};

use crate::tabs::money;

/// Fold ledger entries into the daily figures
pub fn compute_stats(history: Vec<LedgerEntry>) -> DailyStats {
    let total: Decimal = history
        .iter()
        .map(|entry| money::to_decimal(entry.amount))
        .sum();

    DailyStats {
        total_revenue: money::to_f64(total),
        completed_orders_count: history.len() as u64,
        history,
    }
}
