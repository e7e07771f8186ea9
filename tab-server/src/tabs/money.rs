//! Money arithmetic helpers
//!
//! All monetary math routes through `rust_decimal` and only converts back
//! to `f64` at the storage/wire boundary, so repeated recalculation never
//! accumulates float drift.

use crate::tabs::traits::{TabError, TabResult};
use crate::utils::validation::MAX_NAME_LEN;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use shared::tab::{BillTotals, OrderLineInput, TabSnapshot};

/// Monetary values round to two decimal places
pub const DECIMAL_PLACES: u32 = 2;

/// Service fee applied at settlement when requested (0.1 = 10%)
pub const SERVICE_FEE_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 1);

/// Upper bound for a single line price
pub const MAX_PRICE: f64 = 1_000_000.0;

/// Upper bound for the quantity of one order command
pub const MAX_QUANTITY: i32 = 100;

/// Convert an f64 amount into a Decimal for arithmetic
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert a Decimal back to f64, rounded half-away-from-zero to cents
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

fn require_finite(value: f64, field: &str) -> TabResult<()> {
    if !value.is_finite() {
        return Err(TabError::Validation(format!("{field} must be finite")));
    }
    Ok(())
}

/// Validate an ordered line before any event is emitted
pub fn validate_order_line(item: &OrderLineInput, quantity: i32) -> TabResult<()> {
    if item.name.trim().is_empty() {
        return Err(TabError::Validation("Item name cannot be empty".to_string()));
    }
    if item.name.len() > MAX_NAME_LEN {
        return Err(TabError::Validation(format!(
            "Item name is too long ({} chars, max {MAX_NAME_LEN})",
            item.name.len()
        )));
    }
    require_finite(item.price, "Item price")?;
    if item.price < 0.0 {
        return Err(TabError::Validation(format!(
            "Item price cannot be negative: {}",
            item.price
        )));
    }
    if item.price > MAX_PRICE {
        return Err(TabError::Validation(format!(
            "Item price exceeds maximum: {} > {}",
            item.price, MAX_PRICE
        )));
    }
    if quantity <= 0 {
        return Err(TabError::Validation(format!(
            "Quantity must be positive: {quantity}"
        )));
    }
    if quantity > MAX_QUANTITY {
        return Err(TabError::Validation(format!(
            "Quantity exceeds maximum: {quantity} > {MAX_QUANTITY}"
        )));
    }
    Ok(())
}

/// Recompute a snapshot's subtotal from its lines
///
/// Every line carries a unit price, so the subtotal is a plain sum.
pub fn recalculate_subtotal(snapshot: &mut TabSnapshot) {
    let subtotal: Decimal = snapshot.lines.iter().map(|line| to_decimal(line.price)).sum();
    snapshot.subtotal = to_f64(subtotal);
}

/// Compute the settlement breakdown for a subtotal
pub fn compute_totals(subtotal: f64, with_service: bool) -> BillTotals {
    let subtotal_dec = to_decimal(subtotal);
    let service_charge = if with_service {
        subtotal_dec * SERVICE_FEE_RATE
    } else {
        Decimal::ZERO
    };
    BillTotals {
        subtotal: to_f64(subtotal_dec),
        service_charge: to_f64(service_charge),
        total: to_f64(subtotal_dec + service_charge),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::tab::{LineStatus, OrderLine, TabKind};

    fn line(price: f64) -> OrderLine {
        OrderLine {
            line_id: uuid::Uuid::new_v4().to_string(),
            menu_item_id: "item-1".to_string(),
            name: "Test Dish".to_string(),
            price,
            category: "Mains".to_string(),
            status: LineStatus::Pending,
            ordered_at: 0,
        }
    }

    #[test]
    fn test_subtotal_is_exact_over_repeated_additions() {
        let mut snapshot = TabSnapshot::new(1, TabKind::Fixed);
        for _ in 0..3 {
            snapshot.lines.push(line(25.0));
            recalculate_subtotal(&mut snapshot);
        }
        assert_eq!(snapshot.subtotal, 75.0);
    }

    #[test]
    fn test_float_drift_prices() {
        let mut snapshot = TabSnapshot::new(1, TabKind::Fixed);
        for _ in 0..10 {
            snapshot.lines.push(line(0.1));
        }
        recalculate_subtotal(&mut snapshot);
        assert_eq!(snapshot.subtotal, 1.0);
    }

    #[test]
    fn test_service_charge_ten_percent() {
        let totals = compute_totals(75.0, true);
        assert_eq!(totals.subtotal, 75.0);
        assert_eq!(totals.service_charge, 7.5);
        assert_eq!(totals.total, 82.5);
    }

    #[test]
    fn test_no_service_charge() {
        let totals = compute_totals(75.0, false);
        assert_eq!(totals.service_charge, 0.0);
        assert_eq!(totals.total, 75.0);
    }

    #[test]
    fn test_service_charge_rounds_half_up() {
        // 0.05 * 0.1 = 0.005, rounds away from zero to 0.01
        let totals = compute_totals(0.05, true);
        assert_eq!(totals.service_charge, 0.01);
        assert_eq!(totals.total, 0.06);
    }

    #[test]
    fn test_zero_subtotal_yields_all_zero_totals() {
        let totals = compute_totals(0.0, true);
        assert_eq!(totals.subtotal, 0.0);
        assert_eq!(totals.service_charge, 0.0);
        assert_eq!(totals.total, 0.0);
    }

    #[test]
    fn test_validate_rejects_bad_input() {
        let mut item = OrderLineInput {
            menu_item_id: "item-1".to_string(),
            name: "Dish".to_string(),
            price: 10.0,
            category: "Mains".to_string(),
        };
        assert!(validate_order_line(&item, 1).is_ok());
        assert!(validate_order_line(&item, 0).is_err());
        assert!(validate_order_line(&item, -2).is_err());
        assert!(validate_order_line(&item, MAX_QUANTITY + 1).is_err());

        item.price = -1.0;
        assert!(validate_order_line(&item, 1).is_err());
        item.price = f64::NAN;
        assert!(validate_order_line(&item, 1).is_err());
        item.price = MAX_PRICE + 1.0;
        assert!(validate_order_line(&item, 1).is_err());
        item.price = 10.0;
        item.name = "   ".to_string();
        assert!(validate_order_line(&item, 1).is_err());
    }
}
