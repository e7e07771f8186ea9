//! Kitchen queue and bill-view projections
//!
//! Pure functions over snapshots. The manager wraps each of them with a
//! single storage read so a projection never mixes pre- and post-command
//! state.

use shared::tab::{LineGroup, OrderLine, OrderRoute, TabSnapshot};

use crate::tabs::money;

/// One dish waiting for the kitchen, tagged with its tab
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDish {
    pub tab_id: u32,
    pub line: OrderLine,
}

/// All pending kitchen-routed lines across tabs, oldest order first
///
/// The sort is stable, so two dishes ordered in the same instant keep
/// their per-tab insertion order.
pub fn pending_dishes(tabs: &[TabSnapshot]) -> Vec<PendingDish> {
    let mut dishes: Vec<PendingDish> = tabs
        .iter()
        .flat_map(|tab| {
            tab.lines
                .iter()
                .filter(|line| {
                    line.is_pending() && OrderRoute::classify(&line.category) == OrderRoute::Kitchen
                })
                .map(move |line| PendingDish {
                    tab_id: tab.tab_id,
                    line: line.clone(),
                })
        })
        .collect();

    dishes.sort_by_key(|dish| dish.line.ordered_at);
    dishes
}

/// Count of kitchen-routed lines already marked done
pub fn completed_dish_count(tabs: &[TabSnapshot]) -> usize {
    tabs.iter()
        .flat_map(|tab| tab.lines.iter())
        .filter(|line| {
            line.is_done() && OrderRoute::classify(&line.category) == OrderRoute::Kitchen
        })
        .count()
}

/// Lines grouped by item name in first-seen order, for bill display
///
/// `last_line_id` points at the newest line of each group, which is the
/// unit a remove action targets.
pub fn grouped_lines(tab: &TabSnapshot) -> Vec<LineGroup> {
    let mut groups: Vec<LineGroup> = Vec::new();

    for line in &tab.lines {
        if let Some(group) = groups.iter_mut().find(|g| g.name == line.name) {
            group.quantity += 1;
            group.line_total =
                money::to_f64(money::to_decimal(group.line_total) + money::to_decimal(line.price));
            group.last_line_id = line.line_id.clone();
        } else {
            groups.push(LineGroup {
                name: line.name.clone(),
                unit_price: line.price,
                quantity: 1,
                line_total: line.price,
                last_line_id: line.line_id.clone(),
            });
        }
    }

    groups
}
