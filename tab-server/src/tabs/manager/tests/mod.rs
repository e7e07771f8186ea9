use super::*;
use shared::tab::{LineStatus, OrderLineInput, TabCommandPayload};

fn create_test_manager() -> TabManager {
    let storage = TabStorage::open_in_memory().unwrap();
    TabManager::with_storage(storage)
}

fn register_table_cmd(table_id: u32) -> TabCommand {
    TabCommand::new(
        "op-1",
        "Test Operator",
        TabCommandPayload::RegisterTable { table_id },
    )
}

fn register_table(manager: &TabManager, table_id: u32) {
    let resp = manager.execute_command(register_table_cmd(table_id));
    assert!(resp.success, "Failed to register table {}", table_id);
}

/// Open a walk-in tab and return its allocated ID
fn open_walk_in(manager: &TabManager, customer_name: &str) -> u32 {
    let resp = manager.execute_command(TabCommand::new(
        "op-1",
        "Test Operator",
        TabCommandPayload::OpenTab {
            customer_name: customer_name.to_string(),
        },
    ));
    assert!(resp.success, "Failed to open walk-in tab");
    resp.tab_id.unwrap()
}

fn simple_item(name: &str, price: f64, category: &str) -> OrderLineInput {
    OrderLineInput {
        menu_item_id: format!("item-{}", name.to_lowercase().replace(' ', "-")),
        name: name.to_string(),
        price,
        category: category.to_string(),
    }
}

/// Place an order on a tab and assert success
fn place_order(manager: &TabManager, tab_id: u32, item: OrderLineInput, quantity: i32) {
    let resp = manager.execute_command(TabCommand::new(
        "op-1",
        "Test Operator",
        TabCommandPayload::PlaceOrder {
            tab_id,
            item,
            quantity,
        },
    ));
    assert!(resp.success, "Failed to place order on tab {}", tab_id);
}

/// Close a tab and return the response
fn close_tab(manager: &TabManager, tab_id: u32, with_service: bool) -> CommandResponse {
    manager.execute_command(TabCommand::new(
        "op-1",
        "Test Operator",
        TabCommandPayload::CloseTab {
            tab_id,
            with_service,
        },
    ))
}

/// Mark a line done and return the response
fn mark_done(manager: &TabManager, tab_id: u32, line_id: &str) -> CommandResponse {
    manager.execute_command(TabCommand::new(
        "op-1",
        "Test Operator",
        TabCommandPayload::MarkLineDone {
            tab_id,
            line_id: line_id.to_string(),
        },
    ))
}

/// Remove a line and return the response
fn remove_line(manager: &TabManager, tab_id: u32, line_id: &str) -> CommandResponse {
    manager.execute_command(TabCommand::new(
        "op-1",
        "Test Operator",
        TabCommandPayload::RemoveLine {
            tab_id,
            line_id: line_id.to_string(),
        },
    ))
}

mod test_kitchen;
