use super::*;

#[test]
fn test_pending_dishes_skip_beverages() {
    let manager = create_test_manager();
    register_table(&manager, 1);
    place_order(&manager, 1, simple_item("Paella", 25.0, "Mains"), 2);
    place_order(&manager, 1, simple_item("Cola", 2.5, "Soft Drinks"), 3);

    let dishes = manager.pending_dishes().unwrap();

    assert_eq!(dishes.len(), 2);
    assert!(dishes.iter().all(|d| d.line.name == "Paella"));
    assert!(dishes.iter().all(|d| d.tab_id == 1));
}

#[test]
fn test_queue_spans_all_tabs() {
    let manager = create_test_manager();
    register_table(&manager, 1);
    register_table(&manager, 2);
    let walk_in = open_walk_in(&manager, "Maria");

    place_order(&manager, 1, simple_item("Paella", 25.0, "Mains"), 1);
    place_order(&manager, 2, simple_item("Soup", 8.0, "Mains"), 1);
    place_order(&manager, walk_in, simple_item("Steak", 30.0, "Mains"), 1);

    let dishes = manager.pending_dishes().unwrap();

    assert_eq!(dishes.len(), 3);
    let tabs: Vec<u32> = dishes.iter().map(|d| d.tab_id).collect();
    assert!(tabs.contains(&1));
    assert!(tabs.contains(&2));
    assert!(tabs.contains(&walk_in));
}

#[test]
fn test_mark_done_removes_dish_from_queue() {
    let manager = create_test_manager();
    register_table(&manager, 1);
    place_order(&manager, 1, simple_item("Paella", 25.0, "Mains"), 2);

    let dishes = manager.pending_dishes().unwrap();
    let line_id = dishes[0].line.line_id.clone();

    let response = mark_done(&manager, 1, &line_id);
    assert!(response.success);

    assert_eq!(manager.pending_dishes().unwrap().len(), 1);
    assert_eq!(manager.completed_dish_count().unwrap(), 1);

    // The bill is untouched by kitchen progress
    let snapshot = manager.get_snapshot(1).unwrap().unwrap();
    assert_eq!(snapshot.subtotal, 50.0);
}

#[test]
fn test_mark_done_twice_is_noop() {
    let manager = create_test_manager();
    register_table(&manager, 1);
    place_order(&manager, 1, simple_item("Paella", 25.0, "Mains"), 1);

    let line_id = manager.pending_dishes().unwrap()[0].line.line_id.clone();
    mark_done(&manager, 1, &line_id);

    let events_before = manager.get_events_for_tab(1).unwrap().len();
    let response = mark_done(&manager, 1, &line_id);
    assert!(response.success);

    // Second mark generates no event
    assert_eq!(manager.get_events_for_tab(1).unwrap().len(), events_before);
    assert_eq!(manager.completed_dish_count().unwrap(), 1);
}

#[test]
fn test_mark_done_unknown_line_is_noop() {
    let manager = create_test_manager();
    register_table(&manager, 1);
    place_order(&manager, 1, simple_item("Paella", 25.0, "Mains"), 1);

    let response = mark_done(&manager, 1, "no-such-line");

    assert!(response.success);
    assert_eq!(response.tab_id, None);
    assert_eq!(manager.pending_dishes().unwrap().len(), 1);
}

#[test]
fn test_remove_line_updates_bill_and_queue() {
    let manager = create_test_manager();
    register_table(&manager, 1);
    place_order(&manager, 1, simple_item("Paella", 25.0, "Mains"), 2);

    let line_id = manager.pending_dishes().unwrap()[0].line.line_id.clone();
    let response = remove_line(&manager, 1, &line_id);
    assert!(response.success);

    assert_eq!(manager.pending_dishes().unwrap().len(), 1);
    let snapshot = manager.get_snapshot(1).unwrap().unwrap();
    assert_eq!(snapshot.lines.len(), 1);
    assert_eq!(snapshot.subtotal, 25.0);
}

#[test]
fn test_remove_served_line_takes_it_off_the_bill() {
    let manager = create_test_manager();
    register_table(&manager, 1);
    place_order(&manager, 1, simple_item("Paella", 25.0, "Mains"), 1);

    let line_id = manager.pending_dishes().unwrap()[0].line.line_id.clone();
    mark_done(&manager, 1, &line_id);

    let response = remove_line(&manager, 1, &line_id);
    assert!(response.success);

    let snapshot = manager.get_snapshot(1).unwrap().unwrap();
    assert!(snapshot.lines.is_empty());
    assert_eq!(snapshot.subtotal, 0.0);
    assert_eq!(manager.completed_dish_count().unwrap(), 0);
}

#[test]
fn test_remove_unknown_line_is_noop() {
    let manager = create_test_manager();
    register_table(&manager, 1);
    place_order(&manager, 1, simple_item("Paella", 25.0, "Mains"), 1);

    let response = remove_line(&manager, 1, "no-such-line");

    assert!(response.success);
    let snapshot = manager.get_snapshot(1).unwrap().unwrap();
    assert_eq!(snapshot.lines.len(), 1);
}

#[test]
fn test_grouped_lines_for_bill_display() {
    let manager = create_test_manager();
    register_table(&manager, 1);
    place_order(&manager, 1, simple_item("Paella", 25.0, "Mains"), 2);
    place_order(&manager, 1, simple_item("Cola", 2.5, "Soft Drinks"), 1);
    place_order(&manager, 1, simple_item("Paella", 25.0, "Mains"), 1);

    let groups = manager.grouped_lines(1).unwrap();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].name, "Paella");
    assert_eq!(groups[0].quantity, 3);
    assert_eq!(groups[0].line_total, 75.0);
    assert_eq!(groups[1].name, "Cola");
    assert_eq!(groups[1].quantity, 1);

    // Removal targets the newest line of the group
    let snapshot = manager.get_snapshot(1).unwrap().unwrap();
    assert_eq!(groups[0].last_line_id, snapshot.lines[3].line_id);
}

#[test]
fn test_closing_tab_clears_its_queue_entries() {
    let manager = create_test_manager();
    register_table(&manager, 1);
    register_table(&manager, 2);
    place_order(&manager, 1, simple_item("Paella", 25.0, "Mains"), 2);
    place_order(&manager, 2, simple_item("Soup", 8.0, "Mains"), 1);

    close_tab(&manager, 1, false);

    let dishes = manager.pending_dishes().unwrap();
    assert_eq!(dishes.len(), 1);
    assert_eq!(dishes[0].tab_id, 2);
}
