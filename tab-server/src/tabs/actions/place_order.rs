//! PlaceOrder command handler
//!
//! Adds ordered lines to an open tab. A quantity of N becomes N individual
//! lines so the kitchen can mark each plate done on its own.

use async_trait::async_trait;

use crate::tabs::money;
use crate::tabs::traits::{CommandContext, CommandHandler, CommandMetadata, TabError};
use shared::tab::{
    EventPayload, LineStatus, OrderLine, OrderLineInput, TabEvent, TabEventType,
};

/// PlaceOrder action
#[derive(Debug, Clone)]
pub struct PlaceOrderAction {
    pub tab_id: u32,
    pub item: OrderLineInput,
    pub quantity: i32,
}

#[async_trait]
impl CommandHandler for PlaceOrderAction {
    async fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<TabEvent>, TabError> {
        // 1. Load existing snapshot (ordering against an unknown tab is an error)
        let snapshot = ctx.load_snapshot(self.tab_id)?;

        // 2. Validate the line input
        money::validate_order_line(&self.item, self.quantity)?;

        // 3. Expand quantity into individual lines with generated line IDs
        let ordered_at = shared::util::now_millis();
        let lines: Vec<OrderLine> = (0..self.quantity)
            .map(|_| OrderLine {
                line_id: uuid::Uuid::new_v4().to_string(),
                menu_item_id: self.item.menu_item_id.clone(),
                name: self.item.name.clone(),
                price: self.item.price,
                category: self.item.category.clone(),
                status: LineStatus::Pending,
                ordered_at,
            })
            .collect();

        // 4. Create event
        let seq = ctx.next_sequence();
        let event = TabEvent::new(
            seq,
            self.tab_id,
            metadata.operator_id.clone(),
            metadata.operator_name.clone(),
            metadata.command_id.clone(),
            Some(metadata.timestamp),
            TabEventType::OrderPlaced,
            EventPayload::OrderPlaced {
                lines,
                tab_label: snapshot.display_label(),
            },
        );

        Ok(vec![event])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabs::storage::TabStorage;
    use crate::tabs::traits::CommandContext;
    use shared::tab::{TabKind, TabSnapshot};
    use std::collections::HashSet;

    fn create_test_metadata() -> CommandMetadata {
        CommandMetadata {
            command_id: "cmd-1".to_string(),
            operator_id: "user-1".to_string(),
            operator_name: "Test User".to_string(),
            timestamp: 1234567890,
        }
    }

    fn create_line_input(name: &str, price: f64, category: &str) -> OrderLineInput {
        OrderLineInput {
            menu_item_id: "item-1".to_string(),
            name: name.to_string(),
            price,
            category: category.to_string(),
        }
    }

    #[tokio::test]
    async fn test_place_order_generates_one_line_per_unit() {
        let storage = TabStorage::open_in_memory().unwrap();
        let txn = storage.begin_write().unwrap();

        let snapshot = TabSnapshot::new(3, TabKind::Fixed);
        storage.store_snapshot(&txn, &snapshot).unwrap();

        let mut ctx = CommandContext::new(&txn, &storage, 0);
        let action = PlaceOrderAction {
            tab_id: 3,
            item: create_line_input("Paella", 25.0, "Mains"),
            quantity: 3,
        };
        let metadata = create_test_metadata();
        let events = action.execute(&mut ctx, &metadata).await.unwrap();

        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.tab_id, 3);
        assert_eq!(event.event_type, TabEventType::OrderPlaced);

        if let EventPayload::OrderPlaced { lines, tab_label } = &event.payload {
            assert_eq!(lines.len(), 3);
            assert_eq!(tab_label, "Table 3");

            let ids: HashSet<&str> = lines.iter().map(|l| l.line_id.as_str()).collect();
            assert_eq!(ids.len(), 3);

            for line in lines {
                assert_eq!(line.name, "Paella");
                assert_eq!(line.price, 25.0);
                assert_eq!(line.category, "Mains");
                assert_eq!(line.status, LineStatus::Pending);
            }
        } else {
            panic!("Expected OrderPlaced payload");
        }
    }

    #[tokio::test]
    async fn test_place_order_labels_walk_in_by_customer() {
        let storage = TabStorage::open_in_memory().unwrap();
        let txn = storage.begin_write().unwrap();

        let snapshot = TabSnapshot::new(
            101,
            TabKind::AdHoc {
                customer_name: "Maria".to_string(),
            },
        );
        storage.store_snapshot(&txn, &snapshot).unwrap();

        let mut ctx = CommandContext::new(&txn, &storage, 0);
        let action = PlaceOrderAction {
            tab_id: 101,
            item: create_line_input("House Red", 4.5, "Alcoholic Drinks"),
            quantity: 1,
        };
        let metadata = create_test_metadata();
        let events = action.execute(&mut ctx, &metadata).await.unwrap();

        if let EventPayload::OrderPlaced { tab_label, .. } = &events[0].payload {
            assert_eq!(tab_label, "Maria");
        } else {
            panic!("Expected OrderPlaced payload");
        }
    }

    #[tokio::test]
    async fn test_place_order_on_unknown_tab_fails() {
        let storage = TabStorage::open_in_memory().unwrap();
        let txn = storage.begin_write().unwrap();
        let mut ctx = CommandContext::new(&txn, &storage, 0);

        let action = PlaceOrderAction {
            tab_id: 42,
            item: create_line_input("Paella", 25.0, "Mains"),
            quantity: 1,
        };
        let metadata = create_test_metadata();
        let result = action.execute(&mut ctx, &metadata).await;

        assert!(matches!(result, Err(TabError::TabNotFound(42))));
    }

    #[tokio::test]
    async fn test_place_order_rejects_invalid_input() {
        let storage = TabStorage::open_in_memory().unwrap();
        let txn = storage.begin_write().unwrap();

        let snapshot = TabSnapshot::new(3, TabKind::Fixed);
        storage.store_snapshot(&txn, &snapshot).unwrap();

        let mut ctx = CommandContext::new(&txn, &storage, 0);
        let metadata = create_test_metadata();

        let action = PlaceOrderAction {
            tab_id: 3,
            item: create_line_input("Paella", 25.0, "Mains"),
            quantity: 0,
        };
        assert!(matches!(
            action.execute(&mut ctx, &metadata).await,
            Err(TabError::Validation(_))
        ));

        let action = PlaceOrderAction {
            tab_id: 3,
            item: create_line_input("", 25.0, "Mains"),
            quantity: 1,
        };
        assert!(matches!(
            action.execute(&mut ctx, &metadata).await,
            Err(TabError::Validation(_))
        ));

        let action = PlaceOrderAction {
            tab_id: 3,
            item: create_line_input("Paella", -1.0, "Mains"),
            quantity: 1,
        };
        assert!(matches!(
            action.execute(&mut ctx, &metadata).await,
            Err(TabError::Validation(_))
        ));
    }
}
