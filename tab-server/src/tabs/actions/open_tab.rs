//! OpenTab command handler
//!
//! Opens a named walk-in tab. The tab ID is allocated inside the command's
//! write transaction, above both the fixed-table range and every tab ID
//! ever handed out, so settled walk-ins never get their ID recycled.

use async_trait::async_trait;

use crate::tabs::traits::{CommandContext, CommandHandler, CommandMetadata, TabError};
use crate::utils::validation::MAX_NAME_LEN;
use shared::tab::{EventPayload, TabEvent, TabEventType, FIXED_TABLE_MAX};

/// OpenTab action
#[derive(Debug, Clone)]
pub struct OpenTabAction {
    pub customer_name: String,
}

#[async_trait]
impl CommandHandler for OpenTabAction {
    async fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<TabEvent>, TabError> {
        // 1. Validate customer name
        let customer_name = self.customer_name.trim();
        if customer_name.is_empty() {
            return Err(TabError::Validation(
                "Customer name cannot be empty".to_string(),
            ));
        }
        if customer_name.len() > MAX_NAME_LEN {
            return Err(TabError::Validation(format!(
                "Customer name exceeds {MAX_NAME_LEN} characters"
            )));
        }

        // 2. Allocate a fresh tab ID above the fixed-table range
        let tab_id = ctx.allocate_ad_hoc_tab_id(FIXED_TABLE_MAX)?;

        // 3. Create event
        let seq = ctx.next_sequence();
        let event = TabEvent::new(
            seq,
            tab_id,
            metadata.operator_id.clone(),
            metadata.operator_name.clone(),
            metadata.command_id.clone(),
            Some(metadata.timestamp),
            TabEventType::TabOpened,
            EventPayload::TabOpened {
                customer_name: customer_name.to_string(),
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

    fn create_test_metadata() -> CommandMetadata {
        CommandMetadata {
            command_id: "cmd-1".to_string(),
            operator_id: "user-1".to_string(),
            operator_name: "Test User".to_string(),
            timestamp: 1234567890,
        }
    }

    #[tokio::test]
    async fn test_open_tab_allocates_above_fixed_range() {
        let storage = TabStorage::open_in_memory().unwrap();
        let txn = storage.begin_write().unwrap();
        let mut ctx = CommandContext::new(&txn, &storage, 0);

        let action = OpenTabAction {
            customer_name: "Maria".to_string(),
        };
        let metadata = create_test_metadata();
        let events = action.execute(&mut ctx, &metadata).await.unwrap();

        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.tab_id, FIXED_TABLE_MAX + 1);
        assert_eq!(event.event_type, TabEventType::TabOpened);

        if let EventPayload::TabOpened { customer_name } = &event.payload {
            assert_eq!(customer_name, "Maria");
        } else {
            panic!("Expected TabOpened payload");
        }
    }

    #[tokio::test]
    async fn test_open_tab_ids_are_unique() {
        let storage = TabStorage::open_in_memory().unwrap();
        let txn = storage.begin_write().unwrap();
        let mut ctx = CommandContext::new(&txn, &storage, 0);
        let metadata = create_test_metadata();

        let first = OpenTabAction {
            customer_name: "Maria".to_string(),
        }
        .execute(&mut ctx, &metadata)
        .await
        .unwrap();
        let second = OpenTabAction {
            customer_name: "Jonas".to_string(),
        }
        .execute(&mut ctx, &metadata)
        .await
        .unwrap();

        assert_eq!(first[0].tab_id, 101);
        assert_eq!(second[0].tab_id, 102);
    }

    #[tokio::test]
    async fn test_open_tab_skips_past_live_walk_ins() {
        let storage = TabStorage::open_in_memory().unwrap();
        let txn = storage.begin_write().unwrap();

        // A walk-in snapshot already holds ID 150
        let snapshot = TabSnapshot::new(
            150,
            TabKind::AdHoc {
                customer_name: "Earlier".to_string(),
            },
        );
        storage.store_snapshot(&txn, &snapshot).unwrap();

        let mut ctx = CommandContext::new(&txn, &storage, 0);
        let action = OpenTabAction {
            customer_name: "Maria".to_string(),
        };
        let metadata = create_test_metadata();
        let events = action.execute(&mut ctx, &metadata).await.unwrap();

        assert_eq!(events[0].tab_id, 151);
    }

    #[tokio::test]
    async fn test_open_tab_trims_and_validates_name() {
        let storage = TabStorage::open_in_memory().unwrap();
        let txn = storage.begin_write().unwrap();
        let mut ctx = CommandContext::new(&txn, &storage, 0);
        let metadata = create_test_metadata();

        let action = OpenTabAction {
            customer_name: "  Maria  ".to_string(),
        };
        let events = action.execute(&mut ctx, &metadata).await.unwrap();
        if let EventPayload::TabOpened { customer_name } = &events[0].payload {
            assert_eq!(customer_name, "Maria");
        } else {
            panic!("Expected TabOpened payload");
        }

        let action = OpenTabAction {
            customer_name: "   ".to_string(),
        };
        let result = action.execute(&mut ctx, &metadata).await;
        assert!(matches!(result, Err(TabError::Validation(_))));

        let action = OpenTabAction {
            customer_name: "x".repeat(MAX_NAME_LEN + 1),
        };
        let result = action.execute(&mut ctx, &metadata).await;
        assert!(matches!(result, Err(TabError::Validation(_))));
    }
}
