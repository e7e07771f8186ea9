//! RegisterTable command handler
//!
//! Brings a fixed floor-plan table under management. Re-registering an
//! existing table is a no-op so the startup bootstrap can run on every
//! boot without touching live tabs.

use async_trait::async_trait;

use crate::tabs::traits::{CommandContext, CommandHandler, CommandMetadata, TabError};
use shared::tab::{EventPayload, TabEvent, TabEventType, FIXED_TABLE_MAX};

/// RegisterTable action
#[derive(Debug, Clone)]
pub struct RegisterTableAction {
    pub table_id: u32,
}

#[async_trait]
impl CommandHandler for RegisterTableAction {
    async fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<TabEvent>, TabError> {
        // 1. Validate the ID lies in the fixed-table range
        if self.table_id == 0 || self.table_id > FIXED_TABLE_MAX {
            return Err(TabError::Validation(format!(
                "Table ID must be in 1..={}, got {}",
                FIXED_TABLE_MAX, self.table_id
            )));
        }

        // 2. Already registered (possibly mid-service): leave it alone
        if ctx.find_snapshot(self.table_id)?.is_some() {
            return Ok(vec![]);
        }

        // 3. Create event
        let seq = ctx.next_sequence();
        let event = TabEvent::new(
            seq,
            self.table_id,
            metadata.operator_id.clone(),
            metadata.operator_name.clone(),
            metadata.command_id.clone(),
            Some(metadata.timestamp),
            TabEventType::TableRegistered,
            EventPayload::TableRegistered {},
        );

        Ok(vec![event])
    }
}
