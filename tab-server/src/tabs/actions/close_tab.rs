//! CloseTab command handler
//!
//! Settles a tab: computes the final bill (optionally with the service
//! fee) and emits the closing event that feeds the revenue ledger.
//! Closing a tab with no lines, or one that is already gone, succeeds
//! without emitting anything, so a double-tap on the till cannot create
//! a second charge.

use async_trait::async_trait;

use crate::tabs::money;
use crate::tabs::traits::{CommandContext, CommandHandler, CommandMetadata, TabError};
use shared::tab::{EventPayload, TabEvent, TabEventType};

/// CloseTab action
#[derive(Debug, Clone)]
pub struct CloseTabAction {
    pub tab_id: u32,
    pub with_service: bool,
}

#[async_trait]
impl CommandHandler for CloseTabAction {
    async fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<TabEvent>, TabError> {
        // 1. Tab gone (already settled): nothing to do
        let Some(snapshot) = ctx.find_snapshot(self.tab_id)? else {
            return Ok(vec![]);
        };

        // 2. Nothing was ordered: closing records no revenue
        if snapshot.is_empty() {
            return Ok(vec![]);
        }

        // 3. Compute the final bill from the snapshot subtotal
        let totals = money::compute_totals(snapshot.subtotal, self.with_service);

        // 4. Create event
        let seq = ctx.next_sequence();
        let event = TabEvent::new(
            seq,
            self.tab_id,
            metadata.operator_id.clone(),
            metadata.operator_name.clone(),
            metadata.command_id.clone(),
            Some(metadata.timestamp),
            TabEventType::TabClosed,
            EventPayload::TabClosed {
                kind: snapshot.kind.clone(),
                subtotal: totals.subtotal,
                amount: totals.total,
                with_service: self.with_service,
            },
        );

        Ok(vec![event])
    }
}
