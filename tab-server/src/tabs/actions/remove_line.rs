//! RemoveLine command handler
//!
//! Voids a single line from a tab, e.g. a mis-keyed order or a dish the
//! kitchen ran out of. Removing a line that is already gone (or a tab that
//! already settled) succeeds without emitting anything.

use async_trait::async_trait;

use crate::tabs::traits::{CommandContext, CommandHandler, CommandMetadata, TabError};
use shared::tab::{EventPayload, TabEvent, TabEventType};

/// RemoveLine action
#[derive(Debug, Clone)]
pub struct RemoveLineAction {
    pub tab_id: u32,
    pub line_id: String,
}

#[async_trait]
impl CommandHandler for RemoveLineAction {
    async fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<TabEvent>, TabError> {
        // 1. Tab gone: nothing to remove
        let Some(snapshot) = ctx.find_snapshot(self.tab_id)? else {
            return Ok(vec![]);
        };

        // 2. Line gone: nothing to remove. Done lines are still removable.
        let Some(line) = snapshot.lines.iter().find(|l| l.line_id == self.line_id) else {
            return Ok(vec![]);
        };

        // 3. Create event
        let seq = ctx.next_sequence();
        let event = TabEvent::new(
            seq,
            self.tab_id,
            metadata.operator_id.clone(),
            metadata.operator_name.clone(),
            metadata.command_id.clone(),
            Some(metadata.timestamp),
            TabEventType::LineRemoved,
            EventPayload::LineRemoved {
                line_id: self.line_id.clone(),
                item_name: line.name.clone(),
            },
        );

        Ok(vec![event])
    }
}
