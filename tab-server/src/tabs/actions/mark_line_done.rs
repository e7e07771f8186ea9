//! MarkLineDone command handler
//!
//! Records that the kitchen finished a line. Marks arriving after the tab
//! settled, or for a line that was removed or already marked, succeed
//! without emitting anything: a late tap on the kitchen screen is routine.

use async_trait::async_trait;

use crate::tabs::traits::{CommandContext, CommandHandler, CommandMetadata, TabError};
use shared::tab::{EventPayload, TabEvent, TabEventType};

/// MarkLineDone action
#[derive(Debug, Clone)]
pub struct MarkLineDoneAction {
    pub tab_id: u32,
    pub line_id: String,
}

#[async_trait]
impl CommandHandler for MarkLineDoneAction {
    async fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<TabEvent>, TabError> {
        // 1. Tab gone (already settled): nothing to record
        let Some(snapshot) = ctx.find_snapshot(self.tab_id)? else {
            return Ok(vec![]);
        };

        // 2. Line gone or already done: nothing to record
        let Some(line) = snapshot.lines.iter().find(|l| l.line_id == self.line_id) else {
            return Ok(vec![]);
        };
        if line.is_done() {
            return Ok(vec![]);
        }

        // 3. Create event
        let seq = ctx.next_sequence();
        let event = TabEvent::new(
            seq,
            self.tab_id,
            metadata.operator_id.clone(),
            metadata.operator_name.clone(),
            metadata.command_id.clone(),
            Some(metadata.timestamp),
            TabEventType::LineMarkedDone,
            EventPayload::LineMarkedDone {
                line_id: self.line_id.clone(),
                item_name: line.name.clone(),
            },
        );

        Ok(vec![event])
    }
}
