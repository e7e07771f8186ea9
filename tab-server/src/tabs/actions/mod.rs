//! Command action implementations
//!
//! Each command type has its own action struct implementing `CommandHandler`.
//! The manager converts an incoming `TabCommand` into a `CommandAction` and
//! executes it without ever matching on the payload itself.

mod close_tab;
mod mark_line_done;
mod open_tab;
mod place_order;
mod register_table;
mod remove_line;

pub use close_tab::CloseTabAction;
pub use mark_line_done::MarkLineDoneAction;
pub use open_tab::OpenTabAction;
pub use place_order::PlaceOrderAction;
pub use register_table::RegisterTableAction;
pub use remove_line::RemoveLineAction;

use async_trait::async_trait;

use crate::tabs::traits::{CommandContext, CommandHandler, CommandMetadata, TabResult};
use shared::tab::{TabCommand, TabCommandPayload, TabEvent};

/// Unified command action enum
pub enum CommandAction {
    RegisterTable(RegisterTableAction),
    OpenTab(OpenTabAction),
    PlaceOrder(PlaceOrderAction),
    MarkLineDone(MarkLineDoneAction),
    RemoveLine(RemoveLineAction),
    CloseTab(CloseTabAction),
}

#[async_trait]
impl CommandHandler for CommandAction {
    async fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> TabResult<Vec<TabEvent>> {
        match self {
            CommandAction::RegisterTable(action) => action.execute(ctx, metadata).await,
            CommandAction::OpenTab(action) => action.execute(ctx, metadata).await,
            CommandAction::PlaceOrder(action) => action.execute(ctx, metadata).await,
            CommandAction::MarkLineDone(action) => action.execute(ctx, metadata).await,
            CommandAction::RemoveLine(action) => action.execute(ctx, metadata).await,
            CommandAction::CloseTab(action) => action.execute(ctx, metadata).await,
        }
    }
}

impl From<&TabCommand> for CommandAction {
    /// This is the ONLY place that needs a match on the command payload
    fn from(command: &TabCommand) -> Self {
        match &command.payload {
            TabCommandPayload::RegisterTable { table_id } => {
                CommandAction::RegisterTable(RegisterTableAction {
                    table_id: *table_id,
                })
            }
            TabCommandPayload::OpenTab { customer_name } => CommandAction::OpenTab(OpenTabAction {
                customer_name: customer_name.clone(),
            }),
            TabCommandPayload::PlaceOrder {
                tab_id,
                item,
                quantity,
            } => CommandAction::PlaceOrder(PlaceOrderAction {
                tab_id: *tab_id,
                item: item.clone(),
                quantity: *quantity,
            }),
            TabCommandPayload::MarkLineDone { tab_id, line_id } => {
                CommandAction::MarkLineDone(MarkLineDoneAction {
                    tab_id: *tab_id,
                    line_id: line_id.clone(),
                })
            }
            TabCommandPayload::RemoveLine { tab_id, line_id } => {
                CommandAction::RemoveLine(RemoveLineAction {
                    tab_id: *tab_id,
                    line_id: line_id.clone(),
                })
            }
            TabCommandPayload::CloseTab {
                tab_id,
                with_service,
            } => CommandAction::CloseTab(CloseTabAction {
                tab_id: *tab_id,
                with_service: *with_service,
            }),
        }
    }
}
