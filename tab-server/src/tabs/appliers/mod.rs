//! Event appliers
//!
//! Each event type has its own applier implementing `EventApplier` (pure
//! state transitions). Appliers read only the snapshot and the event
//! payload, so folding the same stream always rebuilds the same state.

mod line_marked_done;
mod line_removed;
mod order_placed;
mod tab_closed;
mod tab_opened;
mod table_registered;

pub use line_marked_done::LineMarkedDoneApplier;
pub use line_removed::LineRemovedApplier;
pub use order_placed::OrderPlacedApplier;
pub use tab_closed::TabClosedApplier;
pub use tab_opened::TabOpenedApplier;
pub use table_registered::TableRegisteredApplier;

use enum_dispatch::enum_dispatch;

use crate::tabs::traits::EventApplier;
use shared::tab::{TabEvent, TabEventType, TabSnapshot};

/// Unified event applier enum
#[enum_dispatch(EventApplier)]
pub enum EventAction {
    TableRegistered(TableRegisteredApplier),
    TabOpened(TabOpenedApplier),
    OrderPlaced(OrderPlacedApplier),
    LineMarkedDone(LineMarkedDoneApplier),
    LineRemoved(LineRemovedApplier),
    TabClosed(TabClosedApplier),
}

impl From<&TabEvent> for EventAction {
    fn from(event: &TabEvent) -> Self {
        match event.event_type {
            TabEventType::TableRegistered => EventAction::TableRegistered(TableRegisteredApplier),
            TabEventType::TabOpened => EventAction::TabOpened(TabOpenedApplier),
            TabEventType::OrderPlaced => EventAction::OrderPlaced(OrderPlacedApplier),
            TabEventType::LineMarkedDone => EventAction::LineMarkedDone(LineMarkedDoneApplier),
            TabEventType::LineRemoved => EventAction::LineRemoved(LineRemovedApplier),
            TabEventType::TabClosed => EventAction::TabClosed(TabClosedApplier),
        }
    }
}
