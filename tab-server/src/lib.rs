//! Tab Server - restaurant tab lifecycle and billing engine
//!
//! # Architecture overview
//!
//! The server is an event-sourced state machine for restaurant tabs.
//! Commands are validated into events, events fold into per-tab
//! snapshots, and everything lands atomically in one embedded redb
//! database:
//!
//! - **Tabs** (`tabs`): command processing, event sourcing, billing,
//!   kitchen queue, settlement ledger
//! - **Catalog** (`services/catalog_service`): menu management with an
//!   in-memory read cache
//! - **Notifications** (`services/notification_service`): operator-facing
//!   broadcast feed
//!
//! # Module structure
//!
//! ```text
//! tab-server/src/
//! ├── core/          # Configuration, application state
//! ├── services/      # Menu catalog, notifications
//! ├── tabs/          # Tab event sourcing (commands, events, billing)
//! └── utils/         # Logging, validation helpers
//! ```

pub mod core;
pub mod services;
pub mod tabs;
pub mod utils;

// Re-export public types
pub use crate::core::{AppState, Config};
pub use crate::services::{CatalogError, CatalogService, Notification, NotificationKind, Notifier};
pub use crate::tabs::{ManagerError, ManagerResult, TabManager, TabStorage};

// Re-export logger functions
pub use crate::utils::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
  ______      __
 /_  __/___ _/ /_
  / / / __ `/ __ \
 / / / /_/ / /_/ /
/_/   \__,_/_.___/
    _____
   / ___/___  ______   _____  _____
   \__ \/ _ \/ ___/ | / / _ \/ ___/
  ___/ /  __/ /   | |/ /  __/ /
 /____/\___/_/    |___/\___/_/
    "#
    );
}
