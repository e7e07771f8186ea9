//! Service layer
//!
//! Engine-level services that sit beside the tab state machine:
//!
//! - [`CatalogService`] - menu management with in-memory caching
//! - [`Notifier`] - broadcast feed of operator-facing notifications

pub mod catalog_service;
pub mod notification_service;

pub use catalog_service::{CatalogError, CatalogResult, CatalogService};
pub use notification_service::{Notification, NotificationKind, Notifier, spawn_event_bridge};
