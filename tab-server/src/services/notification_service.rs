//! Notification Service - operator-facing event feed
//!
//! Translates committed tab events into short human-readable messages and
//! fans them out on a broadcast channel. Sends are fire-and-forget: a
//! lagging or absent subscriber never blocks or fails a mutation.

use crate::tabs::TabManager;
use serde::{Deserialize, Serialize};
use shared::tab::{EventPayload, OrderRoute, TabEvent};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

/// Notification broadcast channel capacity
const NOTIFICATION_CHANNEL_CAPACITY: usize = 1024;

/// Visual weight of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    Success,
    Info,
}

/// One operator-facing message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    /// Unix milliseconds
    pub timestamp: i64,
}

/// Handle for publishing and subscribing to notifications
#[derive(Clone, Debug)]
pub struct Notifier {
    tx: broadcast::Sender<Notification>,
}

impl Notifier {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(NOTIFICATION_CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Subscribe to the notification feed
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }

    /// Publish a success notification
    pub fn success(&self, message: impl Into<String>) {
        self.publish(NotificationKind::Success, message.into());
    }

    /// Publish an informational notification
    pub fn info(&self, message: impl Into<String>) {
        self.publish(NotificationKind::Info, message.into());
    }

    fn publish(&self, kind: NotificationKind, message: String) {
        let notification = Notification {
            message,
            kind,
            timestamp: shared::util::now_millis(),
        };
        if self.tx.send(notification).is_err() {
            tracing::debug!("Notification dropped: no active receivers");
        }
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Translate a committed event into a notification, if it warrants one
///
/// Registration and kitchen-progress events stay silent; the kitchen
/// display reads the queue projection instead.
fn translate(event: &TabEvent) -> Option<(NotificationKind, String)> {
    match &event.payload {
        EventPayload::TabOpened { customer_name } => Some((
            NotificationKind::Success,
            format!("Tab opened: {customer_name}"),
        )),
        EventPayload::OrderPlaced { tab_label, lines } => {
            let first = lines.first()?;
            let station = match OrderRoute::classify(&first.category) {
                OrderRoute::Kitchen => "Kitchen",
                OrderRoute::Beverage => "Bar",
                OrderRoute::Generic => "Order",
            };
            Some((
                NotificationKind::Info,
                format!("{station} {}x {} for {tab_label}", lines.len(), first.name),
            ))
        }
        EventPayload::TabClosed { kind, amount, .. } => Some((
            NotificationKind::Success,
            format!(
                "{} closed, total {amount:.2}",
                kind.display_label(event.tab_id)
            ),
        )),
        _ => None,
    }
}

/// Spawn the bridge task that feeds manager events into the notifier
pub fn spawn_event_bridge(manager: &TabManager, notifier: Notifier) -> JoinHandle<()> {
    let mut events = manager.subscribe();
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => {
                    if let Some((kind, message)) = translate(&event) {
                        match kind {
                            NotificationKind::Success => notifier.success(message),
                            NotificationKind::Info => notifier.info(message),
                        }
                    }
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Notification bridge lagged behind event stream");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    })
}
