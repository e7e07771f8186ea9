use crate::core::Config;
use crate::services::{CatalogService, Notifier, spawn_event_bridge};
use crate::tabs::TabManager;
use shared::tab::{TabCommand, TabCommandPayload};
use std::path::PathBuf;

/// Application state - holds every long-lived service
///
/// Cloning is cheap; the services share their internals through `Arc`.
///
/// | Field | Type | Role |
/// |-------|------|------|
/// | config | Config | Settings (immutable) |
/// | manager | TabManager | Tab lifecycle state machine |
/// | catalog | CatalogService | Menu management |
/// | notifier | Notifier | Operator notification feed |
#[derive(Clone, Debug)]
pub struct AppState {
    /// Server configuration
    pub config: Config,
    /// Tab lifecycle state machine
    pub manager: TabManager,
    /// Menu catalog
    pub catalog: CatalogService,
    /// Operator notification feed
    pub notifier: Notifier,
}

impl AppState {
    /// Initialize the application state
    ///
    /// In order:
    /// 1. Working directory
    /// 2. Tab manager (opens `work_dir/tabs.redb`)
    /// 3. Catalog (cache warmup, default menu on a fresh database)
    /// 4. Fixed table registration (idempotent across restarts)
    /// 5. Notification bridge task
    ///
    /// Must run inside a Tokio runtime; the notification bridge is spawned
    /// on it.
    pub fn initialize(config: &Config) -> anyhow::Result<Self> {
        // 1. Working directory
        config.ensure_work_dir()?;

        // 2. Tab manager
        let manager = TabManager::new(config.database_path())?;

        // 3. Catalog
        let notifier = Notifier::new();
        let catalog = CatalogService::new(manager.storage().clone(), notifier.clone());
        catalog.warmup()?;
        let seeded = catalog.seed_default_menu()?;
        if seeded > 0 {
            tracing::info!(seeded, "Fresh database, default menu installed");
        }

        // 4. Register the floor plan; already-registered tables are no-ops
        for table_id in 1..=config.fixed_table_count {
            let cmd = TabCommand::new(
                "system",
                "System",
                TabCommandPayload::RegisterTable { table_id },
            );
            let response = manager.execute_command(cmd);
            if let Some(error) = response.error {
                anyhow::bail!("Failed to register table {}: {}", table_id, error.message);
            }
        }
        tracing::info!(tables = config.fixed_table_count, "Floor plan registered");

        // 5. Bridge tab events into operator notifications
        let _bridge = spawn_event_bridge(&manager, notifier.clone());

        Ok(Self {
            config: config.clone(),
            manager,
            catalog,
            notifier,
        })
    }

    /// Clear the settlement ledger and announce the reset
    pub fn reset_daily_stats(&self) -> anyhow::Result<u64> {
        let removed = self.manager.reset_daily_stats()?;
        self.notifier
            .info(format!("Daily stats reset, {removed} settlements cleared"));
        Ok(removed)
    }

    /// Get the working directory
    pub fn work_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.work_dir)
    }
}
