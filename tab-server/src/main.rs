use tab_server::{AppState, Config, init_logger_with_file, print_banner};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration
    let config = Config::from_env();

    // 2. Logging (console, plus daily files when LOG_DIR is set)
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    print_banner();

    tracing::info!("🍽️ Tab Server starting...");

    // 3. Initialize application state (database, catalog, floor plan)
    let state = match AppState::initialize(&config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Initialization failed: {e:#}");
            return Err(e.into());
        }
    };

    let stats = state.manager.storage().get_stats()?;
    tracing::info!(
        environment = %config.environment,
        tables = config.fixed_table_count,
        menu_items = state.catalog.item_count(),
        events = stats.event_count,
        sequence = stats.current_sequence,
        epoch = %state.manager.epoch(),
        "Tab Server ready"
    );

    // 4. Park until shutdown
    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutdown signal received, stopping");

    Ok(())
}
