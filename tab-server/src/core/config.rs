use std::path::{Path, PathBuf};

/// Server configuration
///
/// # Environment variables
///
/// Every setting can be overridden through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | /var/lib/tab-server | Working directory (database, logs) |
/// | FIXED_TABLE_COUNT | 15 | Floor-plan tables registered at startup (1..=100) |
/// | LOG_LEVEL | info | Log verbosity |
/// | LOG_DIR | (unset) | Directory for daily log files; console only when unset |
/// | ENVIRONMENT | development | Runtime environment |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/tab-server FIXED_TABLE_COUNT=20 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for the database and log files
    pub work_dir: String,
    /// Number of fixed floor-plan tables registered at startup
    pub fixed_table_count: u32,
    /// Log verbosity: trace | debug | info | warn | error
    pub log_level: String,
    /// Directory for rolling log files (console only when unset)
    pub log_dir: Option<String>,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/tab-server".into()),
            fixed_table_count: std::env::var("FIXED_TABLE_COUNT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(15),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override selected settings
    ///
    /// Intended for tests.
    pub fn with_overrides(work_dir: impl Into<String>, fixed_table_count: u32) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.fixed_table_count = fixed_table_count;
        config
    }

    /// Path of the tab database inside the working directory
    pub fn database_path(&self) -> PathBuf {
        Path::new(&self.work_dir).join("tabs.redb")
    }

    /// Create the working directory if it does not exist yet
    pub fn ensure_work_dir(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.work_dir)
    }

    /// Whether this is a production environment
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Whether this is a development environment
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
