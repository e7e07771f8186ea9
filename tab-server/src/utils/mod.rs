//! Utility module - logging and validation helpers

pub mod logger;
pub mod validation;

pub use logger::{init_logger, init_logger_with_file};
