//! Core module - server configuration and state
//!
//! # Structure
//!
//! - [`Config`] - server configuration
//! - [`AppState`] - application state

pub mod config;
pub mod state;

pub use config::Config;
pub use state::AppState;
