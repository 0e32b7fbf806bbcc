// Configuration types module
// Defines the configuration data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Accept backlog handed to `listen(2)`
    pub backlog: i32,
    /// Tokio worker thread count; `None` uses the runtime default
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    /// Access log format: combined, common, or json
    pub access_log_format: String,
    pub show_headers: bool,
}
