// Configuration module entry point
// Loads typed configuration with programmatic defaults

mod types;

use std::net::SocketAddr;

pub use types::{Config, LoggingConfig, ServerConfig};

impl Config {
    /// Load configuration from `testserver.toml` next to the binary.
    ///
    /// The file is optional; with nothing present the defaults below apply
    /// unchanged. There are no environment or CLI sources.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("testserver")
    }

    /// Load configuration from the given file path (without extension)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("server.backlog", 1024)?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "common")?
            .set_default("logging.show_headers", false)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config_file() {
        let cfg = Config::load_from("no_such_config_file").unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.backlog, 1024);
        assert_eq!(cfg.server.workers, None);
        assert!(cfg.logging.access_log);
        assert_eq!(cfg.logging.access_log_format, "common");
        assert!(!cfg.logging.show_headers);
    }

    #[test]
    fn test_socket_addr_from_defaults() {
        let cfg = Config::load_from("no_such_config_file").unwrap();
        let addr = cfg.socket_addr().unwrap();
        assert!(addr.ip().is_unspecified());
        assert_eq!(addr.port(), 8080);
    }
}
