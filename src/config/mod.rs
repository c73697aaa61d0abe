// Configuration module entry point
// Application configuration and the shared request-handler state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{
    CatalogConfig, Config, HealthConfig, HttpConfig, LoggingConfig, PerformanceConfig,
    RoutesConfig, ServerConfig,
};

impl Config {
    /// Load configuration from the default "config.toml" in the working
    /// directory, if present.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// A missing file is not an error: coded defaults apply, overridable via
    /// `CAFE_*` environment variables.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("CAFE"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.enable_cors", false)?
            .set_default("http.max_body_size", 10_485_760)? // 10MB
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
        let cfg = Config::load_from("does-not-exist").expect("defaults suffice");
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.routes.cafe_path, "/cafe");
        assert_eq!(cfg.routes.health.liveness_path, "/healthz");
        assert!(cfg.catalog.file.is_none());
        assert_eq!(cfg.performance.shutdown_grace, 5);
    }

    #[test]
    fn test_socket_addr_round_trip() {
        let cfg = Config::load_from("does-not-exist").expect("defaults suffice");
        let addr = cfg.socket_addr().expect("default address parses");
        assert_eq!(addr.port(), 8080);
    }
}
