//! Server configuration module

use clap::Parser;

use crate::config::{logging::LoggingConfig, server::ServerRuntimeConfig};

pub(crate) mod logging;
pub(crate) mod server;

/// Tally JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "tally-json", about = "Tally JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::config::logging::LogFormat;

    use super::*;

    #[test]
    fn test_explicit_arguments_override_defaults() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "tally-json",
            "-H",
            "127.0.0.1",
            "--port",
            "4000",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "--slow-request-threshold-ms",
            "250",
        ])?;

        assert_eq!(config.socket_addr(), "127.0.0.1:4000");
        assert_eq!(config.logging.log_level, "debug");
        assert!(matches!(config.logging.log_format, LogFormat::Json));
        assert_eq!(config.logging.slow_request_threshold_ms, 250);

        Ok(())
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result = ServerConfig::try_parse_from(["tally-json", "--port", "not-a-port"]);

        assert!(result.is_err(), "expected a parse error for a bad port");
    }

    #[test]
    fn test_unknown_log_format_is_rejected() {
        let result = ServerConfig::try_parse_from(["tally-json", "--log-format", "xml"]);

        assert!(result.is_err(), "expected a parse error for a bad log format");
    }
}
