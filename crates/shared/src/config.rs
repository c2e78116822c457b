//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// PDF converter configuration.
    #[serde(default)]
    pub pdf: PdfConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// PDF converter configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PdfConfig {
    /// Path to the wkhtmltopdf binary.
    #[serde(default = "default_converter_binary")]
    pub converter_binary: String,
    /// Conversion timeout in seconds.
    #[serde(default = "default_converter_timeout")]
    pub converter_timeout_secs: u64,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            converter_binary: default_converter_binary(),
            converter_timeout_secs: default_converter_timeout(),
        }
    }
}

fn default_converter_binary() -> String {
    "wkhtmltopdf".to_string()
}

fn default_converter_timeout() -> u64 {
    60
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("DAYBRIEF").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_config_defaults() {
        let pdf = PdfConfig::default();
        assert_eq!(pdf.converter_binary, "wkhtmltopdf");
        assert_eq!(pdf.converter_timeout_secs, 60);
    }

    #[test]
    fn test_server_defaults_applied() {
        let cfg: ServerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 8080);
    }
}
