use config::{Config, Environment, File};
pub use config::ConfigError;
use serde::Deserialize;

use crate::render::DEFAULT_TIME_FORMAT;

/// Main configuration struct
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    /// Admin API the dashboard reads from
    #[serde(default)]
    pub api: ApiConfig,
    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Rendering options
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the admin API (e.g. "http://127.0.0.1:8000")
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
        }
    }
}

fn default_api_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

#[derive(Debug, Deserialize)]
pub struct LogConfig {
    /// Log level: "error", "warn", "info", "debug", "trace"
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Serve the dashboard over HTTP instead of rendering once
    #[serde(default = "default_server_enabled")]
    pub enabled: bool,
    /// Server port (default 3000)
    #[serde(default = "default_server_port")]
    pub port: u16,
    /// Server host (default 127.0.0.1)
    #[serde(default = "default_server_host")]
    pub host: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            enabled: default_server_enabled(),
            port: default_server_port(),
            host: default_server_host(),
        }
    }
}

fn default_server_enabled() -> bool {
    false
}

fn default_server_port() -> u16 {
    3000
}

fn default_server_host() -> String {
    "127.0.0.1".to_string()
}

#[derive(Debug, Deserialize)]
pub struct RenderConfig {
    /// strftime pattern for alert timestamps
    #[serde(default = "default_time_format")]
    pub time_format: String,
    /// Where a one-shot render writes the page; stdout if unset
    #[serde(default)]
    pub output: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            time_format: default_time_format(),
            output: None,
        }
    }
}

fn default_time_format() -> String {
    DEFAULT_TIME_FORMAT.to_string()
}

impl Settings {
    /// Load settings from a configuration file.
    ///
    /// The file is optional; environment variables override it,
    /// e.g. `APP_API__BASE_URL=http://admin:8000`.
    pub fn new(config_path: &str) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(File::with_name(config_path).required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
