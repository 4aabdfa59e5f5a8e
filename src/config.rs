//! Configuration module for Filedrop.

use serde::Deserialize;
use std::path::Path;

use crate::{FiledropError, Result};

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Upload storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadsConfig {
    /// Directory where uploaded files are stored and served from.
    #[serde(default = "default_upload_dir")]
    pub dir: String,
    /// Maximum number of files accepted by a single upload request.
    #[serde(default = "default_max_files")]
    pub max_files: usize,
    /// Maximum size of a single uploaded file in bytes.
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
}

fn default_upload_dir() -> String {
    "/app/uploads".to_string()
}

fn default_max_files() -> usize {
    20
}

fn default_max_file_size() -> u64 {
    2 * 1024 * 1024 * 1024 // 2GB
}

impl Default for UploadsConfig {
    fn default() -> Self {
        Self {
            dir: default_upload_dir(),
            max_files: default_max_files(),
            max_file_size: default_max_file_size(),
        }
    }
}

/// Frontend bundle configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FrontendConfig {
    /// Directory containing the frontend bundle (must contain `index.html`).
    #[serde(default = "default_frontend_dir")]
    pub dir: String,
}

fn default_frontend_dir() -> String {
    "web".to_string()
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            dir: default_frontend_dir(),
        }
    }
}

/// Web layer configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct WebConfig {
    /// CORS allowed origins. No CORS layer is installed when empty.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/filedrop.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Upload storage configuration.
    #[serde(default)]
    pub uploads: UploadsConfig,
    /// Frontend bundle configuration.
    #[serde(default)]
    pub frontend: FrontendConfig,
    /// Web layer configuration.
    #[serde(default)]
    pub web: WebConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(FiledropError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| FiledropError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `PORT`: Override the listening port
    /// - `FILEDROP_UPLOAD_DIR`: Override the upload directory
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(port) = lookup("PORT") {
            match port.trim().parse::<u16>() {
                Ok(port) => self.server.port = port,
                Err(_) => eprintln!("Ignoring invalid PORT value: {port:?}"),
            }
        }

        if let Some(dir) = lookup("FILEDROP_UPLOAD_DIR") {
            if !dir.is_empty() {
                self.uploads.dir = dir;
            }
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.uploads.dir.trim().is_empty() {
            return Err(FiledropError::Validation(
                "uploads.dir must not be empty".to_string(),
            ));
        }
        if self.uploads.max_files == 0 {
            return Err(FiledropError::Validation(
                "uploads.max_files must be at least 1".to_string(),
            ));
        }
        if self.uploads.max_file_size == 0 {
            return Err(FiledropError::Validation(
                "uploads.max_file_size must be at least 1 byte".to_string(),
            ));
        }
        Ok(())
    }

    /// Socket address string the server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
