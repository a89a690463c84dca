//! Host Configuration
//!
//! Handles loading configuration for the dashboard host from TOML files and
//! environment variables. Environment variables override file values.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Host configuration, one table per concern
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Static host configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the compiled dashboard bundle (`index.html`, wasm, js)
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// Allowed CORS origins; empty means permissive
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8084
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("crime-foresight-ui/dist")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// `host:port` bind address
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `pretty` for development, `json` for production
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }

    /// Filter directive used when `RUST_LOG` is unset
    pub fn default_directive(&self) -> String {
        format!("crime_foresight={},tower_http=debug", self.level)
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("crime-foresight").join("config.toml")),
            Some(PathBuf::from("./crime-foresight.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup("CRIME_FORESIGHT_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("CRIME_FORESIGHT_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!("Ignoring invalid CRIME_FORESIGHT_PORT: {}", port),
            }
        }
        if let Some(dir) = lookup("CRIME_FORESIGHT_STATIC_DIR") {
            self.server.static_dir = PathBuf::from(dir);
        }

        if let Some(level) = lookup("CRIME_FORESIGHT_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("CRIME_FORESIGHT_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Invalid TOML in {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Commented template matching [`Config::default`]
pub fn generate_default_config() -> String {
    r#"# Crime Foresight Configuration
#
# Environment variables override these settings:
# - CRIME_FORESIGHT_HOST
# - CRIME_FORESIGHT_PORT
# - CRIME_FORESIGHT_STATIC_DIR
# - CRIME_FORESIGHT_LOG_LEVEL
# - CRIME_FORESIGHT_LOG_FORMAT

[server]
# Address to bind the dashboard host to
host = "127.0.0.1"
port = 8084

# Compiled dashboard bundle (output of `trunk build` in crime-foresight-ui)
static_dir = "crime-foresight-ui/dist"

# Allowed CORS origins (empty = permissive)
cors_origins = []

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
