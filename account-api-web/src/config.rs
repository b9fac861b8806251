//! Server configuration, loaded from a TOML file.
//!
//! Every key is optional; missing sections fall back to their defaults.

use std::path::{Path, PathBuf};

use account_api_core::error::{CoreError, CoreResult};
use serde::Deserialize;

/// Environment variable holding the configuration file path.
pub const CONFIG_PATH_ENV: &str = "ACCOUNT_API_CONFIG";

/// Used when `ACCOUNT_API_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub log: LogConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Actix worker threads. `None` means one per logical CPU.
    pub workers: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            workers: None,
        }
    }
}

impl ServerConfig {
    /// Worker count with the CPU-count fallback applied.
    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(num_cpus::get)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
    /// Write to a daily-rolling file in this directory instead of stdout.
    pub directory: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            directory: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Memory,
    Sqlite,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// SQLite database file. Ignored by the memory backend.
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Memory,
            path: PathBuf::from("data/accounts.db"),
        }
    }
}

impl AppConfig {
    /// Load from the path in `ACCOUNT_API_CONFIG`, or `config.toml`.
    pub fn load() -> CoreResult<Self> {
        let path = std::env::var_os(CONFIG_PATH_ENV)
            .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
        Self::load_from(&path)
    }

    /// Load from `path`. A missing file yields the defaults; an unreadable or
    /// invalid one is an error.
    pub fn load_from(path: &Path) -> CoreResult<Self> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(CoreError::ValidationError(format!(
                    "Failed to read config {}: {e}",
                    path.display()
                )));
            }
        };
        Self::parse(&raw)
    }

    /// Parse and validate a TOML document.
    pub fn parse(raw: &str) -> CoreResult<Self> {
        let config: Self = toml::from_str(raw)
            .map_err(|e| CoreError::ValidationError(format!("Invalid config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> CoreResult<()> {
        if self.server.port == 0 {
            return Err(CoreError::ValidationError(
                "server.port must be non-zero".to_string(),
            ));
        }
        if self.server.workers == Some(0) {
            return Err(CoreError::ValidationError(
                "server.workers must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
