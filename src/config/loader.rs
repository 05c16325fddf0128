// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::*;
use crate::errors::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Service configuration, typically loaded from a YAML file.
///
/// Every section is optional; an empty document yields the defaults.
///
/// # Example
/// ```yaml
/// server:
///   host: 127.0.0.1
///   port: 8080
///   cors_allowed_origins: ["http://localhost:3000"]
/// storage:
///   backend: file
///   path: data/strings.json
/// logging:
///   level: debug
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub cors_allowed_origins: Option<Vec<String>>,
}

impl ServerConfig {
    pub fn get_host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn get_port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn get_cors_allowed_origins(&self) -> Vec<String> {
        self.cors_allowed_origins
            .clone()
            .unwrap_or_else(|| vec![DEFAULT_CORS_ORIGIN.to_string()])
    }
}

/// Which [`AnalysisStore`](crate::traits::AnalysisStore) to build.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    #[default]
    Memory,
    File,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::Memory => "memory",
            StorageBackend::File => "file",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    pub path: Option<PathBuf>,
}

impl StorageConfig {
    /// Snapshot location for the file backend.
    pub fn snapshot_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SNAPSHOT_PATH))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl LoggingConfig {
    pub fn get_level(&self) -> &str {
        self.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

impl Config {
    /// Apply `STRING_ANALYZER_*` overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary lookup.
    ///
    /// Setting a storage path also switches the backend to `file`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            self.server.host = Some(host);
        }

        if let Some(port) = lookup(ENV_PORT) {
            let parsed = port.trim().parse::<u16>().map_err(|_| ConfigError::InvalidEnv {
                name: ENV_PORT.to_string(),
                value: port.clone(),
            })?;
            self.server.port = Some(parsed);
        }

        if let Some(path) = lookup(ENV_STORAGE_PATH) {
            self.storage.backend = StorageBackend::File;
            self.storage.path = Some(PathBuf::from(path));
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = Some(level);
        }

        Ok(())
    }
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    // An empty file is a valid "all defaults" document
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    let cfg: Config = serde_yaml::from_str(&content)?;
    Ok(cfg)
}

/// Load and validate a config from a YAML file
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;
    crate::config::validate_config(&cfg)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::NamedTempFile;

    #[test]
    fn parse_full_config() {
        let yaml = r#"
server:
  host: 127.0.0.1
  port: 9000
  cors_allowed_origins: ["http://localhost:3000"]
storage:
  backend: file
  path: /tmp/strings.json
logging:
  level: debug
"#;

        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.server.get_host(), "127.0.0.1");
        assert_eq!(cfg.server.get_port(), 9000);
        assert_eq!(cfg.server.get_cors_allowed_origins(), vec!["http://localhost:3000"]);
        assert_eq!(cfg.storage.backend, StorageBackend::File);
        assert_eq!(cfg.storage.snapshot_path(), PathBuf::from("/tmp/strings.json"));
        assert_eq!(cfg.logging.get_level(), "debug");
    }

    #[test]
    fn missing_sections_use_defaults() {
        let cfg: Config = serde_yaml::from_str("server:\n  port: 8081\n").unwrap();

        assert_eq!(cfg.server.get_host(), DEFAULT_HOST);
        assert_eq!(cfg.server.get_port(), 8081);
        assert_eq!(cfg.server.get_cors_allowed_origins(), vec!["*"]);
        assert_eq!(cfg.storage.backend, StorageBackend::Memory);
        assert_eq!(cfg.storage.snapshot_path(), PathBuf::from(DEFAULT_SNAPSHOT_PATH));
        assert_eq!(cfg.logging.get_level(), DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn unknown_backend_is_a_parse_error() {
        let result: Result<Config, _> = serde_yaml::from_str("storage:\n  backend: redis\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "logging:\n  level: warn\n").unwrap();

        let cfg = load_and_validate_config(file.path()).unwrap();
        assert_eq!(cfg.logging.get_level(), "warn");
    }

    #[test]
    fn test_load_empty_file_gives_defaults() {
        let file = NamedTempFile::new().unwrap();

        let cfg = load_config(file.path()).unwrap();
        assert_eq!(cfg.server.get_port(), DEFAULT_PORT);
    }

    #[test]
    fn test_shipped_config_is_valid() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("configs/string-analyzer.yaml");

        let cfg = load_and_validate_config(path).unwrap();
        assert_eq!(cfg.server.get_port(), 8000);
        assert_eq!(cfg.storage.backend, StorageBackend::File);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config("/nonexistent/string-analyzer.yaml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_env_overrides() {
        let env = HashMap::from([
            (ENV_HOST, "127.0.0.1"),
            (ENV_PORT, "9999"),
            (ENV_STORAGE_PATH, "/var/lib/strings.json"),
            (ENV_LOG_LEVEL, "trace"),
        ]);

        let mut cfg = Config::default();
        cfg.apply_overrides(|name| env.get(name).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(cfg.server.get_host(), "127.0.0.1");
        assert_eq!(cfg.server.get_port(), 9999);
        assert_eq!(cfg.storage.backend, StorageBackend::File);
        assert_eq!(cfg.storage.snapshot_path(), PathBuf::from("/var/lib/strings.json"));
        assert_eq!(cfg.logging.get_level(), "trace");
    }

    #[test]
    fn test_invalid_port_override() {
        let mut cfg = Config::default();
        let result = cfg.apply_overrides(|name| (name == ENV_PORT).then(|| "eighty".to_string()));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnv { name, value }) if name == ENV_PORT && value == "eighty"
        ));
    }
}
