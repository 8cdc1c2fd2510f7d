//! Application configuration: defaults, then `doclens.ron`, then environment.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use doclens_engine::ClientSettings;
use serde::{Deserialize, Serialize};

use super::logging::LogDestination;

const CONFIG_FILENAME: &str = "doclens.ron";
const ENV_CONFIG: &str = "DOCLENS_CONFIG";
const ENV_ENDPOINT: &str = "BACKEND_DOCLENS_API_URL";
const ENV_TIMEOUT: &str = "DOCLENS_TIMEOUT_SECS";
const ENV_LOG: &str = "DOCLENS_LOG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Address of the analysis endpoint.
    pub endpoint: Option<String>,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub max_response_bytes: u64,
    pub log: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        let client = ClientSettings::default();
        Self {
            endpoint: None,
            timeout_secs: client.request_timeout.as_secs(),
            connect_timeout_secs: client.connect_timeout.as_secs(),
            max_response_bytes: client.max_response_bytes,
            log: LogDestination::default(),
        }
    }
}

impl AppConfig {
    /// Loads the configuration for this process.
    ///
    /// A config file named by `DOCLENS_CONFIG` must exist; the default
    /// `./doclens.ron` is optional.
    pub fn load() -> anyhow::Result<Self> {
        let (path, required) = match std::env::var_os(ENV_CONFIG) {
            Some(path) => (PathBuf::from(path), true),
            None => (PathBuf::from(CONFIG_FILENAME), false),
        };
        let mut config = Self::from_file(&path, required)?;
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    fn from_file(path: &Path, required: bool) -> anyhow::Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound && !required => {
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read {}", path.display()));
            }
        };
        ron::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<()> {
        if let Some(endpoint) = lookup(ENV_ENDPOINT).filter(|value| !value.trim().is_empty()) {
            self.endpoint = Some(endpoint.trim().to_string());
        }
        if let Some(raw) = lookup(ENV_TIMEOUT) {
            self.timeout_secs = raw
                .trim()
                .parse()
                .with_context(|| format!("{ENV_TIMEOUT} must be a whole number of seconds"))?;
        }
        if let Some(raw) = lookup(ENV_LOG) {
            self.log = raw.parse()?;
        }
        Ok(())
    }

    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            endpoint: self.endpoint.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.timeout_secs),
            max_response_bytes: self.max_response_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_use_two_minute_budget() {
        let config = AppConfig::default();
        assert_eq!(config.endpoint, None);
        assert_eq!(config.timeout_secs, 120);
        assert_eq!(
            config.client_settings().request_timeout,
            Duration::from_secs(120)
        );
    }

    #[test]
    fn missing_optional_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::from_file(&dir.path().join("absent.ron"), false).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppConfig::from_file(&dir.path().join("absent.ron"), true).is_err());
    }

    #[test]
    fn file_values_override_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"(endpoint: Some("http://localhost:8000/api/v1/run"), timeout_secs: 30, log: Both)"#
        )
        .unwrap();

        let config = AppConfig::from_file(file.path(), true).unwrap();

        assert_eq!(
            config.endpoint.as_deref(),
            Some("http://localhost:8000/api/v1/run")
        );
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.connect_timeout_secs, 10);
        assert_eq!(config.log, LogDestination::Both);
    }

    #[test]
    fn broken_file_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "(timeout_secs: \"soon\")").unwrap();

        let err = AppConfig::from_file(file.path(), true).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn environment_wins_over_file() {
        let mut config = AppConfig {
            endpoint: Some("http://file.example/run".to_string()),
            ..AppConfig::default()
        };

        config
            .apply_env(env(&[
                (ENV_ENDPOINT, " http://env.example/run "),
                (ENV_TIMEOUT, "45"),
                (ENV_LOG, "terminal"),
            ]))
            .unwrap();

        assert_eq!(config.endpoint.as_deref(), Some("http://env.example/run"));
        assert_eq!(config.timeout_secs, 45);
        assert_eq!(config.log, LogDestination::Terminal);
    }

    #[test]
    fn blank_endpoint_variable_is_ignored() {
        let mut config = AppConfig::default();
        config.apply_env(env(&[(ENV_ENDPOINT, "  ")])).unwrap();
        assert_eq!(config.endpoint, None);
    }

    #[test]
    fn bad_timeout_variable_is_rejected() {
        let mut config = AppConfig::default();
        assert!(config.apply_env(env(&[(ENV_TIMEOUT, "two minutes")])).is_err());
    }
}
