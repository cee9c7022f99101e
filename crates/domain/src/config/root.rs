use serde::{Deserialize, Serialize};

use super::dnstap::DnstapConfig;
use super::errors::ConfigError;
use super::flow::FlowConfig;
use super::logging::LoggingConfig;
use super::policy::PolicyConfig;

const LOCAL_CONFIG_PATH: &str = "dnsflow.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/dnsflow/config.toml";

/// Main configuration structure for dnsflow
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// dnstap socket and frame queue
    #[serde(default)]
    pub dnstap: DnstapConfig,

    /// Switch flow installation
    #[serde(default)]
    pub flow: FlowConfig,

    /// Egress policy refresh and admission behavior
    #[serde(default)]
    pub policy: PolicyConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dnsflow.toml in current directory
    /// 3. /etc/dnsflow/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(socket) = overrides.socket_path {
            self.dnstap.socket_path = socket;
        }
        if let Some(node) = overrides.node {
            self.policy.node = Some(node);
        }
        if let Some(inventory) = overrides.inventory_path {
            self.policy.inventory_path = inventory;
        }
        if let Some(bridge) = overrides.bridge {
            self.flow.bridge = bridge;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dnstap.socket_path.is_empty() {
            return Err(ConfigError::Validation(
                "dnstap socket path cannot be empty".to_string(),
            ));
        }

        if self.dnstap.queue_capacity == 0 {
            return Err(ConfigError::Validation(
                "Frame queue capacity cannot be 0".to_string(),
            ));
        }

        if self.policy.refresh_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "Policy refresh interval cannot be 0".to_string(),
            ));
        }

        if self.flow.bridge.is_empty() {
            return Err(ConfigError::Validation(
                "Flow bridge name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| std::path::Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub socket_path: Option<String>,
    pub node: Option<String>,
    pub inventory_path: Option<String>,
    pub bridge: Option<String>,
    pub log_level: Option<String>,
}
