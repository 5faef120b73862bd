//! Application configuration for rook-ceph

use crate::cli::{Cli, OutputFormat};
use crate::error::{RcError, Result};
use crate::wait::{WaitBudget, DEFAULT_ATTEMPTS, DEFAULT_INTERVAL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Namespace used for both the operator and the CephCluster when nothing
/// else is configured
pub const DEFAULT_NAMESPACE: &str = "rook-ceph";

/// Application configuration stored in ~/.rook-ceph/config.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    /// Namespace where the CephCluster lives
    #[serde(default)]
    pub namespace: Option<String>,

    /// Namespace where the Rook operator runs
    #[serde(default)]
    pub operator_namespace: Option<String>,

    /// Pod wait tuning
    #[serde(default)]
    pub wait: WaitConfig,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WaitConfig {
    #[serde(default = "default_attempts")]
    pub attempts: u32,

    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            attempts: default_attempts(),
            interval_secs: default_interval_secs(),
        }
    }
}

impl From<WaitConfig> for WaitBudget {
    fn from(wait: WaitConfig) -> Self {
        WaitBudget::new(wait.attempts, Duration::from_secs(wait.interval_secs))
    }
}

fn default_attempts() -> u32 {
    DEFAULT_ATTEMPTS
}

fn default_interval_secs() -> u64 {
    DEFAULT_INTERVAL.as_secs()
}

/// Get the rook-ceph config directory (~/.rook-ceph)
pub fn config_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|h| h.join(".rook-ceph"))
        .ok_or_else(|| RcError::Config("Could not determine home directory".to_string()))
}

/// Load application config from ~/.rook-ceph/config.toml
pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_dir()?.join("config.toml"))
}

/// Load application config from `path`; a missing file yields the defaults
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if path.exists() {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)
            .map_err(|e| RcError::Config(format!("{}: {e}", path.display())))?;
        if config.wait.attempts == 0 {
            return Err(RcError::Config(format!(
                "{}: wait.attempts must be at least 1",
                path.display()
            )));
        }
        Ok(config)
    } else {
        Ok(AppConfig::default())
    }
}

/// Everything a command needs once flags and the config file are merged
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub kubeconfig: Option<PathBuf>,
    pub namespace: String,
    pub operator_namespace: String,
    pub output: OutputFormat,
    pub wait: WaitBudget,
}

impl Settings {
    /// Merge command-line flags over the config file over built-in defaults
    pub fn resolve(cli: &Cli, config: &AppConfig) -> Self {
        let pick = |flag: &Option<String>, file: &Option<String>| {
            flag.clone()
                .or_else(|| file.clone())
                .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string())
        };

        Self {
            kubeconfig: cli.kubeconfig.clone(),
            namespace: pick(&cli.namespace, &config.namespace),
            operator_namespace: pick(&cli.operator_namespace, &config.operator_namespace),
            output: cli.output,
            wait: config.wait.into(),
        }
    }

    /// Resolve against ~/.rook-ceph/config.toml
    pub fn load(cli: &Cli) -> Result<Self> {
        Ok(Self::resolve(cli, &load_config()?))
    }
}
