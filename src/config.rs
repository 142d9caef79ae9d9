//! Configuration file support and effective settings
//!
//! Settings come from three layers, highest priority first:
//! 1. CLI arguments
//! 2. `depreport.toml` (in the scanned root, or given with `--config`)
//! 3. Built-in defaults

use crate::analyzer::{default_drift_command, default_outdated_command};
use crate::cli::{split_command, CliArgs};
use crate::domain::{dir_basename, NodeRuntime, DEFAULT_NODE_MAJORS};
use crate::error::{AppError, ConfigError, IoError};
use crate::manifest::default_excluded_dirs;
use crate::registry::NPM_REGISTRY_URL;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file looked up in the scanned root
pub const CONFIG_FILENAME: &str = "depreport.toml";

/// Top-level config file schema
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub node_versions: Option<Vec<u64>>,
    pub exclude_dirs: Option<Vec<String>>,
    pub registry_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub drift_command: Option<Vec<String>>,
    pub outdated_command: Option<Vec<String>>,
    pub output_dir: Option<PathBuf>,
    /// Captures unknown keys for warnings
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, toml::Value>,
}

/// Load config from an explicit path
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config: ConfigFile = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    for key in config.unknown_fields.keys() {
        tracing::warn!(path = %path.display(), key = %key, "unknown config field will be ignored");
    }

    Ok(config)
}

/// Look for `depreport.toml` in a directory; `None` if absent
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>, ConfigError> {
    let path = dir.join(CONFIG_FILENAME);
    if !path.is_file() {
        return Ok(None);
    }
    load_config_from_path(&path).map(Some)
}

fn default_node_majors() -> Vec<u64> {
    DEFAULT_NODE_MAJORS.to_vec()
}

/// Effective settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Canonical root directory
    pub root: PathBuf,
    /// Basename of the root, used for module labels and the report name
    pub root_name: String,
    /// Where the report is written
    pub output_dir: PathBuf,
    /// Runtime columns, in order
    pub node_versions: Vec<NodeRuntime>,
    /// Directory names skipped while locating manifests
    pub exclude_dirs: Vec<String>,
    /// npm registry base URL
    pub registry_url: String,
    /// Registry request timeout
    pub timeout: Option<Duration>,
    /// Drift analysis command line
    pub drift_command: Vec<String>,
    /// Outdated check command line
    pub outdated_command: Vec<String>,
}

impl Settings {
    /// Resolve settings from CLI arguments, config file and defaults
    pub fn resolve(args: &CliArgs) -> Result<Self, AppError> {
        if !args.path.is_dir() {
            return Err(IoError::directory_not_found(&args.path).into());
        }
        let root = args
            .path
            .canonicalize()
            .map_err(|e| IoError::generic(&args.path, e))?;
        let root_name = dir_basename(&root).unwrap_or_else(|| "root".to_string());

        let file = match &args.config {
            Some(path) => load_config_from_path(path)?,
            None => discover_config(&root)?.unwrap_or_default(),
        };

        Self::merge(args, file, root, root_name)
    }

    fn merge(
        args: &CliArgs,
        file: ConfigFile,
        root: PathBuf,
        root_name: String,
    ) -> Result<Self, AppError> {
        let node_versions = if !args.node_versions.is_empty() {
            args.node_versions.clone()
        } else {
            file.node_versions.unwrap_or_else(default_node_majors)
        };

        let exclude_dirs = if !args.exclude_dir.is_empty() {
            args.exclude_dir.clone()
        } else {
            file.exclude_dirs.unwrap_or_else(default_excluded_dirs)
        };

        let drift_command = match &args.drift_command {
            Some(cmd) => split_command(cmd),
            None => file.drift_command.unwrap_or_else(default_drift_command),
        };

        let outdated_command = match &args.outdated_command {
            Some(cmd) => split_command(cmd),
            None => file.outdated_command.unwrap_or_else(default_outdated_command),
        };

        let timeout = args
            .timeout
            .or_else(|| file.timeout_secs.map(Duration::from_secs));

        let settings = Self {
            root,
            root_name,
            output_dir: args
                .output_dir
                .clone()
                .or(file.output_dir)
                .unwrap_or_else(|| PathBuf::from(".")),
            node_versions: node_versions.into_iter().map(NodeRuntime).collect(),
            exclude_dirs,
            registry_url: args
                .registry_url
                .clone()
                .or(file.registry_url)
                .unwrap_or_else(|| NPM_REGISTRY_URL.to_string()),
            timeout,
            drift_command,
            outdated_command,
        };

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.node_versions.is_empty() {
            return Err(ConfigError::invalid_value(
                "node_versions",
                "at least one Node.js major is required",
            ));
        }
        if self.drift_command.is_empty() {
            return Err(ConfigError::invalid_value(
                "drift_command",
                "must not be empty",
            ));
        }
        if self.outdated_command.is_empty() {
            return Err(ConfigError::invalid_value(
                "outdated_command",
                "must not be empty",
            ));
        }
        if self.timeout == Some(Duration::ZERO) {
            return Err(ConfigError::invalid_value(
                "timeout_secs",
                "must be at least 1 second",
            ));
        }
        Ok(())
    }
}
