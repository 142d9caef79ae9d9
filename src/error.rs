//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: Issues with reading or parsing package.json files
//! - RegistryError: Issues with npm registry communication
//! - AnalyzerError: Issues with the external drift/outdated tools; these
//!   only ever skip a manifest and never reach `AppError`
//! - ConfigError: Issues with CLI or config file settings
//! - IoError: File system operation failures

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Package registry related errors
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO related errors
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Errors related to manifest file operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error
    #[error("failed to parse JSON in {path}: {message}")]
    JsonParseError { path: PathBuf, message: String },
}

/// Errors related to package registry communication
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Package not found in registry
    #[error("package '{package}' not found in {registry} registry")]
    PackageNotFound { package: String, registry: String },

    /// Network request failed
    #[error("failed to fetch package '{package}' from {registry}: {message}")]
    NetworkError {
        package: String,
        registry: String,
        message: String,
    },

    /// Invalid response from registry
    #[error("invalid response from {registry} for '{package}': {message}")]
    InvalidResponse {
        package: String,
        registry: String,
        message: String,
    },

    /// Timeout
    #[error("timeout while fetching '{package}' from {registry}")]
    Timeout { package: String, registry: String },
}

/// Errors related to the external analysis tools
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// The command could not be started
    #[error("failed to run `{command}` in {dir}: {source}")]
    SpawnFailed {
        command: String,
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The command ran but exited unsuccessfully
    #[error("`{command}` exited with {status} in {dir}: {stderr}")]
    CommandFailed {
        command: String,
        dir: PathBuf,
        status: String,
        stderr: String,
    },

    /// The command output could not be decoded
    #[error("invalid output from `{command}` in {dir}: {message}")]
    InvalidOutput {
        command: String,
        dir: PathBuf,
        message: String,
    },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for the expected schema
    #[error("failed to parse config file {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    /// A setting has an unusable value
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors related to IO operations
#[derive(Error, Debug)]
pub enum IoError {
    /// Directory not found
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Generic IO error
    #[error("IO error at {path}: {source}")]
    Generic {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ManifestError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new JsonParseError
    pub fn json_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::JsonParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl RegistryError {
    /// Creates a new PackageNotFound error
    pub fn package_not_found(package: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::PackageNotFound {
            package: package.into(),
            registry: registry.into(),
        }
    }

    /// Creates a new NetworkError
    pub fn network_error(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::NetworkError {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::InvalidResponse {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(package: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::Timeout {
            package: package.into(),
            registry: registry.into(),
        }
    }
}

impl AnalyzerError {
    /// Creates a new SpawnFailed error
    pub fn spawn_failed(
        command: impl Into<String>,
        dir: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        AnalyzerError::SpawnFailed {
            command: command.into(),
            dir: dir.into(),
            source,
        }
    }

    /// Creates a new CommandFailed error
    pub fn command_failed(
        command: impl Into<String>,
        dir: impl Into<PathBuf>,
        status: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        AnalyzerError::CommandFailed {
            command: command.into(),
            dir: dir.into(),
            status: status.into(),
            stderr: stderr.into(),
        }
    }

    /// Creates a new InvalidOutput error
    pub fn invalid_output(
        command: impl Into<String>,
        dir: impl Into<PathBuf>,
        message: impl Into<String>,
    ) -> Self {
        AnalyzerError::InvalidOutput {
            command: command.into(),
            dir: dir.into(),
            message: message.into(),
        }
    }
}

impl ConfigError {
    /// Creates a new InvalidValue error
    pub fn invalid_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }
}

impl IoError {
    /// Creates a new DirectoryNotFound error
    pub fn directory_not_found(path: impl Into<PathBuf>) -> Self {
        IoError::DirectoryNotFound { path: path.into() }
    }

    /// Creates a new Generic IO error
    pub fn generic(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IoError::Generic {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_error_json_parse() {
        let err = ManifestError::json_parse_error("/path/to/package.json", "unexpected token");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to parse JSON"));
        assert!(msg.contains("unexpected token"));
        assert!(msg.contains("package.json"));
    }

    #[test]
    fn test_manifest_error_read() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = ManifestError::read_error("/path/to/package.json", io);
        assert!(format!("{}", err).contains("failed to read manifest file"));
    }

    #[test]
    fn test_registry_error_package_not_found() {
        let err = RegistryError::package_not_found("nonexistent-package", "npm");
        let msg = format!("{}", err);
        assert!(msg.contains("package 'nonexistent-package' not found"));
        assert!(msg.contains("npm"));
    }

    #[test]
    fn test_registry_error_network() {
        let err = RegistryError::network_error("lodash", "npm", "connection refused");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to fetch"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn test_registry_error_timeout() {
        let err = RegistryError::timeout("react", "npm");
        let msg = format!("{}", err);
        assert!(msg.contains("timeout"));
        assert!(msg.contains("react"));
    }

    #[test]
    fn test_analyzer_error_command_failed() {
        let err = AnalyzerError::command_failed(
            "npx libyear --json",
            "/repo/app",
            "exit status: 1",
            "boom",
        );
        let msg = format!("{}", err);
        assert!(msg.contains("npx libyear --json"));
        assert!(msg.contains("/repo/app"));
        assert!(msg.contains("boom"));
    }

    #[test]
    fn test_analyzer_error_invalid_output() {
        let err = AnalyzerError::invalid_output("npm-check", "/repo", "expected value");
        assert!(format!("{}", err).contains("invalid output"));
    }

    #[test]
    fn test_config_error_invalid_value() {
        let err = ConfigError::invalid_value("node_versions", "must not be empty");
        let msg = format!("{}", err);
        assert!(msg.contains("node_versions"));
        assert!(msg.contains("must not be empty"));
    }

    #[test]
    fn test_io_error_directory_not_found() {
        let err = IoError::directory_not_found("/path/to/missing");
        let msg = format!("{}", err);
        assert_eq!(msg, "directory not found: /path/to/missing");
    }

    #[test]
    fn test_app_error_from_manifest_error() {
        let app_err: AppError = ManifestError::json_parse_error("/p", "bad").into();
        assert!(format!("{}", app_err).contains("failed to parse JSON"));
    }

    #[test]
    fn test_app_error_from_registry_error() {
        let app_err: AppError = RegistryError::timeout("lodash", "npm").into();
        assert!(matches!(app_err, AppError::Registry(_)));
        assert!(format!("{}", app_err).contains("lodash"));
    }

    #[test]
    fn test_app_error_from_io_error() {
        let app_err: AppError = IoError::directory_not_found("/missing").into();
        assert!(format!("{}", app_err).contains("directory not found"));
    }

    #[test]
    fn test_error_debug_trait() {
        let err = IoError::directory_not_found("/test");
        let debug = format!("{:?}", err);
        assert!(debug.contains("DirectoryNotFound"));
    }
}
