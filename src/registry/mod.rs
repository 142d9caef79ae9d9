//! Registry adapters for fetching published package metadata
//!
//! This module provides:
//! - HTTP client shared foundation
//! - npm Registry adapter
//! - The "unavailable" sentinel callers get instead of errors

mod client;
mod npm;

pub use client::HttpClient;
pub use npm::{NpmRegistry, NPM_REGISTRY_URL};

use crate::error::RegistryError;
use async_trait::async_trait;

/// One published version and its declared Node.js engine range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedVersion {
    /// Version string as published
    pub version: String,
    /// `engines.node`, if declared
    pub node_engine: Option<String>,
}

impl PublishedVersion {
    /// Creates a new published version entry
    pub fn new(version: impl Into<String>, node_engine: Option<&str>) -> Self {
        Self {
            version: version.into(),
            node_engine: node_engine.map(str::to_string),
        }
    }
}

/// Registry metadata for one package, versions in registry order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrySnapshot {
    /// Package name
    pub package: String,
    /// Published versions
    pub versions: Vec<PublishedVersion>,
}

/// Outcome of a registry lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryLookup {
    /// Metadata was fetched
    Available(RegistrySnapshot),
    /// Metadata could not be fetched for any reason
    Unavailable,
}

/// Trait for registry clients
#[async_trait]
pub trait RegistryClient: Send + Sync {
    /// Get the registry name
    fn registry_name(&self) -> &'static str;

    /// Fetch the metadata snapshot for a package
    async fn fetch_snapshot(&self, package: &str) -> Result<RegistrySnapshot, RegistryError>;

    /// Fetch the metadata snapshot, degrading any failure to `Unavailable`
    async fn lookup(&self, package: &str) -> RegistryLookup {
        match self.fetch_snapshot(package).await {
            Ok(snapshot) => RegistryLookup::Available(snapshot),
            Err(e) => {
                tracing::warn!(
                    package,
                    registry = self.registry_name(),
                    error = %e,
                    "registry metadata unavailable"
                );
                RegistryLookup::Unavailable
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingRegistry;

    #[async_trait]
    impl RegistryClient for FailingRegistry {
        fn registry_name(&self) -> &'static str {
            "mock"
        }

        async fn fetch_snapshot(&self, package: &str) -> Result<RegistrySnapshot, RegistryError> {
            Err(RegistryError::package_not_found(package, "mock"))
        }
    }

    struct FixedRegistry;

    #[async_trait]
    impl RegistryClient for FixedRegistry {
        fn registry_name(&self) -> &'static str {
            "mock"
        }

        async fn fetch_snapshot(&self, package: &str) -> Result<RegistrySnapshot, RegistryError> {
            Ok(RegistrySnapshot {
                package: package.to_string(),
                versions: vec![PublishedVersion::new("1.0.0", Some(">=14"))],
            })
        }
    }

    #[tokio::test]
    async fn test_lookup_failure_is_unavailable() {
        let lookup = FailingRegistry.lookup("nope").await;
        assert_eq!(lookup, RegistryLookup::Unavailable);
    }

    #[tokio::test]
    async fn test_lookup_success_is_available() {
        match FixedRegistry.lookup("demo").await {
            RegistryLookup::Available(snapshot) => {
                assert_eq!(snapshot.package, "demo");
                assert_eq!(snapshot.versions.len(), 1);
            }
            RegistryLookup::Unavailable => panic!("expected snapshot"),
        }
    }
}
