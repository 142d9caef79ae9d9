//! npm Registry adapter
//!
//! Fetches package metadata from the npm registry.
//! API endpoint: https://registry.npmjs.org/{package}

use crate::error::RegistryError;
use crate::registry::{HttpClient, PublishedVersion, RegistryClient, RegistrySnapshot};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};

/// npm registry base URL
pub const NPM_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// npm Registry adapter
pub struct NpmRegistry {
    client: HttpClient,
    base_url: String,
}

/// npm package metadata response
#[derive(Debug, Deserialize)]
struct NpmPackageResponse {
    /// Published versions in registry order
    #[serde(default)]
    versions: Map<String, Value>,
}

impl NpmRegistry {
    /// Create a new npm adapter against the public registry
    pub fn new(client: HttpClient) -> Self {
        Self::with_base_url(client, NPM_REGISTRY_URL)
    }

    /// Create a new npm adapter against a custom registry
    pub fn with_base_url(client: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Build the URL for a package
    fn build_url(&self, package: &str) -> String {
        format!("{}/{}", self.base_url, package)
    }
}

/// Turn the raw `versions` object into snapshot entries
///
/// `engines.node` is only honored when it is a string.
fn published_versions(versions: Map<String, Value>) -> Vec<PublishedVersion> {
    versions
        .into_iter()
        .map(|(version, meta)| {
            let node_engine = meta
                .get("engines")
                .and_then(|engines| engines.get("node"))
                .and_then(Value::as_str)
                .map(str::to_string);
            PublishedVersion {
                version,
                node_engine,
            }
        })
        .collect()
}

#[async_trait]
impl RegistryClient for NpmRegistry {
    fn registry_name(&self) -> &'static str {
        "npm"
    }

    async fn fetch_snapshot(&self, package: &str) -> Result<RegistrySnapshot, RegistryError> {
        let url = self.build_url(package);
        let response: NpmPackageResponse = self
            .client
            .get_json(&url, package, self.registry_name())
            .await?;

        Ok(RegistrySnapshot {
            package: package.to_string(),
            versions: published_versions(response.versions),
        })
    }
}
