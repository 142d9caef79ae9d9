//! Node.js compatibility resolution
//!
//! For every target runtime major, picks the last published version (in
//! registry order) whose `engines.node` range intersects the runtime's range.
//! Registry order is not guaranteed to be chronological, so the pick is not
//! necessarily the newest release.

use crate::domain::NodeRuntime;
use crate::registry::{PublishedVersion, RegistryClient, RegistryLookup, RegistrySnapshot};
use node_semver::Range;
use std::fmt;

/// Compatibility of one dependency with one runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeCompatibility {
    /// Last published version compatible with the runtime
    Version(String),
    /// No published version declares a compatible engine range
    NotInformed,
    /// Registry metadata could not be fetched
    Unavailable,
}

impl fmt::Display for RuntimeCompatibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeCompatibility::Version(v) => write!(f, "{}", v),
            RuntimeCompatibility::NotInformed => write!(f, "Not informed"),
            RuntimeCompatibility::Unavailable => write!(f, "N/A"),
        }
    }
}

/// Compatibility of one dependency with every target runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityResult {
    /// Dependency name
    pub dependency: String,
    /// One entry per target runtime, in target order
    pub runtimes: Vec<(NodeRuntime, RuntimeCompatibility)>,
}

impl CompatibilityResult {
    /// Result used when the registry could not be reached
    pub fn unavailable(dependency: impl Into<String>, runtimes: &[NodeRuntime]) -> Self {
        Self {
            dependency: dependency.into(),
            runtimes: runtimes
                .iter()
                .map(|r| (*r, RuntimeCompatibility::Unavailable))
                .collect(),
        }
    }

    /// Compatibility for a single runtime
    pub fn get(&self, runtime: NodeRuntime) -> Option<&RuntimeCompatibility> {
        self.runtimes
            .iter()
            .find(|(r, _)| *r == runtime)
            .map(|(_, c)| c)
    }
}

/// Compute compatibility for every runtime from a registry snapshot
pub fn resolve_snapshot(
    snapshot: &RegistrySnapshot,
    runtimes: &[NodeRuntime],
) -> CompatibilityResult {
    let engines: Vec<(&str, Option<Range>)> = snapshot
        .versions
        .iter()
        .map(|v| (v.version.as_str(), parse_engine(&snapshot.package, v)))
        .collect();

    let runtimes = runtimes
        .iter()
        .map(|runtime| (*runtime, latest_compatible(&engines, *runtime)))
        .collect();

    CompatibilityResult {
        dependency: snapshot.package.clone(),
        runtimes,
    }
}

/// Versions without a parseable engine range never match
fn parse_engine(package: &str, version: &PublishedVersion) -> Option<Range> {
    let raw = version.node_engine.as_deref()?;
    match Range::parse(raw) {
        Ok(range) => Some(range),
        Err(e) => {
            tracing::debug!(
                package = %package,
                version = %version.version,
                engine = raw,
                error = %e,
                "unparseable engines.node range"
            );
            None
        }
    }
}

fn latest_compatible(
    engines: &[(&str, Option<Range>)],
    runtime: NodeRuntime,
) -> RuntimeCompatibility {
    let Ok(runtime_range) = Range::parse(runtime.range()) else {
        return RuntimeCompatibility::NotInformed;
    };

    engines
        .iter()
        .rev()
        .find(|(_, engine)| {
            engine
                .as_ref()
                .is_some_and(|engine| runtime_range.intersect(engine).is_some())
        })
        .map(|(version, _)| RuntimeCompatibility::Version(version.to_string()))
        .unwrap_or(RuntimeCompatibility::NotInformed)
}

/// Resolves Node.js compatibility through a registry client
pub struct CompatibilityResolver<'a> {
    registry: &'a dyn RegistryClient,
    runtimes: Vec<NodeRuntime>,
}

impl<'a> CompatibilityResolver<'a> {
    /// Create a resolver for the given target runtimes
    pub fn new(registry: &'a dyn RegistryClient, runtimes: Vec<NodeRuntime>) -> Self {
        Self { registry, runtimes }
    }

    /// Target runtimes in column order
    pub fn runtimes(&self) -> &[NodeRuntime] {
        &self.runtimes
    }

    /// Resolve compatibility for one dependency with a single registry fetch
    pub async fn resolve(&self, dependency: &str) -> CompatibilityResult {
        match self.registry.lookup(dependency).await {
            RegistryLookup::Available(snapshot) => resolve_snapshot(&snapshot, &self.runtimes),
            RegistryLookup::Unavailable => {
                CompatibilityResult::unavailable(dependency, &self.runtimes)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegistryError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn snapshot(versions: Vec<PublishedVersion>) -> RegistrySnapshot {
        RegistrySnapshot {
            package: "demo".to_string(),
            versions,
        }
    }

    fn two_version_snapshot() -> RegistrySnapshot {
        snapshot(vec![
            PublishedVersion::new("1.0.0", Some(">=12 <16")),
            PublishedVersion::new("2.0.0", Some(">=16")),
        ])
    }

    #[test]
    fn test_runtime_18_picks_2_0_0() {
        let result = resolve_snapshot(&two_version_snapshot(), &[NodeRuntime(18)]);
        assert_eq!(
            result.get(NodeRuntime(18)),
            Some(&RuntimeCompatibility::Version("2.0.0".to_string()))
        );
    }

    #[test]
    fn test_runtime_14_picks_1_0_0() {
        let result = resolve_snapshot(&two_version_snapshot(), &[NodeRuntime(14)]);
        assert_eq!(
            result.get(NodeRuntime(14)),
            Some(&RuntimeCompatibility::Version("1.0.0".to_string()))
        );
    }

    #[test]
    fn test_all_default_runtimes() {
        let result = resolve_snapshot(&two_version_snapshot(), &NodeRuntime::defaults());
        let rendered: Vec<String> = result.runtimes.iter().map(|(_, c)| c.to_string()).collect();
        assert_eq!(rendered, vec!["1.0.0", "2.0.0", "2.0.0", "2.0.0"]);
    }

    #[test]
    fn test_last_in_registry_order_wins() {
        let result = resolve_snapshot(
            &snapshot(vec![
                PublishedVersion::new("3.0.0", Some(">=14")),
                PublishedVersion::new("2.5.0", Some(">=14")),
            ]),
            &[NodeRuntime(18)],
        );
        assert_eq!(
            result.get(NodeRuntime(18)),
            Some(&RuntimeCompatibility::Version("2.5.0".to_string()))
        );
    }

    #[test]
    fn test_missing_engine_is_incompatible() {
        let result = resolve_snapshot(
            &snapshot(vec![PublishedVersion::new("1.0.0", None)]),
            &[NodeRuntime(18)],
        );
        assert_eq!(
            result.get(NodeRuntime(18)),
            Some(&RuntimeCompatibility::NotInformed)
        );
    }

    #[test]
    fn test_unparseable_engine_is_incompatible() {
        let result = resolve_snapshot(
            &snapshot(vec![PublishedVersion::new("1.0.0", Some("banana"))]),
            &[NodeRuntime(18)],
        );
        assert_eq!(
            result.get(NodeRuntime(18)),
            Some(&RuntimeCompatibility::NotInformed)
        );
    }

    #[test]
    fn test_no_match_is_not_informed() {
        let result = resolve_snapshot(
            &snapshot(vec![PublishedVersion::new("0.1.0", Some("<10"))]),
            &[NodeRuntime(20)],
        );
        let rendered = result.get(NodeRuntime(20)).unwrap().to_string();
        assert_eq!(rendered, "Not informed");
    }

    #[test]
    fn test_unavailable_renders_na() {
        let result = CompatibilityResult::unavailable("demo", &NodeRuntime::defaults());
        assert_eq!(result.runtimes.len(), 4);
        assert!(result.runtimes.iter().all(|(_, c)| c.to_string() == "N/A"));
    }

    struct CountingRegistry {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl RegistryClient for CountingRegistry {
        fn registry_name(&self) -> &'static str {
            "mock"
        }

        async fn fetch_snapshot(&self, package: &str) -> Result<RegistrySnapshot, RegistryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(RegistryError::network_error(package, "mock", "offline"));
            }
            Ok(RegistrySnapshot {
                package: package.to_string(),
                versions: vec![PublishedVersion::new("4.17.21", Some(">=4"))],
            })
        }
    }

    #[tokio::test]
    async fn test_resolver_fetches_once() {
        let registry = CountingRegistry {
            calls: AtomicUsize::new(0),
            fail: false,
        };
        let resolver = CompatibilityResolver::new(&registry, NodeRuntime::defaults());
        let result = resolver.resolve("lodash").await;

        assert_eq!(registry.calls.load(Ordering::SeqCst), 1);
        assert_eq!(result.dependency, "lodash");
        assert!(result
            .runtimes
            .iter()
            .all(|(_, c)| *c == RuntimeCompatibility::Version("4.17.21".to_string())));
    }

    #[tokio::test]
    async fn test_resolver_registry_failure_is_na() {
        let registry = CountingRegistry {
            calls: AtomicUsize::new(0),
            fail: true,
        };
        let resolver = CompatibilityResolver::new(&registry, NodeRuntime::defaults());
        let result = resolver.resolve("lodash").await;

        let expected = CompatibilityResult::unavailable("lodash", resolver.runtimes());
        assert_eq!(result, expected);
    }
}
