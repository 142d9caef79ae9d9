//! Node.js runtime targets for compatibility columns

use serde::{Deserialize, Serialize};
use std::fmt;

/// Runtime majors reported when nothing else is configured
pub const DEFAULT_NODE_MAJORS: &[u64] = &[14, 16, 18, 20];

/// A Node.js major version the report has a compatibility column for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeRuntime(pub u64);

impl NodeRuntime {
    /// The npm range covering this major, e.g. `^18.0.0`
    pub fn range(&self) -> String {
        format!("^{}.0.0", self.0)
    }

    /// Column header used in the report
    pub fn column_name(&self) -> String {
        format!("Node {}", self.0)
    }

    /// Default runtime list
    pub fn defaults() -> Vec<NodeRuntime> {
        DEFAULT_NODE_MAJORS
            .iter()
            .copied()
            .map(NodeRuntime)
            .collect()
    }
}

impl fmt::Display for NodeRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range() {
        assert_eq!(NodeRuntime(18).range(), "^18.0.0");
    }

    #[test]
    fn test_column_name() {
        assert_eq!(NodeRuntime(20).column_name(), "Node 20");
    }

    #[test]
    fn test_defaults() {
        let majors: Vec<u64> = NodeRuntime::defaults().iter().map(|r| r.0).collect();
        assert_eq!(majors, vec![14, 16, 18, 20]);
    }
}
