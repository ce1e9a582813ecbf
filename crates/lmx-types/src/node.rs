use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Hard ceiling on the number of execution nodes (and therefore partitions).
pub const MAX_NODES: u32 = 100;

/// Identifier of a remote execution node.
///
/// Node identifiers are 1-based: partition `i` runs on node `i + 1`. A
/// `NodeId` is always within `[1, MAX_NODES]`; executors configured with
/// fewer nodes narrow the valid range further at dispatch time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct NodeId(u32);

impl NodeId {
    /// Create a node identifier, rejecting values outside `[1, MAX_NODES]`.
    pub fn new(raw: u32) -> Result<Self, TypeError> {
        if raw == 0 || raw > MAX_NODES {
            return Err(TypeError::InvalidNodeId(raw));
        }
        Ok(Self(raw))
    }

    /// The node that serves the partition with the given 0-based index.
    pub fn for_partition(index: usize) -> Result<Self, TypeError> {
        let raw = u32::try_from(index)
            .ok()
            .and_then(|i| i.checked_add(1))
            .unwrap_or(u32::MAX);
        Self::new(raw)
    }

    /// The raw 1-based identifier.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for NodeId {
    type Error = TypeError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<NodeId> for u32 {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_range() {
        assert_eq!(NodeId::new(1).unwrap().get(), 1);
        assert_eq!(NodeId::new(MAX_NODES).unwrap().get(), MAX_NODES);
    }

    #[test]
    fn rejects_zero_and_overflow() {
        assert_eq!(NodeId::new(0), Err(TypeError::InvalidNodeId(0)));
        assert_eq!(
            NodeId::new(MAX_NODES + 1),
            Err(TypeError::InvalidNodeId(MAX_NODES + 1))
        );
    }

    #[test]
    fn partition_index_is_zero_based() {
        assert_eq!(NodeId::for_partition(0).unwrap().get(), 1);
        assert_eq!(NodeId::for_partition(99).unwrap().get(), 100);
        assert!(NodeId::for_partition(100).is_err());
    }

    #[test]
    fn display_format() {
        assert_eq!(NodeId::new(7).unwrap().to_string(), "node-7");
    }

    #[test]
    fn serde_rejects_out_of_range() {
        let id: NodeId = serde_json::from_str("42").unwrap();
        assert_eq!(id.get(), 42);
        assert!(serde_json::from_str::<NodeId>("0").is_err());
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
    }
}
