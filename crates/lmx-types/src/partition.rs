use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::node::NodeId;

/// A contiguous byte range `[start, end)` of the object, assigned to exactly
/// one worker.
///
/// A full plan is a gap-free, non-overlapping cover of `[0, L)` whose last
/// partition ends at `L`. Degenerate partitions (`start == end`) are legal
/// and occur whenever the object is shorter than the node count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Partition {
    /// 0-based position in the plan.
    pub index: usize,
    /// First byte offset (inclusive).
    pub start: u64,
    /// Last byte offset (exclusive).
    pub end: u64,
}

impl Partition {
    /// Create a partition, rejecting inverted ranges.
    pub fn new(index: usize, start: u64, end: u64) -> Result<Self, TypeError> {
        if start > end {
            return Err(TypeError::InvalidRange { start, end });
        }
        Ok(Self { index, start, end })
    }

    /// Number of bytes nominally assigned to this partition.
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    /// Returns `true` for a degenerate partition.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` for the partition that begins the plan. The first
    /// partition never applies boundary correction.
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    /// Node that serves this partition.
    pub fn node_id(&self) -> Result<NodeId, TypeError> {
        NodeId::for_partition(self.index)
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} [{}, {})", self.index, self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_and_emptiness() {
        let p = Partition::new(2, 10, 25).unwrap();
        assert_eq!(p.len(), 15);
        assert!(!p.is_empty());
        assert!(!p.is_first());
        assert!(Partition::new(0, 0, 0).unwrap().is_empty());
    }

    #[test]
    fn rejects_inverted_range() {
        assert_eq!(
            Partition::new(0, 5, 4),
            Err(TypeError::InvalidRange { start: 5, end: 4 })
        );
    }

    #[test]
    fn node_is_index_plus_one() {
        let p = Partition::new(4, 0, 1).unwrap();
        assert_eq!(p.node_id().unwrap().get(), 5);
    }

    #[test]
    fn display_shows_half_open_range() {
        let p = Partition::new(1, 3, 9).unwrap();
        assert_eq!(p.to_string(), "#1 [3, 9)");
    }
}
