use lmx_types::Partition;

use crate::error::{CoreError, CoreResult};

/// Split `[0, length)` into exactly `node_count` contiguous partitions.
///
/// Every partition but the last covers `length / node_count` bytes; the last
/// one absorbs the remainder so the cover always ends at `length`. When the
/// object is shorter than the node count the leading partitions are
/// degenerate (`start == end == 0`).
pub fn plan_partitions(length: u64, node_count: u32) -> CoreResult<Vec<Partition>> {
    if node_count == 0 {
        return Err(CoreError::InvalidConfig(
            "cannot plan zero partitions".into(),
        ));
    }

    let nodes = u64::from(node_count);
    let size = length / nodes;
    let last = node_count as usize - 1;

    (0..node_count as usize)
        .map(|index| {
            let start = index as u64 * size;
            let end = if index == last { length } else { start + size };
            Partition::new(index, start, end).map_err(CoreError::from)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn even_split() {
        let plan = plan_partitions(100, 4).unwrap();
        let ranges: Vec<_> = plan.iter().map(|p| (p.start, p.end)).collect();
        assert_eq!(ranges, vec![(0, 25), (25, 50), (50, 75), (75, 100)]);
    }

    #[test]
    fn last_partition_absorbs_remainder() {
        let plan = plan_partitions(10, 3).unwrap();
        let ranges: Vec<_> = plan.iter().map(|p| (p.start, p.end)).collect();
        assert_eq!(ranges, vec![(0, 3), (3, 6), (6, 10)]);
    }

    #[test]
    fn single_node_covers_everything() {
        let plan = plan_partitions(34, 1).unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!((plan[0].start, plan[0].end), (0, 34));
    }

    #[test]
    fn empty_object_gives_degenerate_partitions() {
        let plan = plan_partitions(0, 5).unwrap();
        assert_eq!(plan.len(), 5);
        assert!(plan.iter().all(|p| p.start == 0 && p.end == 0));
    }

    #[test]
    fn more_nodes_than_bytes() {
        let plan = plan_partitions(3, 5).unwrap();
        assert!(plan[..4].iter().all(|p| p.is_empty()));
        assert_eq!((plan[4].start, plan[4].end), (0, 3));
    }

    #[test]
    fn zero_nodes_rejected() {
        assert!(matches!(
            plan_partitions(10, 0),
            Err(CoreError::InvalidConfig(_))
        ));
    }

    proptest! {
        #[test]
        fn plan_is_exact_cover(length in 0u64..1_000_000, nodes in 1u32..=100) {
            let plan = plan_partitions(length, nodes).unwrap();
            prop_assert_eq!(plan.len(), nodes as usize);

            let mut cursor = 0u64;
            for (i, p) in plan.iter().enumerate() {
                prop_assert_eq!(p.index, i);
                prop_assert!(p.start <= p.end);
                // Degenerate partitions may repeat offset 0 when length < nodes.
                if !p.is_empty() {
                    prop_assert_eq!(p.start, cursor);
                    cursor = p.end;
                }
            }
            prop_assert_eq!(cursor, length);
            prop_assert_eq!(plan.last().unwrap().end, length);
            prop_assert_eq!(plan.iter().map(|p| p.len()).sum::<u64>(), length);
        }
    }
}
