use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap, HashSet};

use tracing::debug;

use crate::graph::algos::shared::HeapEntry;
use crate::graph::types::LocationId;
use crate::graph::CampusGraph;

impl CampusGraph {
    /// Minimum total weight of a tree spanning exactly `vertices`.
    ///
    /// Only open edges with both endpoints inside the subset count; a cheaper
    /// detour through an outside location is never taken. Returns `Some(0)`
    /// for an empty subset and `None` when the subset cannot be connected.
    #[tracing::instrument(level = "debug", skip_all, ret)]
    pub fn mst_cost<I>(&self, vertices: I) -> Option<u64>
    where
        I: IntoIterator<Item = LocationId>,
    {
        let subset: BTreeSet<LocationId> = vertices.into_iter().collect();
        let Some(&start) = subset.first() else {
            return Some(0);
        };

        let mut visited: HashSet<LocationId> = HashSet::from([start]);
        let mut heap = BinaryHeap::new();
        let mut total = 0u64;

        self.push_crossing_edges(start, &subset, &mut heap);

        while visited.len() < subset.len() {
            let Some(Reverse(HeapEntry { cost, location })) = heap.pop() else {
                break;
            };
            if !visited.insert(location) {
                continue;
            }
            total += cost;
            self.push_crossing_edges(location, &subset, &mut heap);
        }

        let spanned = visited.len() == subset.len();
        debug!(
            subset = subset.len(),
            reached = visited.len(),
            total,
            spanned,
            "mst_cost"
        );
        spanned.then_some(total)
    }

    fn push_crossing_edges(
        &self,
        from: LocationId,
        subset: &BTreeSet<LocationId>,
        heap: &mut BinaryHeap<Reverse<HeapEntry>>,
    ) {
        for (neighbor, weight) in self.open_neighbors(from) {
            if subset.contains(&neighbor) {
                heap.push(Reverse(HeapEntry::new(u64::from(weight), neighbor)));
            }
        }
    }
}
