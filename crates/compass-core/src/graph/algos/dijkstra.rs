use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::graph::algos::shared::HeapEntry;
use crate::graph::types::{LocationId, Route};
use crate::graph::CampusGraph;

/// Outcome of a single-target Dijkstra run
struct Search {
    distance: u64,
    predecessors: HashMap<LocationId, LocationId>,
}

impl CampusGraph {
    /// Minimum total weight of an open-edge path from `src` to `dst`.
    ///
    /// `None` when either endpoint is unknown or no open path exists.
    #[tracing::instrument(level = "debug", skip(self), ret)]
    pub fn shortest_path(&self, src: LocationId, dst: LocationId) -> Option<u64> {
        self.search(src, dst).map(|search| search.distance)
    }

    /// Like [`Self::shortest_path`], also returning the stops along one
    /// shortest route. Which route is reported among equal-weight ones
    /// depends on traversal order.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn shortest_path_with_route(&self, src: LocationId, dst: LocationId) -> Option<Route> {
        let search = self.search(src, dst)?;
        let stops = reconstruct_route(src, dst, &search.predecessors);
        Some(Route {
            distance: search.distance,
            stops,
        })
    }

    fn search(&self, src: LocationId, dst: LocationId) -> Option<Search> {
        if !self.is_vertex(src) || !self.is_vertex(dst) {
            return None;
        }

        let mut best: HashMap<LocationId, u64> = HashMap::from([(src, 0)]);
        let mut predecessors: HashMap<LocationId, LocationId> = HashMap::new();
        let mut heap = BinaryHeap::from([Reverse(HeapEntry::new(0, src))]);

        while let Some(Reverse(HeapEntry { cost, location })) = heap.pop() {
            // Stale entry superseded by a cheaper one
            if best.get(&location).is_some_and(|&known| cost > known) {
                continue;
            }

            if location == dst {
                return Some(Search {
                    distance: cost,
                    predecessors,
                });
            }

            for (neighbor, weight) in self.open_neighbors(location) {
                let candidate = cost + u64::from(weight);
                if best.get(&neighbor).is_none_or(|&known| candidate < known) {
                    best.insert(neighbor, candidate);
                    predecessors.insert(neighbor, location);
                    heap.push(Reverse(HeapEntry::new(candidate, neighbor)));
                }
            }
        }

        None
    }
}

/// Walk predecessors back from `dst`, then reverse into src→dst order
fn reconstruct_route(
    src: LocationId,
    dst: LocationId,
    predecessors: &HashMap<LocationId, LocationId>,
) -> Vec<LocationId> {
    let mut stops = vec![dst];
    let mut current = dst;

    while current != src {
        match predecessors.get(&current) {
            Some(&previous) => {
                stops.push(previous);
                current = previous;
            }
            None => break,
        }
    }

    stops.reverse();
    stops
}
