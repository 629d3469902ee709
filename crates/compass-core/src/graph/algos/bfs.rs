use std::collections::{HashSet, VecDeque};

use crate::graph::types::LocationId;
use crate::graph::CampusGraph;

impl CampusGraph {
    /// True iff a path of open edges joins `a` and `b`.
    ///
    /// Closed edges are skipped outright. Locations that never appeared as an
    /// edge endpoint are never connected, not even to themselves.
    #[tracing::instrument(level = "debug", skip(self), ret)]
    pub fn is_connected(&self, a: LocationId, b: LocationId) -> bool {
        if !self.is_vertex(a) || !self.is_vertex(b) {
            return false;
        }

        let mut visited: HashSet<LocationId> = HashSet::from([a]);
        let mut queue: VecDeque<LocationId> = VecDeque::from([a]);

        while let Some(current) = queue.pop_front() {
            if current == b {
                return true;
            }

            for (neighbor, _) in self.open_neighbors(current) {
                if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        false
    }
}
