use std::collections::HashMap;

use tracing::trace;

use crate::graph::types::{EdgeId, EdgeRecord, EdgeStatus, LocationId, Weight};

/// Locations plus undirected, weighted, open/closed edges.
///
/// Locations and edges are only ever added; the sole mutation after loading
/// is flipping an edge's open flag.
#[derive(Debug, Clone, Default)]
pub struct CampusGraph {
    names: HashMap<LocationId, String>,
    adjacency: HashMap<LocationId, Vec<EdgeId>>,
    edges: Vec<EdgeRecord>,
}

impl CampusGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a display name for `id`.
    ///
    /// First registration wins: a later call for the same id leaves the
    /// existing name in place and is not an error.
    pub fn add_location(&mut self, id: LocationId, name: impl Into<String>) {
        self.names.entry(id).or_insert_with(|| name.into());
    }

    /// Insert an open edge between `a` and `b`.
    ///
    /// Both endpoints get adjacency entries even if they were never named.
    /// Registering the same pair twice creates two independent edges.
    pub fn add_edge(&mut self, a: LocationId, b: LocationId, weight: Weight) -> EdgeId {
        let id = EdgeId(self.edges.len());
        self.edges.push(EdgeRecord {
            a,
            b,
            weight,
            open: true,
        });

        self.adjacency.entry(a).or_default().push(id);
        if a != b {
            self.adjacency.entry(b).or_default().push(id);
        }

        trace!(a, b, weight, edge = id.index(), "add_edge");
        id
    }

    /// Flip the open flag of the earliest-registered edge joining `a` and `b`.
    ///
    /// Returns false (and changes nothing) when no such edge exists. Parallel
    /// edges beyond the first are left alone; use [`Self::toggle_edge_id`] to
    /// address one of those.
    pub fn toggle_edge(&mut self, a: LocationId, b: LocationId) -> bool {
        match self.find_edge(a, b) {
            Some(id) => self.toggle_edge_id(id),
            None => {
                trace!(a, b, "toggle_edge: no such edge");
                false
            }
        }
    }

    /// Flip the open flag of one specific edge instance
    pub fn toggle_edge_id(&mut self, id: EdgeId) -> bool {
        let Some(edge) = self.edges.get_mut(id.index()) else {
            return false;
        };
        edge.open = !edge.open;
        trace!(a = edge.a, b = edge.b, open = edge.open, "toggle_edge");
        true
    }

    /// Status of the earliest-registered edge joining `a` and `b`
    pub fn edge_status(&self, a: LocationId, b: LocationId) -> EdgeStatus {
        match self.find_edge(a, b).map(|id| &self.edges[id.index()]) {
            Some(edge) if edge.open => EdgeStatus::Open,
            Some(_) => EdgeStatus::Closed,
            None => EdgeStatus::Missing,
        }
    }

    /// True iff a display name has been registered for `id`
    pub fn has_location(&self, id: LocationId) -> bool {
        self.names.contains_key(&id)
    }

    pub fn location_name(&self, id: LocationId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&EdgeRecord> {
        self.edges.get(id.index())
    }

    /// Number of named locations
    pub fn location_count(&self) -> usize {
        self.names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True when `id` appears as an edge endpoint
    pub(crate) fn is_vertex(&self, id: LocationId) -> bool {
        self.adjacency.contains_key(&id)
    }

    /// Neighbours of `id` reachable over a single open edge, with that edge's weight
    pub(crate) fn open_neighbors(
        &self,
        id: LocationId,
    ) -> impl Iterator<Item = (LocationId, Weight)> + '_ {
        self.adjacency
            .get(&id)
            .into_iter()
            .flatten()
            .map(move |edge_id| &self.edges[edge_id.index()])
            .filter(|edge| edge.open)
            .map(move |edge| (edge.other(id), edge.weight))
    }

    fn find_edge(&self, a: LocationId, b: LocationId) -> Option<EdgeId> {
        self.adjacency
            .get(&a)?
            .iter()
            .copied()
            .find(|id| self.edges[id.index()].connects(a, b))
    }
}
