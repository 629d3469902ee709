use std::fmt;

use serde::Serialize;

/// Identifier of a campus location (graph vertex)
pub type LocationId = i64;

/// Travel time along an edge, in minutes
pub type Weight = u32;

/// Handle to one registered edge instance.
///
/// Parallel edges between the same pair of locations get distinct ids, so a
/// caller that needs to address a specific instance can hold on to the id
/// returned by [`super::CampusGraph::add_edge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Registration order of this edge (0-based)
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single undirected edge.
///
/// Stored once and referenced from both endpoints' adjacency lists, so the
/// open flag can never disagree between the two directions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeRecord {
    pub a: LocationId,
    pub b: LocationId,
    pub weight: Weight,
    pub open: bool,
}

impl EdgeRecord {
    /// True when this edge joins `x` and `y` (in either order)
    pub fn connects(&self, x: LocationId, y: LocationId) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }

    /// The endpoint opposite `from`
    pub fn other(&self, from: LocationId) -> LocationId {
        if self.a == from {
            self.b
        } else {
            self.a
        }
    }
}

/// Open/closed state of the edge between two locations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeStatus {
    Open,
    Closed,
    /// No edge joins the pair, or an endpoint is unknown
    #[serde(rename = "DNE")]
    Missing,
}

impl fmt::Display for EdgeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeStatus::Open => write!(f, "open"),
            EdgeStatus::Closed => write!(f, "closed"),
            EdgeStatus::Missing => write!(f, "DNE"),
        }
    }
}

/// A shortest route between two locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Total travel time along the route
    pub distance: u64,
    /// Locations visited, source and destination inclusive
    pub stops: Vec<LocationId>,
}
