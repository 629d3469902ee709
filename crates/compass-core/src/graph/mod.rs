//! Campus graph query engine
//!
//! Holds locations and toggleable weighted edges, and answers:
//! - BFS reachability over open edges
//! - Dijkstra shortest paths, with optional route reconstruction
//! - Prim minimum spanning cost over an arbitrary vertex subset
//!
//! Every query is a fresh traversal; nothing is cached, so a toggle is
//! visible to the very next query.

pub mod algos;
mod campus;
pub mod types;

pub use campus::CampusGraph;
pub use types::{EdgeId, EdgeRecord, EdgeStatus, LocationId, Route, Weight};
