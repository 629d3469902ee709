//! Graph algorithm implementations
//!
//! Each algorithm is an `impl` block on [`CampusGraph`](super::CampusGraph):
//! - `bfs`: reachability over open edges
//! - `dijkstra`: weighted shortest path and route reconstruction
//! - `prim`: minimum spanning cost over a vertex subset
//! - `shared`: the min-heap entry used by Dijkstra and Prim

pub mod bfs;
pub mod dijkstra;
pub mod prim;
pub mod shared;

pub use shared::HeapEntry;
