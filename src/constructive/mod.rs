//! Constructive heuristics for building initial tours.
//!
//! - [`nearest_neighbor`] — Greedy nearest-neighbor tour, O(n²)
//! - [`nearest_unvisited`] — The selection rule shared with day scheduling

mod nearest_neighbor;

pub(crate) use nearest_neighbor::construct;
pub use nearest_neighbor::{nearest_neighbor, nearest_unvisited};
