//! Engine facade layer.

mod pathfinder;

pub use pathfinder::{PathFinder, SearchState};
