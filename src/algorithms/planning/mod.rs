//! Path planning on the doubled maze grid.

mod astar;

pub use astar::find_path;
