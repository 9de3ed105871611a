//! Maze grid model.

mod grid;

pub use grid::{MazeGrid, PASSAGE};
