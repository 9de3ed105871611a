//! Chakravyuh - maze pathfinding engine
//!
//! Solves shortest-path discovery on rectangular grid mazes with two
//! interchangeable strategies: a deterministic A* search and a tabular
//! Q-Learning agent whose learned policy is read out by a greedy rollout.
//! A geometry projection turns the stored result into render-ready
//! viewport coordinates for the host application's maze view.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                  engine/                    │  ← Facade + state machine
//! └─────────────────────────────────────────────┘
//!            │                      │
//! ┌─────────────────────┐ ┌─────────────────────┐
//! │     algorithms/     │ │       render/       │  ← Search / projection
//! │ (planning, learning)│ │ (projector, config) │
//! └─────────────────────┘ └─────────────────────┘
//!            │                      │
//! ┌─────────────────────────────────────────────┐
//! │                   maze/                     │  ← Doubled-grid model
//! └─────────────────────────────────────────────┘
//!                       │
//! ┌─────────────────────────────────────────────┐
//! │                   core/                     │  ← Coordinate types
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Maze encoding
//!
//! The maze arrives in doubled form: a `(2R, 2C)` character grid where
//! logical cell `(c, r)` sits at `(2c, 2r)`, walls occupy odd rows and
//! columns, and `'0'` marks a passage. Searches run in doubled space so a
//! move between logical neighbors is two unit steps through the shared
//! wall cell.
//!
//! The engine is strictly single-threaded and synchronous: both searches
//! run to completion on the caller's thread and each facade instance owns
//! its grid, transient Q-table and result path exclusively.

pub mod algorithms;
pub mod core;
pub mod engine;
pub mod error;
pub mod maze;
pub mod render;

// Core types
pub use crate::core::types::Cell;

// Maze model
pub use crate::maze::{MazeGrid, PASSAGE};

// Algorithms
pub use crate::algorithms::learning::{Action, QLearningConfig, QTable, QTrainer};
pub use crate::algorithms::planning::find_path;

// Render output
pub use crate::render::{MarkerRect, PathRenderConfig, PathSegment, Projector};

// Engine facade
pub use crate::engine::{PathFinder, SearchState};

// Errors
pub use crate::error::{ChakravyuhError, OpResult};
