//! Engine facade owning the maze, endpoints and result path.
//!
//! The [`PathFinder`] is the single entry point for the host application:
//! it receives the maze grid by move, converts viewport clicks into
//! logical endpoints, dispatches A* whenever both endpoints exist, runs
//! Q-Learning on request, and projects the stored result into a
//! [`PathRenderConfig`] for drawing.
//!
//! Every public call leaves a consistent `(start, end, path)` tuple:
//! either all three were updated by a successful search, or all three are
//! as they were before the failing call.

use serde::{Deserialize, Serialize};

use crate::algorithms::learning::{QLearningConfig, QTrainer};
use crate::algorithms::planning::find_path;
use crate::core::types::Cell;
use crate::error::{ChakravyuhError, OpResult, Result};
use crate::maze::MazeGrid;
use crate::render::{PathRenderConfig, Projector};

/// Search lifecycle of the engine facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SearchState {
    /// No endpoint selected.
    #[default]
    Idle,

    /// Exactly one endpoint selected; nothing to search yet.
    OneEndpoint,

    /// Both endpoints selected and the stored path matches them.
    Pathed,

    /// The last search failed; endpoints rolled back to the prior pair.
    Failed,
}

impl SearchState {
    /// Check whether a search has run to completion (success or failure).
    pub fn is_terminal(&self) -> bool {
        matches!(self, SearchState::Pathed | SearchState::Failed)
    }

    /// Convert to string for UI/status publication.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchState::Idle => "IDLE",
            SearchState::OneEndpoint => "ONE_ENDPOINT",
            SearchState::Pathed => "PATHED",
            SearchState::Failed => "FAILED",
        }
    }
}

/// Maze pathfinding facade.
///
/// Owns the maze grid, the selected endpoints (logical), the last result
/// path (doubled, goal-first) and the search state machine.
#[derive(Debug, Default)]
pub struct PathFinder {
    maze: MazeGrid,
    start: Cell,
    end: Cell,
    path: Vec<Cell>,
    state: SearchState,
}

impl PathFinder {
    /// Create an engine with no maze installed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a maze, resetting endpoints, path and state.
    pub fn set_maze(&mut self, maze: MazeGrid) {
        self.maze = maze;
        self.start = Cell::UNSET;
        self.end = Cell::UNSET;
        self.path.clear();
        self.state = SearchState::Idle;

        log::info!(
            "maze installed: {}x{} logical cells",
            self.maze.logical_cols(),
            self.maze.logical_rows()
        );
    }

    /// Get the installed maze.
    pub fn maze(&self) -> &MazeGrid {
        &self.maze
    }

    /// Get the start endpoint (logical, possibly unset).
    pub fn start(&self) -> Cell {
        self.start
    }

    /// Get the end endpoint (logical, possibly unset).
    pub fn end(&self) -> Cell {
        self.end
    }

    /// Get the stored path (doubled coordinates, goal-first).
    pub fn path(&self) -> &[Cell] {
        &self.path
    }

    /// Get the search state machine position.
    pub fn search_state(&self) -> SearchState {
        self.state
    }

    /// Select the start endpoint from a viewport click.
    ///
    /// `w_ratio` and `h_ratio` convert viewport pixels to logical
    /// indices. Triggers A* when an end is already selected; on failure
    /// the previous start is restored and the error re-surfaced.
    pub fn set_start(&mut self, point: (f32, f32), w_ratio: f32, h_ratio: f32) -> Result<()> {
        if self.maze.is_empty() {
            return Ok(());
        }

        let previous = self.start;
        self.start = self.project_click(point, w_ratio, h_ratio);

        self.search_if_ready(true, previous)
    }

    /// Select the end endpoint from a viewport click.
    ///
    /// Symmetric to [`PathFinder::set_start`].
    pub fn set_end(&mut self, point: (f32, f32), w_ratio: f32, h_ratio: f32) -> Result<()> {
        if self.maze.is_empty() {
            return Ok(());
        }

        let previous = self.end;
        self.end = self.project_click(point, w_ratio, h_ratio);

        self.search_if_ready(false, previous)
    }

    /// Find a path with the Q-Learning trainer.
    ///
    /// Endpoints are logical. State is committed only on success; any
    /// failure leaves the previous `(start, end, path)` tuple in place.
    pub fn q_find(&mut self, start: Cell, goal: Cell) -> OpResult {
        self.q_find_with(QTrainer::new(QLearningConfig::default()), start, goal)
    }

    /// Q-Learning entry with a caller-supplied trainer (seeded in tests).
    pub fn q_find_with(&mut self, mut trainer: QTrainer, start: Cell, goal: Cell) -> OpResult {
        let outcome = trainer
            .train(&self.maze, start, goal)
            .and_then(|table| trainer.extract_path(&table, start, goal));

        match outcome {
            Ok(path) => {
                self.start = start;
                self.end = goal;
                self.path = path;
                self.state = SearchState::Pathed;
                OpResult::ok()
            }
            Err(e) => {
                if e == ChakravyuhError::PathNotFound {
                    self.state = SearchState::Failed;
                }
                log::warn!("Q-Learning search failed: {}", e);
                OpResult::from(e)
            }
        }
    }

    /// Project the current endpoints and path into viewport geometry.
    ///
    /// Returns the empty config when the maze is empty or either endpoint
    /// lies outside the logical range.
    pub fn render(&self, area_size: (f32, f32)) -> PathRenderConfig {
        let cols = self.maze.logical_cols() as i32;
        let rows = self.maze.logical_rows() as i32;

        if self.start.col >= cols
            || self.start.row >= rows
            || self.end.col >= cols
            || self.end.row >= rows
        {
            return PathRenderConfig::default();
        }

        let Some(projector) = Projector::new(
            area_size,
            self.maze.logical_cols(),
            self.maze.logical_rows(),
        ) else {
            return PathRenderConfig::default();
        };

        let mut config = PathRenderConfig::default();

        if let Some(marker) = projector.marker(self.start) {
            config.points.push(marker);
        }
        if let Some(marker) = projector.marker(self.end) {
            config.points.push(marker);
        }

        for pair in self.path.windows(2) {
            config.path.push(projector.segment(pair[0], pair[1]));
        }

        config
    }

    /// Convert a viewport point to a clamped logical cell.
    ///
    /// Truncation matches the click-to-index convention of the host view;
    /// float ratios can land one index past the edge, so the result is
    /// clamped into the logical range.
    fn project_click(&self, point: (f32, f32), w_ratio: f32, h_ratio: f32) -> Cell {
        let max_col = self.maze.logical_cols() as i32 - 1;
        let max_row = self.maze.logical_rows() as i32 - 1;

        let col = ((point.0 / w_ratio) as i32).clamp(0, max_col);
        let row = ((point.1 / h_ratio) as i32).clamp(0, max_row);

        Cell::new(col, row)
    }

    /// Run A* when both endpoints are selected.
    ///
    /// `updating_start` names the endpoint that was just changed so it
    /// can be rolled back if the search fails.
    fn search_if_ready(&mut self, updating_start: bool, previous: Cell) -> Result<()> {
        let other = if updating_start { self.end } else { self.start };

        if !other.is_set() {
            self.state = SearchState::OneEndpoint;
            return Ok(());
        }

        match find_path(&self.maze, self.start, self.end) {
            Ok(path) => {
                self.path = path;
                self.state = SearchState::Pathed;
                log::info!("A* path found: {} doubled cells", self.path.len());
                Ok(())
            }
            Err(e) => {
                if updating_start {
                    self.start = previous;
                } else {
                    self.end = previous;
                }
                self.state = SearchState::Failed;
                log::warn!("A* failed, endpoint restored: {}", e);
                Err(e)
            }
        }
    }
}
