//! Tabular Q-Learning trainer and greedy path extraction.
//!
//! The agent learns Q(s, a) over doubled grid cells with four movement
//! actions. Training runs a size-dependent schedule of episodes from the
//! start cell; afterwards the policy is read out by a greedy rollout that
//! records parents and reconstructs the path once the goal is reached.
//!
//! Reward shaping per step:
//! - reaching the goal: +10, terminal
//! - stepping into a wall or off the grid: -10, terminal, with the
//!   transition retargeted at the current cell so the bootstrap reads the
//!   agent's own row
//! - any other passage step: -0.1

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::algorithms::reconstruct_path;
use crate::core::types::Cell;
use crate::error::{ChakravyuhError, Result};
use crate::maze::MazeGrid;

/// Reward for reaching the goal.
const GOAL_REWARD: f32 = 10.0;

/// Reward for a terminal wall hit.
const WALL_REWARD: f32 = -10.0;

/// Living penalty for an ordinary passage step.
const STEP_REWARD: f32 = -0.1;

// ============================================================================
// Actions
// ============================================================================

/// Movement action alphabet, in Q-row index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Left = 0,
    Up = 1,
    Right = 2,
    Down = 3,
}

impl Action {
    /// All actions in index order.
    pub const ALL: [Action; 4] = [Action::Left, Action::Up, Action::Right, Action::Down];

    /// Number of actions (Q-row width).
    pub const COUNT: usize = 4;

    /// Displacement as `(dcol, drow)`.
    #[inline]
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Action::Left => (-1, 0),
            Action::Up => (0, -1),
            Action::Right => (1, 0),
            Action::Down => (0, 1),
        }
    }

    /// Apply this action's displacement to a cell.
    #[inline]
    pub fn apply(&self, cell: Cell) -> Cell {
        let (dcol, drow) = self.delta();
        cell.offset(dcol, drow)
    }
}

// ============================================================================
// Q-table
// ============================================================================

/// Per-cell Q-values, one slot per [`Action`].
pub type QActions = [f32; Action::COUNT];

/// Dense Q-table over doubled grid cells.
///
/// Row-major like the maze grid: index = row * width + col. Zero
/// initialized and scoped to a single training call.
#[derive(Debug, Clone, PartialEq)]
pub struct QTable {
    values: Vec<QActions>,
    width: usize,
    height: usize,
}

impl QTable {
    /// Create a zeroed table with the grid's doubled dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            values: vec![[0.0; Action::COUNT]; width * height],
            width,
            height,
        }
    }

    #[inline]
    fn index(&self, cell: Cell) -> Option<usize> {
        if cell.col >= 0
            && (cell.col as usize) < self.width
            && cell.row >= 0
            && (cell.row as usize) < self.height
        {
            Some(cell.row as usize * self.width + cell.col as usize)
        } else {
            None
        }
    }

    /// Q-values for a cell, `None` outside the table.
    #[inline]
    pub fn q_values(&self, cell: Cell) -> Option<&QActions> {
        self.index(cell).map(|i| &self.values[i])
    }

    /// Greedy action for a cell: argmax with first-occurrence tie-break.
    pub fn best_action(&self, cell: Cell) -> Option<Action> {
        let row = self.q_values(cell)?;

        let mut best = Action::Left;
        let mut best_q = row[0];
        for action in &Action::ALL[1..] {
            let q = row[*action as usize];
            if q > best_q {
                best = *action;
                best_q = q;
            }
        }

        Some(best)
    }

    /// Maximum Q-value over a cell's actions, 0.0 outside the table.
    pub fn max_q(&self, cell: Cell) -> f32 {
        self.q_values(cell)
            .map(|row| row.iter().copied().fold(row[0], f32::max))
            .unwrap_or(0.0)
    }

    /// Nudge one slot by a temporal-difference delta.
    pub(crate) fn apply_update(&mut self, cell: Cell, action: Action, delta: f32) {
        if let Some(i) = self.index(cell) {
            self.values[i][action as usize] += delta;
        }
    }
}

// ============================================================================
// Trainer
// ============================================================================

/// Hyperparameters for the Q-Learning trainer.
#[derive(Debug, Clone, Copy)]
pub struct QLearningConfig {
    /// Learning rate α applied to the temporal-difference error.
    pub alpha: f32,

    /// Discount factor γ for the bootstrapped next-state value.
    pub gamma: f32,

    /// Initial exploration rate ε₀.
    pub epsilon_initial: f32,

    /// Exponential decay rate λ.
    ///
    /// Per-episode ε = ε₀·exp(-λ·episode), applied after the episode
    /// finishes; episode 0 runs fully greedy over the zero table.
    pub decay_rate: f32,

    /// Step budget for the greedy rollout before giving up.
    pub max_rollout_steps: usize,
}

impl Default for QLearningConfig {
    fn default() -> Self {
        Self {
            alpha: 0.9,
            gamma: 0.98,
            epsilon_initial: 1.0,
            decay_rate: 0.01,
            max_rollout_steps: 40_000,
        }
    }
}

/// Episode budget from the logical maze size.
///
/// `M = max(R, C)`: small mazes get `⌊M·1.55·100⌋`, mid-size `M·200`,
/// anything past 40 `M·200 + 500`.
pub fn episode_count(logical_rows: usize, logical_cols: usize) -> usize {
    let m = logical_rows.max(logical_cols);

    if m <= 30 {
        (m as f32 * 1.55 * 100.0) as usize
    } else if m > 40 {
        m * 200 + 500
    } else {
        m * 200
    }
}

/// Tabular Q-Learning trainer.
///
/// Owns the RNG for ε-greedy selection; one trainer instance per training
/// call scope. [`QTrainer::with_seed`] is the reproducible variant tests
/// rely on.
pub struct QTrainer {
    config: QLearningConfig,
    rng: StdRng,
}

impl QTrainer {
    /// Create a trainer seeded from OS entropy.
    pub fn new(config: QLearningConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a trainer with a fixed RNG seed.
    pub fn with_seed(config: QLearningConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &QLearningConfig {
        &self.config
    }

    /// Train a Q-table for a start/goal pair on the given maze.
    ///
    /// Endpoints are logical and validated against the logical range
    /// before anything else happens.
    pub fn train(&mut self, grid: &MazeGrid, start: Cell, goal: Cell) -> Result<QTable> {
        let cols = grid.logical_cols() as i32;
        let rows = grid.logical_rows() as i32;

        if !in_logical_range(start, cols, rows) || !in_logical_range(goal, cols, rows) {
            return Err(ChakravyuhError::InvalidPoint);
        }

        let start = start.doubled();
        let goal = goal.doubled();

        let mut table = QTable::new(grid.cols(), grid.rows());
        let episodes = episode_count(grid.logical_rows(), grid.logical_cols());

        log::info!(
            "Q-Learning: {} episodes on a {}x{} logical maze",
            episodes,
            cols,
            rows
        );

        let mut epsilon = 0.0_f32;

        for episode in 0..episodes {
            let mut current = start;
            let mut done = false;

            while !done {
                let action = self.select_action(&table, current, epsilon);
                let mut next = action.apply(current);

                let reward = if next == goal {
                    done = true;
                    GOAL_REWARD
                } else if !grid.is_open(&next) {
                    // Terminal wall hit; bootstrap from the current cell's
                    // own row.
                    done = true;
                    next = current;
                    WALL_REWARD
                } else {
                    STEP_REWARD
                };

                self.q_update(&mut table, current, action, next, reward);
                current = next;
            }

            // Decay applies after the episode, so episode 0 is greedy.
            epsilon =
                self.config.epsilon_initial * (-self.config.decay_rate * episode as f32).exp();
        }

        Ok(table)
    }

    /// Extract a path by greedy rollout over a trained table.
    ///
    /// Follows [`QTable::best_action`] from the doubled start, recording
    /// parents, until the doubled goal is reached; the path is then
    /// reconstructed goal-first. Exceeding the step budget, or steering
    /// off the table through an untrained row, fails with
    /// [`ChakravyuhError::PathNotFound`].
    pub fn extract_path(&self, table: &QTable, start: Cell, goal: Cell) -> Result<Vec<Cell>> {
        let start = start.doubled();
        let goal = goal.doubled();

        let mut parents: HashMap<Cell, Cell> = HashMap::new();
        let mut current = start;
        let mut steps = 0usize;

        while current != goal {
            let Some(action) = table.best_action(current) else {
                log::warn!("greedy rollout left the Q-table at {:?}", current);
                return Err(ChakravyuhError::PathNotFound);
            };

            let next = action.apply(current);
            parents.insert(next, current);
            current = next;

            steps += 1;
            if steps > self.config.max_rollout_steps {
                log::warn!(
                    "greedy rollout gave up after {} steps",
                    self.config.max_rollout_steps
                );
                return Err(ChakravyuhError::PathNotFound);
            }
        }

        Ok(reconstruct_path(&parents, start, goal))
    }

    /// ε-greedy action selection.
    fn select_action(&mut self, table: &QTable, current: Cell, epsilon: f32) -> Action {
        let roll: f32 = self.rng.random();

        if roll < epsilon {
            Action::ALL[self.rng.random_range(0..Action::COUNT)]
        } else {
            table.best_action(current).unwrap_or(Action::Left)
        }
    }

    /// One-step Q-update on the transition just taken.
    fn q_update(&self, table: &mut QTable, current: Cell, action: Action, next: Cell, reward: f32) {
        let q = table
            .q_values(current)
            .map_or(0.0, |row| row[action as usize]);
        let target = reward + self.config.gamma * table.max_q(next);

        table.apply_update(current, action, self.config.alpha * (target - q));
    }
}

#[inline]
fn in_logical_range(cell: Cell, cols: i32, rows: i32) -> bool {
    cell.col >= 0 && cell.col < cols && cell.row >= 0 && cell.row < rows
}
