//! Tabular Q-Learning over the doubled maze grid.

mod q_learning;

pub use q_learning::{episode_count, Action, QActions, QLearningConfig, QTable, QTrainer};
