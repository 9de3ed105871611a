//! Error types for the chakravyuh engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Engine error type.
///
/// The display strings are user-visible: the host application's maze view
/// shows them verbatim, so they are fixed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChakravyuhError {
    /// An endpoint lies outside the logical maze range.
    #[error("Incorrect point")]
    InvalidPoint,

    /// The open set drained, or the greedy rollout ran out of budget.
    #[error("Path not found. Probably the labyrinth has isolated study areas")]
    PathNotFound,
}

pub type Result<T> = std::result::Result<T, ChakravyuhError>;

/// Operation outcome reported to UI consumers.
///
/// Success carries an empty message; failures carry one of the fixed
/// error strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpResult {
    pub ok: bool,
    pub message: String,
}

impl OpResult {
    /// Successful outcome.
    pub fn ok() -> Self {
        Self {
            ok: true,
            message: String::new(),
        }
    }
}

impl From<ChakravyuhError> for OpResult {
    fn from(e: ChakravyuhError) -> Self {
        Self {
            ok: false,
            message: e.to_string(),
        }
    }
}
