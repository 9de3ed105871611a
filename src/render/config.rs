//! Render-ready path geometry.
//!
//! The engine hands the visualization layer plain rectangles and line
//! segments in viewport pixels; no drawing happens here.

use serde::{Deserialize, Serialize};

/// Filled square marking a start or end cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Line segment between two successive path-cell centers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathSegment {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

/// Geometry bundle consumed by the visualization layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathRenderConfig {
    /// Start/end markers, in selection order.
    pub points: Vec<MarkerRect>,

    /// Path polyline, one segment per consecutive doubled-cell pair.
    pub path: Vec<PathSegment>,
}

impl PathRenderConfig {
    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.path.is_empty()
    }
}
