//! Viewport projection of maze cells.
//!
//! Geometry is derived from the viewport size and the logical maze
//! dimensions: the base cell size is the largest square fitting both
//! axes, markers are quarter-size squares centered on their cell, and
//! per-axis scale factors stretch the square grid back over the full
//! viewport.

use crate::core::types::Cell;
use crate::render::config::{MarkerRect, PathSegment};

/// Projects logical and doubled cells into viewport pixels.
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    base_cell_size: f32,
    square_size: f32,
    scale_x: f32,
    scale_y: f32,
}

impl Projector {
    /// Build a projector for a viewport and logical maze dimensions.
    ///
    /// Returns `None` when either logical dimension is zero.
    pub fn new(area_size: (f32, f32), logical_cols: usize, logical_rows: usize) -> Option<Self> {
        if logical_cols == 0 || logical_rows == 0 {
            return None;
        }

        let (width, height) = area_size;
        let cols = logical_cols as f32;
        let rows = logical_rows as f32;

        let base_cell_size = (width / cols).min(height / rows);
        // Markers take a quarter of the base cell.
        let square_size = base_cell_size / 4.0;
        let scale_x = width / (base_cell_size * cols);
        let scale_y = height / (base_cell_size * rows);

        Some(Self {
            base_cell_size,
            square_size,
            scale_x,
            scale_y,
        })
    }

    /// Center of a logical cell in viewport pixels.
    #[inline]
    pub fn center(&self, cell: Cell) -> (f32, f32) {
        let cx = (cell.col as f32 + 0.5) * self.base_cell_size * self.scale_x;
        let cy = (cell.row as f32 + 0.5) * self.base_cell_size * self.scale_y;
        (cx, cy)
    }

    /// Marker square centered on a logical cell.
    ///
    /// Unset cells produce no marker.
    pub fn marker(&self, cell: Cell) -> Option<MarkerRect> {
        if !cell.is_set() {
            return None;
        }

        let (cx, cy) = self.center(cell);

        Some(MarkerRect {
            x: cx - self.square_size / 2.0,
            y: cy - self.square_size / 2.0,
            w: self.square_size,
            h: self.square_size,
        })
    }

    /// Segment between the centers of two doubled cells.
    ///
    /// A doubled cell projects through its logical position `(col/2,
    /// row/2)`. Successive path cells alternate between a logical cell
    /// and an adjacent wall cell, so collapsing each wall onto the
    /// neighboring center yields a continuous polyline.
    pub fn segment(&self, from: Cell, to: Cell) -> PathSegment {
        let (x1, y1) = self.center(Cell::new(from.col / 2, from.row / 2));
        let (x2, y2) = self.center(Cell::new(to.col / 2, to.row / 2));

        PathSegment { x1, y1, x2, y2 }
    }

    /// Marker side length.
    #[inline]
    pub fn square_size(&self) -> f32 {
        self.square_size
    }
}
