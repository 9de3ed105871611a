//! A* shortest-path search.
//!
//! Operates in doubled coordinates with unit 4-neighbor steps, a
//! Manhattan heuristic and a fixed LEFT, UP, RIGHT, DOWN neighbor scan.
//! Two behaviors are load-bearing for callers and kept as-is:
//!
//! - a cell enters the discovered set the moment it is first enqueued and
//!   is never re-opened, so the first route popped at the goal wins;
//! - the node cost is approximated as `step(current, next) +
//!   step(start, current)` with an axis-aligned step formula, not the
//!   true accumulated path cost.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::algorithms::reconstruct_path;
use crate::core::types::Cell;
use crate::error::{ChakravyuhError, Result};
use crate::maze::MazeGrid;

/// Neighbor displacements in scan order: LEFT, UP, RIGHT, DOWN.
const NEIGHBOR_ORDER: [(i32, i32); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// Node in the open set.
///
/// Ordered min-first by `f`, with the cell's lexicographic order breaking
/// ties so the pop sequence is deterministic for identical input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenNode {
    f: i32,
    cell: Cell,
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (lower f = higher priority)
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.cell.cmp(&self.cell))
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Search for a path between two logical cells.
///
/// Both endpoints are projected into doubled space; the returned path is
/// in doubled coordinates, goal-first. Fails with
/// [`ChakravyuhError::PathNotFound`] when the open set drains before the
/// goal is popped.
pub fn find_path(grid: &MazeGrid, start: Cell, goal: Cell) -> Result<Vec<Cell>> {
    let start = start.doubled();
    let goal = goal.doubled();

    let mut open = BinaryHeap::new();
    let mut discovered = HashSet::new();
    let mut parents: HashMap<Cell, Cell> = HashMap::new();

    open.push(OpenNode {
        f: heuristic(start, goal),
        cell: start,
    });
    discovered.insert(start);

    while let Some(OpenNode { cell: current, .. }) = open.pop() {
        if current == goal {
            let path = reconstruct_path(&parents, start, goal);
            log::debug!("A* reached goal, path holds {} doubled cells", path.len());
            return Ok(path);
        }

        for (dcol, drow) in NEIGHBOR_ORDER {
            let next = current.offset(dcol, drow);

            if grid.is_open(&next) && !discovered.contains(&next) {
                let g = step_cost(current, next) + step_cost(start, current);
                let f = g + heuristic(next, goal);

                open.push(OpenNode { f, cell: next });
                discovered.insert(next);
                parents.insert(next, current);
            }
        }
    }

    log::warn!("A* exhausted the open set without reaching the goal");
    Err(ChakravyuhError::PathNotFound)
}

/// Manhattan heuristic.
#[inline]
fn heuristic(cell: Cell, goal: Cell) -> i32 {
    cell.manhattan(&goal)
}

/// Axis-aligned step cost.
///
/// Distance along the shared axis for aligned pairs, zero otherwise. A
/// unit 4-neighbor step always costs 1; feeding `(start, current)` yields
/// the path-length approximation described in the module doc.
fn step_cost(from: Cell, to: Cell) -> i32 {
    if from.col == to.col {
        (from.row - to.row).abs()
    } else if from.row == to.row {
        (from.col - to.col).abs()
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from(rows: &[&str]) -> MazeGrid {
        MazeGrid::from_rows(rows.iter().map(|r| r.chars().collect()).collect())
    }

    /// Fully open maze with the given logical side length.
    fn open_grid(logical: usize) -> MazeGrid {
        let row = "0".repeat(logical * 2);
        let rows: Vec<&str> = (0..logical * 2).map(|_| row.as_str()).collect();
        grid_from(&rows)
    }

    fn assert_doubled_adjacent(path: &[Cell]) {
        for pair in path.windows(2) {
            assert_eq!(
                pair[0].manhattan(&pair[1]),
                1,
                "path cells {:?} and {:?} are not 4-adjacent",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_trivial_corridor() {
        let grid = open_grid(3);

        let path = find_path(&grid, Cell::new(0, 0), Cell::new(1, 1)).unwrap();

        // Goal-first reconstruction over two logical steps.
        assert_eq!(path.len(), 5);
        assert_eq!(path[0], Cell::new(2, 2));
        assert_eq!(path[path.len() - 1], Cell::new(0, 0));
        assert_doubled_adjacent(&path);
        for cell in &path {
            assert!(grid.is_open(cell));
        }
    }

    #[test]
    fn test_full_diagonal_is_shortest() {
        let grid = open_grid(3);

        let path = find_path(&grid, Cell::new(0, 0), Cell::new(2, 2)).unwrap();

        // Manhattan distance 8 in doubled space, 9 cells with endpoints.
        assert_eq!(path.len(), 9);
        assert_eq!(path[0], Cell::new(4, 4));
        assert_eq!(path[path.len() - 1], Cell::new(0, 0));
        assert_doubled_adjacent(&path);

        // Logical projections never move away from the goal.
        for pair in path.windows(2) {
            let before = pair[1]; // path is goal-first
            let after = pair[0];
            assert!(after.col >= before.col && after.row >= before.row);
        }
    }

    #[test]
    fn test_wall_column_blocks_goal() {
        // The odd column between logical columns 0 and 1 is solid.
        let grid = grid_from(&["0#00", "0#00", "0#00", "0#00"]);

        let result = find_path(&grid, Cell::new(0, 0), Cell::new(1, 0));

        assert_eq!(result, Err(ChakravyuhError::PathNotFound));
    }

    #[test]
    fn test_path_routes_around_wall() {
        // Horizontal crossing allowed only through the bottom row.
        let grid = grid_from(&["0#00", "0#00", "0000", "0000"]);

        let path = find_path(&grid, Cell::new(0, 0), Cell::new(1, 0)).unwrap();

        assert_eq!(path[0], Cell::new(2, 0));
        assert_eq!(path[path.len() - 1], Cell::new(0, 0));
        assert_doubled_adjacent(&path);
        // Detour through row 2: straight across would be 3 cells.
        assert!(path.len() > 3);
        for cell in &path {
            assert!(grid.is_open(cell), "path crosses wall at {:?}", cell);
        }
    }

    #[test]
    fn test_search_is_deterministic() {
        let grid = open_grid(4);

        let first = find_path(&grid, Cell::new(0, 0), Cell::new(3, 3)).unwrap();
        let second = find_path(&grid, Cell::new(0, 0), Cell::new(3, 3)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_start_equals_goal() {
        let grid = open_grid(2);

        let path = find_path(&grid, Cell::new(1, 1), Cell::new(1, 1)).unwrap();

        assert_eq!(path, vec![Cell::new(2, 2)]);
    }

    #[test]
    fn test_step_cost_axis_alignment() {
        let origin = Cell::new(0, 0);

        assert_eq!(step_cost(origin, Cell::new(0, 4)), 4);
        assert_eq!(step_cost(origin, Cell::new(3, 0)), 3);
        // Unaligned pairs contribute nothing.
        assert_eq!(step_cost(origin, Cell::new(2, 2)), 0);
    }
}
