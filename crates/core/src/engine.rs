//! Engine module - applies the line reducer along a direction
//!
//! All four directions share one implementation: a traversal order maps
//! `(direction, line)` to the flat grid indices of that line with the
//! leading end (the edge tiles slide toward) first. The engine gathers a
//! line, reduces it, and scatters the result back.

use crate::grid::Grid;
use crate::reducer::reduce_line;
use crate::types::{Direction, Tile, GRID_SIZE};

/// Outcome of a single move, consumed immediately by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveResult {
    /// Whether any cell changed. Only a changed move spawns a tile.
    pub changed: bool,
    /// Sum of the values produced by merges during this move.
    pub score_delta: u32,
}

/// Flat indices of one line, leading end first.
///
/// - Left: row `line`, left to right
/// - Right: row `line`, right to left
/// - Up: column `line`, top to bottom
/// - Down: column `line`, bottom to top
fn line_indices(direction: Direction, line: usize) -> [usize; GRID_SIZE] {
    let mut indices = [0; GRID_SIZE];
    for (i, slot) in indices.iter_mut().enumerate() {
        *slot = match direction {
            Direction::Left => line * GRID_SIZE + i,
            Direction::Right => line * GRID_SIZE + (GRID_SIZE - 1 - i),
            Direction::Up => i * GRID_SIZE + line,
            Direction::Down => (GRID_SIZE - 1 - i) * GRID_SIZE + line,
        };
    }
    indices
}

/// Slide the whole grid in `direction`, mutating it in place.
///
/// Total over any grid and direction; applying the same direction twice
/// without an intervening spawn reports `changed = false` the second time.
pub fn apply_move(grid: &mut Grid, direction: Direction) -> MoveResult {
    let cells = grid.cells_mut();
    let mut result = MoveResult::default();

    for line in 0..GRID_SIZE {
        let indices = line_indices(direction, line);

        let mut values: [Tile; GRID_SIZE] = [0; GRID_SIZE];
        for (slot, &idx) in values.iter_mut().zip(indices.iter()) {
            *slot = cells[idx];
        }

        let before = values;
        result.score_delta += reduce_line(&mut values);

        if values != before {
            result.changed = true;
            for (&idx, &value) in indices.iter().zip(values.iter()) {
                cells[idx] = value;
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_indices_left_right() {
        assert_eq!(line_indices(Direction::Left, 0), [0, 1, 2, 3]);
        assert_eq!(line_indices(Direction::Right, 0), [3, 2, 1, 0]);
        assert_eq!(line_indices(Direction::Left, 2), [8, 9, 10, 11]);
    }

    #[test]
    fn test_line_indices_up_down() {
        assert_eq!(line_indices(Direction::Up, 0), [0, 4, 8, 12]);
        assert_eq!(line_indices(Direction::Down, 0), [12, 8, 4, 0]);
        assert_eq!(line_indices(Direction::Up, 3), [3, 7, 11, 15]);
    }

    #[test]
    fn test_line_indices_cover_grid() {
        for direction in Direction::all() {
            let mut seen = [false; GRID_SIZE * GRID_SIZE];
            for line in 0..GRID_SIZE {
                for idx in line_indices(direction, line) {
                    assert!(!seen[idx], "{:?} visits {} twice", direction, idx);
                    seen[idx] = true;
                }
            }
            assert!(seen.iter().all(|&v| v));
        }
    }

    #[test]
    fn test_apply_move_left() {
        let mut grid = Grid::from_rows([
            [2, 2, 0, 0],
            [0, 4, 4, 0],
            [2, 0, 2, 0],
            [8, 8, 8, 8],
        ]);
        let result = apply_move(&mut grid, Direction::Left);
        assert_eq!(
            grid.to_rows(),
            [
                [4, 0, 0, 0],
                [8, 0, 0, 0],
                [4, 0, 0, 0],
                [16, 16, 0, 0],
            ]
        );
        assert!(result.changed);
        assert_eq!(result.score_delta, 4 + 8 + 4 + 32);
    }

    #[test]
    fn test_apply_move_right() {
        let mut grid = Grid::from_rows([
            [2, 0, 2, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);
        let result = apply_move(&mut grid, Direction::Right);
        assert_eq!(grid.to_rows()[0], [0, 0, 0, 4]);
        assert!(result.changed);
        assert_eq!(result.score_delta, 4);
    }

    #[test]
    fn test_apply_move_up() {
        let mut grid = Grid::from_rows([
            [2, 0, 2, 8],
            [2, 4, 0, 8],
            [0, 4, 2, 8],
            [0, 0, 0, 8],
        ]);
        let result = apply_move(&mut grid, Direction::Up);
        assert_eq!(
            grid.to_rows(),
            [
                [4, 8, 4, 16],
                [0, 0, 0, 16],
                [0, 0, 0, 0],
                [0, 0, 0, 0],
            ]
        );
        assert_eq!(result.score_delta, 4 + 8 + 4 + 32);
    }

    #[test]
    fn test_apply_move_down() {
        let mut grid = Grid::from_rows([
            [2, 0, 2, 8],
            [2, 4, 0, 8],
            [0, 4, 2, 8],
            [0, 0, 0, 8],
        ]);
        let result = apply_move(&mut grid, Direction::Down);
        assert_eq!(
            grid.to_rows(),
            [
                [0, 0, 0, 0],
                [0, 0, 0, 0],
                [0, 0, 0, 16],
                [4, 8, 4, 16],
            ]
        );
        assert_eq!(result.score_delta, 4 + 8 + 4 + 32);
    }

    #[test]
    fn test_apply_move_reports_unchanged() {
        let mut grid = Grid::from_rows([
            [2, 4, 0, 0],
            [8, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);
        let result = apply_move(&mut grid, Direction::Left);
        assert!(!result.changed);
        assert_eq!(result.score_delta, 0);
    }

    #[test]
    fn test_apply_move_pure_slide_counts_as_change() {
        // Compaction without any merge still changes the grid.
        let mut grid = Grid::from_rows([
            [0, 2, 0, 4],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);
        let result = apply_move(&mut grid, Direction::Left);
        assert!(result.changed);
        assert_eq!(result.score_delta, 0);
        assert_eq!(grid.to_rows()[0], [2, 4, 0, 0]);
    }

    #[test]
    fn test_apply_move_idempotent_once_stabilized() {
        // This grid leaves no adjacent equal pair along any direction after
        // one move, so a second identical move must be a no-op.
        for direction in Direction::all() {
            let mut grid = Grid::from_rows([
                [0, 2, 4, 8],
                [2, 2, 8, 0],
                [0, 0, 2, 0],
                [16, 2, 16, 2],
            ]);
            apply_move(&mut grid, direction);
            let second = apply_move(&mut grid, direction);
            assert!(!second.changed, "{:?} not idempotent", direction);
            assert_eq!(second.score_delta, 0);
        }
    }

    #[test]
    fn test_apply_move_conserves_sum() {
        let mut grid = Grid::from_rows([
            [2, 2, 4, 4],
            [0, 8, 8, 2],
            [2, 0, 2, 0],
            [4, 4, 4, 4],
        ]);
        let before = grid.sum();
        apply_move(&mut grid, Direction::Right);
        assert_eq!(grid.sum(), before);
    }

    #[test]
    fn test_apply_move_checkerboard_is_stuck() {
        let mut grid = Grid::from_rows([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);
        for direction in Direction::all() {
            let result = apply_move(&mut grid, direction);
            assert!(!result.changed);
            assert_eq!(result.score_delta, 0);
        }
    }
}
