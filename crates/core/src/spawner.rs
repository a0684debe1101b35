//! Spawner module - random placement of new tiles
//!
//! After every move that changes the grid, one new tile appears in a
//! uniformly chosen empty cell: a 2 in 90% of spawns, a 4 in the rest.
//! The spawner owns its RNG so a session seeded identically replays the
//! same spawn sequence.

use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::types::{Tile, BONUS_SPAWN_PERCENT, SPAWN_TILE, SPAWN_TILE_BONUS};

/// Spawns tiles into empty cells using a seeded RNG.
#[derive(Debug, Clone)]
pub struct TileSpawner {
    rng: SimpleRng,
}

impl TileSpawner {
    /// Create a spawner with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Place one tile into a uniformly chosen empty cell.
    ///
    /// Returns the flat index and value of the spawned tile, or `None`
    /// (doing nothing) when the grid has no empty cell.
    pub fn spawn(&mut self, grid: &mut Grid) -> Option<(usize, Tile)> {
        let empty = grid.empty_cells();
        if empty.is_empty() {
            return None;
        }

        let idx = empty[self.rng.next_range(empty.len() as u32) as usize];
        let value = if self.rng.next_range(100) < BONUS_SPAWN_PERCENT {
            SPAWN_TILE_BONUS
        } else {
            SPAWN_TILE
        };

        grid.cells_mut()[idx] = value;
        Some((idx, value))
    }

    /// Current RNG state (for restarting a game with the same sequence)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}
