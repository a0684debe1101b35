//! Plain-data snapshot of the session, consumed by rendering code.

use crate::types::{Tile, GRID_SIZE};

/// Everything the presentation layer needs, copied out of the session.
///
/// Snapshots keep renderers decoupled from live game state and make view
/// code testable without a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub grid: [[Tile; GRID_SIZE]; GRID_SIZE],
    pub score: u32,
    pub best_tile: Tile,
    pub game_over: bool,
    pub episode_id: u32,
    pub seed: u32,
}
