//! Game state module - the complete session
//!
//! Ties the pure pieces together: grid, reducer-driven engine, spawner,
//! score, and terminal detection. One accepted input runs one full
//! move -> spawn -> terminal-check cycle before the next is processed.

use crate::engine::{apply_move, MoveResult};
use crate::grid::Grid;
use crate::snapshot::GameSnapshot;
use crate::spawner::TileSpawner;
use crate::status;
use crate::types::{Direction, GameAction, GameStatus, Tile};

/// Number of tiles spawned at the start of every episode.
const INITIAL_SPAWNS: usize = 2;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    spawner: TileSpawner,
    score: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Terminal-detector verdict, refreshed once per move cycle.
    game_over: bool,
    started: bool,
}

impl GameState {
    /// Create a new session with the given RNG seed.
    ///
    /// The grid stays empty until [`start`](Self::start) is called.
    pub fn new(seed: u32) -> Self {
        Self {
            grid: Grid::new(),
            spawner: TileSpawner::new(seed),
            score: 0,
            episode_id: 0,
            game_over: false,
            started: false,
        }
    }

    /// Start the game and seed the grid with the two initial tiles
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.seed_initial_tiles();
    }

    /// Reset to a fresh episode: empty grid, score 0, status Ongoing,
    /// then the two initial tiles. The RNG keeps its sequence, so
    /// consecutive episodes differ.
    pub fn restart(&mut self) {
        self.grid.clear();
        self.score = 0;
        self.game_over = false;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.started = true;
        self.seed_initial_tiles();
    }

    fn seed_initial_tiles(&mut self) {
        for _ in 0..INITIAL_SPAWNS {
            self.spawner.spawn(&mut self.grid);
        }
        self.game_over = status::evaluate(&self.grid).is_over();
    }

    /// Apply a player action.
    ///
    /// Returns the move result for `Move` actions; `Restart` always
    /// reports an unchanged move (the caller redraws regardless).
    pub fn apply_action(&mut self, action: GameAction) -> MoveResult {
        match action {
            GameAction::Move(direction) => self.apply_direction(direction),
            GameAction::Restart => {
                self.restart();
                MoveResult::default()
            }
        }
    }

    /// Run one full move cycle in `direction`.
    ///
    /// If the slide changed the grid, the score grows by the merge total
    /// and one tile spawns; the terminal detector then runs exactly once.
    /// Moves on a finished (or not yet started) game are no-ops.
    pub fn apply_direction(&mut self, direction: Direction) -> MoveResult {
        if !self.started || self.game_over {
            return MoveResult::default();
        }

        let result = apply_move(&mut self.grid, direction);
        if result.changed {
            self.score += result.score_delta;
            self.spawner.spawn(&mut self.grid);
        }
        self.game_over = status::evaluate(&self.grid).is_over();

        result
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn status(&self) -> GameStatus {
        if self.game_over {
            GameStatus::Over
        } else {
            GameStatus::Ongoing
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_tile(&self) -> Tile {
        self.grid.max_tile()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u32 {
        self.spawner.seed()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[cfg(test)]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Re-run the terminal detector against the current grid.
    ///
    /// Only needed after direct grid manipulation in tests; the normal
    /// move cycle keeps the cached flag current.
    #[cfg(test)]
    pub fn refresh_status(&mut self) {
        self.game_over = status::evaluate(&self.grid).is_over();
    }

    /// Fill a snapshot for the presentation layer (allocation-free path).
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid = self.grid.to_rows();
        out.score = self.score;
        out.best_tile = self.grid.max_tile();
        out.game_over = self.game_over;
        out.episode_id = self.episode_id;
        out.seed = self.spawner.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
