//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: 4x4 tile grid backed by a flat buffer
//! - [`reducer`]: compaction and merging of a single line
//! - [`engine`]: applies the reducer along any of the four directions
//! - [`status`]: terminal-state detection (no legal move remains)
//! - [`rng`]: seedable LCG for reproducible tile spawning
//! - [`spawner`]: random placement of new tiles into empty cells
//! - [`game_state`]: complete session state (grid, score, lifecycle)
//! - [`snapshot`]: plain-data view of the state for rendering
//!
//! # Game Rules
//!
//! - A move slides every line toward one edge; adjacent equal tiles merge
//!   into their sum, at most once per tile per move
//! - Each merge adds the merged value to the score
//! - Every move that changes the grid spawns one new tile (2 or 4) in a
//!   uniformly chosen empty cell
//! - The game ends when the grid is full and no adjacent pair is equal
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameState;
//! use tui_2048_types::{Direction, GameAction};
//!
//! // Create and start a game
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! // Slide the board around
//! game.apply_action(GameAction::Move(Direction::Left));
//! game.apply_action(GameAction::Move(Direction::Up));
//!
//! // The grid always holds the two initial tiles plus one per changed move
//! assert!(game.grid().cells().iter().any(|&v| v != 0));
//! ```

pub mod engine;
pub mod game_state;
pub mod grid;
pub mod reducer;
pub mod rng;
pub mod snapshot;
pub mod spawner;
pub mod status;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use engine::{apply_move, MoveResult};
pub use game_state::GameState;
pub use grid::Grid;
pub use reducer::reduce_line;
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
pub use spawner::TileSpawner;
