//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view draws the board into a
//! plain framebuffer of styled character cells, and the renderer flushes
//! that framebuffer to the terminal, diffing against the previous frame.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Make the view itself pure (framebuffer in, framebuffer out)
//! - Give tiles a fixed character footprint so the board keeps its shape
//!   on any terminal that is large enough

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
