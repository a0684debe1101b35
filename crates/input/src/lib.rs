//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]. Anything that
//! maps to no action is ignored by the caller: no state change, no redraw.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
