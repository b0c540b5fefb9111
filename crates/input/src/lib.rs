//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]. Each key press is
//! dispatched synchronously; there is no auto-repeat handling since every
//! move is a discrete step.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
