//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It renders into a
//! simple framebuffer that can be flushed to a terminal backend, rather than
//! using a widget toolkit.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep view code pure so layout can be unit-tested without a terminal
//! - Repaint only what changed after each move

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{BoardOrigin, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
