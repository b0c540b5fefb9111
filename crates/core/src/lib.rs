//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the 2048 rules and session state. It has **zero
//! dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Spawn decisions come from an injectable [`TileRng`]
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Moves are computed on stack arrays with no allocation
//!
//! # Module Structure
//!
//! - [`grid`]: 4x4 grid, the line slide/merge primitive, and tile spawning
//! - [`game_state`]: Session pairing the grid with score and move counters
//! - [`rng`]: Random source trait and a seedable LCG
//! - [`snapshot`]: Plain-data view of a session for rendering
//!
//! # Game Rules
//!
//! - **Start**: Two tiles are spawned on an empty grid
//! - **Spawn**: A uniformly chosen empty cell receives a 2 (90%) or a 4 (10%)
//! - **Move**: Every line slides toward the chosen edge; equal neighbours merge
//!   once per move and the merged value is added to the score
//! - **Commit**: Only a move that changes the grid counts, and it is followed by
//!   exactly one spawn
//! - **Restart**: Score returns to 0 and a fresh two-tile grid is dealt
//!
//! There is no win or game-over detection.
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameState;
//! use tui_2048_types::{Direction, GameAction};
//!
//! let mut game = GameState::new(12345);
//! assert_eq!(game.grid().tile_count(), 2);
//!
//! // Moves that change nothing are ignored.
//! for dir in Direction::ALL {
//!     game.apply_action(GameAction::Move(dir));
//! }
//!
//! game.apply_action(GameAction::Restart);
//! assert_eq!(game.score(), 0);
//! assert_eq!(game.grid().tile_count(), 2);
//! ```

pub mod game_state;
pub mod grid;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use game_state::{GameState, MoveOutcome};
pub use grid::{slide_line, Grid, Line, Slide};
pub use rng::{SimpleRng, TileRng};
pub use snapshot::GameSnapshot;
