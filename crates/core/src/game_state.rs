//! Game state module - manages the game session
//!
//! A session pairs the current grid with the running score. It is created
//! seeded with two tiles, mutated in place by moves, and replaced wholesale on
//! restart. There is no game-over state: a move that changes nothing is simply
//! ignored.

use log::{debug, info};

use crate::{GameSnapshot, Grid, SimpleRng, TileRng};
use crate::types::{Direction, GameAction, INITIAL_TILES};

/// Effect of a move that changed the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Sum of the tiles created by merges
    pub points: u32,
    /// Where the follow-up tile landed
    pub spawned: Option<(usize, usize)>,
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    grid: Grid,
    score: u32,
    rng: R,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Committed moves in the current episode.
    moves: u32,
    last_gain: u32,
}

impl GameState<SimpleRng> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl<R: TileRng> GameState<R> {
    /// Create a new game drawing spawn decisions from `rng`
    pub fn with_rng(rng: R) -> Self {
        let mut state = Self::with_grid(Grid::new(), rng);
        state.seed_grid();
        state
    }

    /// Start a session from an existing grid with a zero score
    pub fn with_grid(grid: Grid, rng: R) -> Self {
        Self {
            grid,
            score: 0,
            rng,
            episode_id: 0,
            moves: 0,
            last_gain: 0,
        }
    }

    /// Empty the grid and place the opening tiles
    fn seed_grid(&mut self) {
        self.grid.clear();
        for _ in 0..INITIAL_TILES {
            self.grid.spawn_tile(&mut self.rng);
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Place one random tile on the current grid.
    ///
    /// Silent no-op on a full grid.
    pub fn spawn_tile(&mut self) -> Option<(usize, usize)> {
        self.grid.spawn_tile(&mut self.rng)
    }

    /// Slide toward `dir`.
    ///
    /// If the slide changes any cell, the new grid and the merged points are
    /// committed and exactly one tile is spawned. Otherwise nothing changes
    /// and `None` is returned.
    pub fn move_tiles(&mut self, dir: Direction) -> Option<MoveOutcome> {
        let slide = self.grid.slide(dir);
        if slide.grid == self.grid {
            return None;
        }

        self.grid = slide.grid;
        self.score += slide.points;
        self.moves += 1;
        self.last_gain = slide.points;
        let spawned = self.grid.spawn_tile(&mut self.rng);

        debug!(
            "move {} #{}: +{} (score {}), spawned {:?}",
            dir.as_str(),
            self.moves,
            slide.points,
            self.score,
            spawned
        );

        Some(MoveOutcome {
            points: slide.points,
            spawned,
        })
    }

    /// Discard the grid and score and start a fresh game.
    ///
    /// The random source carries on from where it was, so successive
    /// episodes of a seeded game differ but remain reproducible.
    pub fn reset(&mut self) {
        self.episode_id = self.episode_id.wrapping_add(1);
        self.score = 0;
        self.moves = 0;
        self.last_gain = 0;
        self.seed_grid();
        info!("new game (episode {})", self.episode_id);
    }

    /// Apply a game action, returning whether the session changed
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(dir) => self.move_tiles(dir).is_some(),
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid = self.grid.to_rows();
        out.score = self.score;
        out.moves = self.moves;
        out.episode_id = self.episode_id;
        out.last_gain = self.last_gain;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}
