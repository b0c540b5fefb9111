use crate::types::GRID_SIZE;

/// Read-only view of a session, consumed by the renderer.
///
/// `grid` holds tile values with 0 for empty cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid: [[u32; GRID_SIZE]; GRID_SIZE],
    pub score: u32,
    pub moves: u32,
    pub episode_id: u32,
    /// Points gained by the most recent committed move.
    pub last_gain: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.grid = [[0u32; GRID_SIZE]; GRID_SIZE];
        self.score = 0;
        self.moves = 0;
        self.episode_id = 0;
        self.last_gain = 0;
    }

    pub fn tile_count(&self) -> usize {
        self.grid.iter().flatten().filter(|&&v| v != 0).count()
    }

    pub fn max_tile(&self) -> u32 {
        self.grid.iter().flatten().copied().max().unwrap_or(0)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[0u32; GRID_SIZE]; GRID_SIZE],
            score: 0,
            moves: 0,
            episode_id: 0,
            last_gain: 0,
        }
    }
}
