//! Grid module - manages the 4x4 tile grid
//!
//! Each cell is empty or holds a power of two >= 2.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (row, col) where row ranges 0..3 (top to bottom), col ranges 0..3 (left to right)
//!
//! Every move is computed by one primitive, [`slide_line`], which compacts a
//! line toward index 0. Other directions read their lines reversed and/or
//! column-wise, slide them, and write them back the same way.

use std::fmt;

use arrayvec::ArrayVec;

use crate::rng::TileRng;
use crate::types::{Cell, Direction, CELL_COUNT, GRID_SIZE, SPAWN_FOUR_PERCENT, SPAWN_HIGH, SPAWN_LOW};

/// One row or column, ordered from the leading edge
pub type Line = [Cell; GRID_SIZE];

/// Slide a line toward index 0, merging equal neighbours once.
///
/// Empty cells are dropped first, then the remaining tiles are scanned left
/// to right. A tile equal to its successor doubles and consumes it; the
/// doubled tile is not considered again in the same pass, so `[2, 2, 2, 2]`
/// becomes `[4, 4, _, _]`. Returns the new line and the sum of merged values.
pub fn slide_line(line: Line) -> (Line, u32) {
    let tiles: ArrayVec<u32, GRID_SIZE> = line.iter().flatten().copied().collect();

    let mut out: Line = [None; GRID_SIZE];
    let mut points = 0;
    let mut write = 0;
    let mut read = 0;

    while read < tiles.len() {
        let value = tiles[read];
        if read + 1 < tiles.len() && tiles[read + 1] == value {
            let merged = value * 2;
            points += merged;
            out[write] = Some(merged);
            read += 2;
        } else {
            out[write] = Some(value);
            read += 1;
        }
        write += 1;
    }

    (out, points)
}

/// Result of sliding a whole grid (before any tile is spawned)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub grid: Grid,
    pub points: u32,
}

/// The game grid - 4 rows x 4 columns using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Flat array of cells, row-major order (row * GRID_SIZE + col)
    cells: [Cell; CELL_COUNT],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Build a grid from row-major values, where 0 means empty
    pub fn from_rows(rows: [[u32; GRID_SIZE]; GRID_SIZE]) -> Self {
        let mut grid = Self::new();
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                debug_assert!(value == 0 || (value >= 2 && value.is_power_of_two()));
                grid.cells[row * GRID_SIZE + col] = (value != 0).then_some(value);
            }
        }
        grid
    }

    /// Row-major values, where 0 means empty
    pub fn to_rows(&self) -> [[u32; GRID_SIZE]; GRID_SIZE] {
        let mut rows = [[0u32; GRID_SIZE]; GRID_SIZE];
        for (i, cell) in self.cells.iter().enumerate() {
            rows[i / GRID_SIZE][i % GRID_SIZE] = cell.unwrap_or(0);
        }
        rows
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: usize, col: usize) -> Option<usize> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return None;
        }
        Some(row * GRID_SIZE + col)
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Coordinates of every empty cell, in row-major order
    pub fn empty_cells(&self) -> ArrayVec<(usize, usize), CELL_COUNT> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| (i / GRID_SIZE, i % GRID_SIZE))
            .collect()
    }

    /// Number of non-empty cells
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Largest tile on the grid, if any
    pub fn max_tile(&self) -> Option<u32> {
        self.cells.iter().flatten().copied().max()
    }

    /// Place a 2 (90%) or a 4 (10%) on a uniformly chosen empty cell.
    ///
    /// Returns the chosen coordinates, or `None` when the grid is full, in
    /// which case nothing changes.
    pub fn spawn_tile<R: TileRng + ?Sized>(&mut self, rng: &mut R) -> Option<(usize, usize)> {
        let empty = self.empty_cells();
        if empty.is_empty() {
            return None;
        }

        let (row, col) = empty[rng.pick_index(empty.len())];
        let value = if rng.roll_percent(SPAWN_FOUR_PERCENT) {
            SPAWN_HIGH
        } else {
            SPAWN_LOW
        };
        self.set(row, col, Some(value));
        Some((row, col))
    }

    /// Read line `i` as seen from the leading edge of `dir`
    pub fn line(&self, dir: Direction, i: usize) -> Line {
        let mut line: Line = [None; GRID_SIZE];
        for (k, slot) in line.iter_mut().enumerate() {
            let (row, col) = Self::line_coord(dir, i, k);
            *slot = self.cells[row * GRID_SIZE + col];
        }
        line
    }

    /// Write line `i` back, ordered from the leading edge of `dir`
    pub fn set_line(&mut self, dir: Direction, i: usize, line: Line) {
        for (k, cell) in line.iter().enumerate() {
            let (row, col) = Self::line_coord(dir, i, k);
            self.cells[row * GRID_SIZE + col] = *cell;
        }
    }

    /// Grid coordinates of the `k`-th cell of line `i`, counted from the leading edge
    #[inline(always)]
    fn line_coord(dir: Direction, i: usize, k: usize) -> (usize, usize) {
        let along = if dir.is_reversed() { GRID_SIZE - 1 - k } else { k };
        if dir.is_horizontal() {
            (i, along)
        } else {
            (along, i)
        }
    }

    /// Slide every line toward `dir` without spawning.
    pub fn slide(&self, dir: Direction) -> Slide {
        let mut next = *self;
        let mut points = 0;
        for i in 0..GRID_SIZE {
            let (line, gained) = slide_line(self.line(dir, i));
            next.set_line(dir, i, line);
            points += gained;
        }
        Slide { grid: next, points }
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells = [None; CELL_COUNT];
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if col > 0 {
                    f.write_str(" ")?;
                }
                match self.cells[row * GRID_SIZE + col] {
                    Some(v) => write!(f, "{:>5}", v)?,
                    None => write!(f, "{:>5}", ".")?,
                }
            }
            if row + 1 < GRID_SIZE {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays fixed picks; every roll answers `four`.
    struct FixedRng {
        pick: usize,
        four: bool,
    }

    impl TileRng for FixedRng {
        fn pick_index(&mut self, len: usize) -> usize {
            self.pick.min(len - 1)
        }

        fn roll_percent(&mut self, _percent: u32) -> bool {
            self.four
        }
    }

    fn line(values: [u32; GRID_SIZE]) -> Line {
        values.map(|v| (v != 0).then_some(v))
    }

    #[test]
    fn test_grid_index_calculation() {
        assert_eq!(Grid::index(0, 0), Some(0));
        assert_eq!(Grid::index(0, 3), Some(3));
        assert_eq!(Grid::index(1, 0), Some(4));
        assert_eq!(Grid::index(3, 3), Some(15));
        assert_eq!(Grid::index(4, 0), None);
        assert_eq!(Grid::index(0, 4), None);
    }

    #[test]
    fn test_slide_line_single_pass_merge() {
        let (out, points) = slide_line(line([2, 2, 2, 2]));
        assert_eq!(out, line([4, 4, 0, 0]));
        assert_eq!(points, 8);
    }

    #[test]
    fn test_slide_line_merges_across_gap() {
        let (out, points) = slide_line(line([2, 0, 2, 4]));
        assert_eq!(out, line([4, 4, 0, 0]));
        assert_eq!(points, 4);
    }

    #[test]
    fn test_slide_line_does_not_remerge_new_tile() {
        let (out, points) = slide_line(line([4, 2, 2, 0]));
        assert_eq!(out, line([4, 4, 0, 0]));
        assert_eq!(points, 4);
    }

    #[test]
    fn test_slide_line_merges_leading_pair_first() {
        let (out, points) = slide_line(line([2, 2, 2, 0]));
        assert_eq!(out, line([4, 2, 0, 0]));
        assert_eq!(points, 4);
    }

    #[test]
    fn test_slide_line_compacts_without_merge() {
        let (out, points) = slide_line(line([0, 2, 0, 4]));
        assert_eq!(out, line([2, 4, 0, 0]));
        assert_eq!(points, 0);
    }

    #[test]
    fn test_slide_line_empty() {
        let (out, points) = slide_line([None; GRID_SIZE]);
        assert_eq!(out, [None; GRID_SIZE]);
        assert_eq!(points, 0);
    }

    #[test]
    fn test_line_reads_follow_direction() {
        let grid = Grid::from_rows([
            [1 << 1, 1 << 2, 1 << 3, 1 << 4],
            [1 << 5, 1 << 6, 1 << 7, 1 << 8],
            [1 << 9, 1 << 10, 1 << 11, 1 << 12],
            [1 << 13, 1 << 14, 1 << 15, 1 << 16],
        ]);
        assert_eq!(grid.line(Direction::Left, 0), line([2, 4, 8, 16]));
        assert_eq!(grid.line(Direction::Right, 0), line([16, 8, 4, 2]));
        assert_eq!(grid.line(Direction::Up, 0), line([2, 32, 512, 8192]));
        assert_eq!(grid.line(Direction::Down, 0), line([8192, 512, 32, 2]));
    }

    #[test]
    fn test_set_line_inverts_line() {
        let grid = Grid::from_rows([
            [2, 0, 4, 0],
            [0, 8, 0, 0],
            [16, 0, 0, 32],
            [0, 0, 64, 0],
        ]);
        for dir in Direction::ALL {
            let mut copy = Grid::new();
            for i in 0..GRID_SIZE {
                copy.set_line(dir, i, grid.line(dir, i));
            }
            assert_eq!(copy, grid, "{:?}", dir);
        }
    }

    #[test]
    fn test_slide_each_direction() {
        let grid = Grid::from_rows([
            [2, 0, 2, 0],
            [0, 0, 0, 0],
            [2, 0, 0, 0],
            [0, 0, 0, 4],
        ]);

        let left = grid.slide(Direction::Left);
        assert_eq!(
            left.grid.to_rows(),
            [[4, 0, 0, 0], [0, 0, 0, 0], [2, 0, 0, 0], [4, 0, 0, 0]]
        );
        assert_eq!(left.points, 4);

        let right = grid.slide(Direction::Right);
        assert_eq!(
            right.grid.to_rows(),
            [[0, 0, 0, 4], [0, 0, 0, 0], [0, 0, 0, 2], [0, 0, 0, 4]]
        );
        assert_eq!(right.points, 4);

        let up = grid.slide(Direction::Up);
        assert_eq!(
            up.grid.to_rows(),
            [[4, 0, 2, 4], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]
        );
        assert_eq!(up.points, 4);

        let down = grid.slide(Direction::Down);
        assert_eq!(
            down.grid.to_rows(),
            [[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [4, 0, 2, 4]]
        );
        assert_eq!(down.points, 4);
    }

    #[test]
    fn test_slide_does_not_mutate_source() {
        let grid = Grid::from_rows([[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]]);
        let _ = grid.slide(Direction::Left);
        assert_eq!(grid.get(0, 3), Some(Some(2)));
    }

    #[test]
    fn test_spawn_fills_chosen_empty_cell() {
        let mut grid = Grid::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let mut rng = FixedRng { pick: 0, four: false };
        assert_eq!(grid.spawn_tile(&mut rng), Some((0, 1)));
        assert_eq!(grid.get(0, 1), Some(Some(2)));

        let mut rng = FixedRng { pick: 100, four: true };
        assert_eq!(grid.spawn_tile(&mut rng), Some((3, 3)));
        assert_eq!(grid.get(3, 3), Some(Some(4)));
        assert_eq!(grid.tile_count(), 3);
    }

    #[test]
    fn test_spawn_on_full_grid_is_noop() {
        let mut grid = Grid::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        let before = grid;
        let mut rng = FixedRng { pick: 0, four: false };
        assert!(grid.is_full());
        assert_eq!(grid.spawn_tile(&mut rng), None);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_empty_cells_row_major() {
        let grid = Grid::from_rows([[2, 2, 2, 2], [2, 0, 2, 2], [2, 2, 2, 2], [2, 2, 2, 0]]);
        assert_eq!(grid.empty_cells().as_slice(), &[(1, 1), (3, 3)]);
    }

    #[test]
    fn test_rows_roundtrip_and_max_tile() {
        let rows = [[0, 2, 0, 0], [0, 0, 1024, 0], [4, 0, 0, 0], [0, 0, 0, 8]];
        let grid = Grid::from_rows(rows);
        assert_eq!(grid.to_rows(), rows);
        assert_eq!(grid.max_tile(), Some(1024));
        assert_eq!(Grid::new().max_tile(), None);
    }

    #[test]
    fn test_display_renders_dots_for_empty() {
        let grid = Grid::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let text = grid.to_string();
        assert_eq!(text.lines().count(), GRID_SIZE);
        assert!(text.starts_with("    2     ."));
    }
}
