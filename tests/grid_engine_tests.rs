//! Move/merge/spawn properties of the grid engine.

use tui_2048::core::{slide_line, GameState, Grid, Line, SimpleRng, TileRng};
use tui_2048::types::{Direction, GameAction, GRID_SIZE};

/// Replays a fixed list of cell picks and 4-rolls, then falls back to
/// "first empty cell, spawn a 2".
struct ScriptedRng {
    picks: Vec<usize>,
    fours: Vec<bool>,
}

impl ScriptedRng {
    fn new(picks: &[usize], fours: &[bool]) -> Self {
        Self {
            picks: picks.iter().rev().copied().collect(),
            fours: fours.iter().rev().copied().collect(),
        }
    }
}

impl TileRng for ScriptedRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.picks.pop().unwrap_or(0) % len
    }

    fn roll_percent(&mut self, _percent: u32) -> bool {
        self.fours.pop().unwrap_or(false)
    }
}

fn line(values: [u32; GRID_SIZE]) -> Line {
    values.map(|v| (v != 0).then_some(v))
}

fn reversed(mut l: Line) -> Line {
    l.reverse();
    l
}

fn session(rows: [[u32; GRID_SIZE]; GRID_SIZE]) -> GameState<ScriptedRng> {
    GameState::with_grid(Grid::from_rows(rows), ScriptedRng::new(&[], &[]))
}

#[test]
fn test_four_equal_tiles_merge_pairwise() {
    let mut game = session([[2, 2, 2, 2], [0; 4], [0; 4], [0; 4]]);
    let outcome = game.move_tiles(Direction::Left).unwrap();

    // Merged row first, then the spawn lands on the first empty cell (0, 2).
    assert_eq!(game.grid().to_rows()[0], [4, 4, 2, 0]);
    assert_eq!(outcome.points, 8);
    assert_eq!(game.score(), 8);
}

#[test]
fn test_gap_does_not_block_merge() {
    let slide = Grid::from_rows([[2, 0, 2, 4], [0; 4], [0; 4], [0; 4]]).slide(Direction::Left);
    assert_eq!(slide.grid.to_rows()[0], [4, 4, 0, 0]);
    assert_eq!(slide.points, 4);
}

#[test]
fn test_right_is_reverse_left_reverse() {
    let samples = [
        [2, 2, 2, 2],
        [2, 0, 2, 4],
        [0, 0, 0, 2],
        [4, 4, 8, 8],
        [2, 4, 8, 16],
        [0, 2, 2, 0],
        [8, 0, 0, 8],
        [0, 0, 0, 0],
    ];
    for values in samples {
        let grid = Grid::from_rows([values, [0; 4], [0; 4], [0; 4]]);

        let (left_of_reversed, points) = slide_line(reversed(line(values)));
        let right = grid.slide(Direction::Right);

        assert_eq!(
            right.grid.line(Direction::Left, 0),
            reversed(left_of_reversed),
            "{:?}",
            values
        );
        assert_eq!(right.points, points);
    }
}

#[test]
fn test_vertical_moves_treat_columns_as_rows() {
    let grid = Grid::from_rows([[2, 0, 0, 0], [2, 0, 0, 0], [4, 0, 0, 0], [4, 0, 0, 0]]);

    let up = grid.slide(Direction::Up);
    assert_eq!(up.grid.line(Direction::Up, 0), line([4, 8, 0, 0]));
    assert_eq!(up.points, 12);

    let down = grid.slide(Direction::Down);
    assert_eq!(
        down.grid.to_rows(),
        [[0; 4], [0; 4], [4, 0, 0, 0], [8, 0, 0, 0]]
    );
    assert_eq!(down.points, 12);
}

#[test]
fn test_compacted_grid_without_pairs_is_noop_in_that_direction() {
    let rows = [[2, 4, 8, 16], [4, 8, 16, 0], [8, 16, 0, 0], [16, 0, 0, 0]];
    let mut game = session(rows);

    assert!(game.move_tiles(Direction::Left).is_none());
    assert!(game.move_tiles(Direction::Up).is_none());
    assert!(!game.apply_action(GameAction::Move(Direction::Left)));

    assert_eq!(game.grid().to_rows(), rows);
    assert_eq!(game.score(), 0);
    assert_eq!(game.moves(), 0);

    // The other two directions can still move.
    assert!(game.move_tiles(Direction::Right).is_some());
}

#[test]
fn test_committed_move_adds_exactly_one_tile() {
    let mut game = GameState::new(2024);
    for dir in Direction::ALL.repeat(25) {
        let slid = game.grid().slide(dir);
        match game.move_tiles(dir) {
            Some(outcome) => {
                assert!(outcome.spawned.is_some());
                assert_eq!(game.grid().tile_count(), slid.grid.tile_count() + 1);
            }
            None => assert_eq!(*game.grid(), slid.grid),
        }
    }
}

#[test]
fn test_score_is_sum_of_merges() {
    let mut game = GameState::new(5);
    let mut expected = 0;
    for dir in Direction::ALL.repeat(40) {
        let before = game.score();
        if let Some(outcome) = game.move_tiles(dir) {
            expected += outcome.points;
        }
        assert!(game.score() >= before);
    }
    assert_eq!(game.score(), expected);
}

#[test]
fn test_scripted_spawn_value_and_position() {
    // Opening: pick index 5 -> (1, 1) as a 2, then index 14 of the remaining 15 -> (3, 3) as a 4.
    let game = GameState::with_rng(ScriptedRng::new(&[5, 14], &[false, true]));
    assert_eq!(
        game.grid().to_rows(),
        [[0, 0, 0, 0], [0, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 4]]
    );
}

#[test]
fn test_initialization_deals_two_small_tiles() {
    for seed in 0..200 {
        let game = GameState::new(seed);
        assert_eq!(game.grid().tile_count(), 2, "seed {}", seed);
        assert!(game
            .grid()
            .cells()
            .iter()
            .flatten()
            .all(|&v| v == 2 || v == 4));
        assert_eq!(game.score(), 0);
    }
}

#[test]
fn test_reset_after_play() {
    let mut game = GameState::new(31);
    for dir in Direction::ALL.repeat(10) {
        game.move_tiles(dir);
    }
    assert!(game.moves() > 0);

    game.reset();
    assert_eq!(game.score(), 0);
    assert_eq!(game.moves(), 0);
    assert_eq!(game.episode_id(), 1);
    assert_eq!(game.grid().tile_count(), 2);
}

#[test]
fn test_spawn_never_overwrites() {
    let mut grid = Grid::new();
    let mut rng = SimpleRng::new(11);
    for expected in 1..=16 {
        let before = grid;
        let (row, col) = grid.spawn_tile(&mut rng).unwrap();
        assert_eq!(before.get(row, col), Some(None));
        assert_eq!(grid.tile_count(), expected);
    }
    let full = grid;
    assert_eq!(grid.spawn_tile(&mut rng), None);
    assert_eq!(grid, full);
}

#[test]
fn test_spawn_odds_are_about_ninety_ten() {
    let mut rng = SimpleRng::new(123);
    let mut fours = 0;
    for _ in 0..5_000 {
        let mut grid = Grid::new();
        grid.spawn_tile(&mut rng);
        if grid.max_tile() == Some(4) {
            fours += 1;
        }
    }
    assert!((350..650).contains(&fours), "fours = {}", fours);
}

#[test]
fn test_any_rand_rng_drives_spawns() {
    use rand::{rngs::StdRng, SeedableRng};

    let mut game = GameState::with_rng(StdRng::seed_from_u64(9));
    assert_eq!(game.grid().tile_count(), 2);
    game.reset();
    assert_eq!(game.grid().tile_count(), 2);
}
