//! Game state and core simulation types
//!
//! A `GameState` is created at start/restart, mutated once per tick by
//! [`tick`](super::tick::tick), and becomes inert once the round ends.

use std::collections::{HashSet, VecDeque};

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::grid::{Cell, GridGeometry};
use super::spawn::spawn_fruit;

/// Movement direction (screen coordinates, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step in cell coordinates
    #[inline]
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Snake is moving
    Running,
    /// Hit a wall or itself
    Over,
    /// Reached the target score (or filled the board)
    Won,
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Body cells, head first
    pub snake: VecDeque<Cell>,
    /// Direction applied on the last tick
    pub direction: Direction,
    /// Direction to apply on the next tick
    pub pending_direction: Direction,
    /// Current fruit (`None` once the round is won)
    pub fruit: Option<Cell>,
    pub score: u32,
    pub target_score: u32,
    pub phase: GamePhase,
    pub cols: i32,
    pub rows: i32,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Ticks advanced while running
    pub time_ticks: u64,
    rng: Pcg32,
}

impl GameState {
    /// Fresh round: one-cell snake in the middle of the board heading right
    pub fn new(geometry: &GridGeometry, target_score: u32, seed: u64) -> Self {
        Self::with_snake(
            geometry,
            target_score,
            seed,
            [geometry.center()],
            Direction::Right,
        )
    }

    /// Round with an explicit body (head first) and heading
    ///
    /// An empty body starts as a single head in the middle of the board.
    pub fn with_snake(
        geometry: &GridGeometry,
        target_score: u32,
        seed: u64,
        body: impl IntoIterator<Item = Cell>,
        direction: Direction,
    ) -> Self {
        let mut snake: VecDeque<Cell> = body.into_iter().collect();
        if snake.is_empty() {
            snake.push_back(geometry.center());
        }

        let mut state = Self {
            snake,
            direction,
            pending_direction: direction,
            fruit: None,
            score: 0,
            target_score: target_score.max(1),
            phase: GamePhase::Running,
            cols: geometry.cols,
            rows: geometry.rows,
            seed,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        };

        state.fruit = state.respawn_fruit();
        if state.fruit.is_none() {
            // Nowhere left to put fruit: the board is already full
            state.phase = GamePhase::Won;
        }

        state
    }

    #[inline]
    pub fn head(&self) -> Cell {
        self.snake[0]
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.snake.contains(&cell)
    }

    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.cols && cell.y < self.rows
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Over
    }

    pub fn is_won(&self) -> bool {
        self.phase == GamePhase::Won
    }

    /// Over or Won: ticks no longer change anything
    pub fn is_terminal(&self) -> bool {
        self.phase != GamePhase::Running
    }

    /// Queue a turn for the next tick
    ///
    /// Reversals of the current direction are dropped, as is any turn once
    /// the round has ended. Returns whether the turn was accepted.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.is_terminal() || direction == self.direction.opposite() {
            return false;
        }
        self.pending_direction = direction;
        true
    }

    /// Pick a new fruit cell not covered by the snake
    pub(crate) fn respawn_fruit(&mut self) -> Option<Cell> {
        let occupied: HashSet<Cell> = self.snake.iter().copied().collect();
        spawn_fruit(&mut self.rng, &occupied, self.cols, self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cols: i32, rows: i32) -> GridGeometry {
        GridGeometry::new(cols, rows, 10, 0)
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new(&board(10, 10), 10, 1);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.snake, VecDeque::from([IVec2::new(5, 5)]));
        assert_eq!(state.direction, Direction::Right);
        assert_eq!(state.pending_direction, Direction::Right);
        assert_eq!(state.score, 0);
        let fruit = state.fruit.unwrap();
        assert!(state.in_bounds(fruit));
        assert!(!state.occupies(fruit));
    }

    #[test]
    fn test_same_seed_same_fruit() {
        let a = GameState::new(&board(20, 20), 10, 99);
        let b = GameState::new(&board(20, 20), 10, 99);
        assert_eq!(a.fruit, b.fruit);
    }

    #[test]
    fn test_single_cell_board_is_won() {
        let state = GameState::new(&board(1, 1), 10, 1);
        assert!(state.is_won());
        assert_eq!(state.fruit, None);
    }

    #[test]
    fn test_empty_body_gets_a_head() {
        let state = GameState::with_snake(&board(10, 10), 10, 1, [], Direction::Up);
        assert_eq!(state.len(), 1);
        assert_eq!(state.head(), IVec2::new(5, 5));
        assert_eq!(state.direction, Direction::Up);
    }

    #[test]
    fn test_set_direction_rejects_reversal() {
        let mut state = GameState::new(&board(10, 10), 10, 1);
        assert!(!state.set_direction(Direction::Left));
        assert_eq!(state.pending_direction, Direction::Right);

        assert!(state.set_direction(Direction::Up));
        assert_eq!(state.pending_direction, Direction::Up);

        // Checked against the committed direction, not the queued one
        assert!(state.set_direction(Direction::Down));
        assert_eq!(state.pending_direction, Direction::Down);
    }

    #[test]
    fn test_set_direction_ignored_when_terminal() {
        let mut state = GameState::new(&board(10, 10), 10, 1);
        state.phase = GamePhase::Over;
        assert!(!state.set_direction(Direction::Up));
        assert_eq!(state.pending_direction, Direction::Right);
    }

    #[test]
    fn test_opposites() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_eq!(dir.delta() + dir.opposite().delta(), IVec2::ZERO);
        }
    }
}
