//! Shared types module - board constants and game vocabulary
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, rendering, input mapping, tests).
//!
//! # Board Dimensions
//!
//! The board is a fixed 20x20 grid:
//!
//! - **Cells**: `(x, y)` with `0 <= x < 20` and `0 <= y < 20`
//! - **Orientation**: `y` grows downward, so [`Direction::Up`] is `y - 1`
//! - **Initial snake**: head `(10, 10)`, body `(9, 10)`, `(8, 10)`, heading
//!   right
//! - **Initial food**: `(15, 10)`
//!
//! # Game Timing Constants
//!
//! Speed values are tick intervals in milliseconds (smaller = faster):
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_SPEED_MS` | 150 | Starting tick interval |
//! | `SPEED_FLOOR_MS` | 50 | Fastest possible interval |
//! | `SPEED_STEP_MS` | 10 | Interval reduction per speed step |
//! | `SPEED_STEP_SCORE` | 100 | Score required per speed step |
//! | `FOOD_SCORE` | 10 | Points awarded per food eaten |
//!
//! The interval for a given score is always derived from
//! `INITIAL_SPEED_MS`, never compounded from the previous interval.
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, Position, BOARD_SIZE, INITIAL_SNAKE};
//!
//! let head = INITIAL_SNAKE[0];
//! assert_eq!(head, Position::new(10, 10));
//!
//! // Step one cell in a direction
//! assert_eq!(head.stepped(Direction::Right), Position::new(11, 10));
//!
//! // Opposite headings form fixed pairs
//! assert_eq!(Direction::Left.opposite(), Direction::Right);
//!
//! // Bounds checks
//! assert!(head.in_bounds());
//! assert!(!Position::new(-1, 0).in_bounds());
//! assert_eq!(BOARD_SIZE, 20);
//! ```

/// Board width and height in cells (square 20x20 grid)
pub const BOARD_SIZE: u8 = 20;

/// Total number of board cells (400)
pub const BOARD_CELLS: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Initial snake body, head first: three cells in the middle row
pub const INITIAL_SNAKE: [Position; 3] = [
    Position::new(10, 10),
    Position::new(9, 10),
    Position::new(8, 10),
];

/// Initial food cell
pub const INITIAL_FOOD: Position = Position::new(15, 10);

/// Initial heading
pub const INITIAL_DIRECTION: Direction = Direction::Right;

/// Starting tick interval in milliseconds
pub const INITIAL_SPEED_MS: u32 = 150;

/// Fastest possible tick interval (speed floor)
pub const SPEED_FLOOR_MS: u32 = 50;

/// Interval reduction per speed step in milliseconds
pub const SPEED_STEP_MS: u32 = 10;

/// Score required for each speed step
pub const SPEED_STEP_SCORE: u32 = 100;

/// Points awarded per food eaten
pub const FOOD_SCORE: u32 = 10;

/// A cell on the board
///
/// Signed coordinates so that one step past an edge is representable;
/// [`Position::in_bounds`] is the validity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// The neighboring cell one step in `direction`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::{Direction, Position};
    ///
    /// let p = Position::new(5, 5);
    /// assert_eq!(p.stepped(Direction::Up), Position::new(5, 4));
    /// assert_eq!(p.stepped(Direction::Right), Position::new(6, 5));
    /// ```
    pub fn stepped(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Whether the cell lies on the board.
    pub fn in_bounds(&self) -> bool {
        self.x >= 0 && self.x < BOARD_SIZE as i8 && self.y >= 0 && self.y < BOARD_SIZE as i8
    }
}

/// The four headings a snake can travel in
///
/// `y` grows downward (terminal row order), so `Up` decreases `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The 180° opposite heading.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Down.opposite(), Direction::Up);
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// assert_eq!(Direction::Right.opposite(), Direction::Left);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit cell offset `(dx, dy)` for this heading.
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Game lifecycle status
///
/// Exactly one status holds at a time:
///
/// - **Waiting**: initial state, snake not moving yet
/// - **Playing**: ticks advance the snake
/// - **Paused**: frozen, resumable
/// - **GameOver**: terminal until a reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Waiting,
    Playing,
    Paused,
    GameOver,
}

/// Player commands that can be applied to the game state
///
/// Input mapping produces these; the core decides what each one means in the
/// current status (e.g. `StartPause` starts a waiting game but toggles pause
/// on a running one).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Request a new heading (ignored unless playing and non-opposite)
    Turn(Direction),
    /// Start from waiting, or toggle pause while playing/paused
    StartPause,
    /// Return to the initial waiting state from anywhere
    Reset,
}
