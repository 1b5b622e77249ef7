//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and tick logic.
//! It has **zero dependencies** on UI, input, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, headless, tests)
//! - **Fast**: No heap allocation on the tick path after construction
//!
//! # Module Structure
//!
//! - [`game_state`]: The snake state machine, its guarded commands, and the
//!   tick engine
//! - [`clock`]: The single tick timer (arm/cancel/re-arm) in pure
//!   millisecond arithmetic
//! - [`rng`]: Seeded LCG used for food placement
//! - [`scoring`]: The score-driven speed curve
//!
//! # Game Rules
//!
//! - **One step per tick**: the head advances one cell in the latest
//!   commanded heading; the tail follows unless the step ate food
//! - **Pre-move collision**: walls and the pre-move body (tail included,
//!   head excluded) are checked before anything mutates; a collision only
//!   flips the status to game over
//! - **Growth**: eating keeps the tail in place, scores 10, and respawns
//!   food on a random free cell
//! - **Speed**: every 100 points shortens the tick interval by 10ms from the
//!   initial 150ms, down to a 50ms floor
//! - **Turn guard**: 180° reversals relative to the latest commanded heading
//!   are ignored; everything else applies to the next tick
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameState, TickOutcome};
//! use tui_snake_types::{Direction, GameAction, GameStatus};
//!
//! // Create and start a game
//! let mut game = GameState::new(12345);
//! game.apply_action(GameAction::StartPause);
//! assert_eq!(game.status(), GameStatus::Playing);
//!
//! // Steer and advance
//! game.apply_action(GameAction::Turn(Direction::Up));
//! assert_eq!(game.tick(), TickOutcome::Moved);
//! assert_eq!(game.snake().len(), 3);
//! ```
//!
//! # Timing
//!
//! The core never reads a wall clock. [`TickClock`] tracks the one pending
//! tick deadline in caller-supplied milliseconds; the runner feeds it
//! elapsed time and calls [`GameState::tick`] when a deadline fires. Pausing,
//! game over, and reset all disarm the timer; eating re-arms it whenever the
//! speed changed.

pub mod clock;
pub mod game_state;
pub mod rng;
pub mod scoring;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use clock::TickClock;
pub use game_state::{GameState, TickOutcome};
pub use rng::GameRng;
pub use scoring::speed_for_score;
