//! Terminal front end for the snake core.
//!
//! Split into three layers so the drawing logic stays testable without a
//! TTY:
//!
//! - [`fb`]: an in-memory grid of styled cells.
//! - [`game_view`]: pure painting of a game state into that grid.
//! - [`renderer`]: raw-mode terminal setup and diff-based flushing.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
