//! Terminal snake.
//!
//! The game is split into focused crates, re-exported here under short
//! names:
//!
//! - [`types`](tui_snake_types): board geometry, directions, actions,
//!   tuning constants.
//! - [`core`](tui_snake_core): the pure game state machine, tick rules,
//!   and scheduling clock. Deterministic and free of I/O.
//! - [`input`](tui_snake_input): keyboard events mapped to game actions.
//! - [`term`](tui_snake_term): framebuffer, view, and diff-based terminal
//!   renderer.
//!
//! The binary in `main.rs` wires these together into a single-threaded
//! event loop.

pub use tui_snake_core as core;
pub use tui_snake_input as input;
pub use tui_snake_term as term;
pub use tui_snake_types as types;
