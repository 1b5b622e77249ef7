//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] values. The
//! mapping is stateless; one key press means one command, and terminal
//! auto-repeat is the caller's concern (the runner only feeds key-press
//! events through).

pub mod map;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};
