//! Event handling for the CLI client.
//!
//! This module contains the event loop that advances the battle clock,
//! forwards keyboard input, and redraws the screen.

mod handlers;
mod r#loop;

pub use r#loop::EventLoop;
