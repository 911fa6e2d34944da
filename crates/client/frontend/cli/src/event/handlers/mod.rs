//! Event handler implementations for EventLoop.
//!
//! - `input`: keyboard input, battle keys, restart and quit
//! - `rendering`: terminal rendering

mod input;
mod rendering;
