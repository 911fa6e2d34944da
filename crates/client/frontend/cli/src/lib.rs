//! Terminal UI frontend for the turn-based battle.
//!
//! # Architecture
//!
//! The front-end owns one [`runtime::BattleRuntime`] at a time:
//! - [`view::BattleView`] is the presenter the runtime draws into
//! - the event loop feeds it key presses and wall-clock time
//! - restarting throws the runtime away and asks the bootstrap for a new one

mod app;
mod config;
mod event;
mod input;
pub mod logging;
pub mod message;
pub mod presentation;
pub mod view;

pub use app::CliApp;
pub use config::{CliConfig, UiConfig};
pub use input::{InputHandler, KeyAction};
