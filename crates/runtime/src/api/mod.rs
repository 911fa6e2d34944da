//! Public API surface of the runtime.
//!
//! - [`errors`] defines [`RuntimeError`] and the crate [`Result`] alias
//! - [`presenter`] declares the capability a front-end implements
mod errors;
mod presenter;

pub use errors::{Result, RuntimeError};
pub use presenter::Presenter;
