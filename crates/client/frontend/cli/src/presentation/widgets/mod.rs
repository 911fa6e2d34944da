//! Battle screen widgets.
pub mod combatants;
pub mod commands;
pub mod footer;
pub mod header;
pub mod info;
