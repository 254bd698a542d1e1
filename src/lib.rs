//! mwfinder - Mini World ID Finder (TUI Edition)
//!
//! Core library providing the categorized reference catalog, the
//! search/view controller, and the terminal UI for browsing Mini World
//! item, creature, skin, and spirit-beast IDs.

pub mod config;
pub mod core;
pub mod data;
pub mod tui;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
