//! Cross-module tests for mwfinder.
//!
//! - `finder_flow`: end-to-end controller flows over the bundled catalog
//! - `property`: proptest invariants for the search engine

mod finder_flow;
mod property;
