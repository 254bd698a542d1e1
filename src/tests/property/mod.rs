//! Property-based tests for the search engine.
//!
//! Properties verified with proptest rather than example cases:
//!
//! - `finder_props`: the controller's transition/matcher invariants
//!   - `search()` completes for any category and any query string
//!   - a blank query always yields empty results
//!   - results are a subsequence of the active dataset
//!   - random-casing a query never changes the result set
//!   - toggling the mode without searching never changes the results
//!
//! Proptest runs 256 cases per property by default; override with the
//! `PROPTEST_CASES` environment variable.

mod finder_props;
