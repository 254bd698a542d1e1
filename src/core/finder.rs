//! Search/view controller: owns the view state and runs the match
//! algorithm against the active category's dataset.
//!
//! Every transition is total and synchronous. The renderer reads the
//! accessors after each transition; it never mutates state directly.

use super::catalog::{Catalog, Category, Entry};

/// Whether free-text matching targets entry names or entry ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    ByName,
    ById,
}

impl QueryMode {
    pub fn toggled(self) -> QueryMode {
        match self {
            QueryMode::ByName => QueryMode::ById,
            QueryMode::ById => QueryMode::ByName,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QueryMode::ByName => "by name",
            QueryMode::ById => "by ID",
        }
    }

    /// Placeholder text for the query field.
    pub fn placeholder(self) -> &'static str {
        match self {
            QueryMode::ByName => "Type a name to find its ID...",
            QueryMode::ById => "Type an ID to find its name...",
        }
    }
}

/// The search screen's state tuple and its four transitions.
///
/// Initial state is `(All, ByName, "", [])`. Switching category resets
/// the query and results but deliberately leaves the query mode alone,
/// matching the shipped behavior of the original finder.
pub struct Finder {
    active_category: Category,
    query_mode: QueryMode,
    query: String,
    results: Vec<Entry>,
}

impl Finder {
    pub fn new() -> Self {
        Self {
            active_category: Category::All,
            query_mode: QueryMode::ByName,
            query: String::new(),
            results: Vec::new(),
        }
    }

    /// Switch the active category, clearing the query and any results.
    pub fn select_category(&mut self, category: Category) {
        self.active_category = category;
        self.query.clear();
        self.results.clear();
    }

    /// Flip between by-name and by-id matching. Results from the
    /// previous mode stay visible until the next search.
    pub fn toggle_query_mode(&mut self) {
        self.query_mode = self.query_mode.toggled();
    }

    /// Store the query text. Searching is explicit via [`Finder::search`].
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Run a stable, case-insensitive substring filter over the active
    /// dataset. A blank query yields no results rather than dumping the
    /// whole dataset.
    pub fn search(&mut self, catalog: &Catalog) {
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            self.results.clear();
            return;
        }

        let mode = self.query_mode;
        self.results = catalog
            .dataset(self.active_category)
            .iter()
            .filter(|entry| {
                let field = match mode {
                    QueryMode::ByName => &entry.name,
                    QueryMode::ById => &entry.id,
                };
                field.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();
    }

    // ── Accessors ───────────────────────────────────────────────────────

    pub fn active_category(&self) -> Category {
        self.active_category
    }

    pub fn query_mode(&self) -> QueryMode {
        self.query_mode
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[Entry] {
        &self.results
    }

    /// True when a meaningful search came up empty. Distinct from an
    /// untouched/blank query, which shows no message at all.
    pub fn has_no_matches(&self) -> bool {
        self.results.is_empty() && !self.query.trim().is_empty()
    }
}

impl Default for Finder {
    fn default() -> Self {
        Self::new()
    }
}
