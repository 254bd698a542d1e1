//! Actions dispatched by the input mapper.

use crate::core::catalog::Category;

/// High-level actions resolved from raw key events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    SelectCategory(Category),
    NextCategory,
    PrevCategory,

    // Search
    ToggleQueryMode,
    Submit,
    ClearQuery,

    // Modals
    ShowHelp,
    CloseHelp,

    // Application
    Quit,
}
