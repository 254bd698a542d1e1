//! Property-based tests for the Finder controller.

use proptest::prelude::*;

use crate::core::catalog::{Catalog, Category, Entry};
use crate::core::finder::{Finder, QueryMode};

// ============================================================================
// Strategies
// ============================================================================

fn arb_category() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::All),
        Just(Category::Items),
        Just(Category::Creatures),
        Just(Category::ThanThu),
        Just(Category::Skins),
        Just(Category::Others),
    ]
}

fn arb_mode() -> impl Strategy<Value = QueryMode> {
    prop_oneof![Just(QueryMode::ByName), Just(QueryMode::ById)]
}

fn arb_entry() -> impl Strategy<Value = Entry> {
    ("[A-Za-z0-9_-]{0,12}", "[A-Za-z0-9 ']{0,24}").prop_map(|(id, name)| Entry {
        id,
        name,
        level: None,
        image_url: None,
    })
}

fn arb_dataset() -> impl Strategy<Value = Vec<Entry>> {
    prop::collection::vec(arb_entry(), 0..24)
}

fn arb_catalog() -> impl Strategy<Value = Catalog> {
    (
        arb_dataset(),
        arb_dataset(),
        arb_dataset(),
        arb_dataset(),
        arb_dataset(),
        arb_dataset(),
    )
        .prop_map(|(all, items, creatures, than_thu, skins, others)| Catalog {
            all,
            items,
            creatures,
            than_thu,
            skins,
            others,
        })
}

/// Arbitrary query text, including empty, whitespace-only, and
/// non-alphanumeric strings.
fn arb_query() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[ \t\n]{1,6}",
        "[a-zA-Z0-9 _'!@#-]{1,16}",
        ".{0,12}",
    ]
}

fn run_search(catalog: &Catalog, category: Category, mode: QueryMode, query: &str) -> Vec<Entry> {
    let mut finder = Finder::new();
    finder.select_category(category);
    if finder.query_mode() != mode {
        finder.toggle_query_mode();
    }
    finder.set_query(query);
    finder.search(catalog);
    finder.results().to_vec()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// search() is total: any catalog, category, mode, query.
    #[test]
    fn search_always_completes(
        catalog in arb_catalog(),
        category in arb_category(),
        mode in arb_mode(),
        query in arb_query(),
    ) {
        let results = run_search(&catalog, category, mode, &query);
        prop_assert!(results.len() <= catalog.dataset(category).len());
    }

    /// A blank query yields empty results, never the full dataset.
    #[test]
    fn blank_query_yields_nothing(
        catalog in arb_catalog(),
        category in arb_category(),
        mode in arb_mode(),
        blank in "[ \t\r\n]{0,8}",
    ) {
        let results = run_search(&catalog, category, mode, &blank);
        prop_assert!(results.is_empty());
    }

    /// Results are a subsequence of the active dataset: same entries,
    /// same relative order, no re-ranking.
    #[test]
    fn results_are_a_subsequence(
        catalog in arb_catalog(),
        category in arb_category(),
        mode in arb_mode(),
        query in arb_query(),
    ) {
        let results = run_search(&catalog, category, mode, &query);
        let dataset = catalog.dataset(category);

        let mut cursor = 0;
        for entry in &results {
            let found = dataset[cursor..].iter().position(|d| d == entry);
            prop_assert!(found.is_some(), "result not in dataset order");
            cursor += found.unwrap() + 1;
        }
    }

    /// Random-casing the query never changes the result set.
    #[test]
    fn matching_ignores_query_case(
        catalog in arb_catalog(),
        category in arb_category(),
        mode in arb_mode(),
        query in "[a-zA-Z0-9 ]{1,12}",
        flips in prop::collection::vec(any::<bool>(), 12),
    ) {
        let recased: String = query
            .chars()
            .zip(flips.iter().cycle())
            .map(|(c, flip)| {
                if *flip {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                }
            })
            .collect();

        let base = run_search(&catalog, category, mode, &query);
        let variant = run_search(&catalog, category, mode, &recased);
        prop_assert_eq!(base, variant);
    }

    /// Toggling the mode without a new search leaves results untouched.
    #[test]
    fn mode_toggle_keeps_results_stale(
        catalog in arb_catalog(),
        category in arb_category(),
        query in arb_query(),
    ) {
        let mut finder = Finder::new();
        finder.select_category(category);
        finder.set_query(query);
        finder.search(&catalog);
        let before = finder.results().to_vec();

        finder.toggle_query_mode();
        prop_assert_eq!(finder.results(), &before[..]);
    }

    /// Selecting a category always resets query text and results.
    #[test]
    fn category_switch_resets_state(
        catalog in arb_catalog(),
        first in arb_category(),
        second in arb_category(),
        query in arb_query(),
    ) {
        let mut finder = Finder::new();
        finder.select_category(first);
        finder.set_query(query);
        finder.search(&catalog);

        finder.select_category(second);
        prop_assert_eq!(finder.active_category(), second);
        prop_assert!(finder.query().is_empty());
        prop_assert!(finder.results().is_empty());
    }
}
