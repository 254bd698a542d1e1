//! Controller flows exercised against the bundled datasets, the same
//! data the shipped binary searches.

use std::path::Path;

use crate::core::catalog::{Catalog, Category};
use crate::core::finder::{Finder, QueryMode};
use crate::data::load_catalog;

fn bundled() -> Catalog {
    load_catalog(Path::new("/nonexistent/mwfinder-data")).unwrap()
}

#[test]
fn searching_sword_in_items_finds_all_swords_in_dataset_order() {
    let catalog = bundled();
    let mut finder = Finder::new();
    finder.select_category(Category::Items);
    finder.set_query("sword");
    finder.search(&catalog);

    let names: Vec<&str> = finder.results().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Wooden Sword", "Iron Sword", "Golden Sword"]);
}

#[test]
fn id_search_is_case_insensitive_against_bundled_ids() {
    let catalog = bundled();
    let mut finder = Finder::new();
    finder.select_category(Category::ThanThu);
    finder.toggle_query_mode();
    finder.set_query("tt001");
    finder.search(&catalog);

    assert_eq!(finder.results().len(), 1);
    assert_eq!(finder.results()[0].name, "Azure Dragon");
    assert_eq!(finder.results()[0].level, Some(5));
}

#[test]
fn combined_view_spans_every_category() {
    let catalog = bundled();
    let mut finder = Finder::new();
    // "o" appears in entries from several categories
    finder.set_query("o");
    finder.search(&catalog);

    let item_hit = finder.results().iter().any(|e| e.name == "Wooden Sword");
    let pet_hit = finder.results().iter().any(|e| e.name == "Golden Roc");
    assert!(item_hit && pet_hit);
}

#[test]
fn switching_category_resets_query_but_not_mode() {
    let catalog = bundled();
    let mut finder = Finder::new();
    finder.select_category(Category::Items);
    finder.toggle_query_mode();
    finder.set_query("10011");
    finder.search(&catalog);
    assert!(!finder.results().is_empty());

    finder.select_category(Category::Creatures);
    assert!(finder.query().is_empty());
    assert!(finder.results().is_empty());
    assert_eq!(finder.query_mode(), QueryMode::ById);
}

#[test]
fn empty_submit_never_dumps_the_dataset() {
    let catalog = bundled();
    for cat in Category::ALL {
        let mut finder = Finder::new();
        finder.select_category(cat);
        finder.set_query("   ");
        finder.search(&catalog);
        assert!(finder.results().is_empty(), "category {}", cat.key());
    }
}

#[test]
fn no_match_is_a_normal_outcome() {
    let catalog = bundled();
    let mut finder = Finder::new();
    finder.set_query("zzz-no-match");
    finder.search(&catalog);
    assert!(finder.results().is_empty());
    assert!(finder.has_no_matches());
}
