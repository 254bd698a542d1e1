//! Reference catalog: the six fixed datasets and the category tabs
//! that key into them.
//!
//! Datasets are built once at startup by the `data` loader and never
//! mutated afterwards; the catalog only hands out shared slices.

use serde::{Deserialize, Serialize};

/// One searchable record (item, creature, skin, spirit beast, ...).
///
/// `id` and `name` default to the empty string when absent in the
/// source data, so a malformed record never matches a non-empty query
/// instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Stable identifier, unique within its category.
    #[serde(default)]
    pub id: String,
    /// Localized display name.
    #[serde(default)]
    pub name: String,
    /// Spirit-beast level (absent for other categories).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    /// Spirit-beast portrait URL (absent for other categories).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// The closed set of category tabs. `All` is a separately maintained
/// union of the other five, not derived at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    All,
    Items,
    Creatures,
    ThanThu,
    Skins,
    Others,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::All,
        Category::Items,
        Category::Creatures,
        Category::ThanThu,
        Category::Skins,
        Category::Others,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Items => "Items",
            Category::Creatures => "Creatures",
            Category::ThanThu => "Spirit Beasts",
            Category::Skins => "Skins",
            Category::Others => "Others",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::All => "◈",
            Category::Items => "⚔",
            Category::Creatures => "✿",
            Category::ThanThu => "★",
            Category::Skins => "❖",
            Category::Others => "◇",
        }
    }

    /// Stable string key, used for data file names and untyped
    /// boundaries.
    pub fn key(self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Items => "items",
            Category::Creatures => "creatures",
            Category::ThanThu => "than_thu",
            Category::Skins => "skins",
            Category::Others => "others",
        }
    }

    /// Parse a key arriving from an untyped boundary. Unrecognized keys
    /// map to the combined view instead of erroring.
    pub fn from_key(key: &str) -> Category {
        match key {
            "items" => Category::Items,
            "creatures" => Category::Creatures,
            "than_thu" => Category::ThanThu,
            "skins" => Category::Skins,
            "others" => Category::Others,
            _ => Category::All,
        }
    }

    pub fn next(self) -> Category {
        let idx = Category::ALL.iter().position(|&c| c == self).unwrap_or(0);
        Category::ALL[(idx + 1) % Category::ALL.len()]
    }

    pub fn prev(self) -> Category {
        let idx = Category::ALL.iter().position(|&c| c == self).unwrap_or(0);
        Category::ALL[(idx + Category::ALL.len() - 1) % Category::ALL.len()]
    }
}

/// The six immutable datasets, keyed by [`Category`].
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub(crate) all: Vec<Entry>,
    pub(crate) items: Vec<Entry>,
    pub(crate) creatures: Vec<Entry>,
    pub(crate) than_thu: Vec<Entry>,
    pub(crate) skins: Vec<Entry>,
    pub(crate) others: Vec<Entry>,
}

impl Catalog {
    /// The ordered dataset for a category. Total over the closed set.
    pub fn dataset(&self, category: Category) -> &[Entry] {
        match category {
            Category::All => &self.all,
            Category::Items => &self.items,
            Category::Creatures => &self.creatures,
            Category::ThanThu => &self.than_thu,
            Category::Skins => &self.skins,
            Category::Others => &self.others,
        }
    }
}
