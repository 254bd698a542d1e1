//! Startup data loading.
//!
//! Each category ships as a bundled JSON file compiled into the binary.
//! A file with the category's key name in the configured data directory
//! overrides the bundled copy, so updated ID lists can be dropped in
//! without rebuilding. `all.json` is a separately maintained union of
//! the other five; it is loaded as-is, never re-derived.

use std::path::Path;

use thiserror::Error;

use crate::core::catalog::{Catalog, Category, Entry};

fn bundled(category: Category) -> &'static str {
    match category {
        Category::All => include_str!("../../assets/data/all.json"),
        Category::Items => include_str!("../../assets/data/items.json"),
        Category::Creatures => include_str!("../../assets/data/creatures.json"),
        Category::ThanThu => include_str!("../../assets/data/than_thu.json"),
        Category::Skins => include_str!("../../assets/data/skins.json"),
        Category::Others => include_str!("../../assets/data/others.json"),
    }
}

/// Errors raised while materializing the catalog at startup.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Load one category's dataset: override file if present, bundled copy
/// otherwise.
fn load_dataset(category: Category, data_dir: &Path) -> Result<Vec<Entry>, DataError> {
    let override_path = data_dir.join(format!("{}.json", category.key()));

    match std::fs::read_to_string(&override_path) {
        Ok(contents) => {
            let entries =
                serde_json::from_str(&contents).map_err(|source| DataError::Parse {
                    path: override_path.display().to_string(),
                    source,
                })?;
            tracing::info!(
                "Loaded {} override from {}",
                category.key(),
                override_path.display()
            );
            Ok(entries)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            serde_json::from_str(bundled(category)).map_err(|source| DataError::Parse {
                path: format!("bundled:{}.json", category.key()),
                source,
            })
        }
        Err(source) => Err(DataError::Io {
            path: override_path.display().to_string(),
            source,
        }),
    }
}

/// Build the full catalog once at process start.
pub fn load_catalog(data_dir: &Path) -> Result<Catalog, DataError> {
    let catalog = Catalog {
        all: load_dataset(Category::All, data_dir)?,
        items: load_dataset(Category::Items, data_dir)?,
        creatures: load_dataset(Category::Creatures, data_dir)?,
        than_thu: load_dataset(Category::ThanThu, data_dir)?,
        skins: load_dataset(Category::Skins, data_dir)?,
        others: load_dataset(Category::Others, data_dir)?,
    };

    for cat in Category::ALL {
        tracing::debug!("Dataset {}: {} entries", cat.key(), catalog.dataset(cat).len());
    }

    Ok(catalog)
}
