//! Name resolution for catalog items.
//!
//! The `ItemCatalog` maps canonical names and their aliases to items.
//! Matching is exact after trimming and lowercasing; prefix or fuzzy
//! matching belongs to whatever shell collects user input.

use rustc_hash::FxHashMap;

use super::item::Item;

/// Alternative spellings, each mapped to a canonical name.
const ALIASES: [(&str, &str); 6] = [
    ("revolver", "pistol"),
    ("gun", "pistol"),
    ("red", "scarlett"),
    ("yellow", "mustard"),
    ("blue", "peacock"),
    ("purple", "plum"),
];

/// Lookup table from names to items.
///
/// ## Example
///
/// ```
/// use cluedo_deduce::catalog::{Category, ItemCatalog};
///
/// let catalog = ItemCatalog::standard();
///
/// let gun = catalog.resolve("Revolver").unwrap();
/// assert_eq!(gun.name(), "pistol");
/// assert_eq!(gun.category(), Category::Weapon);
/// assert!(catalog.resolve("banana").is_none());
/// ```
#[derive(Clone, Debug)]
pub struct ItemCatalog {
    names: FxHashMap<String, Item>,
}

impl ItemCatalog {
    /// The standard catalog with all canonical names and aliases.
    #[must_use]
    pub fn standard() -> Self {
        let mut names = FxHashMap::default();
        for item in Item::all() {
            names.insert(item.name().to_string(), item);
        }
        for (alias, canonical) in ALIASES {
            if let Some(&item) = names.get(canonical) {
                names.insert(alias.to_string(), item);
            }
        }
        Self { names }
    }

    /// Resolve a canonical name or alias to an item.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<Item> {
        self.names.get(&name.trim().to_ascii_lowercase()).copied()
    }

    /// Number of resolvable names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the catalog has no names.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for ItemCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
