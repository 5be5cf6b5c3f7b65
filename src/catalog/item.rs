//! Items and their categories.
//!
//! The item set is fixed: 9 weapons, 6 suspects and 9 rooms. Items are
//! dense ids laid out category by category, so the category of an item
//! is a range check and per-item tables are plain arrays.

use serde::{Deserialize, Serialize};

/// Number of weapons in the catalog.
pub const WEAPON_COUNT: usize = 9;
/// Number of suspects in the catalog.
pub const SUSPECT_COUNT: usize = 6;
/// Number of rooms in the catalog.
pub const ROOM_COUNT: usize = 9;
/// Total number of items.
pub const ITEM_COUNT: usize = WEAPON_COUNT + SUSPECT_COUNT + ROOM_COUNT;

/// Canonical item names, in id order.
pub(crate) const CANONICAL_NAMES: [&str; ITEM_COUNT] = [
    // weapons
    "knife",
    "candlestick",
    "pistol",
    "poison",
    "trophy",
    "rope",
    "bat",
    "axe",
    "dumbbell",
    // suspects
    "scarlett",
    "mustard",
    "white",
    "green",
    "peacock",
    "plum",
    // rooms
    "hall",
    "dining room",
    "kitchen",
    "patio",
    "observatory",
    "theatre",
    "living room",
    "spa",
    "guest house",
];

/// One of the three secret categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Weapon,
    Suspect,
    Room,
}

impl Category {
    /// All categories, in rumour slot order.
    pub const ALL: [Category; 3] = [Category::Weapon, Category::Suspect, Category::Room];

    /// Slot index of this category within a rumour.
    #[must_use]
    pub const fn slot(self) -> usize {
        match self {
            Category::Weapon => 0,
            Category::Suspect => 1,
            Category::Room => 2,
        }
    }

    /// Id range of this category's items.
    #[must_use]
    pub const fn id_range(self) -> std::ops::Range<u8> {
        match self {
            Category::Weapon => 0..WEAPON_COUNT as u8,
            Category::Suspect => WEAPON_COUNT as u8..(WEAPON_COUNT + SUSPECT_COUNT) as u8,
            Category::Room => (WEAPON_COUNT + SUSPECT_COUNT) as u8..ITEM_COUNT as u8,
        }
    }

    /// Iterate over this category's items.
    pub fn items(self) -> impl Iterator<Item = Item> {
        self.id_range().map(Item)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Weapon => "weapon",
            Category::Suspect => "suspect",
            Category::Room => "room",
        };
        f.write_str(name)
    }
}

/// An item from the catalog.
///
/// ```
/// use cluedo_deduce::catalog::{Category, Item};
///
/// let rope = Item::new(5).unwrap();
/// assert_eq!(rope.name(), "rope");
/// assert_eq!(rope.category(), Category::Weapon);
/// assert!(Item::new(24).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Item(u8);

impl Item {
    /// Create an item from its raw id, if it is in the catalog.
    #[must_use]
    pub const fn new(id: u8) -> Option<Self> {
        if (id as usize) < ITEM_COUNT {
            Some(Self(id))
        } else {
            None
        }
    }

    /// Get the raw id.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Get the raw id as an index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The category this item belongs to.
    #[must_use]
    pub const fn category(self) -> Category {
        if (self.0 as usize) < WEAPON_COUNT {
            Category::Weapon
        } else if (self.0 as usize) < WEAPON_COUNT + SUSPECT_COUNT {
            Category::Suspect
        } else {
            Category::Room
        }
    }

    /// The canonical name.
    #[must_use]
    pub fn name(self) -> &'static str {
        CANONICAL_NAMES[self.index()]
    }

    /// Iterate over every item in the catalog.
    pub fn all() -> impl Iterator<Item = Item> {
        (0..ITEM_COUNT as u8).map(Item)
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Item {
    type Error = String;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Item::new(id).ok_or_else(|| format!("no item with id {}", id))
    }
}

impl From<Item> for u8 {
    fn from(item: Item) -> Self {
        item.0
    }
}
