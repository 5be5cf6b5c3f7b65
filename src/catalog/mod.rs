//! Item catalog: the fixed weapons, suspects and rooms.
//!
//! ## Key Types
//!
//! - `Category`: weapon, suspect or room
//! - `Item`: a catalog item, carrying its category
//! - `ItemCatalog`: canonical-name and alias resolution
//!
//! The catalog is static; nothing here holds game state.

pub mod item;
pub mod registry;

pub use item::{Category, Item, ITEM_COUNT, ROOM_COUNT, SUSPECT_COUNT, WEAPON_COUNT};
pub use registry::ItemCatalog;
