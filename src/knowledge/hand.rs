//! What is proven about one player's hand.

use im::OrdSet;
use serde::{Deserialize, Serialize};

use crate::catalog::Item;

/// Proven facts about a single hand.
///
/// `owned` and `not_owned` never intersect; the store refuses any insert
/// that would break that.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandKnowledge {
    owned: OrdSet<Item>,
    not_owned: OrdSet<Item>,
}

impl HandKnowledge {
    /// Create an empty hand record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Items proven to be in this hand.
    #[must_use]
    pub fn owned(&self) -> &OrdSet<Item> {
        &self.owned
    }

    /// Items proven absent from this hand.
    #[must_use]
    pub fn not_owned(&self) -> &OrdSet<Item> {
        &self.not_owned
    }

    #[must_use]
    pub fn owns(&self, item: Item) -> bool {
        self.owned.contains(&item)
    }

    #[must_use]
    pub fn lacks(&self, item: Item) -> bool {
        self.not_owned.contains(&item)
    }

    /// Neither owned nor lacked yet.
    #[must_use]
    pub fn is_unknown(&self, item: Item) -> bool {
        !self.owns(item) && !self.lacks(item)
    }

    /// Insert into `owned`. Returns `false` if already there.
    ///
    /// The caller checks `lacks` first.
    pub(crate) fn insert_owned(&mut self, item: Item) -> bool {
        debug_assert!(!self.lacks(item));
        self.owned.insert(item).is_none()
    }

    /// Insert into `not_owned`. Returns `false` if already there.
    ///
    /// The caller checks `owns` first.
    pub(crate) fn insert_not_owned(&mut self, item: Item) -> bool {
        debug_assert!(!self.owns(item));
        self.not_owned.insert(item).is_none()
    }

    /// Whether the two sets are disjoint.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.owned.iter().all(|item| !self.not_owned.contains(item))
    }
}
