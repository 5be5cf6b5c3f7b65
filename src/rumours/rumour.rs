//! A single rumour and its remaining explanations.
//!
//! A rumour keeps two views of its triple:
//! - `original`: the (weapon, suspect, room) as asked, never modified
//! - `slots`: the items that could still be what the answerer showed
//!
//! Slots only move from an item to cleared, never back.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::catalog::{Category, Item};
use crate::core::{DeductionError, DeductionResult, PlayerId};

/// Identifier of a rumour in the ledger, in asking order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RumourId(pub u32);

impl RumourId {
    /// Create a new rumour ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID as an index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for RumourId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rumour #{}", self.0)
    }
}

/// Who refuted a rumour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Answer {
    /// Asked, answer not reported yet.
    #[default]
    Pending,
    /// Nobody could refute it.
    Nobody,
    /// This player showed the asker one of the items.
    By(PlayerId),
}

impl Answer {
    /// The answering player, if someone answered.
    #[must_use]
    pub fn answerer(self) -> Option<PlayerId> {
        match self {
            Answer::By(player) => Some(player),
            Answer::Pending | Answer::Nobody => None,
        }
    }
}

impl From<Option<PlayerId>> for Answer {
    fn from(answerer: Option<PlayerId>) -> Self {
        answerer.map_or(Answer::Nobody, Answer::By)
    }
}

/// A rumour record.
///
/// ## Example
///
/// ```
/// use cluedo_deduce::catalog::ItemCatalog;
/// use cluedo_deduce::core::PlayerId;
/// use cluedo_deduce::rumours::{Rumour, RumourId};
///
/// let catalog = ItemCatalog::standard();
/// let knife = catalog.resolve("knife").unwrap();
/// let scarlett = catalog.resolve("scarlett").unwrap();
/// let kitchen = catalog.resolve("kitchen").unwrap();
///
/// let mut rumour = Rumour::new(RumourId::new(0), [knife, scarlett, kitchen], PlayerId::new(0)).unwrap();
/// rumour.clear(knife);
/// rumour.clear(scarlett);
/// assert_eq!(rumour.sole_remaining(), Some(kitchen));
/// assert_eq!(rumour.original(), [knife, scarlett, kitchen]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rumour {
    id: RumourId,
    asker: PlayerId,
    original: [Item; 3],
    slots: [Option<Item>; 3],
    answer: Answer,
    /// Item privately shown to the observer, when the observer asked.
    shown: Option<Item>,
}

impl Rumour {
    /// Create a rumour from a (weapon, suspect, room) triple.
    ///
    /// Fails if an item sits in the wrong category's slot.
    pub fn new(id: RumourId, triple: [Item; 3], asker: PlayerId) -> DeductionResult<Self> {
        for (item, category) in triple.iter().zip(Category::ALL) {
            if item.category() != category {
                return Err(DeductionError::InvalidEvent(format!(
                    "{} is not a {}",
                    item, category
                )));
            }
        }
        Ok(Self {
            id,
            asker,
            original: triple,
            slots: triple.map(Some),
            answer: Answer::Pending,
            shown: None,
        })
    }

    #[must_use]
    pub fn id(&self) -> RumourId {
        self.id
    }

    #[must_use]
    pub fn asker(&self) -> PlayerId {
        self.asker
    }

    #[must_use]
    pub fn answer(&self) -> Answer {
        self.answer
    }

    #[must_use]
    pub fn answerer(&self) -> Option<PlayerId> {
        self.answer.answerer()
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.answer != Answer::Pending
    }

    /// The item privately shown to the observer, if reported.
    #[must_use]
    pub fn shown(&self) -> Option<Item> {
        self.shown
    }

    /// The triple as asked.
    #[must_use]
    pub fn original(&self) -> [Item; 3] {
        self.original
    }

    /// Whether `item` was one of the three items asked about.
    #[must_use]
    pub fn mentions(&self, item: Item) -> bool {
        self.original[item.category().slot()] == item
    }

    /// Items not yet cleared (0-3).
    #[must_use]
    pub fn remaining(&self) -> SmallVec<[Item; 3]> {
        self.slots.iter().flatten().copied().collect()
    }

    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// The only remaining item, if exactly one is left.
    #[must_use]
    pub fn sole_remaining(&self) -> Option<Item> {
        let mut remaining = self.slots.iter().flatten();
        match (remaining.next(), remaining.next()) {
            (Some(&item), None) => Some(item),
            _ => None,
        }
    }

    /// Answered by a player and narrowed to one explanation.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.answerer().is_some() && self.remaining_count() == 1
    }

    /// Clear `item` from whichever slot still holds it.
    ///
    /// Returns `true` if a slot changed. Idempotent.
    pub fn clear(&mut self, item: Item) -> bool {
        let slot = &mut self.slots[item.category().slot()];
        if *slot == Some(item) {
            *slot = None;
            true
        } else {
            false
        }
    }

    pub(crate) fn set_answer(&mut self, answer: Answer) {
        self.answer = answer;
    }

    pub(crate) fn set_shown(&mut self, item: Item) {
        self.shown = Some(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ItemCatalog;

    fn triple(names: [&str; 3]) -> [Item; 3] {
        let catalog = ItemCatalog::standard();
        names.map(|name| catalog.resolve(name).unwrap())
    }

    fn rumour(names: [&str; 3]) -> Rumour {
        Rumour::new(RumourId::new(0), triple(names), PlayerId::new(0)).unwrap()
    }

    #[test]
    fn test_new_rumour_has_all_slots() {
        let r = rumour(["knife", "scarlett", "kitchen"]);
        assert_eq!(r.remaining_count(), 3);
        assert_eq!(r.answer(), Answer::Pending);
        assert!(!r.is_answered());
        assert_eq!(r.sole_remaining(), None);
    }

    #[test]
    fn test_wrong_category_rejected() {
        let result = Rumour::new(
            RumourId::new(0),
            triple(["scarlett", "knife", "kitchen"]),
            PlayerId::new(0),
        );
        assert!(matches!(result, Err(DeductionError::InvalidEvent(_))));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut r = rumour(["rope", "plum", "spa"]);
        let [rope, _, _] = r.original();

        assert!(r.clear(rope));
        assert!(!r.clear(rope));
        assert_eq!(r.remaining_count(), 2);
        assert_eq!(r.original()[0], rope);
        assert!(r.mentions(rope));
    }

    #[test]
    fn test_clear_ignores_unrelated_item() {
        let mut r = rumour(["rope", "plum", "spa"]);
        let axe = ItemCatalog::standard().resolve("axe").unwrap();
        assert!(!r.clear(axe));
        assert!(!r.mentions(axe));
        assert_eq!(r.remaining_count(), 3);
    }

    #[test]
    fn test_resolved_needs_answerer() {
        let mut r = rumour(["rope", "plum", "spa"]);
        let [rope, plum, spa] = r.original();
        r.clear(rope);
        r.clear(plum);
        assert_eq!(r.sole_remaining(), Some(spa));
        assert!(!r.is_resolved());

        r.set_answer(Answer::By(PlayerId::new(2)));
        assert!(r.is_resolved());

        r.clear(spa);
        assert_eq!(r.remaining_count(), 0);
        assert!(!r.is_resolved());
    }

    #[test]
    fn test_answer_from_option() {
        assert_eq!(Answer::from(None), Answer::Nobody);
        assert_eq!(Answer::from(Some(PlayerId::new(1))), Answer::By(PlayerId::new(1)));
        assert_eq!(Answer::Nobody.answerer(), None);
    }
}
