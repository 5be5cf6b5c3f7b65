//! Derived facts and per-event outcomes.

use serde::{Deserialize, Serialize};

use crate::catalog::Item;
use crate::core::{Contradiction, PlayerId};
use crate::engine::Solution;
use crate::rumours::RumourId;

/// A fact derived (or directly recorded) while applying an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Deduction {
    /// `player` holds `item`.
    Owns { player: PlayerId, item: Item },

    /// `player` does not hold `item`.
    Lacks { player: PlayerId, item: Item },

    /// `item` can no longer explain the answer to `rumour`.
    Cleared { rumour: RumourId, item: Item },

    /// `item` is excluded from the solution.
    Discovered { item: Item },

    /// `item` is held by nobody: it is in the solution.
    SolutionItem { item: Item },
}

impl std::fmt::Display for Deduction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Deduction::Owns { player, item } => write!(f, "{} owns {}", player, item),
            Deduction::Lacks { player, item } => write!(f, "{} can't have {}", player, item),
            Deduction::Cleared { rumour, item } => write!(f, "{} discounts {}", rumour, item),
            Deduction::Discovered { item } => write!(f, "{} is not in the solution", item),
            Deduction::SolutionItem { item } => write!(f, "{} is in the solution", item),
        }
    }
}

/// Everything that happened while applying one event.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// The rumour created by an `AskRumour` event.
    pub rumour: Option<RumourId>,

    /// Facts recorded, in derivation order.
    pub deductions: Vec<Deduction>,

    /// Conflicting facts met and dropped during propagation.
    pub contradictions: Vec<Contradiction>,

    /// Set only on the event that first solved the game.
    pub solved: Option<Solution>,
}

impl Outcome {
    /// Whether propagation met no contradiction.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.contradictions.is_empty()
    }

    /// Ownership facts derived by this event.
    pub fn owned(&self) -> impl Iterator<Item = (PlayerId, Item)> + '_ {
        self.deductions.iter().filter_map(|d| match *d {
            Deduction::Owns { player, item } => Some((player, item)),
            _ => None,
        })
    }

    /// Solution items derived by this event.
    pub fn solution_items(&self) -> impl Iterator<Item = Item> + '_ {
        self.deductions.iter().filter_map(|d| match *d {
            Deduction::SolutionItem { item } => Some(item),
            _ => None,
        })
    }
}
