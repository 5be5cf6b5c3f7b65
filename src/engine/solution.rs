//! Solution tracking.
//!
//! Two monotone sets:
//! - `discovered`: items that cannot be in the solution, either because a
//!   player is proven to hold them or because their category's solution
//!   item is already known
//! - `solution_items`: items proven to be held by nobody, at most one per
//!   category
//!
//! The game is solved the first time each category is down to one
//! candidate. That moment is reported exactly once.

use im::OrdSet;
use serde::{Deserialize, Serialize};

use crate::catalog::{Category, Item};
use crate::core::Contradiction;

/// The concealed (weapon, suspect, room) triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub weapon: Item,
    pub suspect: Item,
    pub room: Item,
}

impl Solution {
    /// The three items in slot order.
    #[must_use]
    pub fn items(&self) -> [Item; 3] {
        [self.weapon, self.suspect, self.room]
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {}", self.weapon, self.suspect, self.room)
    }
}

/// Discovered and solution item sets.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionTracker {
    discovered: OrdSet<Item>,
    solution_items: OrdSet<Item>,
    solved: bool,
}

impl SolutionTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `item` as excluded from the solution. Returns `true` if new.
    pub fn discover(&mut self, item: Item) -> bool {
        self.discovered.insert(item).is_none()
    }

    /// Record `item` as its category's solution item.
    ///
    /// Returns `Ok(true)` if new, `Ok(false)` if already recorded, and a
    /// contradiction if the category already has a different one.
    pub fn add_solution_item(&mut self, item: Item) -> Result<bool, Contradiction> {
        let category = item.category();
        if let Some(&existing) = self
            .solution_items
            .iter()
            .find(|existing| existing.category() == category)
        {
            if existing == item {
                return Ok(false);
            }
            return Err(Contradiction::SecondSolution {
                category,
                existing,
                rejected: item,
            });
        }
        self.solution_items.insert(item);
        Ok(true)
    }

    #[must_use]
    pub fn discovered(&self) -> &OrdSet<Item> {
        &self.discovered
    }

    #[must_use]
    pub fn solution_items(&self) -> &OrdSet<Item> {
        &self.solution_items
    }

    #[must_use]
    pub fn is_discovered(&self, item: Item) -> bool {
        self.discovered.contains(&item)
    }

    #[must_use]
    pub fn is_solution_item(&self, item: Item) -> bool {
        self.solution_items.contains(&item)
    }

    /// The known solution item of `category`, if any.
    #[must_use]
    pub fn solution_item_in(&self, category: Category) -> Option<Item> {
        self.solution_items
            .iter()
            .find(|item| item.category() == category)
            .copied()
    }

    /// Catalog items not yet discovered, in id order.
    #[must_use]
    pub fn narrowed_down(&self) -> Vec<Item> {
        Item::all().filter(|item| !self.is_discovered(*item)).collect()
    }

    /// Undiscovered items of one category, in id order.
    #[must_use]
    pub fn narrowed_in(&self, category: Category) -> Vec<Item> {
        category
            .items()
            .filter(|item| !self.is_discovered(*item))
            .collect()
    }

    /// The solution, if every category is down to one candidate.
    ///
    /// A category's candidate is its recorded solution item, or else its
    /// single undiscovered item.
    #[must_use]
    pub fn current_solution(&self) -> Option<Solution> {
        let mut found = [None; 3];
        for category in Category::ALL {
            let candidate = match self.solution_item_in(category) {
                Some(item) => item,
                None => match self.narrowed_in(category).as_slice() {
                    [only] => *only,
                    _ => return None,
                },
            };
            found[category.slot()] = Some(candidate);
        }
        match found {
            [Some(weapon), Some(suspect), Some(room)] => Some(Solution {
                weapon,
                suspect,
                room,
            }),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Report the solution the first time it becomes known.
    ///
    /// Later calls return `None` even though the game stays solved.
    pub fn take_newly_solved(&mut self) -> Option<Solution> {
        if self.solved {
            return None;
        }
        let solution = self.current_solution()?;
        self.solved = true;
        Some(solution)
    }
}
