//! Next-rumour hint for the observer.
//!
//! Picks one narrowed-down item per category, preferring the items the
//! fewest players have been ruled in or out for. Ties go to a seeded
//! RNG so a replayed game gives the same hint.

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, Item};
use crate::core::{GameRng, GameState};

/// A (weapon, suspect, room) triple worth asking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub weapon: Item,
    pub suspect: Item,
    pub room: Item,
}

impl Suggestion {
    #[must_use]
    pub fn items(&self) -> [Item; 3] {
        [self.weapon, self.suspect, self.room]
    }
}

impl std::fmt::Display for Suggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {}", self.weapon, self.suspect, self.room)
    }
}

/// Suggest a rumour for the observer to ask.
///
/// `None` if some category has no narrowed-down item left, which only
/// happens after a contradiction.
pub fn suggest_rumour(state: &GameState, rng: &mut GameRng) -> Option<Suggestion> {
    let [weapon, suspect, room] = Category::ALL.map(|category| pick(state, category, rng));
    Some(Suggestion {
        weapon: weapon?,
        suspect: suspect?,
        room: room?,
    })
}

/// Seats other than the observer with nothing proven about `item`.
fn unknown_holders(state: &GameState, item: Item) -> usize {
    let observer = state.config().observer;
    state
        .player_ids()
        .filter(|&player| player != observer && state.hand(player).is_unknown(item))
        .count()
}

fn pick(state: &GameState, category: Category, rng: &mut GameRng) -> Option<Item> {
    let candidates = state.narrowed_by_category().into_iter().find(|(c, _)| *c == category)?.1;
    let best = candidates
        .iter()
        .map(|&item| unknown_holders(state, item))
        .max()?;
    let tied: Vec<Item> = candidates
        .into_iter()
        .filter(|&item| unknown_holders(state, item) == best)
        .collect();
    rng.choose(&tied).copied()
}
