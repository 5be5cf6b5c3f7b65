//! Per-player knowledge store.
//!
//! The store is the only place hand facts are written. Each write is
//! checked against the opposite set first, so `owned ∩ not_owned = ∅`
//! holds for every player after every call: a conflicting fact comes
//! back as a [`Contradiction`] and is not stored.
//!
//! The store knows nothing about rumours. Consequences of a new fact
//! (the "nobody else owns it" rule included) are queued by the
//! propagation engine.

use serde::{Deserialize, Serialize};

use super::hand::HandKnowledge;
use crate::catalog::Item;
use crate::core::{Contradiction, PlayerId, PlayerMap};

/// Proven ownership facts for every player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeStore {
    hands: PlayerMap<HandKnowledge>,
}

impl KnowledgeStore {
    /// Create a store with no facts for `player_count` players.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            hands: PlayerMap::with_default(player_count),
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.hands.player_count()
    }

    /// A player's hand record.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &HandKnowledge {
        &self.hands[player]
    }

    /// Iterate over (PlayerId, &HandKnowledge) pairs.
    pub fn hands(&self) -> impl Iterator<Item = (PlayerId, &HandKnowledge)> {
        self.hands.iter()
    }

    /// Check a would-be ownership fact without storing it.
    pub fn check_owned(&self, player: PlayerId, item: Item) -> Result<(), Contradiction> {
        if self.hands[player].lacks(item) {
            return Err(Contradiction::OwnsWhatTheyLack { player, item });
        }
        Ok(())
    }

    /// Check a would-be absence fact without storing it.
    pub fn check_not_owned(&self, player: PlayerId, item: Item) -> Result<(), Contradiction> {
        if self.hands[player].owns(item) {
            return Err(Contradiction::LacksWhatTheyOwn { player, item });
        }
        Ok(())
    }

    /// Record that `player` holds `item`.
    ///
    /// Returns `Ok(true)` if this is a new fact, `Ok(false)` if already
    /// known.
    pub fn record_owned(&mut self, player: PlayerId, item: Item) -> Result<bool, Contradiction> {
        self.check_owned(player, item)?;
        Ok(self.hands[player].insert_owned(item))
    }

    /// Record that `player` does not hold `item`.
    ///
    /// Returns `Ok(true)` if this is a new fact, `Ok(false)` if already
    /// known.
    pub fn record_not_owned(
        &mut self,
        player: PlayerId,
        item: Item,
    ) -> Result<bool, Contradiction> {
        self.check_not_owned(player, item)?;
        Ok(self.hands[player].insert_not_owned(item))
    }

    /// The player proven to hold `item`, if any.
    #[must_use]
    pub fn owner_of(&self, item: Item) -> Option<PlayerId> {
        self.hands
            .iter()
            .find(|(_, hand)| hand.owns(item))
            .map(|(player, _)| player)
    }

    /// Whether every player is proven not to hold `item`.
    #[must_use]
    pub fn nobody_owns(&self, item: Item) -> bool {
        self.hands.values().all(|hand| hand.lacks(item))
    }

    /// Whether every hand keeps its sets disjoint.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.hands.values().all(HandKnowledge::is_consistent)
    }
}
