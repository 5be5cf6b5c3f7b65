//! Game state: the single owned aggregate the engine works on.
//!
//! ## GameState
//!
//! Holds everything the engine knows:
//! - Configuration (seats, observer)
//! - Knowledge store (per-player owned / not-owned sets)
//! - Rumour ledger
//! - Solution tracker (discovered and solution items)
//! - Applied event log and derived-fact history
//!
//! All collections are `im` persistent structures, so `clone()` is cheap
//! and a state can be forked to try out a hypothetical event without
//! touching the original.
//!
//! Mutation goes through [`GameState::apply`] (or one of its typed
//! wrappers), which runs the propagation engine to a fixed point before
//! returning.

use im::{OrdSet, Vector};
use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::error::{DeductionError, DeductionResult};
use super::player::PlayerId;
use crate::catalog::{Category, Item};
use crate::engine::{self, Solution, SolutionTracker};
use crate::events::{Deduction, GameEvent, Outcome};
use crate::knowledge::{HandKnowledge, KnowledgeStore};
use crate::rumours::{Rumour, RumourId, RumourLedger};

/// Full deduction state for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) config: GameConfig,
    pub(crate) knowledge: KnowledgeStore,
    pub(crate) rumours: RumourLedger,
    pub(crate) solution: SolutionTracker,
    pub(crate) events: Vector<GameEvent>,
    pub(crate) history: Vector<Deduction>,
}

impl GameState {
    /// Create a new game state from a validated configuration.
    pub fn new(config: GameConfig) -> DeductionResult<Self> {
        config.validate()?;
        let player_count = config.player_count();
        Ok(Self {
            config,
            knowledge: KnowledgeStore::new(player_count),
            rumours: RumourLedger::new(),
            solution: SolutionTracker::new(),
            events: Vector::new(),
            history: Vector::new(),
        })
    }

    /// Rebuild a state by applying a recorded event log in order.
    pub fn replay(
        config: GameConfig,
        events: impl IntoIterator<Item = GameEvent>,
    ) -> DeductionResult<Self> {
        let mut state = Self::new(config)?;
        for event in events {
            state.apply(event)?;
        }
        Ok(state)
    }

    /// Apply one event and propagate it to a fixed point.
    ///
    /// Invalid events are rejected before anything changes.
    pub fn apply(&mut self, event: GameEvent) -> DeductionResult<Outcome> {
        engine::apply(self, event)
    }

    // === Typed event wrappers ===

    /// Declare the cards `player` holds.
    pub fn declare_owned_cards(
        &mut self,
        player: PlayerId,
        items: impl IntoIterator<Item = Item>,
    ) -> DeductionResult<Outcome> {
        self.apply(GameEvent::DeclareOwnedCards {
            player,
            items: items.into_iter().collect(),
        })
    }

    /// Record a rumour; the new id is in `Outcome::rumour`.
    pub fn ask_rumour(
        &mut self,
        asker: PlayerId,
        weapon: Item,
        suspect: Item,
        room: Item,
    ) -> DeductionResult<RumourId> {
        let outcome = self.apply(GameEvent::AskRumour {
            asker,
            weapon,
            suspect,
            room,
        })?;
        outcome.rumour.ok_or_else(|| {
            DeductionError::InvalidEvent("rumour was not recorded".to_string())
        })
    }

    /// Record who answered a rumour (`None` if nobody could).
    pub fn answer_rumour(
        &mut self,
        rumour: RumourId,
        answerer: Option<PlayerId>,
    ) -> DeductionResult<Outcome> {
        self.apply(GameEvent::AnswerRumour { rumour, answerer })
    }

    /// Record the card shown to the observer for their own rumour.
    pub fn reveal_answer_item(&mut self, rumour: RumourId, item: Item) -> DeductionResult<Outcome> {
        self.apply(GameEvent::RevealAnswerItem { rumour, item })
    }

    /// Record that `player` holds `item`.
    pub fn claim_ownership(&mut self, player: PlayerId, item: Item) -> DeductionResult<Outcome> {
        self.apply(GameEvent::DirectOwnershipClaim { player, item })
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.config.player_count()
    }

    /// Iterate over all seats.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.player_count())
    }

    /// Fail with `UnknownPlayer` unless `player` is seated.
    pub fn require_player(&self, player: PlayerId) -> DeductionResult<()> {
        if player.index() < self.player_count() {
            Ok(())
        } else {
            Err(DeductionError::UnknownPlayer(player))
        }
    }

    /// What is proven about `player`'s hand.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &HandKnowledge {
        self.knowledge.hand(player)
    }

    #[must_use]
    pub fn knowledge(&self) -> &KnowledgeStore {
        &self.knowledge
    }

    #[must_use]
    pub fn rumours(&self) -> &RumourLedger {
        &self.rumours
    }

    #[must_use]
    pub fn rumour(&self, id: RumourId) -> Option<&Rumour> {
        self.rumours.get(id)
    }

    /// Items not yet excluded from the solution.
    #[must_use]
    pub fn narrowed_down(&self) -> Vec<Item> {
        self.solution.narrowed_down()
    }

    /// Narrowed-down items grouped by category.
    #[must_use]
    pub fn narrowed_by_category(&self) -> Vec<(Category, Vec<Item>)> {
        Category::ALL
            .iter()
            .map(|&category| (category, self.solution.narrowed_in(category)))
            .collect()
    }

    /// Items proven to be held by some player (or otherwise excluded).
    #[must_use]
    pub fn discovered(&self) -> &OrdSet<Item> {
        self.solution.discovered()
    }

    /// Items proven to be held by nobody.
    #[must_use]
    pub fn solution_items(&self) -> &OrdSet<Item> {
        self.solution.solution_items()
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solution.is_solved()
    }

    /// The solution, once solved.
    #[must_use]
    pub fn solution(&self) -> Option<Solution> {
        if self.solution.is_solved() {
            self.solution.current_solution()
        } else {
            None
        }
    }

    /// Every event applied so far, in order.
    #[must_use]
    pub fn events(&self) -> &Vector<GameEvent> {
        &self.events
    }

    /// Every fact recorded so far, in derivation order.
    #[must_use]
    pub fn history(&self) -> &Vector<Deduction> {
        &self.history
    }

    // === Snapshots ===

    /// Encode the full state.
    pub fn to_snapshot(&self) -> DeductionResult<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a state produced by [`GameState::to_snapshot`].
    pub fn from_snapshot(bytes: &[u8]) -> DeductionResult<Self> {
        let state: Self = bincode::deserialize(bytes)?;
        state.config.validate()?;
        if state.knowledge.player_count() != state.config.player_count() {
            return Err(DeductionError::Snapshot(
                "player count does not match the configuration".to_string(),
            ));
        }
        Ok(state)
    }
}
