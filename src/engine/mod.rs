//! Deduction engine: turns events into proven facts.
//!
//! [`apply`] is the single entry point. It validates the event against
//! the current state without changing anything, then records the event's
//! own facts and hands them to the [`propagate`] worklist, which runs to
//! a fixed point before returning.
//!
//! ## Modules
//!
//! - `propagate`: the worklist and rules A-D
//! - `solution`: discovered / solution item tracking
//! - `turns`: which players a rumour's answer proves empty-handed

mod propagate;
pub mod solution;
pub mod turns;

pub use solution::{Solution, SolutionTracker};
pub use turns::{passed_players, refutation_order};

use tracing::{info, warn};

use self::propagate::{Fact, Propagator};
use crate::advice::{self, AnswerCheck};
use crate::catalog::Item;
use crate::core::{DeductionError, DeductionResult, GameState, PlayerId};
use crate::events::{GameEvent, Outcome};
use crate::rumours::{Answer, RumourId};

/// Apply one event to `state` and propagate it to a fixed point.
///
/// Returns `Err` without touching `state` if the event is invalid or its
/// own fact contradicts what is already proven. Contradictions found
/// further down the cascade are reported in the returned [`Outcome`].
pub fn apply(state: &mut GameState, event: GameEvent) -> DeductionResult<Outcome> {
    let outcome = match &event {
        GameEvent::DeclareOwnedCards { player, items } => declare_owned(state, *player, items)?,
        GameEvent::AskRumour {
            asker,
            weapon,
            suspect,
            room,
        } => ask(state, *asker, [*weapon, *suspect, *room])?,
        GameEvent::AnswerRumour { rumour, answerer } => answer(state, *rumour, *answerer)?,
        GameEvent::RevealAnswerItem { rumour, item } => reveal(state, *rumour, *item)?,
        GameEvent::DirectOwnershipClaim { player, item } => claim(state, *player, *item)?,
    };

    if !outcome.is_clean() {
        warn!(
            kind = event.kind(),
            contradictions = outcome.contradictions.len(),
            "event applied with contradictions"
        );
    }
    state.events.push_back(event);
    state.history.extend(outcome.deductions.iter().copied());
    Ok(outcome)
}

fn declare_owned(state: &mut GameState, player: PlayerId, items: &[Item]) -> DeductionResult<Outcome> {
    state.require_player(player)?;
    for &item in items {
        state.knowledge.check_owned(player, item)?;
    }
    let whole_hand = state.config.complete_observer_hand && player == state.config.observer;
    let absent: Vec<Item> = if whole_hand {
        Item::all().filter(|item| !items.contains(item)).collect()
    } else {
        Vec::new()
    };
    for &item in &absent {
        state.knowledge.check_not_owned(player, item)?;
    }

    info!(%player, cards = items.len(), whole_hand, "declared cards");
    let mut propagator = Propagator::new(state);
    for &item in items {
        propagator.push(Fact::Owns(player, item));
    }
    for item in absent {
        propagator.push(Fact::Lacks(player, item));
    }
    Ok(propagator.run())
}

fn ask(state: &mut GameState, asker: PlayerId, triple: [Item; 3]) -> DeductionResult<Outcome> {
    state.require_player(asker)?;
    let id = state.rumours.ask(triple, asker)?;
    info!(rumour = %id, %asker, weapon = %triple[0], suspect = %triple[1], room = %triple[2], "rumour asked");

    let mut propagator = Propagator::new(state);
    propagator.set_rumour(id);
    Ok(propagator.run())
}

fn answer(
    state: &mut GameState,
    id: RumourId,
    answerer: Option<PlayerId>,
) -> DeductionResult<Outcome> {
    if let Some(player) = answerer {
        state.require_player(player)?;
    }
    let answer = Answer::from(answerer);
    state.rumours.check_answer(id, answer)?;

    if let AnswerCheck::Unexpected { expected } = advice::check_answer(state, id, answerer)? {
        warn!(rumour = %id, ?answerer, %expected, "answer skips a player known to hold a rumour item");
    }

    state.rumours.record_answer(id, answer)?;
    let rumour = state.rumours.require(id)?;
    let original = rumour.original();
    let passed = passed_players(rumour, state.player_count());
    info!(rumour = %id, ?answerer, passed = passed.len(), "rumour answered");

    let mut propagator = Propagator::new(state);
    for player in passed {
        for item in original {
            propagator.push(Fact::Lacks(player, item));
        }
    }
    Ok(propagator.run())
}

fn reveal(state: &mut GameState, id: RumourId, item: Item) -> DeductionResult<Outcome> {
    let rumour = state.rumours.require(id)?;
    let Some(answerer) = rumour.answerer() else {
        return Err(DeductionError::InvalidEvent(format!(
            "{} was not answered by a player",
            id
        )));
    };
    if rumour.asker() != state.config.observer {
        return Err(DeductionError::InvalidEvent(format!(
            "{} was asked by {}, not the observer",
            id,
            rumour.asker()
        )));
    }
    if !rumour.mentions(item) {
        return Err(DeductionError::InvalidEvent(format!(
            "{} is not part of {}",
            item, id
        )));
    }
    if let Some(shown) = rumour.shown().filter(|&shown| shown != item) {
        return Err(DeductionError::InvalidEvent(format!(
            "{} already showed {}",
            id, shown
        )));
    }
    let original = rumour.original();
    state.knowledge.check_owned(answerer, item)?;

    info!(rumour = %id, %answerer, %item, "answer revealed");
    state.rumours.record_shown(id, item);
    let mut propagator = Propagator::new(state);
    for other in original {
        if other != item {
            propagator.clear_slot(id, other);
        }
    }
    propagator.push(Fact::Owns(answerer, item));
    Ok(propagator.run())
}

fn claim(state: &mut GameState, player: PlayerId, item: Item) -> DeductionResult<Outcome> {
    state.require_player(player)?;
    state.knowledge.check_owned(player, item)?;

    info!(%player, %item, "ownership claimed");
    let mut propagator = Propagator::new(state);
    propagator.push(Fact::Owns(player, item));
    Ok(propagator.run())
}
