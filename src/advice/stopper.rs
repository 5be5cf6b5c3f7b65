//! Expected stopping player.
//!
//! Refutation goes round the table from the asker. The first seat known
//! to hold one of the rumour's items must stop it, so the real answerer
//! can be that seat or an earlier one, never a later one.

use serde::{Deserialize, Serialize};

use crate::core::{DeductionResult, GameState, PlayerId};
use crate::engine::refutation_order;
use crate::rumours::RumourId;

/// Result of comparing a reported answerer with the expected stopper.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerCheck {
    /// Nothing proven contradicts the report.
    Consistent,
    /// The report skips `expected`, who is known to hold a rumour item.
    Unexpected { expected: PlayerId },
}

/// The first seat after the asker proven to hold one of the rumour's items.
///
/// Takes no turn index: the turn a rumour is asked on is the asker's, so
/// the starting seat comes from the rumour itself.
pub fn expected_stopper(state: &GameState, rumour: RumourId) -> DeductionResult<Option<PlayerId>> {
    let rumour = state.rumours().require(rumour)?;
    let items = rumour.original();
    Ok(refutation_order(rumour.asker(), state.player_count())
        .find(|&player| items.iter().any(|&item| state.hand(player).owns(item))))
}

/// Check a reported answerer (`None` for nobody) against the expected stopper.
pub fn check_answer(
    state: &GameState,
    rumour: RumourId,
    answerer: Option<PlayerId>,
) -> DeductionResult<AnswerCheck> {
    let Some(expected) = expected_stopper(state, rumour)? else {
        return Ok(AnswerCheck::Consistent);
    };
    let asker = state.rumours().require(rumour)?.asker();
    let skipped = match answerer {
        None => true,
        Some(answerer) => refutation_order(asker, state.player_count())
            .take_while(|&player| player != answerer)
            .any(|player| player == expected),
    };
    Ok(if skipped {
        AnswerCheck::Unexpected { expected }
    } else {
        AnswerCheck::Consistent
    })
}
