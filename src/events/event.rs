//! Inbound game events.
//!
//! Events are what the observing player reports, one at a time, in the
//! order things happen at the table. Each event is applied and fully
//! propagated before the next one is accepted.

use serde::{Deserialize, Serialize};

use crate::catalog::Item;
use crate::core::PlayerId;
use crate::rumours::RumourId;

/// An event reported to the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A player's known cards, usually the observer's own hand.
    DeclareOwnedCards { player: PlayerId, items: Vec<Item> },

    /// A player asks a (weapon, suspect, room) rumour.
    AskRumour {
        asker: PlayerId,
        weapon: Item,
        suspect: Item,
        room: Item,
    },

    /// Who refuted a rumour; `None` if nobody could.
    AnswerRumour {
        rumour: RumourId,
        answerer: Option<PlayerId>,
    },

    /// The card privately shown to the observer for their own rumour.
    RevealAnswerItem { rumour: RumourId, item: Item },

    /// An out-of-band statement that a player holds an item.
    DirectOwnershipClaim { player: PlayerId, item: Item },
}

impl GameEvent {
    /// Short name of the event kind, for logging.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            GameEvent::DeclareOwnedCards { .. } => "declare_owned_cards",
            GameEvent::AskRumour { .. } => "ask_rumour",
            GameEvent::AnswerRumour { .. } => "answer_rumour",
            GameEvent::RevealAnswerItem { .. } => "reveal_answer_item",
            GameEvent::DirectOwnershipClaim { .. } => "direct_ownership_claim",
        }
    }
}
