//! Error and contradiction types.
//!
//! A [`Contradiction`] is a fact that conflicts with what is already
//! proven. When it is the fact an event carries, the event is rejected
//! with [`DeductionError::Contradiction`] and nothing changes. When it
//! turns up deep inside a propagation cascade it is reported in the
//! event's outcome and the conflicting fact is dropped.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::player::PlayerId;
use crate::catalog::{Category, Item};
use crate::rumours::RumourId;

/// A fact that conflicts with previously proven facts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Contradiction {
    /// `player` was to be marked as owning `item`, but is proven not to.
    OwnsWhatTheyLack { player: PlayerId, item: Item },

    /// `player` was to be marked as not owning `item`, but is proven to.
    LacksWhatTheyOwn { player: PlayerId, item: Item },

    /// Every item of an answered rumour is proven absent from the
    /// answerer's hand, so nothing could have been shown.
    UnexplainedRumour { rumour: RumourId, answerer: PlayerId },

    /// A second distinct solution item was derived for one category.
    SecondSolution {
        category: Category,
        existing: Item,
        rejected: Item,
    },
}

impl std::fmt::Display for Contradiction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Contradiction::OwnsWhatTheyLack { player, item } => {
                write!(f, "{} can't own {}, yet was shown to own it", player, item)
            }
            Contradiction::LacksWhatTheyOwn { player, item } => {
                write!(f, "{} owns {}, yet was shown not to own it", player, item)
            }
            Contradiction::UnexplainedRumour { rumour, answerer } => {
                write!(f, "{} answered {} but owns none of its items", answerer, rumour)
            }
            Contradiction::SecondSolution {
                category,
                existing,
                rejected,
            } => write!(
                f,
                "{} already has solution {}, can't also be {}",
                category, existing, rejected
            ),
        }
    }
}

/// Errors returned by the public engine API.
#[derive(Debug, Error)]
pub enum DeductionError {
    #[error("contradiction: {0}")]
    Contradiction(Contradiction),

    #[error("invalid event: {0}")]
    InvalidEvent(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("unknown player: {0}")]
    UnknownPlayer(PlayerId),

    #[error("unknown rumour: {0}")]
    UnknownRumour(RumourId),

    #[error("snapshot: {0}")]
    Snapshot(String),
}

impl From<Contradiction> for DeductionError {
    fn from(contradiction: Contradiction) -> Self {
        DeductionError::Contradiction(contradiction)
    }
}

impl From<bincode::Error> for DeductionError {
    fn from(err: bincode::Error) -> Self {
        DeductionError::Snapshot(err.to_string())
    }
}

/// Result alias for engine operations.
pub type DeductionResult<T> = Result<T, DeductionError>;
