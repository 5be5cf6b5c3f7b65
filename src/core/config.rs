//! Game configuration.
//!
//! A game is configured once at startup with the players' names in turn
//! order and the observing seat (whose own hand and private reveals the
//! engine is told about). Everything else about the game is fixed by the
//! item catalog.

use serde::{Deserialize, Serialize};

use super::error::{DeductionError, DeductionResult};
use super::player::PlayerId;

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use cluedo_deduce::core::{GameConfig, PlayerId};
///
/// let config = GameConfig::new(["me", "alice", "bob"]).with_observer(PlayerId::new(0));
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.player_by_name("Alice"), Some(PlayerId::new(1)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Player names, in turn order.
    pub players: Vec<String>,

    /// The seat this engine is deducing for.
    #[serde(default)]
    pub observer: PlayerId,

    /// Treat the observer's declared cards as their whole hand, so every
    /// undeclared item is recorded as not held by the observer. Off by
    /// default: a declaration then only records ownership.
    #[serde(default)]
    pub complete_observer_hand: bool,
}

impl GameConfig {
    /// Create a configuration with the observer in seat 0.
    pub fn new<S: Into<String>>(players: impl IntoIterator<Item = S>) -> Self {
        Self {
            players: players.into_iter().map(Into::into).collect(),
            observer: PlayerId::new(0),
            complete_observer_hand: false,
        }
    }

    /// Set the observing seat.
    #[must_use]
    pub fn with_observer(mut self, observer: PlayerId) -> Self {
        self.observer = observer;
        self
    }

    /// Choose whether the observer's declaration is their whole hand.
    #[must_use]
    pub fn with_complete_observer_hand(mut self, complete: bool) -> Self {
        self.complete_observer_hand = complete;
        self
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Check the configuration before any state is built from it.
    pub fn validate(&self) -> DeductionResult<()> {
        if self.players.len() < 2 {
            return Err(DeductionError::InvalidConfig(format!(
                "need at least 2 players, got {}",
                self.players.len()
            )));
        }
        if self.players.len() > 255 {
            return Err(DeductionError::InvalidConfig(
                "at most 255 players supported".to_string(),
            ));
        }
        for (i, name) in self.players.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(DeductionError::InvalidConfig(format!(
                    "player {} has an empty name",
                    i
                )));
            }
            if self.players[..i]
                .iter()
                .any(|other| other.eq_ignore_ascii_case(name))
            {
                return Err(DeductionError::InvalidConfig(format!(
                    "already have {}",
                    name
                )));
            }
        }
        if self.observer.index() >= self.players.len() {
            return Err(DeductionError::InvalidConfig(format!(
                "observer {} is not seated",
                self.observer
            )));
        }
        Ok(())
    }

    /// Exact, case-insensitive lookup of a seat by name.
    #[must_use]
    pub fn player_by_name(&self, name: &str) -> Option<PlayerId> {
        let name = name.trim();
        self.players
            .iter()
            .position(|p| p.eq_ignore_ascii_case(name))
            .map(|i| PlayerId::new(i as u8))
    }

    /// Name of a seat, if seated.
    #[must_use]
    pub fn player_name(&self, player: PlayerId) -> Option<&str> {
        self.players.get(player.index()).map(String::as_str)
    }
}
