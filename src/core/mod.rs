//! Core types: seats, configuration, errors, RNG and the game state.
//!
//! This module holds the building blocks every other module uses. The
//! `GameState` aggregate ties the knowledge store, rumour ledger and
//! solution tracker together.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use config::GameConfig;
pub use error::{Contradiction, DeductionError, DeductionResult};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::GameState;
