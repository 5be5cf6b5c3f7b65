//! # cluedo-deduce
//!
//! A deduction engine for rumour-based elimination card games in the
//! Cluedo family.
//!
//! The engine tracks, for every player, which items they provably hold
//! and provably don't. Each reported event (declared cards, a rumour, who
//! answered it, a privately shown card) is turned into facts and
//! propagated to a fixed point, narrowing down the concealed solution.
//!
//! ## Design Principles
//!
//! 1. **Facts Only**: Nothing is guessed. Every recorded fact follows from
//!    the reported events and the rules of refutation.
//!
//! 2. **Validate, Then Mutate**: An invalid event, or one whose own fact
//!    contradicts what is proven, is rejected with the state untouched.
//!
//! 3. **Cheap Forks**: State lives in `im-rs` persistent collections, so
//!    `GameState::clone()` is O(1) and "what if" questions can be asked of
//!    a copy.
//!
//! ## Modules
//!
//! - `core`: Seats, configuration, errors, RNG and the game state
//! - `catalog`: Weapons, suspects and rooms, with name resolution
//! - `knowledge`: Per-player owned / not-owned sets
//! - `rumours`: The rumour ledger and candidate slots
//! - `events`: Inbound events and per-event outcomes
//! - `engine`: Fixed-point propagation
//! - `advice`: Read-only advisory queries
//!
//! ## Example
//!
//! ```
//! use cluedo_deduce::{GameConfig, GameState, ItemCatalog, PlayerId};
//!
//! let catalog = ItemCatalog::standard();
//! let item = |name| catalog.resolve(name).unwrap();
//!
//! let mut game = GameState::new(GameConfig::new(["me", "ann", "bob"])).unwrap();
//! let rumour = game
//!     .ask_rumour(PlayerId::new(0), item("rope"), item("plum"), item("spa"))
//!     .unwrap();
//! game.answer_rumour(rumour, Some(PlayerId::new(2))).unwrap();
//!
//! // ann sat between the asker and bob, so holds none of the three
//! assert!(game.hand(PlayerId::new(1)).lacks(item("plum")));
//! ```

pub mod advice;
pub mod catalog;
pub mod core;
pub mod engine;
pub mod events;
pub mod knowledge;
pub mod rumours;

// Re-export commonly used types
pub use crate::core::{
    Contradiction, DeductionError, DeductionResult, GameConfig, GameRng, GameRngState, GameState,
    PlayerId, PlayerMap,
};

pub use crate::catalog::{Category, Item, ItemCatalog};

pub use crate::knowledge::{HandKnowledge, KnowledgeStore};

pub use crate::rumours::{Answer, Rumour, RumourId, RumourLedger};

pub use crate::events::{Deduction, GameEvent, Outcome};

pub use crate::engine::{Solution, SolutionTracker};

pub use crate::advice::{AnswerCheck, Suggestion};
