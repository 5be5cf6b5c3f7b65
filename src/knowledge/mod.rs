//! Player knowledge: proven-owned and proven-not-owned items per player.
//!
//! ## Key Types
//!
//! - `HandKnowledge`: the two disjoint sets for one player
//! - `KnowledgeStore`: every player's `HandKnowledge`, with
//!   contradiction-checked writes

pub mod hand;
pub mod store;

pub use hand::HandKnowledge;
pub use store::KnowledgeStore;
