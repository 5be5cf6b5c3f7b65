//! Rumour ledger: every rumour asked, who answered, and what could
//! still explain each answer.
//!
//! ## Key Types
//!
//! - `RumourId`: position in the ledger
//! - `Answer`: pending, nobody, or the answering player
//! - `Rumour`: original triple plus live candidate slots
//! - `RumourLedger`: append-only rumour store

pub mod ledger;
pub mod rumour;

pub use ledger::RumourLedger;
pub use rumour::{Answer, Rumour, RumourId};
