//! Event types: what goes into the engine and what comes out.
//!
//! ## Key Types
//!
//! - `GameEvent`: an inbound report from the table
//! - `Deduction`: a fact recorded while applying an event
//! - `Outcome`: the deductions, contradictions and solved signal of one
//!   event

pub mod event;
pub mod outcome;

pub use event::GameEvent;
pub use outcome::{Deduction, Outcome};
