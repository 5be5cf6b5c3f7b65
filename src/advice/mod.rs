//! Read-only advisory queries.
//!
//! Nothing here feeds back into deduction. These helpers sanity-check
//! what the table reports and hint at a useful next rumour.
//!
//! ## Key Types
//!
//! - `AnswerCheck`: whether a reported answerer fits what is proven
//! - `Suggestion`: a rumour worth asking next

pub mod stopper;
pub mod suggest;

pub use stopper::{check_answer, expected_stopper, AnswerCheck};
pub use suggest::{suggest_rumour, Suggestion};
