//! Rumour ledger.
//!
//! Every rumour ever asked, in asking order. Rumours are never removed;
//! `RumourId` is the position in the ledger.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::rumour::{Answer, Rumour, RumourId};
use crate::catalog::Item;
use crate::core::{DeductionError, DeductionResult, PlayerId};

/// Append-only store of rumours.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RumourLedger {
    rumours: Vector<Rumour>,
}

impl RumourLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a newly asked rumour. Its answer starts out pending.
    pub fn ask(&mut self, triple: [Item; 3], asker: PlayerId) -> DeductionResult<RumourId> {
        let id = RumourId::new(self.rumours.len() as u32);
        let rumour = Rumour::new(id, triple, asker)?;
        self.rumours.push_back(rumour);
        Ok(id)
    }

    /// Look up a rumour.
    #[must_use]
    pub fn get(&self, id: RumourId) -> Option<&Rumour> {
        self.rumours.get(id.index())
    }

    /// Look up a rumour, failing with `UnknownRumour`.
    pub fn require(&self, id: RumourId) -> DeductionResult<&Rumour> {
        self.get(id).ok_or(DeductionError::UnknownRumour(id))
    }

    pub(crate) fn get_mut(&mut self, id: RumourId) -> Option<&mut Rumour> {
        self.rumours.get_mut(id.index())
    }

    /// Check that `answer` may be recorded for rumour `id`.
    pub fn check_answer(&self, id: RumourId, answer: Answer) -> DeductionResult<()> {
        let rumour = self.require(id)?;
        if rumour.is_answered() {
            return Err(DeductionError::InvalidEvent(format!(
                "{} was already answered",
                id
            )));
        }
        match answer {
            Answer::Pending => Err(DeductionError::InvalidEvent(format!(
                "{} can't be answered with a pending answer",
                id
            ))),
            Answer::By(answerer) if answerer == rumour.asker() => {
                Err(DeductionError::InvalidEvent(format!(
                    "{} can't answer their own rumour",
                    answerer
                )))
            }
            _ => Ok(()),
        }
    }

    /// Record who answered rumour `id`.
    pub fn record_answer(&mut self, id: RumourId, answer: Answer) -> DeductionResult<()> {
        self.check_answer(id, answer)?;
        if let Some(rumour) = self.get_mut(id) {
            rumour.set_answer(answer);
        }
        Ok(())
    }

    /// Record the item the answerer privately showed.
    pub(crate) fn record_shown(&mut self, id: RumourId, item: Item) {
        if let Some(rumour) = self.get_mut(id) {
            rumour.set_shown(item);
        }
    }

    /// Clear `item` from rumour `id`. Returns `true` if a slot changed.
    pub fn clear_slot(&mut self, id: RumourId, item: Item) -> bool {
        self.get_mut(id).is_some_and(|rumour| rumour.clear(item))
    }

    /// Iterate over all rumours in asking order.
    pub fn iter(&self) -> impl Iterator<Item = &Rumour> {
        self.rumours.iter()
    }

    /// All rumour ids in asking order.
    pub fn ids(&self) -> impl Iterator<Item = RumourId> {
        (0..self.rumours.len() as u32).map(RumourId)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rumours.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rumours.is_empty()
    }
}
