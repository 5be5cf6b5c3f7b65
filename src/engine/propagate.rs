//! Fixed-point propagation of ownership facts.
//!
//! New hand facts go on a worklist instead of recursing. Draining the
//! worklist applies each fact and queues its direct consequences; once
//! it is empty, a sweep over every rumour and item looks for facts that
//! only become visible in combination. The two alternate until a sweep
//! queues nothing.
//!
//! ## Rules
//!
//! - **Owner**: `P` owns `i` ⇒ every other player lacks `i`, and `i` is
//!   discovered.
//! - **Rule A**: `P` owns `i` ⇒ `i` is cleared from every answered rumour
//!   with 2+ candidates that `P` did not answer, including rumours nobody
//!   could refute. A rumour left with one candidate means its answerer
//!   owns that candidate.
//! - **Rule B**: a rumour's answerer lacks `i` ⇒ `i` is cleared from that
//!   rumour, with the same one-candidate consequence.
//! - **Rule C**: every player lacks `i` ⇒ `i` is a solution item, and the
//!   rest of its category is discovered.
//! - **Rule D**: a category narrowed down to one item ⇒ that item is a
//!   solution item, and every player lacks it.
//!
//! A fact that conflicts with a proven one is reported and dropped; the
//! rest of the cascade carries on.

use std::collections::VecDeque;

use tracing::{debug, info, warn};

use super::solution::SolutionTracker;
use crate::catalog::{Category, Item};
use crate::core::{Contradiction, GameState, PlayerId};
use crate::events::{Deduction, Outcome};
use crate::knowledge::KnowledgeStore;
use crate::rumours::{Answer, RumourId, RumourLedger};

/// A hand fact waiting to be applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Fact {
    Owns(PlayerId, Item),
    Lacks(PlayerId, Item),
}

/// Worklist-driven propagator over one game state.
pub(crate) struct Propagator<'a> {
    knowledge: &'a mut KnowledgeStore,
    rumours: &'a mut RumourLedger,
    solution: &'a mut SolutionTracker,
    pending: VecDeque<Fact>,
    outcome: Outcome,
}

impl<'a> Propagator<'a> {
    pub(crate) fn new(state: &'a mut GameState) -> Self {
        Self {
            knowledge: &mut state.knowledge,
            rumours: &mut state.rumours,
            solution: &mut state.solution,
            pending: VecDeque::new(),
            outcome: Outcome::default(),
        }
    }

    /// Queue a fact.
    pub(crate) fn push(&mut self, fact: Fact) {
        self.pending.push_back(fact);
    }

    /// Clear `item` from `rumour` directly, outside the rules.
    pub(crate) fn clear_slot(&mut self, rumour: RumourId, item: Item) {
        if self.rumours.clear_slot(rumour, item) {
            self.record(Deduction::Cleared { rumour, item });
        }
    }

    pub(crate) fn set_rumour(&mut self, rumour: RumourId) {
        self.outcome.rumour = Some(rumour);
    }

    /// Run to a fixed point and hand back what happened.
    pub(crate) fn run(mut self) -> Outcome {
        loop {
            while let Some(fact) = self.pending.pop_front() {
                match fact {
                    Fact::Owns(player, item) => self.mark_owned(player, item),
                    Fact::Lacks(player, item) => self.mark_not_owned(player, item),
                }
            }
            self.sweep();
            if self.pending.is_empty() {
                break;
            }
        }
        self.outcome
    }

    fn record(&mut self, deduction: Deduction) {
        debug!(%deduction, "deduced");
        self.outcome.deductions.push(deduction);
    }

    fn report(&mut self, contradiction: Contradiction) {
        if self.outcome.contradictions.contains(&contradiction) {
            return;
        }
        warn!(%contradiction, "dropping contradicting fact");
        self.outcome.contradictions.push(contradiction);
    }

    fn check_solved(&mut self) {
        if let Some(solution) = self.solution.take_newly_solved() {
            info!(%solution, "solved");
            self.outcome.solved = Some(solution);
        }
    }

    fn mark_owned(&mut self, player: PlayerId, item: Item) {
        match self.knowledge.record_owned(player, item) {
            Err(contradiction) => return self.report(contradiction),
            Ok(false) => return,
            Ok(true) => {}
        }
        self.record(Deduction::Owns { player, item });

        for other in PlayerId::all(self.knowledge.player_count()) {
            if other != player {
                self.push(Fact::Lacks(other, item));
            }
        }

        self.discount_owned(player, item);
    }

    fn mark_not_owned(&mut self, player: PlayerId, item: Item) {
        match self.knowledge.record_not_owned(player, item) {
            Err(contradiction) => self.report(contradiction),
            Ok(true) => self.record(Deduction::Lacks { player, item }),
            Ok(false) => {}
        }
    }

    fn discover(&mut self, item: Item) {
        if self.solution.discover(item) {
            self.record(Deduction::Discovered { item });
        }
    }

    /// Rule A.
    fn discount_owned(&mut self, owner: PlayerId, item: Item) {
        self.discover(item);
        self.check_solved();

        let ids: Vec<RumourId> = self.rumours.ids().collect();
        for id in ids {
            let Some(rumour) = self.rumours.get(id) else {
                continue;
            };
            let answer = rumour.answer();
            match answer {
                Answer::Pending => continue,
                Answer::By(answerer) if answerer == owner => continue,
                Answer::Nobody | Answer::By(_) => {}
            }
            if rumour.remaining_count() < 2 || !self.rumours.clear_slot(id, item) {
                continue;
            }
            self.record(Deduction::Cleared { rumour: id, item });
            if let Answer::By(answerer) = answer {
                self.settle_rumour(id, answerer);
            }
        }
    }

    /// Queue the one-candidate consequence of a rumour, if it has one.
    fn settle_rumour(&mut self, id: RumourId, answerer: PlayerId) {
        let Some(rumour) = self.rumours.get(id) else {
            return;
        };
        match rumour.remaining_count() {
            0 => self.report(Contradiction::UnexplainedRumour {
                rumour: id,
                answerer,
            }),
            1 => {
                if let Some(item) = rumour.sole_remaining() {
                    self.push(Fact::Owns(answerer, item));
                }
            }
            _ => {}
        }
    }

    /// Rules B, C and D, repeated until a pass changes nothing.
    fn sweep(&mut self) {
        loop {
            let mut changed = self.discount_lacked();
            changed |= self.find_unowned();
            changed |= self.find_last_candidates();
            if !changed {
                break;
            }
        }
    }

    /// Rule B.
    fn discount_lacked(&mut self) -> bool {
        let mut changed = false;
        let ids: Vec<RumourId> = self.rumours.ids().collect();
        for id in ids {
            let Some(rumour) = self.rumours.get(id) else {
                continue;
            };
            let Some(answerer) = rumour.answerer() else {
                continue;
            };
            if rumour.remaining_count() < 2 {
                continue;
            }
            let lacked: Vec<Item> = rumour
                .remaining()
                .into_iter()
                .filter(|&item| self.knowledge.hand(answerer).lacks(item))
                .collect();
            if lacked.is_empty() {
                continue;
            }
            for item in lacked {
                self.clear_slot(id, item);
            }
            changed = true;
            self.settle_rumour(id, answerer);
        }
        changed
    }

    /// Rule C.
    fn find_unowned(&mut self) -> bool {
        let mut changed = false;
        for item in Item::all() {
            if self.solution.is_solution_item(item) || !self.knowledge.nobody_owns(item) {
                continue;
            }
            changed |= self.confirm_solution_item(item);
        }
        changed
    }

    /// Rule D.
    fn find_last_candidates(&mut self) -> bool {
        let mut changed = false;
        for category in Category::ALL {
            if self.solution.solution_item_in(category).is_some() {
                continue;
            }
            if let [item] = self.solution.narrowed_in(category).as_slice() {
                changed |= self.confirm_solution_item(*item);
            }
        }
        changed
    }

    /// Record `item` as a solution item; returns `true` if new.
    fn confirm_solution_item(&mut self, item: Item) -> bool {
        match self.solution.add_solution_item(item) {
            Err(contradiction) => {
                self.report(contradiction);
                return false;
            }
            Ok(false) => return false,
            Ok(true) => {}
        }
        self.record(Deduction::SolutionItem { item });

        for other in item.category().items() {
            if other != item {
                self.discover(other);
            }
        }
        for player in PlayerId::all(self.knowledge.player_count()) {
            self.push(Fact::Lacks(player, item));
        }
        self.check_solved();
        true
    }
}
