//! Turn sequencing: who is proven empty-handed by a rumour's answer.
//!
//! Players are asked in turn order starting after the asker. Everyone
//! asked before the answerer could not refute, so they hold none of the
//! three items asked about. If nobody answered, that holds for every
//! player except the asker.

use crate::core::PlayerId;
use crate::rumours::{Answer, Rumour};

/// Players proven to hold none of `rumour`'s original items.
///
/// Empty for a rumour whose answer is still pending.
#[must_use]
pub fn passed_players(rumour: &Rumour, player_count: usize) -> Vec<PlayerId> {
    let asker = rumour.asker();
    match rumour.answer() {
        Answer::Pending => Vec::new(),
        Answer::Nobody => asker.seats_until(asker, player_count).collect(),
        Answer::By(answerer) => asker.seats_until(answerer, player_count).collect(),
    }
}

/// Players in the order they are asked to refute a rumour by `asker`.
pub fn refutation_order(asker: PlayerId, player_count: usize) -> impl Iterator<Item = PlayerId> {
    asker.seats_until(asker, player_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ItemCatalog;
    use crate::rumours::RumourId;

    fn rumour(asker: u8, answer: Answer) -> Rumour {
        let catalog = ItemCatalog::standard();
        let triple = ["knife", "scarlett", "kitchen"].map(|n| catalog.resolve(n).unwrap());
        let mut rumour = Rumour::new(RumourId::new(0), triple, PlayerId::new(asker)).unwrap();
        rumour.set_answer(answer);
        rumour
    }

    fn ids(players: Vec<PlayerId>) -> Vec<u8> {
        players.into_iter().map(|p| p.0).collect()
    }

    #[test]
    fn test_pending_passes_nobody() {
        assert!(passed_players(&rumour(0, Answer::Pending), 4).is_empty());
    }

    #[test]
    fn test_skipped_players_between_asker_and_answerer() {
        let r = rumour(0, Answer::By(PlayerId::new(2)));
        assert_eq!(ids(passed_players(&r, 4)), vec![1]);
    }

    #[test]
    fn test_next_player_answers() {
        let r = rumour(1, Answer::By(PlayerId::new(2)));
        assert!(passed_players(&r, 4).is_empty());
    }

    #[test]
    fn test_wraps_past_last_seat() {
        let r = rumour(2, Answer::By(PlayerId::new(1)));
        assert_eq!(ids(passed_players(&r, 4)), vec![3, 0]);
    }

    #[test]
    fn test_nobody_answered_means_everyone_else() {
        let r = rumour(1, Answer::Nobody);
        assert_eq!(ids(passed_players(&r, 3)), vec![2, 0]);
    }

    #[test]
    fn test_refutation_order() {
        let order: Vec<_> = refutation_order(PlayerId::new(3), 5).map(|p| p.0).collect();
        assert_eq!(order, vec![4, 0, 1, 2]);
    }
}
