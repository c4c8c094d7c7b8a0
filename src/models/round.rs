//! Round and schedule (solution) models.
//!
//! A round is one full matching between the two balanced rosters; a
//! schedule is the ordered sequence of rounds produced by one
//! generation. Both are immutable snapshots: a new generation replaces
//! the whole schedule rather than mutating it.

use serde::{Deserialize, Serialize};

use super::Participant;

/// One pairing inside a round.
///
/// A side is `None` only in the degenerate case where a roster was empty
/// before balancing; after a successful balance every pair has two
/// occupied sides (possibly a placeholder).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    /// Entry from roster A.
    pub left: Option<Participant>,
    /// Entry from roster B.
    pub right: Option<Participant>,
}

impl Pair {
    /// Creates a pair with both sides occupied.
    pub fn new(left: Participant, right: Participant) -> Self {
        Self {
            left: Some(left),
            right: Some(right),
        }
    }

    /// Whether both sides are occupied by real participants.
    pub fn is_real_pairing(&self) -> bool {
        matches!((&self.left, &self.right), (Some(l), Some(r)) if l.is_real() && r.is_real())
    }
}

/// One full matching between the balanced rosters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// Pairs in roster-A position order.
    pub pairs: Vec<Pair>,
}

impl Round {
    /// Creates a round from its pairs.
    pub fn new(pairs: Vec<Pair>) -> Self {
        Self { pairs }
    }

    /// Number of pairs in this round.
    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }
}

/// The complete ordered sequence of rounds from one generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Rounds in play order.
    pub rounds: Vec<Round>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rounds.
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// Whether the schedule has no rounds.
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Largest pair count over all rounds.
    ///
    /// Uniform by construction of the rotation scheduler, but consumers
    /// laying out grids must not assume uniformity.
    pub fn max_pair_count(&self) -> usize {
        self.rounds.iter().map(Round::pair_count).max().unwrap_or(0)
    }

    /// Zero-based index of the round where roster A's `left_id` meets
    /// roster B's `right_id`, if any.
    pub fn round_where_paired(&self, left_id: u32, right_id: u32) -> Option<usize> {
        self.rounds.iter().position(|round| {
            round.pairs.iter().any(|pair| {
                matches!(
                    (&pair.left, &pair.right),
                    (Some(l), Some(r)) if l.id == left_id && r.id == right_id
                )
            })
        })
    }

    /// Total number of real-vs-real pairings across all rounds.
    pub fn real_pairing_count(&self) -> usize {
        self.rounds
            .iter()
            .flat_map(|r| r.pairs.iter())
            .filter(|p| p.is_real_pairing())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> Schedule {
        let p1 = Participant::new(1, "P1");
        let p2 = Participant::new(2, "P2");
        let q1 = Participant::new(1, "Q1");
        let q2 = Participant::new(2, "Q2");
        Schedule {
            rounds: vec![
                Round::new(vec![
                    Pair::new(p1.clone(), q1.clone()),
                    Pair::new(p2.clone(), q2.clone()),
                ]),
                Round::new(vec![Pair::new(p1, q2), Pair::new(p2, q1)]),
            ],
        }
    }

    #[test]
    fn test_round_where_paired() {
        let s = sample_schedule();
        assert_eq!(s.round_where_paired(1, 1), Some(0));
        assert_eq!(s.round_where_paired(1, 2), Some(1));
        assert_eq!(s.round_where_paired(2, 1), Some(1));
        assert_eq!(s.round_where_paired(1, 99), None);
    }

    #[test]
    fn test_counts() {
        let s = sample_schedule();
        assert_eq!(s.round_count(), 2);
        assert_eq!(s.max_pair_count(), 2);
        assert_eq!(s.real_pairing_count(), 4);
        assert!(!s.is_empty());
        assert!(Schedule::new().is_empty());
        assert_eq!(Schedule::new().max_pair_count(), 0);
    }

    #[test]
    fn test_placeholder_pairing_is_not_real() {
        let pair = Pair::new(Participant::new(1, "P1"), Participant::placeholder(2, 1));
        assert!(!pair.is_real_pairing());
    }

    #[test]
    fn test_schedule_serde_round_trip() {
        let s = sample_schedule();
        let json = serde_json::to_string(&s).unwrap();
        let back: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
