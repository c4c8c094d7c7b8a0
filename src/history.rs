//! Opponent history aggregation.
//!
//! Walks a schedule in round order and produces, for every real
//! participant of each roster, the ordered list of opponents they
//! faced. Placeholder opponents are recorded as byes; placeholder
//! participants themselves get no record. Because the scheduler emits a
//! full matching per round, every real participant ends up with exactly
//! one opponent per round.

use crate::models::{OpponentHistory, Roster, Schedule};

/// Builds both rosters' opponent histories from a schedule.
///
/// Keyed by participant id; `histories.0` covers roster A (pair left
/// sides), `histories.1` roster B. Rebuilt from scratch — a new
/// schedule invalidates all previous records.
pub fn aggregate(
    schedule: &Schedule,
    roster_a: &Roster,
    roster_b: &Roster,
) -> (OpponentHistory, OpponentHistory) {
    let mut history_a = OpponentHistory::new();
    let mut history_b = OpponentHistory::new();

    for p in roster_a.iter().filter(|p| p.is_real()) {
        history_a.insert(p.clone());
    }
    for p in roster_b.iter().filter(|p| p.is_real()) {
        history_b.insert(p.clone());
    }

    for round in &schedule.rounds {
        for pair in &round.pairs {
            if let (Some(left), Some(right)) = (&pair.left, &pair.right) {
                if left.is_real() {
                    history_a.record_opponent(left.id, right.clone());
                }
                if right.is_real() {
                    history_b.record_opponent(right.id, left.clone());
                }
            }
        }
    }

    (history_a, history_b)
}
