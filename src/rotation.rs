//! Rotation scheduler (circle method).
//!
//! # Algorithm
//!
//! Roster A stays fixed. For round `r` in `0..n`, roster B is cyclically
//! right-rotated by `r` positions and paired position-by-position with
//! A. Over `n` rounds every position of A meets every element of B
//! exactly once: A[k] meets B[m] in the unique round `r ≡ (k - m) mod n`.
//!
//! Each round is built as an independent snapshot from a pure rotation
//! of the original B, never by mutating a working copy across
//! iterations, so individual rounds can be inspected in isolation.
//!
//! # Complexity
//! O(n²) pairs for rosters of length n.
//!
//! # Reference
//! Rasmussen & Trick (2008), "Round robin scheduling — a survey"

use crate::error::{Result, ScheduleError};
use crate::models::{Pair, Participant, Roster, Round, Schedule, Side};

/// Builds the full pairing schedule for two balanced rosters.
///
/// Requires equal, non-zero lengths; run [`crate::balance::balance`]
/// first. Deterministic: identical inputs produce identical schedules.
///
/// # Errors
/// [`ScheduleError::EmptyRoster`] for an empty input,
/// [`ScheduleError::LengthMismatch`] when balancing was skipped or
/// produced unequal rosters (a bug in the calling sequence).
pub fn build_schedule(roster_a: &Roster, roster_b: &Roster) -> Result<Schedule> {
    if roster_a.is_empty() {
        return Err(ScheduleError::EmptyRoster { side: Side::A });
    }
    if roster_b.is_empty() {
        return Err(ScheduleError::EmptyRoster { side: Side::B });
    }
    if roster_a.len() != roster_b.len() {
        return Err(ScheduleError::LengthMismatch {
            left: roster_a.len(),
            right: roster_b.len(),
        });
    }

    let n = roster_a.len();
    let mut schedule = Schedule::new();
    for r in 0..n {
        let rotated = rotated_right(&roster_b.participants, r);
        let pairs = roster_a
            .iter()
            .zip(rotated)
            .map(|(left, right)| Pair::new(left.clone(), right))
            .collect();
        schedule.rounds.push(Round::new(pairs));
    }
    Ok(schedule)
}

/// Returns `participants` cyclically right-rotated by `offset`.
fn rotated_right(participants: &[Participant], offset: usize) -> Vec<Participant> {
    let n = participants.len();
    (0..n)
        .map(|k| participants[(k + n - offset % n) % n].clone())
        .collect()
}
