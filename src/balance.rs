//! Roster balancing.
//!
//! Equalizes the two roster lengths by appending placeholder ("bye")
//! participants to the shorter one, so the rotation scheduler never has
//! to special-case unequal sides. Placeholders occupy rotation slots
//! but are excluded from history reporting.
//!
//! Placeholder display names are numbered from a [`PlaceholderCounter`]
//! owned by the caller and threaded through each call, so successive
//! generations keep producing visibly distinct bye names without the
//! core holding hidden mutable state.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::models::{Participant, Roster, Side};

/// Monotonic counter for placeholder display names.
///
/// Caller-owned: create it once per session and pass it to every
/// [`balance`] call. Serializable so sessions can persist it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderCounter {
    next: u32,
}

impl PlaceholderCounter {
    /// Creates a counter starting at 1.
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Returns the current value and advances.
    pub fn take(&mut self) -> u32 {
        let value = self.next.max(1);
        self.next = value + 1;
        value
    }
}

/// Equalizes roster lengths by padding the shorter roster with
/// placeholders.
///
/// Inputs are copied, never mutated; the longer roster comes back
/// unchanged. Placeholder ids are allocated above the padded roster's
/// largest existing id, so they cannot collide with real ids.
///
/// # Errors
/// [`ScheduleError::EmptyRoster`] if either roster has zero entries —
/// padding against an empty side is undefined, not "pad from nothing".
pub fn balance(
    roster_a: &Roster,
    roster_b: &Roster,
    counter: &mut PlaceholderCounter,
) -> Result<(Roster, Roster)> {
    if roster_a.is_empty() {
        return Err(ScheduleError::EmptyRoster { side: Side::A });
    }
    if roster_b.is_empty() {
        return Err(ScheduleError::EmptyRoster { side: Side::B });
    }

    let mut balanced_a = roster_a.clone();
    let mut balanced_b = roster_b.clone();

    if balanced_a.len() > balanced_b.len() {
        pad(&mut balanced_b, balanced_a.len(), counter);
    } else if balanced_b.len() > balanced_a.len() {
        pad(&mut balanced_a, balanced_b.len(), counter);
    }

    Ok((balanced_a, balanced_b))
}

fn pad(roster: &mut Roster, target_len: usize, counter: &mut PlaceholderCounter) {
    let mut next_id = roster.max_id().unwrap_or(0) + 1;
    while roster.len() < target_len {
        roster.push(Participant::placeholder(next_id, counter.take()));
        next_id += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_rosters_unchanged() {
        let a = Roster::from_names(&["P1", "P2"]);
        let b = Roster::from_names(&["Q1", "Q2"]);
        let mut counter = PlaceholderCounter::new();

        let (ba, bb) = balance(&a, &b, &mut counter).unwrap();
        assert_eq!(ba, a);
        assert_eq!(bb, b);
    }

    #[test]
    fn test_pads_shorter_roster_to_max() {
        let a = Roster::from_names(&["P1", "P2", "P3"]);
        let b = Roster::from_names(&["Q1"]);
        let mut counter = PlaceholderCounter::new();

        let (ba, bb) = balance(&a, &b, &mut counter).unwrap();
        assert_eq!(ba, a); // longer side untouched
        assert_eq!(bb.len(), 3);
        assert_eq!(bb.real_count(), 1);
        assert_eq!(bb.participants[1].name, "Bye 1 (N/A)");
        assert_eq!(bb.participants[2].name, "Bye 2 (N/A)");
        assert!(bb.participants[1].is_placeholder);
        assert!(bb.participants[2].is_placeholder);
    }

    #[test]
    fn test_pads_side_a_when_shorter() {
        let a = Roster::from_names(&["P1"]);
        let b = Roster::from_names(&["Q1", "Q2"]);
        let mut counter = PlaceholderCounter::new();

        let (ba, bb) = balance(&a, &b, &mut counter).unwrap();
        assert_eq!(ba.len(), 2);
        assert_eq!(bb, b);
        assert!(ba.participants[1].is_placeholder);
    }

    #[test]
    fn test_placeholder_ids_avoid_existing_ids() {
        let b = Roster::from(vec![Participant::new(5, "Q1"), Participant::new(9, "Q2")]);
        let a = Roster::from_names(&["P1", "P2", "P3", "P4"]);
        let mut counter = PlaceholderCounter::new();

        let (_, bb) = balance(&a, &b, &mut counter).unwrap();
        let real_ids: Vec<u32> = vec![5, 9];
        for p in bb.iter().filter(|p| p.is_placeholder) {
            assert!(!real_ids.contains(&p.id));
        }
        assert_eq!(
            bb.iter().filter(|p| p.is_placeholder).map(|p| p.id).collect::<Vec<_>>(),
            vec![10, 11]
        );
    }

    #[test]
    fn test_counter_continues_across_generations() {
        let a = Roster::from_names(&["P1", "P2"]);
        let b = Roster::from_names(&["Q1"]);
        let mut counter = PlaceholderCounter::new();

        let (_, first) = balance(&a, &b, &mut counter).unwrap();
        let (_, second) = balance(&a, &b, &mut counter).unwrap();
        assert_eq!(first.participants[1].name, "Bye 1 (N/A)");
        assert_eq!(second.participants[1].name, "Bye 2 (N/A)");
    }

    #[test]
    fn test_empty_roster_is_an_error() {
        let empty = Roster::new();
        let b = Roster::from_names(&["Q1"]);
        let mut counter = PlaceholderCounter::new();

        assert_eq!(
            balance(&empty, &b, &mut counter),
            Err(ScheduleError::EmptyRoster { side: Side::A })
        );
        assert_eq!(
            balance(&b, &empty, &mut counter),
            Err(ScheduleError::EmptyRoster { side: Side::B })
        );
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let a = Roster::from_names(&["P1", "P2", "P3"]);
        let b = Roster::from_names(&["Q1"]);
        let (a_before, b_before) = (a.clone(), b.clone());
        let mut counter = PlaceholderCounter::new();

        balance(&a, &b, &mut counter).unwrap();
        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }

    #[test]
    fn test_default_counter_starts_at_one() {
        let mut counter = PlaceholderCounter::default();
        assert_eq!(counter.take(), 1);
        assert_eq!(counter.take(), 2);
    }
}
