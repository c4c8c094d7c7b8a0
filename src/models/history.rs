//! Opponent history models.
//!
//! For every real participant, the ordered list of opponents they faced,
//! one per round. Records are keyed by participant id in an explicit
//! typed map, so "no record" is a checkable condition rather than a
//! missing dynamic field. Rebuilt from scratch on every generation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Participant, Roster};

/// One real participant's ordered opponent list.
///
/// `opponents[k]` is the opponent faced in round `k + 1`. A placeholder
/// opponent is a recorded bye, not a gap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentRecord {
    /// The participant this record belongs to.
    pub participant: Participant,
    /// Opponents in round order.
    pub opponents: Vec<Participant>,
}

impl OpponentRecord {
    /// Creates an empty record for a participant.
    pub fn new(participant: Participant) -> Self {
        Self {
            participant,
            opponents: Vec::new(),
        }
    }

    /// Number of rounds recorded.
    pub fn round_count(&self) -> usize {
        self.opponents.len()
    }

    /// Number of rounds against a real opponent (byes excluded).
    pub fn real_opponent_count(&self) -> usize {
        self.opponents.iter().filter(|o| o.is_real()).count()
    }
}

/// Opponent records for one roster, keyed by participant id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentHistory {
    records: HashMap<u32, OpponentRecord>,
}

impl OpponentHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an empty record for a participant.
    pub fn insert(&mut self, participant: Participant) {
        self.records
            .insert(participant.id, OpponentRecord::new(participant));
    }

    /// Appends an opponent to the record for `id`, if one exists.
    ///
    /// Placeholders have no record, so their pairings are dropped here
    /// by construction.
    pub fn record_opponent(&mut self, id: u32, opponent: Participant) {
        if let Some(record) = self.records.get_mut(&id) {
            record.opponents.push(opponent);
        }
    }

    /// The record for `id`, if present.
    pub fn get(&self, id: u32) -> Option<&OpponentRecord> {
        self.records.get(&id)
    }

    /// Whether a record exists for `id`.
    pub fn contains(&self, id: u32) -> bool {
        self.records.contains_key(&id)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in the iteration order of `roster`, skipping roster
    /// entries without a record (placeholders).
    pub fn in_roster_order<'a>(&'a self, roster: &Roster) -> Vec<&'a OpponentRecord> {
        roster
            .iter()
            .filter_map(|p| self.records.get(&p.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_record() {
        let mut h = OpponentHistory::new();
        h.insert(Participant::new(1, "P1"));
        assert!(h.contains(1));
        assert!(!h.contains(2));

        h.record_opponent(1, Participant::new(1, "Q1"));
        h.record_opponent(1, Participant::placeholder(2, 1));
        let rec = h.get(1).unwrap();
        assert_eq!(rec.round_count(), 2);
        assert_eq!(rec.real_opponent_count(), 1);
    }

    #[test]
    fn test_record_without_entry_is_dropped() {
        let mut h = OpponentHistory::new();
        h.record_opponent(9, Participant::new(1, "Q1"));
        assert!(h.is_empty());
    }

    #[test]
    fn test_in_roster_order() {
        let mut roster = Roster::from_names(&["P1", "P2"]);
        roster.push(Participant::placeholder(3, 1));

        let mut h = OpponentHistory::new();
        // Insert out of roster order; placeholders get no record.
        for p in roster.iter().filter(|p| p.is_real()).rev() {
            h.insert(p.clone());
        }

        let ordered = h.in_roster_order(&roster);
        assert_eq!(ordered.len(), 2);
        assert_eq!(ordered[0].participant.name, "P1");
        assert_eq!(ordered[1].participant.name, "P2");
    }
}
