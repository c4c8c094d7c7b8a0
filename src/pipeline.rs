//! One-call generation pipeline.
//!
//! Runs balance → rotate → aggregate over snapshot copies of the
//! caller's rosters and returns everything one generation produces as
//! a single immutable value. Each run replaces the previous generation
//! wholesale; nothing is carried over.

use serde::{Deserialize, Serialize};

use crate::balance::{balance, PlaceholderCounter};
use crate::error::Result;
use crate::export::{workbook_grids, ExportGrid, RosterLabels};
use crate::history::aggregate;
use crate::models::{OpponentHistory, Roster, Schedule};
use crate::rotation::build_schedule;

/// The complete output of one generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Generation {
    /// Roster A after balancing.
    pub roster_a: Roster,
    /// Roster B after balancing.
    pub roster_b: Roster,
    /// The full round sequence.
    pub schedule: Schedule,
    /// Opponent histories for roster A's real participants.
    pub history_a: OpponentHistory,
    /// Opponent histories for roster B's real participants.
    pub history_b: OpponentHistory,
}

impl Generation {
    /// Balances the rosters, builds the schedule, and aggregates
    /// opponent histories.
    ///
    /// The placeholder counter is caller-owned so bye numbering stays
    /// monotonic across repeated generations in one session.
    ///
    /// # Errors
    /// [`crate::error::ScheduleError::EmptyRoster`] when either roster
    /// has no participants.
    pub fn run(
        roster_a: &Roster,
        roster_b: &Roster,
        counter: &mut PlaceholderCounter,
    ) -> Result<Self> {
        let (balanced_a, balanced_b) = balance(roster_a, roster_b, counter)?;
        let schedule = build_schedule(&balanced_a, &balanced_b)?;
        let (history_a, history_b) = aggregate(&schedule, &balanced_a, &balanced_b);
        Ok(Self {
            roster_a: balanced_a,
            roster_b: balanced_b,
            schedule,
            history_a,
            history_b,
        })
    }

    /// Number of rounds in this generation.
    pub fn round_count(&self) -> usize {
        self.schedule.round_count()
    }

    /// The three export grids in fixed sheet order: A-opponents,
    /// B-opponents, rounds.
    pub fn export_grids(&self, labels: &RosterLabels) -> Vec<(String, ExportGrid)> {
        workbook_grids(
            &self.schedule,
            &self.history_a,
            &self.history_b,
            &self.roster_a,
            &self.roster_b,
            labels,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScheduleError;
    use crate::models::Side;

    #[test]
    fn test_run_unequal_rosters() {
        let a = Roster::from_names(&["P1", "P2", "P3"]);
        let b = Roster::from_names(&["Q1"]);
        let mut counter = PlaceholderCounter::new();

        let generation = Generation::run(&a, &b, &mut counter).unwrap();
        assert_eq!(generation.round_count(), 3);
        assert_eq!(generation.roster_b.len(), 3);
        assert_eq!(generation.roster_b.real_count(), 1);
        assert_eq!(generation.history_a.len(), 3);
        assert_eq!(generation.history_b.len(), 1);
        for id in 1..=3 {
            let rec = generation.history_a.get(id).unwrap();
            assert_eq!(rec.round_count(), 3);
            assert_eq!(rec.real_opponent_count(), 1);
        }
    }

    #[test]
    fn test_run_empty_roster() {
        let a = Roster::new();
        let b = Roster::from_names(&["Q1"]);
        let mut counter = PlaceholderCounter::new();

        assert_eq!(
            Generation::run(&a, &b, &mut counter),
            Err(ScheduleError::EmptyRoster { side: Side::A })
        );
    }

    #[test]
    fn test_repeated_runs_are_identical_except_bye_names() {
        let a = Roster::from_names(&["P1", "P2"]);
        let b = Roster::from_names(&["Q1", "Q2"]);
        let mut counter = PlaceholderCounter::new();

        // Equal rosters: no byes, so repeated runs are fully identical.
        let first = Generation::run(&a, &b, &mut counter).unwrap();
        let second = Generation::run(&a, &b, &mut counter).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_export_grids_fixed_order() {
        let a = Roster::from_names(&["P1", "P2"]);
        let b = Roster::from_names(&["Q1", "Q2"]);
        let mut counter = PlaceholderCounter::new();

        let generation = Generation::run(&a, &b, &mut counter).unwrap();
        let grids = generation.export_grids(&RosterLabels::default());
        let names: Vec<&str> = grids.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(
            names,
            vec!["Team A opponents", "Team B opponents", "Rounds"]
        );
    }

    #[test]
    fn test_generation_serde_round_trip() {
        let a = Roster::from_names(&["P1", "P2"]);
        let b = Roster::from_names(&["Q1"]);
        let mut counter = PlaceholderCounter::new();

        let generation = Generation::run(&a, &b, &mut counter).unwrap();
        let json = serde_json::to_string(&generation).unwrap();
        let back: Generation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, generation);
    }
}
