//! Roster model.
//!
//! An ordered list of participants on one side of the pairing. Insertion
//! order is meaningful for index-based rotation but carries no other
//! semantic weight; the A/B side labels are opaque to the scheduler.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Participant;

/// Which of the two rosters an entity belongs to.
///
/// Purely positional: nothing in the scheduling algorithm depends on
/// which side carries which domain role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// The opposite side.
    pub fn other(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

/// An ordered roster of participants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    /// Participants in insertion order.
    pub participants: Vec<Participant>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a roster from display names, assigning sequential ids
    /// starting at 1.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        Self {
            participants: names
                .iter()
                .enumerate()
                .map(|(i, n)| Participant::new(i as u32 + 1, n.as_ref()))
                .collect(),
        }
    }

    /// Appends a participant.
    pub fn push(&mut self, participant: Participant) {
        self.participants.push(participant);
    }

    /// Number of entries, placeholders included.
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Whether the roster has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Number of real (non-placeholder) participants.
    pub fn real_count(&self) -> usize {
        self.participants.iter().filter(|p| p.is_real()).count()
    }

    /// Iterates participants in insertion order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Participant> {
        self.participants.iter()
    }

    /// Largest id present, or `None` for an empty roster.
    pub fn max_id(&self) -> Option<u32> {
        self.participants.iter().map(|p| p.id).max()
    }

    /// Shuffles the roster in place.
    ///
    /// A roster-preparation step performed by the caller before
    /// scheduling; the scheduler itself is deterministic over its
    /// inputs, so all randomness lives here.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.participants.shuffle(rng);
    }
}

impl From<Vec<Participant>> for Roster {
    fn from(participants: Vec<Participant>) -> Self {
        Self { participants }
    }
}
