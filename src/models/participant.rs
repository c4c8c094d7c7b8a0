//! Participant model.
//!
//! A participant is one entry on one side of the pairing. Placeholder
//! participants ("byes") are synthetic entries inserted by roster
//! balancing; they occupy a rotation slot but never attend.

use serde::{Deserialize, Serialize};

/// One member of a roster.
///
/// The `id` is unique within its own roster only — the two rosters have
/// independent id spaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Roster-local identifier.
    pub id: u32,
    /// Display name. Content is not validated; empty names are legal.
    pub name: String,
    /// Whether this entry is a synthetic bye inserted by balancing.
    pub is_placeholder: bool,
}

impl Participant {
    /// Creates a real participant.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_placeholder: false,
        }
    }

    /// Creates a placeholder (bye) participant.
    ///
    /// `label_index` comes from the caller-owned placeholder counter and
    /// only drives the display name; `id` must be allocated by the
    /// balancer so it cannot collide with real ids in the same roster.
    pub fn placeholder(id: u32, label_index: u32) -> Self {
        Self {
            id,
            name: format!("Bye {label_index} (N/A)"),
            is_placeholder: true,
        }
    }

    /// Whether this participant actually attends (not a bye).
    #[inline]
    pub fn is_real(&self) -> bool {
        !self.is_placeholder
    }
}
