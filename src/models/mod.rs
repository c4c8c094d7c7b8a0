//! Pairing domain models.
//!
//! Core data types for representing two-roster pairing problems and
//! their solutions. All four structures (balanced rosters, schedule,
//! opponent histories, export grids) are immutable snapshots produced
//! by pure transformations; nothing holds a back-reference to its
//! producer.
//!
//! # Lifecycle
//!
//! Balanced rosters feed the rotation scheduler; the resulting
//! [`Schedule`] is the long-lived artifact of one generation and is
//! replaced wholesale by the next.

mod history;
mod participant;
mod roster;
mod round;

pub use history::{OpponentHistory, OpponentRecord};
pub use participant::Participant;
pub use roster::{Roster, Side};
pub use round::{Pair, Round, Schedule};
