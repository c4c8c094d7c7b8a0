//! Error types for the pairing pipeline.
//!
//! Two failure modes exist. [`ScheduleError::EmptyRoster`] is an
//! ordinary caller-facing condition: scheduling cannot proceed, the
//! caller decides whether to message or silently disable. A
//! [`ScheduleError::LengthMismatch`] reaching the scheduler means
//! balancing was skipped or broken and should be treated as a bug in
//! the calling sequence, not handled gracefully.

use thiserror::Error;

use crate::models::Side;

/// Failures of the balance/schedule pipeline.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("roster {side} has no participants")]
    EmptyRoster { side: Side },

    #[error("balanced rosters differ in length: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}

/// Convenience alias for pipeline results.
pub type Result<T> = std::result::Result<T, ScheduleError>;
