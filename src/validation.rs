//! Advisory roster integrity checks.
//!
//! Duplicate ids, blank names, and pre-existing placeholders are all
//! legal at the scheduling boundary — the pipeline handles them on the
//! normal path. Callers that want stricter input hygiene (a roster
//! editor, an import step) can run these checks and surface the
//! findings before generating.

use std::collections::HashSet;

use crate::models::{Roster, Side};

/// Validation result: all findings, not just the first.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation finding.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Finding category.
    pub kind: ValidationErrorKind,
    /// Which roster the finding concerns.
    pub side: Side,
    /// Human-readable description.
    pub message: String,
}

/// Categories of roster findings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entries in the same roster share an id.
    DuplicateId,
    /// An entry has an empty (or whitespace-only) name.
    BlankName,
    /// A placeholder is present before balancing ran.
    UnexpectedPlaceholder,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, side: Side, message: impl Into<String>) -> Self {
        Self {
            kind,
            side,
            message: message.into(),
        }
    }
}

/// Validates both input rosters.
///
/// Checks, per roster:
/// 1. No duplicate participant ids
/// 2. No blank display names
/// 3. No placeholders (balancing inserts those; input rosters carry
///    only real participants)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(findings)` with every detected
/// issue.
pub fn validate_rosters(roster_a: &Roster, roster_b: &Roster) -> ValidationResult {
    let mut errors = Vec::new();
    check_roster(roster_a, Side::A, &mut errors);
    check_roster(roster_b, Side::B, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_roster(roster: &Roster, side: Side, errors: &mut Vec<ValidationError>) {
    let mut seen = HashSet::new();
    for p in roster.iter() {
        if !seen.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                side,
                format!("Duplicate id {} in roster {side}", p.id),
            ));
        }
        if p.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankName,
                side,
                format!("Participant {} in roster {side} has a blank name", p.id),
            ));
        }
        if p.is_placeholder {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnexpectedPlaceholder,
                side,
                format!("Participant {} in roster {side} is already a placeholder", p.id),
            ));
        }
    }
}
