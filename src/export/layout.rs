//! Block layout for schedule and opponent grids.
//!
//! Both grid kinds are laid out as fixed-width blocks side by side on a
//! shared row axis: one 4-column block per round (schedule grid) or per
//! real participant (opponent grids). Blocks are independently
//! headered; cells beyond a block's own data stay empty, never
//! zero-filled.

use crate::models::{OpponentHistory, Roster, Schedule, Side};

use super::grid::{Cell, ExportGrid};

/// Columns per block, for both grid kinds.
pub const BLOCK_WIDTH: usize = 4;

/// Display labels for the two rosters.
///
/// Cosmetic only — the scheduler never looks at them. They drive column
/// headers and sheet names, replacing the original boy/girl wording
/// with whatever the caller's domain uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterLabels {
    /// Label for roster A.
    pub side_a: String,
    /// Label for roster B.
    pub side_b: String,
}

impl Default for RosterLabels {
    fn default() -> Self {
        Self::new("Team A", "Team B")
    }
}

impl RosterLabels {
    /// Creates labels for the two rosters.
    pub fn new(side_a: impl Into<String>, side_b: impl Into<String>) -> Self {
        Self {
            side_a: side_a.into(),
            side_b: side_b.into(),
        }
    }

    /// The label for one side.
    pub fn label(&self, side: Side) -> &str {
        match side {
            Side::A => &self.side_a,
            Side::B => &self.side_b,
        }
    }

    /// Id column header for one side.
    pub fn id_header(&self, side: Side) -> String {
        format!("{}_id", self.label(side))
    }

    /// Name column header for one side.
    pub fn name_header(&self, side: Side) -> String {
        format!("{}_name", self.label(side))
    }

    /// Sheet name for one side's opponent grid.
    pub fn opponents_sheet_name(&self, side: Side) -> String {
        format!("{} opponents", self.label(side))
    }
}

/// Lays out the schedule as one 4-column block per round.
///
/// Block rows: round title, column headers, then one pair per row.
/// Rounds are equal-length by construction, but the layout sizes the
/// row axis from the longest round and leaves shorter rounds' trailing
/// cells empty.
pub fn rounds_grid(schedule: &Schedule, labels: &RosterLabels) -> ExportGrid {
    if schedule.is_empty() {
        return ExportGrid::placeholder("No rounds");
    }

    let max_pairs = schedule.max_pair_count();
    let total_rows = max_pairs + 2; // title row + header row
    let total_cols = schedule.round_count() * BLOCK_WIDTH;
    let mut grid = ExportGrid::new(total_rows, total_cols);

    for (round_index, round) in schedule.rounds.iter().enumerate() {
        let col = round_index * BLOCK_WIDTH;

        grid.set(0, col, Cell::text(format!("Round {}", round_index + 1)));

        grid.set(1, col, Cell::text(labels.id_header(Side::A)));
        grid.set(1, col + 1, Cell::text(labels.name_header(Side::A)));
        grid.set(1, col + 2, Cell::text(labels.id_header(Side::B)));
        grid.set(1, col + 3, Cell::text(labels.name_header(Side::B)));

        for (pair_index, pair) in round.pairs.iter().enumerate() {
            let row = pair_index + 2;
            if let Some(left) = &pair.left {
                grid.set(row, col, Cell::number(left.id));
                grid.set(row, col + 1, Cell::text(&left.name));
            }
            if let Some(right) = &pair.right {
                grid.set(row, col + 2, Cell::number(right.id));
                grid.set(row, col + 3, Cell::text(&right.name));
            }
        }
    }

    grid
}

/// Lays out one roster's opponent history as one 4-column block per
/// real participant, in roster iteration order.
///
/// Block rows: header row (own name / round number / opponent id /
/// opponent name), then one opponent per row in round order. Placeholder
/// opponents appear like anyone else — they are that participant's bye
/// rounds.
pub fn opponents_grid(
    history: &OpponentHistory,
    roster: &Roster,
    side: Side,
    labels: &RosterLabels,
) -> ExportGrid {
    let entries = history.in_roster_order(roster);
    if entries.is_empty() {
        return ExportGrid::placeholder(labels.label(side));
    }

    let max_opponents = entries.iter().map(|e| e.round_count()).max().unwrap_or(0);
    let total_rows = max_opponents + 1; // header row
    let total_cols = entries.len() * BLOCK_WIDTH;
    let mut grid = ExportGrid::new(total_rows, total_cols);

    let opponent_side = side.other();
    for (entry_index, entry) in entries.iter().enumerate() {
        let col = entry_index * BLOCK_WIDTH;

        grid.set(0, col, Cell::text(labels.name_header(side)));
        grid.set(0, col + 1, Cell::text("Round_number"));
        grid.set(0, col + 2, Cell::text(labels.id_header(opponent_side)));
        grid.set(0, col + 3, Cell::text(labels.name_header(opponent_side)));

        for (i, opponent) in entry.opponents.iter().enumerate() {
            let row = i + 1;
            grid.set(row, col, Cell::text(&entry.participant.name));
            grid.set(row, col + 1, Cell::number((i + 1) as u32));
            grid.set(row, col + 2, Cell::number(opponent.id));
            grid.set(row, col + 3, Cell::text(&opponent.name));
        }
    }

    grid
}

/// Builds the three export grids in their fixed sheet order:
/// A-opponents, B-opponents, rounds.
pub fn workbook_grids(
    schedule: &Schedule,
    history_a: &OpponentHistory,
    history_b: &OpponentHistory,
    roster_a: &Roster,
    roster_b: &Roster,
    labels: &RosterLabels,
) -> Vec<(String, ExportGrid)> {
    vec![
        (
            labels.opponents_sheet_name(Side::A),
            opponents_grid(history_a, roster_a, Side::A, labels),
        ),
        (
            labels.opponents_sheet_name(Side::B),
            opponents_grid(history_b, roster_b, Side::B, labels),
        ),
        ("Rounds".to_string(), rounds_grid(schedule, labels)),
    ]
}

/// The three degenerate grids for "export before any generation":
/// each sheet carries a single no-data cell.
pub fn empty_workbook_grids(labels: &RosterLabels) -> Vec<(String, ExportGrid)> {
    vec![
        (
            labels.opponents_sheet_name(Side::A),
            ExportGrid::placeholder(labels.label(Side::A)),
        ),
        (
            labels.opponents_sheet_name(Side::B),
            ExportGrid::placeholder(labels.label(Side::B)),
        ),
        (
            "Rounds".to_string(),
            ExportGrid::placeholder("No rounds"),
        ),
    ]
}
