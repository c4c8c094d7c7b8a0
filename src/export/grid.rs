//! Rectangular cell grid for tabular export.
//!
//! Format-agnostic: a dense row-major grid of cells with zero-based
//! (row, column) addressing. The spreadsheet writer consumes it without
//! knowing anything about block layout.

use serde::{Deserialize, Serialize};

/// One cell value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    /// No value; skipped by writers, never zero-filled.
    #[default]
    Empty,
    /// Numeric value (ids, round numbers).
    Number(f64),
    /// Text value.
    Text(String),
}

impl Cell {
    /// Creates a text cell.
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// Creates a numeric cell.
    pub fn number(value: impl Into<f64>) -> Self {
        Cell::Number(value.into())
    }
}

/// A fixed-size rectangular grid of cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportGrid {
    rows: Vec<Vec<Cell>>,
    cols: usize,
}

static EMPTY: Cell = Cell::Empty;

impl ExportGrid {
    /// Creates a grid of the given dimensions, all cells empty.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows: vec![vec![Cell::Empty; cols]; rows],
            cols,
        }
    }

    /// Creates the degenerate single-cell grid used when there is
    /// nothing to export, so document writers always receive at least
    /// one addressable cell.
    pub fn placeholder(label: impl Into<String>) -> Self {
        Self {
            rows: vec![vec![Cell::text(label)]],
            cols: 1,
        }
    }

    /// Sets a cell. Out-of-range coordinates are ignored.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if let Some(r) = self.rows.get_mut(row) {
            if let Some(c) = r.get_mut(col) {
                *c = cell;
            }
        }
    }

    /// The cell at (row, col); `Empty` when out of range.
    pub fn get(&self, row: usize, col: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY)
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn col_count(&self) -> usize {
        self.cols
    }

    /// Iterates rows as cell slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }
}
