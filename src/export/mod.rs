//! Export layout and document writing.
//!
//! The layout builders transform a schedule and the opponent histories
//! into block-structured [`ExportGrid`]s; the `xlsx` writer maps each
//! named grid onto one worksheet. The fixed sheet order is A-opponents,
//! B-opponents, rounds.

mod grid;
mod layout;
mod xlsx;

pub use grid::{Cell, ExportGrid};
pub use layout::{
    empty_workbook_grids, opponents_grid, rounds_grid, workbook_grids, RosterLabels, BLOCK_WIDTH,
};
pub use xlsx::{workbook_bytes, write_workbook};
