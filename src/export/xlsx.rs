//! Thin spreadsheet writer.
//!
//! Maps each named [`ExportGrid`] onto one worksheet of an .xlsx
//! workbook, in the order given. No layout knowledge lives here; the
//! grids arrive fully addressed.

use std::path::Path;

use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

use super::grid::{Cell, ExportGrid};

/// Writes the named grids to an .xlsx file, one sheet per grid.
pub fn write_workbook(sheets: &[(String, ExportGrid)], path: &Path) -> Result<(), XlsxError> {
    let mut workbook = build_workbook(sheets)?;
    workbook.save(path)?;
    Ok(())
}

/// Encodes the named grids as .xlsx bytes, one sheet per grid.
pub fn workbook_bytes(sheets: &[(String, ExportGrid)]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = build_workbook(sheets)?;
    workbook.save_to_buffer()
}

fn build_workbook(sheets: &[(String, ExportGrid)]) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    for (name, grid) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(name)?;
        fill_worksheet(worksheet, grid)?;
    }
    Ok(workbook)
}

fn fill_worksheet(worksheet: &mut Worksheet, grid: &ExportGrid) -> Result<(), XlsxError> {
    for (row_index, row) in grid.iter_rows().enumerate() {
        for (col_index, cell) in row.iter().enumerate() {
            let row_index = row_index as u32;
            let col_index = col_index as u16;
            match cell {
                Cell::Empty => {}
                Cell::Number(value) => {
                    worksheet.write_number(row_index, col_index, *value)?;
                }
                Cell::Text(value) => {
                    worksheet.write_string(row_index, col_index, value)?;
                }
            }
        }
    }
    Ok(())
}
