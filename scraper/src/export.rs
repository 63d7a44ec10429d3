use std::io::Write;
use std::path::Path;

use common::{Cell, ExtractedRow, COLUMNS};
use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook, Worksheet};
use tempfile::NamedTempFile;
use tracing::info;

use crate::error::{Result, ScrapeError};

const SHEET_NAME: &str = "Sheet1";

/// Writes `rows` under the fixed header to an `.xlsx` file at `destination`,
/// replacing any existing file. On failure nothing is left at `destination`
/// that was not there before.
pub fn export(rows: &[ExtractedRow], destination: &Path) -> Result<()> {
    let bytes = build_workbook(rows)?;
    write_atomically(destination, &bytes)?;

    info!(
        path = %destination.display(),
        rows = rows.len(),
        "saved workbook"
    );
    Ok(())
}

fn build_workbook(rows: &[ExtractedRow]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, name) in COLUMNS.iter().enumerate() {
        sheet.write_string_with_format(0, col as ColNum, *name, &header)?;
    }
    sheet.set_freeze_panes(1, 0)?;

    for (idx, row) in rows.iter().enumerate() {
        write_row(sheet, idx as RowNum + 1, row)?;
    }

    Ok(workbook.save_to_buffer()?)
}

fn write_row(sheet: &mut Worksheet, row_num: RowNum, row: &ExtractedRow) -> Result<()> {
    for (col, cell) in row.cells().into_iter().enumerate() {
        let col = col as ColNum;
        match cell {
            Cell::Text(text) => {
                sheet.write_string(row_num, col, text)?;
            }
            Cell::Number(value) => {
                sheet.write_number(row_num, col, value)?;
            }
            Cell::Bool(value) => {
                sheet.write_boolean(row_num, col, value)?;
            }
            Cell::Empty => {}
        }
    }
    Ok(())
}

/// Temp file in the target directory, then rename over the target.
fn write_atomically(path: &Path, bytes: &[u8]) -> Result<()> {
    let io_error = |source: std::io::Error| ScrapeError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(io_error)?;
    tmp.write_all(bytes).map_err(io_error)?;
    tmp.as_file().sync_all().map_err(io_error)?;
    tmp.persist(path).map_err(|e| io_error(e.error))?;
    Ok(())
}
