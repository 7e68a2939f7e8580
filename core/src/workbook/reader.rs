use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};

use crate::error::WorkbookError;
use crate::record::TaskRecord;

/// The input's first worksheet, kept so the report can copy it.
#[derive(Debug, Clone)]
pub struct SourceSheet {
    pub name: String,
    pub(super) cells: Range<Data>,
}

impl SourceSheet {
    /// Absolute zero-based index of the header row.
    pub fn header_row(&self) -> u32 {
        self.cells.start().map(|(row, _)| row).unwrap_or(0)
    }

    /// First column to the right of every used cell.
    pub fn first_free_column(&self) -> u32 {
        self.cells.end().map(|(_, col)| col + 1).unwrap_or(0)
    }

    pub fn cells(&self) -> &Range<Data> {
        &self.cells
    }
}

/// Read the first worksheet and build one record per non-blank URL cell.
pub fn load(
    path: &Path,
    url_column: &str,
) -> Result<(SourceSheet, Vec<TaskRecord>), WorkbookError> {
    tracing::info!(target: "sitescan.workbook", path = %path.display(), "reading workbook");

    let mut workbook = open_workbook_auto(path).map_err(|e| WorkbookError::Open {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| WorkbookError::NoWorksheet(path.to_path_buf()))?;
    tracing::info!(target: "sitescan.workbook", sheet = %name, "using first worksheet");

    let cells = workbook
        .worksheet_range(&name)
        .map_err(|e| WorkbookError::Sheet {
            sheet: name.clone(),
            message: e.to_string(),
        })?;
    if cells.is_empty() {
        return Err(WorkbookError::EmptyWorksheet(name));
    }

    let (start_row, _) = cells.start().unwrap_or((0, 0));
    let mut rows = cells.rows();
    let header = rows
        .next()
        .ok_or_else(|| WorkbookError::EmptyWorksheet(name.clone()))?;

    let wanted = url_column.trim().to_lowercase();
    let url_idx = header
        .iter()
        .position(|cell| cell_text(cell).trim().to_lowercase() == wanted)
        .ok_or_else(|| WorkbookError::MissingColumn {
            sheet: name.clone(),
            column: url_column.to_string(),
        })?;
    tracing::debug!(target: "sitescan.workbook", column = url_idx, "found url column");

    let records: Vec<TaskRecord> = rows
        .enumerate()
        .filter_map(|(offset, row)| {
            let url = row.get(url_idx).map(cell_text)?;
            let url = url.trim();
            if url.is_empty() {
                return None;
            }
            Some(TaskRecord::new(url, start_row + 1 + offset as u32))
        })
        .collect();

    tracing::info!(target: "sitescan.workbook", records = records.len(), "loaded urls");
    Ok((SourceSheet { name, cells }, records))
}

pub fn load_records(path: &Path, url_column: &str) -> Result<Vec<TaskRecord>, WorkbookError> {
    load(path, url_column).map(|(_, records)| records)
}

pub(super) fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}
