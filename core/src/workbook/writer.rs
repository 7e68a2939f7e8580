use std::collections::HashSet;
use std::path::Path;

use calamine::Data;
use rust_xlsxwriter::{ColNum, Format, Workbook, Worksheet, XlsxError};

use crate::error::WorkbookError;
use crate::record::TaskRecord;

use super::reader::SourceSheet;

pub const MATCH_RESULT_HEADER: &str = "match_result";
pub const ERROR_MSG_HEADER: &str = "error_msg";
pub const MATCH_RESULT_WIDTH: f64 = 15.0;
pub const ERROR_MSG_WIDTH: f64 = 30.0;

/// Write a copy of `sheet` plus `match_result` / `error_msg` columns to
/// `output`. Nothing is written to disk unless every step succeeds.
pub fn export_report(
    sheet: &SourceSheet,
    records: &[TaskRecord],
    output: &Path,
) -> Result<(), WorkbookError> {
    let write_err = |e: XlsxError| WorkbookError::Write {
        path: output.to_path_buf(),
        message: e.to_string(),
    };

    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.position()) {
            return Err(WorkbookError::DuplicatePosition(record.position()));
        }
    }

    let match_col = to_col(sheet.first_free_column(), output)?;
    let error_col = to_col(sheet.first_free_column() + 1, output)?;
    let header_row = sheet.header_row();

    let mut workbook = Workbook::new();
    let ws = workbook.add_worksheet();
    ws.set_name(&sheet.name).map_err(write_err)?;

    copy_cells(ws, sheet, output)?;

    ws.write_string(header_row, match_col, MATCH_RESULT_HEADER)
        .map_err(write_err)?;
    ws.write_string(header_row, error_col, ERROR_MSG_HEADER)
        .map_err(write_err)?;
    ws.set_column_width(match_col, MATCH_RESULT_WIDTH)
        .map_err(write_err)?;
    ws.set_column_width(error_col, ERROR_MSG_WIDTH)
        .map_err(write_err)?;

    for record in records {
        let row = record.position();
        ws.write_number(row, match_col, f64::from(record.match_result().as_u8()))
            .map_err(write_err)?;
        if let Some(msg) = record.error() {
            ws.write_string(row, error_col, msg).map_err(write_err)?;
        }
    }

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| WorkbookError::Write {
                path: output.to_path_buf(),
                message: e.to_string(),
            })?;
        }
    }
    workbook.save(output).map_err(write_err)?;

    tracing::info!(
        target: "sitescan.workbook",
        path = %output.display(),
        rows = records.len(),
        "report written"
    );
    Ok(())
}

fn copy_cells(ws: &mut Worksheet, sheet: &SourceSheet, output: &Path) -> Result<(), WorkbookError> {
    let write_err = |e: XlsxError| WorkbookError::Write {
        path: output.to_path_buf(),
        message: e.to_string(),
    };
    let date_format = Format::new().set_num_format("yyyy-mm-dd hh:mm:ss");
    let (start_row, start_col) = sheet.cells().start().unwrap_or((0, 0));

    for (r, c, cell) in sheet.cells().used_cells() {
        let row = start_row + r as u32;
        let col = to_col(start_col + c as u32, output)?;
        match cell {
            Data::Empty => continue,
            Data::String(s) => ws.write_string(row, col, s),
            Data::Float(f) => ws.write_number(row, col, *f),
            Data::Int(i) => ws.write_number(row, col, *i as f64),
            Data::Bool(b) => ws.write_boolean(row, col, *b),
            Data::DateTime(dt) => ws.write_number_with_format(row, col, dt.as_f64(), &date_format),
            other => ws.write_string(row, col, other.to_string()),
        }
        .map_err(write_err)?;
    }
    Ok(())
}

fn to_col(col: u32, output: &Path) -> Result<ColNum, WorkbookError> {
    ColNum::try_from(col).map_err(|_| WorkbookError::Write {
        path: output.to_path_buf(),
        message: format!("column {} is beyond the sheet limit", col + 1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workbook::load;
    use calamine::{open_workbook_auto, Reader};
    use pretty_assertions::assert_eq;

    fn write_input(path: &Path) {
        let mut wb = Workbook::new();
        let ws = wb.add_worksheet();
        ws.set_name("Sites").unwrap();
        ws.write_string(0, 0, "id").unwrap();
        ws.write_string(0, 1, "media_url").unwrap();
        ws.write_number(1, 0, 1.0).unwrap();
        ws.write_string(1, 1, "a.example").unwrap();
        ws.write_number(2, 0, 2.0).unwrap();
        ws.write_string(2, 1, "b.example").unwrap();
        ws.write_boolean(3, 0, true).unwrap();
        wb.save(path).unwrap();
    }

    fn text(range: &calamine::Range<Data>, row: u32, col: u32) -> String {
        match range.get_value((row, col)) {
            Some(Data::String(s)) => s.clone(),
            Some(Data::Empty) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }

    #[test]
    fn test_report_copies_sheet_and_appends_columns() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.xlsx");
        let output = dir.path().join("out/report.xlsx");
        write_input(&input);

        let (sheet, mut records) = load(&input, "media_url").unwrap();
        records[0].record_match(crate::record::MatchResult::Match);
        records[1].record_error("request to http://b.example timed out");
        export_report(&sheet, &records, &output).unwrap();

        let mut wb = open_workbook_auto(&output).unwrap();
        assert_eq!(wb.sheet_names(), vec!["Sites".to_string()]);
        let range = wb.worksheet_range("Sites").unwrap();

        assert_eq!(text(&range, 0, 0), "id");
        assert_eq!(text(&range, 0, 1), "media_url");
        assert_eq!(text(&range, 0, 2), MATCH_RESULT_HEADER);
        assert_eq!(text(&range, 0, 3), ERROR_MSG_HEADER);
        assert_eq!(range.get_value((1, 0)), Some(&Data::Float(1.0)));
        assert_eq!(range.get_value((3, 0)), Some(&Data::Bool(true)));

        assert_eq!(range.get_value((1, 2)), Some(&Data::Float(1.0)));
        assert_eq!(text(&range, 1, 3), "");
        assert_eq!(range.get_value((2, 2)), Some(&Data::Float(0.0)));
        assert_eq!(text(&range, 2, 3), "request to http://b.example timed out");
        // Row 3 had no url: no result written.
        assert_eq!(text(&range, 3, 2), "");
    }

    #[test]
    fn test_duplicate_positions_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.xlsx");
        let output = dir.path().join("report.xlsx");
        write_input(&input);

        let (sheet, _) = load(&input, "media_url").unwrap();
        let records = vec![TaskRecord::new("a", 1), TaskRecord::new("b", 1)];

        let err = export_report(&sheet, &records, &output).unwrap_err();
        assert!(matches!(err, WorkbookError::DuplicatePosition(1)));
        assert!(!output.exists());
    }
}
