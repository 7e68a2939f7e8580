use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Range, Reader};
use rust_xlsxwriter::Workbook;
use sitescan_core::config::ScanConfig;

/// Write a single-sheet workbook. Empty strings leave the cell blank.
pub fn write_sheet(path: &Path, rows: &[Vec<String>]) {
    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    ws.set_name("网站列表").unwrap();
    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            if !value.is_empty() {
                ws.write_string(r as u32, c as u16, value).unwrap();
            }
        }
    }
    wb.save(path).unwrap();
}

pub fn read_first_sheet(path: &Path) -> Range<Data> {
    let mut wb = open_workbook_auto(path).unwrap();
    let name = wb.sheet_names().first().cloned().unwrap();
    wb.worksheet_range(&name).unwrap()
}

pub fn cell(range: &Range<Data>, row: u32, col: u32) -> String {
    match range.get_value((row, col)) {
        Some(Data::String(s)) => s.clone(),
        Some(Data::Float(f)) => format!("{}", f),
        Some(Data::Empty) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

pub fn scan_config(input: PathBuf, output: Option<PathBuf>) -> ScanConfig {
    ScanConfig {
        input: Some(input),
        output,
        keywords: vec!["keyword1".to_string(), "关键词2".to_string()],
        concurrency: 5,
        task_delay_ms: 0,
        timeout_secs: 5,
        progress: false,
        ..ScanConfig::default()
    }
}

/// A localhost port with nothing listening on it.
pub fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

pub fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}
