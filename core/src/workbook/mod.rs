//! Spreadsheet input and report output.
//!
//! Only the first worksheet is read. Positions are absolute zero-based sheet
//! rows so the report lines up 1:1 with the input.

mod reader;
mod writer;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

pub use reader::{load, load_records, SourceSheet};
pub use writer::{
    export_report, ERROR_MSG_HEADER, ERROR_MSG_WIDTH, MATCH_RESULT_HEADER, MATCH_RESULT_WIDTH,
};

/// `<dir>/<stem>_result_<YYYYmmddHHMMSS>.xlsx`, next to the input.
pub fn default_output_path(input: &Path, now: DateTime<Local>) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sites".to_string());
    let name = format!("{}_result_{}.xlsx", stem, now.format("%Y%m%d%H%M%S"));
    match input.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(name),
        _ => PathBuf::from(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_default_output_path() {
        let now = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(
            default_output_path(Path::new("data/sites.xlsx"), now),
            PathBuf::from("data/sites_result_20240309070501.xlsx")
        );
        assert_eq!(
            default_output_path(Path::new("网站列表.xlsx"), now),
            PathBuf::from("网站列表_result_20240309070501.xlsx")
        );
    }
}
