use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkbookError {
    #[error("cannot open workbook {path}: {message}")]
    Open { path: PathBuf, message: String },

    #[error("workbook {0} has no worksheets")]
    NoWorksheet(PathBuf),

    #[error("worksheet '{0}' is empty")]
    EmptyWorksheet(String),

    #[error("column '{column}' not found in header row of worksheet '{sheet}'")]
    MissingColumn { sheet: String, column: String },

    #[error("cannot read worksheet '{sheet}': {message}")]
    Sheet { sheet: String, message: String },

    #[error("two records target row {0}")]
    DuplicatePosition(u32),

    #[error("cannot write workbook {path}: {message}")]
    Write { path: PathBuf, message: String },
}
