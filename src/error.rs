#![forbid(unsafe_code)]

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskmillError {
    #[error("failed to read workbook {path}: {source}")]
    WorkbookRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not a valid workbook: {source}")]
    WorkbookParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("workbook has no sheet named '{0}'")]
    SheetMissing(String),

    #[error("failed to save workbook {path}: {source}")]
    WorkbookWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
