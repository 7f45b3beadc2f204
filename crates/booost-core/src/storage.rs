use crate::models::{CellValue, Row};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("sheet not found: {0}")]
    SheetNotFound(String),
    #[error("{0}")]
    Other(String),
}

/// A named-sheet tabular store. Every call works on whole sheets: there is no
/// partial read, no update in place and no delete.
pub trait SheetStore: Send + Sync {
    /// Creates the sheet when it does not exist yet.
    fn open_sheet(&self, sheet: &str) -> Result<(), StoreError>;
    fn list_sheets(&self) -> Result<Vec<String>, StoreError>;

    /// All rows of the sheet in insertion order, header included.
    fn read_rows(&self, sheet: &str) -> Result<Vec<Row>, StoreError>;
    fn append_row(&self, sheet: &str, row: &[CellValue]) -> Result<(), StoreError>;
}
