use booost_core::StoreError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
    #[error("invalid filter date: {0}")]
    InvalidFilterDate(String),
    #[error("payment total overflows at data row {0}")]
    AmountOverflow(usize),
    #[error("operation aborted: {0}")]
    Aborted(String),
}
