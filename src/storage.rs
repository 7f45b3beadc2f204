use std::sync::Arc;

use booost_core::{Row, Sheet, SheetStore, StoreError};
use booost_memory::InMemoryStore;
use booost_postgres::PostgresStore;
use booost_sqlite::SqliteStore;

use crate::config::{StorageBackendKind, StorageConfig};

/// Opens the configured backend.
pub fn open_store(config: &StorageConfig) -> Result<Arc<dyn SheetStore>, StoreError> {
    let store: Arc<dyn SheetStore> = match config.backend {
        StorageBackendKind::Memory => Arc::new(InMemoryStore::new()),
        StorageBackendKind::Sqlite => Arc::new(SqliteStore::new(&config.path)?),
        StorageBackendKind::Postgres => {
            let url = config.url.as_deref()
                .ok_or_else(|| StoreError::Other("storage.url is required for the postgres backend".to_string()))?;
            Arc::new(PostgresStore::new(url)?)
        }
    };
    tracing::info!(backend = ?config.backend, "Storage opened");
    Ok(store)
}

/// Whole value grid of a sheet, creating the sheet first when it is missing.
pub fn sheet_values(store: &dyn SheetStore, sheet: Sheet) -> Result<Vec<Row>, StoreError> {
    store.open_sheet(sheet.name())?;
    store.read_rows(sheet.name())
}

/// Data rows of a value grid, numbered from 1.
pub fn data_rows(values: &[Row]) -> impl Iterator<Item = (usize, &Row)> {
    values.iter().enumerate().skip(1)
}
