use std::{collections::BTreeMap, sync::{Arc, RwLock}};

use booost_core::{CellValue, Row, SheetStore, StoreError};

pub struct InMemoryStore {
    sheets: RwLock<BTreeMap<Arc<str>, Vec<Row>>>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            sheets: RwLock::new(BTreeMap::new()),
        }
    }

    fn lock_err<T>(_: T) -> StoreError {
        StoreError::Other("in-memory store lock poisoned".to_string())
    }
}

impl SheetStore for InMemoryStore {
    fn open_sheet(&self, sheet: &str) -> Result<(), StoreError> {
        let mut sheets = self.sheets.write().map_err(Self::lock_err)?;
        if !sheets.contains_key(sheet) {
            sheets.insert(Arc::from(sheet), Vec::new());
            tracing::debug!(sheet, "Sheet created");
        }
        Ok(())
    }

    fn list_sheets(&self) -> Result<Vec<String>, StoreError> {
        let sheets = self.sheets.read().map_err(Self::lock_err)?;
        Ok(sheets.keys().map(|k| k.to_string()).collect())
    }

    fn read_rows(&self, sheet: &str) -> Result<Vec<Row>, StoreError> {
        let sheets = self.sheets.read().map_err(Self::lock_err)?;
        sheets.get(sheet)
            .cloned()
            .ok_or_else(|| StoreError::SheetNotFound(sheet.to_string()))
    }

    fn append_row(&self, sheet: &str, row: &[CellValue]) -> Result<(), StoreError> {
        let mut sheets = self.sheets.write().map_err(Self::lock_err)?;
        let rows = sheets.get_mut(sheet)
            .ok_or_else(|| StoreError::SheetNotFound(sheet.to_string()))?;
        rows.push(row.to_vec());
        tracing::debug!(sheet, row = rows.len(), "Row appended");
        Ok(())
    }
}
