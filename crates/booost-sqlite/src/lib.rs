use std::{
    fs,
    path::Path,
    sync::{Mutex, MutexGuard},
};

use booost_core::{CellValue, Row, SheetStore, StoreError};
use rusqlite::{params, Connection};

/// Sheets persisted in SQLite. Each row is stored as a JSON array of cells.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new(path: &str) -> Result<Self, StoreError> {
        let conn = if path == ":memory:" {
            Connection::open_in_memory()
        } else {
            if let Some(dir) = Path::new(path).parent().filter(|d| !d.as_os_str().is_empty()) {
                fs::create_dir_all(dir)?;
            }
            Connection::open(path)
        }
        .map_err(|e| StoreError::Other(e.to_string()))?;

        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")
            .map_err(|e| StoreError::Other(e.to_string()))?;

        let store = Self {
            conn: Mutex::new(conn),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<(), StoreError> {
        let conn = self.conn()?;
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS sheets (
                name TEXT PRIMARY KEY
            );

            CREATE TABLE IF NOT EXISTS sheet_rows (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                sheet TEXT NOT NULL,
                cells TEXT NOT NULL,
                FOREIGN KEY (sheet) REFERENCES sheets(name)
            );

            CREATE INDEX IF NOT EXISTS idx_sheet_rows_sheet
                ON sheet_rows(sheet, id);
            ",
        )
        .map_err(|e| StoreError::Other(e.to_string()))?;
        Ok(())
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock()
            .map_err(|_| StoreError::Other("sqlite connection lock poisoned".to_string()))
    }

    fn sheet_exists(conn: &Connection, sheet: &str) -> Result<bool, StoreError> {
        conn.query_row(
            "SELECT COUNT(*) > 0 FROM sheets WHERE name = ?1",
            params![sheet],
            |row| row.get(0),
        )
        .map_err(|e| StoreError::Other(e.to_string()))
    }
}

impl SheetStore for SqliteStore {
    fn open_sheet(&self, sheet: &str) -> Result<(), StoreError> {
        let conn = self.conn()?;
        let created = conn.execute(
            "INSERT OR IGNORE INTO sheets (name) VALUES (?1)",
            params![sheet],
        )
        .map_err(|e| StoreError::Other(e.to_string()))?;
        if created > 0 {
            tracing::debug!(sheet, "SQLite sheet created");
        }
        Ok(())
    }

    fn list_sheets(&self) -> Result<Vec<String>, StoreError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT name FROM sheets ORDER BY name")
            .map_err(|e| StoreError::Other(e.to_string()))?;
        let names = stmt.query_map([], |row| row.get::<_, String>(0))
            .map_err(|e| StoreError::Other(e.to_string()))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StoreError::Other(e.to_string()))?;
        Ok(names)
    }

    fn read_rows(&self, sheet: &str) -> Result<Vec<Row>, StoreError> {
        let conn = self.conn()?;
        if !Self::sheet_exists(&conn, sheet)? {
            return Err(StoreError::SheetNotFound(sheet.to_string()));
        }

        let mut stmt = conn.prepare("SELECT cells FROM sheet_rows WHERE sheet = ?1 ORDER BY id")
            .map_err(|e| StoreError::Other(e.to_string()))?;
        let encoded = stmt.query_map(params![sheet], |row| row.get::<_, String>(0))
            .map_err(|e| StoreError::Other(e.to_string()))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StoreError::Other(e.to_string()))?;

        let mut rows = Vec::with_capacity(encoded.len());
        for cells in encoded {
            rows.push(serde_json::from_str::<Row>(&cells)?);
        }
        Ok(rows)
    }

    fn append_row(&self, sheet: &str, row: &[CellValue]) -> Result<(), StoreError> {
        let conn = self.conn()?;
        if !Self::sheet_exists(&conn, sheet)? {
            return Err(StoreError::SheetNotFound(sheet.to_string()));
        }

        let cells = serde_json::to_string(row)?;
        conn.execute(
            "INSERT INTO sheet_rows (sheet, cells) VALUES (?1, ?2)",
            params![sheet, cells],
        )
        .map_err(|e| StoreError::Other(e.to_string()))?;
        tracing::debug!(sheet, row_id = conn.last_insert_rowid(), "SQLite row appended");
        Ok(())
    }
}
