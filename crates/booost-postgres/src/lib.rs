use std::sync::{Mutex, MutexGuard};

use booost_core::{CellValue, Row, SheetStore, StoreError};
use postgres::{Client, NoTls};

/// Sheets persisted in PostgreSQL, laid out like the SQLite backend.
pub struct PostgresStore {
    client: Mutex<Client>,
}

impl PostgresStore {
    pub fn new(connection_string: &str) -> Result<Self, StoreError> {
        let client = Client::connect(connection_string, NoTls)
            .map_err(|e| StoreError::Other(format!("PostgreSQL connection failed: {}", e)))?;

        let store = Self {
            client: Mutex::new(client),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<(), StoreError> {
        let mut client = self.client()?;
        client
            .batch_execute(
                "
            CREATE TABLE IF NOT EXISTS sheets (
                name TEXT PRIMARY KEY
            );

            CREATE TABLE IF NOT EXISTS sheet_rows (
                id BIGSERIAL PRIMARY KEY,
                sheet TEXT NOT NULL REFERENCES sheets(name),
                cells TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_sheet_rows_sheet
                ON sheet_rows(sheet, id);
            ",
            )
            .map_err(|e| StoreError::Other(e.to_string()))?;
        Ok(())
    }

    fn client(&self) -> Result<MutexGuard<'_, Client>, StoreError> {
        self.client.lock()
            .map_err(|_| StoreError::Other("postgres client lock poisoned".to_string()))
    }

    fn sheet_exists(client: &mut Client, sheet: &str) -> Result<bool, StoreError> {
        let row = client
            .query_one("SELECT COUNT(*) > 0 FROM sheets WHERE name = $1", &[&sheet])
            .map_err(|e| StoreError::Other(e.to_string()))?;
        Ok(row.get(0))
    }
}

impl SheetStore for PostgresStore {
    fn open_sheet(&self, sheet: &str) -> Result<(), StoreError> {
        let mut client = self.client()?;
        let created = client
            .execute(
                "INSERT INTO sheets (name) VALUES ($1) ON CONFLICT (name) DO NOTHING",
                &[&sheet],
            )
            .map_err(|e| StoreError::Other(e.to_string()))?;
        if created > 0 {
            tracing::debug!(sheet, "PostgreSQL sheet created");
        }
        Ok(())
    }

    fn list_sheets(&self) -> Result<Vec<String>, StoreError> {
        let mut client = self.client()?;
        let rows = client
            .query("SELECT name FROM sheets ORDER BY name", &[])
            .map_err(|e| StoreError::Other(e.to_string()))?;
        Ok(rows.iter().map(|r| r.get::<_, String>(0)).collect())
    }

    fn read_rows(&self, sheet: &str) -> Result<Vec<Row>, StoreError> {
        let mut client = self.client()?;
        if !Self::sheet_exists(&mut client, sheet)? {
            return Err(StoreError::SheetNotFound(sheet.to_string()));
        }

        let encoded = client
            .query("SELECT cells FROM sheet_rows WHERE sheet = $1 ORDER BY id", &[&sheet])
            .map_err(|e| StoreError::Other(e.to_string()))?;

        let mut rows = Vec::with_capacity(encoded.len());
        for r in encoded {
            let cells: String = r.get(0);
            rows.push(serde_json::from_str::<Row>(&cells)?);
        }
        Ok(rows)
    }

    fn append_row(&self, sheet: &str, row: &[CellValue]) -> Result<(), StoreError> {
        let mut client = self.client()?;
        if !Self::sheet_exists(&mut client, sheet)? {
            return Err(StoreError::SheetNotFound(sheet.to_string()));
        }

        let cells = serde_json::to_string(row)?;
        client
            .execute(
                "INSERT INTO sheet_rows (sheet, cells) VALUES ($1, $2)",
                &[&sheet, &cells],
            )
            .map_err(|e| StoreError::Other(e.to_string()))?;
        tracing::debug!(sheet, "PostgreSQL row appended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    // Runs only against a disposable database named by BOOOST_TEST_POSTGRES_URL.
    fn connect() -> Option<PostgresStore> {
        let url = std::env::var("BOOOST_TEST_POSTGRES_URL").ok()?;
        let store = PostgresStore::new(&url).unwrap();
        store.client().unwrap()
            .batch_execute("TRUNCATE sheet_rows; DELETE FROM sheets;")
            .unwrap();
        Some(store)
    }

    #[test]
    fn test_postgres_basic_operations() {
        let Some(store) = connect() else { return };
        store.open_sheet("Payments").unwrap();
        store.open_sheet("Payments").unwrap();

        let row = vec![
            CellValue::from("STY-1"),
            CellValue::Number(dec!(1500)),
            CellValue::Empty,
        ];
        store.append_row("Payments", &row).unwrap();

        assert_eq!(store.read_rows("Payments").unwrap(), vec![row]);
        assert_eq!(store.list_sheets().unwrap(), vec!["Payments".to_string()]);
        assert!(matches!(
            store.read_rows("Stylists"),
            Err(StoreError::SheetNotFound(_))
        ));
    }
}
