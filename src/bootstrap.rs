use std::sync::Arc;

use booost_core::{CellValue, Row, Sheet, SheetStore};

use crate::{error::ServiceError, sample::sample_locations};

fn header_row(sheet: Sheet) -> Row {
    sheet.headers().iter().map(|h| CellValue::from(*h)).collect()
}

/// Seeds empty sheets with their header row, and the Locations sheet with
/// sample rollups. Sheets that already hold rows are left alone.
pub struct Bootstrap {
    store: Arc<dyn SheetStore>,
}

impl Bootstrap {
    pub fn new(store: Arc<dyn SheetStore>) -> Self {
        Self {
            store,
        }
    }

    /// Returns the sheets that were seeded by this call.
    pub fn initialize_sheets(&self) -> Result<Vec<Sheet>, ServiceError> {
        let mut seeded = Vec::new();
        for sheet in Sheet::ALL {
            self.store.open_sheet(sheet.name())?;
            if !self.store.read_rows(sheet.name())?.is_empty() {
                continue;
            }

            self.store.append_row(sheet.name(), &header_row(sheet))?;
            if sheet == Sheet::Locations {
                for location in sample_locations() {
                    self.store.append_row(sheet.name(), &location.to_row())?;
                }
            }
            tracing::info!(%sheet, "Sheet initialized");
            seeded.push(sheet);
        }
        Ok(seeded)
    }
}
