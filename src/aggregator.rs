use std::sync::Arc;

use booost_core::{schema::payment, CellValue, LocationSummary, Row, Sheet, SheetStore};
use rust_decimal::Decimal;
use time::OffsetDateTime;

use crate::{error::ServiceError, storage::{data_rows, sheet_values}};

/// Outcome of a read that may legitimately find nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum Snapshot<T> {
    Data(T),
    /// The sheet holds no data rows; the caller picks what to show instead.
    EmptyDefault,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaymentTotals {
    pub total: Decimal,
    pub pending: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub total_stylists: usize,
    pub total_braiding: usize,
    pub payments: PaymentTotals,
    pub locations: Snapshot<Vec<LocationSummary>>,
    pub last_updated: OffsetDateTime,
}

/// Sums payment amounts over the data rows of a Payments value grid.
/// The pending sum matches status case-insensitively.
pub fn payment_totals(values: &[Row]) -> Result<PaymentTotals, ServiceError> {
    let mut totals = PaymentTotals::default();
    for (index, row) in data_rows(values) {
        let amount = row.get(payment::AMOUNT).map(CellValue::as_decimal).unwrap_or(Decimal::ZERO);
        totals.total = totals.total.checked_add(amount)
            .ok_or(ServiceError::AmountOverflow(index))?;

        let is_pending = row.get(payment::STATUS)
            .map(|s| s.to_string().to_lowercase() == "pending")
            .unwrap_or(false);
        if is_pending {
            totals.pending = totals.pending.checked_add(amount)
                .ok_or(ServiceError::AmountOverflow(index))?;
        }
    }
    Ok(totals)
}

pub struct Aggregator {
    store: Arc<dyn SheetStore>,
}

impl Aggregator {
    pub fn new(store: Arc<dyn SheetStore>) -> Self {
        Self {
            store,
        }
    }

    pub fn get_dashboard_data(&self) -> Result<DashboardData, ServiceError> {
        let stylists = sheet_values(self.store.as_ref(), Sheet::Stylists)?;
        let sessions = sheet_values(self.store.as_ref(), Sheet::BraidingSessions)?;
        let payments = sheet_values(self.store.as_ref(), Sheet::Payments)?;

        let data = DashboardData {
            total_stylists: stylists.len().saturating_sub(1),
            total_braiding: sessions.len().saturating_sub(1),
            payments: payment_totals(&payments)?,
            locations: self.get_location_summary().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Locations unreadable, showing sample rows");
                Snapshot::EmptyDefault
            }),
            last_updated: OffsetDateTime::now_utc(),
        };

        tracing::debug!(
            stylists = data.total_stylists,
            sessions = data.total_braiding,
            total = %data.payments.total,
            pending = %data.payments.pending,
            "Dashboard aggregated"
        );
        Ok(data)
    }

    pub fn get_location_summary(&self) -> Result<Snapshot<Vec<LocationSummary>>, ServiceError> {
        let values = sheet_values(self.store.as_ref(), Sheet::Locations)?;
        if values.len() <= 1 {
            return Ok(Snapshot::EmptyDefault);
        }

        let locations = data_rows(&values)
            .map(|(_, row)| LocationSummary::from_row(row))
            .collect();
        Ok(Snapshot::Data(locations))
    }
}
