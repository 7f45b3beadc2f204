use std::sync::Arc;

use booost_core::{CellValue, PaymentData, SessionData, Sheet, SheetStore, StoreError, StylistData};
use rust_decimal::Decimal;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::error::ServiceError;

pub const STYLIST_STATUS_ACTIVE: &str = "Active";
pub const SESSION_STATUS_COMPLETED: &str = "Completed";
pub const DEFAULT_PAYMENT_STATUS: &str = "Pending";
pub const DEFAULT_PAYMENT_METHOD: &str = "Cash";

pub fn generate_stylist_id() -> String {
    format!("STY-{}", Uuid::new_v4().simple())
}

pub fn generate_session_id() -> String {
    format!("SES-{}", Uuid::new_v4().simple())
}

fn text(value: &Option<String>) -> CellValue {
    CellValue::from(value.as_deref().unwrap_or(""))
}

fn text_or(value: &Option<String>, default: &str) -> CellValue {
    match value.as_deref() {
        Some(s) if !s.is_empty() => CellValue::from(s),
        _ => CellValue::from(default),
    }
}

fn number(value: Option<Decimal>) -> CellValue {
    CellValue::Number(value.unwrap_or(Decimal::ZERO))
}

/// Appends stylist, session and payment rows. Rows are never updated in place.
pub struct RecordWriter {
    store: Arc<dyn SheetStore>,
}

impl RecordWriter {
    pub fn new(store: Arc<dyn SheetStore>) -> Self {
        Self {
            store,
        }
    }

    fn append(&self, sheet: Sheet, row: &[CellValue]) -> Result<(), StoreError> {
        self.store.open_sheet(sheet.name())?;
        self.store.append_row(sheet.name(), row)
    }

    /// Returns the stylist id written to the new row.
    pub fn register_stylist(&self, data: &StylistData) -> Result<String, ServiceError> {
        let stylist_id = generate_stylist_id();
        let row = vec![
            CellValue::Timestamp(OffsetDateTime::now_utc()),
            text(&data.name),
            text(&data.phone),
            text(&data.location),
            text(&data.experience),
            text(&data.specialization),
            number(data.rating),
            CellValue::from(STYLIST_STATUS_ACTIVE),
            CellValue::from(stylist_id.as_str()),
        ];
        self.append(Sheet::Stylists, &row)?;

        tracing::info!(%stylist_id, "Stylist registered");
        Ok(stylist_id)
    }

    /// Records the session, then its payment under the same session id.
    /// A failed payment write is logged and does not fail the session.
    pub fn save_braiding_session(&self, data: &SessionData) -> Result<String, ServiceError> {
        let session_id = generate_session_id();
        let row = vec![
            CellValue::Timestamp(OffsetDateTime::now_utc()),
            text(&data.stylist_id),
            text(&data.stylist_name),
            text(&data.client_name),
            text(&data.service_type),
            number(data.amount),
            text(&data.duration),
            text(&data.location),
            number(data.rating),
            CellValue::from(SESSION_STATUS_COMPLETED),
            CellValue::from(session_id.as_str()),
        ];
        self.append(Sheet::BraidingSessions, &row)?;
        tracing::info!(%session_id, "Braiding session recorded");

        if let Err(e) = self.update_payment_record(&data.payment(Some(session_id.as_str()))) {
            tracing::warn!(%session_id, error = %e, "Payment record for session not written");
        }

        Ok(session_id)
    }

    pub fn update_payment_record(&self, data: &PaymentData) -> Result<(), ServiceError> {
        let row = vec![
            CellValue::Timestamp(OffsetDateTime::now_utc()),
            text(&data.stylist_id),
            text(&data.client_name),
            number(data.amount),
            text_or(&data.payment_status, DEFAULT_PAYMENT_STATUS),
            text_or(&data.payment_method, DEFAULT_PAYMENT_METHOD),
            text(&data.location),
            text(&data.session_id),
        ];
        self.append(Sheet::Payments, &row)?;
        tracing::debug!(session_id = data.session_id.as_deref().unwrap_or(""), "Payment recorded");
        Ok(())
    }
}
