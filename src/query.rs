use std::sync::Arc;

use booost_core::{parse_timestamp, Payment, Sheet, SheetStore, Stylist};
use serde::Deserialize;
use time::OffsetDateTime;

use crate::{error::ServiceError, storage::{data_rows, sheet_values}};

/// Optional payment filters; all present filters must hold.
/// Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentFilter {
    pub location: Option<String>,
    pub status: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn parse_bound(value: &Option<String>) -> Result<Option<OffsetDateTime>, ServiceError> {
    match present(value) {
        Some(s) => parse_timestamp(s)
            .map(Some)
            .ok_or_else(|| ServiceError::InvalidFilterDate(s.to_string())),
        None => Ok(None),
    }
}

struct PaymentPredicate<'a> {
    location: Option<&'a str>,
    status: Option<&'a str>,
    from: Option<OffsetDateTime>,
    to: Option<OffsetDateTime>,
}

impl<'a> PaymentPredicate<'a> {
    fn new(filter: &'a PaymentFilter) -> Result<Self, ServiceError> {
        Ok(Self {
            location: present(&filter.location),
            status: present(&filter.status),
            from: parse_bound(&filter.from_date)?,
            to: parse_bound(&filter.to_date)?,
        })
    }

    // Status equality is exact; the dashboard's pending sum is not.
    // A payment without a readable date is never excluded by the date bounds.
    fn matches(&self, payment: &Payment) -> bool {
        if self.location.is_some_and(|l| payment.location != l) {
            return false;
        }
        if self.status.is_some_and(|s| payment.status != s) {
            return false;
        }
        if let Some(date) = payment.payment_date {
            if self.from.is_some_and(|from| date < from) {
                return false;
            }
            if self.to.is_some_and(|to| date > to) {
                return false;
            }
        }
        true
    }
}

pub struct RecordQuery {
    store: Arc<dyn SheetStore>,
}

impl RecordQuery {
    pub fn new(store: Arc<dyn SheetStore>) -> Self {
        Self {
            store,
        }
    }

    pub fn get_all_stylists(&self) -> Result<Vec<Stylist>, ServiceError> {
        let values = sheet_values(self.store.as_ref(), Sheet::Stylists)?;
        Ok(data_rows(&values)
            .map(|(id, row)| Stylist::from_row(id, row))
            .collect())
    }

    pub fn get_payment_records(&self, filter: &PaymentFilter) -> Result<Vec<Payment>, ServiceError> {
        let predicate = PaymentPredicate::new(filter)?;
        let values = sheet_values(self.store.as_ref(), Sheet::Payments)?;

        let payments: Vec<Payment> = data_rows(&values)
            .map(|(id, row)| Payment::from_row(id, row))
            .filter(|p| predicate.matches(p))
            .collect();
        tracing::debug!(scanned = values.len().saturating_sub(1), matched = payments.len(), "Payments filtered");
        Ok(payments)
    }
}
