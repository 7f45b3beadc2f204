use rust_decimal::Decimal;
use serde::Serialize;
use time::OffsetDateTime;

use super::{cell, CellValue, Row};
use crate::schema::{location, payment, session, stylist};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stylist {
    /// 1-based position among the data rows.
    pub id: usize,
    pub stylist_id: String,
    #[serde(with = "time::serde::rfc3339::option")]
    pub registration_date: Option<OffsetDateTime>,
    pub name: String,
    pub phone: String,
    pub location: String,
    pub experience: String,
    pub specialization: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub rating: Decimal,
    pub status: String,
}

impl Stylist {
    pub fn from_row(id: usize, row: &[CellValue]) -> Self {
        Self {
            id,
            stylist_id: cell(row, stylist::STYLIST_ID).to_string(),
            registration_date: cell(row, stylist::REGISTRATION_DATE).as_timestamp(),
            name: cell(row, stylist::NAME).to_string(),
            phone: cell(row, stylist::PHONE).to_string(),
            location: cell(row, stylist::LOCATION).to_string(),
            experience: cell(row, stylist::EXPERIENCE).to_string(),
            specialization: cell(row, stylist::SPECIALIZATION).to_string(),
            rating: cell(row, stylist::RATING).as_decimal(),
            status: cell(row, stylist::STATUS).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BraidingSession {
    pub id: usize,
    pub session_id: String,
    #[serde(with = "time::serde::rfc3339::option")]
    pub session_date: Option<OffsetDateTime>,
    pub stylist_id: String,
    pub stylist_name: String,
    pub client_name: String,
    pub service_type: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub duration: String,
    pub location: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub rating: Decimal,
    pub status: String,
}

impl BraidingSession {
    pub fn from_row(id: usize, row: &[CellValue]) -> Self {
        Self {
            id,
            session_id: cell(row, session::SESSION_ID).to_string(),
            session_date: cell(row, session::SESSION_DATE).as_timestamp(),
            stylist_id: cell(row, session::STYLIST_ID).to_string(),
            stylist_name: cell(row, session::STYLIST_NAME).to_string(),
            client_name: cell(row, session::CLIENT_NAME).to_string(),
            service_type: cell(row, session::SERVICE_TYPE).to_string(),
            amount: cell(row, session::AMOUNT).as_decimal(),
            duration: cell(row, session::DURATION).to_string(),
            location: cell(row, session::LOCATION).to_string(),
            rating: cell(row, session::RATING).as_decimal(),
            status: cell(row, session::STATUS).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: usize,
    #[serde(with = "time::serde::rfc3339::option")]
    pub payment_date: Option<OffsetDateTime>,
    pub stylist_id: String,
    pub client_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub status: String,
    pub method: String,
    pub location: String,
    pub session_id: String,
}

impl Payment {
    pub fn from_row(id: usize, row: &[CellValue]) -> Self {
        Self {
            id,
            payment_date: cell(row, payment::PAYMENT_DATE).as_timestamp(),
            stylist_id: cell(row, payment::STYLIST_ID).to_string(),
            client_name: cell(row, payment::CLIENT_NAME).to_string(),
            amount: cell(row, payment::AMOUNT).as_decimal(),
            status: cell(row, payment::STATUS).to_string(),
            method: cell(row, payment::METHOD).to_string(),
            location: cell(row, payment::LOCATION).to_string(),
            session_id: cell(row, payment::SESSION_ID).to_string(),
        }
    }
}

/// Curated per-location rollup. Not recomputed from payments or sessions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationSummary {
    pub name: String,
    pub stylists: i64,
    pub braiding: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub rating: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub received: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub pending: Decimal,
}

impl LocationSummary {
    pub fn from_row(row: &[CellValue]) -> Self {
        Self {
            name: cell(row, location::NAME).to_string(),
            stylists: cell(row, location::STYLISTS).as_count(),
            braiding: cell(row, location::BRAIDING).as_count(),
            rating: cell(row, location::RATING).as_decimal(),
            total: cell(row, location::TOTAL).as_decimal(),
            received: cell(row, location::RECEIVED).as_decimal(),
            pending: cell(row, location::PENDING).as_decimal(),
        }
    }

    pub fn to_row(&self) -> Row {
        vec![
            CellValue::from(self.name.as_str()),
            CellValue::from(self.stylists),
            CellValue::from(self.braiding),
            CellValue::from(self.rating),
            CellValue::from(self.total),
            CellValue::from(self.received),
            CellValue::from(self.pending),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use time::macros::datetime;

    #[test]
    fn test_stylist_from_short_row() {
        let row = vec![
            CellValue::Timestamp(datetime!(2024-05-02 09:00:00 UTC)),
            CellValue::from("Adaeze"),
            CellValue::from("0803"),
        ];
        let stylist = Stylist::from_row(3, &row);
        assert_eq!(stylist.id, 3);
        assert_eq!(stylist.name, "Adaeze");
        assert_eq!(stylist.registration_date, Some(datetime!(2024-05-02 09:00:00 UTC)));
        assert_eq!(stylist.status, "");
        assert_eq!(stylist.stylist_id, "");
        assert_eq!(stylist.rating, Decimal::ZERO);
    }

    #[test]
    fn test_payment_reads_text_amount() {
        let row = vec![
            CellValue::from("2024-05-02"),
            CellValue::from("STY-1"),
            CellValue::from("Bisi"),
            CellValue::from("2500"),
            CellValue::from("Pending"),
            CellValue::from("Cash"),
            CellValue::from("Ondo Market"),
        ];
        let p = Payment::from_row(1, &row);
        assert_eq!(p.amount, dec!(2500));
        assert_eq!(p.payment_date, Some(datetime!(2024-05-02 00:00:00 UTC)));
        assert_eq!(p.session_id, "");
    }

    #[test]
    fn test_location_row_round_trip() {
        let loc = LocationSummary {
            name: "Ondo Market".to_string(),
            stylists: 38,
            braiding: 3400,
            rating: dec!(4.3),
            total: dec!(17000000),
            received: dec!(16250000),
            pending: dec!(750000),
        };
        assert_eq!(LocationSummary::from_row(&loc.to_row()), loc);
    }

    #[test]
    fn test_serializes_camel_case_numbers() {
        let row = vec![
            CellValue::Timestamp(datetime!(2024-05-02 09:00:00 UTC)),
            CellValue::from("Adaeze"),
            CellValue::Empty,
            CellValue::Empty,
            CellValue::Empty,
            CellValue::Empty,
            CellValue::Number(dec!(4.5)),
            CellValue::from("Active"),
        ];
        let json = serde_json::to_value(Stylist::from_row(1, &row)).unwrap();
        assert_eq!(json["registrationDate"], "2024-05-02T09:00:00Z");
        assert_eq!(json["rating"], 4.5);
        assert_eq!(json["status"], "Active");
    }
}
