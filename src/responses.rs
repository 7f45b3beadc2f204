//! Success-flagged response envelopes and the display policy applied to them.
//!
//! Operations report failure in-band: every envelope carries `success`, and a
//! failed call still returns a normally shaped object with an `error` message.

use booost_core::{LocationSummary, Payment, Sheet, Stylist};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;

use crate::{
    aggregator::{DashboardData, Snapshot},
    config::DashboardConfig,
    currency::format_currency,
    error::ServiceError,
    sample,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationSource {
    /// Rows read from the Locations sheet.
    Live,
    /// Seeded sample rows shown in place of an empty or unreadable sheet.
    Sample,
    None,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub total_stylists: usize,
    pub total_braiding: usize,
    pub total_payment: String,
    pub pending_payment: String,
    pub locations: Vec<LocationSummary>,
    pub location_source: LocationSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationsResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub locations: Vec<LocationSummary>,
    pub location_source: LocationSource,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterStylistResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stylist_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSessionResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StylistsResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub stylists: Vec<Stylist>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentsResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub payments: Vec<Payment>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seeded: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn resolve_locations(snapshot: Snapshot<Vec<LocationSummary>>) -> (Vec<LocationSummary>, LocationSource) {
    match snapshot {
        Snapshot::Data(locations) => (locations, LocationSource::Live),
        Snapshot::EmptyDefault => (sample::sample_locations(), LocationSource::Sample),
    }
}

pub fn dashboard_response(result: Result<DashboardData, ServiceError>, config: &DashboardConfig) -> DashboardResponse {
    let symbol = config.currency_symbol.as_str();
    match result {
        Ok(data) => {
            let (locations, location_source) = resolve_locations(data.locations);
            DashboardResponse {
                success: true,
                error: None,
                total_stylists: data.total_stylists,
                total_braiding: data.total_braiding,
                total_payment: format_currency(data.payments.total, symbol),
                pending_payment: format_currency(data.payments.pending, symbol),
                locations,
                location_source,
                last_updated: data.last_updated.format(&Rfc3339).ok(),
            }
        }
        Err(e) if config.sample_fallback => DashboardResponse {
            success: false,
            error: Some(e.to_string()),
            total_stylists: sample::FALLBACK_TOTAL_STYLISTS,
            total_braiding: sample::FALLBACK_TOTAL_BRAIDING,
            total_payment: format_currency(sample::fallback_total_payment(), symbol),
            pending_payment: format_currency(sample::fallback_pending_payment(), symbol),
            locations: sample::sample_locations(),
            location_source: LocationSource::Sample,
            last_updated: None,
        },
        Err(e) => DashboardResponse {
            success: false,
            error: Some(e.to_string()),
            total_stylists: 0,
            total_braiding: 0,
            total_payment: format_currency(rust_decimal::Decimal::ZERO, symbol),
            pending_payment: format_currency(rust_decimal::Decimal::ZERO, symbol),
            locations: Vec::new(),
            location_source: LocationSource::None,
            last_updated: None,
        },
    }
}

/// Sample rows stand in for both an empty and an unreadable Locations sheet.
pub fn locations_response(result: Result<Snapshot<Vec<LocationSummary>>, ServiceError>) -> LocationsResponse {
    match result {
        Ok(snapshot) => {
            let (locations, location_source) = resolve_locations(snapshot);
            LocationsResponse {
                success: true,
                error: None,
                locations,
                location_source,
            }
        }
        Err(e) => LocationsResponse {
            success: false,
            error: Some(e.to_string()),
            locations: sample::sample_locations(),
            location_source: LocationSource::Sample,
        },
    }
}

pub fn register_stylist_response(result: Result<String, ServiceError>) -> RegisterStylistResponse {
    match result {
        Ok(stylist_id) => RegisterStylistResponse {
            success: true,
            message: Some("Stylist registered successfully".to_string()),
            stylist_id: Some(stylist_id),
            error: None,
        },
        Err(e) => RegisterStylistResponse {
            success: false,
            message: None,
            stylist_id: None,
            error: Some(e.to_string()),
        },
    }
}

pub fn save_session_response(result: Result<String, ServiceError>) -> SaveSessionResponse {
    match result {
        Ok(session_id) => SaveSessionResponse {
            success: true,
            message: Some("Braiding session recorded successfully".to_string()),
            session_id: Some(session_id),
            error: None,
        },
        Err(e) => SaveSessionResponse {
            success: false,
            message: None,
            session_id: None,
            error: Some(e.to_string()),
        },
    }
}

pub fn stylists_response(result: Result<Vec<Stylist>, ServiceError>) -> StylistsResponse {
    match result {
        Ok(stylists) => StylistsResponse { success: true, error: None, stylists },
        Err(e) => StylistsResponse { success: false, error: Some(e.to_string()), stylists: Vec::new() },
    }
}

pub fn payments_response(result: Result<Vec<Payment>, ServiceError>) -> PaymentsResponse {
    match result {
        Ok(payments) => PaymentsResponse { success: true, error: None, payments },
        Err(e) => PaymentsResponse { success: false, error: Some(e.to_string()), payments: Vec::new() },
    }
}

pub fn initialize_response(result: Result<Vec<Sheet>, ServiceError>) -> InitializeResponse {
    match result {
        Ok(seeded) => InitializeResponse {
            success: true,
            message: Some("Sheets initialized successfully".to_string()),
            seeded: Some(seeded.iter().map(|s| s.name().to_string()).collect()),
            error: None,
        },
        Err(e) => InitializeResponse {
            success: false,
            message: None,
            seeded: None,
            error: Some(e.to_string()),
        },
    }
}
