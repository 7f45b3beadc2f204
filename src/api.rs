use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use booost_core::{SessionData, StylistData};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{config::DashboardConfig, error::ServiceError, query::PaymentFilter, responses, Backend};

const DASHBOARD_VIEW: &str = include_str!("../assets/index.html");
const SECONDARY_VIEW: &str = include_str!("../assets/index1.html");

pub struct AppState {
    pub backend: Backend,
    pub dashboard: DashboardConfig,
    pub metrics: Option<PrometheusHandle>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/metrics", get(metrics_export))
        .route("/api/dashboard", get(dashboard))
        .route("/api/locations", get(locations))
        .route("/api/stylists", get(list_stylists).post(register_stylist))
        .route("/api/sessions", post(save_session))
        .route("/api/payments", get(payment_records))
        .route("/api/initialize", post(initialize))
        .with_state(state)
}

/// Runs a store-bound operation off the async workers and counts it.
async fn run<T, F>(state: &Arc<AppState>, operation: &'static str, f: F) -> Result<T, ServiceError>
where
    T: Send + 'static,
    F: FnOnce(&Backend) -> Result<T, ServiceError> + Send + 'static,
{
    metrics::increment_counter!("booost_operations_total", "operation" => operation);
    let state = state.clone();
    let result = match tokio::task::spawn_blocking(move || f(&state.backend)).await {
        Ok(result) => result,
        Err(e) => Err(ServiceError::Aborted(e.to_string())),
    };
    if let Err(e) = &result {
        metrics::increment_counter!("booost_operation_failures_total", "operation" => operation);
        tracing::error!(operation, error = %e, "Operation failed");
    }
    result
}

fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, String> {
    serde_json::from_slice(body).map_err(|e| format!("invalid request body: {}", e))
}

#[derive(Default, Deserialize)]
struct PageParams {
    page: Option<String>,
}

// An unreadable query string selects the default page.
async fn index(params: Result<Query<PageParams>, QueryRejection>) -> Html<&'static str> {
    let params = params.map(|Query(p)| p).unwrap_or_default();
    match params.page.as_deref().filter(|p| !p.is_empty()).unwrap_or("dashboard") {
        "dashboard" => Html(DASHBOARD_VIEW),
        _ => Html(SECONDARY_VIEW),
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn metrics_export(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match &state.metrics {
        Some(handle) => handle.render(),
        None => String::new(),
    }
}

async fn dashboard(State(state): State<Arc<AppState>>) -> Json<responses::DashboardResponse> {
    let result = run(&state, "getDashboardData", |b| b.aggregator.get_dashboard_data()).await;
    Json(responses::dashboard_response(result, &state.dashboard))
}

async fn locations(State(state): State<Arc<AppState>>) -> Json<responses::LocationsResponse> {
    let result = run(&state, "getLocationSummary", |b| b.aggregator.get_location_summary()).await;
    Json(responses::locations_response(result))
}

async fn register_stylist(State(state): State<Arc<AppState>>, body: Bytes) -> Json<responses::RegisterStylistResponse> {
    let data: StylistData = match parse_body(&body) {
        Ok(data) => data,
        Err(e) => {
            return Json(responses::RegisterStylistResponse {
                success: false,
                message: None,
                stylist_id: None,
                error: Some(e),
            })
        }
    };
    let result = run(&state, "registerStylist", move |b| b.writer.register_stylist(&data)).await;
    Json(responses::register_stylist_response(result))
}

async fn list_stylists(State(state): State<Arc<AppState>>) -> Json<responses::StylistsResponse> {
    let result = run(&state, "getAllStylists", |b| b.query.get_all_stylists()).await;
    Json(responses::stylists_response(result))
}

async fn save_session(State(state): State<Arc<AppState>>, body: Bytes) -> Json<responses::SaveSessionResponse> {
    let data: SessionData = match parse_body(&body) {
        Ok(data) => data,
        Err(e) => {
            return Json(responses::SaveSessionResponse {
                success: false,
                message: None,
                session_id: None,
                error: Some(e),
            })
        }
    };
    let result = run(&state, "saveBraidingSession", move |b| b.writer.save_braiding_session(&data)).await;
    Json(responses::save_session_response(result))
}

async fn payment_records(
    State(state): State<Arc<AppState>>,
    filter: Result<Query<PaymentFilter>, QueryRejection>,
) -> Json<responses::PaymentsResponse> {
    let filter = match filter {
        Ok(Query(filter)) => filter,
        Err(e) => {
            return Json(responses::PaymentsResponse {
                success: false,
                error: Some(format!("invalid payment filter: {}", e.body_text())),
                payments: Vec::new(),
            })
        }
    };
    let result = run(&state, "getPaymentRecords", move |b| b.query.get_payment_records(&filter)).await;
    Json(responses::payments_response(result))
}

async fn initialize(State(state): State<Arc<AppState>>) -> Json<responses::InitializeResponse> {
    let result = run(&state, "initializeSheets", |b| b.bootstrap.initialize_sheets()).await;
    Json(responses::initialize_response(result))
}
