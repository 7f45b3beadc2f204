use std::sync::Arc;

use axum::{body::Body, http::{Request, StatusCode}, Router};
use booost::api::{self, AppState};
use booost::config::DashboardConfig;
use booost::query::PaymentFilter;
use booost::Backend;
use booost_core::{CellValue, Row, SessionData, Sheet, SheetStore, StoreError, StylistData};
use booost_memory::InMemoryStore;
use booost_sqlite::SqliteStore;
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use time::OffsetDateTime;
use tower::ServiceExt;

fn setup() -> (Arc<dyn SheetStore>, Backend) {
    let store: Arc<dyn SheetStore> = Arc::new(InMemoryStore::new());
    let backend = Backend::new(store.clone());
    backend.bootstrap.initialize_sheets().unwrap();
    (store, backend)
}

fn session(stylist_id: &str, amount: &str, status: Option<&str>, location: &str) -> SessionData {
    SessionData {
        stylist_id: Some(stylist_id.to_string()),
        stylist_name: Some("Adaeze".to_string()),
        client_name: Some("Bisi".to_string()),
        service_type: Some("Knotless".to_string()),
        amount: booost_core::parse_leading_decimal(amount),
        duration: Some("3h".to_string()),
        location: Some(location.to_string()),
        rating: Some(dec!(4.5)),
        payment_status: status.map(str::to_string),
        payment_method: None,
    }
}

#[test]
fn test_register_then_list_stylist() {
    let (_, backend) = setup();
    let before = OffsetDateTime::now_utc();
    let stylist_id = backend.writer.register_stylist(&StylistData {
        name: Some("Adaeze".to_string()),
        phone: Some("08030000000".to_string()),
        location: Some("Ondo Market".to_string()),
        rating: Some(dec!(4.8)),
        ..Default::default()
    }).unwrap();
    let after = OffsetDateTime::now_utc();

    let stylists = backend.query.get_all_stylists().unwrap();
    assert_eq!(stylists.len(), 1);
    let s = &stylists[0];
    assert_eq!(s.id, 1);
    assert_eq!(s.stylist_id, stylist_id);
    assert_eq!(s.status, "Active");
    assert_eq!(s.rating, dec!(4.8));
    let registered = s.registration_date.unwrap();
    assert!(registered >= before && registered <= after);
}

#[test]
fn test_stylists_empty_after_init() {
    let (_, backend) = setup();
    assert!(backend.query.get_all_stylists().unwrap().is_empty());
}

#[test]
fn test_dashboard_totals_follow_sessions() {
    let (_, backend) = setup();
    backend.writer.register_stylist(&StylistData::default()).unwrap();
    backend.writer.register_stylist(&StylistData::default()).unwrap();
    backend.writer.save_braiding_session(&session("STY-1", "1500", None, "Ondo Market")).unwrap();
    backend.writer.save_braiding_session(&session("STY-1", "2500", Some("pending"), "Ondo Market")).unwrap();
    backend.writer.save_braiding_session(&session("STY-2", "6000", Some("Paid"), "Oja Tuntun, Ilorin")).unwrap();

    let data = backend.aggregator.get_dashboard_data().unwrap();
    assert_eq!(data.total_stylists, 2);
    assert_eq!(data.total_braiding, 3);
    assert_eq!(data.payments.total, dec!(10000));
    assert_eq!(data.payments.pending, dec!(4000));

    let view = booost::responses::dashboard_response(Ok(data), &DashboardConfig::default());
    assert_eq!(view.total_payment, "₦10K");
    assert_eq!(view.pending_payment, "₦4K");
    assert_eq!(view.locations.len(), 5);
}

#[test]
fn test_status_filter_is_exact_but_pending_sum_is_not() {
    let (_, backend) = setup();
    backend.writer.save_braiding_session(&session("STY-1", "1000", None, "Ondo Market")).unwrap();
    backend.writer.save_braiding_session(&session("STY-1", "3000", Some("pending"), "Ondo Market")).unwrap();

    let filter = PaymentFilter { status: Some("Pending".to_string()), ..Default::default() };
    let payments = backend.query.get_payment_records(&filter).unwrap();
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0].amount, dec!(1000));

    let data = backend.aggregator.get_dashboard_data().unwrap();
    assert_eq!(data.payments.pending, dec!(4000));
}

#[test]
fn test_session_and_payment_share_id() {
    let (store, backend) = setup();
    let session_id = backend.writer
        .save_braiding_session(&session("STY-9", "abc", None, "Ondo Market"))
        .unwrap();

    let payments = backend.query.get_payment_records(&PaymentFilter::default()).unwrap();
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0].session_id, session_id);
    assert_eq!(payments[0].amount, dec!(0));
    assert_eq!(payments[0].method, "Cash");

    let sessions = store.read_rows(Sheet::BraidingSessions.name()).unwrap();
    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[1].last(), Some(&CellValue::from(session_id.as_str())));
}

#[test]
fn test_initialize_twice() {
    let (store, backend) = setup();
    assert!(backend.bootstrap.initialize_sheets().unwrap().is_empty());
    for sheet in Sheet::ALL {
        let rows = store.read_rows(sheet.name()).unwrap();
        let headers = rows.iter()
            .filter(|r| r.first() == Some(&CellValue::from(sheet.headers()[0])))
            .count();
        assert_eq!(headers, 1, "{} header duplicated", sheet);
    }
    assert_eq!(store.read_rows("Locations").unwrap().len(), 6);
}

// --- SQLite backend tests ---

#[test]
fn test_sqlite_end_to_end() {
    let store: Arc<dyn SheetStore> = Arc::new(SqliteStore::new(":memory:").unwrap());
    let backend = Backend::new(store);
    assert_eq!(backend.bootstrap.initialize_sheets().unwrap().len(), 4);

    backend.writer.register_stylist(&StylistData {
        name: Some("Kemi".to_string()),
        ..Default::default()
    }).unwrap();
    backend.writer.save_braiding_session(&session("STY-1", "1500000", None, "Ondo Market")).unwrap();
    backend.writer.save_braiding_session(&session("STY-1", "1000000", Some("Paid"), "Ondo Market")).unwrap();

    let data = backend.aggregator.get_dashboard_data().unwrap();
    assert_eq!(data.total_stylists, 1);
    assert_eq!(data.total_braiding, 2);
    assert_eq!(data.payments.total, dec!(2500000));
    assert_eq!(data.payments.pending, dec!(1500000));

    let view = booost::responses::dashboard_response(Ok(data), &DashboardConfig::default());
    assert_eq!(view.total_payment, "₦2.50M");
    assert_eq!(view.location_source, booost::responses::LocationSource::Live);
    assert_eq!(view.locations[1].name, "Ondo Market");

    let stylists = backend.query.get_all_stylists().unwrap();
    assert_eq!(stylists[0].name, "Kemi");
    assert!(stylists[0].registration_date.is_some());
}

// --- HTTP surface ---

struct Unreachable;

impl SheetStore for Unreachable {
    fn open_sheet(&self, _sheet: &str) -> Result<(), StoreError> {
        Err(StoreError::Other("spreadsheet unavailable".to_string()))
    }

    fn list_sheets(&self) -> Result<Vec<String>, StoreError> {
        Err(StoreError::Other("spreadsheet unavailable".to_string()))
    }

    fn read_rows(&self, _sheet: &str) -> Result<Vec<Row>, StoreError> {
        Err(StoreError::Other("spreadsheet unavailable".to_string()))
    }

    fn append_row(&self, _sheet: &str, _row: &[CellValue]) -> Result<(), StoreError> {
        Err(StoreError::Other("spreadsheet unavailable".to_string()))
    }
}

fn app(store: Arc<dyn SheetStore>) -> Router {
    api::router(Arc::new(AppState {
        backend: Backend::new(store),
        dashboard: DashboardConfig::default(),
        metrics: None,
    }))
}

async fn call(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
    (status, body.to_vec())
}

async fn get_json(app: &Router, uri: &str) -> Value {
    let (status, body) = call(app, Request::get(uri).body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&body).unwrap()
}

async fn post_json(app: &Router, uri: &str, body: &str) -> Value {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, body) = call(app, request).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_http_round_trip() {
    let app = app(Arc::new(InMemoryStore::new()));

    let init = post_json(&app, "/api/initialize", "").await;
    assert_eq!(init["success"], true);
    assert_eq!(init["seeded"], json!(["Stylists", "BraidingSessions", "Payments", "Locations"]));

    let stylists = get_json(&app, "/api/stylists").await;
    assert_eq!(stylists, json!({ "success": true, "stylists": [] }));

    let registered = post_json(&app, "/api/stylists", r#"{"name": "Adaeze", "rating": "4.5"}"#).await;
    assert_eq!(registered["success"], true);
    assert_eq!(registered["message"], "Stylist registered successfully");
    let stylist_id = registered["stylistId"].as_str().unwrap().to_string();

    let saved = post_json(
        &app,
        "/api/sessions",
        &json!({ "stylistId": stylist_id, "clientName": "Bisi", "amount": 1500, "location": "Ondo Market" }).to_string(),
    ).await;
    assert_eq!(saved["success"], true);

    let payments = get_json(&app, "/api/payments?status=Pending&location=Ondo%20Market").await;
    assert_eq!(payments["success"], true);
    assert_eq!(payments["payments"][0]["stylistId"], stylist_id.as_str());
    assert_eq!(payments["payments"][0]["amount"], 1500.0);
    assert_eq!(payments["payments"][0]["sessionId"], saved["sessionId"]);

    let dashboard = get_json(&app, "/api/dashboard").await;
    assert_eq!(dashboard["success"], true);
    assert_eq!(dashboard["totalStylists"], 1);
    assert_eq!(dashboard["totalBraiding"], 1);
    assert_eq!(dashboard["totalPayment"], "₦2K");
    assert_eq!(dashboard["pendingPayment"], "₦2K");
    assert_eq!(dashboard["locationSource"], "live");
}

#[tokio::test]
async fn test_http_dashboard_fallback() {
    let app = app(Arc::new(Unreachable));
    let dashboard = get_json(&app, "/api/dashboard").await;
    assert_eq!(dashboard["success"], false);
    assert_eq!(dashboard["error"], "storage error: spreadsheet unavailable");
    assert_eq!(dashboard["totalStylists"], 265);
    assert_eq!(dashboard["totalBraiding"], 9608);
    assert_eq!(dashboard["totalPayment"], "₦48.04M");
    assert_eq!(dashboard["pendingPayment"], "₦3.83M");
    assert_eq!(dashboard["locations"].as_array().unwrap().len(), 5);

    let stylists = get_json(&app, "/api/stylists").await;
    assert_eq!(stylists["success"], false);
    assert_eq!(stylists["stylists"], json!([]));
}

#[tokio::test]
async fn test_http_bad_input_stays_in_band() {
    let app = app(Arc::new(InMemoryStore::new()));

    let registered = post_json(&app, "/api/stylists", "{not json").await;
    assert_eq!(registered["success"], false);
    assert!(registered["error"].as_str().unwrap().starts_with("invalid request body"));

    let payments = get_json(&app, "/api/payments?fromDate=someday").await;
    assert_eq!(payments["success"], false);
    assert_eq!(payments["error"], "invalid filter date: someday");
    assert_eq!(payments["payments"], json!([]));

    let payments = get_json(&app, "/api/payments?status=Paid&status=Pending").await;
    assert_eq!(payments["success"], false);
    assert!(payments["error"].as_str().unwrap().starts_with("invalid payment filter"));
    assert_eq!(payments["payments"], json!([]));
}

#[tokio::test]
async fn test_http_overflowing_amounts_stay_in_band() {
    let app = app(Arc::new(InMemoryStore::new()));
    let body = r#"{"stylistId": "STY-1", "amount": "79228162514264337593543950335"}"#;
    for _ in 0..2 {
        let saved = post_json(&app, "/api/sessions", body).await;
        assert_eq!(saved["success"], true);
    }

    let dashboard = get_json(&app, "/api/dashboard").await;
    assert_eq!(dashboard["success"], false);
    assert!(dashboard["error"].as_str().unwrap().contains("overflows"));
}

#[tokio::test]
async fn test_http_page_selection() {
    let app = app(Arc::new(InMemoryStore::new()));
    for (uri, marker) in [
        ("/", "<h1>Management Dashboard</h1>"),
        ("/?page=dashboard", "<h1>Management Dashboard</h1>"),
        ("/?page=sessions", "<h1>Record a Braiding Session</h1>"),
        ("/?page=anything", "<h1>Record a Braiding Session</h1>"),
        ("/?page=a&page=b", "<h1>Management Dashboard</h1>"),
    ] {
        let (status, body) = call(&app, Request::get(uri).body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert!(String::from_utf8(body).unwrap().contains(marker), "{}", uri);
    }
}
