//! Core types and traits for Booost sheet storage backends.
//!
//! This crate provides the `SheetStore` trait, the cell/row model shared by
//! every backend, the fixed sheet schema, and the record types built from rows,
//! so storage implementations can live in separate crates.

pub mod models;
pub mod schema;
pub mod storage;

// Re-export key types at crate root for convenience
pub use models::{parse_leading_decimal, parse_timestamp, CellValue, Row};
pub use models::read::{BraidingSession, LocationSummary, Payment, Stylist};
pub use models::write::{PaymentData, SessionData, StylistData};
pub use schema::Sheet;
pub use storage::{SheetStore, StoreError};
