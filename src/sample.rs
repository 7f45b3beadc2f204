//! Seed rows for the Locations sheet and the dashboard's fallback figures.

use booost_core::LocationSummary;
use rust_decimal::Decimal;

pub const FALLBACK_TOTAL_STYLISTS: usize = 265;
pub const FALLBACK_TOTAL_BRAIDING: usize = 9608;

pub fn fallback_total_payment() -> Decimal {
    Decimal::from(48_040_000)
}

pub fn fallback_pending_payment() -> Decimal {
    Decimal::from(3_830_000)
}

fn location(name: &str, stylists: i64, braiding: i64, rating_tenths: i64, total: i64, received: i64, pending: i64) -> LocationSummary {
    LocationSummary {
        name: name.to_string(),
        stylists,
        braiding,
        rating: Decimal::new(rating_tenths, 1),
        total: Decimal::from(total),
        received: Decimal::from(received),
        pending: Decimal::from(pending),
    }
}

pub fn sample_locations() -> Vec<LocationSummary> {
    vec![
        location("Oja Oba Market Akure", 40, 1232, 43, 6_160_000, 5_010_000, 1_150_000),
        location("Ondo Market", 38, 3400, 43, 17_000_000, 16_250_000, 750_000),
        location("Oja Oba Market, Ado - Ekiti", 56, 1356, 40, 6_780_000, 6_130_000, 650_000),
        location("Oja Tuntun, Ilorin", 66, 2322, 47, 11_610_000, 10_985_000, 625_000),
        location("Orisunbare Market, Osogbo", 65, 1298, 43, 6_490_000, 5_840_000, 650_000),
    ]
}
