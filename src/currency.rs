use rust_decimal::{Decimal, RoundingStrategy};

pub const DEFAULT_SYMBOL: &str = "₦";

fn fixed(value: Decimal, dp: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    rounded.to_string()
}

/// Compact money rendering: millions to 2dp with `M`, thousands to 0dp with
/// `K`, smaller amounts to 2dp.
pub fn format_currency(amount: Decimal, symbol: &str) -> String {
    let million = Decimal::from(1_000_000);
    let thousand = Decimal::from(1_000);

    if amount >= million {
        format!("{}{}M", symbol, fixed(amount / million, 2))
    } else if amount >= thousand {
        format!("{}{}K", symbol, fixed(amount / thousand, 0))
    } else {
        format!("{}{}", symbol, fixed(amount, 2))
    }
}
