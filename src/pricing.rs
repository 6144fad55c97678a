//! Pricing

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Money, iso::Currency};

use crate::items::LineItem;

/// Number of decimal places every displayed amount is rounded to.
pub const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// Price of `quantity` units at `unit_price`.
///
/// Saturates rather than overflowing; prices on a restaurant menu never get near the limit.
pub fn line_subtotal(unit_price: Decimal, quantity: u32) -> Decimal {
    unit_price.saturating_mul(Decimal::from(quantity))
}

/// Calculates the total price of a list of line items, rounded to two decimal places.
///
/// An empty list totals `0.00`.
pub fn total_price(items: &[LineItem]) -> Decimal {
    let total = items
        .iter()
        .map(LineItem::subtotal)
        .fold(Decimal::ZERO, Decimal::saturating_add);

    round_for_display(total)
}

/// Rounds an amount to exactly two decimal places, midpoints away from zero.
///
/// Whole amounts are padded, so `6` becomes `6.00`.
pub fn round_for_display(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(
        DISPLAY_DECIMAL_PLACES,
        RoundingStrategy::MidpointAwayFromZero,
    );
    rounded.rescale(DISPLAY_DECIMAL_PLACES);

    rounded
}

/// Formats an amount in the given currency, e.g. `$31.00`.
pub fn format_price(amount: Decimal, currency: &Currency) -> String {
    Money::from_decimal(round_for_display(amount), currency).to_string()
}
