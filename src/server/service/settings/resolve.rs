//! Pure bracket math for fee tier resolution and deposits.

use rust_decimal::{prelude::ToPrimitive, Decimal, RoundingStrategy};

use crate::server::model::db::FeeTierModel;

/// Picks the tier covering `price`.
///
/// Expects active tiers sorted ascending by bracket start. A tier matches
/// when `minPrice <= price` and the price sits below `maxPrice` (an absent
/// `maxPrice` is unbounded). The first match wins, which keeps resolution
/// deterministic even if overlapping rows ever reach storage.
pub fn resolve_tier<'t>(tiers: &'t [FeeTierModel], price: i64) -> Option<&'t FeeTierModel> {
    tiers.iter().find(|tier| {
        tier.min_price <= price && tier.max_price.map_or(true, |max_price| price < max_price)
    })
}

/// Computes the deposit for `price` at `deposit_rate`, rounded half-up to the
/// nearest integer currency unit.
///
/// Returns `None` only when the product does not fit an `i64`, which a rate
/// in [0,1] cannot produce.
pub fn deposit_amount(price: i64, deposit_rate: Decimal) -> Option<i64> {
    (Decimal::from(price) * deposit_rate)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
}

/// Tells whether two half-open `[min, max)` brackets intersect. An absent
/// `max` leaves the bracket unbounded upwards.
pub fn brackets_overlap(a: (i64, Option<i64>), b: (i64, Option<i64>)) -> bool {
    let (a_min, a_max) = a;
    let (b_min, b_max) = b;

    let a_starts_below_b_end = b_max.map_or(true, |b_max| a_min < b_max);
    let b_starts_below_a_end = a_max.map_or(true, |a_max| b_min < a_max);

    a_starts_below_b_end && b_starts_below_a_end
}
