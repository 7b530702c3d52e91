//! Pricing oracle: surge multiplier, fare, classification and advice.
//!
//! Every function here is pure and total. Nothing is validated; negative
//! counts or fares simply flow through the arithmetic.

use crate::money::round_currency;
use crate::types::{MarketCondition, SurgeClass, TimeBlock, Weather};
use tracing::trace;

pub const BASE_MULTIPLIER: f64 = 1.00;
pub const MIN_MULTIPLIER: f64 = 1.00;
pub const MAX_MULTIPLIER: f64 = 3.00;
/// Monetary units charged per mile before surge.
pub const PER_MILE_RATE: f64 = 1.50;

/// Surge multiplier for the given conditions, clamped to [1.00, 3.00].
///
/// Adjustments are summed in a fixed order: base, time of day, weather,
/// market.
pub fn compute_surge_multiplier(
    time_block: TimeBlock,
    weather: Weather,
    demand: i32,
    drivers: i32,
) -> f64 {
    let market = MarketCondition::from_counts(demand, drivers);
    let surge = clamp_multiplier(accumulate(
        time_block.adjustment(),
        weather.adjustment(),
        market.adjustment(),
    ));
    trace!(%time_block, %weather, demand, drivers, ?market, surge, "surge multiplier");
    surge
}

/// Label-based variant for untyped callers (JS bindings).
///
/// An unrecognized label contributes no adjustment, exactly like DAY or
/// CLEAR.
pub fn compute_surge_multiplier_labels(
    time_block: &str,
    weather: &str,
    demand: i32,
    drivers: i32,
) -> f64 {
    let time_adj = time_block
        .parse::<TimeBlock>()
        .map_or(0.0, |t| t.adjustment());
    let weather_adj = weather
        .parse::<Weather>()
        .map_or(0.0, |w| w.adjustment());
    let market_adj = MarketCondition::from_counts(demand, drivers).adjustment();
    clamp_multiplier(accumulate(time_adj, weather_adj, market_adj))
}

fn accumulate(time_adj: f64, weather_adj: f64, market_adj: f64) -> f64 {
    let mut m = BASE_MULTIPLIER;
    m += time_adj;
    m += weather_adj;
    m += market_adj;
    m
}

fn clamp_multiplier(m: f64) -> f64 {
    m.clamp(MIN_MULTIPLIER, MAX_MULTIPLIER)
}

/// Pre-surge trip cost: base fare plus mileage.
pub fn base_trip_cost(base_fare: f64, miles: f64) -> f64 {
    base_fare + PER_MILE_RATE * miles
}

/// Total fare rounded to cents (half away from zero).
pub fn compute_total_fare(base_fare: f64, miles: f64, surge: f64) -> f64 {
    round_currency(base_trip_cost(base_fare, miles) * surge)
}

pub fn classify_surge(multiplier: f64) -> &'static str {
    SurgeClass::from_multiplier(multiplier).label()
}

/// Advice string; shares its tier partition with [`classify_surge`].
pub fn recommend_action(multiplier: f64) -> &'static str {
    SurgeClass::from_multiplier(multiplier).recommendation()
}
