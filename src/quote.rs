//! Trip quotes: one request priced end to end.

use crate::money::{to_cents, to_decimal};
use crate::oracle::{base_trip_cost, compute_surge_multiplier, compute_total_fare};
use crate::types::{MarketCondition, SurgeClass, TimeBlock, Weather};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything needed to price a trip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    pub time_block: TimeBlock,
    pub weather: Weather,
    pub demand: i32,
    pub drivers: i32,
    pub base_fare: f64,
    pub miles: f64,
}

/// Priced trip with every intermediate value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareQuote {
    pub request: TripRequest,
    pub market: MarketCondition,
    pub surge_multiplier: f64,
    /// Base fare plus mileage, before surge.
    pub base_trip: Decimal,
    /// Rounded to cents.
    pub total_fare: Decimal,
    pub surge_class: SurgeClass,
    pub recommendation: String,
}

impl FareQuote {
    pub fn price(request: &TripRequest) -> Self {
        let surge = compute_surge_multiplier(
            request.time_block,
            request.weather,
            request.demand,
            request.drivers,
        );
        let total = compute_total_fare(request.base_fare, request.miles, surge);
        let surge_class = SurgeClass::from_multiplier(surge);

        debug!(?request, surge, total, class = %surge_class, "priced trip");

        Self {
            request: *request,
            market: MarketCondition::from_counts(request.demand, request.drivers),
            surge_multiplier: surge,
            base_trip: to_decimal(base_trip_cost(request.base_fare, request.miles)),
            total_fare: to_cents(total),
            surge_class,
            recommendation: surge_class.recommendation().to_string(),
        }
    }
}
