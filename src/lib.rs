// Surge Pricing Oracle
// Deterministic surge multiplier, fare and rider advice for ride-hailing trips.

pub mod types;
pub mod money;
pub mod oracle;
pub mod quote;

pub use types::*;
pub use oracle::{
    classify_surge, compute_surge_multiplier, compute_surge_multiplier_labels,
    compute_total_fare, recommend_action,
};
pub use quote::{FareQuote, TripRequest};

use wasm_bindgen::prelude::*;

// ─── WASM Interface ──────────────────────────────────────────────────────────

#[wasm_bindgen(js_name = initPanicHook)]
pub fn init_panic_hook() {
    #[cfg(target_arch = "wasm32")]
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
}

/// Unrecognized labels contribute no adjustment.
#[wasm_bindgen(js_name = computeSurgeMultiplier)]
pub fn js_compute_surge_multiplier(time_block: &str, weather: &str, demand: i32, drivers: i32) -> f64 {
    compute_surge_multiplier_labels(time_block, weather, demand, drivers)
}

#[wasm_bindgen(js_name = computeTotalFare)]
pub fn js_compute_total_fare(base_fare: f64, miles: f64, surge: f64) -> f64 {
    compute_total_fare(base_fare, miles, surge)
}

#[wasm_bindgen(js_name = classifySurge)]
pub fn js_classify_surge(multiplier: f64) -> String {
    classify_surge(multiplier).to_string()
}

#[wasm_bindgen(js_name = recommendAction)]
pub fn js_recommend_action(multiplier: f64) -> String {
    recommend_action(multiplier).to_string()
}

/// Price a `TripRequest` object and return the full `FareQuote`.
#[wasm_bindgen(js_name = quoteTrip)]
pub fn js_quote_trip(request: JsValue) -> Result<JsValue, JsValue> {
    let request: TripRequest = serde_wasm_bindgen::from_value(request)?;
    let quote = FareQuote::price(&request);
    Ok(serde_wasm_bindgen::to_value(&quote)?)
}
