#![cfg(target_arch = "wasm32")]

use surge_oracle::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn quote_trip_round_trips_through_js() {
    let request = TripRequest {
        time_block: TimeBlock::Evening,
        weather: Weather::Rain,
        demand: 5,
        drivers: 1,
        base_fare: 12.0,
        miles: 7.5,
    };
    let js: JsValue = serde_wasm_bindgen::to_value(&request).expect("test: serialize request");
    let out = js_quote_trip(js).expect("test: quote");
    let quote: FareQuote = serde_wasm_bindgen::from_value(out).expect("test: deserialize quote");
    assert_eq!(quote.surge_class, SurgeClass::High);
    assert_eq!(quote.total_fare.to_string(), "40.69");
}

#[wasm_bindgen_test]
fn quote_trip_rejects_unknown_time_block() {
    let bad = serde_wasm_bindgen::to_value(&serde_json::json!({
        "time_block": "DUSK", "weather": "CLEAR",
        "demand": 1, "drivers": 1, "base_fare": 1.0, "miles": 1.0
    }))
    .expect("test: serialize");
    assert!(js_quote_trip(bad).is_err());
}
