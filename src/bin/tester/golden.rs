// Golden Cases and Boundaries — deterministic checks with exact expectations

use surge_oracle::*;

use crate::checks::Tally;
use crate::reference;

struct Golden {
    label: &'static str,
    time_block: TimeBlock,
    weather: Weather,
    demand: i32,
    drivers: i32,
    expected: f64,
}

const MULTIPLIER_GOLDENS: [Golden; 8] = [
    // Time of day on a neutral market
    Golden { label: "DAY +0.00", time_block: TimeBlock::Day, weather: Weather::Clear, demand: 3, drivers: 5, expected: 1.00 },
    Golden { label: "MORNING +0.10", time_block: TimeBlock::Morning, weather: Weather::Clear, demand: 3, drivers: 5, expected: 1.10 },
    Golden { label: "EVENING +0.20", time_block: TimeBlock::Evening, weather: Weather::Clear, demand: 3, drivers: 5, expected: 1.20 },
    Golden { label: "NIGHT +0.15", time_block: TimeBlock::Night, weather: Weather::Clear, demand: 3, drivers: 5, expected: 1.15 },
    Golden { label: "RAIN +0.15", time_block: TimeBlock::Day, weather: Weather::Rain, demand: 3, drivers: 5, expected: 1.15 },
    // Market
    Golden { label: "Severe +0.40", time_block: TimeBlock::Day, weather: Weather::Clear, demand: 5, drivers: 1, expected: 1.40 },
    Golden { label: "Elevated +0.25", time_block: TimeBlock::Day, weather: Weather::Clear, demand: 3, drivers: 3, expected: 1.25 },
    Golden { label: "Soft -0.10 -> clamp", time_block: TimeBlock::Day, weather: Weather::Clear, demand: 1, drivers: 5, expected: 1.00 },
];

pub fn run_golden(tally: &mut Tally) {
    for g in &MULTIPLIER_GOLDENS {
        let actual = compute_surge_multiplier(g.time_block, g.weather, g.demand, g.drivers);
        tally.approx(g.label, actual, g.expected);
        let eps = tally.eps;
        tally.truth("    clamped [1.0,3.0]", actual >= 1.0 - eps && actual <= 3.0 + eps);
    }

    let surge = compute_surge_multiplier(TimeBlock::Evening, Weather::Rain, 5, 1);
    tally.approx("EVENING+RAIN+Severe -> 1.75", surge, 1.75);

    // base trip 23.25, raw total 40.6875
    let total = compute_total_fare(12.00, 7.5, 1.75);
    tally.approx("Total fare rounding (40.69)", total, 40.69);

    tally.equals("classify(1.75) -> High Surge", classify_surge(1.75), reference::classify(1.75));
    tally.equals("recommend(1.75) -> High surge message", recommend_action(1.75), reference::recommend(1.75));
}

pub fn run_boundaries(tally: &mut Tally) {
    tally.equals("classify(1.19) -> Normal", classify_surge(1.19), "Normal");
    tally.equals("classify(1.20) -> Moderate Surge", classify_surge(1.20), "Moderate Surge");
    tally.equals("classify(1.59) -> Moderate Surge", classify_surge(1.59), "Moderate Surge");
    tally.equals("classify(1.60) -> High Surge", classify_surge(1.60), "High Surge");

    tally.equals("recommend(1.10) -> Normal msg", recommend_action(1.10), "Normal demand - book now.");
    tally.equals(
        "recommend(1.35) -> Moderate msg",
        recommend_action(1.35),
        "Moderate surge - book if you are in a hurry.",
    );
    tally.equals(
        "recommend(1.80) -> High msg",
        recommend_action(1.80),
        "High surge - consider waiting 10 minutes.",
    );
}
