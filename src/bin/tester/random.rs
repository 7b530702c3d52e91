// Randomized Property Checks — seeded ChaCha8Rng, reproducible per seed
// Each trial recomputes its own reference values, so any seeded PRNG works

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use surge_oracle::*;

use crate::checks::Tally;
use crate::reference;

/// Inputs for one randomized trial.
#[derive(Debug, Clone, Copy)]
pub struct Trial {
    pub time_block: TimeBlock,
    pub weather: Weather,
    pub demand: i32,
    pub drivers: i32,
    pub base_fare: f64,
    pub miles: f64,
}

impl Trial {
    pub fn sample(rng: &mut ChaCha8Rng) -> Self {
        let time_block = TimeBlock::ALL[rng.gen_range(0..TimeBlock::ALL.len())];
        let weather = Weather::ALL[rng.gen_range(0..Weather::ALL.len())];
        let demand = 1 + rng.gen_range(0..5);
        let drivers = 1 + rng.gen_range(0..5);
        let base_fare = 5.0 + rng.gen::<f64>() * (100.0 - 5.0);
        let miles = 0.10 + rng.gen::<f64>() * (100.0 - 0.10);
        Self { time_block, weather, demand, drivers, base_fare, miles }
    }
}

/// Run `trials` seeded trials; returns how many were executed.
pub fn run_random(tally: &mut Tally, seed: u64, trials: usize) -> usize {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let eps = tally.eps;
    let mut executed = 0;

    for _ in 0..trials {
        let t = Trial::sample(&mut rng);
        let (time_label, weather_label) = (t.time_block.as_str(), t.weather.as_str());

        let surge_exp = reference::multiplier(time_label, weather_label, t.demand, t.drivers);
        let surge_act = compute_surge_multiplier(t.time_block, t.weather, t.demand, t.drivers);
        tally.approx("surge oracle", surge_act, surge_exp);

        let total_exp = reference::total(t.base_fare, t.miles, surge_exp);
        let total_act = compute_total_fare(t.base_fare, t.miles, surge_act);
        tally.approx("total oracle", total_act, total_exp);

        tally.equals("classify oracle", classify_surge(surge_act), reference::classify(surge_exp));
        tally.equals("recommend oracle", recommend_action(surge_act), reference::recommend(surge_exp));

        tally.truth("surge in [1,3]", surge_act >= 1.0 - eps && surge_act <= 3.0 + eps);
        tally.truth("total >= 0", total_act >= -eps);

        executed += 1;
    }

    executed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_trials() {
        let mut a = ChaCha8Rng::seed_from_u64(142);
        let mut b = ChaCha8Rng::seed_from_u64(142);
        for _ in 0..20 {
            let (x, y) = (Trial::sample(&mut a), Trial::sample(&mut b));
            assert_eq!(x.time_block, y.time_block);
            assert_eq!(x.weather, y.weather);
            assert_eq!(x.demand, y.demand);
            assert_eq!(x.drivers, y.drivers);
            assert_eq!(x.base_fare, y.base_fare);
            assert_eq!(x.miles, y.miles);
        }
    }

    #[test]
    fn sampled_inputs_stay_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..500 {
            let t = Trial::sample(&mut rng);
            assert!((1..=5).contains(&t.demand));
            assert!((1..=5).contains(&t.drivers));
            assert!(t.base_fare >= 5.0 && t.base_fare < 100.0);
            assert!(t.miles >= 0.10 && t.miles < 100.0);
        }
    }

    #[test]
    fn seeded_run_agrees_with_reference() {
        let mut tally = Tally::new(1e-9, true);
        tally.section("random", "[C]");
        let executed = run_random(&mut tally, 142, 50);
        assert_eq!(executed, 50);
        assert_eq!(tally.total(), 50 * 6);
        assert_eq!(tally.passed(), tally.total());
    }
}
