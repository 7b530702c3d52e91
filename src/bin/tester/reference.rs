// Reference Oracle — independent, label-based recomputation
// Never calls into surge_oracle; every harness comparison is made against this

const PER_MILE: f64 = 1.50;

pub fn multiplier(time_block: &str, weather: &str, demand: i32, drivers: i32) -> f64 {
    let mut m = 1.0;

    if time_block == "MORNING" {
        m += 0.10;
    } else if time_block == "EVENING" {
        m += 0.20;
    } else if time_block == "NIGHT" {
        m += 0.15;
    }

    if weather == "RAIN" {
        m += 0.15;
    }

    if demand >= 4 && drivers <= 2 {
        m += 0.40;
    } else if demand >= 3 && drivers <= 3 {
        m += 0.25;
    } else if demand <= 2 && drivers >= 4 {
        m -= 0.10;
    }

    if m < 1.0 {
        m = 1.0;
    }
    if m > 3.0 {
        m = 3.0;
    }
    m
}

pub fn total(base_fare: f64, miles: f64, surge: f64) -> f64 {
    let t = (base_fare + PER_MILE * miles) * surge;
    (t * 100.0).round() / 100.0
}

pub fn classify(m: f64) -> &'static str {
    if m < 1.20 {
        "Normal"
    } else if m < 1.60 {
        "Moderate Surge"
    } else {
        "High Surge"
    }
}

pub fn recommend(m: f64) -> &'static str {
    if m < 1.20 {
        "Normal demand - book now."
    } else if m < 1.60 {
        "Moderate surge - book if you are in a hurry."
    } else {
        "High surge - consider waiting 10 minutes."
    }
}
