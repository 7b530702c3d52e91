//! Money helpers: converts between the oracle's f64 world and `Decimal`.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept on a fare.
pub const CURRENCY_DP: u32 = 2;

/// Convert f64 to Decimal (lossy but sufficient for fares).
pub fn to_decimal(v: f64) -> Decimal {
    Decimal::from_f64(v).unwrap_or(Decimal::ZERO)
}

/// Convert Decimal to f64.
pub fn from_decimal(d: Decimal) -> f64 {
    d.to_f64().unwrap_or(0.0)
}

/// Round to whole cents, ties away from zero (40.6875 → 40.69, never
/// banker's rounding).
pub fn round_currency(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Same rounding as [`round_currency`], expressed as a 2-dp `Decimal`.
pub fn to_cents(amount: f64) -> Decimal {
    to_decimal(amount).round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn round_currency_half_away_from_zero() {
        assert_eq!(round_currency(40.6875), 40.69);
        assert_eq!(round_currency(0.125), 0.13);
        assert_eq!(round_currency(-0.125), -0.13);
        assert_eq!(round_currency(2.5), 2.5);
    }

    #[test]
    fn round_currency_is_idempotent() {
        for v in [0.0, 1.005, 17.333333, 40.6875, 1234.5678, -9.999] {
            let once = round_currency(v);
            assert_eq!(round_currency(once), once, "not idempotent for {}", v);
        }
    }

    #[test]
    fn to_cents_matches_round_currency() {
        assert_eq!(to_cents(40.6875), dec!(40.69));
        assert_eq!(to_cents(23.25), dec!(23.25));
        assert_eq!(to_cents(-0.125), dec!(-0.13));
    }

    #[test]
    fn decimal_conversion() {
        assert_eq!(to_decimal(12.5), dec!(12.5));
        assert!((from_decimal(dec!(40.69)) - 40.69).abs() < 1e-12);
        assert_eq!(to_decimal(f64::NAN), Decimal::ZERO);
    }
}
