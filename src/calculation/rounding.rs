//! Cent rounding for monetary values.
//!
//! Every monetary figure the engine returns passes through this module so
//! that rounding happens once, at the presentation boundary, with a single
//! strategy.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary value to whole cents.
///
/// Uses half-up rounding (midpoints move away from zero) and rescales the
/// result to exactly two decimal places, so equal amounts always serialize
/// to the same string.
///
/// # Examples
///
/// ```
/// use payg_engine::calculation::round_to_cents;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rounded = round_to_cents(Decimal::from_str("141.663269").unwrap());
/// assert_eq!(rounded.to_string(), "141.66");
///
/// let midpoint = round_to_cents(Decimal::from_str("2.675").unwrap());
/// assert_eq!(midpoint.to_string(), "2.68");
/// ```
pub fn round_to_cents(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// RND-001: midpoint rounds up
    #[test]
    fn test_midpoint_rounds_up() {
        assert_eq!(round_to_cents(dec("2.675")), dec("2.68"));
        assert_eq!(round_to_cents(dec("0.005")), dec("0.01"));
    }

    /// RND-002: below midpoint rounds down
    #[test]
    fn test_below_midpoint_rounds_down() {
        assert_eq!(round_to_cents(dec("2.6749")), dec("2.67"));
        assert_eq!(round_to_cents(dec("0.0049")), dec("0.00"));
    }

    /// RND-003: output always carries two decimal places
    #[test]
    fn test_output_rescaled_to_two_decimals() {
        assert_eq!(round_to_cents(dec("700")).to_string(), "700.00");
        assert_eq!(round_to_cents(dec("0")).to_string(), "0.00");
        assert_eq!(round_to_cents(dec("12.5")).to_string(), "12.50");
    }

    /// RND-004: negative midpoint moves away from zero
    #[test]
    fn test_negative_midpoint_moves_away_from_zero() {
        assert_eq!(round_to_cents(dec("-2.675")), dec("-2.68"));
    }

    /// RND-005: already-rounded values are unchanged
    #[test]
    fn test_exact_cents_unchanged() {
        assert_eq!(round_to_cents(dec("141.66")), dec("141.66"));
        assert_eq!(round_to_cents(dec("141.66")).to_string(), "141.66");
    }
}
