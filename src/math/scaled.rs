//! Index-scaled balance accounting
//!
//! Balances are stored divided by the index at storage time, so every
//! account's interest grows implicitly with the index instead of needing
//! per-account writes. Real balance = scaled balance * current index.
//!
//! The same two conversions serve both index series. The borrow-index
//! series and the liquidity-index series must never be crossed: a debt
//! scaled under the borrow index is only ever read back under the borrow
//! index, and likewise for supply.
//!
//! Both directions round half-up, which keeps the round-trip error within
//! one token unit for indices up to 2.0 and bounded by the index above
//! that.

use anchor_lang::prelude::*;
use super::fixed_point::{ray_div_rounded, ray_mul_rounded};

/// Convert a real amount to its stored, index-scaled form
///
/// Formula: scaled = amount * RAY / index
pub fn to_scaled(amount: u128, index: u128) -> Result<u128> {
    ray_div_rounded(amount, index)
}

/// Convert a stored scaled amount back to its current real value
///
/// Formula: amount = scaled * index / RAY
pub fn to_real(scaled: u128, index: u128) -> Result<u128> {
    ray_mul_rounded(scaled, index)
}

/// Real value of a scaled aggregate, clamped to zero on any math failure.
///
/// View-only helper for state accessors that cannot propagate errors.
pub(crate) fn to_real_or_zero(scaled: u128, index: u128) -> u128 {
    ray_mul_rounded(scaled, index).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::RAY;

    #[test]
    fn test_identity_at_index_one() {
        assert_eq!(to_scaled(1_000_000, RAY).unwrap(), 1_000_000);
        assert_eq!(to_real(1_000_000, RAY).unwrap(), 1_000_000);
    }

    #[test]
    fn test_growth_through_index() {
        // Scaled at inception, read back after 20% index growth
        let scaled = to_scaled(1_000_000, RAY).unwrap();
        let later = to_real(scaled, RAY + RAY / 5).unwrap();
        assert_eq!(later, 1_200_000);
    }

    #[test]
    fn test_round_trip_within_one_unit() {
        let index = RAY + RAY / 3;
        for amount in [1u128, 7, 999, 1_000_000, 123_456_789_012_345] {
            let recovered = to_real(to_scaled(amount, index).unwrap(), index).unwrap();
            assert!(recovered.abs_diff(amount) <= 1, "{amount} -> {recovered}");
        }
    }

    #[test]
    fn test_zero_index_rejected() {
        assert!(to_scaled(100, 0).is_err());
    }

    #[test]
    fn test_zero_amount() {
        assert_eq!(to_scaled(0, RAY + 1).unwrap(), 0);
        assert_eq!(to_real(0, RAY + 1).unwrap(), 0);
    }
}
