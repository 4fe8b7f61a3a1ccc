//! Collateral valuation, borrow capacity and health factor
//!
//! Prices are WAD-scaled quotes for one whole outcome token. Valuation
//! rebases explicitly between the collateral and quote decimal bases; the
//! only truncation is to the target base.

use anchor_lang::prelude::*;
use crate::constants::{BPS, MAX_HEALTH_FACTOR, WAD};
use crate::errors::LendingError;
use crate::math::{mul_div_down, percent_mul, saturating_sub, scale_decimals};

/// Value of a collateral amount in quote-token units
///
/// `amount` is in raw collateral units, `price_wad` quotes one whole
/// collateral token in whole quote tokens.
pub fn collateral_value(
    amount: u128,
    price_wad: u128,
    collateral_decimals: u8,
    quote_decimals: u8,
) -> Result<u128> {
    let at_collateral_base = mul_div_down(amount, price_wad, WAD)?;
    scale_decimals(at_collateral_base, collateral_decimals, quote_decimals)
}

/// Collateral units worth a given quote-token debt, rounded down
pub fn collateral_units_for_debt(
    debt: u128,
    price_wad: u128,
    collateral_decimals: u8,
    quote_decimals: u8,
) -> Result<u128> {
    require!(price_wad > 0, LendingError::ZeroPrice);
    let at_quote_base = mul_div_down(debt, WAD, price_wad)?;
    scale_decimals(at_quote_base, quote_decimals, collateral_decimals)
}

/// Maximum borrow against a collateral value: `value * ltv / 10000`
pub fn max_borrow(collateral_value: u128, ltv_bps: u64) -> Result<u128> {
    percent_mul(collateral_value, ltv_bps)
}

/// Borrow headroom left under the LTV cap, zero when already over it
pub fn available_borrow(
    collateral_value: u128,
    ltv_bps: u64,
    current_debt: u128,
) -> Result<u128> {
    Ok(saturating_sub(max_borrow(collateral_value, ltv_bps)?, current_debt))
}

/// Health factor (WAD-scaled): risk-adjusted collateral over total debt
///
/// Two deliberate sentinels, not errors:
/// - zero debt returns `MAX_HEALTH_FACTOR` for any collateral value
/// - zero collateral value with outstanding debt returns 0
pub fn health_factor(collateral_value: u128, total_debt: u128, threshold_bps: u64) -> Result<u128> {
    if total_debt == 0 {
        return Ok(MAX_HEALTH_FACTOR);
    }
    if collateral_value == 0 {
        return Ok(0);
    }

    let risk_adjusted = mul_div_down(collateral_value, threshold_bps as u128, BPS as u128)?;
    mul_div_down(risk_adjusted, WAD, total_debt)
}

/// A position is healthy at or above a health factor of exactly 1.0;
/// liquidatable if and only if not healthy.
#[inline]
pub fn is_healthy(health_factor: u128) -> bool {
    health_factor >= WAD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collateral_value_same_base() {
        // 100 tokens at $0.80, both sides 6 decimals
        let value = collateral_value(100_000_000, WAD / 10 * 8, 6, 6).unwrap();
        assert_eq!(value, 80_000_000);
    }

    #[test]
    fn test_collateral_value_rebases_decimals() {
        // 5 tokens (9 decimals) at $2.00 into a 6-decimal quote
        let value = collateral_value(5_000_000_000, 2 * WAD, 9, 6).unwrap();
        assert_eq!(value, 10_000_000);
    }

    #[test]
    fn test_units_for_debt_inverts_value() {
        let price = WAD / 10 * 8;
        let units = collateral_units_for_debt(80_000_000, price, 6, 6).unwrap();
        assert_eq!(units, 100_000_000);
        assert!(collateral_units_for_debt(1, 0, 6, 6).is_err());
    }

    #[test]
    fn test_max_borrow() {
        assert_eq!(max_borrow(100_000, 7_000).unwrap(), 70_000);
        assert_eq!(max_borrow(0, 7_000).unwrap(), 0);
    }

    #[test]
    fn test_available_borrow_clamps() {
        assert_eq!(available_borrow(100_000, 7_000, 30_000).unwrap(), 40_000);
        assert_eq!(available_borrow(100_000, 7_000, 90_000).unwrap(), 0);
    }

    #[test]
    fn test_health_factor_scenario() {
        // 100 tokens at $0.80, debt 40, threshold 75% => hf = 1.5
        let value = collateral_value(100_000_000, WAD / 10 * 8, 6, 6).unwrap();
        let hf = health_factor(value, 40_000_000, 7_500).unwrap();
        assert_eq!(hf, WAD / 2 * 3);
        assert!(is_healthy(hf));
    }

    #[test]
    fn test_health_factor_sentinels() {
        assert_eq!(health_factor(123, 0, 7_500).unwrap(), MAX_HEALTH_FACTOR);
        assert_eq!(health_factor(0, 0, 7_500).unwrap(), MAX_HEALTH_FACTOR);
        assert_eq!(health_factor(0, 1, 7_500).unwrap(), 0);
        assert!(!is_healthy(0));
    }

    #[test]
    fn test_exactly_collateralized_is_healthy() {
        // value * threshold == debt => hf exactly 1.0
        let hf = health_factor(40_000, 30_000, 7_500).unwrap();
        assert_eq!(hf, WAD);
        assert!(is_healthy(hf));
        assert!(!is_healthy(hf - 1));
    }
}
