//! Market-wide reserve aggregates
//!
//! One record per market. The core receives a copy, computes, and returns
//! a new copy; persistence and write-back atomicity belong to the shell.
//!
//! Invariants:
//! - both indices are monotonically non-decreasing and never below RAY
//!   once initialized
//! - `total_scaled_borrowed * variable_borrow_index >= total_borrowed`

use anchor_lang::prelude::*;
use crate::constants::RAY;
use crate::math::{mul_div_down, scaled::to_real_or_zero, saturating_sub};

/// Mutable reserve state for a single market
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReserveState {
    /// Sum of borrow balances scaled by the borrow index at draw time
    pub total_scaled_borrowed: u128,

    /// Borrowed principal view (drawn minus repaid, excludes accrued spread)
    pub total_borrowed: u128,

    /// Sum of supply balances scaled by the liquidity index at deposit time
    pub total_scaled_supplied: u128,

    /// Total outcome tokens posted as collateral
    pub total_collateral: u128,

    /// Compounding debt index (RAY, >= 1.0 once initialized)
    pub variable_borrow_index: u128,

    /// Compounding supply index (RAY, >= 1.0 once initialized)
    pub liquidity_index: u128,

    /// Timestamp of the last index advancement
    pub last_update_timestamp: i64,

    /// Spread realized at repay time, pending distribution
    pub accumulated_spread: u128,
}

impl ReserveState {
    /// Whether the indices have been seeded
    pub fn is_initialized(&self) -> bool {
        self.variable_borrow_index >= RAY && self.liquidity_index >= RAY
    }

    /// Supplied principal read through the liquidity index
    pub fn total_supplied(&self) -> u128 {
        to_real_or_zero(self.total_scaled_supplied, self.liquidity_index)
    }

    /// Index-weighted debt owed to the reserve right now
    pub fn current_total_debt(&self) -> u128 {
        to_real_or_zero(self.total_scaled_borrowed, self.variable_borrow_index)
    }

    /// Utilization rate (RAY-scaled), 0 when nothing is supplied
    pub fn utilization(&self) -> u128 {
        let supplied = self.total_supplied();
        if supplied == 0 {
            return 0;
        }
        mul_div_down(self.total_borrowed, RAY, supplied).unwrap_or(0)
    }

    /// Spread accrued beyond the tracked principal
    pub fn unrealized_spread(&self) -> u128 {
        saturating_sub(self.current_total_debt(), self.total_borrowed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> ReserveState {
        ReserveState {
            total_scaled_borrowed: 500_000,
            total_borrowed: 500_000,
            total_scaled_supplied: 1_000_000,
            total_collateral: 2_000_000,
            variable_borrow_index: RAY,
            liquidity_index: RAY,
            last_update_timestamp: 1_700_000_000,
            accumulated_spread: 0,
        }
    }

    #[test]
    fn test_uninitialized_default() {
        assert!(!ReserveState::default().is_initialized());
        assert!(seeded().is_initialized());
    }

    #[test]
    fn test_utilization() {
        let reserve = seeded();
        assert_eq!(reserve.utilization(), RAY / 2);

        let empty = ReserveState::default();
        assert_eq!(empty.utilization(), 0);
    }

    #[test]
    fn test_unrealized_spread_tracks_index() {
        let mut reserve = seeded();
        assert_eq!(reserve.unrealized_spread(), 0);

        // 10% borrow-index growth on 500k scaled debt
        reserve.variable_borrow_index = RAY + RAY / 10;
        assert_eq!(reserve.unrealized_spread(), 50_000);
    }
}
