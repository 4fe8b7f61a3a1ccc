//! Static per-market risk configuration
//!
//! Set once at market creation and mutated only by a privileged action in
//! the surrounding shell; the core treats the record as read-only input.

use anchor_lang::prelude::*;
use crate::constants::{BPS, RAY, MAX_LIQUIDATION_BONUS_BPS, MAX_RESERVE_FACTOR_BPS};
use crate::errors::LendingError;

/// Per-market risk and rate configuration
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RiskParameters {
    // === Interest Rate Model (annual rates, RAY-scaled) ===

    /// Spread rate at 0% utilization
    pub base_spread_rate: u128,

    /// Utilization kink point (RAY-scaled, e.g. 0.8e27 = 80%)
    pub optimal_utilization: u128,

    /// Slope below the kink
    pub slope1: u128,

    /// Slope above the kink
    pub slope2: u128,

    // === Distribution ===

    /// Protocol cut of earned spread (basis points)
    pub reserve_factor_bps: u64,

    /// Share of post-waterfall excess routed to LPs (basis points)
    pub lp_share_of_excess_bps: u64,

    // === Collateral Risk ===

    /// Loan-to-value ratio (basis points, e.g. 7000 = 70%)
    pub ltv_bps: u64,

    /// Liquidation threshold (basis points, must be >= ltv_bps)
    pub liquidation_threshold_bps: u64,

    /// Maximum fraction of debt one liquidation may repay (basis points)
    pub close_factor_bps: u64,

    /// Liquidator incentive on seized collateral (basis points)
    pub liquidation_bonus_bps: u64,

    // === Token Bases ===

    /// Outcome-token (collateral) decimals
    pub collateral_decimals: u8,

    /// Reference-asset (quote) decimals
    pub quote_decimals: u8,
}

impl RiskParameters {
    /// Validate the parameter set at market creation
    pub fn validate(&self) -> Result<()> {
        require!(
            self.optimal_utilization > 0 && self.optimal_utilization <= RAY,
            LendingError::InvalidUtilizationTarget
        );
        require!(
            self.ltv_bps <= BPS && self.liquidation_threshold_bps <= BPS,
            LendingError::InvalidBps
        );
        require!(
            self.ltv_bps <= self.liquidation_threshold_bps,
            LendingError::InvalidLtvThreshold
        );
        require!(
            self.close_factor_bps <= BPS && self.lp_share_of_excess_bps <= BPS,
            LendingError::InvalidBps
        );
        require!(
            self.reserve_factor_bps <= MAX_RESERVE_FACTOR_BPS,
            LendingError::ReserveFactorTooHigh
        );
        require!(
            self.liquidation_bonus_bps <= MAX_LIQUIDATION_BONUS_BPS,
            LendingError::LiquidationBonusTooHigh
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RiskParameters {
        RiskParameters {
            base_spread_rate: RAY / 50,        // 2%
            optimal_utilization: RAY / 10 * 8, // 80%
            slope1: RAY / 25,                  // 4%
            slope2: RAY / 4 * 3,               // 75%
            reserve_factor_bps: 1_000,
            lp_share_of_excess_bps: 5_000,
            ltv_bps: 7_000,
            liquidation_threshold_bps: 7_500,
            close_factor_bps: 5_000,
            liquidation_bonus_bps: 500,
            collateral_decimals: 6,
            quote_decimals: 6,
        }
    }

    #[test]
    fn test_valid_params() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_ltv_above_threshold_rejected() {
        let mut p = sample();
        p.ltv_bps = 8_000;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_zero_optimal_utilization_rejected() {
        let mut p = sample();
        p.optimal_utilization = 0;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_reserve_factor_cap() {
        let mut p = sample();
        p.reserve_factor_bps = 6_000;
        assert!(p.validate().is_err());
    }
}
