//! Liquidation math under close factor and bonus
//!
//! Invariants (property-tested):
//! - `debt_to_repay <= user_debt`
//! - `collateral_to_seize <= collateral_amount`
//! - `debt_to_repay > 0` if and only if `collateral_to_seize > 0`

use anchor_lang::prelude::*;
use crate::capacity::{collateral_units_for_debt, collateral_value};
use crate::constants::BPS;
use crate::errors::LendingError;
use crate::math::{min, mul_div_down, percent_mul, saturating_sub};

/// Inputs to a liquidation computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiquidationInputs {
    /// Debt the liquidator offers to repay (quote units)
    pub requested_debt: u128,

    /// Borrower's total current debt (quote units)
    pub user_debt: u128,

    /// Borrower's posted collateral (collateral units)
    pub collateral_amount: u128,

    /// Current collateral price (WAD-scaled)
    pub collateral_price: u128,

    /// Maximum repayable fraction of the debt (basis points)
    pub close_factor_bps: u64,

    /// Liquidator incentive (basis points)
    pub bonus_bps: u64,

    /// Collateral token decimals
    pub collateral_decimals: u8,

    /// Quote token decimals
    pub quote_decimals: u8,
}

/// Outcome of a liquidation computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiquidationOutcome {
    /// Debt actually repaid (quote units)
    pub debt_to_repay: u128,

    /// Collateral transferred to the liquidator, bonus included
    pub collateral_to_seize: u128,

    /// Portion of the seizure above the debt's market value
    pub bonus_amount: u128,

    /// Whether the position is fully closed by this liquidation
    pub is_full_liquidation: bool,
}

/// Compute the debt to repay and collateral to seize for one liquidation.
///
/// The repayment is capped by the close factor; the seizure carries the
/// bonus. When the bonus-inclusive seizure exceeds the posted collateral,
/// the whole collateral is seized and the repayment is back-solved from
/// the collateral net of bonus.
pub fn compute_liquidation(inputs: &LiquidationInputs) -> Result<LiquidationOutcome> {
    require!(inputs.requested_debt > 0, LendingError::ZeroAmount);
    require!(inputs.user_debt > 0, LendingError::ZeroAmount);
    require!(inputs.collateral_price > 0, LendingError::ZeroPrice);

    let max_liquidatable = percent_mul(inputs.user_debt, inputs.close_factor_bps)?;
    let mut debt_to_repay = min(
        inputs.requested_debt,
        min(max_liquidatable, inputs.user_debt),
    );

    let base_collateral = collateral_units_for_debt(
        debt_to_repay,
        inputs.collateral_price,
        inputs.collateral_decimals,
        inputs.quote_decimals,
    )?;
    let with_bonus = mul_div_down(
        base_collateral,
        (BPS + inputs.bonus_bps) as u128,
        BPS as u128,
    )?;

    let outcome = if with_bonus > inputs.collateral_amount {
        // The position cannot cover the bonus-inclusive seizure: take all
        // collateral and back out how much debt it settles net of bonus.
        let base_affordable = mul_div_down(
            inputs.collateral_amount,
            BPS as u128,
            (BPS + inputs.bonus_bps) as u128,
        )?;
        debt_to_repay = min(
            collateral_value(
                base_affordable,
                inputs.collateral_price,
                inputs.collateral_decimals,
                inputs.quote_decimals,
            )?,
            inputs.user_debt,
        );

        LiquidationOutcome {
            debt_to_repay,
            collateral_to_seize: inputs.collateral_amount,
            bonus_amount: saturating_sub(inputs.collateral_amount, base_affordable),
            is_full_liquidation: true,
        }
    } else {
        LiquidationOutcome {
            debt_to_repay,
            collateral_to_seize: with_bonus,
            bonus_amount: saturating_sub(with_bonus, base_collateral),
            is_full_liquidation: debt_to_repay == inputs.user_debt,
        }
    };

    // Dust the legs together: a repayment must always move collateral and
    // a seizure must always retire debt.
    if outcome.debt_to_repay == 0 || outcome.collateral_to_seize == 0 {
        return Ok(LiquidationOutcome {
            debt_to_repay: 0,
            collateral_to_seize: 0,
            bonus_amount: 0,
            is_full_liquidation: false,
        });
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::WAD;

    fn inputs() -> LiquidationInputs {
        LiquidationInputs {
            requested_debt: 100_000_000,
            user_debt: 40_000_000,
            collateral_amount: 100_000_000,
            collateral_price: WAD / 10 * 8, // $0.80
            close_factor_bps: 5_000,
            bonus_bps: 500,
            collateral_decimals: 6,
            quote_decimals: 6,
        }
    }

    #[test]
    fn test_close_factor_caps_repayment() {
        let outcome = compute_liquidation(&inputs()).unwrap();
        // 50% of 40 debt
        assert_eq!(outcome.debt_to_repay, 20_000_000);
        // 20 / 0.8 = 25 tokens, +5% bonus = 26.25
        assert_eq!(outcome.collateral_to_seize, 26_250_000);
        assert_eq!(outcome.bonus_amount, 1_250_000);
        assert!(!outcome.is_full_liquidation);
    }

    #[test]
    fn test_small_request_taken_verbatim() {
        let mut i = inputs();
        i.requested_debt = 4_000_000;
        let outcome = compute_liquidation(&i).unwrap();
        assert_eq!(outcome.debt_to_repay, 4_000_000);
        assert_eq!(outcome.collateral_to_seize, 5_250_000);
    }

    #[test]
    fn test_full_close_factor_full_liquidation() {
        let mut i = inputs();
        i.close_factor_bps = 10_000;
        i.collateral_amount = 200_000_000;
        let outcome = compute_liquidation(&i).unwrap();
        assert_eq!(outcome.debt_to_repay, i.user_debt);
        assert!(outcome.is_full_liquidation);
    }

    #[test]
    fn test_collateral_shortfall_caps_seizure() {
        let mut i = inputs();
        i.collateral_amount = 10_000_000; // far below the 26.25 target
        let outcome = compute_liquidation(&i).unwrap();

        assert_eq!(outcome.collateral_to_seize, 10_000_000);
        assert!(outcome.is_full_liquidation);
        // 10 / 1.05 = 9.523809 tokens net of bonus, worth 7.619047 at $0.80
        assert_eq!(outcome.debt_to_repay, 7_619_047);
        assert!(outcome.debt_to_repay <= i.user_debt);
        assert_eq!(
            outcome.bonus_amount,
            i.collateral_amount - 9_523_809
        );
    }

    #[test]
    fn test_zero_bonus() {
        let mut i = inputs();
        i.bonus_bps = 0;
        let outcome = compute_liquidation(&i).unwrap();
        assert_eq!(outcome.collateral_to_seize, 25_000_000);
        assert_eq!(outcome.bonus_amount, 0);
    }

    #[test]
    fn test_zero_inputs_rejected() {
        let mut i = inputs();
        i.requested_debt = 0;
        assert!(compute_liquidation(&i).is_err());

        let mut i = inputs();
        i.user_debt = 0;
        assert!(compute_liquidation(&i).is_err());

        let mut i = inputs();
        i.collateral_price = 0;
        assert!(compute_liquidation(&i).is_err());
    }

    #[test]
    fn test_dust_zeroes_both_legs() {
        // Close factor rounds the repayable debt to zero
        let mut i = inputs();
        i.user_debt = 1;
        i.requested_debt = 1;
        let outcome = compute_liquidation(&i).unwrap();
        assert_eq!(outcome.debt_to_repay, 0);
        assert_eq!(outcome.collateral_to_seize, 0);
        assert!(!outcome.is_full_liquidation);
    }
}
