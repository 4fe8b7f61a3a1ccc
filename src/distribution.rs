//! Settlement distribution waterfall and pro-rata claims
//!
//! Runs once when the prediction market resolves. The redeemed collateral
//! value is split across four claimants in strict order, each tier funded
//! only by what the prior tiers left behind:
//!
//! 1. repay the external liquidity venue
//! 2. protocol's reserve-factor share of the earned spread
//! 3. LP share of the earned spread
//! 4. leftover excess, split between LPs and borrowers
//!
//! The four outputs always sum exactly to the redeemed total. That
//! conservation holds by construction (a running remaining budget) and is
//! the single most important property of the core; it is enforced by the
//! property suite, never by a runtime guard.

use anchor_lang::prelude::*;
use crate::math::{checked_add, checked_sub, min, mul_div_down, percent_mul, ray_mul_rounded, saturating_sub};

/// Inputs to the settlement waterfall
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistributionInputs {
    /// Collateral value redeemed at resolution (quote units)
    pub total_redeemed: u128,

    /// Outstanding debt owed to the external liquidity venue
    pub liquidity_layer_debt: u128,

    /// Spread realized at repay time before resolution
    pub accumulated_spread: u128,

    /// Reserve's scaled borrow aggregate
    pub total_scaled_borrowed: u128,

    /// Borrow index at resolution (RAY)
    pub current_borrow_index: u128,

    /// Borrowed principal still outstanding
    pub total_borrowed_principal: u128,

    /// Protocol cut of the spread (basis points)
    pub reserve_factor_bps: u64,

    /// LP share of the post-spread excess (basis points)
    pub lp_share_of_excess_bps: u64,
}

/// The four pools produced by the waterfall
#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolutionDistribution {
    /// Tier 1: repayment to the external liquidity venue
    pub to_liquidity_layer: u128,

    /// Tier 2: protocol revenue
    pub protocol_pool: u128,

    /// Tiers 3+4: LP spread plus LP share of the excess
    pub lp_pool: u128,

    /// Tier 4: borrower share of the excess
    pub borrower_pool: u128,
}

/// Split the redeemed collateral value across the four claimants.
pub fn distribute_at_resolution(inputs: &DistributionInputs) -> Result<ResolutionDistribution> {
    let mut remaining = inputs.total_redeemed;

    // Tier 1: the liquidity venue is made whole first.
    let to_liquidity_layer = min(remaining, inputs.liquidity_layer_debt);
    remaining = checked_sub(remaining, to_liquidity_layer)?;

    // Total spread = realized plus the index-accrued portion the
    // principal tracker has not seen. Clamped; index monotonicity should
    // keep it nonnegative.
    let unrealized = saturating_sub(
        ray_mul_rounded(inputs.total_scaled_borrowed, inputs.current_borrow_index)?,
        inputs.total_borrowed_principal,
    );
    let total_spread = checked_add(inputs.accumulated_spread, unrealized)?;
    let protocol_spread = percent_mul(total_spread, inputs.reserve_factor_bps)?;
    let lp_spread = checked_sub(total_spread, protocol_spread)?;

    // Tier 2: protocol revenue, partially if short.
    let protocol_pool = min(remaining, protocol_spread);
    remaining = checked_sub(remaining, protocol_pool)?;

    // Tier 3: LP spread, partially if short.
    let lp_from_spread = min(remaining, lp_spread);
    remaining = checked_sub(remaining, lp_from_spread)?;

    // Tier 4: whatever is left splits between LPs and borrowers.
    let lp_excess = percent_mul(remaining, inputs.lp_share_of_excess_bps)?;
    let borrower_pool = checked_sub(remaining, lp_excess)?;

    Ok(ResolutionDistribution {
        to_liquidity_layer,
        protocol_pool,
        lp_pool: checked_add(lp_from_spread, lp_excess)?,
        borrower_pool,
    })
}

impl ResolutionDistribution {
    /// Sum of the four pools; equals the redeemed total by construction.
    pub fn total(&self) -> u128 {
        self.to_liquidity_layer + self.protocol_pool + self.lp_pool + self.borrower_pool
    }
}

/// LP claim on the pool, pro rata by scaled supply.
///
/// Floor rounding means the claims of all suppliers can never sum past
/// the pool; the dust stays with the protocol.
pub fn lp_claim(
    user_scaled_supply: u128,
    total_scaled_supplied: u128,
    lp_pool: u128,
) -> Result<u128> {
    if total_scaled_supplied == 0 {
        return Ok(0);
    }
    mul_div_down(lp_pool, user_scaled_supply, total_scaled_supplied)
}

/// Borrower claim on the excess pool, pro rata by posted collateral.
pub fn borrower_claim(
    user_collateral: u128,
    total_collateral: u128,
    borrower_pool: u128,
) -> Result<u128> {
    if total_collateral == 0 {
        return Ok(0);
    }
    mul_div_down(borrower_pool, user_collateral, total_collateral)
}
