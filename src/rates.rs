//! Kinked (two-slope) interest-rate model
//!
//! The spread rate is the protocol's premium over the underlying
//! liquidity venue's own rate. Below the optimal utilization the rate
//! climbs gently along slope1; above it, slope2 takes over and the rate
//! climbs steeply to pull utilization back down. With both slopes
//! non-negative the rate is non-decreasing in utilization, which the
//! property suite verifies.
//!
//! Rates are annual and RAY-scaled throughout.

use anchor_lang::prelude::*;
use crate::constants::RAY;
use crate::math::{checked_add, mul_div_down, ray_mul_down, saturating_sub};
use crate::state::RiskParameters;

/// Utilization rate (RAY-scaled): borrowed principal over supplied principal
///
/// Defined as 0 when nothing is supplied.
pub fn utilization(total_borrowed: u128, total_supplied: u128) -> Result<u128> {
    if total_supplied == 0 {
        return Ok(0);
    }
    mul_div_down(total_borrowed, RAY, total_supplied)
}

/// Annual spread rate at the current utilization
///
/// At or below the kink: `base + slope1 * u`.
/// Above the kink: `base + slope1 * u_opt + slope2 * (u - u_opt)`.
pub fn compute_spread_rate(
    total_borrowed: u128,
    total_supplied: u128,
    params: &RiskParameters,
) -> Result<u128> {
    let utilization = utilization(total_borrowed, total_supplied)?;

    if utilization <= params.optimal_utilization {
        let variable = ray_mul_down(params.slope1, utilization)?;
        return checked_add(params.base_spread_rate, variable);
    }

    let rate_at_kink = checked_add(
        params.base_spread_rate,
        ray_mul_down(params.slope1, params.optimal_utilization)?,
    )?;
    let excess = saturating_sub(utilization, params.optimal_utilization);
    let excess_rate = ray_mul_down(params.slope2, excess)?;
    checked_add(rate_at_kink, excess_rate)
}

/// Gross annual supplier rate: `spread_rate * utilization`
///
/// The reserve-factor cut is applied only at the distribution layer,
/// never here.
pub fn compute_lp_rate(spread_rate: u128, utilization: u128) -> Result<u128> {
    ray_mul_down(spread_rate, utilization)
}
