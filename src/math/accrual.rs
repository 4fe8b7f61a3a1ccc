//! Compounding index advancement
//!
//! Both indices start at RAY and only ever grow. The borrow index
//! compounds at the spread rate, the liquidity index at the gross LP
//! rate; each account's balance growth is implicit in the index growth
//! (see `scaled`).

use anchor_lang::prelude::*;
use crate::constants::{RAY, SECONDS_PER_YEAR};
use crate::errors::LendingError;
use crate::rates::{compute_lp_rate, compute_spread_rate, utilization};
use crate::state::{ReserveState, RiskParameters};
use super::fixed_point::{ray_mul_rounded, ray_taylor_compounded};
use super::safe_math::{checked_add, saturating_sub};

/// Result of advancing a reserve's indices to a new timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexAccrual {
    /// New compounding debt index (RAY)
    pub borrow_index: u128,

    /// New compounding supply index (RAY)
    pub liquidity_index: u128,

    /// Aggregate spread accrued beyond the tracked principal, read at the
    /// new borrow index. Cumulative and unrealized; the shell folds it
    /// into `accumulated_spread` only when debt is actually repaid.
    pub spread_earned: u128,
}

/// Advance both indices from the reserve's last update to `now`.
///
/// Uninitialized reserves are seeded at RAY with no economic effect; a
/// call at the stored timestamp is an identity. Idempotent at any fixed
/// timestamp, and sub-interval calls compose multiplicatively to within
/// the Taylor truncation error.
pub fn advance_indices(
    reserve: &ReserveState,
    params: &RiskParameters,
    now: i64,
) -> Result<IndexAccrual> {
    if !reserve.is_initialized() {
        return Ok(IndexAccrual {
            borrow_index: RAY,
            liquidity_index: RAY,
            spread_earned: 0,
        });
    }

    require!(
        now >= reserve.last_update_timestamp,
        LendingError::TimestampRegression
    );

    if now == reserve.last_update_timestamp {
        return Ok(IndexAccrual {
            borrow_index: reserve.variable_borrow_index,
            liquidity_index: reserve.liquidity_index,
            spread_earned: spread_earned(reserve, reserve.variable_borrow_index)?,
        });
    }

    let elapsed = (now - reserve.last_update_timestamp) as u128;

    let total_supplied = reserve.total_supplied();
    let spread_rate = compute_spread_rate(reserve.total_borrowed, total_supplied, params)?;
    let lp_rate = compute_lp_rate(
        spread_rate,
        utilization(reserve.total_borrowed, total_supplied)?,
    )?;

    let borrow_index = grow_index(reserve.variable_borrow_index, spread_rate, elapsed)?;
    let liquidity_index = grow_index(reserve.liquidity_index, lp_rate, elapsed)?;

    Ok(IndexAccrual {
        borrow_index,
        liquidity_index,
        spread_earned: spread_earned(reserve, borrow_index)?,
    })
}

/// Advance the indices and write them into a new reserve value.
///
/// Value-in, value-out: the caller persists the returned state.
pub fn accrue(
    mut reserve: ReserveState,
    params: &RiskParameters,
    now: i64,
) -> Result<(ReserveState, IndexAccrual)> {
    let accrual = advance_indices(&reserve, params, now)?;

    reserve.variable_borrow_index = accrual.borrow_index;
    reserve.liquidity_index = accrual.liquidity_index;
    reserve.last_update_timestamp = now;

    Ok((reserve, accrual))
}

/// `new_index = old_index * (RAY + compound(annual_rate / year, dt))`
fn grow_index(index: u128, annual_rate: u128, elapsed: u128) -> Result<u128> {
    let rate_per_second = annual_rate / SECONDS_PER_YEAR;
    let growth = ray_taylor_compounded(rate_per_second, elapsed)?;
    ray_mul_rounded(index, checked_add(RAY, growth)?)
}

/// Clamped aggregate spread: `scaled_borrowed * index - principal`
///
/// The subtraction should never go negative under index monotonicity;
/// clamping protects the invariant rather than signaling an error.
fn spread_earned(reserve: &ReserveState, borrow_index: u128) -> Result<u128> {
    let debt = ray_mul_rounded(reserve.total_scaled_borrowed, borrow_index)?;
    Ok(saturating_sub(debt, reserve.total_borrowed))
}
