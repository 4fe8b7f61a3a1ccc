//! Fixed-point arithmetic at the WAD (1e18) and RAY (1e27) bases
//!
//! All operations run through 256-bit intermediates, so full-precision
//! ray-on-ray products are safe. Rounding is always explicit.

use anchor_lang::prelude::*;
use crate::errors::LendingError;
use crate::constants::{WAD, RAY, BPS};
use super::safe_math::{checked_add, checked_mul};
use super::wide::{widening_mul, add_wide, div_wide};

/// Multiply then divide, rounding DOWN
///
/// Order: (a * b) / c with a 256-bit intermediate product.
pub fn mul_div_down(a: u128, b: u128, c: u128) -> Result<u128> {
    if c == 0 {
        return Err(LendingError::DivisionByZero.into());
    }

    if a == 0 || b == 0 {
        return Ok(0);
    }

    let (hi, lo) = widening_mul(a, b);
    div_wide(hi, lo, c).ok_or_else(|| LendingError::MathOverflow.into())
}

/// Multiply then divide, rounding UP
///
/// Formula: (a * b + c - 1) / c
pub fn mul_div_up(a: u128, b: u128, c: u128) -> Result<u128> {
    if c == 0 {
        return Err(LendingError::DivisionByZero.into());
    }

    if a == 0 || b == 0 {
        return Ok(0);
    }

    let (hi, lo) = widening_mul(a, b);
    let (hi, lo) = add_wide(hi, lo, c - 1).ok_or(LendingError::MathOverflow)?;
    div_wide(hi, lo, c).ok_or_else(|| LendingError::MathOverflow.into())
}

/// Multiply then divide, rounding HALF-UP
///
/// Formula: (a * b + c / 2) / c
pub fn mul_div_rounded(a: u128, b: u128, c: u128) -> Result<u128> {
    if c == 0 {
        return Err(LendingError::DivisionByZero.into());
    }

    if a == 0 || b == 0 {
        return Ok(0);
    }

    let (hi, lo) = widening_mul(a, b);
    let (hi, lo) = add_wide(hi, lo, c / 2).ok_or(LendingError::MathOverflow)?;
    div_wide(hi, lo, c).ok_or_else(|| LendingError::MathOverflow.into())
}

/// WAD multiplication (a * b / WAD), rounded down
#[inline]
pub fn wad_mul_down(a: u128, b: u128) -> Result<u128> {
    mul_div_down(a, b, WAD)
}

/// WAD division (a * WAD / b), rounded down
#[inline]
pub fn wad_div_down(a: u128, b: u128) -> Result<u128> {
    mul_div_down(a, WAD, b)
}

/// RAY multiplication (a * b / RAY), rounded down
#[inline]
pub fn ray_mul_down(a: u128, b: u128) -> Result<u128> {
    mul_div_down(a, b, RAY)
}

/// RAY multiplication (a * b / RAY), rounded half-up
#[inline]
pub fn ray_mul_rounded(a: u128, b: u128) -> Result<u128> {
    mul_div_rounded(a, b, RAY)
}

/// RAY division (a * RAY / b), rounded half-up
#[inline]
pub fn ray_div_rounded(a: u128, b: u128) -> Result<u128> {
    mul_div_rounded(a, RAY, b)
}

/// Basis-point fraction of an amount (amount * bps / 10000), rounded down
#[inline]
pub fn percent_mul(amount: u128, bps: u64) -> Result<u128> {
    mul_div_down(amount, bps as u128, BPS as u128)
}

/// Rebase a value between decimal bases, e.g. collateral decimals to
/// quote decimals. Scaling up is exact; scaling down truncates to the
/// target base.
pub fn scale_decimals(value: u128, from_decimals: u8, to_decimals: u8) -> Result<u128> {
    if from_decimals == to_decimals {
        return Ok(value);
    }
    if to_decimals > from_decimals {
        let factor = pow10(to_decimals - from_decimals)?;
        return checked_mul(value, factor);
    }
    let factor = pow10(from_decimals - to_decimals)?;
    Ok(value / factor)
}

fn pow10(exp: u8) -> Result<u128> {
    10u128
        .checked_pow(exp as u32)
        .ok_or_else(|| LendingError::MathOverflow.into())
}

/// Calculate compound growth using a Taylor expansion at RAY precision
///
/// e^(rate * time) - 1 ~ rt + (rt)^2/2 + (rt)^3/6
///
/// Gives the growth to add on top of RAY to form an index multiplier.
///
/// # Arguments
/// * `rate` - Per-second rate (RAY-scaled)
/// * `time` - Elapsed seconds
pub fn ray_taylor_compounded(rate: u128, time: u128) -> Result<u128> {
    // rt (first term), RAY-scaled
    let rt = checked_mul(rate, time)?;

    if rt == 0 {
        return Ok(0);
    }

    // (rt)^2 / RAY, then halved
    let rt_squared = ray_mul_down(rt, rt)?;
    let second_term = rt_squared / 2;

    // (rt)^3 / RAY^2, then divided by six
    let rt_cubed_over_ray = ray_mul_down(rt_squared, rt)?;
    let third_term = rt_cubed_over_ray / 6;

    let result = checked_add(rt, second_term)?;
    checked_add(result, third_term)
}
