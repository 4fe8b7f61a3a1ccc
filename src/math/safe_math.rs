//! Checked u128 arithmetic with protocol error codes

use anchor_lang::prelude::*;
use crate::errors::LendingError;

/// Checked addition with custom error
#[inline]
pub fn checked_add(a: u128, b: u128) -> Result<u128> {
    a.checked_add(b).ok_or_else(|| LendingError::MathOverflow.into())
}

/// Checked subtraction with custom error
#[inline]
pub fn checked_sub(a: u128, b: u128) -> Result<u128> {
    a.checked_sub(b).ok_or_else(|| LendingError::MathUnderflow.into())
}

/// Checked multiplication with custom error
#[inline]
pub fn checked_mul(a: u128, b: u128) -> Result<u128> {
    a.checked_mul(b).ok_or_else(|| LendingError::MathOverflow.into())
}

/// Checked division with custom error
#[inline]
pub fn checked_div(a: u128, b: u128) -> Result<u128> {
    if b == 0 {
        return Err(LendingError::DivisionByZero.into());
    }
    Ok(a / b)
}

/// Saturating subtraction (returns 0 instead of underflow)
///
/// Used for the defensive clamps of quantities that should never go
/// negative under correct index monotonicity.
#[inline]
pub fn saturating_sub(a: u128, b: u128) -> u128 {
    a.saturating_sub(b)
}

/// Get the minimum of two values
#[inline]
pub fn min(a: u128, b: u128) -> u128 {
    if a < b { a } else { b }
}

/// Get the maximum of two values
#[inline]
pub fn max(a: u128, b: u128) -> u128 {
    if a > b { a } else { b }
}
