//! 256-bit intermediates for full-precision u128 mul-div
//!
//! Ray-base products (1e27 x 1e27) do not fit in u128, so every mul-div
//! routes through a 256-bit product held as a (hi, lo) u128 pair.

/// Multiply two u128 values into a full 256-bit (hi, lo) product.
///
/// Schoolbook multiplication over 64-bit limbs; cannot overflow.
pub(crate) fn widening_mul(a: u128, b: u128) -> (u128, u128) {
    const LO_MASK: u128 = u64::MAX as u128;

    let a_lo = a & LO_MASK;
    let a_hi = a >> 64;
    let b_lo = b & LO_MASK;
    let b_hi = b >> 64;

    let ll = a_lo * b_lo;
    let lh = a_lo * b_hi;
    let hl = a_hi * b_lo;
    let hh = a_hi * b_hi;

    // Middle column: carries out of the low limb plus both cross terms.
    let mid = (ll >> 64) + (lh & LO_MASK) + (hl & LO_MASK);

    let lo = (mid << 64) | (ll & LO_MASK);
    let hi = hh + (lh >> 64) + (hl >> 64) + (mid >> 64);

    (hi, lo)
}

/// Add a u128 into a (hi, lo) pair, carrying into the high limb.
///
/// Returns None if the 256-bit value itself overflows.
pub(crate) fn add_wide(hi: u128, lo: u128, addend: u128) -> Option<(u128, u128)> {
    let (lo, carry) = lo.overflowing_add(addend);
    let hi = hi.checked_add(carry as u128)?;
    Some((hi, lo))
}

/// Divide a 256-bit (hi, lo) value by a u128 divisor, rounding down.
///
/// Returns None when the divisor is zero or the quotient does not fit
/// in u128 (hi >= divisor).
pub(crate) fn div_wide(hi: u128, lo: u128, divisor: u128) -> Option<u128> {
    if divisor == 0 {
        return None;
    }
    if hi == 0 {
        return Some(lo / divisor);
    }
    if hi >= divisor {
        return None;
    }

    // Bit-by-bit long division. The running remainder stays below the
    // divisor, so a carry out of the shift means the shifted remainder
    // exceeds any u128 divisor and the quotient bit is certain.
    let mut rem = hi;
    let mut quo = 0u128;
    for i in (0..128).rev() {
        let carry = rem >> 127;
        rem = (rem << 1) | ((lo >> i) & 1);
        if carry == 1 || rem >= divisor {
            rem = rem.wrapping_sub(divisor);
            quo |= 1 << i;
        }
    }

    Some(quo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widening_mul_small() {
        assert_eq!(widening_mul(6, 7), (0, 42));
        assert_eq!(widening_mul(0, u128::MAX), (0, 0));
    }

    #[test]
    fn test_widening_mul_max() {
        // (2^128 - 1)^2 = 2^256 - 2^129 + 1
        let (hi, lo) = widening_mul(u128::MAX, u128::MAX);
        assert_eq!(hi, u128::MAX - 1);
        assert_eq!(lo, 1);
    }

    #[test]
    fn test_div_wide_narrow() {
        assert_eq!(div_wide(0, 100, 7), Some(14));
        assert_eq!(div_wide(0, 100, 0), None);
    }

    #[test]
    fn test_div_wide_wide() {
        // (a * b) / b == a for values whose product needs the high limb
        let a = u128::MAX / 3;
        let b = 5u128;
        let (hi, lo) = widening_mul(a, b);
        assert!(hi > 0 || lo / b == a);
        assert_eq!(div_wide(hi, lo, b), Some(a));
    }

    #[test]
    fn test_div_wide_quotient_overflow() {
        let (hi, lo) = widening_mul(u128::MAX, 2);
        assert_eq!(div_wide(hi, lo, 1), None);
    }

    #[test]
    fn test_add_wide_carry() {
        let (hi, lo) = add_wide(0, u128::MAX, 1).unwrap();
        assert_eq!((hi, lo), (1, 0));
        assert!(add_wide(u128::MAX, u128::MAX, 1).is_none());
    }
}
