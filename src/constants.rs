//! Protocol constants and fixed-point bases

// === Fixed-Point Constants ===

/// WAD = 1e18, base for amounts, prices and health factors
pub const WAD: u128 = 1_000_000_000_000_000_000;

/// RAY = 1e27, base for rates and indices (extra headroom for compounding)
pub const RAY: u128 = 1_000_000_000_000_000_000_000_000_000;

/// RAY / WAD, for moving values between the two bases
pub const WAD_RAY_RATIO: u128 = 1_000_000_000;

/// Basis points denominator
pub const BPS: u64 = 10_000;

// === Interest Rate Constants ===

/// Seconds per year for annual-to-per-second rate conversions
pub const SECONDS_PER_YEAR: u128 = 31_536_000;

// === Health Factor Constants ===

/// Sentinel health factor for positions with zero debt
pub const MAX_HEALTH_FACTOR: u128 = u128::MAX;

// === Protocol Limits ===

/// Maximum reserve factor (50% = 5000 basis points)
pub const MAX_RESERVE_FACTOR_BPS: u64 = 5_000;

/// Maximum liquidation bonus (50% = 5000 basis points)
pub const MAX_LIQUIDATION_BONUS_BPS: u64 = 5_000;
