//! Calculation core for lending against prediction-market outcome tokens
//!
//! Holders of outcome tokens borrow a reference asset against that
//! collateral; liquidity providers earn yield on deposits routed through
//! an external liquidity venue. This crate is the deterministic engine
//! behind that protocol: every rate, index, balance and settlement split
//! is computed here as a pure function over value records.
//!
//! ## Components
//! - Kinked two-slope interest-rate model (`rates`)
//! - Compounding index accrual with scaled-balance accounting (`math`)
//! - Collateral valuation, borrow capacity and health factor (`capacity`)
//! - Close-factor liquidation math (`liquidation`)
//! - Four-tier settlement waterfall with exact conservation (`distribution`)
//!
//! The surrounding shell owns storage, events, access control, token
//! transfers and oracle fetches. It reads current state, packages it into
//! the input records defined in `state` and `interfaces`, calls one core
//! function, and writes the returned records back. Time is always an
//! explicit parameter; the core never samples a clock, so every function
//! replays deterministically under test.

pub mod capacity;
pub mod constants;
pub mod distribution;
pub mod errors;
pub mod interfaces;
pub mod liquidation;
pub mod math;
pub mod rates;
pub mod state;

pub use capacity::{available_borrow, collateral_value, health_factor, is_healthy, max_borrow};
pub use distribution::{
    borrower_claim, distribute_at_resolution, lp_claim, DistributionInputs, ResolutionDistribution,
};
pub use errors::LendingError;
pub use liquidation::{compute_liquidation, LiquidationInputs, LiquidationOutcome};
pub use math::{accrue, advance_indices, to_real, to_scaled, IndexAccrual};
pub use rates::{compute_lp_rate, compute_spread_rate, utilization};
pub use state::{ReserveState, ResolutionRecord, RiskParameters, SupplyPosition, UserPosition};
