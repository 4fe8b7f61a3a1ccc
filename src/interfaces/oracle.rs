//! Price oracle data contract
//!
//! The shell fetches prices and forwards them in; the core only consumes
//! validated WAD-scaled quotes and never performs the fetch itself.

use anchor_lang::prelude::*;
use crate::errors::LendingError;

/// Source of outcome-token prices, implemented by the shell
pub trait PriceOracle {
    /// Current WAD-scaled price of one whole outcome token in the
    /// reference asset
    fn current_price(&self, token: &Pubkey) -> Result<u128>;
}

/// Reject prices the core cannot price against
pub fn validate_price(price_wad: u128) -> Result<()> {
    require!(price_wad > 0, LendingError::ZeroPrice);
    Ok(())
}
