//! Market settlement record
//!
//! Written exactly once when the prediction market resolves and the
//! redeemed collateral value has been run through the distribution
//! waterfall. Immutable thereafter; claims only ever draw the pools down.

use anchor_lang::prelude::*;
use crate::distribution::ResolutionDistribution;
use crate::errors::LendingError;

/// Immutable outcome of a market's settlement
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolutionRecord {
    /// Set once the market has settled
    pub resolved: bool,

    /// Timestamp of settlement
    pub resolution_timestamp: i64,

    /// Final outcome-token price (WAD-scaled)
    pub final_price: u128,

    /// Pool claimable pro rata by scaled supply
    pub lp_pool: u128,

    /// Pool claimable pro rata by posted collateral
    pub borrower_pool: u128,

    /// Protocol revenue pool
    pub protocol_pool: u128,

    /// Total collateral value redeemed at settlement
    pub total_collateral_redeemed: u128,

    /// Portion repaid to the external liquidity venue
    pub amount_repaid_to_liquidity_layer: u128,
}

impl ResolutionRecord {
    /// Build the record from a settled waterfall distribution.
    ///
    /// Errors if the market was already resolved; the record is
    /// create-once by contract.
    pub fn settle(
        previous: &ResolutionRecord,
        now: i64,
        final_price: u128,
        total_redeemed: u128,
        distribution: &ResolutionDistribution,
    ) -> Result<ResolutionRecord> {
        require!(!previous.resolved, LendingError::AlreadyResolved);

        Ok(ResolutionRecord {
            resolved: true,
            resolution_timestamp: now,
            final_price,
            lp_pool: distribution.lp_pool,
            borrower_pool: distribution.borrower_pool,
            protocol_pool: distribution.protocol_pool,
            total_collateral_redeemed: total_redeemed,
            amount_repaid_to_liquidity_layer: distribution.to_liquidity_layer,
        })
    }
}
