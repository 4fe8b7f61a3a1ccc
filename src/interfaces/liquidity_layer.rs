//! External liquidity venue data contract
//!
//! Deposits are routed through an external liquidity venue; the core only
//! ever sees point-in-time figures the shell fetched from it.

use anchor_lang::prelude::*;

/// Point-in-time view of the venue position, forwarded by the shell
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LiquidityLayerSnapshot {
    /// Debt currently owed to the venue (quote units)
    pub total_debt: u128,

    /// Deposit balance currently held at the venue (quote units)
    pub supply_balance: u128,
}

/// Adapter over the venue, implemented by the shell
pub trait LiquidityLayerAdapter {
    fn snapshot(&self) -> Result<LiquidityLayerSnapshot>;
}
