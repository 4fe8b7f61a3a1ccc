//! Per-user position records
//!
//! A `UserPosition` tracks one borrower in one market; a `SupplyPosition`
//! tracks one liquidity provider. Both are created by the shell on first
//! use and zeroed on full exit.

use anchor_lang::prelude::*;

/// Borrower position in a single market
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserPosition {
    /// Outcome tokens posted as collateral (raw units, no index)
    pub collateral_amount: u128,

    /// Borrowed principal drawn (excludes accrued spread)
    pub borrow_amount: u128,

    /// Debt scaled by the borrow index at draw time
    pub scaled_debt_balance: u128,
}

impl UserPosition {
    pub fn is_empty(&self) -> bool {
        self.collateral_amount == 0 && self.borrow_amount == 0 && self.scaled_debt_balance == 0
    }

    pub fn has_debt(&self) -> bool {
        self.scaled_debt_balance > 0
    }

    pub fn has_collateral(&self) -> bool {
        self.collateral_amount > 0
    }

    /// Zero the position after full repay or full liquidation
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Liquidity-provider position in a single market
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SupplyPosition {
    /// Deposited principal (excludes accrued yield)
    pub supply_amount: u128,

    /// Deposit scaled by the liquidity index at deposit time
    pub scaled_supply_balance: u128,
}

impl SupplyPosition {
    pub fn is_empty(&self) -> bool {
        self.supply_amount == 0 && self.scaled_supply_balance == 0
    }

    /// Zero the position after the full post-resolution claim
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_position_empty() {
        let mut position = UserPosition {
            collateral_amount: 100,
            borrow_amount: 50,
            scaled_debt_balance: 50,
        };
        assert!(!position.is_empty());
        assert!(position.has_debt());
        assert!(position.has_collateral());

        position.clear();
        assert!(position.is_empty());
        assert!(!position.has_debt());
    }

    #[test]
    fn test_supply_position_empty() {
        let mut position = SupplyPosition {
            supply_amount: 1_000,
            scaled_supply_balance: 1_000,
        };
        assert!(!position.is_empty());

        position.clear();
        assert!(position.is_empty());
    }
}
