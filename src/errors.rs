use anchor_lang::prelude::*;

#[error_code]
pub enum LendingError {
    // === Input Validation Errors (6000-6019) ===
    #[msg("Amount must be greater than zero")]
    ZeroAmount = 6000,

    #[msg("Price must be greater than zero")]
    ZeroPrice = 6001,

    #[msg("Optimal utilization must be in (0, 100%]")]
    InvalidUtilizationTarget = 6002,

    #[msg("Basis-point parameter exceeds 10000")]
    InvalidBps = 6003,

    #[msg("LTV must not exceed the liquidation threshold")]
    InvalidLtvThreshold = 6004,

    #[msg("Reserve factor exceeds maximum allowed")]
    ReserveFactorTooHigh = 6005,

    #[msg("Liquidation bonus exceeds maximum allowed")]
    LiquidationBonusTooHigh = 6006,

    // === Accrual Errors (6020-6029) ===
    #[msg("Accrual timestamp precedes last update")]
    TimestampRegression = 6020,

    // === Resolution Errors (6030-6039) ===
    #[msg("Market is already resolved")]
    AlreadyResolved = 6030,

    // === Math Errors (6040-6049) ===
    #[msg("Math overflow")]
    MathOverflow = 6040,

    #[msg("Math underflow")]
    MathUnderflow = 6041,

    #[msg("Division by zero")]
    DivisionByZero = 6042,
}
