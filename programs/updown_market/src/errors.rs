use anchor_lang::prelude::*;

/// Failures raised by a market. Every variant maps to a distinct error code.
#[error_code]
pub enum MarketError {
    #[msg("Operation is not valid in the current market phase")]
    PhaseViolation,

    #[msg("Market has already been settled")]
    AlreadySettled,

    #[msg("Attached payment is below the quoted cost")]
    InsufficientPayment,

    #[msg("Market is paused")]
    Paused,

    #[msg("Only the market administrator can perform this operation")]
    Unauthorized,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Withdrawal exceeds collected funds")]
    InsufficientFunds,

    #[msg("Display name exceeds maximum length")]
    NameTooLong,

    #[msg("Display symbol exceeds maximum length")]
    SymbolTooLong,

    #[msg("Betting window must be positive")]
    InvalidWindow,
}
