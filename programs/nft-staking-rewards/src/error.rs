use anchor_lang::prelude::*;

#[error_code]
pub enum StakeError {
    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("NFT already staked")]
    AlreadyStaked,

    #[msg("NFT not staked")]
    NotStaked,

    #[msg("NFT does not belong to the claimed collection")]
    InvalidAssetType,

    #[msg("Stake multiplier must be greater than zero")]
    InvalidMultiplier,

    #[msg("Insufficient funds in reward vault")]
    InsufficientVaultFunds,

    #[msg("Custody transfer failed")]
    CustodyTransferFailed,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    #[msg("Ledger invariant violated")]
    InvariantViolation,

    #[msg("Stake pool already initialized")]
    AlreadyInitialized,
}
