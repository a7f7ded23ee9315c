//! Error types for the AURA Staking program.
//!
//! Every failure aborts the whole instruction; nothing is retried on-chain.
//!
//! ## Error Code Ranges
//! - 6000-6004: Input validation errors
//! - 6005-6008: State/balance errors
//! - 6009: Math errors
//! - 6010: Authorization errors
//! - 6011-6012: Account validation errors

use anchor_lang::prelude::*;

/// Custom error codes for the AURA Staking program.
///
/// Error codes start at 6000 (Anchor's custom error offset).
#[error_code]
pub enum StakingError {
    // ========== Input Validation Errors ==========

    /// [6000] Amount arguments must be non-zero.
    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    /// [6001] Reward rate exceeds MAX_REWARD_RATE_PER_DAY.
    #[msg("Reward rate exceeds maximum of 1000 basis points per day")]
    RewardRateTooHigh,

    /// [6002] Authority cannot be the default pubkey.
    #[msg("Invalid pool authority")]
    InvalidAuthority,

    /// [6003] Pool already exists for this mint.
    #[msg("Staking pool is already initialized")]
    AlreadyInitialized,

    /// [6004] Pool paused by the authority.
    #[msg("Staking pool is paused")]
    PoolPaused,

    // ========== State/Balance Errors ==========

    /// [6005] Caller token account cannot cover the requested amount.
    #[msg("Insufficient funds in source token account")]
    InsufficientFunds,

    /// [6006] Unstake amount exceeds the position's staked amount.
    #[msg("Unstake amount exceeds staked balance")]
    InsufficientStake,

    /// [6007] Reward vault cannot pay out the claimable rewards.
    #[msg("Reward vault has insufficient funds for this claim")]
    InsufficientRewardFunds,

    /// [6008] Stake vault holds less than the requested principal
    /// (only reachable after an emergency withdrawal).
    #[msg("Stake vault balance is insufficient")]
    InsufficientVaultBalance,

    // ========== Math Errors ==========

    /// [6009] Arithmetic overflow occurred during calculation.
    #[msg("Arithmetic overflow occurred during calculation")]
    MathOverflow,

    // ========== Authorization Errors ==========

    /// [6010] Caller is not the pool authority or the position owner.
    #[msg("Unauthorized")]
    Unauthorized,

    // ========== Account Validation Errors ==========

    /// [6011] Token account mint does not match the pool's AURA mint.
    #[msg("Token mint mismatch - wrong token for this pool")]
    MintMismatch,

    /// [6012] Position does not belong to this pool.
    #[msg("User stake account does not belong to this pool")]
    StakePoolMismatch,
}
