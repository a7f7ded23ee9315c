//! Program constants for the AURA Staking program.
//!
//! PDA seeds, time units, basis-point scales and the limits enforced on
//! administrative input.

/// Seed for deriving the staking pool PDA (with the AURA mint)
pub const STAKING_POOL_SEED: &[u8] = b"staking_pool";

/// Seed for deriving the stake vault PDA (with the staking pool)
pub const STAKE_VAULT_SEED: &[u8] = b"stake_vault";

/// Seed for deriving the reward vault PDA (with the staking pool)
pub const REWARD_VAULT_SEED: &[u8] = b"reward_vault";

/// Seed for deriving user stake PDAs (with the owner and the staking pool)
pub const USER_STAKE_SEED: &[u8] = b"user_stake";

/// Number of seconds in a day
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Basis points denominator (100% = 10000 basis points)
pub const BASIS_POINTS_DENOMINATOR: u64 = 10_000;

/// Fee charged on every unstake (0.5% = 50 basis points)
pub const UNSTAKE_FEE_BPS: u64 = 50;

/// Maximum daily reward rate (10% per day = 1000 basis points)
pub const MAX_REWARD_RATE_PER_DAY: u64 = 1_000;
