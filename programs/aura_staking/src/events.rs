use anchor_lang::prelude::*;

use crate::state::PauseScope;

#[event]
pub struct PoolInitialized {
    pub staking_pool: Pubkey,
    pub authority: Pubkey,
    pub aura_mint: Pubkey,
    pub reward_rate_per_day: u64,
    pub timestamp: i64,
}

#[event]
pub struct RewardsDeposited {
    pub staking_pool: Pubkey,
    pub amount: u64,
    pub reward_vault_balance: u64,
    pub timestamp: i64,
}

#[event]
pub struct Staked {
    pub staking_pool: Pubkey,
    pub user: Pubkey,
    pub amount: u64,
    pub user_total: u64,
    pub pool_total: u64,
    pub pending_rewards: u64,
    pub timestamp: i64,
}

#[event]
pub struct Unstaked {
    pub staking_pool: Pubkey,
    pub user: Pubkey,
    pub amount: u64,
    pub fee: u64,
    pub received: u64,
    pub remaining_stake: u64,
    pub timestamp: i64,
}

#[event]
pub struct RewardsClaimed {
    pub staking_pool: Pubkey,
    pub user: Pubkey,
    pub amount: u64,
    pub total_claimed: u64,
    pub timestamp: i64,
}

#[event]
pub struct RewardRateUpdated {
    pub staking_pool: Pubkey,
    pub old_rate: u64,
    pub new_rate: u64,
    pub timestamp: i64,
}

#[event]
pub struct PoolStatusChanged {
    pub staking_pool: Pubkey,
    pub paused: bool,
    pub timestamp: i64,
}

#[event]
pub struct PauseScopeChanged {
    pub staking_pool: Pubkey,
    pub scope: PauseScope,
    pub timestamp: i64,
}

/// Authority pulled tokens out of a vault outside normal accounting.
#[event]
pub struct EmergencyWithdrawal {
    pub staking_pool: Pubkey,
    pub vault: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}
