//! # AURA Staking Program
//!
//! Single-pool staking for the AURA token. Stakers earn a daily reward rate,
//! expressed in basis points, paid from a reward vault the authority funds.
//!
//! ## Features
//! - Lazy reward accrual against a pool-wide reward index, so rate changes
//!   never reprice time that has already passed
//! - Claim rewards without unstaking
//! - Flat 0.5% unstake fee, recycled into the reward vault
//! - Authority controls for the reward rate, pausing and pause scope
//! - Emergency withdrawals from either vault
//! - Safe math with overflow protection
//!
//! ## Trust model
//! The pool authority can drain both vaults through the emergency
//! withdrawal instructions. Stakers accept this when depositing.

use anchor_lang::prelude::*;

declare_id!("9SNiVmYxKDG6Y1uRs2e6ivmjsG49KPygvwqmNCooiw4m");

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;
use state::PauseScope;

#[program]
pub mod aura_staking {
    use super::*;

    /// Creates the pool registry and both vaults for the AURA mint.
    ///
    /// # Arguments
    /// * `authority` - Administrative account, must also pay for the accounts
    /// * `reward_rate_per_day` - Daily reward rate in basis points (27 = 0.27%)
    ///
    /// # Errors
    /// Returns an error if:
    /// - The pool already exists for this mint
    /// - The payer is not the authority
    /// - The rate exceeds the maximum
    pub fn initialize_pool(
        ctx: Context<InitializePool>,
        authority: Pubkey,
        reward_rate_per_day: u64,
    ) -> Result<()> {
        instructions::initialize_pool::handler(ctx, authority, reward_rate_per_day)
    }

    /// Funds the reward vault from the authority's token account.
    pub fn deposit_rewards(ctx: Context<DepositRewards>, amount: u64) -> Result<()> {
        instructions::deposit_rewards::handler(ctx, amount)
    }

    /// Stakes AURA tokens, creating the caller's position on first use.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The pool is paused
    /// - Amount is zero
    /// - Insufficient balance
    pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
        instructions::stake::handler(ctx, amount)
    }

    /// Withdraws staked principal minus the 0.5% unstake fee.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Amount exceeds staked balance
    /// - Amount is zero
    /// - The pool is paused with `PauseScope::All`
    pub fn unstake(ctx: Context<Unstake>, amount: u64) -> Result<()> {
        instructions::unstake::handler(ctx, amount)
    }

    /// Pays out all accrued rewards. Succeeds without a transfer when
    /// nothing has accrued.
    pub fn claim_rewards(ctx: Context<ClaimRewards>) -> Result<()> {
        instructions::claim_rewards::handler(ctx)
    }

    /// Admin function to change the daily reward rate.
    pub fn update_reward_rate(ctx: Context<AdminControl>, new_rate: u64) -> Result<()> {
        instructions::admin::update_reward_rate_handler(ctx, new_rate)
    }

    /// Admin function to pause or unpause the pool.
    pub fn set_pool_status(ctx: Context<AdminControl>, paused: bool) -> Result<()> {
        instructions::admin::set_pool_status_handler(ctx, paused)
    }

    /// Admin function to choose which operations a pause blocks.
    pub fn set_pause_scope(ctx: Context<AdminControl>, scope: PauseScope) -> Result<()> {
        instructions::admin::set_pause_scope_handler(ctx, scope)
    }

    /// Emergency: move principal from the stake vault to the authority.
    pub fn admin_withdraw_stake(ctx: Context<AdminWithdrawStake>, amount: u64) -> Result<()> {
        instructions::emergency_withdraw::withdraw_stake_handler(ctx, amount)
    }

    /// Emergency: move reward supply from the reward vault to the authority.
    pub fn admin_withdraw_rewards(ctx: Context<AdminWithdrawRewards>, amount: u64) -> Result<()> {
        instructions::emergency_withdraw::withdraw_rewards_handler(ctx, amount)
    }
}
