//! Stake instruction handler.
//!
//! Handles staking AURA tokens into the pool, plus the accrual math shared by
//! every instruction that touches a position.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::Staked;
use crate::state::{StakingPool, UserStake};

/// Accounts required for staking.
#[derive(Accounts)]
pub struct Stake<'info> {
    /// The stake pool.
    #[account(
        mut,
        seeds = [STAKING_POOL_SEED, staking_pool.aura_mint.as_ref()],
        bump = staking_pool.bump,
        has_one = stake_vault
    )]
    pub staking_pool: Account<'info, StakingPool>,

    /// User's stake account (created if first time staking).
    #[account(
        init_if_needed,
        payer = user,
        space = UserStake::LEN,
        seeds = [USER_STAKE_SEED, user.key().as_ref(), staking_pool.key().as_ref()],
        bump
    )]
    pub user_stake: Account<'info, UserStake>,

    /// Pool's stake vault.
    #[account(mut)]
    pub stake_vault: Account<'info, TokenAccount>,

    /// User's token account for the staking token.
    #[account(
        mut,
        constraint = user_token_account.mint == staking_pool.aura_mint @ StakingError::MintMismatch,
        constraint = user_token_account.owner == user.key() @ StakingError::Unauthorized
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// The user staking tokens.
    #[account(mut)]
    pub user: Signer<'info>,

    pub token_program: Program<'info, Token>,

    pub system_program: Program<'info, System>,
}

/// Stake tokens into the pool.
///
/// Brings the pool reward index and the position up to date before the
/// principal changes, so the new deposit only earns from now on.
///
/// # Arguments
/// * `ctx` - Stake accounts context
/// * `amount` - Amount of tokens to stake
pub fn handler(ctx: Context<Stake>, amount: u64) -> Result<()> {
    let staking_pool = &ctx.accounts.staking_pool;

    require!(!staking_pool.staking_blocked(), StakingError::PoolPaused);
    require!(amount > 0, StakingError::ZeroAmount);
    require!(
        ctx.accounts.user_token_account.amount >= amount,
        StakingError::InsufficientFunds
    );

    let clock = Clock::get()?;

    // Transfer tokens from user to vault
    let cpi_accounts = Transfer {
        from: ctx.accounts.user_token_account.to_account_info(),
        to: ctx.accounts.stake_vault.to_account_info(),
        authority: ctx.accounts.user.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
    token::transfer(cpi_ctx, amount)?;

    let staking_pool_key = ctx.accounts.staking_pool.key();
    let user_key = ctx.accounts.user.key();
    let user_stake = &mut ctx.accounts.user_stake;
    let staking_pool = &mut ctx.accounts.staking_pool;

    if user_stake.is_new() {
        let reward_index = staking_pool.update_reward_index(clock.unix_timestamp)?;
        user_stake.open(
            user_key,
            staking_pool_key,
            ctx.bumps.user_stake,
            reward_index,
            clock.unix_timestamp,
        );
    }

    accrue_rewards(user_stake, staking_pool, clock.unix_timestamp)?;
    let opened_position = user_stake.deposit(amount)?;
    staking_pool.record_stake(amount, opened_position, clock.unix_timestamp)?;

    msg!("Staked {} tokens", amount);
    msg!("Total staked by user: {}", user_stake.amount);
    msg!("Pool total staked: {}", staking_pool.total_staked);

    emit!(Staked {
        staking_pool: staking_pool_key,
        user: user_key,
        amount,
        user_total: user_stake.amount,
        pool_total: staking_pool.total_staked,
        pending_rewards: user_stake.pending_rewards,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

/// Reward earned by `staked_amount` over a growth of the pool reward index.
///
/// The index grows by `rate * seconds`, so
/// rewards = staked_amount * index_growth / (10000 * seconds_per_day),
/// truncated toward zero.
pub fn calculate_reward(staked_amount: u64, index_growth: u128) -> Result<u64> {
    if staked_amount == 0 || index_growth == 0 {
        return Ok(0);
    }

    let denominator = (BASIS_POINTS_DENOMINATOR as u128)
        .checked_mul(SECONDS_PER_DAY as u128)
        .ok_or(StakingError::MathOverflow)?;

    let rewards = (staked_amount as u128)
        .checked_mul(index_growth)
        .ok_or(StakingError::MathOverflow)?
        .checked_div(denominator)
        .ok_or(StakingError::MathOverflow)?;

    let rewards_u64 = u64::try_from(rewards).map_err(|_| StakingError::MathOverflow)?;

    Ok(rewards_u64)
}

/// Rewards accrued between the position's index checkpoint and
/// `current_index` (not including rewards already pending).
pub fn calculate_pending_rewards(user_stake: &UserStake, current_index: u128) -> Result<u64> {
    let index_growth = current_index.saturating_sub(user_stake.reward_index_checkpoint);
    calculate_reward(user_stake.amount, index_growth)
}

/// Advances the pool reward index to `current_time`, brings the position's
/// pending rewards up to it and returns the newly accrued amount.
pub fn accrue_rewards(
    user_stake: &mut UserStake,
    staking_pool: &mut StakingPool,
    current_time: i64,
) -> Result<u64> {
    let reward_index = staking_pool.update_reward_index(current_time)?;
    let accrued = calculate_pending_rewards(user_stake, reward_index)?;
    user_stake.credit_rewards(accrued, reward_index, current_time)?;
    Ok(accrued)
}
