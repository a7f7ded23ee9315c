//! Claim rewards instruction handler.
//!
//! Handles claiming accumulated rewards without unstaking. A claim with
//! nothing accrued succeeds without moving tokens.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::RewardsClaimed;
use crate::instructions::stake::{accrue_rewards, calculate_pending_rewards};
use crate::state::{StakingPool, UserStake};

/// Accounts required for claiming rewards.
#[derive(Accounts)]
pub struct ClaimRewards<'info> {
    /// The stake pool.
    #[account(
        mut,
        seeds = [STAKING_POOL_SEED, staking_pool.aura_mint.as_ref()],
        bump = staking_pool.bump,
        has_one = reward_vault
    )]
    pub staking_pool: Account<'info, StakingPool>,

    /// User's stake account.
    #[account(
        mut,
        seeds = [USER_STAKE_SEED, user.key().as_ref(), staking_pool.key().as_ref()],
        bump = user_stake.bump,
        constraint = user_stake.owner == user.key() @ StakingError::Unauthorized,
        constraint = user_stake.staking_pool == staking_pool.key() @ StakingError::StakePoolMismatch
    )]
    pub user_stake: Account<'info, UserStake>,

    /// Pool's reward vault.
    #[account(mut)]
    pub reward_vault: Account<'info, TokenAccount>,

    /// User's token account for receiving rewards.
    #[account(
        mut,
        constraint = user_token_account.mint == staking_pool.aura_mint @ StakingError::MintMismatch,
        constraint = user_token_account.owner == user.key() @ StakingError::Unauthorized
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// The user claiming rewards.
    pub user: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

/// Claim accumulated rewards from the reward vault.
pub fn handler(ctx: Context<ClaimRewards>) -> Result<()> {
    let staking_pool = &ctx.accounts.staking_pool;
    let user_stake = &ctx.accounts.user_stake;

    require!(!staking_pool.withdrawals_blocked(), StakingError::PoolPaused);

    let clock = Clock::get()?;

    let current_index = staking_pool.reward_index_at(clock.unix_timestamp)?;
    let newly_accrued = calculate_pending_rewards(user_stake, current_index)?;
    let total_claimable = user_stake
        .pending_rewards
        .checked_add(newly_accrued)
        .ok_or(StakingError::MathOverflow)?;

    if total_claimable > 0 {
        require!(
            ctx.accounts.reward_vault.amount >= total_claimable,
            StakingError::InsufficientRewardFunds
        );

        let aura_mint_key = staking_pool.aura_mint;
        let seeds = &[
            STAKING_POOL_SEED,
            aura_mint_key.as_ref(),
            &[staking_pool.bump],
        ];
        let signer_seeds = &[&seeds[..]];

        let cpi_accounts = Transfer {
            from: ctx.accounts.reward_vault.to_account_info(),
            to: ctx.accounts.user_token_account.to_account_info(),
            authority: ctx.accounts.staking_pool.to_account_info(),
        };
        let cpi_program = ctx.accounts.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
        token::transfer(cpi_ctx, total_claimable)?;
    }

    let staking_pool_key = ctx.accounts.staking_pool.key();
    let user_stake = &mut ctx.accounts.user_stake;
    let staking_pool = &mut ctx.accounts.staking_pool;

    accrue_rewards(user_stake, staking_pool, clock.unix_timestamp)?;
    let paid = user_stake.take_pending_rewards()?;
    staking_pool.record_claim(paid, clock.unix_timestamp)?;

    if paid == 0 {
        msg!("No rewards accrued yet, nothing transferred");
        return Ok(());
    }

    msg!("Claimed {} reward tokens", paid);
    msg!("Total rewards claimed by user: {}", user_stake.total_rewards_claimed);
    msg!("Total distributed from pool: {}", staking_pool.total_rewards_distributed);

    emit!(RewardsClaimed {
        staking_pool: staking_pool_key,
        user: ctx.accounts.user.key(),
        amount: paid,
        total_claimed: user_stake.total_rewards_claimed,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
