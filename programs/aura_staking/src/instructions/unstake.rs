//! Unstake instruction handler.
//!
//! Handles withdrawing staked tokens from the pool. Every withdrawal pays a
//! flat 0.5% fee, which is moved from the stake vault into the reward vault.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::Unstaked;
use crate::instructions::stake::accrue_rewards;
use crate::state::{StakingPool, UserStake};

/// Accounts required for unstaking.
#[derive(Accounts)]
pub struct Unstake<'info> {
    /// The stake pool.
    #[account(
        mut,
        seeds = [STAKING_POOL_SEED, staking_pool.aura_mint.as_ref()],
        bump = staking_pool.bump,
        has_one = stake_vault,
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

    /// Pool's stake vault.
    #[account(mut)]
    pub stake_vault: Account<'info, TokenAccount>,

    /// Pool's reward vault, receives the unstake fee.
    #[account(mut)]
    pub reward_vault: Account<'info, TokenAccount>,

    /// User's token account for receiving unstaked tokens.
    #[account(
        mut,
        constraint = user_token_account.mint == staking_pool.aura_mint @ StakingError::MintMismatch,
        constraint = user_token_account.owner == user.key() @ StakingError::Unauthorized
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// The user unstaking tokens.
    #[account(mut)]
    pub user: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

/// Unstake tokens from the pool.
///
/// # Arguments
/// * `ctx` - Unstake accounts context
/// * `amount` - Principal to withdraw, before the fee
pub fn handler(ctx: Context<Unstake>, amount: u64) -> Result<()> {
    let staking_pool = &ctx.accounts.staking_pool;

    require!(!staking_pool.withdrawals_blocked(), StakingError::PoolPaused);
    require!(amount > 0, StakingError::ZeroAmount);
    require!(
        ctx.accounts.user_stake.amount >= amount,
        StakingError::InsufficientStake
    );
    require!(
        ctx.accounts.stake_vault.amount >= amount,
        StakingError::InsufficientVaultBalance
    );

    let clock = Clock::get()?;
    let (fee, received) = calculate_unstake_fee(amount)?;

    // Transfer tokens from vault using PDA signer
    let aura_mint_key = staking_pool.aura_mint;
    let seeds = &[
        STAKING_POOL_SEED,
        aura_mint_key.as_ref(),
        &[staking_pool.bump],
    ];
    let signer_seeds = &[&seeds[..]];

    let cpi_accounts = Transfer {
        from: ctx.accounts.stake_vault.to_account_info(),
        to: ctx.accounts.user_token_account.to_account_info(),
        authority: ctx.accounts.staking_pool.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
    token::transfer(cpi_ctx, received)?;

    if fee > 0 {
        let cpi_accounts = Transfer {
            from: ctx.accounts.stake_vault.to_account_info(),
            to: ctx.accounts.reward_vault.to_account_info(),
            authority: ctx.accounts.staking_pool.to_account_info(),
        };
        let cpi_program = ctx.accounts.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
        token::transfer(cpi_ctx, fee)?;
    }

    let staking_pool_key = ctx.accounts.staking_pool.key();
    let user_stake = &mut ctx.accounts.user_stake;
    let staking_pool = &mut ctx.accounts.staking_pool;

    accrue_rewards(user_stake, staking_pool, clock.unix_timestamp)?;
    let closed_position = user_stake.withdraw(amount)?;
    staking_pool.record_unstake(amount, fee, closed_position, clock.unix_timestamp)?;

    msg!("Unstaked {} tokens (fee: {}, received: {})", amount, fee, received);
    msg!("Remaining staked: {}", user_stake.amount);
    msg!("Pending rewards: {}", user_stake.pending_rewards);

    emit!(Unstaked {
        staking_pool: staking_pool_key,
        user: ctx.accounts.user.key(),
        amount,
        fee,
        received,
        remaining_stake: user_stake.amount,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

/// Splits an unstake into `(fee, received)`.
///
/// fee = floor(amount * 50 / 10000), received = amount - fee.
pub fn calculate_unstake_fee(amount: u64) -> Result<(u64, u64)> {
    let fee = (amount as u128)
        .checked_mul(UNSTAKE_FEE_BPS as u128)
        .ok_or(StakingError::MathOverflow)?
        .checked_div(BASIS_POINTS_DENOMINATOR as u128)
        .ok_or(StakingError::MathOverflow)?;
    let fee = u64::try_from(fee).map_err(|_| StakingError::MathOverflow)?;
    let received = amount.checked_sub(fee).ok_or(StakingError::MathOverflow)?;
    Ok((fee, received))
}
