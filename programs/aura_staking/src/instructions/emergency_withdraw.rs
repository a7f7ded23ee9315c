//! Emergency withdrawal handlers.
//!
//! Let the authority pull tokens straight out of either vault, bypassing
//! position accounting. Depositors must trust the authority: after a stake
//! vault withdrawal the vault holds less than `total_staked`. The amount is
//! added to `emergency_withdrawn_stake`, a lifetime total.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::EmergencyWithdrawal;
use crate::state::StakingPool;

/// Accounts required to pull principal out of the stake vault.
#[derive(Accounts)]
pub struct AdminWithdrawStake<'info> {
    /// The stake pool; its PDA signs the vault transfer.
    #[account(
        mut,
        seeds = [STAKING_POOL_SEED, staking_pool.aura_mint.as_ref()],
        bump = staking_pool.bump,
        has_one = stake_vault
    )]
    pub staking_pool: Account<'info, StakingPool>,

    /// Pool's stake vault.
    #[account(mut)]
    pub stake_vault: Account<'info, TokenAccount>,

    /// Authority's token account receiving the withdrawal.
    #[account(
        mut,
        constraint = admin_token_account.mint == staking_pool.aura_mint
            @ StakingError::MintMismatch,
        constraint = admin_token_account.owner == admin.key() @ StakingError::Unauthorized
    )]
    pub admin_token_account: Account<'info, TokenAccount>,

    /// The pool authority.
    #[account(
        constraint = admin.key() == staking_pool.authority @ StakingError::Unauthorized
    )]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

/// Accounts required to pull reward supply out of the reward vault.
#[derive(Accounts)]
pub struct AdminWithdrawRewards<'info> {
    /// The stake pool; its PDA signs the vault transfer.
    #[account(
        mut,
        seeds = [STAKING_POOL_SEED, staking_pool.aura_mint.as_ref()],
        bump = staking_pool.bump,
        has_one = reward_vault
    )]
    pub staking_pool: Account<'info, StakingPool>,

    /// Pool's reward vault.
    #[account(mut)]
    pub reward_vault: Account<'info, TokenAccount>,

    /// Authority's token account receiving the withdrawal.
    #[account(
        mut,
        constraint = admin_token_account.mint == staking_pool.aura_mint
            @ StakingError::MintMismatch,
        constraint = admin_token_account.owner == admin.key() @ StakingError::Unauthorized
    )]
    pub admin_token_account: Account<'info, TokenAccount>,

    /// The pool authority.
    #[account(
        constraint = admin.key() == staking_pool.authority @ StakingError::Unauthorized
    )]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

/// Withdraw principal from the stake vault to the authority.
pub fn withdraw_stake_handler(ctx: Context<AdminWithdrawStake>, amount: u64) -> Result<()> {
    require!(amount > 0, StakingError::ZeroAmount);
    require!(
        ctx.accounts.stake_vault.amount >= amount,
        StakingError::InsufficientFunds
    );

    let staking_pool = &ctx.accounts.staking_pool;
    let aura_mint_key = staking_pool.aura_mint;
    let seeds = &[
        STAKING_POOL_SEED,
        aura_mint_key.as_ref(),
        &[staking_pool.bump],
    ];
    let signer_seeds = &[&seeds[..]];

    let cpi_accounts = Transfer {
        from: ctx.accounts.stake_vault.to_account_info(),
        to: ctx.accounts.admin_token_account.to_account_info(),
        authority: ctx.accounts.staking_pool.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
    token::transfer(cpi_ctx, amount)?;

    let clock = Clock::get()?;
    let staking_pool_key = ctx.accounts.staking_pool.key();
    let staking_pool = &mut ctx.accounts.staking_pool;
    staking_pool.record_emergency_stake_withdrawal(amount, clock.unix_timestamp)?;

    msg!(
        "[EMERGENCY] Admin {} withdrew {} from stake vault",
        ctx.accounts.admin.key(),
        amount
    );
    msg!(
        "[EMERGENCY] Total staked {}, lifetime withdrawn by admin {}",
        staking_pool.total_staked,
        staking_pool.emergency_withdrawn_stake
    );

    emit!(EmergencyWithdrawal {
        staking_pool: staking_pool_key,
        vault: ctx.accounts.stake_vault.key(),
        destination: ctx.accounts.admin_token_account.key(),
        amount,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

/// Withdraw reward supply from the reward vault to the authority.
pub fn withdraw_rewards_handler(ctx: Context<AdminWithdrawRewards>, amount: u64) -> Result<()> {
    require!(amount > 0, StakingError::ZeroAmount);
    require!(
        ctx.accounts.reward_vault.amount >= amount,
        StakingError::InsufficientFunds
    );

    let staking_pool = &ctx.accounts.staking_pool;
    let aura_mint_key = staking_pool.aura_mint;
    let seeds = &[
        STAKING_POOL_SEED,
        aura_mint_key.as_ref(),
        &[staking_pool.bump],
    ];
    let signer_seeds = &[&seeds[..]];

    let cpi_accounts = Transfer {
        from: ctx.accounts.reward_vault.to_account_info(),
        to: ctx.accounts.admin_token_account.to_account_info(),
        authority: ctx.accounts.staking_pool.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
    token::transfer(cpi_ctx, amount)?;

    let clock = Clock::get()?;
    ctx.accounts.staking_pool.last_updated = clock.unix_timestamp;

    msg!(
        "[EMERGENCY] Admin {} withdrew {} from reward vault",
        ctx.accounts.admin.key(),
        amount
    );

    emit!(EmergencyWithdrawal {
        staking_pool: ctx.accounts.staking_pool.key(),
        vault: ctx.accounts.reward_vault.key(),
        destination: ctx.accounts.admin_token_account.key(),
        amount,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
