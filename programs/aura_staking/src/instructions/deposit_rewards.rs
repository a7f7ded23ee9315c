//! Deposit rewards instruction handler.
//!
//! Moves reward tokens from the authority into the reward vault.
//!
//! ## Security Guarantees
//! - Only the pool authority can fund rewards
//! - Reward vault must be the pool's stored PDA
//! - Mint validation prevents wrong token deposits

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::RewardsDeposited;
use crate::state::StakingPool;

/// Accounts required for funding the reward vault.
#[derive(Accounts)]
pub struct DepositRewards<'info> {
    /// The stake pool.
    /// SECURITY: PDA + has_one validations.
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

    /// Authority's token account.
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

/// Fund the reward vault.
///
/// # Arguments
/// * `ctx` - DepositRewards accounts context
/// * `amount` - Amount of reward tokens to deposit
pub fn handler(ctx: Context<DepositRewards>, amount: u64) -> Result<()> {
    // === INPUT VALIDATION ===

    require!(amount > 0, StakingError::ZeroAmount);
    require!(
        ctx.accounts.admin_token_account.amount >= amount,
        StakingError::InsufficientFunds
    );

    // === TOKEN TRANSFER ===

    let cpi_accounts = Transfer {
        from: ctx.accounts.admin_token_account.to_account_info(),
        to: ctx.accounts.reward_vault.to_account_info(),
        authority: ctx.accounts.admin.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
    token::transfer(cpi_ctx, amount)?;

    // === STATE UPDATE ===

    let clock = Clock::get()?;
    let staking_pool_key = ctx.accounts.staking_pool.key();
    ctx.accounts.staking_pool.last_updated = clock.unix_timestamp;

    ctx.accounts.reward_vault.reload()?;
    let reward_vault_balance = ctx.accounts.reward_vault.amount;

    msg!("Reward vault funded with {} tokens", amount);
    msg!("New reward vault balance: {}", reward_vault_balance);

    emit!(RewardsDeposited {
        staking_pool: staking_pool_key,
        amount,
        reward_vault_balance,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
