//! Initialize pool instruction handler.
//!
//! Creates the pool registry for one AURA mint together with its stake and
//! reward vaults.
//!
//! ## Security Guarantees
//! - Vaults are PDAs whose token authority is the pool PDA
//! - Mint and vault addresses are locked into pool state permanently
//! - A second initialization for the same mint fails with `AlreadyInitialized`

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::PoolInitialized;
use crate::state::{PauseScope, StakingPool};

/// Accounts required for pool initialization.
///
/// ## Security Notes
/// - `init_if_needed` lets a repeat call reach the handler, which rejects it
///   with a typed error instead of a system-program failure
/// - Seeds ensure the vaults cannot be swapped or replaced
#[derive(Accounts)]
pub struct InitializePool<'info> {
    /// The staking pool account.
    /// SECURITY: PDA derived from STAKING_POOL_SEED + mint, one pool per token.
    #[account(
        init_if_needed,
        payer = payer,
        space = StakingPool::LEN,
        seeds = [STAKING_POOL_SEED, aura_mint.key().as_ref()],
        bump
    )]
    pub staking_pool: Account<'info, StakingPool>,

    /// Custody of staked principal.
    #[account(
        init_if_needed,
        payer = payer,
        seeds = [STAKE_VAULT_SEED, staking_pool.key().as_ref()],
        bump,
        token::mint = aura_mint,
        token::authority = staking_pool
    )]
    pub stake_vault: Account<'info, TokenAccount>,

    /// Custody of reward supply funded by the authority.
    #[account(
        init_if_needed,
        payer = payer,
        seeds = [REWARD_VAULT_SEED, staking_pool.key().as_ref()],
        bump,
        token::mint = aura_mint,
        token::authority = staking_pool
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    /// The AURA mint.
    pub aura_mint: Account<'info, Mint>,

    /// Pays rent and must be the designated authority.
    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,

    pub token_program: Program<'info, Token>,

    pub rent: Sysvar<'info, Rent>,
}

/// Initialize a new staking pool.
///
/// # Arguments
/// * `ctx` - InitializePool accounts context
/// * `authority` - Account allowed to run administrative operations
/// * `reward_rate_per_day` - Daily reward rate in basis points
pub fn handler(
    ctx: Context<InitializePool>,
    authority: Pubkey,
    reward_rate_per_day: u64,
) -> Result<()> {
    // === INPUT VALIDATION ===

    require!(
        !ctx.accounts.staking_pool.is_initialized(),
        StakingError::AlreadyInitialized
    );
    require!(authority != Pubkey::default(), StakingError::InvalidAuthority);
    require!(
        ctx.accounts.payer.key() == authority,
        StakingError::Unauthorized
    );
    StakingPool::validate_reward_rate(reward_rate_per_day)?;

    let clock = Clock::get()?;
    let staking_pool_key = ctx.accounts.staking_pool.key();
    let staking_pool = &mut ctx.accounts.staking_pool;

    // === STATE INITIALIZATION ===

    staking_pool.authority = authority;
    staking_pool.aura_mint = ctx.accounts.aura_mint.key();
    staking_pool.stake_vault = ctx.accounts.stake_vault.key();
    staking_pool.reward_vault = ctx.accounts.reward_vault.key();
    staking_pool.total_staked = 0;
    staking_pool.reward_rate_per_day = reward_rate_per_day;
    staking_pool.total_rewards_distributed = 0;
    staking_pool.total_fees_collected = 0;
    staking_pool.emergency_withdrawn_stake = 0;
    staking_pool.staker_count = 0;
    staking_pool.reward_index = 0;
    staking_pool.last_index_update = clock.unix_timestamp;
    staking_pool.paused = false;
    staking_pool.pause_scope = PauseScope::default();
    staking_pool.created_at = clock.unix_timestamp;
    staking_pool.last_updated = clock.unix_timestamp;

    staking_pool.bump = ctx.bumps.staking_pool;
    staking_pool.stake_vault_bump = ctx.bumps.stake_vault;
    staking_pool.reward_vault_bump = ctx.bumps.reward_vault;

    msg!("AURA staking pool initialized");
    msg!("Authority: {}", authority);
    msg!("Mint: {}", staking_pool.aura_mint);
    msg!("Reward rate: {}bp/day", reward_rate_per_day);

    emit!(PoolInitialized {
        staking_pool: staking_pool_key,
        authority,
        aura_mint: staking_pool.aura_mint,
        reward_rate_per_day,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
