//! Admin instruction handlers.
//!
//! Configuration changes restricted to the pool authority.
//!
//! ## Security Guarantees
//! - All admin functions require signer == pool.authority
//! - PDA validation ensures correct pool
//! - Parameter bounds checking

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakingError;
use crate::events::{PauseScopeChanged, PoolStatusChanged, RewardRateUpdated};
use crate::state::{PauseScope, StakingPool};

/// Accounts required for admin configuration.
#[derive(Accounts)]
pub struct AdminControl<'info> {
    /// The stake pool to modify.
    #[account(
        mut,
        seeds = [STAKING_POOL_SEED, staking_pool.aura_mint.as_ref()],
        bump = staking_pool.bump
    )]
    pub staking_pool: Account<'info, StakingPool>,

    /// The pool authority.
    /// SECURITY: Must be signer AND match pool.authority.
    #[account(
        constraint = admin.key() == staking_pool.authority @ StakingError::Unauthorized
    )]
    pub admin: Signer<'info>,
}

/// Replace the daily reward rate.
///
/// The pool reward index is advanced at the old rate first, so time that has
/// already passed keeps its price whether or not a position was touched.
pub fn update_reward_rate_handler(ctx: Context<AdminControl>, new_rate: u64) -> Result<()> {
    let staking_pool_key = ctx.accounts.staking_pool.key();
    let staking_pool = &mut ctx.accounts.staking_pool;
    let clock = Clock::get()?;

    let old_rate = staking_pool.set_reward_rate(new_rate, clock.unix_timestamp)?;

    msg!("Reward rate updated: {}bp -> {}bp per day", old_rate, new_rate);
    msg!("Admin: {}", ctx.accounts.admin.key());

    emit!(RewardRateUpdated {
        staking_pool: staking_pool_key,
        old_rate,
        new_rate,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

/// Set the paused state of the staking pool.
///
/// # Security
/// - When paused, new stakes are blocked
/// - Unstaking and claiming follow the pool's pause scope
pub fn set_pool_status_handler(ctx: Context<AdminControl>, paused: bool) -> Result<()> {
    let staking_pool_key = ctx.accounts.staking_pool.key();
    let staking_pool = &mut ctx.accounts.staking_pool;
    let clock = Clock::get()?;

    let previous_state = staking_pool.paused;
    staking_pool.paused = paused;
    staking_pool.last_updated = clock.unix_timestamp;

    msg!(
        "Staking {} (was {})",
        if paused { "PAUSED" } else { "RESUMED" },
        if previous_state { "paused" } else { "active" }
    );
    msg!("Admin: {}", ctx.accounts.admin.key());

    emit!(PoolStatusChanged {
        staking_pool: staking_pool_key,
        paused,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

/// Choose whether a pause also blocks unstaking and claiming.
///
/// Takes effect immediately, including while the pool is already paused.
pub fn set_pause_scope_handler(ctx: Context<AdminControl>, scope: PauseScope) -> Result<()> {
    let staking_pool_key = ctx.accounts.staking_pool.key();
    let staking_pool = &mut ctx.accounts.staking_pool;
    let clock = Clock::get()?;

    staking_pool.pause_scope = scope;
    staking_pool.last_updated = clock.unix_timestamp;

    msg!("Pause scope set to {:?}", scope);

    emit!(PauseScopeChanged {
        staking_pool: staking_pool_key,
        scope,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
