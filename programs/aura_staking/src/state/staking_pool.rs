use anchor_lang::prelude::*;

use crate::constants::MAX_REWARD_RATE_PER_DAY;
use crate::error::StakingError;

/// Which operations a paused pool rejects.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PauseScope {
    /// Only new stakes are rejected; withdrawals and claims stay open.
    #[default]
    StakingOnly,
    /// Stakes, unstakes and claims are all rejected.
    All,
}

#[account]
#[derive(Default)]
pub struct StakingPool {
    pub authority: Pubkey,
    pub aura_mint: Pubkey,
    pub stake_vault: Pubkey,
    pub reward_vault: Pubkey,

    pub total_staked: u64,
    pub reward_rate_per_day: u64,
    pub total_rewards_distributed: u64,
    pub total_fees_collected: u64,
    pub emergency_withdrawn_stake: u64,
    pub staker_count: u64,

    /// Running sum of `reward_rate_per_day * seconds`, one unit of stake
    /// earning `index / (10000 * 86400)` tokens since pool creation.
    pub reward_index: u128,
    pub last_index_update: i64,

    pub paused: bool,
    pub pause_scope: PauseScope,

    pub created_at: i64,
    pub last_updated: i64,

    pub stake_vault_bump: u8,
    pub reward_vault_bump: u8,
    pub bump: u8,
}

impl StakingPool {
    pub const LEN: usize = 8
        + (32 * 4)
        + (8 * 6)
        + 16
        + 8
        + 1
        + 1
        + (8 * 2)
        + 3;

    pub fn validate_reward_rate(rate: u64) -> Result<()> {
        require!(
            rate <= MAX_REWARD_RATE_PER_DAY,
            StakingError::RewardRateTooHigh
        );
        Ok(())
    }

    /// Reward index as of `now`, without writing it back. A clock behind the
    /// last update adds nothing.
    pub fn reward_index_at(&self, now: i64) -> Result<u128> {
        let elapsed = now.saturating_sub(self.last_index_update).max(0) as u128;
        let growth = (self.reward_rate_per_day as u128)
            .checked_mul(elapsed)
            .ok_or(StakingError::MathOverflow)?;
        let index = self
            .reward_index
            .checked_add(growth)
            .ok_or(StakingError::MathOverflow)?;
        Ok(index)
    }

    /// Closes the current rate segment at `now` and returns the new index.
    pub fn update_reward_index(&mut self, now: i64) -> Result<u128> {
        self.reward_index = self.reward_index_at(now)?;
        self.last_index_update = self.last_index_update.max(now);
        Ok(self.reward_index)
    }

    /// Switches the daily rate at `now`. Time before `now` keeps the old rate.
    /// Returns the previous rate.
    pub fn set_reward_rate(&mut self, new_rate: u64, now: i64) -> Result<u64> {
        Self::validate_reward_rate(new_rate)?;
        self.update_reward_index(now)?;
        let old_rate = self.reward_rate_per_day;
        self.reward_rate_per_day = new_rate;
        self.last_updated = now;
        Ok(old_rate)
    }

    pub fn is_initialized(&self) -> bool {
        self.authority != Pubkey::default()
    }

    pub fn staking_blocked(&self) -> bool {
        self.paused
    }

    pub fn withdrawals_blocked(&self) -> bool {
        self.paused && self.pause_scope == PauseScope::All
    }

    /// Books a deposit. `opened_position` is true when the position went
    /// from empty to staked.
    pub fn record_stake(&mut self, amount: u64, opened_position: bool, now: i64) -> Result<()> {
        self.total_staked = self
            .total_staked
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        if opened_position {
            self.staker_count = self.staker_count.saturating_add(1);
        }
        self.last_updated = now;
        Ok(())
    }

    /// Books a withdrawal of `amount` principal, of which `fee` was retained.
    pub fn record_unstake(
        &mut self,
        amount: u64,
        fee: u64,
        closed_position: bool,
        now: i64,
    ) -> Result<()> {
        self.total_staked = self
            .total_staked
            .checked_sub(amount)
            .ok_or(StakingError::MathOverflow)?;
        self.total_fees_collected = self
            .total_fees_collected
            .checked_add(fee)
            .ok_or(StakingError::MathOverflow)?;
        if closed_position {
            self.staker_count = self.staker_count.saturating_sub(1);
        }
        self.last_updated = now;
        Ok(())
    }

    pub fn record_claim(&mut self, amount: u64, now: i64) -> Result<()> {
        self.total_rewards_distributed = self
            .total_rewards_distributed
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        self.last_updated = now;
        Ok(())
    }

    /// Principal pulled out by the authority. `total_staked` is left alone so
    /// depositors' claims stay visible.
    ///
    /// `emergency_withdrawn_stake` is a lifetime total of such withdrawals. It
    /// never decreases, so tokens later sent straight back to the stake vault
    /// are not netted out; read the vault balance for the current shortfall.
    pub fn record_emergency_stake_withdrawal(&mut self, amount: u64, now: i64) -> Result<()> {
        self.emergency_withdrawn_stake = self
            .emergency_withdrawn_stake
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        self.last_updated = now;
        Ok(())
    }
}
