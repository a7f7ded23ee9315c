use anchor_lang::prelude::*;

use crate::error::StakingError;

#[account]
#[derive(Default)]
pub struct UserStake {
    pub owner: Pubkey,
    pub staking_pool: Pubkey,

    pub amount: u64,
    pub pending_rewards: u64,
    pub total_rewards_claimed: u64,

    /// Pool reward index at this position's last accrual.
    pub reward_index_checkpoint: u128,
    pub last_accrual_time: i64,
    pub first_staked_at: i64,

    pub bump: u8,
}

impl UserStake {
    pub const LEN: usize = 8 + 32 + 32 + 8 + 8 + 8 + 16 + 8 + 8 + 1;

    /// Freshly created by `init_if_needed` and never opened.
    pub fn is_new(&self) -> bool {
        self.owner == Pubkey::default()
    }

    pub fn open(
        &mut self,
        owner: Pubkey,
        staking_pool: Pubkey,
        bump: u8,
        reward_index: u128,
        now: i64,
    ) {
        self.owner = owner;
        self.staking_pool = staking_pool;
        self.amount = 0;
        self.pending_rewards = 0;
        self.total_rewards_claimed = 0;
        self.reward_index_checkpoint = reward_index;
        self.last_accrual_time = now;
        self.first_staked_at = now;
        self.bump = bump;
    }

    pub fn is_staked(&self) -> bool {
        self.amount > 0
    }

    /// Adds `reward` to pending and moves the checkpoint to `reward_index`
    /// at `now`. The checkpoint never moves backwards.
    pub fn credit_rewards(&mut self, reward: u64, reward_index: u128, now: i64) -> Result<()> {
        self.pending_rewards = self
            .pending_rewards
            .checked_add(reward)
            .ok_or(StakingError::MathOverflow)?;
        self.reward_index_checkpoint = self.reward_index_checkpoint.max(reward_index);
        self.last_accrual_time = self.last_accrual_time.max(now);
        Ok(())
    }

    /// Returns true when this deposit turned an empty position into a staked one.
    pub fn deposit(&mut self, amount: u64) -> Result<bool> {
        let was_empty = !self.is_staked();
        self.amount = self
            .amount
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        Ok(was_empty && self.is_staked())
    }

    /// Returns true when the withdrawal emptied the position.
    pub fn withdraw(&mut self, amount: u64) -> Result<bool> {
        require!(amount <= self.amount, StakingError::InsufficientStake);
        self.amount -= amount;
        Ok(!self.is_staked())
    }

    /// Moves all pending rewards into the claimed counter and returns the payout.
    pub fn take_pending_rewards(&mut self) -> Result<u64> {
        let payout = self.pending_rewards;
        self.total_rewards_claimed = self
            .total_rewards_claimed
            .checked_add(payout)
            .ok_or(StakingError::MathOverflow)?;
        self.pending_rewards = 0;
        Ok(payout)
    }
}
