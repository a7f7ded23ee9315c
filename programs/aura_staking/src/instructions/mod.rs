//! Instruction handlers for the AURA Staking program.
//!
//! This module contains all instruction implementations.

pub mod admin;
pub mod claim_rewards;
pub mod deposit_rewards;
pub mod emergency_withdraw;
pub mod initialize_pool;
pub mod stake;
pub mod unstake;

pub use admin::*;
pub use claim_rewards::*;
pub use deposit_rewards::*;
pub use emergency_withdraw::*;
pub use initialize_pool::*;
pub use stake::*;
pub use unstake::*;
