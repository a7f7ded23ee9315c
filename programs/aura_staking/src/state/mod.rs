//! State structures for the AURA Staking program.
//!
//! The pool registry and per-owner position ledger. Bookkeeping lives on the
//! account types so it can be exercised without a runtime.

pub mod staking_pool;
pub mod user_stake;

pub use staking_pool::*;
pub use user_stake::*;
