#![allow(dead_code)]

use anchor_lang::prelude::{AccountInfo, Clock, Pubkey};
use anchor_lang::solana_program::entrypoint::ProgramResult;
use anchor_lang::solana_program::program_pack::Pack;
use anchor_lang::{system_program, AccountDeserialize, InstructionData, ToAccountMetas};
use anchor_spl::token::spl_token;
use solana_program_test::{processor, BanksClientError, ProgramTest, ProgramTestContext};
use solana_sdk::{
    instruction::{Instruction, InstructionError},
    native_token::LAMPORTS_PER_SOL,
    signature::{Keypair, Signer},
    system_instruction, sysvar,
    transaction::{Transaction, TransactionError},
};

use aura_staking::constants::{
    REWARD_VAULT_SEED, STAKE_VAULT_SEED, STAKING_POOL_SEED, USER_STAKE_SEED,
};
use aura_staking::error::StakingError;
use aura_staking::state::{PauseScope, StakingPool, UserStake};
use aura_staking::{accounts, instruction};

pub const TOKEN: u64 = 1_000_000;
pub const DAY: i64 = 86_400;
pub const START: i64 = 1_700_000_000;

// `entry` ties the slice and account lifetimes together, which the builtin
// processor signature does not.
fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    data: &[u8],
) -> ProgramResult {
    let accounts = Box::leak(Box::new(accounts.to_vec()));
    aura_staking::entry(program_id, accounts, data)
}

pub fn assert_staking_error(result: Result<(), BanksClientError>, expected: StakingError) {
    let code = anchor_lang::error::ERROR_CODE_OFFSET + expected as u32;
    assert_eq!(
        result.unwrap_err().unwrap(),
        TransactionError::InstructionError(0, InstructionError::Custom(code))
    );
}

/// A depositor with SOL for fees and an AURA token account.
pub struct Staker {
    pub keypair: Keypair,
    pub tokens: Pubkey,
    pub position: Pubkey,
}

/// One AURA mint, its pool addresses and a funded authority, running on a
/// local bank with the program loaded natively.
pub struct PoolTestContext {
    pub context: ProgramTestContext,
    pub authority: Keypair,
    pub authority_tokens: Pubkey,
    pub mint: Keypair,
    pub staking_pool: Pubkey,
    pub stake_vault: Pubkey,
    pub reward_vault: Pubkey,
}

impl PoolTestContext {
    /// Mint, authority and addresses are set up; the pool itself is not
    /// created. The clock is pinned at `START`.
    pub async fn new() -> PoolTestContext {
        let mut program_test = ProgramTest::new(
            "aura_staking",
            aura_staking::ID,
            processor!(process_instruction),
        );
        program_test.prefer_bpf(false);
        let context = program_test.start_with_context().await;

        let mint = Keypair::new();
        let (staking_pool, _) = Pubkey::find_program_address(
            &[STAKING_POOL_SEED, mint.pubkey().as_ref()],
            &aura_staking::ID,
        );
        let (stake_vault, _) = Pubkey::find_program_address(
            &[STAKE_VAULT_SEED, staking_pool.as_ref()],
            &aura_staking::ID,
        );
        let (reward_vault, _) = Pubkey::find_program_address(
            &[REWARD_VAULT_SEED, staking_pool.as_ref()],
            &aura_staking::ID,
        );

        let mut ptc = PoolTestContext {
            context,
            authority: Keypair::new(),
            authority_tokens: Pubkey::default(),
            mint,
            staking_pool,
            stake_vault,
            reward_vault,
        };

        let authority = ptc.authority.pubkey();
        ptc.airdrop(&authority).await;
        let mint = ptc.mint.insecure_clone();
        ptc.create_mint(&mint).await;
        ptc.authority_tokens = ptc.create_token_account(&authority, &mint.pubkey()).await;
        ptc.mint_to(ptc.authority_tokens, 1_000_000 * TOKEN).await;
        ptc.set_time(START).await;

        ptc
    }

    /// Same as `new`, with the pool created at `reward_rate_per_day`.
    pub async fn with_pool(reward_rate_per_day: u64) -> PoolTestContext {
        let mut ptc = PoolTestContext::new().await;
        let ix = ptc.initialize_pool_ix(ptc.authority.pubkey(), reward_rate_per_day);
        ptc.as_authority(ix).await.unwrap();
        ptc
    }

    /// Signs with the test payer plus `signers`. A fresh blockhash keeps
    /// repeated identical instructions from being deduplicated.
    pub async fn process(
        &mut self,
        ix: Instruction,
        signers: &[&Keypair],
    ) -> Result<(), BanksClientError> {
        self.process_all(&[ix], signers).await
    }

    pub async fn process_all(
        &mut self,
        ixs: &[Instruction],
        signers: &[&Keypair],
    ) -> Result<(), BanksClientError> {
        let blockhash = self.context.get_new_latest_blockhash().await.unwrap();
        let mut keypairs: Vec<&Keypair> = vec![&self.context.payer];
        keypairs.extend_from_slice(signers);
        let transaction = Transaction::new_signed_with_payer(
            ixs,
            Some(&self.context.payer.pubkey()),
            &keypairs,
            blockhash,
        );
        self.context.banks_client.process_transaction(transaction).await
    }

    pub async fn set_time(&mut self, unix_timestamp: i64) {
        let mut clock: Clock = self.context.banks_client.get_sysvar().await.unwrap();
        clock.unix_timestamp = unix_timestamp;
        self.context.set_sysvar::<Clock>(&clock);
    }

    pub async fn airdrop(&mut self, recipient: &Pubkey) {
        let ix = system_instruction::transfer(
            &self.context.payer.pubkey(),
            recipient,
            10 * LAMPORTS_PER_SOL,
        );
        self.process(ix, &[]).await.unwrap();
    }

    /// Initializes `mint` with six decimals and the authority as mint authority.
    pub async fn create_mint(&mut self, mint: &Keypair) {
        let rent = self.context.banks_client.get_rent().await.unwrap();
        let ixs = [
            system_instruction::create_account(
                &self.context.payer.pubkey(),
                &mint.pubkey(),
                rent.minimum_balance(spl_token::state::Mint::LEN),
                spl_token::state::Mint::LEN as u64,
                &spl_token::ID,
            ),
            spl_token::instruction::initialize_mint(
                &spl_token::ID,
                &mint.pubkey(),
                &self.authority.pubkey(),
                None,
                6,
            )
            .unwrap(),
        ];
        self.process_all(&ixs, &[mint]).await.unwrap();
    }

    pub async fn create_token_account(&mut self, owner: &Pubkey, mint: &Pubkey) -> Pubkey {
        let rent = self.context.banks_client.get_rent().await.unwrap();
        let account = Keypair::new();
        let ixs = [
            system_instruction::create_account(
                &self.context.payer.pubkey(),
                &account.pubkey(),
                rent.minimum_balance(spl_token::state::Account::LEN),
                spl_token::state::Account::LEN as u64,
                &spl_token::ID,
            ),
            spl_token::instruction::initialize_account(
                &spl_token::ID,
                &account.pubkey(),
                mint,
                owner,
            )
            .unwrap(),
        ];
        self.process_all(&ixs, &[&account]).await.unwrap();
        account.pubkey()
    }

    pub async fn mint_to(&mut self, destination: Pubkey, amount: u64) {
        let mint = self.mint.pubkey();
        self.mint_from(mint, destination, amount).await;
    }

    pub async fn mint_from(&mut self, mint: Pubkey, destination: Pubkey, amount: u64) {
        let ix = spl_token::instruction::mint_to(
            &spl_token::ID,
            &mint,
            &destination,
            &self.authority.pubkey(),
            &[],
            amount,
        )
        .unwrap();
        let authority = self.authority.insecure_clone();
        self.process(ix, &[&authority]).await.unwrap();
    }

    /// A staker holding `balance` AURA.
    pub async fn create_staker(&mut self, balance: u64) -> Staker {
        let keypair = Keypair::new();
        self.airdrop(&keypair.pubkey()).await;
        let mint = self.mint.pubkey();
        let tokens = self.create_token_account(&keypair.pubkey(), &mint).await;
        self.mint_to(tokens, balance).await;
        let (position, _) = Pubkey::find_program_address(
            &[USER_STAKE_SEED, keypair.pubkey().as_ref(), self.staking_pool.as_ref()],
            &aura_staking::ID,
        );
        Staker {
            keypair,
            tokens,
            position,
        }
    }

    pub async fn token_balance(&mut self, address: Pubkey) -> u64 {
        let account = self
            .context
            .banks_client
            .get_account(address)
            .await
            .unwrap()
            .unwrap();
        spl_token::state::Account::unpack(&account.data).unwrap().amount
    }

    pub async fn pool_state(&mut self) -> StakingPool {
        let account = self
            .context
            .banks_client
            .get_account(self.staking_pool)
            .await
            .unwrap()
            .unwrap();
        StakingPool::try_deserialize(&mut account.data.as_slice()).unwrap()
    }

    pub async fn position_state(&mut self, staker: &Staker) -> UserStake {
        let account = self
            .context
            .banks_client
            .get_account(staker.position)
            .await
            .unwrap()
            .unwrap();
        UserStake::try_deserialize(&mut account.data.as_slice()).unwrap()
    }

    // Instruction builders. The caller picks the signer, so the
    // authorization constraints can be exercised with the wrong key.

    pub fn initialize_pool_ix(&self, payer: Pubkey, reward_rate_per_day: u64) -> Instruction {
        Instruction {
            program_id: aura_staking::ID,
            accounts: accounts::InitializePool {
                staking_pool: self.staking_pool,
                stake_vault: self.stake_vault,
                reward_vault: self.reward_vault,
                aura_mint: self.mint.pubkey(),
                payer,
                system_program: system_program::ID,
                token_program: spl_token::ID,
                rent: sysvar::rent::ID,
            }
            .to_account_metas(None),
            data: instruction::InitializePool {
                authority: self.authority.pubkey(),
                reward_rate_per_day,
            }
            .data(),
        }
    }

    pub fn deposit_rewards_ix(
        &self,
        admin: Pubkey,
        admin_tokens: Pubkey,
        amount: u64,
    ) -> Instruction {
        Instruction {
            program_id: aura_staking::ID,
            accounts: accounts::DepositRewards {
                staking_pool: self.staking_pool,
                reward_vault: self.reward_vault,
                admin_token_account: admin_tokens,
                admin,
                token_program: spl_token::ID,
            }
            .to_account_metas(None),
            data: instruction::DepositRewards { amount }.data(),
        }
    }

    pub fn stake_ix(&self, staker: &Staker, tokens: Pubkey, amount: u64) -> Instruction {
        Instruction {
            program_id: aura_staking::ID,
            accounts: accounts::Stake {
                staking_pool: self.staking_pool,
                user_stake: staker.position,
                stake_vault: self.stake_vault,
                user_token_account: tokens,
                user: staker.keypair.pubkey(),
                token_program: spl_token::ID,
                system_program: system_program::ID,
            }
            .to_account_metas(None),
            data: instruction::Stake { amount }.data(),
        }
    }

    pub fn unstake_ix(&self, staker: &Staker, amount: u64) -> Instruction {
        Instruction {
            program_id: aura_staking::ID,
            accounts: accounts::Unstake {
                staking_pool: self.staking_pool,
                user_stake: staker.position,
                stake_vault: self.stake_vault,
                reward_vault: self.reward_vault,
                user_token_account: staker.tokens,
                user: staker.keypair.pubkey(),
                token_program: spl_token::ID,
            }
            .to_account_metas(None),
            data: instruction::Unstake { amount }.data(),
        }
    }

    pub fn claim_rewards_ix(&self, staker: &Staker) -> Instruction {
        Instruction {
            program_id: aura_staking::ID,
            accounts: accounts::ClaimRewards {
                staking_pool: self.staking_pool,
                user_stake: staker.position,
                reward_vault: self.reward_vault,
                user_token_account: staker.tokens,
                user: staker.keypair.pubkey(),
                token_program: spl_token::ID,
            }
            .to_account_metas(None),
            data: instruction::ClaimRewards {}.data(),
        }
    }

    fn admin_control_metas(&self, admin: Pubkey) -> Vec<anchor_lang::prelude::AccountMeta> {
        accounts::AdminControl {
            staking_pool: self.staking_pool,
            admin,
        }
        .to_account_metas(None)
    }

    pub fn update_reward_rate_ix(&self, admin: Pubkey, new_rate: u64) -> Instruction {
        Instruction {
            program_id: aura_staking::ID,
            accounts: self.admin_control_metas(admin),
            data: instruction::UpdateRewardRate { new_rate }.data(),
        }
    }

    pub fn set_pool_status_ix(&self, admin: Pubkey, paused: bool) -> Instruction {
        Instruction {
            program_id: aura_staking::ID,
            accounts: self.admin_control_metas(admin),
            data: instruction::SetPoolStatus { paused }.data(),
        }
    }

    pub fn set_pause_scope_ix(&self, admin: Pubkey, scope: PauseScope) -> Instruction {
        Instruction {
            program_id: aura_staking::ID,
            accounts: self.admin_control_metas(admin),
            data: instruction::SetPauseScope { scope }.data(),
        }
    }

    pub fn admin_withdraw_stake_ix(
        &self,
        admin: Pubkey,
        admin_tokens: Pubkey,
        amount: u64,
    ) -> Instruction {
        Instruction {
            program_id: aura_staking::ID,
            accounts: accounts::AdminWithdrawStake {
                staking_pool: self.staking_pool,
                stake_vault: self.stake_vault,
                admin_token_account: admin_tokens,
                admin,
                token_program: spl_token::ID,
            }
            .to_account_metas(None),
            data: instruction::AdminWithdrawStake { amount }.data(),
        }
    }

    pub fn admin_withdraw_rewards_ix(
        &self,
        admin: Pubkey,
        admin_tokens: Pubkey,
        amount: u64,
    ) -> Instruction {
        Instruction {
            program_id: aura_staking::ID,
            accounts: accounts::AdminWithdrawRewards {
                staking_pool: self.staking_pool,
                reward_vault: self.reward_vault,
                admin_token_account: admin_tokens,
                admin,
                token_program: spl_token::ID,
            }
            .to_account_metas(None),
            data: instruction::AdminWithdrawRewards { amount }.data(),
        }
    }

    /// Runs an authority-signed instruction.
    pub async fn as_authority(&mut self, ix: Instruction) -> Result<(), BanksClientError> {
        let authority = self.authority.insecure_clone();
        self.process(ix, &[&authority]).await
    }

    /// Runs an instruction signed by `staker`.
    pub async fn as_staker(
        &mut self,
        staker: &Staker,
        ix: Instruction,
    ) -> Result<(), BanksClientError> {
        self.process(ix, &[&staker.keypair]).await
    }
}
