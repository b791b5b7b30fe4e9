//! Helpers for driving the compiled program inside LiteSVM.
//!
//! The program binary comes from `anchor build`. When
//! `target/deploy/yieldvault.so` is missing, `setup_program` returns `None`
//! and the program-level tests return early, so `cargo test` still runs the
//! ledger suites on a machine without the SBF toolchain.

use super::{MAX_DEPOSIT, TIMELOCK_BLOCKS, YIELD_PERIOD_BLOCKS, YIELD_RATE_BPS};
use litesvm::types::{FailedTransactionMetadata, TransactionMetadata};
use litesvm::LiteSVM;
use solana_sdk::{
    account::Account,
    clock::Clock,
    instruction::{AccountMeta, Instruction},
    message::Message,
    pubkey::Pubkey,
    signature::Keypair,
    signer::Signer,
    transaction::Transaction,
};
use std::convert::TryInto;

// ---------------------------------------------------------------------------
// Program IDs
// ---------------------------------------------------------------------------
pub const PROGRAM_ID: Pubkey = solana_sdk::pubkey!("D1qBEftRxeQrB6pkbaRWFickhfEnWsANmicJDqc8jHRn");
pub const TOKEN_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");
pub const ATA_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL");
pub const SYSTEM_PROGRAM_ID: Pubkey = solana_sdk::pubkey!("11111111111111111111111111111111");
pub const BPF_UPGRADEABLE_LOADER_ID: Pubkey =
    solana_sdk::pubkey!("BPFLoaderUpgradeab1e11111111111111111111111");

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------
pub const INITIAL_LAMPORTS: u64 = 1_000_000_000;
pub const TOKEN_DECIMALS: u8 = 6;

// PDA seeds (must match constants.rs in the program)
pub const STATE_SEED: &[u8] = b"state";
pub const POSITION_SEED: &[u8] = b"position";
pub const VAULT_AUTHORITY_SEED: &[u8] = b"vault_authority";
pub const GOVERNANCE_ACTION_SEED: &[u8] = b"governance_action";

pub type TxResult = Result<TransactionMetadata, FailedTransactionMetadata>;

// ---------------------------------------------------------------------------
// Anchor discriminators
// ---------------------------------------------------------------------------
pub fn ix_discriminator(name: &str) -> [u8; 8] {
    let preimage = format!("global:{}", name);
    let hash = solana_sdk::hash::hash(preimage.as_bytes());
    let mut disc = [0u8; 8];
    disc.copy_from_slice(&hash.to_bytes()[..8]);
    disc
}

// ---------------------------------------------------------------------------
// PDA derivation helpers
// ---------------------------------------------------------------------------
pub fn find_state_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[STATE_SEED], &PROGRAM_ID)
}

pub fn find_position_pda(owner: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[POSITION_SEED, owner.as_ref()], &PROGRAM_ID)
}

pub fn find_vault_authority_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_AUTHORITY_SEED], &PROGRAM_ID)
}

pub fn find_governance_action_pda(action: &ActionArg) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[GOVERNANCE_ACTION_SEED, &action.seed()], &PROGRAM_ID)
}

pub fn find_program_data_pda() -> Pubkey {
    Pubkey::find_program_address(&[PROGRAM_ID.as_ref()], &BPF_UPGRADEABLE_LOADER_ID).0
}

pub fn derive_ata(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[owner.as_ref(), TOKEN_PROGRAM_ID.as_ref(), mint.as_ref()],
        &ATA_PROGRAM_ID,
    )
    .0
}

pub fn vault_token_account(mint: &Pubkey) -> Pubkey {
    derive_ata(&find_vault_authority_pda().0, mint)
}

// ---------------------------------------------------------------------------
// Transaction helpers
// ---------------------------------------------------------------------------
/// Signs with `signers[0]` as fee payer. The blockhash is rotated first so
/// repeating an identical instruction is not rejected as a duplicate.
pub fn send_tx(svm: &mut LiteSVM, ixs: &[Instruction], signers: &[&Keypair]) -> TxResult {
    svm.expire_blockhash();
    let payer = signers[0].pubkey();
    let blockhash = svm.latest_blockhash();
    let msg = Message::new(ixs, Some(&payer));
    let tx = Transaction::new(signers, msg, blockhash);
    svm.send_transaction(tx)
}

/// Return data padded back to `len` bytes; the runtime drops trailing zeros.
fn return_bytes(metadata: &TransactionMetadata, len: usize) -> Vec<u8> {
    let mut data = metadata.return_data.data.clone();
    data.resize(len.max(data.len()), 0);
    data
}

pub fn get_return_u64(metadata: &TransactionMetadata) -> u64 {
    read_u64(&return_bytes(metadata, 8), 0)
}

/// Asserts the transaction failed with the named program error.
pub fn assert_program_error(result: TxResult, error_name: &str) {
    match result {
        Ok(_) => panic!("expected {error_name}, transaction succeeded"),
        Err(failed) => {
            let marker = format!("Error Code: {error_name}.");
            assert!(
                failed.meta.logs.iter().any(|line| line.contains(&marker)),
                "expected {error_name}, logs: {:#?}",
                failed.meta.logs
            );
        }
    }
}

pub fn get_token_balance(svm: &LiteSVM, token_account: &Pubkey) -> u64 {
    let account = svm.get_account(token_account).expect("account not found");
    u64::from_le_bytes(account.data[64..72].try_into().unwrap())
}

pub fn current_slot(svm: &LiteSVM) -> u64 {
    let clock: Clock = svm.get_sysvar();
    clock.slot
}

pub fn warp_to(svm: &mut LiteSVM, slot: u64) {
    svm.warp_to_slot(slot);
    svm.expire_blockhash();
}

// ---------------------------------------------------------------------------
// Setup: load program as upgradeable
// ---------------------------------------------------------------------------
fn program_bytes() -> Option<Vec<u8>> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../target/deploy/yieldvault.so");
    match std::fs::read(path) {
        Ok(bytes) => Some(bytes),
        Err(_) => {
            eprintln!("skipping: {path} not found, run `anchor build` first");
            None
        }
    }
}

pub fn setup_program() -> Option<(LiteSVM, Keypair)> {
    let program_bytes = program_bytes()?;
    let mut svm = LiteSVM::new();

    let payer = Keypair::new();
    svm.airdrop(&payer.pubkey(), 100 * INITIAL_LAMPORTS)
        .unwrap();

    let program_data_pda = find_program_data_pda();

    // UpgradeableLoaderState::ProgramData (bincode serialization):
    //   [0..4]:   variant discriminator = 3
    //   [4..12]:  slot: u64
    //   [12]:     Option tag: 1 = Some
    //   [13..45]: upgrade_authority_address: Pubkey
    //   [45..]:   ELF bytes
    let mut program_data_account_data = vec![0u8; 45 + program_bytes.len()];
    program_data_account_data[0..4].copy_from_slice(&3u32.to_le_bytes());
    program_data_account_data[12] = 1;
    program_data_account_data[13..45].copy_from_slice(payer.pubkey().as_ref());
    program_data_account_data[45..].copy_from_slice(&program_bytes);

    svm.set_account(
        program_data_pda,
        Account {
            executable: false,
            data: program_data_account_data,
            lamports: 100 * INITIAL_LAMPORTS,
            owner: BPF_UPGRADEABLE_LOADER_ID,
            rent_epoch: 0,
        },
    )
    .unwrap();

    // UpgradeableLoaderState::Program (bincode serialization):
    //   [0..4]:   variant discriminator = 2
    //   [4..36]:  programdata_address: Pubkey
    let mut program_account_data = vec![0u8; 36];
    program_account_data[0..4].copy_from_slice(&2u32.to_le_bytes());
    program_account_data[4..36].copy_from_slice(program_data_pda.as_ref());

    svm.set_account(
        PROGRAM_ID,
        Account {
            executable: true,
            data: program_account_data,
            lamports: INITIAL_LAMPORTS,
            owner: BPF_UPGRADEABLE_LOADER_ID,
            rent_epoch: 0,
        },
    )
    .unwrap();

    svm.set_sysvar(&Clock {
        slot: 0,
        epoch_start_timestamp: 0,
        epoch: 0,
        leader_schedule_epoch: 0,
        unix_timestamp: 1704067200i64,
    });

    Some((svm, payer))
}

/// Loaded program with an initialized vault. The payer is the admin.
pub fn setup_vault() -> Option<(LiteSVM, Keypair, Pubkey)> {
    let (mut svm, admin) = setup_program()?;
    let mint = create_mint(&mut svm, &admin.pubkey());
    let ix = build_initialize_ix(
        &admin.pubkey(),
        &mint,
        YIELD_RATE_BPS,
        YIELD_PERIOD_BLOCKS,
        MAX_DEPOSIT,
        TIMELOCK_BLOCKS,
    );
    send_tx(&mut svm, &[ix], &[&admin]).expect("initialize failed");
    Some((svm, admin, mint))
}

/// New funded wallet with a token account holding `amount`.
pub fn create_user(svm: &mut LiteSVM, mint: &Pubkey, amount: u64) -> (Keypair, Pubkey) {
    let user = Keypair::new();
    svm.airdrop(&user.pubkey(), 10 * INITIAL_LAMPORTS)
        .unwrap();
    let token_account = create_token_account(svm, mint, &user.pubkey(), amount);
    (user, token_account)
}

// ---------------------------------------------------------------------------
// Account creation helpers
// ---------------------------------------------------------------------------
pub fn create_mint(svm: &mut LiteSVM, mint_authority: &Pubkey) -> Pubkey {
    let mint = Keypair::new();

    // SPL Token Mint layout (82 bytes)
    let mut mint_data = vec![0u8; 82];
    // [0..4]: mint_authority COption tag, Some
    mint_data[0..4].copy_from_slice(&1u32.to_le_bytes());
    mint_data[4..36].copy_from_slice(mint_authority.as_ref());
    // [36..44]: supply = 0
    mint_data[44] = TOKEN_DECIMALS;
    // is_initialized
    mint_data[45] = 1;

    svm.set_account(
        mint.pubkey(),
        Account {
            executable: false,
            data: mint_data,
            lamports: INITIAL_LAMPORTS,
            owner: TOKEN_PROGRAM_ID,
            rent_epoch: 0,
        },
    )
    .unwrap();

    mint.pubkey()
}

pub fn create_token_account(
    svm: &mut LiteSVM,
    mint: &Pubkey,
    owner: &Pubkey,
    amount: u64,
) -> Pubkey {
    let ata = derive_ata(owner, mint);

    // SPL Token Account layout (165 bytes)
    let mut token_data = vec![0u8; 165];
    token_data[0..32].copy_from_slice(mint.as_ref());
    token_data[32..64].copy_from_slice(owner.as_ref());
    token_data[64..72].copy_from_slice(&amount.to_le_bytes());
    token_data[108] = 1; // state = Initialized

    svm.set_account(
        ata,
        Account {
            executable: false,
            data: token_data,
            lamports: INITIAL_LAMPORTS,
            owner: TOKEN_PROGRAM_ID,
            rent_epoch: 0,
        },
    )
    .unwrap();

    ata
}

// ---------------------------------------------------------------------------
// Instruction arguments
// ---------------------------------------------------------------------------
/// Client-side mirror of the program's governance action argument
#[derive(Clone, Copy, Debug)]
pub enum ActionArg {
    SetYieldRate(u64),
    SetYieldPeriod(u64),
}

impl ActionArg {
    fn tag(&self) -> u8 {
        match self {
            ActionArg::SetYieldRate(_) => 0,
            ActionArg::SetYieldPeriod(_) => 1,
        }
    }

    fn value(&self) -> u64 {
        match *self {
            ActionArg::SetYieldRate(value) | ActionArg::SetYieldPeriod(value) => value,
        }
    }

    /// Borsh encoding: variant index then the u64 field
    fn encode(&self) -> Vec<u8> {
        let mut data = vec![self.tag()];
        data.extend_from_slice(&self.value().to_le_bytes());
        data
    }

    fn seed(&self) -> [u8; 9] {
        let mut seed = [0u8; 9];
        seed[0] = self.tag();
        seed[1..].copy_from_slice(&self.value().to_le_bytes());
        seed
    }
}

// ---------------------------------------------------------------------------
// Instruction builders
// ---------------------------------------------------------------------------
pub fn build_initialize_ix(
    admin: &Pubkey,
    mint: &Pubkey,
    yield_rate_bps: u64,
    yield_period_blocks: u64,
    max_deposit_limit: u64,
    timelock_period_blocks: u64,
) -> Instruction {
    let (state_pda, _) = find_state_pda();
    let (vault_authority_pda, _) = find_vault_authority_pda();

    let mut data = ix_discriminator("initialize").to_vec();
    data.extend_from_slice(&yield_rate_bps.to_le_bytes());
    data.extend_from_slice(&yield_period_blocks.to_le_bytes());
    data.extend_from_slice(&max_deposit_limit.to_le_bytes());
    data.extend_from_slice(&timelock_period_blocks.to_le_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(state_pda, false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new_readonly(vault_authority_pda, false),
            AccountMeta::new(vault_token_account(mint), false),
            AccountMeta::new(*admin, true),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ATA_PROGRAM_ID, false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ],
        data,
    }
}

pub fn build_deposit_ix(user: &Pubkey, mint: &Pubkey, amount: u64) -> Instruction {
    let (state_pda, _) = find_state_pda();
    let (position_pda, _) = find_position_pda(user);
    let (vault_authority_pda, _) = find_vault_authority_pda();

    let mut data = ix_discriminator("deposit").to_vec();
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(state_pda, false),
            AccountMeta::new(position_pda, false),
            AccountMeta::new(*user, true),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new(derive_ata(user, mint), false),
            AccountMeta::new_readonly(vault_authority_pda, false),
            AccountMeta::new(vault_token_account(mint), false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ],
        data,
    }
}

/// Accounts shared by withdraw, claim and emergency withdraw. `with_record`
/// false passes the program id in the position slot, which the program reads
/// as an absent record.
fn position_transfer_accounts(user: &Pubkey, mint: &Pubkey, with_record: bool) -> Vec<AccountMeta> {
    let (state_pda, _) = find_state_pda();
    let (vault_authority_pda, _) = find_vault_authority_pda();
    let position = if with_record {
        AccountMeta::new(find_position_pda(user).0, false)
    } else {
        AccountMeta::new_readonly(PROGRAM_ID, false)
    };

    vec![
        AccountMeta::new(state_pda, false),
        position,
        AccountMeta::new(*user, true),
        AccountMeta::new_readonly(*mint, false),
        AccountMeta::new(derive_ata(user, mint), false),
        AccountMeta::new_readonly(vault_authority_pda, false),
        AccountMeta::new(vault_token_account(mint), false),
        AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
    ]
}

pub fn build_withdraw_ix(user: &Pubkey, mint: &Pubkey, amount: u64, with_record: bool) -> Instruction {
    let mut data = ix_discriminator("withdraw").to_vec();
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: position_transfer_accounts(user, mint, with_record),
        data,
    }
}

pub fn build_claim_rewards_ix(user: &Pubkey, mint: &Pubkey, with_record: bool) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: position_transfer_accounts(user, mint, with_record),
        data: ix_discriminator("claim_rewards").to_vec(),
    }
}

pub fn build_emergency_withdraw_ix(user: &Pubkey, mint: &Pubkey) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: position_transfer_accounts(user, mint, true),
        data: ix_discriminator("emergency_withdraw").to_vec(),
    }
}

pub fn build_fund_vault_ix(funder: &Pubkey, mint: &Pubkey, amount: u64) -> Instruction {
    let (state_pda, _) = find_state_pda();
    let (vault_authority_pda, _) = find_vault_authority_pda();

    let mut data = ix_discriminator("fund_vault").to_vec();
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(state_pda, false),
            AccountMeta::new_readonly(*funder, true),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new(derive_ata(funder, mint), false),
            AccountMeta::new_readonly(vault_authority_pda, false),
            AccountMeta::new(vault_token_account(mint), false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        data,
    }
}

pub fn build_set_emergency_mode_ix(admin: &Pubkey, enabled: bool) -> Instruction {
    let (state_pda, _) = find_state_pda();

    let mut data = ix_discriminator("set_emergency_mode").to_vec();
    data.push(enabled as u8);

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(state_pda, false),
            AccountMeta::new_readonly(*admin, true),
        ],
        data,
    }
}

pub fn build_schedule_governance_action_ix(admin: &Pubkey, action: ActionArg) -> Instruction {
    let (state_pda, _) = find_state_pda();
    let (record_pda, _) = find_governance_action_pda(&action);

    let mut data = ix_discriminator("schedule_governance_action").to_vec();
    data.extend_from_slice(&action.encode());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(state_pda, false),
            AccountMeta::new(record_pda, false),
            AccountMeta::new(*admin, true),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ],
        data,
    }
}

/// `with_record` false leaves the optional record account out.
pub fn build_execute_governance_action_ix(
    admin: &Pubkey,
    action: ActionArg,
    with_record: bool,
) -> Instruction {
    let (state_pda, _) = find_state_pda();
    let record = if with_record {
        AccountMeta::new(find_governance_action_pda(&action).0, false)
    } else {
        AccountMeta::new_readonly(PROGRAM_ID, false)
    };

    let mut data = ix_discriminator("execute_governance_action").to_vec();
    data.extend_from_slice(&action.encode());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(state_pda, false),
            record,
            AccountMeta::new_readonly(*admin, true),
        ],
        data,
    }
}

pub fn build_get_user_position_ix(owner: &Pubkey, with_record: bool) -> Instruction {
    let (state_pda, _) = find_state_pda();
    let record = if with_record {
        find_position_pda(owner).0
    } else {
        PROGRAM_ID
    };

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(state_pda, false),
            AccountMeta::new_readonly(record, false),
            AccountMeta::new_readonly(*owner, false),
        ],
        data: ix_discriminator("get_user_position").to_vec(),
    }
}

// ---------------------------------------------------------------------------
// Account deserialization
// ---------------------------------------------------------------------------
fn read_u64(data: &[u8], offset: usize) -> u64 {
    u64::from_le_bytes(data[offset..offset + 8].try_into().unwrap())
}

pub struct VaultStateData {
    pub admin: Pubkey,
    pub token_mint: Pubkey,
    pub yield_rate_bps: u64,
    pub yield_period_blocks: u64,
    pub max_deposit_limit: u64,
    pub timelock_period_blocks: u64,
    pub emergency_mode: bool,
    pub protocol_paused: bool,
    pub total_deposits: u64,
    pub total_rewards_settled: u64,
    pub total_rewards_claimed: u64,
    pub total_rewards_forfeited: u64,
    pub total_funded: u64,
}

pub fn read_vault_state(svm: &LiteSVM) -> VaultStateData {
    let (state_pda, _) = find_state_pda();
    let account = svm.get_account(&state_pda).expect("state not found");
    let data = &account.data;
    // Skip 8-byte discriminator
    VaultStateData {
        admin: Pubkey::try_from(&data[8..40]).unwrap(),
        token_mint: Pubkey::try_from(&data[40..72]).unwrap(),
        yield_rate_bps: read_u64(data, 72),
        yield_period_blocks: read_u64(data, 80),
        max_deposit_limit: read_u64(data, 88),
        timelock_period_blocks: read_u64(data, 96),
        emergency_mode: data[104] != 0,
        protocol_paused: data[105] != 0,
        total_deposits: read_u64(data, 106),
        total_rewards_settled: read_u64(data, 114),
        total_rewards_claimed: read_u64(data, 122),
        total_rewards_forfeited: read_u64(data, 130),
        total_funded: read_u64(data, 138),
    }
}

pub struct UserAccountData {
    pub owner: Pubkey,
    pub deposit: u64,
    pub accrued_rewards: u64,
    pub checkpoint_block: u64,
    pub total_claimed: u64,
    pub bump: u8,
}

pub fn read_user_account(svm: &LiteSVM, owner: &Pubkey) -> Option<UserAccountData> {
    let (position_pda, _) = find_position_pda(owner);
    let account = svm.get_account(&position_pda)?;
    let data = &account.data;
    if data.len() < 73 {
        return None;
    }
    Some(UserAccountData {
        owner: Pubkey::try_from(&data[8..40]).unwrap(),
        deposit: read_u64(data, 40),
        accrued_rewards: read_u64(data, 48),
        checkpoint_block: read_u64(data, 56),
        total_claimed: read_u64(data, 64),
        bump: data[72],
    })
}

/// `PositionView` as returned by `get_user_position`
#[derive(Debug, PartialEq, Eq)]
pub struct PositionViewData {
    pub deposit: u64,
    pub accrued_rewards: u64,
    pub pending_rewards: u64,
    pub total_claimed: u64,
    pub checkpoint_block: u64,
}

pub fn get_return_position(metadata: &TransactionMetadata) -> PositionViewData {
    let data = &return_bytes(metadata, 40);
    PositionViewData {
        deposit: read_u64(data, 0),
        accrued_rewards: read_u64(data, 8),
        pending_rewards: read_u64(data, 16),
        total_claimed: read_u64(data, 24),
        checkpoint_block: read_u64(data, 32),
    }
}
