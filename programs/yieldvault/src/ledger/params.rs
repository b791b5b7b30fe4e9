use crate::constants::{
    DEFAULT_TIMELOCK_PERIOD_BLOCKS, MAX_DEPOSIT_LIMIT, MAX_YIELD_PERIOD_BLOCKS, MAX_YIELD_RATE_BPS,
    MIN_DEPOSIT_LIMIT,
};
use crate::ledger::LedgerError;
use anchor_lang::prelude::*;

/// Process-wide protocol parameters
///
/// A single record per vault. The yield rate and period change only through the
/// governance timelock (or the legacy immediate setter); flags, the deposit cap
/// and the admin change through direct admin calls.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct ProtocolParams {
    /// Identity allowed to run admin and governance operations
    pub admin: Pubkey,
    /// Mint of the single token the vault accepts
    pub token_mint: Pubkey,
    /// Yield rate in basis points, bounded by `MAX_YIELD_RATE_BPS`
    pub yield_rate_bps: u64,
    /// Compounding window; zero is treated as one block
    pub yield_period_blocks: u64,
    /// Per-position deposit cap
    pub max_deposit_limit: u64,
    /// Delay between scheduling and executing a governance action
    pub timelock_period_blocks: u64,
    /// Blocks deposits and enables emergency withdrawals
    pub emergency_mode: bool,
    /// Blocks deposits
    pub protocol_paused: bool,
}

impl ProtocolParams {
    /// Builds the initial parameter set, validating every bounded value.
    ///
    /// A zero timelock is replaced by `DEFAULT_TIMELOCK_PERIOD_BLOCKS`.
    pub fn new(
        admin: Pubkey,
        token_mint: Pubkey,
        yield_rate_bps: u64,
        yield_period_blocks: u64,
        max_deposit_limit: u64,
        timelock_period_blocks: u64,
    ) -> Result<Self> {
        require!(admin != Pubkey::default(), LedgerError::InvalidParameter);
        validate_yield_rate(yield_rate_bps)?;
        require!(
            yield_period_blocks <= MAX_YIELD_PERIOD_BLOCKS,
            LedgerError::InvalidParameter
        );
        validate_deposit_limit(max_deposit_limit)?;

        let timelock_period_blocks = if timelock_period_blocks == 0 {
            DEFAULT_TIMELOCK_PERIOD_BLOCKS
        } else {
            timelock_period_blocks
        };

        Ok(Self {
            admin,
            token_mint,
            yield_rate_bps,
            yield_period_blocks,
            max_deposit_limit,
            timelock_period_blocks,
            emergency_mode: false,
            protocol_paused: false,
        })
    }

    pub fn is_admin(&self, caller: &Pubkey) -> bool {
        self.admin == *caller
    }

    pub fn require_admin(&self, caller: &Pubkey) -> Result<()> {
        require!(self.is_admin(caller), LedgerError::Unauthorized);
        Ok(())
    }
}

pub fn validate_yield_rate(yield_rate_bps: u64) -> Result<()> {
    require!(
        yield_rate_bps <= MAX_YIELD_RATE_BPS,
        LedgerError::InvalidParameter
    );
    Ok(())
}

pub fn validate_yield_period(yield_period_blocks: u64) -> Result<()> {
    require!(
        (1..=MAX_YIELD_PERIOD_BLOCKS).contains(&yield_period_blocks),
        LedgerError::InvalidParameter
    );
    Ok(())
}

pub fn validate_deposit_limit(max_deposit_limit: u64) -> Result<()> {
    require!(
        (MIN_DEPOSIT_LIMIT..=MAX_DEPOSIT_LIMIT).contains(&max_deposit_limit),
        LedgerError::InvalidParameter
    );
    Ok(())
}

/// Vault-wide running totals kept next to the parameters
///
/// `total_rewards_claimed + total_rewards_forfeited` never exceeds
/// `total_rewards_settled`.
#[derive(
    AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace,
)]
pub struct VaultTotals {
    /// Principal currently held for depositors
    pub total_deposits: u64,
    /// Lifetime rewards settled into positions
    pub total_rewards_settled: u64,
    /// Lifetime rewards paid out by claims
    pub total_rewards_claimed: u64,
    /// Lifetime rewards dropped by emergency withdrawals
    pub total_rewards_forfeited: u64,
    /// Lifetime reward reserve contributed through vault funding
    pub total_funded: u64,
}
