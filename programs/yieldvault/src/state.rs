use crate::ledger::{GovernanceAction, PendingAction, Position, ProtocolParams, VaultTotals};
use anchor_lang::prelude::*;

/// Global vault state
///
/// Holds the protocol parameters and the vault-wide totals. One PDA per
/// program, seeded with `seeds::STATE`.
#[account]
#[derive(InitSpace)]
pub struct VaultState {
    /// Admin, token mint, yield configuration, deposit cap and control flags
    pub params: ProtocolParams,
    /// Running principal and reward totals
    pub totals: VaultTotals,
    /// Bump of the vault authority PDA that owns the custody token account
    pub vault_authority_bump: u8,
    /// PDA bump seed for account derivation
    pub bump: u8,
    /// Reserved space for future state extensions
    pub reserved: [u8; 64],
}

/// Ledger record of one depositor
#[account]
#[derive(InitSpace)]
pub struct UserAccount {
    /// Depositor this record belongs to
    pub owner: Pubkey,
    /// Deposit, rewards and checkpoint
    pub position: Position,
    /// PDA bump seed for account derivation
    pub bump: u8,
}

/// Timelock record for one governance action key
#[account]
#[derive(InitSpace)]
pub struct GovernanceActionAccount {
    /// The action and payload this record was scheduled for
    pub action: GovernanceAction,
    /// Scheduling block and execution flag
    pub record: PendingAction,
    /// PDA bump seed for account derivation
    pub bump: u8,
}
