use crate::constants::seeds;
use crate::state::VaultState;
use anchor_lang::prelude::*;

/// Accounts shared by the immediate admin instructions
///
/// The admin check itself happens in the ledger core so every entry point
/// reports `LedgerError::Unauthorized` the same way.
#[derive(Accounts)]
pub struct AdminUpdate<'info> {
    /// Vault state holding the parameters being changed
    #[account(
        mut,
        seeds = [seeds::STATE],
        bump = state.bump,
    )]
    pub state: Box<Account<'info, VaultState>>,

    /// The account claiming the admin role
    pub admin: Signer<'info>,
}
