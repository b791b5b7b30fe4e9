use crate::constants::seeds;
use crate::ledger::LedgerError;
use crate::state::{UserAccount, VaultState};
use crate::utils::SplVaultTransfer;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Accounts for the outbound position operations
///
/// Shared by `withdraw`, `claim_rewards` and `emergency_withdraw`: each reads
/// and rewrites the caller's position and may move tokens from the vault
/// custody account to the caller.
#[derive(Accounts)]
pub struct PositionTransfer<'info> {
    /// Vault state with parameters and totals
    #[account(
        mut,
        seeds = [seeds::STATE],
        bump = state.bump,
        constraint = state.params.token_mint == token_mint.key() @ LedgerError::InvalidParameter,
    )]
    pub state: Box<Account<'info, VaultState>>,

    /// The caller's position record, omitted when the caller never deposited
    #[account(
        mut,
        seeds = [seeds::POSITION, user.key().as_ref()],
        bump = user_account.bump,
    )]
    pub user_account: Option<Account<'info, UserAccount>>,

    /// Position owner receiving the tokens
    #[account(mut)]
    pub user: Signer<'info>,

    /// Vault token mint
    pub token_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Caller's token account (destination)
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = user,
        token::token_program = token_program,
    )]
    pub user_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// CHECK: PDA derivation is validated by seeds constraint
    #[account(
        seeds = [seeds::VAULT_AUTHORITY],
        bump = state.vault_authority_bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    /// Vault custody token account (source)
    #[account(
        mut,
        associated_token::mint = token_mint,
        associated_token::authority = vault_authority,
        associated_token::token_program = token_program,
    )]
    pub vault_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> PositionTransfer<'info> {
    /// Splits the context into the ledger records and the token collaborator
    ///
    /// A missing position record comes back as `None`; handlers run the core
    /// against an empty position so the usual errors surface.
    pub fn split(
        &mut self,
    ) -> (
        &mut VaultState,
        Option<&mut UserAccount>,
        SplVaultTransfer<'_, 'info>,
    ) {
        let bank = SplVaultTransfer::new(
            &self.token_mint,
            &self.token_program,
            &self.user,
            &self.user_token_account,
            &self.vault_authority,
            self.state.vault_authority_bump,
            &self.vault_token_account,
        );
        (&mut self.state, self.user_account.as_deref_mut(), bank)
    }
}
