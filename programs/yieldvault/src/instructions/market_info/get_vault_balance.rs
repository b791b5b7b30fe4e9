use crate::constants::seeds;
use crate::ledger::LedgerError;
use crate::state::VaultState;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Account structure for reading the custody balance
#[derive(Accounts)]
pub struct GetVaultBalance<'info> {
    #[account(
        seeds = [seeds::STATE],
        bump = state.bump,
        constraint = state.params.token_mint == token_mint.key() @ LedgerError::InvalidParameter,
    )]
    pub state: Box<Account<'info, VaultState>>,

    pub token_mint: Box<InterfaceAccount<'info, Mint>>,

    /// CHECK: PDA derivation is validated by seeds constraint
    #[account(
        seeds = [seeds::VAULT_AUTHORITY],
        bump = state.vault_authority_bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        associated_token::mint = token_mint,
        associated_token::authority = vault_authority,
        associated_token::token_program = token_program,
    )]
    pub vault_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Returns the custody balance, principal and reward reserve together
pub fn get_vault_balance(ctx: Context<GetVaultBalance>) -> Result<u64> {
    let balance = ctx.accounts.vault_token_account.amount;
    let totals = ctx.accounts.state.totals;

    msg!(
        "Vault balance: {}, deposits: {}, reserve: {}",
        balance,
        totals.total_deposits,
        balance.saturating_sub(totals.total_deposits)
    );

    Ok(balance)
}
