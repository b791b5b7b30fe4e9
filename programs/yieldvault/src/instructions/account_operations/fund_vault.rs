use crate::constants::seeds;
use crate::ledger::{operations, Interaction, LedgerError, ProgramLog};
use crate::state::VaultState;
use crate::utils::SplVaultTransfer;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Account structure for topping up the reward reserve
#[derive(Accounts)]
pub struct FundVault<'info> {
    /// Vault state, for the funded total
    #[account(
        mut,
        seeds = [seeds::STATE],
        bump = state.bump,
        constraint = state.params.token_mint == token_mint.key() @ LedgerError::InvalidParameter,
    )]
    pub state: Box<Account<'info, VaultState>>,

    /// Anyone may fund the vault
    pub funder: Signer<'info>,

    pub token_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Funder's token account (source)
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = funder,
        token::token_program = token_program,
    )]
    pub funder_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// CHECK: PDA derivation is validated by seeds constraint
    #[account(
        seeds = [seeds::VAULT_AUTHORITY],
        bump = state.vault_authority_bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    /// Vault custody token account (destination)
    #[account(
        mut,
        associated_token::mint = token_mint,
        associated_token::authority = vault_authority,
        associated_token::token_program = token_program,
    )]
    pub vault_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Transfers tokens into the custody account as reward reserve
///
/// Funding does not touch any position. Rewards are paid from the same
/// custody account as principal, so an underfunded vault fails claims with
/// `InsufficientVaultFunds`.
///
/// # Arguments
/// * `ctx` - The instruction context containing validated accounts
/// * `amount` - Amount to add to the reserve
///
/// # Events
/// * `VaultFundedEvent` - Emitted with the funder and amount
pub fn fund_vault(ctx: Context<FundVault>, amount: u64) -> Result<()> {
    let current_block = Clock::get()?.slot;
    let accounts = &mut *ctx.accounts;
    let funder = accounts.funder.key();

    let mut bank = SplVaultTransfer::new(
        &accounts.token_mint,
        &accounts.token_program,
        &accounts.funder,
        &accounts.funder_token_account,
        &accounts.vault_authority,
        accounts.state.vault_authority_bump,
        &accounts.vault_token_account,
    );
    let mut sink = ProgramLog;
    let mut ix = Interaction {
        user: funder,
        vault: accounts.vault_authority.key(),
        current_block,
        bank: &mut bank,
        sink: &mut sink,
    };
    operations::fund_vault(&mut accounts.state.totals, amount, &mut ix)?;

    msg!("Vault funded - funder: {}, amount: {}", funder, amount);

    Ok(())
}
