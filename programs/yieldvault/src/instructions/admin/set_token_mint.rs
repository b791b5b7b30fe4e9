use crate::constants::seeds;
use crate::ledger::{controls, ProgramLog};
use crate::state::VaultState;
use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Account structure for switching the vault token
///
/// Creates the custody account for the new mint if it does not exist yet.
/// Balances held under the previous mint are not migrated.
#[derive(Accounts)]
pub struct SetTokenMint<'info> {
    #[account(
        mut,
        seeds = [seeds::STATE],
        bump = state.bump,
    )]
    pub state: Box<Account<'info, VaultState>>,

    /// The replacement mint
    pub new_mint: Box<InterfaceAccount<'info, Mint>>,

    /// CHECK: PDA derivation is validated by seeds constraint
    #[account(
        seeds = [seeds::VAULT_AUTHORITY],
        bump = state.vault_authority_bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    /// Custody account for the new mint
    #[account(
        init_if_needed,
        payer = admin,
        associated_token::mint = new_mint,
        associated_token::authority = vault_authority,
        associated_token::token_program = token_program
    )]
    pub vault_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

/// Points the vault at a different token mint
///
/// # Errors
/// * `Unauthorized` - Caller is not the admin
///
/// # Events
/// * `TokenMintChangedEvent` - Emitted with old and new mint
pub fn set_token_mint(ctx: Context<SetTokenMint>) -> Result<()> {
    let current_block = Clock::get()?.slot;
    let admin = ctx.accounts.admin.key();
    let new_mint = ctx.accounts.new_mint.key();

    controls::set_token_mint(
        &mut ctx.accounts.state.params,
        &admin,
        new_mint,
        current_block,
        &mut ProgramLog,
    )?;

    msg!("Token mint set to {}", new_mint);
    Ok(())
}
