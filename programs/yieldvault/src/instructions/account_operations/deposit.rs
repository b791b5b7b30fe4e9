use crate::constants::seeds;
use crate::ledger::{operations, Interaction, LedgerError, ProgramLog};
use crate::state::{UserAccount, VaultState};
use crate::utils::SplVaultTransfer;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Account structure for depositing principal
///
/// The position record is created on first deposit, paid for by the
/// depositor.
#[derive(Accounts)]
pub struct Deposit<'info> {
    /// Vault state with parameters and totals
    #[account(
        mut,
        seeds = [seeds::STATE],
        bump = state.bump,
        constraint = state.params.token_mint == token_mint.key() @ LedgerError::InvalidParameter,
    )]
    pub state: Box<Account<'info, VaultState>>,

    /// The depositor's position record
    #[account(
        init_if_needed,
        payer = user,
        space = 8 + UserAccount::INIT_SPACE,
        seeds = [seeds::POSITION, user.key().as_ref()],
        bump
    )]
    pub user_account: Box<Account<'info, UserAccount>>,

    /// Depositor and payer for the position record
    #[account(mut)]
    pub user: Signer<'info>,

    /// Vault token mint
    pub token_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Depositor's token account (source)
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

    /// Vault custody token account (destination)
    #[account(
        mut,
        associated_token::mint = token_mint,
        associated_token::authority = vault_authority,
        associated_token::token_program = token_program,
    )]
    pub vault_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> Deposit<'info> {
    fn split(&mut self) -> (&mut VaultState, &mut UserAccount, SplVaultTransfer<'_, 'info>) {
        let bank = SplVaultTransfer::new(
            &self.token_mint,
            &self.token_program,
            &self.user,
            &self.user_token_account,
            &self.vault_authority,
            self.state.vault_authority_bump,
            &self.vault_token_account,
        );
        (&mut self.state, &mut self.user_account, bank)
    }
}

/// Deposits principal into the vault
///
/// Settles pending yield at the current slot into the position's accrued
/// rewards, then moves `amount` from the depositor to the custody account.
/// The position is only updated once the transfer succeeded.
///
/// # Arguments
/// * `ctx` - The instruction context containing validated accounts
/// * `amount` - Principal to deposit, in token base units
///
/// # Returns
/// * `Ok(amount)` - The deposited amount
///
/// # Errors
/// * `Unauthorized` - The protocol is paused
/// * `EmergencyActive` - Emergency mode is on
/// * `InvalidAmount` - `amount` is zero
/// * `DepositLimitExceeded` - The resulting deposit exceeds the per-position cap
/// * `TransferFailed` - The token transfer failed
///
/// # Events
/// * `DepositEvent` - Emitted with the new deposit and the settled yield
pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<u64> {
    let current_block = Clock::get()?.slot;
    let user = ctx.accounts.user.key();
    let vault = ctx.accounts.vault_authority.key();
    let bump = ctx.bumps.user_account;

    let (state, user_account, mut bank) = ctx.accounts.split();
    if user_account.owner == Pubkey::default() {
        user_account.owner = user;
        user_account.bump = bump;
    }

    let params = state.params;
    let mut sink = ProgramLog;
    let mut ix = Interaction {
        user,
        vault,
        current_block,
        bank: &mut bank,
        sink: &mut sink,
    };
    let deposited = operations::deposit(
        &params,
        &mut state.totals,
        &mut user_account.position,
        amount,
        &mut ix,
    )?;

    msg!(
        "Deposit - user: {}, amount: {}, deposit: {}, slot: {}",
        user,
        deposited,
        user_account.position.deposit,
        current_block
    );

    Ok(deposited)
}
