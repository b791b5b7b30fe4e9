use crate::constants::seeds;
use crate::ledger::{ProtocolParams, VaultTotals};
use crate::state::VaultState;
use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Event emitted when the vault is created
#[event]
pub struct VaultInitializedEvent {
    /// Initial admin
    pub admin: Pubkey,
    /// Mint of the deposited and rewarded token
    pub token_mint: Pubkey,
    pub yield_rate_bps: u64,
    pub yield_period_blocks: u64,
    pub max_deposit_limit: u64,
    /// Effective timelock after defaulting
    pub timelock_period_blocks: u64,
}

/// Account structure for creating the vault
///
/// Creates the global state PDA and the custody token account owned by the
/// vault authority PDA. The signer becomes the first admin.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Global vault state, created here
    #[account(
        init,
        payer = admin,
        space = 8 + VaultState::INIT_SPACE,
        seeds = [seeds::STATE],
        bump
    )]
    pub state: Box<Account<'info, VaultState>>,

    /// Mint the vault accepts and pays rewards in
    pub token_mint: Box<InterfaceAccount<'info, Mint>>,

    /// CHECK: PDA derivation is validated by seeds constraint
    #[account(seeds = [seeds::VAULT_AUTHORITY], bump)]
    pub vault_authority: UncheckedAccount<'info>,

    /// Custody account for principal and the reward reserve
    #[account(
        init,
        payer = admin,
        associated_token::mint = token_mint,
        associated_token::authority = vault_authority,
        associated_token::token_program = token_program
    )]
    pub vault_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Initial admin paying for account creation
    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

/// Creates the vault with its initial parameters
///
/// # Arguments
/// * `ctx` - The instruction context containing validated accounts
/// * `yield_rate_bps` - Yield in basis points per period, at most 10 000
/// * `yield_period_blocks` - Period length in blocks, 1 to 52 560
/// * `max_deposit_limit` - Per-position principal cap
/// * `timelock_period_blocks` - Governance delay; 0 selects the default
///
/// # Errors
/// * `InvalidParameter` - A parameter is outside its bound
pub fn initialize(
    ctx: Context<Initialize>,
    yield_rate_bps: u64,
    yield_period_blocks: u64,
    max_deposit_limit: u64,
    timelock_period_blocks: u64,
) -> Result<()> {
    let params = ProtocolParams::new(
        ctx.accounts.admin.key(),
        ctx.accounts.token_mint.key(),
        yield_rate_bps,
        yield_period_blocks,
        max_deposit_limit,
        timelock_period_blocks,
    )?;

    let state = &mut ctx.accounts.state;
    state.params = params;
    state.totals = VaultTotals::default();
    state.vault_authority_bump = ctx.bumps.vault_authority;
    state.bump = ctx.bumps.state;

    msg!(
        "Vault initialized - admin: {}, mint: {}, rate: {} bps / {} blocks, timelock: {}",
        params.admin,
        params.token_mint,
        params.yield_rate_bps,
        params.yield_period_blocks,
        params.timelock_period_blocks
    );

    emit!(VaultInitializedEvent {
        admin: params.admin,
        token_mint: params.token_mint,
        yield_rate_bps: params.yield_rate_bps,
        yield_period_blocks: params.yield_period_blocks,
        max_deposit_limit: params.max_deposit_limit,
        timelock_period_blocks: params.timelock_period_blocks,
    });

    Ok(())
}
