use crate::constants::seeds;
use crate::ledger::{Position, PositionView};
use crate::state::{UserAccount, VaultState};
use anchor_lang::prelude::*;

/// Account structure for reading a position
#[derive(Accounts)]
pub struct GetUserPosition<'info> {
    #[account(seeds = [seeds::STATE], bump = state.bump)]
    pub state: Box<Account<'info, VaultState>>,

    /// Position record of `owner`, omitted for an owner who never deposited
    #[account(
        seeds = [seeds::POSITION, owner.key().as_ref()],
        bump = user_account.bump,
    )]
    pub user_account: Option<Account<'info, UserAccount>>,

    /// CHECK: Only used as a seed for the position PDA
    pub owner: UncheckedAccount<'info>,
}

/// Returns a position as of the current slot
///
/// Read-only; pending yield is computed but not settled. An owner without a
/// position record reads as an all-zero view.
///
/// # Returns
/// * `Ok(view)` - Deposit, accrued and pending rewards, lifetime claims and checkpoint
pub fn get_user_position(ctx: Context<GetUserPosition>) -> Result<PositionView> {
    let current_block = Clock::get()?.slot;
    let position = ctx
        .accounts
        .user_account
        .as_ref()
        .map(|record| record.position)
        .unwrap_or_default();
    let view = position.view(&ctx.accounts.state.params, current_block);

    msg!(
        "Position - owner: {}, deposit: {}, accrued: {}, pending: {}, claimed: {}",
        ctx.accounts.owner.key(),
        view.deposit,
        view.accrued_rewards,
        view.pending_rewards,
        view.total_claimed
    );

    Ok(view)
}
