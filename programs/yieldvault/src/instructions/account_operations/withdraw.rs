use crate::contexts::PositionTransfer;
use crate::ledger::{operations, Interaction, Position, ProgramLog};
use anchor_lang::prelude::*;

/// Withdraws principal from the vault
///
/// Settles pending yield on the balance that earned it, reduces the deposit
/// and sends `amount` back to the caller. Allowed while paused and in
/// emergency mode.
///
/// # Arguments
/// * `ctx` - The instruction context containing validated accounts
/// * `amount` - Principal to withdraw, at most the current deposit
///
/// # Returns
/// * `Ok(amount)` - The withdrawn amount
///
/// # Errors
/// * `InvalidAmount` - `amount` is zero or above the deposit
/// * `WithdrawFailed` - The token transfer failed
///
/// # Events
/// * `WithdrawEvent` - Emitted with the remaining deposit and the settled yield
pub fn withdraw(ctx: Context<PositionTransfer>, amount: u64) -> Result<u64> {
    let current_block = Clock::get()?.slot;
    let user = ctx.accounts.user.key();
    let vault = ctx.accounts.vault_authority.key();

    let (state, user_account, mut bank) = ctx.accounts.split();
    let mut empty = Position::default();
    let position = match user_account {
        Some(record) => &mut record.position,
        None => &mut empty,
    };
    let params = state.params;
    let mut sink = ProgramLog;
    let mut ix = Interaction {
        user,
        vault,
        current_block,
        bank: &mut bank,
        sink: &mut sink,
    };
    let withdrawn = operations::withdraw(
        &params,
        &mut state.totals,
        position,
        amount,
        &mut ix,
    )?;

    msg!(
        "Withdraw - user: {}, amount: {}, remaining: {}, slot: {}",
        user,
        withdrawn,
        position.deposit,
        current_block
    );

    Ok(withdrawn)
}
