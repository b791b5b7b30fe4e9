use crate::contexts::PositionTransfer;
use crate::ledger::{operations, Interaction, Position, ProgramLog};
use anchor_lang::prelude::*;

/// Returns the caller's full principal while emergency mode is active
///
/// Accrued rewards are forfeited and stay forfeited even when the transfer
/// fails; only the principal is put back in that case.
///
/// # Returns
/// * `Ok(amount)` - The principal returned
///
/// # Errors
/// * `Unauthorized` - Emergency mode is off
/// * `InvalidAmount` - The position holds no principal
/// * `TransferFailed` - The token transfer failed
///
/// # Events
/// * `EmergencyWithdrawEvent` - Emitted with the forfeited rewards
pub fn emergency_withdraw(ctx: Context<PositionTransfer>) -> Result<u64> {
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
    let returned = operations::emergency_withdraw(
        &params,
        &mut state.totals,
        position,
        &mut ix,
    )?;

    msg!("Emergency withdraw - user: {}, amount: {}", user, returned);

    Ok(returned)
}
