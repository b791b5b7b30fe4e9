use crate::contexts::AdminUpdate;
use crate::ledger::{controls, ProgramLog};
use anchor_lang::prelude::*;

/// Updates the per-position deposit cap
///
/// Positions already above the new cap keep their principal; they can only
/// withdraw until they are back under it.
///
/// # Arguments
/// * `ctx` - The instruction context containing validated accounts
/// * `new_limit` - New cap, between 1 000 000 and 10^15 base units
///
/// # Errors
/// * `Unauthorized` - Caller is not the admin
/// * `InvalidParameter` - `new_limit` is out of bounds
///
/// # Events
/// * `MaxDepositLimitChangedEvent` - Emitted with old and new cap
pub fn set_max_deposit_limit(ctx: Context<AdminUpdate>, new_limit: u64) -> Result<()> {
    let current_block = Clock::get()?.slot;
    let admin = ctx.accounts.admin.key();

    controls::set_max_deposit_limit(
        &mut ctx.accounts.state.params,
        &admin,
        new_limit,
        current_block,
        &mut ProgramLog,
    )?;

    msg!("Max deposit limit set to {}", new_limit);
    Ok(())
}
