use crate::contexts::AdminUpdate;
use crate::ledger::{controls, ProgramLog};
use anchor_lang::prelude::*;

/// Sets the yield rate without going through the timelock
///
/// Kept for operators that still call it. Unsettled yield of every position is
/// recomputed at the new rate from its last checkpoint. The emitted
/// `YieldRateChangedEvent` carries `immediate: true` so indexers can tell it
/// apart from a timelocked change.
///
/// # Arguments
/// * `ctx` - The instruction context containing validated accounts
/// * `new_rate_bps` - Rate in basis points per period, at most 10 000
pub fn set_yield_rate(ctx: Context<AdminUpdate>, new_rate_bps: u64) -> Result<()> {
    let current_block = Clock::get()?.slot;
    let admin = ctx.accounts.admin.key();

    controls::set_yield_rate_immediate(
        &mut ctx.accounts.state.params,
        &admin,
        new_rate_bps,
        current_block,
        &mut ProgramLog,
    )?;

    msg!("Yield rate set to {} bps without timelock", new_rate_bps);
    Ok(())
}
