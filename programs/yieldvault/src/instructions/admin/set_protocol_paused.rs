use crate::contexts::AdminUpdate;
use crate::ledger::{controls, ProgramLog};
use anchor_lang::prelude::*;

/// Pauses or resumes deposits. Withdrawals and claims are unaffected.
pub fn set_protocol_paused(ctx: Context<AdminUpdate>, paused: bool) -> Result<()> {
    let current_block = Clock::get()?.slot;
    let admin = ctx.accounts.admin.key();

    controls::set_protocol_paused(
        &mut ctx.accounts.state.params,
        &admin,
        paused,
        current_block,
        &mut ProgramLog,
    )?;

    msg!("Protocol paused: {}", paused);
    Ok(())
}
