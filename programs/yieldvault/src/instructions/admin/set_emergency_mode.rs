use crate::contexts::AdminUpdate;
use crate::ledger::{controls, ProgramLog};
use anchor_lang::prelude::*;

/// Turns emergency mode on or off
///
/// Enabling emergency mode also pauses the protocol. Disabling it leaves the
/// pause flag untouched; call `set_protocol_paused` to resume deposits.
///
/// # Arguments
/// * `ctx` - The instruction context containing validated accounts
/// * `enabled` - New emergency flag
///
/// # Events
/// * `EmergencyModeChangedEvent` - Emitted with both resulting flags
pub fn set_emergency_mode(ctx: Context<AdminUpdate>, enabled: bool) -> Result<()> {
    let current_block = Clock::get()?.slot;
    let admin = ctx.accounts.admin.key();
    let params = &mut ctx.accounts.state.params;

    controls::set_emergency_mode(params, &admin, enabled, current_block, &mut ProgramLog)?;

    msg!(
        "Emergency mode: {}, paused: {}",
        params.emergency_mode,
        params.protocol_paused
    );
    Ok(())
}
