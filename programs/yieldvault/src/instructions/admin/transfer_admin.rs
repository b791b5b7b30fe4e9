use crate::contexts::AdminUpdate;
use crate::ledger::{controls, ProgramLog};
use anchor_lang::prelude::*;

/// Hands the admin role to `new_admin`, effective immediately
///
/// # Arguments
/// * `ctx` - The instruction context containing validated accounts
/// * `new_admin` - Next admin; the default key is rejected
///
/// # Events
/// * `AdminTransferredEvent` - Emitted with old and new admin
pub fn transfer_admin(ctx: Context<AdminUpdate>, new_admin: Pubkey) -> Result<()> {
    let current_block = Clock::get()?.slot;
    let admin = ctx.accounts.admin.key();

    controls::transfer_admin(
        &mut ctx.accounts.state.params,
        &admin,
        new_admin,
        current_block,
        &mut ProgramLog,
    )?;

    msg!("Admin transferred from {} to {}", admin, new_admin);
    Ok(())
}
