use crate::contexts::PositionTransfer;
use crate::ledger::{operations, Interaction, Position, ProgramLog};
use anchor_lang::prelude::*;

/// Claims accrued and pending rewards
///
/// # Returns
/// * `Ok(claimed)` - The amount paid out
///
/// # Errors
/// * `InvalidAmount` - Nothing to claim
/// * `InsufficientVaultFunds` - The custody balance is below the claim
/// * `ClaimFailed` - The token transfer failed
///
/// # Events
/// * `RewardsClaimedEvent` - Emitted with the claim and the lifetime total
pub fn claim_rewards(ctx: Context<PositionTransfer>) -> Result<u64> {
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
    let claimed = operations::claim_rewards(
        &params,
        &mut state.totals,
        position,
        &mut ix,
    )?;

    msg!(
        "Rewards claimed - user: {}, amount: {}, total claimed: {}",
        user,
        claimed,
        position.total_claimed
    );

    Ok(claimed)
}
