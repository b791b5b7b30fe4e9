use crate::constants::seeds;
use crate::ledger::{governance, GovernanceAction, ProgramLog};
use crate::state::{GovernanceActionAccount, VaultState};
use anchor_lang::prelude::*;

/// Account structure for scheduling a timelocked parameter change
///
/// Each action kind and payload value maps to its own record PDA. Scheduling
/// the same action again overwrites the record and restarts the timelock.
#[derive(Accounts)]
#[instruction(action: GovernanceAction)]
pub struct ScheduleGovernanceAction<'info> {
    #[account(seeds = [seeds::STATE], bump = state.bump)]
    pub state: Box<Account<'info, VaultState>>,

    /// Timelock record keyed by the action
    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + GovernanceActionAccount::INIT_SPACE,
        seeds = [seeds::GOVERNANCE_ACTION, &action.seed()],
        bump
    )]
    pub governance_action: Box<Account<'info, GovernanceActionAccount>>,

    /// Admin, also paying for the record
    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Schedules a governance action at the current slot
///
/// The action becomes executable once `timelock_period_blocks` slots have
/// passed.
///
/// # Arguments
/// * `ctx` - The instruction context containing validated accounts
/// * `action` - Parameter change to schedule
///
/// # Errors
/// * `Unauthorized` - Caller is not the admin
/// * `InvalidParameter` - The payload is out of bounds
///
/// # Events
/// * `GovernanceActionScheduledEvent` - Emitted with the executable slot
pub fn schedule_governance_action(
    ctx: Context<ScheduleGovernanceAction>,
    action: GovernanceAction,
) -> Result<()> {
    let current_block = Clock::get()?.slot;
    let admin = ctx.accounts.admin.key();

    let record = governance::schedule_action(
        &ctx.accounts.state.params,
        &admin,
        action,
        current_block,
        &mut ProgramLog,
    )?;

    let governance_action = &mut ctx.accounts.governance_action;
    governance_action.action = action;
    governance_action.record = record;
    governance_action.bump = ctx.bumps.governance_action;

    msg!(
        "Governance action {:?} scheduled at slot {}, executable at {}",
        action,
        current_block,
        record.executable_at(ctx.accounts.state.params.timelock_period_blocks)
    );
    Ok(())
}
