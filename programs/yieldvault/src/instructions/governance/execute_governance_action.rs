use crate::constants::seeds;
use crate::ledger::{governance, GovernanceAction, LedgerError, ProgramLog};
use crate::state::{GovernanceActionAccount, VaultState};
use anchor_lang::prelude::*;

/// Account structure for executing a scheduled governance action
///
/// `governance_action` is optional so that executing an action that was never
/// scheduled reports `ActionNotFound` instead of an account error.
#[derive(Accounts)]
#[instruction(action: GovernanceAction)]
pub struct ExecuteGovernanceAction<'info> {
    #[account(
        mut,
        seeds = [seeds::STATE],
        bump = state.bump,
    )]
    pub state: Box<Account<'info, VaultState>>,

    /// Timelock record keyed by the action
    #[account(
        mut,
        seeds = [seeds::GOVERNANCE_ACTION, &action.seed()],
        bump = governance_action.bump,
        constraint = governance_action.action == action @ LedgerError::ActionNotFound,
    )]
    pub governance_action: Option<Account<'info, GovernanceActionAccount>>,

    pub admin: Signer<'info>,
}

/// Applies a scheduled governance action whose timelock has elapsed
///
/// # Arguments
/// * `ctx` - The instruction context containing validated accounts
/// * `action` - The action to execute, identical to the scheduled one
///
/// # Errors
/// * `Unauthorized` - Caller is not the admin
/// * `ActionNotFound` - No record exists for `action`
/// * `AlreadyExecuted` - The record was executed already
/// * `TimelockNotExpired` - The timelock has not elapsed yet
///
/// # Events
/// * `YieldRateChangedEvent` or `YieldPeriodChangedEvent` - The applied change
/// * `GovernanceActionExecutedEvent` - Emitted after the change
pub fn execute_governance_action(
    ctx: Context<ExecuteGovernanceAction>,
    action: GovernanceAction,
) -> Result<()> {
    let current_block = Clock::get()?.slot;
    let admin = ctx.accounts.admin.key();
    let accounts = &mut *ctx.accounts;

    let record = accounts
        .governance_action
        .as_mut()
        .map(|governance_action| &mut governance_action.record);

    governance::execute_action(
        &mut accounts.state.params,
        &admin,
        action,
        record,
        current_block,
        &mut ProgramLog,
    )?;

    msg!("Governance action {:?} executed at slot {}", action, current_block);
    Ok(())
}
