use crate::ledger::{
    validate_yield_period, validate_yield_rate, EventSink, GovernanceActionExecutedEvent,
    GovernanceActionScheduledEvent, LedgerError, LedgerEvent, ProtocolParams,
    YieldPeriodChangedEvent, YieldRateChangedEvent,
};
use anchor_lang::prelude::*;

/// A parameter change that must wait out the timelock
///
/// The variant together with its payload is the record key: scheduling the
/// same variant with a different value creates an independent record.
#[derive(
    AnchorSerialize,
    AnchorDeserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    InitSpace,
)]
pub enum GovernanceAction {
    /// New yield rate in basis points
    SetYieldRate { rate_bps: u64 },
    /// New compounding window in blocks
    SetYieldPeriod { blocks: u64 },
}

impl GovernanceAction {
    pub fn kind_tag(&self) -> u8 {
        match self {
            GovernanceAction::SetYieldRate { .. } => 0,
            GovernanceAction::SetYieldPeriod { .. } => 1,
        }
    }

    pub fn value(&self) -> u64 {
        match *self {
            GovernanceAction::SetYieldRate { rate_bps } => rate_bps,
            GovernanceAction::SetYieldPeriod { blocks } => blocks,
        }
    }

    /// PDA seed identifying the record: kind tag followed by the little-endian value
    pub fn seed(&self) -> [u8; 9] {
        let mut seed = [0u8; 9];
        seed[0] = self.kind_tag();
        seed[1..].copy_from_slice(&self.value().to_le_bytes());
        seed
    }

    pub fn validate(&self) -> Result<()> {
        match *self {
            GovernanceAction::SetYieldRate { rate_bps } => validate_yield_rate(rate_bps),
            GovernanceAction::SetYieldPeriod { blocks } => validate_yield_period(blocks),
        }
    }

    fn apply<E: EventSink + ?Sized>(
        &self,
        params: &mut ProtocolParams,
        current_block: u64,
        sink: &mut E,
    ) {
        match *self {
            GovernanceAction::SetYieldRate { rate_bps } => {
                let old_rate_bps = params.yield_rate_bps;
                params.yield_rate_bps = rate_bps;
                sink.emit(LedgerEvent::YieldRateChanged(YieldRateChangedEvent {
                    old_rate_bps,
                    new_rate_bps: rate_bps,
                    immediate: false,
                    block: current_block,
                }));
            }
            GovernanceAction::SetYieldPeriod { blocks } => {
                let old_period_blocks = params.yield_period_blocks;
                params.yield_period_blocks = blocks;
                sink.emit(LedgerEvent::YieldPeriodChanged(YieldPeriodChangedEvent {
                    old_period_blocks,
                    new_period_blocks: blocks,
                    block: current_block,
                }));
            }
        }
    }
}

/// Timelock record for one governance action
#[derive(
    AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace,
)]
pub struct PendingAction {
    pub scheduled_at_block: u64,
    pub executed: bool,
}

impl PendingAction {
    /// First block at which the action may execute
    pub fn executable_at(&self, timelock_period_blocks: u64) -> u64 {
        self.scheduled_at_block
            .saturating_add(timelock_period_blocks)
    }
}

/// Records a governance action for later execution.
///
/// Admin only; the payload must already satisfy its parameter bound. The
/// returned record replaces any previous record for the same action, including
/// an executed one, which restarts the timelock.
pub fn schedule_action<E: EventSink + ?Sized>(
    params: &ProtocolParams,
    caller: &Pubkey,
    action: GovernanceAction,
    current_block: u64,
    sink: &mut E,
) -> Result<PendingAction> {
    params.require_admin(caller)?;
    action.validate()?;

    let record = PendingAction {
        scheduled_at_block: current_block,
        executed: false,
    };

    sink.emit(LedgerEvent::GovernanceActionScheduled(
        GovernanceActionScheduledEvent {
            action,
            scheduled_at_block: current_block,
            executable_at_block: record.executable_at(params.timelock_period_blocks),
        },
    ));

    Ok(record)
}

/// Applies a scheduled governance action once its timelock has elapsed.
///
/// # Errors
/// * `Unauthorized` - caller is not the admin
/// * `ActionNotFound` - `record` is `None`
/// * `AlreadyExecuted` - the record was executed already
/// * `TimelockNotExpired` - `current_block < scheduled_at + timelock`
pub fn execute_action<E: EventSink + ?Sized>(
    params: &mut ProtocolParams,
    caller: &Pubkey,
    action: GovernanceAction,
    record: Option<&mut PendingAction>,
    current_block: u64,
    sink: &mut E,
) -> Result<()> {
    params.require_admin(caller)?;
    let record = record.ok_or(LedgerError::ActionNotFound)?;
    require!(!record.executed, LedgerError::AlreadyExecuted);
    require!(
        current_block >= record.executable_at(params.timelock_period_blocks),
        LedgerError::TimelockNotExpired
    );
    action.validate()?;

    action.apply(params, current_block, sink);
    record.executed = true;

    sink.emit(LedgerEvent::GovernanceActionExecuted(
        GovernanceActionExecutedEvent {
            action,
            block: current_block,
        },
    ));

    Ok(())
}
