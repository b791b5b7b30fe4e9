use crate::ledger::GovernanceAction;
use anchor_lang::prelude::*;

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DepositEvent {
    pub user: Pubkey,
    pub amount: u64,
    pub new_deposit: u64,
    pub rewards_settled: u64,
    pub block: u64,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WithdrawEvent {
    pub user: Pubkey,
    pub amount: u64,
    pub remaining_deposit: u64,
    pub rewards_settled: u64,
    pub block: u64,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewardsClaimedEvent {
    pub user: Pubkey,
    pub amount: u64,
    pub total_claimed: u64,
    pub block: u64,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmergencyWithdrawEvent {
    pub user: Pubkey,
    pub amount: u64,
    pub rewards_forfeited: u64,
    pub block: u64,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VaultFundedEvent {
    pub funder: Pubkey,
    pub amount: u64,
    pub block: u64,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmergencyModeChangedEvent {
    pub enabled: bool,
    pub protocol_paused: bool,
    pub admin: Pubkey,
    pub block: u64,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProtocolPauseChangedEvent {
    pub paused: bool,
    pub admin: Pubkey,
    pub block: u64,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaxDepositLimitChangedEvent {
    pub old_limit: u64,
    pub new_limit: u64,
    pub block: u64,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminTransferredEvent {
    pub old_admin: Pubkey,
    pub new_admin: Pubkey,
    pub block: u64,
}

/// Emitted for both rate paths; `immediate` marks the legacy setter that
/// skips the timelock.
#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YieldRateChangedEvent {
    pub old_rate_bps: u64,
    pub new_rate_bps: u64,
    pub immediate: bool,
    pub block: u64,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YieldPeriodChangedEvent {
    pub old_period_blocks: u64,
    pub new_period_blocks: u64,
    pub block: u64,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenMintChangedEvent {
    pub old_mint: Pubkey,
    pub new_mint: Pubkey,
    pub block: u64,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GovernanceActionScheduledEvent {
    pub action: GovernanceAction,
    pub scheduled_at_block: u64,
    pub executable_at_block: u64,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GovernanceActionExecutedEvent {
    pub action: GovernanceAction,
    pub block: u64,
}

/// Typed record of a successful mutating operation
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LedgerEvent {
    Deposit(DepositEvent),
    Withdraw(WithdrawEvent),
    RewardsClaimed(RewardsClaimedEvent),
    EmergencyWithdraw(EmergencyWithdrawEvent),
    VaultFunded(VaultFundedEvent),
    EmergencyModeChanged(EmergencyModeChangedEvent),
    ProtocolPauseChanged(ProtocolPauseChangedEvent),
    MaxDepositLimitChanged(MaxDepositLimitChangedEvent),
    AdminTransferred(AdminTransferredEvent),
    YieldRateChanged(YieldRateChangedEvent),
    YieldPeriodChanged(YieldPeriodChangedEvent),
    TokenMintChanged(TokenMintChangedEvent),
    GovernanceActionScheduled(GovernanceActionScheduledEvent),
    GovernanceActionExecuted(GovernanceActionExecutedEvent),
}

impl LedgerEvent {
    /// Block at which the operation took effect
    pub fn block(&self) -> u64 {
        match self {
            LedgerEvent::Deposit(event) => event.block,
            LedgerEvent::Withdraw(event) => event.block,
            LedgerEvent::RewardsClaimed(event) => event.block,
            LedgerEvent::EmergencyWithdraw(event) => event.block,
            LedgerEvent::VaultFunded(event) => event.block,
            LedgerEvent::EmergencyModeChanged(event) => event.block,
            LedgerEvent::ProtocolPauseChanged(event) => event.block,
            LedgerEvent::MaxDepositLimitChanged(event) => event.block,
            LedgerEvent::AdminTransferred(event) => event.block,
            LedgerEvent::YieldRateChanged(event) => event.block,
            LedgerEvent::YieldPeriodChanged(event) => event.block,
            LedgerEvent::TokenMintChanged(event) => event.block,
            LedgerEvent::GovernanceActionScheduled(event) => event.scheduled_at_block,
            LedgerEvent::GovernanceActionExecuted(event) => event.block,
        }
    }
}

/// Outbox the core appends to after each successful mutation
pub trait EventSink {
    fn emit(&mut self, event: LedgerEvent);
}

/// Discards every event.
impl EventSink for () {
    fn emit(&mut self, _event: LedgerEvent) {}
}

/// Fans each event out to both sinks.
impl<A: EventSink, B: EventSink> EventSink for (A, B) {
    fn emit(&mut self, event: LedgerEvent) {
        self.0.emit(event.clone());
        self.1.emit(event);
    }
}

/// Keeps every event in order, for inspection.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    events: Vec<LedgerEvent>,
}

impl RecordingSink {
    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    pub fn last(&self) -> Option<&LedgerEvent> {
        self.events.last()
    }

    pub fn take(&mut self) -> Vec<LedgerEvent> {
        std::mem::take(&mut self.events)
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: LedgerEvent) {
        self.events.push(event);
    }
}

/// Forwards events to the transaction log through Anchor's `emit!`.
pub struct ProgramLog;

impl EventSink for ProgramLog {
    fn emit(&mut self, event: LedgerEvent) {
        match event {
            LedgerEvent::Deposit(event) => emit!(event),
            LedgerEvent::Withdraw(event) => emit!(event),
            LedgerEvent::RewardsClaimed(event) => emit!(event),
            LedgerEvent::EmergencyWithdraw(event) => emit!(event),
            LedgerEvent::VaultFunded(event) => emit!(event),
            LedgerEvent::EmergencyModeChanged(event) => emit!(event),
            LedgerEvent::ProtocolPauseChanged(event) => emit!(event),
            LedgerEvent::MaxDepositLimitChanged(event) => emit!(event),
            LedgerEvent::AdminTransferred(event) => emit!(event),
            LedgerEvent::YieldRateChanged(event) => emit!(event),
            LedgerEvent::YieldPeriodChanged(event) => emit!(event),
            LedgerEvent::TokenMintChanged(event) => emit!(event),
            LedgerEvent::GovernanceActionScheduled(event) => emit!(event),
            LedgerEvent::GovernanceActionExecuted(event) => emit!(event),
        }
    }
}
