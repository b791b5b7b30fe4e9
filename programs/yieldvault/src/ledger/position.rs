use crate::ledger::{compute_pending, LedgerError, ProtocolParams, VaultTotals};
use anchor_lang::prelude::*;

/// Per-principal ledger record
#[derive(
    AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace,
)]
pub struct Position {
    /// Current principal balance
    pub deposit: u64,
    /// Rewards settled but not yet claimed
    pub accrued_rewards: u64,
    /// Block at which yield last began accruing
    pub checkpoint_block: u64,
    /// Lifetime claimed rewards, never decreases
    pub total_claimed: u64,
}

impl Position {
    /// Yield earned since the checkpoint and not yet settled
    pub fn pending_rewards(&self, params: &ProtocolParams, current_block: u64) -> u64 {
        compute_pending(
            self.deposit,
            self.checkpoint_block,
            current_block,
            params.yield_rate_bps,
            params.yield_period_blocks,
        )
    }

    /// Moves pending yield into `accrued_rewards` and advances the checkpoint.
    ///
    /// Must run exactly once per deposit, withdraw or claim, before the deposit
    /// changes, so the yield is computed on the balance that earned it.
    /// Returns the amount settled.
    pub fn settle(&mut self, params: &ProtocolParams, current_block: u64) -> Result<u64> {
        let pending = self.pending_rewards(params, current_block);
        self.accrued_rewards = self
            .accrued_rewards
            .checked_add(pending)
            .ok_or(LedgerError::MathOverflow)?;
        self.checkpoint_block = self.checkpoint_block.max(current_block);
        Ok(pending)
    }

    pub fn view(&self, params: &ProtocolParams, current_block: u64) -> PositionView {
        PositionView {
            deposit: self.deposit,
            accrued_rewards: self.accrued_rewards,
            pending_rewards: self.pending_rewards(params, current_block),
            total_claimed: self.total_claimed,
            checkpoint_block: self.checkpoint_block,
        }
    }
}

/// Read-only projection of a position at a given block
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PositionView {
    pub deposit: u64,
    pub accrued_rewards: u64,
    pub pending_rewards: u64,
    pub total_claimed: u64,
    pub checkpoint_block: u64,
}

/// Copy of the records an account operation may touch, taken before mutation
///
/// Restoring from a snapshot is how a failed transfer is compensated: the
/// whole record is written back, so fields added later are covered too.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot {
    position: Position,
    totals: VaultTotals,
}

impl Snapshot {
    pub fn take(position: &Position, totals: &VaultTotals) -> Self {
        Self {
            position: *position,
            totals: *totals,
        }
    }

    /// Restores both records exactly.
    pub fn restore(self, position: &mut Position, totals: &mut VaultTotals) {
        *position = self.position;
        *totals = self.totals;
    }

    /// Restores the principal only. Used by the emergency exit, whose reward
    /// forfeiture stands even when the transfer fails.
    pub fn restore_principal(self, position: &mut Position, totals: &mut VaultTotals) {
        position.deposit = self.position.deposit;
        totals.total_deposits = self.totals.total_deposits;
    }
}
