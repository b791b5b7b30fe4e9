use crate::constants::BLOCKS_PER_DAY;
use crate::ledger::{EventSink, LedgerEvent};
use std::collections::BTreeMap;

/// Advisory per-day activity counters; never read by the accounting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DailyStats {
    pub deposit_count: u64,
    pub deposited: u64,
    pub withdraw_count: u64,
    pub withdrawn: u64,
    pub claim_count: u64,
    pub claimed: u64,
    pub emergency_exit_count: u64,
    pub emergency_withdrawn: u64,
}

pub fn day_index(block: u64) -> u64 {
    block / BLOCKS_PER_DAY
}

/// Folds the event stream into `DailyStats` keyed by day index.
#[derive(Clone, Debug, Default)]
pub struct DailyStatsSink {
    days: BTreeMap<u64, DailyStats>,
}

impl DailyStatsSink {
    pub fn day(&self, day: u64) -> Option<&DailyStats> {
        self.days.get(&day)
    }

    pub fn days(&self) -> impl Iterator<Item = (&u64, &DailyStats)> {
        self.days.iter()
    }
}

impl EventSink for DailyStatsSink {
    fn emit(&mut self, event: LedgerEvent) {
        let day = day_index(event.block());
        match event {
            LedgerEvent::Deposit(event) => {
                let stats = self.days.entry(day).or_default();
                stats.deposit_count += 1;
                stats.deposited = stats.deposited.saturating_add(event.amount);
            }
            LedgerEvent::Withdraw(event) => {
                let stats = self.days.entry(day).or_default();
                stats.withdraw_count += 1;
                stats.withdrawn = stats.withdrawn.saturating_add(event.amount);
            }
            LedgerEvent::RewardsClaimed(event) => {
                let stats = self.days.entry(day).or_default();
                stats.claim_count += 1;
                stats.claimed = stats.claimed.saturating_add(event.amount);
            }
            LedgerEvent::EmergencyWithdraw(event) => {
                let stats = self.days.entry(day).or_default();
                stats.emergency_exit_count += 1;
                stats.emergency_withdrawn = stats.emergency_withdrawn.saturating_add(event.amount);
            }
            _ => {}
        }
    }
}
