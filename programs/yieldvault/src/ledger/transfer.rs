use crate::ledger::LedgerError;
use anchor_lang::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

/// Token movement collaborator used by the account operations
///
/// A transfer either moves the full amount or fails with no effect; the core
/// never assumes a partial transfer.
pub trait TokenTransfer {
    fn transfer(&mut self, amount: u64, from: &Pubkey, to: &Pubkey) -> Result<()>;

    fn balance_of(&self, account: &Pubkey) -> u64;
}

/// In-memory token balances backing simulated ledgers
///
/// Failures can be injected per transfer or per account to exercise the
/// compensation paths.
#[derive(Clone, Debug, Default)]
pub struct MemoryBank {
    balances: BTreeMap<Pubkey, u64>,
    frozen: BTreeSet<Pubkey>,
    failing_transfers: u32,
}

impl MemoryBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits `amount` out of thin air.
    pub fn mint(&mut self, account: &Pubkey, amount: u64) {
        let balance = self.balances.entry(*account).or_default();
        *balance = balance.saturating_add(amount);
    }

    /// Makes the next `count` transfers fail.
    pub fn fail_next_transfers(&mut self, count: u32) {
        self.failing_transfers = count;
    }

    /// Any transfer touching a frozen account fails until it is thawed.
    pub fn freeze(&mut self, account: &Pubkey) {
        self.frozen.insert(*account);
    }

    pub fn thaw(&mut self, account: &Pubkey) {
        self.frozen.remove(account);
    }

    pub fn total_supply(&self) -> u128 {
        self.balances.values().map(|balance| *balance as u128).sum()
    }
}

impl TokenTransfer for MemoryBank {
    fn transfer(&mut self, amount: u64, from: &Pubkey, to: &Pubkey) -> Result<()> {
        if self.failing_transfers > 0 {
            self.failing_transfers -= 1;
            return err!(LedgerError::TransferFailed);
        }
        require!(
            !self.frozen.contains(from) && !self.frozen.contains(to),
            LedgerError::TransferFailed
        );

        let from_balance = self.balance_of(from);
        require!(from_balance >= amount, LedgerError::TransferFailed);
        let to_balance = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(LedgerError::MathOverflow)?;

        self.balances.insert(*from, from_balance - amount);
        self.balances.insert(*to, to_balance);
        Ok(())
    }

    fn balance_of(&self, account: &Pubkey) -> u64 {
        self.balances.get(account).copied().unwrap_or_default()
    }
}
