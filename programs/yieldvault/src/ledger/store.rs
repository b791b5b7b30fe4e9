use crate::ledger::{
    controls, governance, operations, EventSink, GovernanceAction, Interaction, PendingAction,
    DailyStats, DailyStatsSink, Position, PositionView, ProtocolParams, TokenTransfer, VaultTotals,
};
use anchor_lang::prelude::*;
use std::collections::BTreeMap;

/// Self-contained ledger holding every record of one vault in memory
///
/// Drives the same core functions as the program instructions. Each mutating
/// method takes `&mut self`, so operations run one at a time and each sees a
/// consistent copy of the parameters. Independent ledgers share nothing.
pub struct Ledger<T, E> {
    vault: Pubkey,
    params: ProtocolParams,
    totals: VaultTotals,
    positions: BTreeMap<Pubkey, Position>,
    pending_actions: BTreeMap<GovernanceAction, PendingAction>,
    bank: T,
    sink: E,
}

impl<T: TokenTransfer, E: EventSink> Ledger<T, E> {
    pub fn new(vault: Pubkey, params: ProtocolParams, bank: T, sink: E) -> Self {
        Self {
            vault,
            params,
            totals: VaultTotals::default(),
            positions: BTreeMap::new(),
            pending_actions: BTreeMap::new(),
            bank,
            sink,
        }
    }

    // Reads

    pub fn vault(&self) -> Pubkey {
        self.vault
    }

    pub fn params(&self) -> ProtocolParams {
        self.params
    }

    pub fn totals(&self) -> VaultTotals {
        self.totals
    }

    pub fn position(&self, user: &Pubkey) -> Position {
        self.positions.get(user).copied().unwrap_or_default()
    }

    pub fn positions(&self) -> impl Iterator<Item = (&Pubkey, &Position)> {
        self.positions.iter()
    }

    pub fn deposit_of(&self, user: &Pubkey) -> u64 {
        self.position(user).deposit
    }

    pub fn accrued_rewards_of(&self, user: &Pubkey) -> u64 {
        self.position(user).accrued_rewards
    }

    pub fn total_claimed_of(&self, user: &Pubkey) -> u64 {
        self.position(user).total_claimed
    }

    pub fn yield_rate(&self) -> u64 {
        self.params.yield_rate_bps
    }

    pub fn vault_balance(&self) -> u64 {
        self.bank.balance_of(&self.vault)
    }

    pub fn pending_rewards_of(&self, user: &Pubkey, current_block: u64) -> u64 {
        self.position(user)
            .pending_rewards(&self.params, current_block)
    }

    pub fn position_view(&self, user: &Pubkey, current_block: u64) -> PositionView {
        self.position(user).view(&self.params, current_block)
    }

    pub fn pending_action(&self, action: &GovernanceAction) -> Option<PendingAction> {
        self.pending_actions.get(action).copied()
    }

    pub fn bank(&self) -> &T {
        &self.bank
    }

    pub fn bank_mut(&mut self) -> &mut T {
        &mut self.bank
    }

    pub fn sink(&self) -> &E {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut E {
        &mut self.sink
    }

    // Account operations

    pub fn deposit(&mut self, user: &Pubkey, amount: u64, current_block: u64) -> Result<u64> {
        self.with_position(user, current_block, |params, totals, position, ix| {
            operations::deposit(params, totals, position, amount, ix)
        })
    }

    pub fn withdraw(&mut self, user: &Pubkey, amount: u64, current_block: u64) -> Result<u64> {
        self.with_position(user, current_block, |params, totals, position, ix| {
            operations::withdraw(params, totals, position, amount, ix)
        })
    }

    pub fn claim_rewards(&mut self, user: &Pubkey, current_block: u64) -> Result<u64> {
        self.with_position(user, current_block, |params, totals, position, ix| {
            operations::claim_rewards(params, totals, position, ix)
        })
    }

    pub fn emergency_withdraw(&mut self, user: &Pubkey, current_block: u64) -> Result<u64> {
        self.with_position(user, current_block, |params, totals, position, ix| {
            operations::emergency_withdraw(params, totals, position, ix)
        })
    }

    pub fn fund_vault(&mut self, funder: &Pubkey, amount: u64, current_block: u64) -> Result<()> {
        let mut ix = Interaction {
            user: *funder,
            vault: self.vault,
            current_block,
            bank: &mut self.bank,
            sink: &mut self.sink,
        };
        operations::fund_vault(&mut self.totals, amount, &mut ix)
    }

    // Admin operations

    pub fn set_emergency_mode(
        &mut self,
        caller: &Pubkey,
        enabled: bool,
        current_block: u64,
    ) -> Result<()> {
        controls::set_emergency_mode(&mut self.params, caller, enabled, current_block, &mut self.sink)
    }

    pub fn set_protocol_paused(
        &mut self,
        caller: &Pubkey,
        paused: bool,
        current_block: u64,
    ) -> Result<()> {
        controls::set_protocol_paused(&mut self.params, caller, paused, current_block, &mut self.sink)
    }

    pub fn set_max_deposit_limit(
        &mut self,
        caller: &Pubkey,
        new_limit: u64,
        current_block: u64,
    ) -> Result<()> {
        controls::set_max_deposit_limit(
            &mut self.params,
            caller,
            new_limit,
            current_block,
            &mut self.sink,
        )
    }

    pub fn transfer_admin(
        &mut self,
        caller: &Pubkey,
        new_admin: Pubkey,
        current_block: u64,
    ) -> Result<()> {
        controls::transfer_admin(&mut self.params, caller, new_admin, current_block, &mut self.sink)
    }

    /// Legacy path: applies the rate without the timelock.
    pub fn set_yield_rate(
        &mut self,
        caller: &Pubkey,
        new_rate_bps: u64,
        current_block: u64,
    ) -> Result<()> {
        controls::set_yield_rate_immediate(
            &mut self.params,
            caller,
            new_rate_bps,
            current_block,
            &mut self.sink,
        )
    }

    pub fn set_token_mint(
        &mut self,
        caller: &Pubkey,
        new_mint: Pubkey,
        current_block: u64,
    ) -> Result<()> {
        controls::set_token_mint(&mut self.params, caller, new_mint, current_block, &mut self.sink)
    }

    // Governance

    pub fn schedule_action(
        &mut self,
        caller: &Pubkey,
        action: GovernanceAction,
        current_block: u64,
    ) -> Result<()> {
        let record =
            governance::schedule_action(&self.params, caller, action, current_block, &mut self.sink)?;
        self.pending_actions.insert(action, record);
        Ok(())
    }

    pub fn execute_action(
        &mut self,
        caller: &Pubkey,
        action: GovernanceAction,
        current_block: u64,
    ) -> Result<()> {
        governance::execute_action(
            &mut self.params,
            caller,
            action,
            self.pending_actions.get_mut(&action),
            current_block,
            &mut self.sink,
        )
    }

    /// Runs an account operation against a working copy of the user's position
    /// and writes it back; the operation itself restores the copy on failure.
    fn with_position<R, F>(&mut self, user: &Pubkey, current_block: u64, operation: F) -> Result<R>
    where
        F: FnOnce(
            &ProtocolParams,
            &mut VaultTotals,
            &mut Position,
            &mut Interaction<'_, T, E>,
        ) -> Result<R>,
    {
        let params = self.params;
        let mut position = self.position(user);
        let mut ix = Interaction {
            user: *user,
            vault: self.vault,
            current_block,
            bank: &mut self.bank,
            sink: &mut self.sink,
        };

        let result = operation(&params, &mut self.totals, &mut position, &mut ix);

        if position == Position::default() {
            self.positions.remove(user);
        } else {
            self.positions.insert(*user, position);
        }
        result
    }
}

impl<T: TokenTransfer, A: EventSink> Ledger<T, (A, DailyStatsSink)> {
    /// Activity counters for `day`; zeroed when nothing happened that day.
    pub fn daily_stats(&self, day: u64) -> DailyStats {
        self.sink.1.day(day).copied().unwrap_or_default()
    }
}
