use crate::ledger::{
    DepositEvent, EmergencyWithdrawEvent, EventSink, LedgerError, LedgerEvent, Position,
    ProtocolParams, RewardsClaimedEvent, Snapshot, TokenTransfer, VaultFundedEvent, VaultTotals,
    WithdrawEvent,
};
use anchor_lang::prelude::*;

/// Everything an account operation needs beyond the ledger records
pub struct Interaction<'a, T: ?Sized, E: ?Sized> {
    /// Principal the operation runs for
    pub user: Pubkey,
    /// Custody identity holding principal and reward reserve
    pub vault: Pubkey,
    pub current_block: u64,
    pub bank: &'a mut T,
    pub sink: &'a mut E,
}

fn checked_add(lhs: u64, rhs: u64) -> Result<u64> {
    Ok(lhs.checked_add(rhs).ok_or(LedgerError::MathOverflow)?)
}

fn checked_sub(lhs: u64, rhs: u64) -> Result<u64> {
    Ok(lhs.checked_sub(rhs).ok_or(LedgerError::MathOverflow)?)
}

/// Deposits `amount` of principal for `ix.user`.
///
/// Pending yield is settled and the deposit increased on staged copies; the
/// copies are committed only after the inbound transfer succeeds, so a failed
/// transfer leaves nothing behind.
///
/// # Errors
/// * `Unauthorized` - protocol paused
/// * `EmergencyActive` - emergency mode
/// * `InvalidAmount` - zero amount
/// * `DepositLimitExceeded` - resulting deposit above `max_deposit_limit`
/// * `TransferFailed` - the collaborator refused the transfer
pub fn deposit<T, E>(
    params: &ProtocolParams,
    totals: &mut VaultTotals,
    position: &mut Position,
    amount: u64,
    ix: &mut Interaction<'_, T, E>,
) -> Result<u64>
where
    T: TokenTransfer + ?Sized,
    E: EventSink + ?Sized,
{
    require!(!params.protocol_paused, LedgerError::Unauthorized);
    require!(!params.emergency_mode, LedgerError::EmergencyActive);
    require!(amount > 0, LedgerError::InvalidAmount);

    let new_deposit = position
        .deposit
        .checked_add(amount)
        .ok_or(LedgerError::DepositLimitExceeded)?;
    require!(
        new_deposit <= params.max_deposit_limit,
        LedgerError::DepositLimitExceeded
    );

    let mut staged = *position;
    let mut staged_totals = *totals;
    let rewards_settled = staged.settle(params, ix.current_block)?;
    staged.deposit = new_deposit;
    staged_totals.total_deposits = checked_add(staged_totals.total_deposits, amount)?;
    staged_totals.total_rewards_settled =
        checked_add(staged_totals.total_rewards_settled, rewards_settled)?;

    ix.bank
        .transfer(amount, &ix.user, &ix.vault)
        .map_err(|_| LedgerError::TransferFailed)?;

    *position = staged;
    *totals = staged_totals;

    ix.sink.emit(LedgerEvent::Deposit(DepositEvent {
        user: ix.user,
        amount,
        new_deposit,
        rewards_settled,
        block: ix.current_block,
    }));

    Ok(amount)
}

/// Withdraws `amount` of principal to `ix.user`.
///
/// Effects are committed before the outbound transfer; if the transfer fails
/// the position and totals are restored from the snapshot.
///
/// # Errors
/// * `InvalidAmount` - zero, or more than the current deposit
/// * `WithdrawFailed` - the collaborator refused the transfer
pub fn withdraw<T, E>(
    params: &ProtocolParams,
    totals: &mut VaultTotals,
    position: &mut Position,
    amount: u64,
    ix: &mut Interaction<'_, T, E>,
) -> Result<u64>
where
    T: TokenTransfer + ?Sized,
    E: EventSink + ?Sized,
{
    require!(
        amount > 0 && amount <= position.deposit,
        LedgerError::InvalidAmount
    );

    let mut staged = *position;
    let mut staged_totals = *totals;
    let rewards_settled = staged.settle(params, ix.current_block)?;
    staged.deposit -= amount;
    staged_totals.total_deposits = checked_sub(staged_totals.total_deposits, amount)?;
    staged_totals.total_rewards_settled =
        checked_add(staged_totals.total_rewards_settled, rewards_settled)?;

    let snapshot = Snapshot::take(position, totals);
    *position = staged;
    *totals = staged_totals;

    if ix.bank.transfer(amount, &ix.vault, &ix.user).is_err() {
        snapshot.restore(position, totals);
        return err!(LedgerError::WithdrawFailed);
    }

    ix.sink.emit(LedgerEvent::Withdraw(WithdrawEvent {
        user: ix.user,
        amount,
        remaining_deposit: position.deposit,
        rewards_settled,
        block: ix.current_block,
    }));

    Ok(amount)
}

/// Pays out accrued plus pending rewards to `ix.user`.
///
/// # Errors
/// * `InvalidAmount` - nothing to claim
/// * `InsufficientVaultFunds` - vault balance below the claim
/// * `ClaimFailed` - the collaborator refused the transfer; position restored
pub fn claim_rewards<T, E>(
    params: &ProtocolParams,
    totals: &mut VaultTotals,
    position: &mut Position,
    ix: &mut Interaction<'_, T, E>,
) -> Result<u64>
where
    T: TokenTransfer + ?Sized,
    E: EventSink + ?Sized,
{
    let mut staged = *position;
    let mut staged_totals = *totals;
    let rewards_settled = staged.settle(params, ix.current_block)?;
    let claim = staged.accrued_rewards;

    require!(claim > 0, LedgerError::InvalidAmount);
    require!(
        ix.bank.balance_of(&ix.vault) >= claim,
        LedgerError::InsufficientVaultFunds
    );

    staged.accrued_rewards = 0;
    staged.total_claimed = checked_add(staged.total_claimed, claim)?;
    staged_totals.total_rewards_settled =
        checked_add(staged_totals.total_rewards_settled, rewards_settled)?;
    staged_totals.total_rewards_claimed =
        checked_add(staged_totals.total_rewards_claimed, claim)?;

    let snapshot = Snapshot::take(position, totals);
    *position = staged;
    *totals = staged_totals;

    if ix.bank.transfer(claim, &ix.vault, &ix.user).is_err() {
        snapshot.restore(position, totals);
        return err!(LedgerError::ClaimFailed);
    }

    ix.sink.emit(LedgerEvent::RewardsClaimed(RewardsClaimedEvent {
        user: ix.user,
        amount: claim,
        total_claimed: position.total_claimed,
        block: ix.current_block,
    }));

    Ok(claim)
}

/// Returns the full principal to `ix.user` while emergency mode is active.
///
/// Accrued rewards are forfeited. If the transfer fails only the principal is
/// restored; the forfeiture stands.
///
/// # Errors
/// * `Unauthorized` - emergency mode is off
/// * `InvalidAmount` - empty position
/// * `TransferFailed` - the collaborator refused the transfer
pub fn emergency_withdraw<T, E>(
    params: &ProtocolParams,
    totals: &mut VaultTotals,
    position: &mut Position,
    ix: &mut Interaction<'_, T, E>,
) -> Result<u64>
where
    T: TokenTransfer + ?Sized,
    E: EventSink + ?Sized,
{
    require!(params.emergency_mode, LedgerError::Unauthorized);

    let amount = position.deposit;
    require!(amount > 0, LedgerError::InvalidAmount);
    let rewards_forfeited = position.accrued_rewards;

    let mut staged_totals = *totals;
    staged_totals.total_deposits = checked_sub(staged_totals.total_deposits, amount)?;
    staged_totals.total_rewards_forfeited =
        checked_add(staged_totals.total_rewards_forfeited, rewards_forfeited)?;

    let snapshot = Snapshot::take(position, totals);
    position.deposit = 0;
    position.accrued_rewards = 0;
    *totals = staged_totals;

    if ix.bank.transfer(amount, &ix.vault, &ix.user).is_err() {
        snapshot.restore_principal(position, totals);
        return err!(LedgerError::TransferFailed);
    }

    ix.sink.emit(LedgerEvent::EmergencyWithdraw(EmergencyWithdrawEvent {
        user: ix.user,
        amount,
        rewards_forfeited,
        block: ix.current_block,
    }));

    Ok(amount)
}

/// Adds `amount` to the vault's reward reserve. Open to anyone.
///
/// # Errors
/// * `InvalidAmount` - zero amount
/// * `TransferFailed` - the collaborator refused the transfer
pub fn fund_vault<T, E>(
    totals: &mut VaultTotals,
    amount: u64,
    ix: &mut Interaction<'_, T, E>,
) -> Result<()>
where
    T: TokenTransfer + ?Sized,
    E: EventSink + ?Sized,
{
    require!(amount > 0, LedgerError::InvalidAmount);
    let total_funded = checked_add(totals.total_funded, amount)?;

    ix.bank
        .transfer(amount, &ix.user, &ix.vault)
        .map_err(|_| LedgerError::TransferFailed)?;
    totals.total_funded = total_funded;

    ix.sink.emit(LedgerEvent::VaultFunded(VaultFundedEvent {
        funder: ix.user,
        amount,
        block: ix.current_block,
    }));

    Ok(())
}
