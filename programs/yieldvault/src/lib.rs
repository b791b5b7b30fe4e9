use anchor_lang::prelude::*;
use contexts::*;
use instructions::*;
use ledger::{GovernanceAction, PositionView, ProtocolParams};

// Program ID declaration
declare_id!("D1qBEftRxeQrB6pkbaRWFickhfEnWsANmicJDqc8jHRn");

pub mod constants;
pub mod contexts;
pub mod instructions;
pub mod ledger;
pub mod state;
pub mod utils;

/// The main program module for the yield vault.
///
/// Depositors lock a single SPL token in a shared custody account and accrue
/// yield per slot on their principal. Rewards are paid from a reserve that
/// anyone can top up with `fund_vault`, held in the same custody account as
/// principal.
///
/// Core functionalities include:
/// - Position management (`deposit`, `withdraw`, `claim_rewards`, `emergency_withdraw`).
/// - Reward reserve funding (`fund_vault`).
/// - Control flags and admin handling (`set_emergency_mode`, `set_protocol_paused`,
///   `set_max_deposit_limit`, `transfer_admin`, `set_token_mint`).
/// - Timelocked yield changes (`schedule_governance_action`, `execute_governance_action`).
/// - Read-only views (`get_user_position`, `get_protocol_params`, `get_vault_balance`).
///
/// # Yield Model
/// Pending yield of a position is
/// `min(deposit * rate_per_block * min(elapsed, 10 000) / 100 000, deposit / 10)`
/// where `rate_per_block = rate_bps * 100 000 / (100 * period)`. Every account
/// operation settles pending yield into the position's accrued rewards and
/// moves its checkpoint to the current slot.
///
/// # Security
/// - Admin checks are enforced in the accounting core for every admin instruction.
/// - The custody account is owned by the vault authority PDA; only outbound
///   transfers are PDA-signed.
/// - Ledger updates that precede a failed transfer are rolled back.
#[program]
pub mod yieldvault {
    use super::*;

    /// Creates the vault state and custody account.
    ///
    /// Delegates to `initialize::initialize`. The signer becomes the admin.
    /// A zero `timelock_period_blocks` selects the default timelock.
    pub fn initialize(
        ctx: Context<Initialize>,
        yield_rate_bps: u64,
        yield_period_blocks: u64,
        max_deposit_limit: u64,
        timelock_period_blocks: u64,
    ) -> Result<()> {
        initialize::initialize(
            ctx,
            yield_rate_bps,
            yield_period_blocks,
            max_deposit_limit,
            timelock_period_blocks,
        )
    }

    /// Deposits principal, settling pending yield first.
    ///
    /// Delegates to `account_operations::deposit`.
    /// Blocked while paused or in emergency mode.
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<u64> {
        deposit::deposit(ctx, amount)
    }

    /// Withdraws principal, settling pending yield first.
    ///
    /// Delegates to `account_operations::withdraw`.
    pub fn withdraw(ctx: Context<PositionTransfer>, amount: u64) -> Result<u64> {
        withdraw::withdraw(ctx, amount)
    }

    /// Pays out all accrued and pending rewards.
    ///
    /// Delegates to `account_operations::claim_rewards`.
    pub fn claim_rewards(ctx: Context<PositionTransfer>) -> Result<u64> {
        claim_rewards::claim_rewards(ctx)
    }

    /// Returns the full principal during emergency mode, forfeiting rewards.
    ///
    /// Delegates to `account_operations::emergency_withdraw`.
    pub fn emergency_withdraw(ctx: Context<PositionTransfer>) -> Result<u64> {
        emergency_withdraw::emergency_withdraw(ctx)
    }

    /// Adds tokens to the reward reserve. Open to anyone.
    pub fn fund_vault(ctx: Context<FundVault>, amount: u64) -> Result<()> {
        fund_vault::fund_vault(ctx, amount)
    }

    /// Toggles emergency mode; enabling also pauses the protocol.
    pub fn set_emergency_mode(ctx: Context<AdminUpdate>, enabled: bool) -> Result<()> {
        set_emergency_mode::set_emergency_mode(ctx, enabled)
    }

    /// Pauses or resumes deposits.
    pub fn set_protocol_paused(ctx: Context<AdminUpdate>, paused: bool) -> Result<()> {
        set_protocol_paused::set_protocol_paused(ctx, paused)
    }

    /// Updates the per-position deposit cap.
    pub fn set_max_deposit_limit(ctx: Context<AdminUpdate>, new_limit: u64) -> Result<()> {
        set_max_deposit_limit::set_max_deposit_limit(ctx, new_limit)
    }

    /// Hands the admin role to a new key.
    pub fn transfer_admin(ctx: Context<AdminUpdate>, new_admin: Pubkey) -> Result<()> {
        transfer_admin::transfer_admin(ctx, new_admin)
    }

    /// Sets the yield rate immediately, bypassing the timelock.
    ///
    /// Delegates to `admin::set_yield_rate`. Prefer `schedule_governance_action`.
    pub fn set_yield_rate(ctx: Context<AdminUpdate>, new_rate_bps: u64) -> Result<()> {
        set_yield_rate::set_yield_rate(ctx, new_rate_bps)
    }

    /// Points the vault at a different token mint.
    pub fn set_token_mint(ctx: Context<SetTokenMint>) -> Result<()> {
        set_token_mint::set_token_mint(ctx)
    }

    /// Schedules a timelocked yield rate or period change.
    ///
    /// Delegates to `governance::schedule_governance_action`.
    pub fn schedule_governance_action(
        ctx: Context<ScheduleGovernanceAction>,
        action: GovernanceAction,
    ) -> Result<()> {
        schedule_governance_action::schedule_governance_action(ctx, action)
    }

    /// Executes a scheduled action once its timelock has elapsed.
    ///
    /// Delegates to `governance::execute_governance_action`.
    pub fn execute_governance_action(
        ctx: Context<ExecuteGovernanceAction>,
        action: GovernanceAction,
    ) -> Result<()> {
        execute_governance_action::execute_governance_action(ctx, action)
    }

    /// Returns a position with its pending yield at the current slot.
    pub fn get_user_position(ctx: Context<GetUserPosition>) -> Result<PositionView> {
        get_user_position::get_user_position(ctx)
    }

    /// Returns the current protocol parameters.
    pub fn get_protocol_params(ctx: Context<GetProtocolParams>) -> Result<ProtocolParams> {
        get_protocol_params::get_protocol_params(ctx)
    }

    /// Returns the custody account balance.
    pub fn get_vault_balance(ctx: Context<GetVaultBalance>) -> Result<u64> {
        get_vault_balance::get_vault_balance(ctx)
    }
}
