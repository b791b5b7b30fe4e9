use anchor_lang::prelude::*;

/// Errors raised by the accounting core and surfaced unchanged by every instruction
#[error_code]
pub enum LedgerError {
    /// Caller lacks the admin role, or a protocol gate blocks the action
    #[msg("Unauthorized")]
    Unauthorized,
    /// Deposits are refused while emergency mode is active
    #[msg("Emergency mode is active")]
    EmergencyActive,
    /// Zero amount, or more than the available balance
    #[msg("Invalid amount")]
    InvalidAmount,
    /// Deposit would push the position above the configured cap
    #[msg("Deposit limit exceeded")]
    DepositLimitExceeded,
    /// Claim exceeds the vault's token balance
    #[msg("Insufficient vault funds")]
    InsufficientVaultFunds,
    /// Token transfer failed during deposit, funding or emergency exit
    #[msg("Token transfer failed")]
    TransferFailed,
    /// Token transfer failed during withdraw; the position was restored
    #[msg("Withdraw failed")]
    WithdrawFailed,
    /// Token transfer failed during claim; the position was restored
    #[msg("Claim failed")]
    ClaimFailed,
    /// Governance or admin value outside its allowed domain
    #[msg("Invalid parameter")]
    InvalidParameter,
    /// Governance action executed before its timelock elapsed
    #[msg("Timelock not expired")]
    TimelockNotExpired,
    /// No governance action scheduled for this key
    #[msg("Governance action not found")]
    ActionNotFound,
    /// Governance action already executed
    #[msg("Governance action already executed")]
    AlreadyExecuted,
    /// Checked arithmetic overflowed
    #[msg("Math overflow")]
    MathOverflow,
}
