/// PDA seeds used throughout the program for account derivation
pub mod seeds {
    /// Seed for the vault state account holding the protocol parameters
    pub const STATE: &[u8] = b"state";

    /// Seed for the per-user position account
    pub const POSITION: &[u8] = b"position";

    /// Seed for the vault authority that owns the custody token account
    pub const VAULT_AUTHORITY: &[u8] = b"vault_authority";

    /// Seed for pending governance action records
    pub const GOVERNANCE_ACTION: &[u8] = b"governance_action";
}

/// Fixed-point scale used by the yield calculator
pub const PRECISION_FACTOR: u128 = 100_000;

/// Largest number of blocks a single settlement can accrue over (~69 days)
pub const MAX_ACCRUAL_WINDOW_BLOCKS: u64 = 10_000;

/// Pending yield never exceeds `deposit / REWARD_CEILING_DIVISOR` (10%)
pub const REWARD_CEILING_DIVISOR: u64 = 10;

/// Maximum configurable yield rate in basis points (100%)
pub const MAX_YIELD_RATE_BPS: u64 = 10_000;

/// Maximum configurable compounding window in blocks (one year of days)
pub const MAX_YIELD_PERIOD_BLOCKS: u64 = 52_560;

/// Lower bound for the per-user deposit cap
pub const MIN_DEPOSIT_LIMIT: u64 = 1_000_000;

/// Upper bound for the per-user deposit cap
pub const MAX_DEPOSIT_LIMIT: u64 = 1_000_000_000_000_000;

/// Blocks per day, used to bucket advisory daily statistics
pub const BLOCKS_PER_DAY: u64 = 144;

cfg_if::cfg_if! {
    if #[cfg(feature = "devnet")] {
        /// Timelock applied when `initialize` is called with a zero timelock
        pub const DEFAULT_TIMELOCK_PERIOD_BLOCKS: u64 = 10;
    } else {
        /// Timelock applied when `initialize` is called with a zero timelock
        pub const DEFAULT_TIMELOCK_PERIOD_BLOCKS: u64 = 144;
    }
}
