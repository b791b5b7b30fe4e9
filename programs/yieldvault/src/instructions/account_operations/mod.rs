pub mod claim_rewards;
pub mod deposit;
pub mod emergency_withdraw;
pub mod fund_vault;
pub mod withdraw;

pub use claim_rewards::*;
pub use deposit::*;
pub use emergency_withdraw::*;
pub use fund_vault::*;
pub use withdraw::*;
