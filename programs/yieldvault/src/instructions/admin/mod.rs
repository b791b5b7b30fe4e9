pub mod set_emergency_mode;
pub mod set_max_deposit_limit;
pub mod set_protocol_paused;
pub mod set_token_mint;
pub mod set_yield_rate;
pub mod transfer_admin;

pub use set_emergency_mode::*;
pub use set_max_deposit_limit::*;
pub use set_protocol_paused::*;
pub use set_token_mint::*;
pub use set_yield_rate::*;
pub use transfer_admin::*;
