pub mod get_protocol_params;
pub mod get_user_position;
pub mod get_vault_balance;

pub use get_protocol_params::*;
pub use get_user_position::*;
pub use get_vault_balance::*;
