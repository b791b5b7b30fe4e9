pub mod account_operations;
pub mod admin;
pub mod governance;
pub mod initialize;
pub mod market_info;

pub use account_operations::*;
pub use admin::*;
pub use governance::*;
pub use initialize::*;
pub use market_info::*;
