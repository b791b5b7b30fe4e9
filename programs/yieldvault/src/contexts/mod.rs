pub mod admin_context;
pub mod position_context;

pub use admin_context::*;
pub use position_context::*;
