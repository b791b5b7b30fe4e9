pub mod execute_governance_action;
pub mod schedule_governance_action;

pub use execute_governance_action::*;
pub use schedule_governance_action::*;
