//! Accounting core of the vault.
//!
//! Plain data and pure functions: no accounts, no CPI, no clock. Instructions
//! and the in-memory [`Ledger`] both drive these functions, injecting a
//! [`TokenTransfer`] collaborator and an [`EventSink`].

pub mod calculator;
pub mod controls;
pub mod errors;
pub mod events;
pub mod governance;
pub mod operations;
pub mod params;
pub mod position;
pub mod stats;
pub mod store;
pub mod transfer;

pub use calculator::*;
pub use errors::*;
pub use events::*;
pub use governance::{GovernanceAction, PendingAction};
pub use operations::Interaction;
pub use params::*;
pub use position::*;
pub use stats::*;
pub use store::*;
pub use transfer::*;
