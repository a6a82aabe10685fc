//! User-facing workflows.
//!
//! Each function takes the backend and the [`SessionContext`] explicitly,
//! checks its session preconditions before touching the network, and issues
//! its calls strictly in sequence.
//!
//! [`SessionContext`]: rapport_session::SessionContext

pub mod assessment;
pub mod couple;
pub mod dashboard;
pub mod doctor;
mod error;

#[cfg(test)]
mod memory;

pub use error::WorkflowError;
