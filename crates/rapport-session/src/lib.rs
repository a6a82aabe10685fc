//! # rapport-session
//!
//! The three identifiers that survive between invocations: the logged-in
//! doctor, the selected couple, and the selected assessment.
//!
//! [`SessionStore`] persists them as JSON under `~/.rapport/`.
//! [`SessionContext`] is the in-memory view handed to every workflow; its
//! `require_*` accessors turn a missing identifier into a typed
//! [`SessionError::Missing`] instead of a silent no-op.

pub mod context;
pub mod error;
pub mod store;

pub use context::{SessionContext, SessionState};
pub use error::{SessionError, SessionKey};
pub use store::SessionStore;
