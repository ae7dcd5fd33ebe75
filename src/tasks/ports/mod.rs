//! Port contracts for task persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the guard and
//! lifecycle services.

pub mod store;

pub use store::{TaskStore, TaskStoreError, TaskStoreResult};
