//! Task authorization and lifecycle management.
//!
//! This module implements the ownership-guarded task pipeline: resolving a
//! target task and asserting single-owner access before any handler logic
//! runs, binding inbound payloads into validated mutation requests, driving
//! a task's status through its closed state set, and shaping results for the
//! wire. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Validated request variants in [`requests`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Guard and lifecycle services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod requests;
pub mod services;

#[cfg(test)]
mod tests;
