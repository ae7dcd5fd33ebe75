//! Wire boundary adapter: inbound payload binding and outward shaping.
//!
//! The transport collaborator deserializes request bodies into the payload
//! shapes here and hands this crate's results back as [`TaskResource`]
//! values. Both directions are pure mappings.

mod payloads;
mod resources;

pub use payloads::{StatusPayload, TaskPayload};
pub use resources::TaskResource;
