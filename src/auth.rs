//! Caller identity types.
//!
//! The authenticator collaborator resolves a session into a [`Caller`]
//! before any task operation runs. This crate never constructs or validates
//! credentials; it only reads the caller's identifier. Guard and service
//! operations take the caller as an explicit argument rather than reading it
//! from ambient request state.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Creates a new random user identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a user identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for UserId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Authenticated caller identity attached to one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caller {
    id: UserId,
}

impl Caller {
    /// Creates a caller identity from a resolved user identifier.
    #[must_use]
    pub const fn new(id: UserId) -> Self {
        Self { id }
    }

    /// Returns the caller's user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }
}
