//! Guard and lifecycle services for owner-scoped tasks.

mod guard;
mod lifecycle;

pub use guard::{AccessError, OwnershipGuard, require_caller};
pub use lifecycle::{TaskLifecycleService, TaskServiceError, TaskServiceResult};
