//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`StaffHubError`] via `#[from]`.

use crate::id::LocationId;

/// Top-level error returned by services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum StaffHubError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Conflict(#[from] ConflictError),

    /// Opaque failure from a storage adapter.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A domain invariant was violated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("address must not be empty")]
    EmptyAddress,

    #[error("email address is invalid")]
    InvalidEmail,

    #[error("coordinates are out of range")]
    InvalidCoordinates,

    #[error("identifier is malformed")]
    InvalidId,

    #[error("a location reference is required")]
    MissingLocation,
}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found: {id}")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// The operation clashes with the current state of the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConflictError {
    #[error("location {id} is still assigned to {employees} employee(s)")]
    LocationInUse { id: LocationId, employees: usize },

    #[error("location {id} already exists")]
    LocationExists { id: LocationId },
}
