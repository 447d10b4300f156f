//! Location service — use-cases for managing locations.

use staffhub_domain::error::{ConflictError, NotFoundError, StaffHubError};
use staffhub_domain::id::LocationId;
use staffhub_domain::location::{Location, LocationPatch, NewLocation};

use crate::ports::{EmployeeRepository, LocationRepository};

/// Application service for location CRUD operations.
pub struct LocationService<LR, ER> {
    locations: LR,
    employees: ER,
}

impl<LR, ER> LocationService<LR, ER>
where
    LR: LocationRepository,
    ER: EmployeeRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(locations: LR, employees: ER) -> Self {
        Self {
            locations,
            employees,
        }
    }

    /// Create a new location after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`StaffHubError::Validation`] if invariants fail,
    /// [`StaffHubError::Conflict`] if a requested id is already taken,
    /// or a storage error propagated from the repository.
    #[tracing::instrument(skip(self, location), fields(location_name = %location.name))]
    pub async fn create(&self, location: NewLocation) -> Result<Location, StaffHubError> {
        location.validate()?;
        if let Some(id) = location.id
            && self.locations.get_by_id(id).await?.is_some()
        {
            return Err(ConflictError::LocationExists { id }.into());
        }
        let created = self.locations.create(location).await?;
        tracing::info!(location_id = %created.id, "location created");
        Ok(created)
    }

    /// List all locations.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn find_all(&self) -> Result<Vec<Location>, StaffHubError> {
        self.locations.get_all().await
    }

    /// Look up a location by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`StaffHubError::NotFound`] when no location with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn find_one(&self, id: LocationId) -> Result<Location, StaffHubError> {
        self.locations
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Apply a partial update to an existing location.
    ///
    /// # Errors
    ///
    /// Returns [`StaffHubError::NotFound`] when the location does not exist,
    /// [`StaffHubError::Validation`] if the patched record breaks an
    /// invariant, or a storage error.
    #[tracing::instrument(skip(self, patch))]
    pub async fn update(
        &self,
        id: LocationId,
        patch: LocationPatch,
    ) -> Result<Location, StaffHubError> {
        let mut location = self.find_one(id).await?;
        patch.apply(&mut location);
        location.validate()?;
        self.locations.update(location).await
    }

    /// Delete a location by id.
    ///
    /// # Errors
    ///
    /// Returns [`StaffHubError::Conflict`] while employees are still assigned
    /// to the location, [`StaffHubError::NotFound`] when it does not exist,
    /// or a storage error.
    #[tracing::instrument(skip(self))]
    pub async fn remove(&self, id: LocationId) -> Result<(), StaffHubError> {
        let assigned = self.employees.find_by_location(id).await?;
        if !assigned.is_empty() {
            return Err(ConflictError::LocationInUse {
                id,
                employees: assigned.len(),
            }
            .into());
        }
        if !self.locations.delete(id).await? {
            return Err(not_found(id));
        }
        tracing::info!(location_id = %id, "location removed");
        Ok(())
    }
}

fn not_found(id: LocationId) -> StaffHubError {
    NotFoundError {
        entity: "Location",
        id: id.to_string(),
    }
    .into()
}
