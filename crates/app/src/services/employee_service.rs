//! Employee service — use-cases for managing employees.

use staffhub_domain::employee::{Employee, EmployeePatch};
use staffhub_domain::error::{NotFoundError, StaffHubError};
use staffhub_domain::id::{EmployeeId, LocationId};

use crate::ports::{EmployeeRepository, LocationRepository};

/// Application service for employee CRUD operations.
///
/// Holds a [`LocationRepository`] as well so that every write can check the
/// referenced location exists.
pub struct EmployeeService<ER, LR> {
    employees: ER,
    locations: LR,
}

impl<ER, LR> EmployeeService<ER, LR>
where
    ER: EmployeeRepository,
    LR: LocationRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(employees: ER, locations: LR) -> Self {
        Self {
            employees,
            locations,
        }
    }

    /// Create a new employee after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`StaffHubError::Validation`] if invariants fail,
    /// [`StaffHubError::NotFound`] if the referenced location does not exist,
    /// or a storage error propagated from the repository.
    #[tracing::instrument(skip(self, employee), fields(employee_name = %employee.name))]
    pub async fn create(&self, employee: Employee) -> Result<Employee, StaffHubError> {
        employee.validate()?;
        self.ensure_location(employee.location_id).await?;
        let created = self.employees.create(employee).await?;
        tracing::info!(employee_id = %created.id, "employee created");
        Ok(created)
    }

    /// List all employees.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn find_all(&self) -> Result<Vec<Employee>, StaffHubError> {
        self.employees.get_all().await
    }

    /// Look up an employee by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`StaffHubError::NotFound`] when no employee with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn find_one(&self, id: EmployeeId) -> Result<Employee, StaffHubError> {
        self.employees
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// List the employees assigned to `location_id`.
    ///
    /// An unknown location yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn find_by_location(
        &self,
        location_id: LocationId,
    ) -> Result<Vec<Employee>, StaffHubError> {
        self.employees.find_by_location(location_id).await
    }

    /// Apply a partial update to an existing employee.
    ///
    /// # Errors
    ///
    /// Returns [`StaffHubError::NotFound`] if the employee or the newly
    /// referenced location does not exist, [`StaffHubError::Validation`] if
    /// the patched record breaks an invariant, or a storage error.
    #[tracing::instrument(skip(self, patch))]
    pub async fn update(
        &self,
        id: EmployeeId,
        patch: EmployeePatch,
    ) -> Result<Employee, StaffHubError> {
        let mut employee = self.find_one(id).await?;
        let location_changed = patch
            .location_id
            .is_some_and(|location_id| location_id != employee.location_id);
        patch.apply(&mut employee);
        employee.validate()?;
        if location_changed {
            self.ensure_location(employee.location_id).await?;
        }
        self.employees.update(employee).await
    }

    /// Delete an employee by id.
    ///
    /// # Errors
    ///
    /// Returns [`StaffHubError::NotFound`] when no employee with `id` exists,
    /// or a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn remove(&self, id: EmployeeId) -> Result<(), StaffHubError> {
        if !self.employees.delete(id).await? {
            return Err(not_found(id));
        }
        tracing::info!(employee_id = %id, "employee removed");
        Ok(())
    }

    async fn ensure_location(&self, id: LocationId) -> Result<(), StaffHubError> {
        match self.locations.get_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(NotFoundError {
                entity: "Location",
                id: id.to_string(),
            }
            .into()),
        }
    }
}

fn not_found(id: EmployeeId) -> StaffHubError {
    NotFoundError {
        entity: "Employee",
        id: id.to_string(),
    }
    .into()
}
