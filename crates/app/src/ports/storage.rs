//! Storage port — repository traits for persistence.

use std::future::Future;

use staffhub_domain::employee::Employee;
use staffhub_domain::error::StaffHubError;
use staffhub_domain::id::{EmployeeId, LocationId};
use staffhub_domain::location::{Location, NewLocation};

/// Repository for persisting and querying [`Employee`]s.
pub trait EmployeeRepository {
    /// Insert a new employee.
    fn create(
        &self,
        employee: Employee,
    ) -> impl Future<Output = Result<Employee, StaffHubError>> + Send;

    /// Get an employee by its unique identifier.
    fn get_by_id(
        &self,
        id: EmployeeId,
    ) -> impl Future<Output = Result<Option<Employee>, StaffHubError>> + Send;

    /// Get all employees.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Employee>, StaffHubError>> + Send;

    /// Get the employees assigned to `location_id`.
    fn find_by_location(
        &self,
        location_id: LocationId,
    ) -> impl Future<Output = Result<Vec<Employee>, StaffHubError>> + Send;

    /// Overwrite an existing employee.
    fn update(
        &self,
        employee: Employee,
    ) -> impl Future<Output = Result<Employee, StaffHubError>> + Send;

    /// Delete an employee, returning whether a record was removed.
    fn delete(&self, id: EmployeeId) -> impl Future<Output = Result<bool, StaffHubError>> + Send;
}

/// Repository for persisting and querying [`Location`]s.
pub trait LocationRepository {
    /// Insert a new location. The store assigns the id unless `location.id` is set.
    fn create(
        &self,
        location: NewLocation,
    ) -> impl Future<Output = Result<Location, StaffHubError>> + Send;

    /// Get a location by its identifier.
    fn get_by_id(
        &self,
        id: LocationId,
    ) -> impl Future<Output = Result<Option<Location>, StaffHubError>> + Send;

    /// Get all locations.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Location>, StaffHubError>> + Send;

    /// Overwrite an existing location.
    fn update(
        &self,
        location: Location,
    ) -> impl Future<Output = Result<Location, StaffHubError>> + Send;

    /// Delete a location, returning whether a record was removed.
    fn delete(&self, id: LocationId) -> impl Future<Output = Result<bool, StaffHubError>> + Send;
}
