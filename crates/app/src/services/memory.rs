//! In-memory repositories shared by the service tests.

use std::collections::{BTreeMap, HashMap};
use std::future::Future;
use std::sync::{Arc, Mutex};

use staffhub_domain::employee::Employee;
use staffhub_domain::error::StaffHubError;
use staffhub_domain::id::{EmployeeId, LocationId};
use staffhub_domain::location::{Location, NewLocation};

use crate::ports::{EmployeeRepository, LocationRepository};

#[derive(Default)]
struct State {
    employees: HashMap<EmployeeId, Employee>,
    locations: BTreeMap<LocationId, Location>,
}

/// Both repositories over one shared map so services see each other's writes.
#[derive(Clone, Default)]
pub(crate) struct MemoryStore {
    state: Arc<Mutex<State>>,
}

impl EmployeeRepository for MemoryStore {
    fn create(
        &self,
        employee: Employee,
    ) -> impl Future<Output = Result<Employee, StaffHubError>> + Send {
        let mut state = self.state.lock().unwrap();
        state.employees.insert(employee.id, employee.clone());
        async { Ok(employee) }
    }

    fn get_by_id(
        &self,
        id: EmployeeId,
    ) -> impl Future<Output = Result<Option<Employee>, StaffHubError>> + Send {
        let state = self.state.lock().unwrap();
        let result = state.employees.get(&id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Employee>, StaffHubError>> + Send {
        let state = self.state.lock().unwrap();
        let result: Vec<Employee> = state.employees.values().cloned().collect();
        async { Ok(result) }
    }

    fn find_by_location(
        &self,
        location_id: LocationId,
    ) -> impl Future<Output = Result<Vec<Employee>, StaffHubError>> + Send {
        let state = self.state.lock().unwrap();
        let result: Vec<Employee> = state
            .employees
            .values()
            .filter(|e| e.location_id == location_id)
            .cloned()
            .collect();
        async { Ok(result) }
    }

    fn update(
        &self,
        employee: Employee,
    ) -> impl Future<Output = Result<Employee, StaffHubError>> + Send {
        let mut state = self.state.lock().unwrap();
        state.employees.insert(employee.id, employee.clone());
        async { Ok(employee) }
    }

    fn delete(&self, id: EmployeeId) -> impl Future<Output = Result<bool, StaffHubError>> + Send {
        let mut state = self.state.lock().unwrap();
        let removed = state.employees.remove(&id).is_some();
        async move { Ok(removed) }
    }
}

impl LocationRepository for MemoryStore {
    fn create(
        &self,
        location: NewLocation,
    ) -> impl Future<Output = Result<Location, StaffHubError>> + Send {
        let mut state = self.state.lock().unwrap();
        let id = location.id.unwrap_or_else(|| {
            let next = state.locations.keys().next_back().map_or(1, |id| id.get() + 1);
            LocationId::new(next)
        });
        let location = location.into_location(id);
        state.locations.insert(id, location.clone());
        async { Ok(location) }
    }

    fn get_by_id(
        &self,
        id: LocationId,
    ) -> impl Future<Output = Result<Option<Location>, StaffHubError>> + Send {
        let state = self.state.lock().unwrap();
        let result = state.locations.get(&id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Location>, StaffHubError>> + Send {
        let state = self.state.lock().unwrap();
        let result: Vec<Location> = state.locations.values().cloned().collect();
        async { Ok(result) }
    }

    fn update(
        &self,
        location: Location,
    ) -> impl Future<Output = Result<Location, StaffHubError>> + Send {
        let mut state = self.state.lock().unwrap();
        state.locations.insert(location.id, location.clone());
        async { Ok(location) }
    }

    fn delete(&self, id: LocationId) -> impl Future<Output = Result<bool, StaffHubError>> + Send {
        let mut state = self.state.lock().unwrap();
        let removed = state.locations.remove(&id).is_some();
        async move { Ok(removed) }
    }
}
