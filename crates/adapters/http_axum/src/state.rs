//! Shared application state for axum handlers.

use std::sync::Arc;

use staffhub_app::ports::{EmployeeRepository, LocationRepository};
use staffhub_app::services::employee_service::EmployeeService;
use staffhub_app::services::location_service::LocationService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<ER, LR> {
    /// Employee CRUD service.
    pub employee_service: Arc<EmployeeService<ER, LR>>,
    /// Location CRUD service.
    pub location_service: Arc<LocationService<LR, ER>>,
}

impl<ER, LR> Clone for AppState<ER, LR> {
    fn clone(&self) -> Self {
        Self {
            employee_service: Arc::clone(&self.employee_service),
            location_service: Arc::clone(&self.location_service),
        }
    }
}

impl<ER, LR> AppState<ER, LR>
where
    ER: EmployeeRepository + Send + Sync + 'static,
    LR: LocationRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        employee_service: EmployeeService<ER, LR>,
        location_service: LocationService<LR, ER>,
    ) -> Self {
        Self {
            employee_service: Arc::new(employee_service),
            location_service: Arc::new(location_service),
        }
    }
}
