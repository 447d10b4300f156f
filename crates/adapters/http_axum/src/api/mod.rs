//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod employees;
#[allow(clippy::missing_errors_doc)]
pub mod locations;

use axum::Router;
use axum::middleware::from_fn;
use axum::routing::{delete, get, patch, post};

use staffhub_app::ports::{EmployeeRepository, LocationRepository};
use staffhub_domain::role::Role;

use crate::auth::require_roles;
use crate::state::AppState;

const MANAGER: &[Role] = &[Role::Manager];
const EMPLOYEE: &[Role] = &[Role::Employee];
const ANY_STAFF: &[Role] = &[Role::Manager, Role::Employee];

/// Build the resource routes, each gated by the roles allowed to call it.
pub fn routes<ER, LR>() -> Router<AppState<ER, LR>>
where
    ER: EmployeeRepository + Send + Sync + 'static,
    LR: LocationRepository + Send + Sync + 'static,
{
    Router::new()
        // Employees
        .route(
            "/employees",
            get(employees::list::<ER, LR>)
                .route_layer(from_fn(require_roles(MANAGER)))
                .merge(
                    post(employees::create::<ER, LR>).route_layer(from_fn(require_roles(MANAGER))),
                ),
        )
        .route(
            "/employees/upload",
            post(employees::upload).route_layer(from_fn(require_roles(ANY_STAFF))),
        )
        .route(
            "/employees/location/{id}",
            get(employees::list_by_location::<ER, LR>)
                .route_layer(from_fn(require_roles(MANAGER))),
        )
        .route(
            "/employees/{id}",
            get(employees::get::<ER, LR>)
                .route_layer(from_fn(require_roles(MANAGER)))
                .merge(
                    patch(employees::update::<ER, LR>)
                        .route_layer(from_fn(require_roles(EMPLOYEE))),
                )
                .merge(
                    delete(employees::delete::<ER, LR>)
                        .route_layer(from_fn(require_roles(MANAGER))),
                ),
        )
        // Locations
        .route(
            "/locations",
            get(locations::list::<ER, LR>)
                .route_layer(from_fn(require_roles(ANY_STAFF)))
                .merge(
                    post(locations::create::<ER, LR>).route_layer(from_fn(require_roles(MANAGER))),
                ),
        )
        .route(
            "/locations/{id}",
            get(locations::get::<ER, LR>)
                .route_layer(from_fn(require_roles(ANY_STAFF)))
                .merge(
                    patch(locations::update::<ER, LR>)
                        .route_layer(from_fn(require_roles(MANAGER))),
                )
                .merge(
                    delete(locations::delete::<ER, LR>)
                        .route_layer(from_fn(require_roles(MANAGER))),
                ),
        )
}
