//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use staffhub_app::ports::{EmployeeRepository, LocationRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges the resource routes with an unauthenticated `/health` probe.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<ER, LR>(state: AppState<ER, LR>) -> Router
where
    ER: EmployeeRepository + Send + Sync + 'static,
    LR: LocationRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
