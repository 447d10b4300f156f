//! # staffhub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** for employees and locations
//!   (`/employees`, `/employees/location/{id}`, `/locations`, …)
//! - Gate every route by caller role before the handler runs
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Authorization
//! Authentication happens upstream. The authenticating proxy forwards the
//! caller's roles in the `x-user-roles` header; [`auth::require_roles`]
//! checks them against the roles each route allows.
//!
//! ## Dependency rule
//! Depends on `staffhub-app` (for port traits and services) and `staffhub-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod auth;
pub mod error;
pub mod router;
pub mod state;
