//! # staffhub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `EmployeeRepository` — CRUD for employees, plus lookup by location
//!   - `LocationRepository` — CRUD for locations
//! - Define **driving/inbound ports** as use-case structs:
//!   - `EmployeeService` — create, list, get, list by location, patch, remove
//!   - `LocationService` — create, list, get, patch, remove
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `staffhub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
