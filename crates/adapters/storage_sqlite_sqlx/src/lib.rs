//! # staffhub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `staffhub-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `staffhub-app` (for port traits) and `staffhub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod employee_repo;
mod error;
mod location_repo;
mod pool;

pub use employee_repo::SqliteEmployeeRepository;
pub use error::StorageError;
pub use location_repo::SqliteLocationRepository;
pub use pool::{Config, Database};
