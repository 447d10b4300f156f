//! # staffhub-domain
//!
//! Pure domain model for the staffhub employee directory.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Employees** (people, each assigned to exactly one location)
//! - Define **Locations** (named sites with coordinates and an address)
//! - Define **Roles** (caller capabilities used to gate operations)
//! - Contain all invariant enforcement and partial-update logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod employee;
pub mod location;
pub mod role;
