//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod planter_repo;

pub use planter_repo::PlanterRepo;
