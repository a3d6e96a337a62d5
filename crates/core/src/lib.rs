//! Shared domain types for the grovetrack platform.
//!
//! Kept free of HTTP and database concerns so both the repository layer
//! and the API crate can depend on it without cycles.

pub mod error;
pub mod pagination;
pub mod types;
