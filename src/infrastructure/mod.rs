//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete stores for clinic data.
//!
//! # Modules
//!
//! - [`memory`] - In-memory store seeded with the standard clinic data
//! - [`persistence`] - PostgreSQL repository implementations

pub mod memory;
pub mod persistence;
