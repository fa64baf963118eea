//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data access
//! operations following the Repository pattern. These traits are implemented by
//! concrete stores in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence` (PostgreSQL)
//!   and `crate::infrastructure::memory` (in-memory)
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`OwnerRepository`] - Owner lookup by last name / id, save
//! - [`PetRepository`] - Pet lookup and save, pet type reference list
//! - [`VisitRepository`] - Visits per pet, save
//! - [`VetRepository`] - Vet reference list
//!
//! # Contract
//!
//! Lookups by id return `Ok(None)` when nothing matches; turning that into
//! [`crate::error::AppError::NotFound`] is the service's job. Criteria lookups
//! return empty vectors. `save` assigns an id on insert and never changes it.

pub mod owner_repository;
pub mod pet_repository;
pub mod vet_repository;
pub mod visit_repository;

pub use owner_repository::OwnerRepository;
pub use pet_repository::PetRepository;
pub use vet_repository::VetRepository;
pub use visit_repository::VisitRepository;

#[cfg(test)]
pub use owner_repository::MockOwnerRepository;
#[cfg(test)]
pub use pet_repository::MockPetRepository;
#[cfg(test)]
pub use vet_repository::MockVetRepository;
#[cfg(test)]
pub use visit_repository::MockVisitRepository;
