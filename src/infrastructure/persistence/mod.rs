//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx. Queries are
//! checked at runtime and mapped through `FromRow` row types, so building the
//! crate does not need a live database.
//!
//! # Repositories
//!
//! - [`PgOwnerRepository`] - Owner aggregates (owner, pets, visits)
//! - [`PgPetRepository`] - Pets and pet types
//! - [`PgVisitRepository`] - Visits
//! - [`PgVetRepository`] - Vets with specialties

pub mod pg_owner_repository;
pub mod pg_pet_repository;
pub mod pg_vet_repository;
pub mod pg_visit_repository;
mod rows;

pub use pg_owner_repository::PgOwnerRepository;
pub use pg_pet_repository::PgPetRepository;
pub use pg_vet_repository::PgVetRepository;
pub use pg_visit_repository::PgVisitRepository;
