//! Domain layer containing clinic entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Owner, Pet, PetType, Visit, Vet, Specialty
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure
//! - Repository traits define contracts implemented by infrastructure layer
//! - Orchestration across repositories lives in [`crate::application::services`]
//!
//! # Owning-side saves
//!
//! Saving an owner never cascades into its pets, and saving a pet never
//! cascades into its visits. The child is saved first through its own
//! repository, then the parent is saved or reloaded.

pub mod entities;
pub mod repositories;
