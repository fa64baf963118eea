//! Repository trait for pets and pet types.

use crate::domain::entities::{Pet, PetType};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for pets and the pet type reference list.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPetRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::InMemoryClinicStore`] - In-memory implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_pet.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PetRepository: Send + Sync {
    /// Lists all pet types ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_pet_types(&self) -> Result<Vec<PetType>, AppError>;

    /// Finds a pet type by name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_pet_type_by_name(&self, name: &str) -> Result<Option<PetType>, AppError>;

    /// Finds a pet by its database ID, with type and visits loaded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Pet>, AppError>;

    /// Inserts a new pet or updates name, type, birth date and owner of an
    /// existing one. Visits are not written here.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the owner or pet type does not exist.
    /// Returns [`AppError::NotFound`] if an existing id no longer matches a row.
    /// Returns [`AppError::Internal`] on database errors.
    async fn save(&self, pet: Pet) -> Result<Pet, AppError>;
}
