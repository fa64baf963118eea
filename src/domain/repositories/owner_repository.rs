//! Repository trait for owner data access.

use crate::domain::entities::Owner;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for clinic owners.
///
/// Owners are returned as aggregates: pets (with their type and visits) are
/// loaded alongside the owner.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgOwnerRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::InMemoryClinicStore`] - In-memory implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_owner.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OwnerRepository: Send + Sync {
    /// Finds owners whose last name starts with `last_name`.
    ///
    /// Returns an empty vector when nothing matches.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_last_name(&self, last_name: &str) -> Result<Vec<Owner>, AppError>;

    /// Finds an owner by its database ID.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Owner))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Owner>, AppError>;

    /// Inserts a new owner or updates an existing one.
    ///
    /// A new owner (`id == None`) gets an id assigned; an existing owner has
    /// its own columns overwritten. Pets are not written here.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if an existing id no longer matches a row.
    /// Returns [`AppError::Internal`] on database errors.
    async fn save(&self, owner: Owner) -> Result<Owner, AppError>;
}
