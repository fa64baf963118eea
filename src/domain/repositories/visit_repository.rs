//! Repository trait for clinic visits.

use crate::domain::entities::Visit;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for visits.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgVisitRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::InMemoryClinicStore`] - In-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// Lists all visits of a pet in id order.
    ///
    /// Returns an empty vector for unknown pets.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_pet_id(&self, pet_id: i64) -> Result<Vec<Visit>, AppError>;

    /// Inserts a new visit or updates date and description of an existing one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the visit has no pet or the pet does not exist.
    /// Returns [`AppError::NotFound`] if an existing id no longer matches a row.
    /// Returns [`AppError::Internal`] on database errors.
    async fn save(&self, visit: Visit) -> Result<Visit, AppError>;
}
