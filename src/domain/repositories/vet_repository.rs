//! Repository trait for veterinarians.

use crate::domain::entities::Vet;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only repository for the vet reference list.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VetRepository: Send + Sync {
    /// Lists all vets in id order, each with specialties sorted by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_all(&self) -> Result<Vec<Vet>, AppError>;
}
