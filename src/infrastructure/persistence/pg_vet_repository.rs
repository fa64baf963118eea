//! PostgreSQL implementation of vet repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::rows::{VetSpecialtyRow, fold_vets};
use crate::domain::entities::Vet;
use crate::domain::repositories::VetRepository;
use crate::error::AppError;

/// PostgreSQL repository for the vet reference list.
pub struct PgVetRepository {
    pool: Arc<PgPool>,
}

impl PgVetRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VetRepository for PgVetRepository {
    async fn find_all(&self) -> Result<Vec<Vet>, AppError> {
        let rows = sqlx::query_as::<_, VetSpecialtyRow>(
            r#"
            SELECT v.id, v.first_name, v.last_name,
                   s.id AS specialty_id, s.name AS specialty_name
            FROM vets v
            LEFT JOIN vet_specialties vs ON vs.vet_id = v.id
            LEFT JOIN specialties s ON s.id = vs.specialty_id
            ORDER BY v.id, s.name COLLATE "C"
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(fold_vets(rows))
    }
}
