//! PostgreSQL implementation of owner repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use super::rows::{OwnerRow, assemble_owners};
use crate::domain::entities::Owner;
use crate::domain::repositories::OwnerRepository;
use crate::error::AppError;

/// PostgreSQL repository for owners.
///
/// Reads assemble the owner → pets → visits aggregate inside a single
/// transaction. Writes only touch the `owners` table.
pub struct PgOwnerRepository {
    pool: Arc<PgPool>,
}

impl PgOwnerRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OwnerRepository for PgOwnerRepository {
    async fn find_by_last_name(&self, last_name: &str) -> Result<Vec<Owner>, AppError> {
        let mut tx = self.pool.begin().await?;

        let rows = sqlx::query_as::<_, OwnerRow>(
            r#"
            SELECT id, first_name, last_name, address, city, telephone
            FROM owners
            WHERE starts_with(last_name, $1)
            ORDER BY last_name COLLATE "C", id
            "#,
        )
        .bind(last_name)
        .fetch_all(&mut *tx)
        .await?;

        let owners = assemble_owners(&mut *tx, rows).await?;
        tx.commit().await?;

        tracing::debug!(last_name, found = owners.len(), "owners by last name");
        Ok(owners)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Owner>, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, OwnerRow>(
            r#"
            SELECT id, first_name, last_name, address, city, telephone
            FROM owners
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let owner = match row {
            Some(row) => assemble_owners(&mut *tx, vec![row]).await?.pop(),
            None => None,
        };
        tx.commit().await?;

        Ok(owner)
    }

    async fn save(&self, mut owner: Owner) -> Result<Owner, AppError> {
        match owner.id {
            None => {
                let id: i64 = sqlx::query_scalar(
                    r#"
                    INSERT INTO owners (first_name, last_name, address, city, telephone)
                    VALUES ($1, $2, $3, $4, $5)
                    RETURNING id
                    "#,
                )
                .bind(&owner.first_name)
                .bind(&owner.last_name)
                .bind(&owner.address)
                .bind(&owner.city)
                .bind(&owner.telephone)
                .fetch_one(self.pool.as_ref())
                .await?;

                tracing::info!(owner_id = id, "owner inserted");
                owner.id = Some(id);
                for pet in &mut owner.pets {
                    pet.owner_id = Some(id);
                }
            }
            Some(id) => {
                let result = sqlx::query(
                    r#"
                    UPDATE owners SET
                        first_name = $2,
                        last_name  = $3,
                        address    = $4,
                        city       = $5,
                        telephone  = $6
                    WHERE id = $1
                    "#,
                )
                .bind(id)
                .bind(&owner.first_name)
                .bind(&owner.last_name)
                .bind(&owner.address)
                .bind(&owner.city)
                .bind(&owner.telephone)
                .execute(self.pool.as_ref())
                .await?;

                if result.rows_affected() == 0 {
                    return Err(AppError::not_found("Owner not found", json!({"id": id})));
                }
                tracing::debug!(owner_id = id, "owner updated");
            }
        }

        Ok(owner)
    }
}
