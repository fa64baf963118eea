//! PostgreSQL implementation of pet repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use super::rows::{PET_COLUMNS, PetRow, PetTypeRow, load_visits};
use crate::domain::entities::{Pet, PetType};
use crate::domain::repositories::PetRepository;
use crate::error::AppError;

/// PostgreSQL repository for pets and pet types.
pub struct PgPetRepository {
    pool: Arc<PgPool>,
}

impl PgPetRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PetRepository for PgPetRepository {
    async fn find_pet_types(&self) -> Result<Vec<PetType>, AppError> {
        let rows = sqlx::query_as::<_, PetTypeRow>(
            r#"SELECT id, name FROM types ORDER BY name COLLATE "C""#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(PetType::from).collect())
    }

    async fn find_pet_type_by_name(&self, name: &str) -> Result<Option<PetType>, AppError> {
        let row = sqlx::query_as::<_, PetTypeRow>(
            "SELECT id, name FROM types WHERE lower(name) = lower($1)",
        )
        .bind(name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(PetType::from))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Pet>, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, PetRow>(&format!("{PET_COLUMNS} WHERE p.id = $1"))
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        let pet = match row {
            Some(row) => {
                let mut visits = load_visits(&mut *tx, &[row.id]).await?;
                let pet_visits = visits.remove(&row.id).unwrap_or_default();
                Some(row.into_pet(pet_visits))
            }
            None => None,
        };
        tx.commit().await?;

        Ok(pet)
    }

    async fn save(&self, mut pet: Pet) -> Result<Pet, AppError> {
        let Some(owner_id) = pet.owner_id else {
            return Err(AppError::bad_request(
                "Pet must belong to a saved owner",
                json!({"pet": pet.name}),
            ));
        };

        match pet.id {
            None => {
                let id: i64 = sqlx::query_scalar(
                    r#"
                    INSERT INTO pets (name, birth_date, type_id, owner_id)
                    VALUES ($1, $2, $3, $4)
                    RETURNING id
                    "#,
                )
                .bind(&pet.name)
                .bind(pet.birth_date)
                .bind(pet.pet_type.id)
                .bind(owner_id)
                .fetch_one(self.pool.as_ref())
                .await?;

                tracing::info!(pet_id = id, owner_id, "pet inserted");
                pet.id = Some(id);
                for visit in &mut pet.visits {
                    visit.pet_id = Some(id);
                }
            }
            Some(id) => {
                let result = sqlx::query(
                    r#"
                    UPDATE pets SET
                        name       = $2,
                        birth_date = $3,
                        type_id    = $4,
                        owner_id   = $5
                    WHERE id = $1
                    "#,
                )
                .bind(id)
                .bind(&pet.name)
                .bind(pet.birth_date)
                .bind(pet.pet_type.id)
                .bind(owner_id)
                .execute(self.pool.as_ref())
                .await?;

                if result.rows_affected() == 0 {
                    return Err(AppError::not_found("Pet not found", json!({"id": id})));
                }
                tracing::debug!(pet_id = id, "pet updated");
            }
        }

        Ok(pet)
    }
}
