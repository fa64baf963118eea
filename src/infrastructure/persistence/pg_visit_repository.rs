//! PostgreSQL implementation of visit repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use super::rows::VisitRow;
use crate::domain::entities::Visit;
use crate::domain::repositories::VisitRepository;
use crate::error::AppError;

/// PostgreSQL repository for visits.
pub struct PgVisitRepository {
    pool: Arc<PgPool>,
}

impl PgVisitRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VisitRepository for PgVisitRepository {
    async fn find_by_pet_id(&self, pet_id: i64) -> Result<Vec<Visit>, AppError> {
        let rows = sqlx::query_as::<_, VisitRow>(
            r#"
            SELECT id, pet_id, visit_date, description
            FROM visits
            WHERE pet_id = $1
            ORDER BY id
            "#,
        )
        .bind(pet_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Visit::from).collect())
    }

    async fn save(&self, mut visit: Visit) -> Result<Visit, AppError> {
        let Some(pet_id) = visit.pet_id else {
            return Err(AppError::bad_request(
                "Visit must belong to a saved pet",
                json!({"description": visit.description}),
            ));
        };

        match visit.id {
            None => {
                let id: i64 = sqlx::query_scalar(
                    r#"
                    INSERT INTO visits (pet_id, visit_date, description)
                    VALUES ($1, $2, $3)
                    RETURNING id
                    "#,
                )
                .bind(pet_id)
                .bind(visit.date)
                .bind(&visit.description)
                .fetch_one(self.pool.as_ref())
                .await?;

                tracing::info!(visit_id = id, pet_id, "visit inserted");
                visit.id = Some(id);
            }
            Some(id) => {
                let result = sqlx::query(
                    r#"
                    UPDATE visits SET
                        pet_id      = $2,
                        visit_date  = $3,
                        description = $4
                    WHERE id = $1
                    "#,
                )
                .bind(id)
                .bind(pet_id)
                .bind(visit.date)
                .bind(&visit.description)
                .execute(self.pool.as_ref())
                .await?;

                if result.rows_affected() == 0 {
                    return Err(AppError::not_found("Visit not found", json!({"id": id})));
                }
            }
        }

        Ok(visit)
    }
}
