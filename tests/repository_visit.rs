mod common;

use chrono::NaiveDate;
use petclinic::domain::entities::Visit;
use petclinic::domain::repositories::VisitRepository;
use petclinic::error::AppError;
use petclinic::infrastructure::persistence::PgVisitRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_by_pet_id_orders_by_id(pool: PgPool) {
    let repo = PgVisitRepository::new(Arc::new(pool.clone()));
    let inserted = common::insert_visit(&pool, 7, "2009-01-01", "old checkup").await;

    let visits = repo.find_by_pet_id(7).await.unwrap();

    assert_eq!(visits.len(), 3);
    assert_eq!(visits.last().unwrap().id, Some(inserted));
    assert!(visits.windows(2).all(|w| w[0].id < w[1].id));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_by_pet_id_without_visits(pool: PgPool) {
    let repo = PgVisitRepository::new(Arc::new(pool));

    let visits = repo.find_by_pet_id(1).await.unwrap();

    assert!(visits.is_empty());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_save_keeps_date(pool: PgPool) {
    let repo = PgVisitRepository::new(Arc::new(pool));
    let date = NaiveDate::from_ymd_opt(2013, 3, 4).unwrap();

    let mut visit = Visit::on(date, "rabies shot");
    visit.pet_id = Some(1);
    let saved = repo.save(visit).await.unwrap();

    let visits = repo.find_by_pet_id(1).await.unwrap();
    assert_eq!(visits.len(), 1);
    assert_eq!(visits[0].id, saved.id);
    assert_eq!(visits[0].date, date);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_save_unknown_pet_rejected(pool: PgPool) {
    let repo = PgVisitRepository::new(Arc::new(pool));

    let mut visit = Visit::new("checkup");
    visit.pet_id = Some(9_999);
    let result = repo.save(visit).await;

    assert!(matches!(result, Err(AppError::Validation { .. })));
}
