#![allow(dead_code)]

pub mod scenarios;

use chrono::NaiveDate;
use petclinic::ClinicService;
use petclinic::bootstrap;
use petclinic::domain::entities::{Owner, Pet, PetType};
use petclinic::infrastructure::memory::InMemoryClinicStore;
use sqlx::PgPool;
use std::sync::Arc;

pub fn memory_store() -> Arc<InMemoryClinicStore> {
    Arc::new(InMemoryClinicStore::with_seed_data())
}

pub fn memory_service() -> (Arc<InMemoryClinicStore>, ClinicService) {
    let store = memory_store();
    let service = bootstrap::memory_service(store.clone());
    (store, service)
}

pub fn pg_service(pool: PgPool) -> ClinicService {
    bootstrap::postgres_service(pool)
}

pub fn new_owner(last_name: &str) -> Owner {
    Owner::new("Sam", last_name, "4, Evans Street", "Wollongong", "4444444444")
}

pub fn new_pet(name: &str, pet_type: PetType) -> Pet {
    Pet::new(
        name,
        NaiveDate::from_ymd_opt(2020, 5, 1).unwrap(),
        pet_type,
    )
}

pub async fn count_owners(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM owners")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn insert_visit(pool: &PgPool, pet_id: i64, date: &str, description: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO visits (pet_id, visit_date, description) VALUES ($1, $2::date, $3) RETURNING id",
    )
    .bind(pet_id)
    .bind(date)
    .bind(description)
    .fetch_one(pool)
    .await
    .unwrap()
}
