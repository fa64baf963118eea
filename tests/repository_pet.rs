mod common;

use petclinic::domain::entities::PetType;
use petclinic::domain::repositories::PetRepository;
use petclinic::error::AppError;
use petclinic::infrastructure::persistence::PgPetRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_pet_types_sorted_by_name(pool: PgPool) {
    let repo = PgPetRepository::new(Arc::new(pool));

    let types = repo.find_pet_types().await.unwrap();
    let names: Vec<_> = types.iter().map(|t| t.name.as_str()).collect();

    assert_eq!(names, vec!["bird", "cat", "dog", "hamster", "lizard", "snake"]);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_pet_type_by_name_ignores_case(pool: PgPool) {
    let repo = PgPetRepository::new(Arc::new(pool));

    let found = repo.find_pet_type_by_name("Dog").await.unwrap();
    let missing = repo.find_pet_type_by_name("dragon").await.unwrap();

    assert_eq!(found, Some(PetType::new(2, "dog")));
    assert!(missing.is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_by_id_loads_visits(pool: PgPool) {
    let repo = PgPetRepository::new(Arc::new(pool));

    let pet = repo.find_by_id(8).await.unwrap().expect("pet 8 seeded");

    assert_eq!(pet.name, "Max");
    assert_eq!(pet.owner_id, Some(6));
    assert_eq!(pet.visits.len(), 2);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_save_requires_owner(pool: PgPool) {
    let repo = PgPetRepository::new(Arc::new(pool));

    let result = repo
        .save(common::new_pet("Stray", PetType::new(1, "cat")))
        .await;

    assert!(matches!(result, Err(AppError::Validation { .. })));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_save_unknown_type_rejected(pool: PgPool) {
    let repo = PgPetRepository::new(Arc::new(pool));

    let mut pet = common::new_pet("Smaug", PetType::new(99, "dragon"));
    pet.owner_id = Some(1);
    let result = repo.save(pet).await;

    assert!(matches!(result, Err(AppError::Validation { .. })));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_save_inserts_pet(pool: PgPool) {
    let repo = PgPetRepository::new(Arc::new(pool));

    let mut pet = common::new_pet("Bowser", PetType::new(2, "dog"));
    pet.owner_id = Some(1);
    let saved = repo.save(pet).await.unwrap();

    let reloaded = repo.find_by_id(saved.id.unwrap()).await.unwrap().unwrap();
    assert_eq!(reloaded.name, "Bowser");
    assert_eq!(reloaded.pet_type.name, "dog");
    assert!(reloaded.visits.is_empty());
}
