//! Clinic scenarios run against every store.
//!
//! Each function assumes a freshly seeded store and panics on failure.

use chrono::Local;
use petclinic::ClinicService;
use petclinic::domain::entities::{PetType, Visit};
use petclinic::error::AppError;

use super::{new_owner, new_pet};

fn type_by_id(types: &[PetType], id: i64) -> PetType {
    types
        .iter()
        .find(|t| t.id == id)
        .cloned()
        .unwrap_or_else(|| panic!("pet type {id} missing"))
}

pub async fn find_owners_by_last_name(service: &ClinicService) {
    let owners = service.find_owners_by_last_name("Davis").await.unwrap();
    assert_eq!(owners.len(), 2);

    let owners = service.find_owners_by_last_name("Daviss").await.unwrap();
    assert!(owners.is_empty());
}

pub async fn find_single_owner_with_pet(service: &ClinicService) {
    let owner = service.find_owner(1).await.unwrap();

    assert!(owner.last_name.starts_with("Franklin"));
    assert_eq!(owner.pets.len(), 1);
    assert_eq!(owner.pets[0].pet_type.name, "cat");
}

pub async fn find_missing_owner(service: &ClinicService) {
    let result = service.find_owner(9_999).await;

    assert!(matches!(result, Err(AppError::NotFound { .. })));
}

pub async fn insert_owner(service: &ClinicService) {
    let found = service.find_owners_by_last_name("Schultz").await.unwrap().len();

    let saved = service.save_owner(new_owner("Schultz")).await.unwrap();
    let id = saved.id.expect("id assigned on insert");
    assert_ne!(id, 0);

    let owners = service.find_owners_by_last_name("Schultz").await.unwrap();
    assert_eq!(owners.len(), found + 1);
}

pub async fn update_owner(service: &ClinicService) {
    let mut owner = service.find_owner(1).await.unwrap();
    let new_last_name = format!("{}X", owner.last_name);

    owner.last_name = new_last_name.clone();
    service.save_owner(owner).await.unwrap();

    let owner = service.find_owner(1).await.unwrap();
    assert_eq!(owner.last_name, new_last_name);
    assert_eq!(owner.id, Some(1));
}

pub async fn resave_owner_unchanged(service: &ClinicService) {
    let before = service.find_owner(2).await.unwrap();

    let saved = service.save_owner(before.clone()).await.unwrap();
    assert_eq!(saved.id, before.id);

    let after = service.find_owner(2).await.unwrap();
    assert_eq!(after, before);
}

pub async fn find_pet_with_correct_id(service: &ClinicService) {
    let pet = service.find_pet(7).await.unwrap();
    assert!(pet.name.starts_with("Samantha"));

    let owner = service.find_owner(pet.owner_id.unwrap()).await.unwrap();
    assert_eq!(owner.first_name, "Jean");
}

pub async fn find_all_pet_types(service: &ClinicService) {
    let types = service.find_pet_types().await.unwrap();

    assert_eq!(type_by_id(&types, 1).name, "cat");
    assert_eq!(type_by_id(&types, 4).name, "snake");
}

pub async fn insert_pet_and_generate_id(service: &ClinicService) {
    let mut owner = service.find_owner(6).await.unwrap();
    let found = owner.pets.len();

    let types = service.find_pet_types().await.unwrap();
    let mut pet = new_pet("bowser", type_by_id(&types, 2));
    pet.birth_date = Local::now().date_naive();

    let saved = service.add_pet_to_owner(&mut owner, pet).await.unwrap();
    assert_eq!(owner.pets.len(), found + 1);
    assert!(saved.id.is_some());

    let owner = service.find_owner(6).await.unwrap();
    assert_eq!(owner.pets.len(), found + 1);
    assert!(owner.pet("bowser", true).is_some());
}

pub async fn reject_duplicate_pet_name(service: &ClinicService) {
    let mut owner = service.find_owner(6).await.unwrap();
    let found = owner.pets.len();

    let result = service
        .add_pet_to_owner(&mut owner, new_pet("max", PetType::new(1, "cat")))
        .await;
    assert!(matches!(result, Err(AppError::Validation { .. })));

    let owner = service.find_owner(6).await.unwrap();
    assert_eq!(owner.pets.len(), found);
}

pub async fn update_pet_name(service: &ClinicService) {
    let mut pet = service.find_pet(7).await.unwrap();
    let new_name = format!("{}X", pet.name);

    pet.name = new_name.clone();
    service.save_pet(pet).await.unwrap();

    let pet = service.find_pet(7).await.unwrap();
    assert_eq!(pet.name, new_name);
}

pub async fn find_vets(service: &ClinicService) {
    let vets = service.find_vets().await.unwrap();

    let vet = vets.iter().find(|v| v.id == 3).expect("vet 3 present");
    assert_eq!(vet.last_name, "Douglas");
    assert_eq!(vet.nr_of_specialties(), 2);
    assert_eq!(vet.specialties()[0].name, "dentistry");
    assert_eq!(vet.specialties()[1].name, "surgery");
}

pub async fn add_new_visit_for_pet(service: &ClinicService) {
    let mut pet = service.find_pet(7).await.unwrap();
    let found = pet.visits.len();

    let visit = service
        .add_visit_to_pet(&mut pet, Visit::new("test"))
        .await
        .unwrap();
    assert!(visit.id.is_some());

    let pet = service.find_pet(7).await.unwrap();
    assert_eq!(pet.visits.len(), found + 1);
}

pub async fn find_visits_by_pet_id(service: &ClinicService) {
    let visits = service.find_visits_by_pet(7).await.unwrap();

    assert_eq!(visits.len(), 2);
    assert!(visits[0].id.is_some());
    assert_eq!(visits[0].pet_id, Some(7));
    assert!(visits.iter().all(|v| v.pet_id == Some(7)));
}

pub async fn reject_rename_to_sibling_name(service: &ClinicService) {
    let mut pet = service.find_pet(7).await.unwrap();
    pet.name = "max".to_string();

    let result = service.save_pet(pet).await;
    assert!(matches!(result, Err(AppError::Validation { .. })));

    let owner = service.find_owner(6).await.unwrap();
    let names: Vec<_> = owner.pets.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Max", "Samantha"]);
}

pub async fn rename_pet_changing_case_only(service: &ClinicService) {
    let mut pet = service.find_pet(7).await.unwrap();
    pet.name = "SAMANTHA".to_string();

    service.save_pet(pet).await.unwrap();

    assert_eq!(service.find_pet(7).await.unwrap().name, "SAMANTHA");
}

pub async fn failed_visit_writes_nothing(service: &ClinicService) {
    let mut pet = service.find_pet(7).await.unwrap();
    pet.name = String::new();

    let result = service.add_visit_to_pet(&mut pet, Visit::new("checkup")).await;
    assert!(matches!(result, Err(AppError::Validation { .. })));

    assert_eq!(service.find_visits_by_pet(7).await.unwrap().len(), 2);
    assert_eq!(service.find_pet(7).await.unwrap().name, "Samantha");
}

pub async fn reject_visit_for_unsaved_pet(service: &ClinicService) {
    let mut pet = new_pet("Stray", PetType::new(1, "cat"));

    let result = service.add_visit_to_pet(&mut pet, Visit::new("checkup")).await;
    assert!(matches!(result, Err(AppError::Validation { .. })));
    assert!(pet.visits.is_empty());

    let result = service.save_visit(Visit::new("checkup")).await;
    assert!(matches!(result, Err(AppError::Validation { .. })));
}

pub async fn reject_invalid_telephone_on_update(service: &ClinicService) {
    let mut owner = service.find_owner(1).await.unwrap();
    let telephone = owner.telephone.clone();

    owner.telephone = "12345678901".to_string();
    let result = service.save_owner(owner).await;
    assert!(matches!(result, Err(AppError::Validation { .. })));

    assert_eq!(service.find_owner(1).await.unwrap().telephone, telephone);
}

pub async fn failed_pet_add_writes_nothing(service: &ClinicService) {
    let mut owner = service.find_owner(6).await.unwrap();
    let found = owner.pets.len();
    owner.telephone = "call me".to_string();

    let result = service
        .add_pet_to_owner(&mut owner, new_pet("bowser", PetType::new(2, "dog")))
        .await;
    assert!(matches!(result, Err(AppError::Validation { .. })));

    let owner = service.find_owner(6).await.unwrap();
    assert_eq!(owner.pets.len(), found);
}

pub async fn owners_sorted_by_byte_order(service: &ClinicService) {
    service.save_owner(new_owner("aardvark")).await.unwrap();

    let owners = service.find_owners_by_last_name("").await.unwrap();

    assert_eq!(owners.first().unwrap().last_name, "Black");
    assert_eq!(owners.last().unwrap().last_name, "aardvark");
}
