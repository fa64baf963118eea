//! Clinic service: the facade over the four repositories.

use chrono::Local;
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

use crate::domain::entities::{Owner, Pet, PetType, Vet, Visit};
use crate::domain::repositories::{
    OwnerRepository, PetRepository, VetRepository, VisitRepository,
};
use crate::error::AppError;

/// Service coordinating owners, pets, visits and vets.
///
/// Repositories are injected as trait objects so the same service runs over
/// PostgreSQL, the in-memory store, or mocks. Responsibilities on top of the
/// repositories:
///
/// - absent lookups by id become [`AppError::NotFound`]
/// - input is validated before any write
/// - owning-side saves are explicit: child first, then parent
#[derive(Clone)]
pub struct ClinicService {
    owners: Arc<dyn OwnerRepository>,
    pets: Arc<dyn PetRepository>,
    visits: Arc<dyn VisitRepository>,
    vets: Arc<dyn VetRepository>,
}

impl ClinicService {
    /// Creates a new clinic service.
    pub fn new(
        owners: Arc<dyn OwnerRepository>,
        pets: Arc<dyn PetRepository>,
        visits: Arc<dyn VisitRepository>,
        vets: Arc<dyn VetRepository>,
    ) -> Self {
        Self {
            owners,
            pets,
            visits,
            vets,
        }
    }

    // ── Owners ──────────────────────────────────────────────────────────────

    /// Finds owners whose last name starts with `last_name`.
    ///
    /// An empty prefix lists every owner.
    pub async fn find_owners_by_last_name(&self, last_name: &str) -> Result<Vec<Owner>, AppError> {
        self.owners.find_by_last_name(last_name).await
    }

    /// Loads an owner with pets and visits.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the owner does not exist.
    pub async fn find_owner(&self, id: i64) -> Result<Owner, AppError> {
        self.owners
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Owner not found", json!({"id": id})))
    }

    /// Validates and saves an owner's own fields.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a field is blank or the telephone
    /// is not 1 to 10 digits.
    pub async fn save_owner(&self, owner: Owner) -> Result<Owner, AppError> {
        if let Err(errors) = owner.validate() {
            tracing::warn!(owner_id = ?owner.id, "owner rejected by validation");
            return Err(errors.into());
        }
        self.owners.save(owner).await
    }

    // ── Pets ────────────────────────────────────────────────────────────────

    /// Loads a pet with its type and visits.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the pet does not exist.
    pub async fn find_pet(&self, id: i64) -> Result<Pet, AppError> {
        self.pets
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Pet not found", json!({"id": id})))
    }

    /// Lists the pet type reference data.
    pub async fn find_pet_types(&self) -> Result<Vec<PetType>, AppError> {
        self.pets.find_pet_types().await
    }

    /// Resolves a pet type by name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown names.
    pub async fn find_pet_type(&self, name: &str) -> Result<PetType, AppError> {
        self.pets
            .find_pet_type_by_name(name)
            .await?
            .ok_or_else(|| AppError::not_found("Pet type not found", json!({"name": name})))
    }

    /// Validates and saves a pet's own fields.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is blank, the birth date is
    /// in the future, the pet has no owner, or another pet of the same owner
    /// already has this name.
    pub async fn save_pet(&self, pet: Pet) -> Result<Pet, AppError> {
        self.check_pet(&pet).await?;
        self.pets.save(pet).await
    }

    /// Field rules plus name uniqueness against the stored owner.
    async fn check_pet(&self, pet: &Pet) -> Result<(), AppError> {
        validate_pet(pet)?;

        let Some(owner_id) = pet.owner_id else {
            return Ok(());
        };
        // An unknown owner is rejected by the store itself.
        let Some(owner) = self.owners.find_by_id(owner_id).await? else {
            return Ok(());
        };

        if let Some(other) = owner.other_pet_named(&pet.name, pet.id) {
            tracing::warn!(owner_id, pet_id = ?pet.id, other_id = ?other.id, "duplicate pet name");
            return Err(AppError::bad_request(
                "Owner already has a pet with this name",
                json!({"owner_id": owner_id, "name": pet.name}),
            ));
        }

        Ok(())
    }

    /// Adds a new pet to a saved owner and persists it.
    ///
    /// Owner and pet are both validated before anything is written. The pet is
    /// saved first, then the owner, and `owner` is updated in place so it
    /// reflects what a reload would return. A store failure on the owner save
    /// leaves the pet row in place.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the owner is unsaved or invalid, the
    /// pet is invalid, or the owner already has a pet with the same name.
    pub async fn add_pet_to_owner(&self, owner: &mut Owner, pet: Pet) -> Result<Pet, AppError> {
        let Some(owner_id) = owner.id else {
            return Err(AppError::bad_request(
                "Owner must be saved before adding pets",
                json!({"last_name": owner.last_name}),
            ));
        };

        if owner.pet(&pet.name, true).is_some() {
            return Err(AppError::bad_request(
                "Owner already has a pet with this name",
                json!({"owner_id": owner_id, "name": pet.name}),
            ));
        }
        owner.validate()?;

        let mut pet = pet;
        pet.owner_id = Some(owner_id);
        let saved = self.save_pet(pet).await?;

        owner.add_pet(saved.clone());
        *owner = self.owners.save(owner.clone()).await?;

        tracing::info!(owner_id, pet_id = ?saved.id, "pet added to owner");
        Ok(saved)
    }

    // ── Visits ──────────────────────────────────────────────────────────────

    /// Lists the visits of a pet. Unknown pets yield an empty list.
    pub async fn find_visits_by_pet(&self, pet_id: i64) -> Result<Vec<Visit>, AppError> {
        self.visits.find_by_pet_id(pet_id).await
    }

    /// Validates and saves a visit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the description is blank or the
    /// visit has no pet.
    pub async fn save_visit(&self, visit: Visit) -> Result<Visit, AppError> {
        validate_visit(&visit)?;
        self.visits.save(visit).await
    }

    /// Records a new visit for a saved pet.
    ///
    /// Visit and pet are both checked before anything is written. The visit is
    /// saved first, then the pet, and `pet` is updated in place.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the pet is unsaved or fails
    /// [`ClinicService::save_pet`] checks, or the visit is invalid.
    pub async fn add_visit_to_pet(&self, pet: &mut Pet, visit: Visit) -> Result<Visit, AppError> {
        let Some(pet_id) = pet.id else {
            return Err(AppError::bad_request(
                "Pet must be saved before adding visits",
                json!({"name": pet.name}),
            ));
        };

        let mut visit = visit;
        visit.pet_id = Some(pet_id);
        validate_visit(&visit)?;
        self.check_pet(pet).await?;

        let saved = self.visits.save(visit).await?;

        pet.add_visit(saved.clone());
        *pet = self.pets.save(pet.clone()).await?;

        tracing::info!(pet_id, visit_id = ?saved.id, "visit added to pet");
        Ok(saved)
    }

    // ── Vets ────────────────────────────────────────────────────────────────

    /// Lists all vets with their specialties.
    pub async fn find_vets(&self) -> Result<Vec<Vet>, AppError> {
        self.vets.find_all().await
    }
}

fn validate_visit(visit: &Visit) -> Result<(), AppError> {
    visit.validate()?;

    if visit.pet_id.is_none() {
        return Err(AppError::bad_request(
            "Visit must belong to a saved pet",
            json!({"description": visit.description}),
        ));
    }

    Ok(())
}

fn validate_pet(pet: &Pet) -> Result<(), AppError> {
    pet.validate()?;

    if pet.birth_date > Local::now().date_naive() {
        return Err(AppError::bad_request(
            "Invalid input",
            json!({"fields": {"birth_date": ["must not be in the future"]}}),
        ));
    }

    if pet.owner_id.is_none() {
        return Err(AppError::bad_request(
            "Pet must belong to a saved owner",
            json!({"name": pet.name}),
        ));
    }

    Ok(())
}
