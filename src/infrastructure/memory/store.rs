//! In-memory clinic store implementing all four repository traits.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::json;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::seed;
use crate::domain::entities::{Owner, Pet, PetType, Specialty, Vet, Visit};
use crate::domain::repositories::{
    OwnerRepository, PetRepository, VetRepository, VisitRepository,
};
use crate::error::AppError;

#[derive(Debug, Clone)]
pub(super) struct OwnerRecord {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
}

#[derive(Debug, Clone)]
pub(super) struct PetRecord {
    pub name: String,
    pub birth_date: NaiveDate,
    pub type_id: i64,
    pub owner_id: i64,
}

#[derive(Debug, Clone)]
pub(super) struct VisitRecord {
    pub pet_id: i64,
    pub date: NaiveDate,
    pub description: String,
}

#[derive(Debug, Clone)]
pub(super) struct VetRecord {
    pub first_name: String,
    pub last_name: String,
    pub specialty_ids: Vec<i64>,
}

/// Last id handed out per table, like a PostgreSQL sequence.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct Sequences {
    pub owners: i64,
    pub pets: i64,
    pub visits: i64,
}

impl Sequences {
    fn next(counter: &mut i64) -> i64 {
        *counter += 1;
        *counter
    }
}

/// Normalized tables, keyed by id like their SQL counterparts.
#[derive(Debug, Clone, Default)]
pub(super) struct Tables {
    pub sequences: Sequences,
    pub owners: BTreeMap<i64, OwnerRecord>,
    pub pets: BTreeMap<i64, PetRecord>,
    pub visits: BTreeMap<i64, VisitRecord>,
    pub pet_types: BTreeMap<i64, PetType>,
    pub specialties: BTreeMap<i64, Specialty>,
    pub vets: BTreeMap<i64, VetRecord>,
}

fn last_id<V>(table: &BTreeMap<i64, V>) -> i64 {
    table.keys().next_back().copied().unwrap_or(0)
}

impl Tables {
    /// Moves every sequence past the ids already present.
    pub(super) fn sync_sequences(&mut self) {
        self.sequences = Sequences {
            owners: last_id(&self.owners),
            pets: last_id(&self.pets),
            visits: last_id(&self.visits),
        };
    }

    fn visits_of(&self, pet_id: i64) -> Vec<Visit> {
        self.visits
            .iter()
            .filter(|(_, v)| v.pet_id == pet_id)
            .map(|(&id, v)| Visit {
                id: Some(id),
                date: v.date,
                description: v.description.clone(),
                pet_id: Some(v.pet_id),
            })
            .collect()
    }

    fn pet(&self, id: i64) -> Option<Pet> {
        let record = self.pets.get(&id)?;
        let pet_type = self.pet_types.get(&record.type_id)?.clone();
        Some(Pet {
            id: Some(id),
            name: record.name.clone(),
            birth_date: record.birth_date,
            pet_type,
            owner_id: Some(record.owner_id),
            visits: self.visits_of(id),
        })
    }

    fn owner(&self, id: i64) -> Option<Owner> {
        let record = self.owners.get(&id)?;
        let mut owner = Owner {
            id: Some(id),
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            address: record.address.clone(),
            city: record.city.clone(),
            telephone: record.telephone.clone(),
            pets: self
                .pets
                .iter()
                .filter(|(_, p)| p.owner_id == id)
                .filter_map(|(&pet_id, _)| self.pet(pet_id))
                .collect(),
        };
        owner.sort_pets();
        Some(owner)
    }
}

/// Snapshot of every table taken by [`InMemoryClinicStore::checkpoint`].
#[derive(Debug, Clone)]
pub struct Checkpoint(Tables);

/// Clinic store held entirely in memory.
///
/// Implements [`OwnerRepository`], [`PetRepository`], [`VisitRepository`] and
/// [`VetRepository`] over one set of tables, so the same `Arc` can back all four
/// handles of a [`crate::application::services::ClinicService`]. Writers are
/// serialized by the lock. A [`Checkpoint`] taken before a group of operations
/// can be passed to [`InMemoryClinicStore::rollback`] to undo all of them.
#[derive(Debug, Default)]
pub struct InMemoryClinicStore {
    tables: RwLock<Tables>,
}

impl InMemoryClinicStore {
    /// Creates an empty store with no reference data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store preloaded with the standard clinic data.
    pub fn with_seed_data() -> Self {
        Self {
            tables: RwLock::new(seed::clinic_tables()),
        }
    }

    /// Captures the current contents of every table.
    pub async fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.tables.read().await.clone())
    }

    /// Restores the tables to a previously captured checkpoint.
    ///
    /// Sequences keep their current values, so ids handed out after the
    /// checkpoint are never reused.
    pub async fn rollback(&self, checkpoint: Checkpoint) {
        let mut tables = self.tables.write().await;
        let sequences = tables.sequences;
        *tables = checkpoint.0;
        tables.sequences = sequences;
        tracing::debug!("in-memory store rolled back");
    }

    /// Registers a pet type; existing ids are overwritten.
    pub async fn insert_pet_type(&self, pet_type: PetType) {
        self.tables
            .write()
            .await
            .pet_types
            .insert(pet_type.id, pet_type);
    }

    /// Registers a vet and any specialties it references.
    pub async fn insert_vet(&self, vet: Vet) {
        let mut tables = self.tables.write().await;
        for specialty in vet.specialties() {
            tables
                .specialties
                .insert(specialty.id, specialty.clone());
        }
        tables.vets.insert(
            vet.id,
            VetRecord {
                first_name: vet.first_name.clone(),
                last_name: vet.last_name.clone(),
                specialty_ids: vet.specialties().iter().map(|s| s.id).collect(),
            },
        );
    }
}

#[async_trait]
impl OwnerRepository for InMemoryClinicStore {
    async fn find_by_last_name(&self, last_name: &str) -> Result<Vec<Owner>, AppError> {
        let tables = self.tables.read().await;

        let mut owners: Vec<Owner> = tables
            .owners
            .iter()
            .filter(|(_, o)| o.last_name.starts_with(last_name))
            .filter_map(|(&id, _)| tables.owner(id))
            .collect();
        owners.sort_by(|a, b| a.last_name.cmp(&b.last_name).then(a.id.cmp(&b.id)));

        Ok(owners)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Owner>, AppError> {
        Ok(self.tables.read().await.owner(id))
    }

    async fn save(&self, mut owner: Owner) -> Result<Owner, AppError> {
        let mut tables = self.tables.write().await;

        let record = OwnerRecord {
            first_name: owner.first_name.clone(),
            last_name: owner.last_name.clone(),
            address: owner.address.clone(),
            city: owner.city.clone(),
            telephone: owner.telephone.clone(),
        };

        match owner.id {
            None => {
                let id = Sequences::next(&mut tables.sequences.owners);
                tables.owners.insert(id, record);
                owner.id = Some(id);
                for pet in &mut owner.pets {
                    pet.owner_id = Some(id);
                }
                tracing::info!(owner_id = id, "owner inserted");
            }
            Some(id) => match tables.owners.get_mut(&id) {
                Some(existing) => *existing = record,
                None => {
                    return Err(AppError::not_found("Owner not found", json!({"id": id})));
                }
            },
        }

        Ok(owner)
    }
}

#[async_trait]
impl PetRepository for InMemoryClinicStore {
    async fn find_pet_types(&self) -> Result<Vec<PetType>, AppError> {
        let tables = self.tables.read().await;
        let mut types: Vec<PetType> = tables.pet_types.values().cloned().collect();
        types.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(types)
    }

    async fn find_pet_type_by_name(&self, name: &str) -> Result<Option<PetType>, AppError> {
        let name = name.to_lowercase();
        let tables = self.tables.read().await;
        Ok(tables
            .pet_types
            .values()
            .find(|t| t.name.to_lowercase() == name)
            .cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Pet>, AppError> {
        Ok(self.tables.read().await.pet(id))
    }

    async fn save(&self, mut pet: Pet) -> Result<Pet, AppError> {
        let mut tables = self.tables.write().await;

        let Some(owner_id) = pet.owner_id else {
            return Err(AppError::bad_request(
                "Pet must belong to a saved owner",
                json!({"pet": pet.name}),
            ));
        };
        if !tables.owners.contains_key(&owner_id) {
            return Err(AppError::bad_request(
                "Referenced record does not exist",
                json!({"owner_id": owner_id}),
            ));
        }
        if !tables.pet_types.contains_key(&pet.pet_type.id) {
            return Err(AppError::bad_request(
                "Referenced record does not exist",
                json!({"type_id": pet.pet_type.id}),
            ));
        }

        let record = PetRecord {
            name: pet.name.clone(),
            birth_date: pet.birth_date,
            type_id: pet.pet_type.id,
            owner_id,
        };

        match pet.id {
            None => {
                let id = Sequences::next(&mut tables.sequences.pets);
                tables.pets.insert(id, record);
                pet.id = Some(id);
                for visit in &mut pet.visits {
                    visit.pet_id = Some(id);
                }
                tracing::info!(pet_id = id, owner_id, "pet inserted");
            }
            Some(id) => match tables.pets.get_mut(&id) {
                Some(existing) => *existing = record,
                None => return Err(AppError::not_found("Pet not found", json!({"id": id}))),
            },
        }

        Ok(pet)
    }
}

#[async_trait]
impl VisitRepository for InMemoryClinicStore {
    async fn find_by_pet_id(&self, pet_id: i64) -> Result<Vec<Visit>, AppError> {
        Ok(self.tables.read().await.visits_of(pet_id))
    }

    async fn save(&self, mut visit: Visit) -> Result<Visit, AppError> {
        let mut tables = self.tables.write().await;

        let Some(pet_id) = visit.pet_id else {
            return Err(AppError::bad_request(
                "Visit must belong to a saved pet",
                json!({"description": visit.description}),
            ));
        };
        if !tables.pets.contains_key(&pet_id) {
            return Err(AppError::bad_request(
                "Referenced record does not exist",
                json!({"pet_id": pet_id}),
            ));
        }

        let record = VisitRecord {
            pet_id,
            date: visit.date,
            description: visit.description.clone(),
        };

        match visit.id {
            None => {
                let id = Sequences::next(&mut tables.sequences.visits);
                tables.visits.insert(id, record);
                visit.id = Some(id);
                tracing::info!(visit_id = id, pet_id, "visit inserted");
            }
            Some(id) => match tables.visits.get_mut(&id) {
                Some(existing) => *existing = record,
                None => return Err(AppError::not_found("Visit not found", json!({"id": id}))),
            },
        }

        Ok(visit)
    }
}

#[async_trait]
impl VetRepository for InMemoryClinicStore {
    async fn find_all(&self) -> Result<Vec<Vet>, AppError> {
        let tables = self.tables.read().await;

        Ok(tables
            .vets
            .iter()
            .map(|(&id, record)| {
                let specialties = record
                    .specialty_ids
                    .iter()
                    .filter_map(|sid| tables.specialties.get(sid).cloned())
                    .collect();
                Vet::new(id, &record.first_name, &record.last_name, specialties)
            })
            .collect())
    }
}
