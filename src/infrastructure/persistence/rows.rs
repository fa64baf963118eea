//! Row types and aggregate loaders shared by the PostgreSQL repositories.
//!
//! Owners and pets are assembled from several queries (owner → pets → visits).
//! The loaders take a plain connection so callers can run them inside one
//! transaction and get a consistent aggregate.

use chrono::NaiveDate;
use sqlx::{FromRow, PgConnection};
use std::collections::HashMap;

use crate::domain::entities::{Owner, Pet, PetType, Specialty, Vet, Visit};
use crate::error::AppError;

#[derive(Debug, FromRow)]
pub(crate) struct OwnerRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
}

impl OwnerRow {
    pub fn into_owner(self, pets: Vec<Pet>) -> Owner {
        Owner {
            id: Some(self.id),
            first_name: self.first_name,
            last_name: self.last_name,
            address: self.address,
            city: self.city,
            telephone: self.telephone,
            pets,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct PetRow {
    pub id: i64,
    pub name: String,
    pub birth_date: NaiveDate,
    pub owner_id: i64,
    pub type_id: i64,
    pub type_name: String,
}

impl PetRow {
    pub fn into_pet(self, visits: Vec<Visit>) -> Pet {
        Pet {
            id: Some(self.id),
            name: self.name,
            birth_date: self.birth_date,
            pet_type: PetType::new(self.type_id, self.type_name),
            owner_id: Some(self.owner_id),
            visits,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct PetTypeRow {
    pub id: i64,
    pub name: String,
}

impl From<PetTypeRow> for PetType {
    fn from(row: PetTypeRow) -> Self {
        PetType::new(row.id, row.name)
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct VisitRow {
    pub id: i64,
    pub pet_id: i64,
    pub visit_date: NaiveDate,
    pub description: String,
}

impl From<VisitRow> for Visit {
    fn from(row: VisitRow) -> Self {
        Visit {
            id: Some(row.id),
            date: row.visit_date,
            description: row.description,
            pet_id: Some(row.pet_id),
        }
    }
}

/// One row per (vet, specialty) pair; vets without specialties appear once
/// with `NULL` specialty columns.
#[derive(Debug, FromRow)]
pub(crate) struct VetSpecialtyRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub specialty_id: Option<i64>,
    pub specialty_name: Option<String>,
}

pub(crate) const PET_COLUMNS: &str = r#"
    SELECT p.id, p.name, p.birth_date, p.owner_id, t.id AS type_id, t.name AS type_name
    FROM pets p
    JOIN types t ON t.id = p.type_id
"#;

/// Folds vet/specialty join rows (ordered by vet id) into vets.
pub(crate) fn fold_vets(rows: Vec<VetSpecialtyRow>) -> Vec<Vet> {
    let mut vets: Vec<Vet> = Vec::new();

    for row in rows {
        let specialty = match (row.specialty_id, row.specialty_name) {
            (Some(id), Some(name)) => Some(Specialty::new(id, name)),
            _ => None,
        };

        match vets.last_mut() {
            Some(vet) if vet.id == row.id => {
                if let Some(specialty) = specialty {
                    vet.add_specialty(specialty);
                }
            }
            _ => vets.push(Vet::new(
                row.id,
                row.first_name,
                row.last_name,
                specialty.into_iter().collect(),
            )),
        }
    }

    vets
}

/// Loads visits for the given pets, grouped by pet id, in id order.
pub(crate) async fn load_visits(
    conn: &mut PgConnection,
    pet_ids: &[i64],
) -> Result<HashMap<i64, Vec<Visit>>, AppError> {
    if pet_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = sqlx::query_as::<_, VisitRow>(
        r#"
        SELECT id, pet_id, visit_date, description
        FROM visits
        WHERE pet_id = ANY($1)
        ORDER BY id
        "#,
    )
    .bind(pet_ids)
    .fetch_all(&mut *conn)
    .await?;

    let mut grouped: HashMap<i64, Vec<Visit>> = HashMap::new();
    for row in rows {
        grouped.entry(row.pet_id).or_default().push(row.into());
    }
    Ok(grouped)
}

/// Loads pets (with type and visits) for the given owners, grouped by owner id.
///
/// Each owner's pets come back sorted by name, matching [`Owner::sort_pets`].
pub(crate) async fn load_pets(
    conn: &mut PgConnection,
    owner_ids: &[i64],
) -> Result<HashMap<i64, Vec<Pet>>, AppError> {
    if owner_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = sqlx::query_as::<_, PetRow>(&format!(
        "{PET_COLUMNS} WHERE p.owner_id = ANY($1) ORDER BY lower(p.name) COLLATE \"C\", p.id"
    ))
    .bind(owner_ids)
    .fetch_all(&mut *conn)
    .await?;

    let pet_ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
    let mut visits = load_visits(conn, &pet_ids).await?;

    let mut grouped: HashMap<i64, Vec<Pet>> = HashMap::new();
    for row in rows {
        let owner_id = row.owner_id;
        let pet_visits = visits.remove(&row.id).unwrap_or_default();
        grouped
            .entry(owner_id)
            .or_default()
            .push(row.into_pet(pet_visits));
    }
    Ok(grouped)
}

/// Attaches pets to owner rows, preserving the row order.
pub(crate) async fn assemble_owners(
    conn: &mut PgConnection,
    rows: Vec<OwnerRow>,
) -> Result<Vec<Owner>, AppError> {
    let owner_ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
    let mut pets = load_pets(conn, &owner_ids).await?;

    Ok(rows
        .into_iter()
        .map(|row| {
            let owner_pets = pets.remove(&row.id).unwrap_or_default();
            row.into_owner(owner_pets)
        })
        .collect())
}
