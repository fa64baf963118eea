//! Pet and pet type entities.

use chrono::NaiveDate;
use serde::Serialize;
use validator::Validate;

use super::visit::Visit;

/// Reference classification for pets (cat, dog, snake, ...).
///
/// Pet types are shared, immutable reference data with stable ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PetType {
    pub id: i64,
    pub name: String,
}

impl PetType {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// An animal belonging to exactly one owner.
///
/// `owner_id` is `None` only while the pet is detached from any saved owner.
/// Visits are kept in id order.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct Pet {
    pub id: Option<i64>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    pub birth_date: NaiveDate,
    pub pet_type: PetType,
    pub owner_id: Option<i64>,
    pub visits: Vec<Visit>,
}

impl Pet {
    /// Creates an unsaved pet with no owner and no visits.
    pub fn new(name: impl Into<String>, birth_date: NaiveDate, pet_type: PetType) -> Self {
        Self {
            id: None,
            name: name.into(),
            birth_date,
            pet_type,
            owner_id: None,
            visits: Vec::new(),
        }
    }

    /// Returns true until the store has assigned an id.
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Attaches a visit to this pet, pointing the visit back at the pet.
    pub fn add_visit(&mut self, mut visit: Visit) {
        visit.pet_id = self.id;
        self.visits.push(visit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samantha() -> Pet {
        let mut pet = Pet::new(
            "Samantha",
            NaiveDate::from_ymd_opt(2012, 9, 4).unwrap(),
            PetType::new(1, "cat"),
        );
        pet.id = Some(7);
        pet.owner_id = Some(6);
        pet
    }

    #[test]
    fn test_pet_creation() {
        let pet = Pet::new(
            "bowser",
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            PetType::new(2, "dog"),
        );

        assert!(pet.is_new());
        assert!(pet.owner_id.is_none());
        assert!(pet.visits.is_empty());
        assert_eq!(pet.pet_type.name, "dog");
    }

    #[test]
    fn test_add_visit_sets_pet_id() {
        let mut pet = samantha();
        pet.add_visit(Visit::new("rabies shot"));

        assert_eq!(pet.visits.len(), 1);
        assert_eq!(pet.visits[0].pet_id, Some(7));
        assert!(pet.visits[0].is_new());
    }

    #[test]
    fn test_empty_name_is_invalid() {
        let mut pet = samantha();
        assert!(pet.validate().is_ok());

        pet.name = String::new();
        assert!(pet.validate().is_err());
    }
}
