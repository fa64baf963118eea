//! Owner entity: a clinic customer and the pets they own.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use validator::Validate;

use super::pet::Pet;

/// Telephone numbers are stored as plain digits, at most 10 of them.
static TELEPHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{1,10}$").unwrap());

/// A clinic customer.
///
/// The owner exclusively owns its pets' lifecycle. `pets` is kept sorted by
/// name so positional access is stable across reloads.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct Owner {
    pub id: Option<i64>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub last_name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub address: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub city: String,
    #[validate(regex(path = *TELEPHONE_REGEX, message = "must be 1 to 10 digits"))]
    pub telephone: String,
    pub pets: Vec<Pet>,
}

impl Owner {
    /// Creates an unsaved owner without pets.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        telephone: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
            city: city.into(),
            telephone: telephone.into(),
            pets: Vec::new(),
        }
    }

    /// Returns true until the store has assigned an id.
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Adds a pet to this owner, pointing the pet back at the owner.
    ///
    /// Only the in-memory aggregate changes; the pet still has to be saved
    /// through the pet repository.
    pub fn add_pet(&mut self, mut pet: Pet) {
        pet.owner_id = self.id;
        self.pets.push(pet);
        self.sort_pets();
    }

    /// Looks up a pet by name, case-insensitively.
    ///
    /// With `ignore_new` set, unsaved pets are skipped.
    pub fn pet(&self, name: &str, ignore_new: bool) -> Option<&Pet> {
        let name = name.to_lowercase();
        self.pets
            .iter()
            .filter(|p| !(ignore_new && p.is_new()))
            .find(|p| p.name.to_lowercase() == name)
    }

    /// Finds a pet other than `pet_id` already using `name`, case-insensitively.
    pub fn other_pet_named(&self, name: &str, pet_id: Option<i64>) -> Option<&Pet> {
        let name = name.to_lowercase();
        self.pets
            .iter()
            .filter(|p| pet_id.is_none() || p.id != pet_id)
            .find(|p| p.name.to_lowercase() == name)
    }

    /// Restores the name ordering of `pets`.
    pub fn sort_pets(&mut self) {
        self.pets.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then(a.id.cmp(&b.id))
        });
    }
}
