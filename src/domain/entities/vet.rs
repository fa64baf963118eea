//! Veterinarian and specialty entities.

use serde::Serialize;

/// A veterinary specialty (radiology, surgery, ...). Reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Specialty {
    pub id: i64,
    pub name: String,
}

impl Specialty {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A veterinarian.
///
/// Specialties are deduplicated and sorted by name on construction, so
/// `specialties[0]` is always the alphabetically first one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vet {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    specialties: Vec<Specialty>,
}

impl Vet {
    pub fn new(
        id: i64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        specialties: Vec<Specialty>,
    ) -> Self {
        let mut vet = Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            specialties: Vec::new(),
        };
        for specialty in specialties {
            vet.add_specialty(specialty);
        }
        vet
    }

    /// Adds a specialty, keeping the list sorted by name and free of duplicates.
    pub fn add_specialty(&mut self, specialty: Specialty) {
        if self.specialties.iter().any(|s| s.id == specialty.id) {
            return;
        }
        let pos = self
            .specialties
            .partition_point(|s| s.name.as_str() <= specialty.name.as_str());
        self.specialties.insert(pos, specialty);
    }

    pub fn specialties(&self) -> &[Specialty] {
        &self.specialties
    }

    pub fn nr_of_specialties(&self) -> usize {
        self.specialties.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specialties_sorted_by_name() {
        let vet = Vet::new(
            3,
            "Linda",
            "Douglas",
            vec![Specialty::new(2, "surgery"), Specialty::new(3, "dentistry")],
        );

        assert_eq!(vet.nr_of_specialties(), 2);
        assert_eq!(vet.specialties()[0].name, "dentistry");
        assert_eq!(vet.specialties()[1].name, "surgery");
    }

    #[test]
    fn test_duplicate_specialty_ignored() {
        let mut vet = Vet::new(2, "Helen", "Leary", vec![Specialty::new(1, "radiology")]);
        vet.add_specialty(Specialty::new(1, "radiology"));

        assert_eq!(vet.nr_of_specialties(), 1);
    }

    #[test]
    fn test_vet_without_specialties() {
        let vet = Vet::new(1, "James", "Carter", vec![]);
        assert_eq!(vet.nr_of_specialties(), 0);
        assert!(vet.specialties().is_empty());
    }
}
