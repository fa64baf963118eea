//! Standard clinic data, mirrored by `migrations/*_seed_clinic_data.sql`.

use chrono::NaiveDate;

use super::store::{OwnerRecord, PetRecord, Tables, VetRecord, VisitRecord};
use crate::domain::entities::{PetType, Specialty};

const VETS: &[(i64, &str, &str, &[i64])] = &[
    (1, "James", "Carter", &[]),
    (2, "Helen", "Leary", &[1]),
    (3, "Linda", "Douglas", &[2, 3]),
    (4, "Rafael", "Ortega", &[2]),
    (5, "Henry", "Stevens", &[1]),
    (6, "Sharon", "Jenkins", &[]),
];

const SPECIALTIES: &[(i64, &str)] = &[(1, "radiology"), (2, "surgery"), (3, "dentistry")];

const PET_TYPES: &[(i64, &str)] = &[
    (1, "cat"),
    (2, "dog"),
    (3, "lizard"),
    (4, "snake"),
    (5, "bird"),
    (6, "hamster"),
];

const OWNERS: &[(i64, &str, &str, &str, &str, &str)] = &[
    (1, "George", "Franklin", "110 W. Liberty St.", "Madison", "6085551023"),
    (2, "Betty", "Davis", "638 Cardinal Ave.", "Sun Prairie", "6085551749"),
    (3, "Eduardo", "Rodriquez", "2693 Commerce St.", "McFarland", "6085558763"),
    (4, "Harold", "Davis", "563 Friendly St.", "Windsor", "6085553198"),
    (5, "Peter", "McTavish", "2387 S. Fair Way", "Madison", "6085552765"),
    (6, "Jean", "Coleman", "105 N. Lake St.", "Monona", "6085552654"),
    (7, "Jeff", "Black", "1450 Oak Blvd.", "Monona", "6085555387"),
    (8, "Maria", "Escobito", "345 Maple St.", "Madison", "6085557683"),
    (9, "David", "Schroeder", "2749 Blackhawk Trail", "Madison", "6085559435"),
    (10, "Carlos", "Estaban", "2335 Independence La.", "Waunakee", "6085555487"),
];

// (id, name, (year, month, day), type_id, owner_id)
const PETS: &[(i64, &str, (i32, u32, u32), i64, i64)] = &[
    (1, "Leo", (2010, 9, 7), 1, 1),
    (2, "Basil", (2012, 8, 6), 6, 2),
    (3, "Rosy", (2011, 4, 17), 2, 3),
    (4, "Jewel", (2010, 3, 7), 2, 3),
    (5, "Iggy", (2010, 11, 30), 3, 4),
    (6, "George", (2010, 1, 20), 4, 5),
    (7, "Samantha", (2012, 9, 4), 1, 6),
    (8, "Max", (2012, 9, 4), 1, 6),
    (9, "Lucky", (2011, 8, 6), 5, 7),
    (10, "Mulligan", (2007, 2, 24), 2, 8),
    (11, "Freddy", (2010, 3, 9), 5, 9),
    (12, "Lucky", (2010, 6, 24), 2, 10),
    (13, "Sly", (2012, 6, 8), 1, 10),
];

// (id, pet_id, (year, month, day), description)
const VISITS: &[(i64, i64, (i32, u32, u32), &str)] = &[
    (1, 7, (2013, 1, 1), "rabies shot"),
    (2, 8, (2013, 1, 2), "rabies shot"),
    (3, 8, (2013, 1, 3), "neutered"),
    (4, 7, (2013, 1, 4), "spayed"),
];

fn date((year, month, day): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub(super) fn clinic_tables() -> Tables {
    let mut tables = Tables::default();

    for &(id, name) in SPECIALTIES {
        tables.specialties.insert(id, Specialty::new(id, name));
    }
    for &(id, first_name, last_name, specialty_ids) in VETS {
        tables.vets.insert(
            id,
            VetRecord {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                specialty_ids: specialty_ids.to_vec(),
            },
        );
    }
    for &(id, name) in PET_TYPES {
        tables.pet_types.insert(id, PetType::new(id, name));
    }
    for &(id, first_name, last_name, address, city, telephone) in OWNERS {
        tables.owners.insert(
            id,
            OwnerRecord {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                address: address.to_string(),
                city: city.to_string(),
                telephone: telephone.to_string(),
            },
        );
    }
    for &(id, name, birth_date, type_id, owner_id) in PETS {
        tables.pets.insert(
            id,
            PetRecord {
                name: name.to_string(),
                birth_date: date(birth_date),
                type_id,
                owner_id,
            },
        );
    }
    for &(id, pet_id, visit_date, description) in VISITS {
        tables.visits.insert(
            id,
            VisitRecord {
                pet_id,
                date: date(visit_date),
                description: description.to_string(),
            },
        );
    }

    tables.sync_sequences();
    tables
}
