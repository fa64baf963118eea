//! Visit entity representing a recorded clinic visit.

use chrono::{Local, NaiveDate};
use serde::Serialize;
use validator::Validate;

/// A clinic visit for a pet.
///
/// `pet_id` is a plain back-reference; the visit does not own the pet.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct Visit {
    pub id: Option<i64>,
    pub date: NaiveDate,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub description: String,
    pub pet_id: Option<i64>,
}

impl Visit {
    /// Creates an unsaved visit dated today.
    pub fn new(description: impl Into<String>) -> Self {
        Self::on(Local::now().date_naive(), description)
    }

    /// Creates an unsaved visit on the given date.
    pub fn on(date: NaiveDate, description: impl Into<String>) -> Self {
        Self {
            id: None,
            date,
            description: description.into(),
            pet_id: None,
        }
    }

    /// Returns true until the store has assigned an id.
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }
}
