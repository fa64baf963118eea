//! Core domain entities representing the clinic data model.
//!
//! Entities are plain data structures with a handful of aggregate helpers.
//!
//! # Entity Types
//!
//! - [`Owner`] - A clinic customer; owns its [`Pet`]s
//! - [`Pet`] - An animal typed by a [`PetType`]; owns its [`Visit`]s
//! - [`Visit`] - A recorded clinic visit
//! - [`Vet`] - A veterinarian with sorted [`Specialty`] entries
//!
//! # Identity
//!
//! `Owner`, `Pet` and `Visit` carry `id: Option<i64>`. `None` means the record
//! has never been saved; the store assigns the id on first save and it never
//! changes afterwards. Reference data (`PetType`, `Specialty`, `Vet`) always
//! has an id.

pub mod owner;
pub mod pet;
pub mod vet;
pub mod visit;

pub use owner::Owner;
pub use pet::{Pet, PetType};
pub use vet::{Specialty, Vet};
pub use visit::Visit;
