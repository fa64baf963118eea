//! In-memory store for demos and tests.
//!
//! [`InMemoryClinicStore`] keeps the clinic tables in ordered maps and
//! implements every repository trait, with checkpoint/rollback for grouping
//! operations into an all-or-nothing unit.

mod seed;
mod store;

pub use store::{Checkpoint, InMemoryClinicStore};
