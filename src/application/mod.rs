//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and the explicit owning-side save sequence. Services consume
//! repository traits and provide a clean API for the CLI and library users.
//!
//! # Available Services
//!
//! - [`services::clinic_service::ClinicService`] - Owners, pets, visits and vets

pub mod services;
