//! Business logic services for the application layer.

pub mod clinic_service;

pub use clinic_service::ClinicService;
