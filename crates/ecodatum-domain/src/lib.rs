//! Domain vocabulary shared across EcoDatum crates.
//!
//! This crate contains only pure types with no framework dependencies.
//! The lookup enums here are the single source of the strings stored in the
//! seeded lookup tables.

pub mod abiotic_factor;
pub mod image_type;
pub mod lookup;
pub mod measurement_unit;
pub mod organization;
pub mod role;
pub mod user;
