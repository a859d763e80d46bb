//! sea-orm entities for the EcoDatum API database.

pub mod abiotic_factors;
pub mod image_types;
pub mod images;
pub mod measurement_units;
pub mod measurements;
pub mod notes;
pub mod organizations;
pub mod roles;
pub mod sites;
pub mod surveys;
pub mod user_organization_roles;
pub mod users;
