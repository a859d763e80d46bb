use chrono::{DateTime, Utc};
use uuid::Uuid;

use ecodatum_domain::abiotic_factor::AbioticFactorName;
use ecodatum_domain::image_type::ImageTypeName;
use ecodatum_domain::measurement_unit::MeasurementUnitName;
use ecodatum_domain::role::RoleName;
use ecodatum_domain::user::ROOT_USER_ID;

/// Registered user. `password` is always a one-way hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organization {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Role {
    pub id: Uuid,
    pub name: RoleName,
}

/// Membership of a user in an organization, with the role it grants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserOrganizationRole {
    pub id: Uuid,
    pub user_id: Uuid,
    pub organization_id: Uuid,
    pub role_id: Uuid,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    pub id: Uuid,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: Option<f64>,
    pub horizontal_accuracy: Option<f64>,
    pub vertical_accuracy: Option<f64>,
    pub organization_id: Uuid,
    /// Creator.
    pub user_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Survey {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub site_id: Uuid,
    /// Creator.
    pub user_id: Uuid,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub id: Uuid,
    pub value: f64,
    pub abiotic_factor_id: Uuid,
    pub measurement_unit_id: Uuid,
    pub survey_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: Uuid,
    pub text: String,
    pub survey_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub id: Uuid,
    pub base64_encoded: String,
    pub description: Option<String>,
    pub image_type_id: Uuid,
    pub survey_id: Uuid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbioticFactor {
    pub id: Uuid,
    pub name: AbioticFactorName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasurementUnit {
    pub id: Uuid,
    pub name: MeasurementUnitName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageType {
    pub id: Uuid,
    pub name: ImageTypeName,
}

/// Expected identity of the root user, fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootUserConfig {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl RootUserConfig {
    /// Root identity bound to the reserved [`ROOT_USER_ID`].
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: ROOT_USER_ID,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Whether a persisted user row carries the configured name and email.
    pub fn matches(&self, user: &User) -> bool {
        user.id == self.id && user.name == self.name && user.email == self.email
    }
}
