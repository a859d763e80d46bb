#![allow(async_fn_in_trait)]

use uuid::Uuid;

use ecodatum_domain::abiotic_factor::AbioticFactorName;
use ecodatum_domain::image_type::ImageTypeName;
use ecodatum_domain::measurement_unit::MeasurementUnitName;
use ecodatum_domain::role::RoleName;

use crate::domain::types::{
    AbioticFactor, Image, ImageType, Measurement, MeasurementUnit, Note, Organization, Role,
    Site, Survey, User, UserOrganizationRole,
};
use crate::error::ApiError;

/// Repository for users.
pub trait UserRepository: Send + Sync {
    async fn find_user(&self, id: Uuid) -> Result<Option<User>, ApiError>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, ApiError>;
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;
    async fn insert_user(&self, user: &User) -> Result<(), ApiError>;
    async fn update_user(&self, user: &User) -> Result<(), ApiError>;

    /// Delete a user and its organization memberships. Returns `true` if a row was deleted.
    async fn delete_user(&self, id: Uuid) -> Result<bool, ApiError>;

    /// Whether the user created any site or survey.
    async fn user_has_dependents(&self, id: Uuid) -> Result<bool, ApiError>;
}

/// Repository for organizations.
pub trait OrganizationRepository: Send + Sync {
    async fn find_organization(&self, id: Uuid) -> Result<Option<Organization>, ApiError>;
    async fn list_organizations(&self) -> Result<Vec<Organization>, ApiError>;

    /// Organizations the user holds any role in.
    async fn list_organizations_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Organization>, ApiError>;

    /// Insert an organization together with its first membership, atomically.
    async fn insert_organization_with_member(
        &self,
        organization: &Organization,
        membership: &UserOrganizationRole,
    ) -> Result<(), ApiError>;

    async fn update_organization(&self, organization: &Organization) -> Result<(), ApiError>;

    /// Delete an organization and its memberships. Returns `true` if a row was deleted.
    async fn delete_organization(&self, id: Uuid) -> Result<bool, ApiError>;

    async fn organization_has_sites(&self, id: Uuid) -> Result<bool, ApiError>;
}

/// Repository for user/organization/role links.
pub trait MembershipRepository: Send + Sync {
    /// Find a membership for the pair, restricted to `role_id` when given.
    async fn find_membership(
        &self,
        user_id: Uuid,
        organization_id: Uuid,
        role_id: Option<Uuid>,
    ) -> Result<Option<UserOrganizationRole>, ApiError>;

    async fn insert_membership(&self, membership: &UserOrganizationRole) -> Result<(), ApiError>;

    async fn list_memberships_by_organization(
        &self,
        organization_id: Uuid,
    ) -> Result<Vec<UserOrganizationRole>, ApiError>;
}

/// Repository for the seeded lookup tables.
pub trait LookupRepository: Send + Sync {
    async fn get_role(&self, name: RoleName) -> Result<Option<Role>, ApiError>;
    async fn get_abiotic_factor(
        &self,
        name: AbioticFactorName,
    ) -> Result<Option<AbioticFactor>, ApiError>;
    async fn get_measurement_unit(
        &self,
        name: MeasurementUnitName,
    ) -> Result<Option<MeasurementUnit>, ApiError>;
    async fn get_image_type(&self, name: ImageTypeName) -> Result<Option<ImageType>, ApiError>;

    async fn find_role(&self, id: Uuid) -> Result<Option<Role>, ApiError>;
    async fn find_abiotic_factor(&self, id: Uuid) -> Result<Option<AbioticFactor>, ApiError>;
    async fn find_measurement_unit(&self, id: Uuid)
    -> Result<Option<MeasurementUnit>, ApiError>;
    async fn find_image_type(&self, id: Uuid) -> Result<Option<ImageType>, ApiError>;

    async fn list_roles(&self) -> Result<Vec<Role>, ApiError>;
    async fn list_abiotic_factors(&self) -> Result<Vec<AbioticFactor>, ApiError>;
    async fn list_measurement_units(&self) -> Result<Vec<MeasurementUnit>, ApiError>;
    async fn list_image_types(&self) -> Result<Vec<ImageType>, ApiError>;
}

/// Repository for sites.
pub trait SiteRepository: Send + Sync {
    async fn find_site(&self, id: Uuid) -> Result<Option<Site>, ApiError>;
    async fn list_sites(&self) -> Result<Vec<Site>, ApiError>;
    async fn list_sites_by_organization(
        &self,
        organization_id: Uuid,
    ) -> Result<Vec<Site>, ApiError>;
    async fn insert_site(&self, site: &Site) -> Result<(), ApiError>;
    async fn update_site(&self, site: &Site) -> Result<(), ApiError>;
    async fn delete_site(&self, id: Uuid) -> Result<bool, ApiError>;
    async fn site_has_surveys(&self, id: Uuid) -> Result<bool, ApiError>;
}

/// Repository for surveys.
pub trait SurveyRepository: Send + Sync {
    async fn find_survey(&self, id: Uuid) -> Result<Option<Survey>, ApiError>;
    async fn list_surveys(&self) -> Result<Vec<Survey>, ApiError>;
    async fn list_surveys_by_site(&self, site_id: Uuid) -> Result<Vec<Survey>, ApiError>;

    /// Surveys of every site owned by an organization the user belongs to.
    async fn list_surveys_by_user(&self, user_id: Uuid) -> Result<Vec<Survey>, ApiError>;

    async fn insert_survey(&self, survey: &Survey) -> Result<(), ApiError>;
    async fn update_survey(&self, survey: &Survey) -> Result<(), ApiError>;
    async fn delete_survey(&self, id: Uuid) -> Result<bool, ApiError>;

    /// Whether any measurement, note or image still references the survey.
    async fn survey_has_records(&self, id: Uuid) -> Result<bool, ApiError>;
}

/// Repository for measurements.
pub trait MeasurementRepository: Send + Sync {
    async fn find_measurement(&self, id: Uuid) -> Result<Option<Measurement>, ApiError>;
    async fn list_measurements_by_survey(
        &self,
        survey_id: Uuid,
    ) -> Result<Vec<Measurement>, ApiError>;
    async fn insert_measurement(&self, measurement: &Measurement) -> Result<(), ApiError>;
    async fn update_measurement(&self, measurement: &Measurement) -> Result<(), ApiError>;
    async fn delete_measurement(&self, id: Uuid) -> Result<bool, ApiError>;
}

/// Repository for notes.
pub trait NoteRepository: Send + Sync {
    async fn find_note(&self, id: Uuid) -> Result<Option<Note>, ApiError>;
    async fn list_notes_by_survey(&self, survey_id: Uuid) -> Result<Vec<Note>, ApiError>;
    async fn insert_note(&self, note: &Note) -> Result<(), ApiError>;
    async fn update_note(&self, note: &Note) -> Result<(), ApiError>;
    async fn delete_note(&self, id: Uuid) -> Result<bool, ApiError>;
}

/// Repository for images.
pub trait ImageRepository: Send + Sync {
    async fn find_image(&self, id: Uuid) -> Result<Option<Image>, ApiError>;
    async fn list_images_by_survey(&self, survey_id: Uuid) -> Result<Vec<Image>, ApiError>;
    async fn insert_image(&self, image: &Image) -> Result<(), ApiError>;
    async fn update_image(&self, image: &Image) -> Result<(), ApiError>;
    async fn delete_image(&self, id: Uuid) -> Result<bool, ApiError>;
}

/// Every persistence capability the facade needs, behind one handle.
pub trait Store:
    UserRepository
    + OrganizationRepository
    + MembershipRepository
    + LookupRepository
    + SiteRepository
    + SurveyRepository
    + MeasurementRepository
    + NoteRepository
    + ImageRepository
    + Clone
{
}

impl<T> Store for T where
    T: UserRepository
        + OrganizationRepository
        + MembershipRepository
        + LookupRepository
        + SiteRepository
        + SurveyRepository
        + MeasurementRepository
        + NoteRepository
        + ImageRepository
        + Clone
{
}

/// One-way password hash function. Implementations must not block the caller's executor.
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, plaintext: &str) -> Result<String, ApiError>;
}
