use uuid::Uuid;

use ecodatum_domain::role::RoleName;

use crate::domain::repository::Store;
use crate::domain::types::{
    Image, Measurement, Note, Organization, RootUserConfig, Site, Survey, User,
};
use crate::error::ApiError;
use crate::usecase::expect;

/// Decides whether a user may see or change an organization-owned resource.
///
/// Access is granted to the root user and to any member of the organization at the
/// top of the resource's ownership chain.
#[derive(Clone)]
pub struct AccessControl<R> {
    pub repo: R,
    pub root_user: RootUserConfig,
}

impl<R: Store> AccessControl<R> {
    pub fn new(repo: R, root_user: RootUserConfig) -> Self {
        Self { repo, root_user }
    }

    /// `Ok(false)` for any other id. For the reserved id the persisted row must carry
    /// the configured name and email, otherwise the store is inconsistent with the
    /// configuration and the call fails.
    pub async fn is_root_user(&self, user: &User) -> Result<bool, ApiError> {
        if user.id != self.root_user.id {
            return Ok(false);
        }
        match self.repo.find_user(user.id).await? {
            Some(stored) if self.root_user.matches(&stored) => Ok(true),
            _ => Err(ApiError::RootUserMismatch),
        }
    }

    pub async fn does_user_belong_to_organization(
        &self,
        user: &User,
        organization: &Organization,
    ) -> Result<bool, ApiError> {
        Ok(self
            .repo
            .find_membership(user.id, organization.id, None)
            .await?
            .is_some())
    }

    pub async fn is_organization_administrator(
        &self,
        user: &User,
        organization: &Organization,
    ) -> Result<bool, ApiError> {
        if self.is_root_user(user).await? {
            return Ok(true);
        }
        let role = expect(
            self.repo.get_role(RoleName::Administrator).await?,
            ApiError::PreconditionFailed("role ADMINISTRATOR is not seeded"),
        )?;
        Ok(self
            .repo
            .find_membership(user.id, organization.id, Some(role.id))
            .await?
            .is_some())
    }

    // ── Ownership chain ──────────────────────────────────────────────────────

    pub async fn organization_of_site(&self, site: &Site) -> Result<Organization, ApiError> {
        expect(
            self.repo.find_organization(site.organization_id).await?,
            ApiError::PreconditionFailed("site references a missing organization"),
        )
    }

    pub async fn organization_of_survey(&self, survey: &Survey) -> Result<Organization, ApiError> {
        let site = expect(
            self.repo.find_site(survey.site_id).await?,
            ApiError::PreconditionFailed("survey references a missing site"),
        )?;
        self.organization_of_site(&site).await
    }

    pub async fn organization_of_measurement(
        &self,
        measurement: &Measurement,
    ) -> Result<Organization, ApiError> {
        self.organization_of_survey_id(
            measurement.survey_id,
            "measurement references a missing survey",
        )
        .await
    }

    pub async fn organization_of_note(&self, note: &Note) -> Result<Organization, ApiError> {
        self.organization_of_survey_id(note.survey_id, "note references a missing survey")
            .await
    }

    pub async fn organization_of_image(&self, image: &Image) -> Result<Organization, ApiError> {
        self.organization_of_survey_id(image.survey_id, "image references a missing survey")
            .await
    }

    async fn organization_of_survey_id(
        &self,
        survey_id: Uuid,
        missing: &'static str,
    ) -> Result<Organization, ApiError> {
        let survey = expect(
            self.repo.find_survey(survey_id).await?,
            ApiError::PreconditionFailed(missing),
        )?;
        self.organization_of_survey(&survey).await
    }

    // ── Decisions ────────────────────────────────────────────────────────────

    pub async fn can_access_organization(
        &self,
        user: &User,
        organization: &Organization,
    ) -> Result<bool, ApiError> {
        if self.is_root_user(user).await? {
            return Ok(true);
        }
        self.does_user_belong_to_organization(user, organization)
            .await
    }

    pub async fn can_access_site(&self, user: &User, site: &Site) -> Result<bool, ApiError> {
        if self.is_root_user(user).await? {
            return Ok(true);
        }
        let organization = self.organization_of_site(site).await?;
        self.does_user_belong_to_organization(user, &organization)
            .await
    }

    pub async fn can_access_survey(&self, user: &User, survey: &Survey) -> Result<bool, ApiError> {
        if self.is_root_user(user).await? {
            return Ok(true);
        }
        let organization = self.organization_of_survey(survey).await?;
        self.does_user_belong_to_organization(user, &organization)
            .await
    }

    pub async fn can_access_measurement(
        &self,
        user: &User,
        measurement: &Measurement,
    ) -> Result<bool, ApiError> {
        if self.is_root_user(user).await? {
            return Ok(true);
        }
        let organization = self.organization_of_measurement(measurement).await?;
        self.does_user_belong_to_organization(user, &organization)
            .await
    }

    pub async fn can_access_note(&self, user: &User, note: &Note) -> Result<bool, ApiError> {
        if self.is_root_user(user).await? {
            return Ok(true);
        }
        let organization = self.organization_of_note(note).await?;
        self.does_user_belong_to_organization(user, &organization)
            .await
    }

    pub async fn can_access_image(&self, user: &User, image: &Image) -> Result<bool, ApiError> {
        if self.is_root_user(user).await? {
            return Ok(true);
        }
        let organization = self.organization_of_image(image).await?;
        self.does_user_belong_to_organization(user, &organization)
            .await
    }
}
