use uuid::Uuid;

use crate::domain::repository::{PasswordHasher, Store};
use crate::domain::types::{Image, Measurement, Note, Organization, Site, Survey, User};
use crate::error::ApiError;
use crate::usecase::ModelManager;

/// Caller-scoped reads.
///
/// A resource the caller may not see is reported with the same not-found error as a
/// resource that does not exist.
impl<R: Store, H: PasswordHasher> ModelManager<R, H> {
    // ── Caller ───────────────────────────────────────────────────────────────

    /// Resolve a gateway identity to a persisted user. An id with no row behind it is
    /// treated like a missing identity.
    pub async fn resolve_caller(&self, user_id: Uuid) -> Result<User, ApiError> {
        match self.find_user(user_id).await {
            Err(ApiError::UserNotFound) => Err(ApiError::Unauthorized),
            other => other,
        }
    }

    /// `id` if the caller is that user or the root user.
    pub async fn find_visible_user(&self, caller: &User, id: Uuid) -> Result<User, ApiError> {
        if caller.id != id && !self.access.is_root_user(caller).await? {
            return Err(ApiError::UserNotFound);
        }
        self.find_user(id).await
    }

    /// Every user, for the root user only.
    pub async fn list_visible_users(&self, caller: &User) -> Result<Vec<User>, ApiError> {
        if !self.access.is_root_user(caller).await? {
            return Err(ApiError::UserNotFound);
        }
        self.list_users().await
    }

    // ── Single resources ─────────────────────────────────────────────────────

    pub async fn find_accessible_organization(
        &self,
        caller: &User,
        id: Uuid,
    ) -> Result<Organization, ApiError> {
        let organization = self.find_organization(id).await?;
        if !self
            .access
            .can_access_organization(caller, &organization)
            .await?
        {
            return Err(ApiError::OrganizationNotFound);
        }
        Ok(organization)
    }

    /// Like [`Self::find_accessible_organization`], and the caller must also be an
    /// administrator of it.
    pub async fn find_administered_organization(
        &self,
        caller: &User,
        id: Uuid,
    ) -> Result<Organization, ApiError> {
        let organization = self.find_accessible_organization(caller, id).await?;
        if !self
            .access
            .is_organization_administrator(caller, &organization)
            .await?
        {
            return Err(ApiError::PreconditionFailed(
                "user is not an organization administrator",
            ));
        }
        Ok(organization)
    }

    pub async fn find_accessible_site(&self, caller: &User, id: Uuid) -> Result<Site, ApiError> {
        let site = self.find_site(id).await?;
        if !self.access.can_access_site(caller, &site).await? {
            return Err(ApiError::SiteNotFound);
        }
        Ok(site)
    }

    pub async fn find_accessible_survey(
        &self,
        caller: &User,
        id: Uuid,
    ) -> Result<Survey, ApiError> {
        let survey = self.find_survey(id).await?;
        if !self.access.can_access_survey(caller, &survey).await? {
            return Err(ApiError::SurveyNotFound);
        }
        Ok(survey)
    }

    pub async fn find_accessible_measurement(
        &self,
        caller: &User,
        id: Uuid,
    ) -> Result<Measurement, ApiError> {
        let measurement = self.find_measurement(id).await?;
        if !self
            .access
            .can_access_measurement(caller, &measurement)
            .await?
        {
            return Err(ApiError::MeasurementNotFound);
        }
        Ok(measurement)
    }

    pub async fn find_accessible_note(&self, caller: &User, id: Uuid) -> Result<Note, ApiError> {
        let note = self.find_note(id).await?;
        if !self.access.can_access_note(caller, &note).await? {
            return Err(ApiError::NoteNotFound);
        }
        Ok(note)
    }

    pub async fn find_accessible_image(&self, caller: &User, id: Uuid) -> Result<Image, ApiError> {
        let image = self.find_image(id).await?;
        if !self.access.can_access_image(caller, &image).await? {
            return Err(ApiError::ImageNotFound);
        }
        Ok(image)
    }

    // ── Collections ──────────────────────────────────────────────────────────

    /// All organizations for root, otherwise those the caller is a member of.
    pub async fn list_visible_organizations(
        &self,
        caller: &User,
    ) -> Result<Vec<Organization>, ApiError> {
        if self.access.is_root_user(caller).await? {
            return self.list_organizations().await;
        }
        self.list_organizations_for_user(caller).await
    }

    /// All sites for root, otherwise the sites of every organization the caller belongs to.
    pub async fn list_visible_sites(&self, caller: &User) -> Result<Vec<Site>, ApiError> {
        if self.access.is_root_user(caller).await? {
            return self.list_sites().await;
        }
        let mut sites = Vec::new();
        for organization in self.list_organizations_for_user(caller).await? {
            sites.extend(self.list_sites_for_organization(&organization).await?);
        }
        Ok(sites)
    }

    /// All surveys for root, otherwise those reachable through the caller's memberships.
    pub async fn list_visible_surveys(&self, caller: &User) -> Result<Vec<Survey>, ApiError> {
        if self.access.is_root_user(caller).await? {
            return self.list_surveys().await;
        }
        self.find_surveys_by_user(caller).await
    }
}
