use uuid::Uuid;

use crate::domain::repository::{PasswordHasher, Store};
use crate::domain::types::{Organization, Site, Survey, User};
use crate::error::ApiError;
use crate::usecase::{ModelManager, expect};

pub struct CreateSiteInput {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: Option<f64>,
    pub horizontal_accuracy: Option<f64>,
    pub vertical_accuracy: Option<f64>,
}

#[derive(Default)]
pub struct UpdateSiteInput {
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub altitude: Option<f64>,
    pub horizontal_accuracy: Option<f64>,
    pub vertical_accuracy: Option<f64>,
}

impl<R: Store, H: PasswordHasher> ModelManager<R, H> {
    // ── Create ───────────────────────────────────────────────────────────────

    /// Only the root user and administrators of `organization` may add sites.
    pub async fn create_site(
        &self,
        user: &User,
        organization: &Organization,
        input: CreateSiteInput,
    ) -> Result<Site, ApiError> {
        validate_coordinates(Some(input.latitude), Some(input.longitude))?;
        let user = self.find_user(user.id).await?;
        let organization = self.find_organization(organization.id).await?;
        if !self
            .access
            .is_organization_administrator(&user, &organization)
            .await?
        {
            return Err(ApiError::PreconditionFailed(
                "user is not an organization administrator",
            ));
        }

        let site = Site {
            id: Uuid::now_v7(),
            name: input.name,
            latitude: input.latitude,
            longitude: input.longitude,
            altitude: input.altitude,
            horizontal_accuracy: input.horizontal_accuracy,
            vertical_accuracy: input.vertical_accuracy,
            organization_id: organization.id,
            user_id: user.id,
        };
        self.repo.insert_site(&site).await?;
        tracing::info!(
            site_id = %site.id,
            organization_id = %site.organization_id,
            "site created"
        );
        Ok(site)
    }

    // ── Read ─────────────────────────────────────────────────────────────────

    pub async fn find_site(&self, id: Uuid) -> Result<Site, ApiError> {
        expect(self.repo.find_site(id).await?, ApiError::SiteNotFound)
    }

    pub async fn find_site_for_survey(&self, survey: &Survey) -> Result<Site, ApiError> {
        self.find_site(survey.site_id).await
    }

    pub async fn list_sites(&self) -> Result<Vec<Site>, ApiError> {
        self.repo.list_sites().await
    }

    pub async fn list_sites_for_organization(
        &self,
        organization: &Organization,
    ) -> Result<Vec<Site>, ApiError> {
        self.repo.list_sites_by_organization(organization.id).await
    }

    // ── Update ───────────────────────────────────────────────────────────────

    pub async fn update_site(&self, id: Uuid, input: UpdateSiteInput) -> Result<Site, ApiError> {
        validate_coordinates(input.latitude, input.longitude)?;
        let mut site = self.find_site(id).await?;
        if let Some(name) = input.name {
            site.name = name;
        }
        if let Some(latitude) = input.latitude {
            site.latitude = latitude;
        }
        if let Some(longitude) = input.longitude {
            site.longitude = longitude;
        }
        if let Some(altitude) = input.altitude {
            site.altitude = Some(altitude);
        }
        if let Some(accuracy) = input.horizontal_accuracy {
            site.horizontal_accuracy = Some(accuracy);
        }
        if let Some(accuracy) = input.vertical_accuracy {
            site.vertical_accuracy = Some(accuracy);
        }
        self.repo.update_site(&site).await?;
        tracing::info!(site_id = %site.id, "site updated");
        Ok(site)
    }

    // ── Delete ───────────────────────────────────────────────────────────────

    pub async fn delete_site(&self, id: Uuid) -> Result<(), ApiError> {
        let site = self.find_site(id).await?;
        if self.repo.site_has_surveys(site.id).await? {
            return Err(ApiError::HasDependents("site"));
        }
        if !self.repo.delete_site(site.id).await? {
            return Err(ApiError::SiteNotFound);
        }
        tracing::info!(site_id = %site.id, "site deleted");
        Ok(())
    }
}

fn validate_coordinates(latitude: Option<f64>, longitude: Option<f64>) -> Result<(), ApiError> {
    if let Some(latitude) = latitude {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ApiError::InvalidInput("latitude must be within [-90, 90]"));
        }
    }
    if let Some(longitude) = longitude {
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ApiError::InvalidInput(
                "longitude must be within [-180, 180]",
            ));
        }
    }
    Ok(())
}
