use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::repository::{PasswordHasher, Store};
use crate::domain::types::{Site, Survey, User};
use crate::error::ApiError;
use crate::usecase::{ModelManager, expect};

impl<R: Store, H: PasswordHasher> ModelManager<R, H> {
    // ── Create ───────────────────────────────────────────────────────────────

    /// Start a survey at `site`. `date` defaults to now.
    pub async fn create_survey(
        &self,
        user: &User,
        site: &Site,
        date: Option<DateTime<Utc>>,
    ) -> Result<Survey, ApiError> {
        let user = self.find_user(user.id).await?;
        let site = self.find_site(site.id).await?;
        if !self.access.can_access_site(&user, &site).await? {
            return Err(ApiError::PreconditionFailed(
                "user does not belong to the site's organization",
            ));
        }

        let survey = Survey {
            id: Uuid::now_v7(),
            date: date.unwrap_or_else(Utc::now),
            site_id: site.id,
            user_id: user.id,
        };
        self.repo.insert_survey(&survey).await?;
        tracing::info!(survey_id = %survey.id, site_id = %survey.site_id, "survey created");
        Ok(survey)
    }

    // ── Read ─────────────────────────────────────────────────────────────────

    pub async fn find_survey(&self, id: Uuid) -> Result<Survey, ApiError> {
        expect(self.repo.find_survey(id).await?, ApiError::SurveyNotFound)
    }

    pub async fn list_surveys(&self) -> Result<Vec<Survey>, ApiError> {
        self.repo.list_surveys().await
    }

    /// Surveys reachable through the user's organization memberships.
    pub async fn find_surveys_by_user(&self, user: &User) -> Result<Vec<Survey>, ApiError> {
        self.repo.list_surveys_by_user(user.id).await
    }

    pub async fn list_surveys_for_site(&self, site: &Site) -> Result<Vec<Survey>, ApiError> {
        self.repo.list_surveys_by_site(site.id).await
    }

    // ── Update ───────────────────────────────────────────────────────────────

    pub async fn update_survey(
        &self,
        id: Uuid,
        new_date: Option<DateTime<Utc>>,
    ) -> Result<Survey, ApiError> {
        let mut survey = self.find_survey(id).await?;
        if let Some(date) = new_date {
            survey.date = date;
        }
        self.repo.update_survey(&survey).await?;
        tracing::info!(survey_id = %survey.id, "survey updated");
        Ok(survey)
    }

    // ── Delete ───────────────────────────────────────────────────────────────

    pub async fn delete_survey(&self, id: Uuid) -> Result<(), ApiError> {
        let survey = self.find_survey(id).await?;
        if self.repo.survey_has_records(survey.id).await? {
            return Err(ApiError::HasDependents("survey"));
        }
        if !self.repo.delete_survey(survey.id).await? {
            return Err(ApiError::SurveyNotFound);
        }
        tracing::info!(survey_id = %survey.id, "survey deleted");
        Ok(())
    }
}
