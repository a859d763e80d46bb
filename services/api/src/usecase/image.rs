use uuid::Uuid;

use ecodatum_domain::image_type::ImageTypeName;

use crate::domain::repository::{PasswordHasher, Store};
use crate::domain::types::{Image, ImageType, Survey, User};
use crate::error::ApiError;
use crate::usecase::{ModelManager, expect};

pub struct CreateImageInput {
    pub base64_encoded: String,
    pub description: Option<String>,
}

#[derive(Default)]
pub struct UpdateImageInput {
    pub base64_encoded: Option<String>,
    pub description: Option<String>,
    pub image_type_id: Option<Uuid>,
}

impl<R: Store, H: PasswordHasher> ModelManager<R, H> {
    // ── Create ───────────────────────────────────────────────────────────────

    pub async fn create_image(
        &self,
        user: &User,
        survey: &Survey,
        image_type: &ImageType,
        input: CreateImageInput,
    ) -> Result<Image, ApiError> {
        if input.base64_encoded.is_empty() {
            return Err(ApiError::InvalidInput("image payload must not be empty"));
        }
        let survey = self.find_survey(survey.id).await?;
        let image_type = self.find_image_type(image_type.id).await?;
        self.assert_survey_member(user, &survey).await?;

        let image = Image {
            id: Uuid::now_v7(),
            base64_encoded: input.base64_encoded,
            description: input.description,
            image_type_id: image_type.id,
            survey_id: survey.id,
        };
        self.repo.insert_image(&image).await?;
        tracing::info!(image_id = %image.id, survey_id = %image.survey_id, "image created");
        Ok(image)
    }

    pub async fn create_image_by_name(
        &self,
        user: &User,
        survey: &Survey,
        image_type: ImageTypeName,
        input: CreateImageInput,
    ) -> Result<Image, ApiError> {
        let image_type = self.get_image_type(image_type).await?;
        self.create_image(user, survey, &image_type, input).await
    }

    // ── Read ─────────────────────────────────────────────────────────────────

    pub async fn find_image(&self, id: Uuid) -> Result<Image, ApiError> {
        expect(self.repo.find_image(id).await?, ApiError::ImageNotFound)
    }

    pub async fn list_images_for_survey(&self, survey: &Survey) -> Result<Vec<Image>, ApiError> {
        self.repo.list_images_by_survey(survey.id).await
    }

    // ── Update ───────────────────────────────────────────────────────────────

    pub async fn update_image(&self, id: Uuid, input: UpdateImageInput) -> Result<Image, ApiError> {
        let mut image = self.find_image(id).await?;
        if let Some(payload) = input.base64_encoded {
            if payload.is_empty() {
                return Err(ApiError::InvalidInput("image payload must not be empty"));
            }
            image.base64_encoded = payload;
        }
        if let Some(description) = input.description {
            image.description = Some(description);
        }
        if let Some(id) = input.image_type_id {
            image.image_type_id = self.find_image_type(id).await?.id;
        }
        self.repo.update_image(&image).await?;
        tracing::info!(image_id = %image.id, "image updated");
        Ok(image)
    }

    // ── Delete ───────────────────────────────────────────────────────────────

    pub async fn delete_image(&self, id: Uuid) -> Result<(), ApiError> {
        let image = self.find_image(id).await?;
        if !self.repo.delete_image(image.id).await? {
            return Err(ApiError::ImageNotFound);
        }
        tracing::info!(image_id = %image.id, "image deleted");
        Ok(())
    }

    async fn find_image_type(&self, id: Uuid) -> Result<ImageType, ApiError> {
        expect(
            self.repo.find_image_type(id).await?,
            ApiError::LookupNotFound("image type"),
        )
    }
}
