use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ecodatum_auth_types::IdentityHeaders;
use ecodatum_domain::image_type::ImageTypeName;

use crate::domain::types::Image;
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::image::{CreateImageInput, UpdateImageInput};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponse {
    pub id: Uuid,
    pub base64_encoded: String,
    pub description: Option<String>,
    pub image_type_id: Uuid,
    pub survey_id: Uuid,
}

impl From<Image> for ImageResponse {
    fn from(image: Image) -> Self {
        Self {
            id: image.id,
            base64_encoded: image.base64_encoded,
            description: image.description,
            image_type_id: image.image_type_id,
            survey_id: image.survey_id,
        }
    }
}

// ── GET /images/{id} ─────────────────────────────────────────────────────────

pub async fn get_image(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ImageResponse>, ApiError> {
    let manager = state.manager();
    let caller = manager.resolve_caller(identity.user_id).await?;
    let image = manager.find_accessible_image(&caller, id).await?;
    Ok(Json(image.into()))
}

// ── POST /images ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateImageRequest {
    pub survey_id: Uuid,
    pub base64_encoded: String,
    pub description: Option<String>,
    pub image_type: ImageTypeName,
}

pub async fn create_image(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<CreateImageRequest>,
) -> Result<(StatusCode, Json<ImageResponse>), ApiError> {
    let manager = state.manager();
    let caller = manager.resolve_caller(identity.user_id).await?;
    let survey = manager.find_accessible_survey(&caller, body.survey_id).await?;
    let image = manager
        .create_image_by_name(
            &caller,
            &survey,
            body.image_type,
            CreateImageInput {
                base64_encoded: body.base64_encoded,
                description: body.description,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(image.into())))
}

// ── PUT /images/{id} ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateImageRequest {
    pub base64_encoded: Option<String>,
    pub description: Option<String>,
    pub image_type: Option<ImageTypeName>,
}

pub async fn update_image(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateImageRequest>,
) -> Result<Json<ImageResponse>, ApiError> {
    let manager = state.manager();
    let caller = manager.resolve_caller(identity.user_id).await?;
    let image = manager.find_accessible_image(&caller, id).await?;
    let image_type_id = match body.image_type {
        Some(name) => Some(manager.get_image_type(name).await?.id),
        None => None,
    };
    let image = manager
        .update_image(
            image.id,
            UpdateImageInput {
                base64_encoded: body.base64_encoded,
                description: body.description,
                image_type_id,
            },
        )
        .await?;
    Ok(Json(image.into()))
}

// ── DELETE /images/{id} ──────────────────────────────────────────────────────

pub async fn delete_image(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let manager = state.manager();
    let caller = manager.resolve_caller(identity.user_id).await?;
    let image = manager.find_accessible_image(&caller, id).await?;
    manager.delete_image(image.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
