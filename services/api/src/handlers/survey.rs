use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ecodatum_auth_types::IdentityHeaders;

use crate::domain::types::Survey;
use crate::error::ApiError;
use crate::handlers::image::ImageResponse;
use crate::handlers::measurement::MeasurementResponse;
use crate::handlers::note::NoteResponse;
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyResponse {
    pub id: Uuid,
    #[serde(serialize_with = "ecodatum_core::serde::to_rfc3339_ms")]
    pub date: DateTime<Utc>,
    pub site_id: Uuid,
    pub user_id: Uuid,
}

impl From<Survey> for SurveyResponse {
    fn from(survey: Survey) -> Self {
        Self {
            id: survey.id,
            date: survey.date,
            site_id: survey.site_id,
            user_id: survey.user_id,
        }
    }
}

// ── GET /surveys ─────────────────────────────────────────────────────────────

pub async fn get_surveys(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<Vec<SurveyResponse>>, ApiError> {
    let manager = state.manager();
    let caller = manager.resolve_caller(identity.user_id).await?;
    let surveys = manager.list_visible_surveys(&caller).await?;
    Ok(Json(surveys.into_iter().map(SurveyResponse::from).collect()))
}

// ── GET /surveys/{id} ────────────────────────────────────────────────────────

pub async fn get_survey(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SurveyResponse>, ApiError> {
    let manager = state.manager();
    let caller = manager.resolve_caller(identity.user_id).await?;
    let survey = manager.find_accessible_survey(&caller, id).await?;
    Ok(Json(survey.into()))
}

// ── GET /surveys/{id}/measurements ───────────────────────────────────────────

pub async fn get_survey_measurements(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<MeasurementResponse>>, ApiError> {
    let manager = state.manager();
    let caller = manager.resolve_caller(identity.user_id).await?;
    let survey = manager.find_accessible_survey(&caller, id).await?;
    let measurements = manager.list_measurements_for_survey(&survey).await?;
    Ok(Json(
        measurements
            .into_iter()
            .map(MeasurementResponse::from)
            .collect(),
    ))
}

// ── GET /surveys/{id}/notes ──────────────────────────────────────────────────

pub async fn get_survey_notes(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<NoteResponse>>, ApiError> {
    let manager = state.manager();
    let caller = manager.resolve_caller(identity.user_id).await?;
    let survey = manager.find_accessible_survey(&caller, id).await?;
    let notes = manager.list_notes_for_survey(&survey).await?;
    Ok(Json(notes.into_iter().map(NoteResponse::from).collect()))
}

// ── GET /surveys/{id}/images ─────────────────────────────────────────────────

pub async fn get_survey_images(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<ImageResponse>>, ApiError> {
    let manager = state.manager();
    let caller = manager.resolve_caller(identity.user_id).await?;
    let survey = manager.find_accessible_survey(&caller, id).await?;
    let images = manager.list_images_for_survey(&survey).await?;
    Ok(Json(images.into_iter().map(ImageResponse::from).collect()))
}

// ── POST /surveys ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSurveyRequest {
    pub site_id: Uuid,
    pub date: Option<DateTime<Utc>>,
}

pub async fn create_survey(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<CreateSurveyRequest>,
) -> Result<(StatusCode, Json<SurveyResponse>), ApiError> {
    let manager = state.manager();
    let caller = manager.resolve_caller(identity.user_id).await?;
    let site = manager.find_accessible_site(&caller, body.site_id).await?;
    let survey = manager.create_survey(&caller, &site, body.date).await?;
    Ok((StatusCode::CREATED, Json(survey.into())))
}

// ── PUT /surveys/{id} ────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSurveyRequest {
    pub date: Option<DateTime<Utc>>,
}

pub async fn update_survey(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateSurveyRequest>,
) -> Result<Json<SurveyResponse>, ApiError> {
    let manager = state.manager();
    let caller = manager.resolve_caller(identity.user_id).await?;
    let survey = manager.find_accessible_survey(&caller, id).await?;
    let survey = manager.update_survey(survey.id, body.date).await?;
    Ok(Json(survey.into()))
}

// ── DELETE /surveys/{id} ─────────────────────────────────────────────────────

pub async fn delete_survey(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let manager = state.manager();
    let caller = manager.resolve_caller(identity.user_id).await?;
    let survey = manager.find_accessible_survey(&caller, id).await?;
    manager.delete_survey(survey.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
