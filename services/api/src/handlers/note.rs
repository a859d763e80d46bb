use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ecodatum_auth_types::IdentityHeaders;

use crate::domain::types::Note;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
    pub id: Uuid,
    pub text: String,
    pub survey_id: Uuid,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            text: note.text,
            survey_id: note.survey_id,
        }
    }
}

// ── GET /notes/{id} ──────────────────────────────────────────────────────────

pub async fn get_note(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<NoteResponse>, ApiError> {
    let manager = state.manager();
    let caller = manager.resolve_caller(identity.user_id).await?;
    let note = manager.find_accessible_note(&caller, id).await?;
    Ok(Json(note.into()))
}

// ── POST /notes ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteRequest {
    pub survey_id: Uuid,
    pub text: String,
}

pub async fn create_note(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<CreateNoteRequest>,
) -> Result<(StatusCode, Json<NoteResponse>), ApiError> {
    let manager = state.manager();
    let caller = manager.resolve_caller(identity.user_id).await?;
    let survey = manager.find_accessible_survey(&caller, body.survey_id).await?;
    let note = manager.create_note(&caller, &survey, body.text).await?;
    Ok((StatusCode::CREATED, Json(note.into())))
}

// ── PUT /notes/{id} ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNoteRequest {
    pub text: Option<String>,
}

pub async fn update_note(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateNoteRequest>,
) -> Result<Json<NoteResponse>, ApiError> {
    let manager = state.manager();
    let caller = manager.resolve_caller(identity.user_id).await?;
    let note = manager.find_accessible_note(&caller, id).await?;
    let note = manager.update_note(note.id, body.text).await?;
    Ok(Json(note.into()))
}

// ── DELETE /notes/{id} ───────────────────────────────────────────────────────

pub async fn delete_note(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let manager = state.manager();
    let caller = manager.resolve_caller(identity.user_id).await?;
    let note = manager.find_accessible_note(&caller, id).await?;
    manager.delete_note(note.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
