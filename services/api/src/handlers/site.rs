use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ecodatum_auth_types::IdentityHeaders;

use crate::domain::types::Site;
use crate::error::ApiError;
use crate::handlers::survey::SurveyResponse;
use crate::state::AppState;
use crate::usecase::site::{CreateSiteInput, UpdateSiteInput};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteResponse {
    pub id: Uuid,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: Option<f64>,
    pub horizontal_accuracy: Option<f64>,
    pub vertical_accuracy: Option<f64>,
    pub organization_id: Uuid,
    pub user_id: Uuid,
}

impl From<Site> for SiteResponse {
    fn from(site: Site) -> Self {
        Self {
            id: site.id,
            name: site.name,
            latitude: site.latitude,
            longitude: site.longitude,
            altitude: site.altitude,
            horizontal_accuracy: site.horizontal_accuracy,
            vertical_accuracy: site.vertical_accuracy,
            organization_id: site.organization_id,
            user_id: site.user_id,
        }
    }
}

// ── GET /sites ───────────────────────────────────────────────────────────────

pub async fn get_sites(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<Vec<SiteResponse>>, ApiError> {
    let manager = state.manager();
    let caller = manager.resolve_caller(identity.user_id).await?;
    let sites = manager.list_visible_sites(&caller).await?;
    Ok(Json(sites.into_iter().map(SiteResponse::from).collect()))
}

// ── GET /sites/{id} ──────────────────────────────────────────────────────────

pub async fn get_site(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SiteResponse>, ApiError> {
    let manager = state.manager();
    let caller = manager.resolve_caller(identity.user_id).await?;
    let site = manager.find_accessible_site(&caller, id).await?;
    Ok(Json(site.into()))
}

// ── GET /sites/{id}/surveys ──────────────────────────────────────────────────

pub async fn get_site_surveys(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<SurveyResponse>>, ApiError> {
    let manager = state.manager();
    let caller = manager.resolve_caller(identity.user_id).await?;
    let site = manager.find_accessible_site(&caller, id).await?;
    let surveys = manager.list_surveys_for_site(&site).await?;
    Ok(Json(surveys.into_iter().map(SurveyResponse::from).collect()))
}

// ── POST /sites ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSiteRequest {
    pub organization_id: Uuid,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: Option<f64>,
    pub horizontal_accuracy: Option<f64>,
    pub vertical_accuracy: Option<f64>,
}

pub async fn create_site(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<CreateSiteRequest>,
) -> Result<(StatusCode, Json<SiteResponse>), ApiError> {
    let manager = state.manager();
    let caller = manager.resolve_caller(identity.user_id).await?;
    let organization = manager
        .find_accessible_organization(&caller, body.organization_id)
        .await?;
    let site = manager
        .create_site(
            &caller,
            &organization,
            CreateSiteInput {
                name: body.name,
                latitude: body.latitude,
                longitude: body.longitude,
                altitude: body.altitude,
                horizontal_accuracy: body.horizontal_accuracy,
                vertical_accuracy: body.vertical_accuracy,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(site.into())))
}

// ── PUT /sites/{id} ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSiteRequest {
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub altitude: Option<f64>,
    pub horizontal_accuracy: Option<f64>,
    pub vertical_accuracy: Option<f64>,
}

pub async fn update_site(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateSiteRequest>,
) -> Result<Json<SiteResponse>, ApiError> {
    let manager = state.manager();
    let caller = manager.resolve_caller(identity.user_id).await?;
    let site = manager.find_accessible_site(&caller, id).await?;
    let site = manager
        .update_site(
            site.id,
            UpdateSiteInput {
                name: body.name,
                latitude: body.latitude,
                longitude: body.longitude,
                altitude: body.altitude,
                horizontal_accuracy: body.horizontal_accuracy,
                vertical_accuracy: body.vertical_accuracy,
            },
        )
        .await?;
    Ok(Json(site.into()))
}

// ── DELETE /sites/{id} ───────────────────────────────────────────────────────

pub async fn delete_site(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let manager = state.manager();
    let caller = manager.resolve_caller(identity.user_id).await?;
    let site = manager.find_accessible_site(&caller, id).await?;
    manager.delete_site(site.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
