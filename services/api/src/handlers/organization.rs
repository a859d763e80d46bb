use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ecodatum_auth_types::IdentityHeaders;
use ecodatum_domain::role::RoleName;

use crate::domain::types::{Organization, UserOrganizationRole};
use crate::error::ApiError;
use crate::handlers::site::SiteResponse;
use crate::state::AppState;
use crate::usecase::organization::{CreateOrganizationInput, UpdateOrganizationInput};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub code: String,
}

impl From<Organization> for OrganizationResponse {
    fn from(organization: Organization) -> Self {
        Self {
            id: organization.id,
            name: organization.name,
            description: organization.description,
            code: organization.code,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub organization_id: Uuid,
    pub role_id: Uuid,
}

impl From<UserOrganizationRole> for MemberResponse {
    fn from(membership: UserOrganizationRole) -> Self {
        Self {
            id: membership.id,
            user_id: membership.user_id,
            organization_id: membership.organization_id,
            role_id: membership.role_id,
        }
    }
}

// ── GET /organizations ───────────────────────────────────────────────────────

pub async fn get_organizations(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<Vec<OrganizationResponse>>, ApiError> {
    let manager = state.manager();
    let caller = manager.resolve_caller(identity.user_id).await?;
    let organizations = manager.list_visible_organizations(&caller).await?;
    Ok(Json(
        organizations
            .into_iter()
            .map(OrganizationResponse::from)
            .collect(),
    ))
}

// ── GET /organizations/{id} ──────────────────────────────────────────────────

pub async fn get_organization(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<OrganizationResponse>, ApiError> {
    let manager = state.manager();
    let caller = manager.resolve_caller(identity.user_id).await?;
    let organization = manager.find_accessible_organization(&caller, id).await?;
    Ok(Json(organization.into()))
}

// ── GET /organizations/{id}/sites ────────────────────────────────────────────

pub async fn get_organization_sites(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<SiteResponse>>, ApiError> {
    let manager = state.manager();
    let caller = manager.resolve_caller(identity.user_id).await?;
    let organization = manager.find_accessible_organization(&caller, id).await?;
    let sites = manager.list_sites_for_organization(&organization).await?;
    Ok(Json(sites.into_iter().map(SiteResponse::from).collect()))
}

// ── GET /organizations/{id}/members ──────────────────────────────────────────

pub async fn get_organization_members(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<MemberResponse>>, ApiError> {
    let manager = state.manager();
    let caller = manager.resolve_caller(identity.user_id).await?;
    let organization = manager.find_accessible_organization(&caller, id).await?;
    let members = manager.list_members(&organization).await?;
    Ok(Json(members.into_iter().map(MemberResponse::from).collect()))
}

// ── POST /organizations ──────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrganizationRequest {
    pub name: String,
    pub description: Option<String>,
    pub code: String,
}

pub async fn create_organization(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<CreateOrganizationRequest>,
) -> Result<(StatusCode, Json<OrganizationResponse>), ApiError> {
    let manager = state.manager();
    let caller = manager.resolve_caller(identity.user_id).await?;
    let organization = manager
        .create_organization(
            &caller,
            CreateOrganizationInput {
                name: body.name,
                description: body.description,
                code: body.code,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(organization.into())))
}

// ── POST /organizations/{id}/members ─────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMemberRequest {
    pub user_id: Uuid,
    pub role: RoleName,
}

pub async fn add_organization_member(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<AddMemberRequest>,
) -> Result<(StatusCode, Json<MemberResponse>), ApiError> {
    let manager = state.manager();
    let caller = manager.resolve_caller(identity.user_id).await?;
    let organization = manager.find_administered_organization(&caller, id).await?;
    let member = manager.find_user(body.user_id).await?;
    let membership = manager
        .add_user_to_organization_by_name(&member, &organization, body.role)
        .await?;
    Ok((StatusCode::CREATED, Json(membership.into())))
}

// ── PUT /organizations/{id} ──────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrganizationRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub code: Option<String>,
}

pub async fn update_organization(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateOrganizationRequest>,
) -> Result<Json<OrganizationResponse>, ApiError> {
    let manager = state.manager();
    let caller = manager.resolve_caller(identity.user_id).await?;
    let organization = manager.find_administered_organization(&caller, id).await?;
    let organization = manager
        .update_organization(
            organization.id,
            UpdateOrganizationInput {
                name: body.name,
                description: body.description,
                code: body.code,
            },
        )
        .await?;
    Ok(Json(organization.into()))
}

// ── DELETE /organizations/{id} ───────────────────────────────────────────────

pub async fn delete_organization(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let manager = state.manager();
    let caller = manager.resolve_caller(identity.user_id).await?;
    let organization = manager.find_administered_organization(&caller, id).await?;
    manager.delete_organization(organization.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
