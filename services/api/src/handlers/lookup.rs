use axum::{Json, extract::State};
use serde::Serialize;
use uuid::Uuid;

use ecodatum_domain::abiotic_factor::AbioticFactorName;
use ecodatum_domain::image_type::ImageTypeName;
use ecodatum_domain::measurement_unit::MeasurementUnitName;
use ecodatum_domain::role::RoleName;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct LookupResponse<N> {
    pub id: Uuid,
    pub name: N,
}

// ── GET /roles ───────────────────────────────────────────────────────────────

pub async fn get_roles(
    State(state): State<AppState>,
) -> Result<Json<Vec<LookupResponse<RoleName>>>, ApiError> {
    let roles = state.manager().list_roles().await?;
    Ok(Json(
        roles
            .into_iter()
            .map(|r| LookupResponse {
                id: r.id,
                name: r.name,
            })
            .collect(),
    ))
}

// ── GET /abiotic-factors ─────────────────────────────────────────────────────

pub async fn get_abiotic_factors(
    State(state): State<AppState>,
) -> Result<Json<Vec<LookupResponse<AbioticFactorName>>>, ApiError> {
    let factors = state.manager().list_abiotic_factors().await?;
    Ok(Json(
        factors
            .into_iter()
            .map(|f| LookupResponse {
                id: f.id,
                name: f.name,
            })
            .collect(),
    ))
}

// ── GET /measurement-units ───────────────────────────────────────────────────

pub async fn get_measurement_units(
    State(state): State<AppState>,
) -> Result<Json<Vec<LookupResponse<MeasurementUnitName>>>, ApiError> {
    let units = state.manager().list_measurement_units().await?;
    Ok(Json(
        units
            .into_iter()
            .map(|u| LookupResponse {
                id: u.id,
                name: u.name,
            })
            .collect(),
    ))
}

// ── GET /image-types ─────────────────────────────────────────────────────────

pub async fn get_image_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<LookupResponse<ImageTypeName>>>, ApiError> {
    let types = state.manager().list_image_types().await?;
    Ok(Json(
        types
            .into_iter()
            .map(|t| LookupResponse {
                id: t.id,
                name: t.name,
            })
            .collect(),
    ))
}
