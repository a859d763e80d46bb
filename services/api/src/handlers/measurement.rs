use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ecodatum_auth_types::IdentityHeaders;
use ecodatum_domain::abiotic_factor::AbioticFactorName;
use ecodatum_domain::measurement_unit::MeasurementUnitName;

use crate::domain::types::Measurement;
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::measurement::UpdateMeasurementInput;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementResponse {
    pub id: Uuid,
    pub value: f64,
    pub abiotic_factor_id: Uuid,
    pub measurement_unit_id: Uuid,
    pub survey_id: Uuid,
}

impl From<Measurement> for MeasurementResponse {
    fn from(measurement: Measurement) -> Self {
        Self {
            id: measurement.id,
            value: measurement.value,
            abiotic_factor_id: measurement.abiotic_factor_id,
            measurement_unit_id: measurement.measurement_unit_id,
            survey_id: measurement.survey_id,
        }
    }
}

// ── GET /measurements/{id} ───────────────────────────────────────────────────

pub async fn get_measurement(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MeasurementResponse>, ApiError> {
    let manager = state.manager();
    let caller = manager.resolve_caller(identity.user_id).await?;
    let measurement = manager.find_accessible_measurement(&caller, id).await?;
    Ok(Json(measurement.into()))
}

// ── POST /measurements ───────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMeasurementRequest {
    pub survey_id: Uuid,
    pub value: f64,
    pub abiotic_factor: AbioticFactorName,
    pub measurement_unit: MeasurementUnitName,
}

pub async fn create_measurement(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<CreateMeasurementRequest>,
) -> Result<(StatusCode, Json<MeasurementResponse>), ApiError> {
    let manager = state.manager();
    let caller = manager.resolve_caller(identity.user_id).await?;
    let survey = manager.find_accessible_survey(&caller, body.survey_id).await?;
    let measurement = manager
        .create_measurement_by_name(
            &caller,
            &survey,
            body.value,
            body.abiotic_factor,
            body.measurement_unit,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(measurement.into())))
}

// ── PUT /measurements/{id} ───────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMeasurementRequest {
    pub value: Option<f64>,
    pub abiotic_factor: Option<AbioticFactorName>,
    pub measurement_unit: Option<MeasurementUnitName>,
}

pub async fn update_measurement(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateMeasurementRequest>,
) -> Result<Json<MeasurementResponse>, ApiError> {
    let manager = state.manager();
    let caller = manager.resolve_caller(identity.user_id).await?;
    let measurement = manager.find_accessible_measurement(&caller, id).await?;
    let abiotic_factor_id = match body.abiotic_factor {
        Some(name) => Some(manager.get_abiotic_factor(name).await?.id),
        None => None,
    };
    let measurement_unit_id = match body.measurement_unit {
        Some(name) => Some(manager.get_measurement_unit(name).await?.id),
        None => None,
    };
    let measurement = manager
        .update_measurement(
            measurement.id,
            UpdateMeasurementInput {
                value: body.value,
                abiotic_factor_id,
                measurement_unit_id,
            },
        )
        .await?;
    Ok(Json(measurement.into()))
}

// ── DELETE /measurements/{id} ────────────────────────────────────────────────

pub async fn delete_measurement(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let manager = state.manager();
    let caller = manager.resolve_caller(identity.user_id).await?;
    let measurement = manager.find_accessible_measurement(&caller, id).await?;
    manager.delete_measurement(measurement.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
