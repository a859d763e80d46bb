use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use ecodatum_core::health::{healthz, readiness};
use ecodatum_core::middleware::{request_id_layer, trace_layer};

use crate::handlers::{
    image::{create_image, delete_image, get_image, update_image},
    lookup::{get_abiotic_factors, get_image_types, get_measurement_units, get_roles},
    measurement::{create_measurement, delete_measurement, get_measurement, update_measurement},
    note::{create_note, delete_note, get_note, update_note},
    organization::{
        add_organization_member, create_organization, delete_organization, get_organization,
        get_organization_members, get_organization_sites, get_organizations,
        update_organization,
    },
    site::{create_site, delete_site, get_site, get_site_surveys, get_sites, update_site},
    survey::{
        create_survey, delete_survey, get_survey, get_survey_images, get_survey_measurements,
        get_survey_notes, get_surveys, update_survey,
    },
    user::{create_user, delete_user, get_me, get_user, get_users, update_user},
};
use crate::state::AppState;

async fn readyz(State(state): State<AppState>) -> StatusCode {
    readiness(state.db.ping().await)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Lookups
        .route("/roles", get(get_roles))
        .route("/abiotic-factors", get(get_abiotic_factors))
        .route("/measurement-units", get(get_measurement_units))
        .route("/image-types", get(get_image_types))
        // Users
        .route("/users", post(create_user).get(get_users))
        .route("/users/@me", get(get_me))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        // Organizations
        .route(
            "/organizations",
            get(get_organizations).post(create_organization),
        )
        .route(
            "/organizations/{id}",
            get(get_organization)
                .put(update_organization)
                .delete(delete_organization),
        )
        .route("/organizations/{id}/sites", get(get_organization_sites))
        .route(
            "/organizations/{id}/members",
            get(get_organization_members).post(add_organization_member),
        )
        // Sites
        .route("/sites", get(get_sites).post(create_site))
        .route(
            "/sites/{id}",
            get(get_site).put(update_site).delete(delete_site),
        )
        .route("/sites/{id}/surveys", get(get_site_surveys))
        // Surveys
        .route("/surveys", get(get_surveys).post(create_survey))
        .route(
            "/surveys/{id}",
            get(get_survey).put(update_survey).delete(delete_survey),
        )
        .route("/surveys/{id}/measurements", get(get_survey_measurements))
        .route("/surveys/{id}/notes", get(get_survey_notes))
        .route("/surveys/{id}/images", get(get_survey_images))
        // Measurements
        .route("/measurements", post(create_measurement))
        .route(
            "/measurements/{id}",
            get(get_measurement)
                .put(update_measurement)
                .delete(delete_measurement),
        )
        // Notes
        .route("/notes", post(create_note))
        .route(
            "/notes/{id}",
            get(get_note).put(update_note).delete(delete_note),
        )
        // Images
        .route("/images", post(create_image))
        .route(
            "/images/{id}",
            get(get_image).put(update_image).delete(delete_image),
        )
        .layer(trace_layer())
        .layer(request_id_layer())
        .with_state(state)
}
