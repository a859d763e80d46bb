use uuid::Uuid;

use ecodatum_api::domain::types::{AbioticFactor, Survey};
use ecodatum_api::error::ApiError;
use ecodatum_api::usecase::image::{CreateImageInput, UpdateImageInput};
use ecodatum_api::usecase::measurement::UpdateMeasurementInput;
use ecodatum_domain::abiotic_factor::AbioticFactorName;
use ecodatum_domain::image_type::ImageTypeName;
use ecodatum_domain::measurement_unit::MeasurementUnitName;
use ecodatum_domain::role::RoleName;

use crate::helpers::{create_chain, create_root, create_user, setup};

fn image_input() -> CreateImageInput {
    CreateImageInput {
        base64_encoded: "R0lGODlhAQABAAAAACw=".to_owned(),
        description: Some("sampling point".to_owned()),
    }
}

// ── Measurements ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_measurement_by_lookup_name() {
    let (_, manager) = setup();
    let chain = create_chain(&manager).await;

    let measurement = manager
        .create_measurement_by_name(
            &chain.owner,
            &chain.survey,
            18.5,
            AbioticFactorName::Water,
            MeasurementUnitName::TemperatureCelsius,
        )
        .await
        .unwrap();

    let factor = manager
        .get_abiotic_factor(AbioticFactorName::Water)
        .await
        .unwrap();
    assert_eq!(measurement.abiotic_factor_id, factor.id);
    assert_eq!(measurement.survey_id, chain.survey.id);
    assert_eq!(
        manager.find_measurement_owner(&measurement).await.unwrap(),
        chain.owner
    );
    assert_eq!(
        manager
            .list_measurements_for_survey(&chain.survey)
            .await
            .unwrap(),
        vec![measurement]
    );
}

#[tokio::test]
async fn should_fail_for_unpersisted_abiotic_factor() {
    let (_, manager) = setup();
    let chain = create_chain(&manager).await;
    let unit = manager
        .get_measurement_unit(MeasurementUnitName::LightIntensityLux)
        .await
        .unwrap();
    let ghost = AbioticFactor {
        id: Uuid::now_v7(),
        name: AbioticFactorName::Air,
    };

    let result = manager
        .create_measurement(&chain.owner, &chain.survey, 1.0, &ghost, &unit)
        .await;
    assert!(matches!(result, Err(ApiError::LookupNotFound(_))));
}

#[tokio::test]
async fn should_fail_for_unpersisted_survey() {
    let (_, manager) = setup();
    let chain = create_chain(&manager).await;
    let ghost = Survey {
        id: Uuid::now_v7(),
        ..chain.survey.clone()
    };

    let result = manager
        .create_measurement_by_name(
            &chain.owner,
            &ghost,
            1.0,
            AbioticFactorName::Soil,
            MeasurementUnitName::PhosphatePpm,
        )
        .await;
    assert!(matches!(result, Err(ApiError::SurveyNotFound)));
}

#[tokio::test]
async fn should_refuse_records_from_outsider() {
    let (store, manager) = setup();
    let chain = create_chain(&manager).await;
    let outsider = create_user(&manager, "outsider").await;

    let result = manager
        .create_note(&outsider, &chain.survey, "not mine".to_owned())
        .await;
    assert!(
        matches!(result, Err(ApiError::PreconditionFailed(_))),
        "expected PreconditionFailed, got {result:?}"
    );
    assert!(store.lock().notes.is_empty());
}

#[tokio::test]
async fn should_accept_records_from_member_and_root() {
    let (_, manager) = setup();
    let chain = create_chain(&manager).await;
    let member = create_user(&manager, "member").await;
    manager
        .add_user_to_organization_by_name(&member, &chain.organization, RoleName::Member)
        .await
        .unwrap();
    let root = create_root(&manager).await;

    manager
        .create_note(&member, &chain.survey, "turbid after rain".to_owned())
        .await
        .unwrap();
    manager
        .create_note(&root, &chain.survey, "checked".to_owned())
        .await
        .unwrap();

    let notes = manager.list_notes_for_survey(&chain.survey).await.unwrap();
    assert_eq!(notes.len(), 2);
}

#[tokio::test]
async fn should_update_measurement_value_only() {
    let (_, manager) = setup();
    let chain = create_chain(&manager).await;
    let measurement = manager
        .create_measurement_by_name(
            &chain.owner,
            &chain.survey,
            400.0,
            AbioticFactorName::Air,
            MeasurementUnitName::CarbonDioxidePpm,
        )
        .await
        .unwrap();

    let updated = manager
        .update_measurement(
            measurement.id,
            UpdateMeasurementInput {
                value: Some(412.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.value, 412.0);
    assert_eq!(updated.abiotic_factor_id, measurement.abiotic_factor_id);
    assert_eq!(updated.measurement_unit_id, measurement.measurement_unit_id);
}

#[tokio::test]
async fn should_reject_non_finite_value() {
    let (_, manager) = setup();
    let chain = create_chain(&manager).await;

    let result = manager
        .create_measurement_by_name(
            &chain.owner,
            &chain.survey,
            f64::INFINITY,
            AbioticFactorName::Air,
            MeasurementUnitName::RelativeHumidityPercent,
        )
        .await;
    assert!(matches!(result, Err(ApiError::InvalidInput(_))));
}

// ── Notes ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_delete_note_and_then_miss_it() {
    let (_, manager) = setup();
    let chain = create_chain(&manager).await;
    let note = manager
        .create_note(&chain.owner, &chain.survey, "heron spotted".to_owned())
        .await
        .unwrap();

    let edited = manager
        .update_note(note.id, Some("two herons spotted".to_owned()))
        .await
        .unwrap();
    assert_eq!(edited.text, "two herons spotted");

    manager.delete_note(note.id).await.unwrap();
    let result = manager.find_note(note.id).await;
    assert!(matches!(result, Err(ApiError::NoteNotFound)));
    let result = manager.delete_note(note.id).await;
    assert!(matches!(result, Err(ApiError::NoteNotFound)));
}

// ── Images ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_and_partially_update_image() {
    let (_, manager) = setup();
    let chain = create_chain(&manager).await;
    let image = manager
        .create_image_by_name(&chain.owner, &chain.survey, ImageTypeName::Gif, image_input())
        .await
        .unwrap();

    let png = manager.get_image_type(ImageTypeName::Png).await.unwrap();
    let updated = manager
        .update_image(
            image.id,
            UpdateImageInput {
                image_type_id: Some(png.id),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.image_type_id, png.id);
    assert_eq!(updated.base64_encoded, image.base64_encoded);
    assert_eq!(updated.description, image.description);
    assert_eq!(
        manager.list_images_for_survey(&chain.survey).await.unwrap(),
        vec![updated]
    );
}

#[tokio::test]
async fn should_fail_when_image_types_are_not_seeded() {
    let (store, manager) = setup();
    let chain = create_chain(&manager).await;
    store.lock().image_types.clear();

    let result = manager
        .create_image_by_name(&chain.owner, &chain.survey, ImageTypeName::Jpeg, image_input())
        .await;
    assert!(matches!(result, Err(ApiError::PreconditionFailed(_))));
}

#[tokio::test]
async fn should_delete_image_and_then_miss_it() {
    let (_, manager) = setup();
    let chain = create_chain(&manager).await;
    let image = manager
        .create_image_by_name(&chain.owner, &chain.survey, ImageTypeName::Png, image_input())
        .await
        .unwrap();

    manager.delete_image(image.id).await.unwrap();
    let result = manager.find_image(image.id).await;
    assert!(matches!(result, Err(ApiError::ImageNotFound)));
}
