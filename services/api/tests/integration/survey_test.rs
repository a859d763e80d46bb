use chrono::{TimeZone, Utc};

use ecodatum_api::error::ApiError;
use ecodatum_api::usecase::organization::CreateOrganizationInput;
use ecodatum_domain::abiotic_factor::AbioticFactorName;
use ecodatum_domain::measurement_unit::MeasurementUnitName;
use ecodatum_domain::role::RoleName;

use crate::helpers::{create_chain, create_root, create_user, setup, site_input};

// ── create_survey ────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_let_any_member_start_survey() {
    let (_, manager) = setup();
    let chain = create_chain(&manager).await;
    let member = create_user(&manager, "member").await;
    manager
        .add_user_to_organization_by_name(&member, &chain.organization, RoleName::Member)
        .await
        .unwrap();
    let date = Utc.with_ymd_and_hms(2018, 4, 22, 9, 30, 0).unwrap();

    let survey = manager
        .create_survey(&member, &chain.site, Some(date))
        .await
        .unwrap();

    assert_eq!(survey.date, date);
    assert_eq!(survey.site_id, chain.site.id);
    assert_eq!(survey.user_id, member.id);
    assert_eq!(manager.find_survey_owner(&survey).await.unwrap(), member);
}

#[tokio::test]
async fn should_refuse_outsider() {
    let (store, manager) = setup();
    let chain = create_chain(&manager).await;
    let outsider = create_user(&manager, "outsider").await;

    let result = manager.create_survey(&outsider, &chain.site, None).await;
    assert!(
        matches!(result, Err(ApiError::PreconditionFailed(_))),
        "expected PreconditionFailed, got {result:?}"
    );
    assert_eq!(store.lock().surveys.len(), 1);
}

#[tokio::test]
async fn should_let_root_start_survey_without_membership() {
    let (_, manager) = setup();
    let chain = create_chain(&manager).await;
    let root = create_root(&manager).await;

    let survey = manager.create_survey(&root, &chain.site, None).await.unwrap();
    assert_eq!(survey.user_id, root.id);
}

// ── Reads ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_surveys_reachable_through_memberships() {
    let (_, manager) = setup();
    let chain = create_chain(&manager).await;
    let other_owner = create_user(&manager, "other").await;
    let other_org = manager
        .create_organization(
            &other_owner,
            CreateOrganizationInput {
                name: "Other Lab".to_owned(),
                description: None,
                code: "OTH001".to_owned(),
            },
        )
        .await
        .unwrap();
    let other_site = manager
        .create_site(&other_owner, &other_org, site_input("Dune"))
        .await
        .unwrap();
    let other_survey = manager
        .create_survey(&other_owner, &other_site, None)
        .await
        .unwrap();

    let mine = manager.find_surveys_by_user(&chain.owner).await.unwrap();
    assert_eq!(mine, vec![chain.survey.clone()]);

    let theirs = manager.find_surveys_by_user(&other_owner).await.unwrap();
    assert_eq!(theirs, vec![other_survey]);

    assert_eq!(manager.list_surveys().await.unwrap().len(), 2);
    assert_eq!(
        manager.list_surveys_for_site(&chain.site).await.unwrap(),
        vec![chain.survey]
    );
}

// ── update_survey / delete_survey ────────────────────────────────────────────

#[tokio::test]
async fn should_keep_date_when_no_new_date_given() {
    let (_, manager) = setup();
    let chain = create_chain(&manager).await;

    let unchanged = manager.update_survey(chain.survey.id, None).await.unwrap();
    assert_eq!(unchanged.date, chain.survey.date);

    let date = Utc.with_ymd_and_hms(2019, 1, 2, 3, 4, 5).unwrap();
    let moved = manager
        .update_survey(chain.survey.id, Some(date))
        .await
        .unwrap();
    assert_eq!(moved.date, date);
    assert_eq!(moved.site_id, chain.survey.site_id);
}

#[tokio::test]
async fn should_refuse_delete_while_records_exist() {
    let (_, manager) = setup();
    let chain = create_chain(&manager).await;
    let measurement = manager
        .create_measurement_by_name(
            &chain.owner,
            &chain.survey,
            7.2,
            AbioticFactorName::Water,
            MeasurementUnitName::AcidityPh,
        )
        .await
        .unwrap();

    let result = manager.delete_survey(chain.survey.id).await;
    assert!(matches!(result, Err(ApiError::HasDependents(_))));

    manager.delete_measurement(measurement.id).await.unwrap();
    manager.delete_survey(chain.survey.id).await.unwrap();
    let result = manager.find_survey(chain.survey.id).await;
    assert!(matches!(result, Err(ApiError::SurveyNotFound)));
}
