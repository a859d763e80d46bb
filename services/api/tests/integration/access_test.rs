use uuid::Uuid;

use ecodatum_api::domain::types::{Measurement, Note, User};
use ecodatum_api::error::ApiError;
use ecodatum_domain::role::RoleName;
use ecodatum_domain::user::ROOT_USER_ID;

use crate::helpers::{ROOT_EMAIL, ROOT_NAME, create_chain, create_root, create_user, setup};

// ── does_user_belong_to_organization ─────────────────────────────────────────

#[tokio::test]
async fn should_report_membership_for_any_role() {
    let (_, manager) = setup();
    let chain = create_chain(&manager).await;
    let member = create_user(&manager, "member").await;
    let outsider = create_user(&manager, "outsider").await;
    manager
        .add_user_to_organization_by_name(&member, &chain.organization, RoleName::Member)
        .await
        .unwrap();

    let access = &manager.access;
    assert!(
        access
            .does_user_belong_to_organization(&chain.owner, &chain.organization)
            .await
            .unwrap()
    );
    assert!(
        access
            .does_user_belong_to_organization(&member, &chain.organization)
            .await
            .unwrap()
    );
    assert!(
        !access
            .does_user_belong_to_organization(&outsider, &chain.organization)
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn should_distinguish_administrator_from_member() {
    let (_, manager) = setup();
    let chain = create_chain(&manager).await;
    let member = create_user(&manager, "member").await;
    manager
        .add_user_to_organization_by_name(&member, &chain.organization, RoleName::Member)
        .await
        .unwrap();

    let access = &manager.access;
    assert!(
        access
            .is_organization_administrator(&chain.owner, &chain.organization)
            .await
            .unwrap()
    );
    assert!(
        !access
            .is_organization_administrator(&member, &chain.organization)
            .await
            .unwrap()
    );
}

// ── is_root_user ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_recognise_root_without_membership() {
    let (_, manager) = setup();
    let chain = create_chain(&manager).await;
    let root = create_root(&manager).await;

    assert!(manager.access.is_root_user(&root).await.unwrap());
    assert!(
        !manager
            .access
            .does_user_belong_to_organization(&root, &chain.organization)
            .await
            .unwrap()
    );
    assert!(
        manager
            .access
            .can_access_survey(&root, &chain.survey)
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn should_return_false_for_other_users() {
    let (_, manager) = setup();
    let user = create_user(&manager, "alice").await;
    assert!(!manager.access.is_root_user(&user).await.unwrap());
}

#[tokio::test]
async fn should_fail_when_stored_root_diverges_from_configuration() {
    let (store, manager) = setup();
    store.lock().users.push(User {
        id: ROOT_USER_ID,
        name: ROOT_NAME.to_owned(),
        email: "someone-else@ecodatum.org".to_owned(),
        password: "hashed".to_owned(),
    });
    let claimed = User {
        id: ROOT_USER_ID,
        name: ROOT_NAME.to_owned(),
        email: ROOT_EMAIL.to_owned(),
        password: String::new(),
    };

    let result = manager.access.is_root_user(&claimed).await;
    assert!(
        matches!(result, Err(ApiError::RootUserMismatch)),
        "expected RootUserMismatch, got {result:?}"
    );
}

#[tokio::test]
async fn should_fail_when_root_row_is_missing() {
    let (_, manager) = setup();
    let claimed = User {
        id: ROOT_USER_ID,
        name: ROOT_NAME.to_owned(),
        email: ROOT_EMAIL.to_owned(),
        password: String::new(),
    };

    let result = manager.access.is_root_user(&claimed).await;
    assert!(matches!(result, Err(ApiError::RootUserMismatch)));
}

// ── Ownership chain ──────────────────────────────────────────────────────────

#[tokio::test]
async fn should_resolve_survey_to_its_organization() {
    let (_, manager) = setup();
    let chain = create_chain(&manager).await;

    let organization = manager
        .find_organization_for_survey(&chain.survey)
        .await
        .unwrap();
    assert_eq!(organization, chain.organization);

    let site = manager.find_site_for_survey(&chain.survey).await.unwrap();
    assert_eq!(site.id, chain.site.id);
}

#[tokio::test]
async fn should_fail_integrity_check_when_survey_is_missing() {
    let (_, manager) = setup();
    let orphan = Measurement {
        id: Uuid::now_v7(),
        value: 7.0,
        abiotic_factor_id: Uuid::now_v7(),
        measurement_unit_id: Uuid::now_v7(),
        survey_id: Uuid::now_v7(),
    };

    let result = manager.access.organization_of_measurement(&orphan).await;
    assert!(
        matches!(result, Err(ApiError::PreconditionFailed(_))),
        "expected PreconditionFailed, got {result:?}"
    );
}

#[tokio::test]
async fn should_fail_integrity_check_when_site_is_missing() {
    let (store, manager) = setup();
    let chain = create_chain(&manager).await;
    store.lock().sites.clear();
    let note = Note {
        id: Uuid::now_v7(),
        text: "orphaned".to_owned(),
        survey_id: chain.survey.id,
    };

    let result = manager.access.organization_of_note(&note).await;
    assert!(matches!(result, Err(ApiError::PreconditionFailed(_))));
}

#[tokio::test]
async fn should_deny_outsider_access_to_survey() {
    let (_, manager) = setup();
    let chain = create_chain(&manager).await;
    let outsider = create_user(&manager, "outsider").await;

    assert!(
        !manager
            .access
            .can_access_survey(&outsider, &chain.survey)
            .await
            .unwrap()
    );
    assert!(
        manager
            .access
            .can_access_survey(&chain.owner, &chain.survey)
            .await
            .unwrap()
    );
}
