use uuid::Uuid;

use ecodatum_api::domain::types::Organization;
use ecodatum_api::error::ApiError;
use ecodatum_api::usecase::site::UpdateSiteInput;
use ecodatum_domain::role::RoleName;

use crate::helpers::{create_organization, create_root, create_user, setup, site_input};

// ── create_site ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_let_administrator_create_site() {
    let (_, manager) = setup();
    let owner = create_user(&manager, "owner").await;
    let organization = create_organization(&manager, &owner).await;

    let site = manager
        .create_site(&owner, &organization, site_input("Creek"))
        .await
        .unwrap();

    assert_eq!(site.organization_id, organization.id);
    assert_eq!(site.user_id, owner.id);
    assert_eq!(manager.find_site(site.id).await.unwrap(), site);
}

#[tokio::test]
async fn should_refuse_plain_member() {
    let (store, manager) = setup();
    let owner = create_user(&manager, "owner").await;
    let member = create_user(&manager, "member").await;
    let organization = create_organization(&manager, &owner).await;
    manager
        .add_user_to_organization_by_name(&member, &organization, RoleName::Member)
        .await
        .unwrap();

    let result = manager
        .create_site(&member, &organization, site_input("Creek"))
        .await;
    assert!(
        matches!(result, Err(ApiError::PreconditionFailed(_))),
        "expected PreconditionFailed, got {result:?}"
    );
    assert!(store.lock().sites.is_empty());
}

#[tokio::test]
async fn should_refuse_outsider() {
    let (_, manager) = setup();
    let owner = create_user(&manager, "owner").await;
    let outsider = create_user(&manager, "outsider").await;
    let organization = create_organization(&manager, &owner).await;

    let result = manager
        .create_site(&outsider, &organization, site_input("Creek"))
        .await;
    assert!(matches!(result, Err(ApiError::PreconditionFailed(_))));
}

#[tokio::test]
async fn should_let_root_create_site_anywhere() {
    let (_, manager) = setup();
    let owner = create_user(&manager, "owner").await;
    let organization = create_organization(&manager, &owner).await;
    let root = create_root(&manager).await;

    let site = manager
        .create_site(&root, &organization, site_input("Ridge"))
        .await
        .unwrap();
    assert_eq!(site.user_id, root.id);
}

#[tokio::test]
async fn should_fail_for_unknown_organization() {
    let (_, manager) = setup();
    let owner = create_user(&manager, "owner").await;
    let ghost = Organization {
        id: Uuid::now_v7(),
        name: "Ghost".to_owned(),
        description: None,
        code: "GHOST1".to_owned(),
    };

    let result = manager.create_site(&owner, &ghost, site_input("Creek")).await;
    assert!(matches!(result, Err(ApiError::OrganizationNotFound)));
}

#[tokio::test]
async fn should_reject_out_of_range_latitude() {
    let (_, manager) = setup();
    let owner = create_user(&manager, "owner").await;
    let organization = create_organization(&manager, &owner).await;
    let mut input = site_input("Creek");
    input.latitude = 123.0;

    let result = manager.create_site(&owner, &organization, input).await;
    assert!(matches!(result, Err(ApiError::InvalidInput(_))));
}

// ── update_site / delete_site ────────────────────────────────────────────────

#[tokio::test]
async fn should_update_only_provided_fields() {
    let (_, manager) = setup();
    let owner = create_user(&manager, "owner").await;
    let organization = create_organization(&manager, &owner).await;
    let site = manager
        .create_site(&owner, &organization, site_input("Creek"))
        .await
        .unwrap();

    let updated = manager
        .update_site(
            site.id,
            UpdateSiteInput {
                vertical_accuracy: Some(2.5),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Creek");
    assert_eq!(updated.latitude, site.latitude);
    assert_eq!(updated.altitude, Some(16.0));
    assert_eq!(updated.vertical_accuracy, Some(2.5));
}

#[tokio::test]
async fn should_fail_update_of_unknown_site() {
    let (_, manager) = setup();
    let result = manager
        .update_site(Uuid::now_v7(), UpdateSiteInput::default())
        .await;
    assert!(matches!(result, Err(ApiError::SiteNotFound)));
}

#[tokio::test]
async fn should_refuse_delete_while_surveys_exist() {
    let (_, manager) = setup();
    let owner = create_user(&manager, "owner").await;
    let organization = create_organization(&manager, &owner).await;
    let site = manager
        .create_site(&owner, &organization, site_input("Creek"))
        .await
        .unwrap();
    let survey = manager.create_survey(&owner, &site, None).await.unwrap();

    let result = manager.delete_site(site.id).await;
    assert!(
        matches!(result, Err(ApiError::HasDependents(_))),
        "expected HasDependents, got {result:?}"
    );

    manager.delete_survey(survey.id).await.unwrap();
    manager.delete_site(site.id).await.unwrap();
    let result = manager.find_site(site.id).await;
    assert!(matches!(result, Err(ApiError::SiteNotFound)));
}
