use ecodatum_api::error::ApiError;
use ecodatum_api::usecase::organization::{CreateOrganizationInput, UpdateOrganizationInput};
use ecodatum_domain::role::RoleName;

use crate::helpers::{
    MemoryStore, create_organization, create_user, manager, setup, site_input,
};

// ── create_organization ──────────────────────────────────────────────────────

#[tokio::test]
async fn should_make_creator_an_administrator() {
    let (store, manager) = setup();
    let owner = create_user(&manager, "owner").await;

    let organization = create_organization(&manager, &owner).await;

    let administrator = manager.get_role(RoleName::Administrator).await.unwrap();
    let members = manager.list_members(&organization).await.unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].user_id, owner.id);
    assert_eq!(members[0].role_id, administrator.id);
    assert_eq!(store.lock().organizations.len(), 1);
}

#[tokio::test]
async fn should_reject_wrong_code_length_before_writing() {
    let (store, manager) = setup();
    let owner = create_user(&manager, "owner").await;

    for code in ["ABC", "ABCDEFG", "ÄBCDEF"] {
        let result = manager
            .create_organization(
                &owner,
                CreateOrganizationInput {
                    name: "Field Lab".to_owned(),
                    description: None,
                    code: code.to_owned(),
                },
            )
            .await;
        assert!(
            matches!(result, Err(ApiError::InvalidOrganizationCode)),
            "code {code:?}: expected InvalidOrganizationCode, got {result:?}"
        );
    }
    let tables = store.lock();
    assert!(tables.organizations.is_empty());
    assert!(tables.memberships.is_empty());
}

#[tokio::test]
async fn should_fail_when_roles_are_not_seeded() {
    let store = MemoryStore::default();
    let manager = manager(&store);
    let owner = create_user(&manager, "owner").await;

    let result = manager
        .create_organization(
            &owner,
            CreateOrganizationInput {
                name: "Field Lab".to_owned(),
                description: None,
                code: "FLD001".to_owned(),
            },
        )
        .await;
    assert!(
        matches!(result, Err(ApiError::PreconditionFailed(_))),
        "expected PreconditionFailed, got {result:?}"
    );
    assert!(store.lock().organizations.is_empty());
}

// ── add_user_to_organization ─────────────────────────────────────────────────

#[tokio::test]
async fn should_add_member_once() {
    let (_, manager) = setup();
    let owner = create_user(&manager, "owner").await;
    let member = create_user(&manager, "member").await;
    let organization = create_organization(&manager, &owner).await;
    let role = manager.get_role(RoleName::Member).await.unwrap();

    let first = manager
        .add_user_to_organization(&member, &organization, &role)
        .await
        .unwrap();
    let second = manager
        .add_user_to_organization(&member, &organization, &role)
        .await
        .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(manager.list_members(&organization).await.unwrap().len(), 2);
    let mine = manager.list_organizations_for_user(&member).await.unwrap();
    assert_eq!(mine, vec![organization]);
}

// ── update_organization ──────────────────────────────────────────────────────

#[tokio::test]
async fn should_update_only_provided_fields() {
    let (_, manager) = setup();
    let owner = create_user(&manager, "owner").await;
    let organization = create_organization(&manager, &owner).await;

    let updated = manager
        .update_organization(
            organization.id,
            UpdateOrganizationInput {
                description: Some("estuary monitoring".to_owned()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, organization.name);
    assert_eq!(updated.code, organization.code);
    assert_eq!(updated.description.as_deref(), Some("estuary monitoring"));
    let stored = manager.find_organization(organization.id).await.unwrap();
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn should_reject_invalid_code_on_update() {
    let (_, manager) = setup();
    let owner = create_user(&manager, "owner").await;
    let organization = create_organization(&manager, &owner).await;

    let result = manager
        .update_organization(
            organization.id,
            UpdateOrganizationInput {
                code: Some("TOO-LONG".to_owned()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(ApiError::InvalidOrganizationCode)));
    let stored = manager.find_organization(organization.id).await.unwrap();
    assert_eq!(stored.code, "FLD001");
}

// ── delete_organization ──────────────────────────────────────────────────────

#[tokio::test]
async fn should_refuse_delete_while_sites_exist() {
    let (store, manager) = setup();
    let owner = create_user(&manager, "owner").await;
    let organization = create_organization(&manager, &owner).await;
    let site = manager
        .create_site(&owner, &organization, site_input("Creek"))
        .await
        .unwrap();

    let result = manager.delete_organization(organization.id).await;
    assert!(matches!(result, Err(ApiError::HasDependents(_))));

    manager.delete_site(site.id).await.unwrap();
    manager.delete_organization(organization.id).await.unwrap();

    let result = manager.find_organization(organization.id).await;
    assert!(matches!(result, Err(ApiError::OrganizationNotFound)));
    assert!(store.lock().memberships.is_empty());
}
