use ecodatum_api::domain::types::User;
use ecodatum_api::error::ApiError;
use ecodatum_api::usecase::user::{CreateUserInput, UpdateUserInput};
use ecodatum_domain::role::RoleName;
use ecodatum_domain::user::ROOT_USER_ID;

use crate::helpers::{
    MemoryStore, ROOT_EMAIL, ROOT_NAME, create_chain, create_root, create_user, manager, setup,
};

fn input(email: &str) -> CreateUserInput {
    CreateUserInput {
        name: "Alice".to_owned(),
        email: email.to_owned(),
        password: "secret".to_owned(),
    }
}

// ── create_user ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_store_hashed_password() {
    let (store, manager) = setup();

    let user = manager.create_user(input("alice@example.org")).await.unwrap();

    assert_ne!(user.password, "secret");
    let stored = store.lock().users[0].clone();
    assert_eq!(stored.password, "hashed:terces");
}

#[tokio::test]
async fn should_reject_duplicate_email() {
    let (store, manager) = setup();
    manager.create_user(input("alice@example.org")).await.unwrap();

    let result = manager.create_user(input("alice@example.org")).await;
    assert!(matches!(result, Err(ApiError::EmailAlreadyExists)));
    assert_eq!(store.lock().users.len(), 1);
}

#[tokio::test]
async fn should_reject_blank_email() {
    let (_, manager) = setup();
    let result = manager.create_user(input("  ")).await;
    assert!(matches!(result, Err(ApiError::InvalidInput(_))));
}

#[tokio::test]
async fn should_find_user_by_email() {
    let (_, manager) = setup();
    let user = manager.create_user(input("alice@example.org")).await.unwrap();

    let found = manager.find_user_by_email("alice@example.org").await.unwrap();
    assert_eq!(found, user);
    let missing = manager.find_user_by_email("bob@example.org").await;
    assert!(matches!(missing, Err(ApiError::UserNotFound)));
}

// ── update_user ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_leave_unset_fields_untouched() {
    let (_, manager) = setup();
    let user = manager.create_user(input("alice@example.org")).await.unwrap();

    let updated = manager
        .update_user(
            user.id,
            UpdateUserInput {
                password: Some("new-secret".to_owned()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, user.name);
    assert_eq!(updated.email, user.email);
    assert_eq!(updated.password, "hashed:terces-wen");
}

#[tokio::test]
async fn should_keep_email_unique_on_update() {
    let (_, manager) = setup();
    manager.create_user(input("alice@example.org")).await.unwrap();
    let bob = manager.create_user(input("bob@example.org")).await.unwrap();

    let result = manager
        .update_user(
            bob.id,
            UpdateUserInput {
                email: Some("alice@example.org".to_owned()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(ApiError::EmailAlreadyExists)));
}

// ── delete_user ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_delete_user_and_memberships() {
    let (store, manager) = setup();
    let chain = create_chain(&manager).await;
    let member = create_user(&manager, "member").await;
    manager
        .add_user_to_organization_by_name(&member, &chain.organization, RoleName::Member)
        .await
        .unwrap();

    manager.delete_user(member.id).await.unwrap();

    let result = manager.find_user(member.id).await;
    assert!(matches!(result, Err(ApiError::UserNotFound)));
    assert!(store.lock().memberships.iter().all(|m| m.user_id != member.id));
}

#[tokio::test]
async fn should_refuse_delete_of_user_with_surveys() {
    let (_, manager) = setup();
    let chain = create_chain(&manager).await;

    let result = manager.delete_user(chain.owner.id).await;
    assert!(matches!(result, Err(ApiError::HasDependents(_))));
}

// ── ensure_root_user ─────────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_root_once() {
    let (store, manager) = setup();

    let first = create_root(&manager).await;
    let second = manager.ensure_root_user("ignored").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.name, ROOT_NAME);
    assert_eq!(first.email, ROOT_EMAIL);
    assert_eq!(store.lock().users.len(), 1);
}

#[tokio::test]
async fn should_refuse_to_adopt_diverging_root_row() {
    let store = MemoryStore::seeded();
    store.lock().users.push(User {
        id: ROOT_USER_ID,
        name: "impostor".to_owned(),
        email: ROOT_EMAIL.to_owned(),
        password: "x".to_owned(),
    });
    let manager = manager(&store);

    let result = manager.ensure_root_user("secret").await;
    assert!(matches!(result, Err(ApiError::RootUserMismatch)));
}

#[tokio::test]
async fn should_protect_root_identity() {
    let (_, manager) = setup();
    let root = create_root(&manager).await;

    let result = manager
        .update_user(
            root.id,
            UpdateUserInput {
                name: Some("admin".to_owned()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(ApiError::PreconditionFailed(_))));

    let result = manager.delete_user(root.id).await;
    assert!(matches!(result, Err(ApiError::PreconditionFailed(_))));
}
