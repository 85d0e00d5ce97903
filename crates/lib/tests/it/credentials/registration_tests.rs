//! Registration: uniqueness, validation, persistence and rollback.

use std::sync::Arc;

use radar::{
    Error,
    backend::Backend,
    constants::{SESSION_KEY, SNAPSHOT_KEY},
    user::{Role, UserError},
};

use crate::helpers::{FlakyBackend, ready_store, reload, store_on};

#[tokio::test]
async fn test_register_adds_third_user_and_logs_in() {
    let (store, _backend) = ready_store().await;

    let user = store
        .register("New Ed", "new@radar.ia", "secret1", Role::Editor)
        .unwrap();
    assert!(!user.id.is_empty());
    assert_eq!(user.name, "New Ed");
    assert_eq!(user.role, Role::Editor);

    let users = store.list_users().unwrap();
    assert_eq!(users.len(), 3);
    assert_eq!(users[2], user);
    assert_eq!(store.current_user().unwrap(), Some(user));
}

#[tokio::test]
async fn test_register_admin_role_is_kept() {
    let (store, _backend) = ready_store().await;
    let user = store
        .register("Nova Diretora", "diretora@radar.ia", "secret1", Role::Admin)
        .unwrap();
    assert_eq!(user.role, Role::Admin);

    let counts = store.role_counts().unwrap();
    assert_eq!((counts.total, counts.admins, counts.editors), (3, 2, 1));
}

#[tokio::test]
async fn test_generated_ids_are_unique() {
    let (store, _backend) = ready_store().await;
    for i in 0..5 {
        store
            .register(&format!("Editor {i}"), &format!("ed{i}@radar.ia"), "secret1", Role::Editor)
            .unwrap();
    }
    let mut ids: Vec<_> = store.list_users().unwrap().into_iter().map(|u| u.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 7);
}

#[tokio::test]
async fn test_duplicate_email_fails_and_keeps_first_record() {
    let (store, backend) = ready_store().await;
    let first = store
        .register("New Ed", "new@radar.ia", "secret1", Role::Editor)
        .unwrap();
    let snapshot = backend.get(SNAPSHOT_KEY).unwrap();

    let err = store
        .register("Impostor", "new@radar.ia", "other-pass", Role::Admin)
        .unwrap_err();
    assert!(err.is_conflict());
    assert!(matches!(
        err,
        Error::User(UserError::EmailAlreadyRegistered { ref email }) if email == "new@radar.ia"
    ));

    let users = store.list_users().unwrap();
    assert_eq!(users.len(), 3);
    assert_eq!(users[2], first);
    assert_eq!(backend.get(SNAPSHOT_KEY).unwrap(), snapshot);

    // Original password still the only one that works
    assert!(store.login("new@radar.ia", "secret1").is_ok());
    assert!(store.login("new@radar.ia", "other-pass").is_err());
}

#[tokio::test]
async fn test_duplicate_seed_email_rejected() {
    let (store, _backend) = ready_store().await;
    let err = store
        .register("Outro Admin", "admin@radar.ia", "admin456", Role::Admin)
        .unwrap_err();
    assert!(err.is_conflict());
    assert!(store.login("admin@radar.ia", "admin123").is_ok());
}

#[tokio::test]
async fn test_invalid_input_is_rejected_before_storage() {
    let (store, backend) = ready_store().await;
    let snapshot = backend.get(SNAPSHOT_KEY).unwrap();

    let cases = [
        ("Al", "al@radar.ia", "secret1"),
        ("Alice", "alice.radar.ia", "secret1"),
        ("Alice", "alice@radar.ia", "12345"),
    ];
    for (name, email, password) in cases {
        let err = store
            .register(name, email, password, Role::Editor)
            .unwrap_err();
        assert!(err.is_validation_error(), "{name}/{email}: {err}");
    }

    assert_eq!(store.list_users().unwrap().len(), 2);
    assert_eq!(backend.get(SNAPSHOT_KEY).unwrap(), snapshot);
    assert_eq!(store.current_user().unwrap(), None);
}

#[tokio::test]
async fn test_registration_is_durable() {
    let (store, backend) = ready_store().await;
    let user = store
        .register("New Ed", "new@radar.ia", "secret1", Role::Editor)
        .unwrap();

    let reloaded = reload(&backend).await;
    let users = reloaded.list_users().unwrap();
    assert_eq!(users.len(), 3);
    assert!(users.contains(&user));
}

#[tokio::test]
async fn test_backend_failure_leaves_table_untouched() {
    let backend = Arc::new(FlakyBackend::new());
    let store = store_on(backend.clone());
    store.initialize().await.unwrap();

    backend.fail_writes(true);
    let err = store
        .register("New Ed", "new@radar.ia", "secret1", Role::Editor)
        .unwrap_err();
    assert!(err.is_persistence_error());
    assert_eq!(store.list_users().unwrap().len(), 2);
    assert_eq!(store.current_user().unwrap(), None);

    // Same email is still free once the medium recovers
    backend.fail_writes(false);
    store
        .register("New Ed", "new@radar.ia", "secret1", Role::Editor)
        .unwrap();
    assert_eq!(store.list_users().unwrap().len(), 3);
}

#[tokio::test]
async fn test_session_write_failure_after_commit_still_succeeds() {
    let backend = Arc::new(FlakyBackend::new());
    let store = store_on(backend.clone());
    store.initialize().await.unwrap();

    backend.fail_writes_to(Some(SESSION_KEY));
    let user = store
        .register("New Ed", "new@radar.ia", "secret1", Role::Editor)
        .unwrap();

    // Account committed and the session is live in memory
    assert_eq!(store.list_users().unwrap().len(), 3);
    assert_eq!(store.current_user().unwrap(), Some(user.clone()));
    assert!(backend.get(SESSION_KEY).unwrap().is_none());

    backend.fail_writes_to(None);
    let reloaded = store_on(backend.clone());
    reloaded.initialize().await.unwrap();
    assert!(reloaded.list_users().unwrap().contains(&user));
    assert_eq!(reloaded.current_user().unwrap(), None);
    assert!(reloaded.login("new@radar.ia", "secret1").is_ok());
}

#[tokio::test]
async fn test_concurrent_registrations_with_same_email_admit_one() {
    let (store, backend) = ready_store().await;

    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let store = store.clone();
                scope.spawn(move || {
                    store.register(&format!("Racer {i}"), "race@radar.ia", "secret1", Role::Editor)
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(
        results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(Error::is_conflict)
    );
    assert_eq!(store.list_users().unwrap().len(), 3);
    assert_eq!(reload(&backend).await.list_users().unwrap().len(), 3);
}
