//! Session lifecycle: login, logout and restoring across reloads.

use radar::{
    backend::Backend,
    constants::{SESSION_KEY, SNAPSHOT_KEY},
    user::Role,
};

use crate::helpers::{ready_store, reload};

#[tokio::test]
async fn test_logout_clears_session_but_not_users() {
    let (store, backend) = ready_store().await;
    store.login("admin@radar.ia", "admin123").unwrap();
    assert!(backend.contains_key(SESSION_KEY));

    store.logout().unwrap();
    assert_eq!(store.current_user().unwrap(), None);
    assert!(!backend.contains_key(SESSION_KEY));
    assert!(backend.contains_key(SNAPSHOT_KEY));
    assert_eq!(store.list_users().unwrap().len(), 2);
}

#[tokio::test]
async fn test_logout_without_session_is_ok() {
    let (store, _backend) = ready_store().await;
    store.logout().unwrap();
    store.logout().unwrap();
    assert_eq!(store.current_user().unwrap(), None);
}

#[tokio::test]
async fn test_login_replaces_session() {
    let (store, _backend) = ready_store().await;
    store.login("admin@radar.ia", "admin123").unwrap();
    let editor = store.login("editor@radar.ia", "editor123").unwrap();
    assert_eq!(store.current_user().unwrap(), Some(editor));
}

#[tokio::test]
async fn test_session_survives_reload() {
    let (store, backend) = ready_store().await;
    let user = store
        .register("New Ed", "new@radar.ia", "secret1", Role::Editor)
        .unwrap();

    let reloaded = reload(&backend).await;
    assert_eq!(reloaded.current_user().unwrap(), Some(user));
}

#[tokio::test]
async fn test_logout_survives_reload() {
    let (store, backend) = ready_store().await;
    store.login("admin@radar.ia", "admin123").unwrap();
    store.logout().unwrap();

    let reloaded = reload(&backend).await;
    assert_eq!(reloaded.current_user().unwrap(), None);
}

#[tokio::test]
async fn test_session_value_has_no_digest() {
    let (store, backend) = ready_store().await;
    store.login("admin@radar.ia", "admin123").unwrap();

    let session = backend.get(SESSION_KEY).unwrap().unwrap();
    assert!(session.contains("admin@radar.ia"));
    assert!(!session.contains("argon2"));
    assert!(!session.contains("admin123"));
}
