//! Login against seeded and registered accounts.

use radar::user::Role;

use crate::helpers::{ready_store, reload};

#[tokio::test]
async fn test_login_seed_admin() {
    let (store, _backend) = ready_store().await;

    let admin = store.login("admin@radar.ia", "admin123").unwrap();
    assert_eq!(admin.email, "admin@radar.ia");
    assert_eq!(admin.role, Role::Admin);
    assert_eq!(store.current_user().unwrap(), Some(admin));
}

#[tokio::test]
async fn test_login_seed_editor() {
    let (store, _backend) = ready_store().await;
    let editor = store.login("editor@radar.ia", "editor123").unwrap();
    assert_eq!(editor.role, Role::Editor);
}

#[tokio::test]
async fn test_wrong_password_and_unknown_email_look_the_same() {
    let (store, _backend) = ready_store().await;

    let wrong_password = store.login("admin@radar.ia", "wrong").unwrap_err();
    let unknown_email = store.login("nobody@radar.ia", "admin123").unwrap_err();

    assert!(wrong_password.is_invalid_credentials());
    assert!(unknown_email.is_invalid_credentials());
    assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    assert_eq!(store.current_user().unwrap(), None);
}

#[tokio::test]
async fn test_failed_login_keeps_existing_session() {
    let (store, _backend) = ready_store().await;
    let editor = store.login("editor@radar.ia", "editor123").unwrap();

    assert!(store.login("admin@radar.ia", "nope").is_err());
    assert_eq!(store.current_user().unwrap(), Some(editor));
}

#[tokio::test]
async fn test_password_is_not_a_valid_email_key() {
    let (store, _backend) = ready_store().await;
    // Another account's password does not open this one
    assert!(store.login("admin@radar.ia", "editor123").is_err());
    assert!(store.login("editor@radar.ia", "admin123").is_err());
}

#[tokio::test]
async fn test_login_survives_reload() {
    let (store, backend) = ready_store().await;
    store
        .register("New Ed", "new@radar.ia", "secret1", Role::Editor)
        .unwrap();
    drop(store);

    let reloaded = reload(&backend).await;
    let user = reloaded.login("new@radar.ia", "secret1").unwrap();
    assert_eq!(user.name, "New Ed");
    assert!(reloaded.login("new@radar.ia", "secret2").is_err());
    assert!(reloaded.login("admin@radar.ia", "admin123").is_ok());
}
