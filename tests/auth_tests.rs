//! Authentication service tests against a stub login endpoint

mod common;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::http::StatusCode;
use serde_json::json;

use common::{auth_service, unreachable_login_url, StubServer};
use luminalib::auth::Role;
use luminalib::storage::{MemoryStorage, Storage};
use luminalib::Error;

#[tokio::test]
async fn test_login_admin_scenario() {
    let stub = StubServer::start(
        StatusCode::OK,
        json!({"token": "t1", "role": "Admin", "username": "admin"}),
    )
    .await;
    let storage = Arc::new(MemoryStorage::new());
    let service = auth_service(&stub.login_url(), Arc::clone(&storage));
    service.restore();

    let session = service.login("admin", "x").await.expect("login");

    assert_eq!(session.token, "t1");
    let state = service.state();
    assert!(state.is_authenticated());
    assert!(state.is_admin());
    assert_eq!(storage.get("token").as_deref(), Some("t1"));
    assert_eq!(storage.get("role").as_deref(), Some("Admin"));
    assert_eq!(storage.get("username").as_deref(), Some("admin"));
    assert_eq!(stub.hits(), 1);
    assert_eq!(
        stub.last_body(),
        Some(json!({"username": "admin", "password": "x"}))
    );
}

#[tokio::test]
async fn test_login_accepts_backend_role_names() {
    let stub = StubServer::start(
        StatusCode::OK,
        json!({"token": "jwt", "role": "ROLE_USER", "username": "jane_smith"}),
    )
    .await;
    let storage = Arc::new(MemoryStorage::new());
    let service = auth_service(&stub.login_url(), Arc::clone(&storage));
    service.restore();

    let session = service.login("jane_smith", "secret").await.unwrap();
    assert_eq!(session.role, Role::Member);
    assert_eq!(storage.get("role").as_deref(), Some("Member"));
}

#[tokio::test]
async fn test_login_falls_back_to_submitted_username() {
    let stub = StubServer::start(StatusCode::OK, json!({"token": "t2", "role": "Member"})).await;
    let storage = Arc::new(MemoryStorage::new());
    let service = auth_service(&stub.login_url(), Arc::clone(&storage));
    service.restore();

    let session = service.login("john_doe", "pw").await.unwrap();
    assert_eq!(session.username, "john_doe");
    assert_eq!(storage.get("username").as_deref(), Some("john_doe"));
}

#[tokio::test]
async fn test_rejected_login_keeps_prior_session() {
    let stub = StubServer::start(StatusCode::UNAUTHORIZED, json!({"error": "bad credentials"})).await;
    let storage = Arc::new(MemoryStorage::with_entries(&[
        ("token", "old"),
        ("role", "Member"),
        ("username", "jane_smith"),
    ]));
    let service = auth_service(&stub.login_url(), Arc::clone(&storage));
    let before = service.restore();

    let result = service.login("admin", "wrong").await;

    assert!(matches!(result, Err(Error::Authentication)));
    assert_eq!(service.state(), before);
    assert_eq!(storage.get("token").as_deref(), Some("old"));
    assert_eq!(storage.get("role").as_deref(), Some("Member"));
    assert_eq!(storage.get("username").as_deref(), Some("jane_smith"));
}

#[tokio::test]
async fn test_server_error_is_an_authentication_error() {
    let stub = StubServer::start(StatusCode::INTERNAL_SERVER_ERROR, json!({})).await;
    let storage = Arc::new(MemoryStorage::new());
    let service = auth_service(&stub.login_url(), Arc::clone(&storage));
    service.restore();

    let err = service.login("admin", "x").await.unwrap_err();
    assert!(matches!(err, Error::Authentication));
    assert_eq!(err.to_string(), "Invalid username or password");
    assert!(storage.is_empty());
}

#[tokio::test]
async fn test_malformed_success_body_is_rejected() {
    let stub = StubServer::start(StatusCode::OK, json!({"role": "Admin"})).await;
    let storage = Arc::new(MemoryStorage::new());
    let service = auth_service(&stub.login_url(), Arc::clone(&storage));
    service.restore();

    assert!(matches!(
        service.login("admin", "x").await,
        Err(Error::Authentication)
    ));
    assert!(!service.state().is_authenticated());
    assert!(storage.is_empty());
}

#[tokio::test]
async fn test_unreachable_endpoint_is_an_authentication_error() {
    let url = unreachable_login_url().await;
    let storage = Arc::new(MemoryStorage::new());
    let service = auth_service(&url, Arc::clone(&storage));
    service.restore();

    assert!(matches!(
        service.login("admin", "x").await,
        Err(Error::Authentication)
    ));
    assert!(!service.is_login_pending());
    assert!(storage.is_empty());
}

#[tokio::test]
async fn test_second_login_rejected_while_first_in_flight() {
    let stub = StubServer::start_with_delay(
        StatusCode::OK,
        json!({"token": "t1", "role": "Admin", "username": "admin"}),
        Duration::from_millis(300),
    )
    .await;
    let service = Arc::new(auth_service(
        &stub.login_url(),
        Arc::new(MemoryStorage::new()),
    ));
    service.restore();

    let first = {
        let service = Arc::clone(&service);
        tokio::spawn(async move { service.login("admin", "x").await })
    };
    while !service.is_login_pending() {
        tokio::task::yield_now().await;
    }

    let second = service.login("admin", "x").await;
    assert!(matches!(second, Err(Error::LoginInProgress)));

    first.await.unwrap().expect("first login");
    assert!(!service.is_login_pending());
    assert!(service.state().is_admin());
    assert_eq!(stub.hits(), 1);
}

#[tokio::test]
async fn test_demo_login_rejected_while_login_in_flight() {
    let stub = StubServer::start_with_delay(
        StatusCode::OK,
        json!({"token": "t1", "role": "Member", "username": "jane_smith"}),
        Duration::from_millis(300),
    )
    .await;
    let service = Arc::new(auth_service(
        &stub.login_url(),
        Arc::new(MemoryStorage::new()),
    ));
    service.restore();

    let pending = {
        let service = Arc::clone(&service);
        tokio::spawn(async move { service.login("jane_smith", "x").await })
    };
    while !service.is_login_pending() {
        tokio::task::yield_now().await;
    }

    assert!(matches!(
        service.demo_login(Role::Admin),
        Err(Error::LoginInProgress)
    ));

    pending.await.unwrap().expect("login");
    assert_eq!(service.state().username(), Some("jane_smith"));
    assert!(service.demo_login(Role::Admin).is_ok());
}

#[tokio::test]
async fn test_abandoned_login_changes_nothing() {
    let stub = StubServer::start_with_delay(
        StatusCode::OK,
        json!({"token": "t1", "role": "Admin", "username": "admin"}),
        Duration::from_millis(500),
    )
    .await;
    let storage = Arc::new(MemoryStorage::new());
    let service = auth_service(&stub.login_url(), Arc::clone(&storage));
    service.restore();

    let timed_out =
        tokio::time::timeout(Duration::from_millis(50), service.login("admin", "x")).await;

    assert!(timed_out.is_err());
    assert!(!service.is_login_pending());
    assert!(!service.state().is_authenticated());
    assert!(storage.is_empty());
}

#[tokio::test]
async fn test_subscribers_see_login_and_logout() {
    let stub = StubServer::start(
        StatusCode::OK,
        json!({"token": "t1", "role": "Member", "username": "jane_smith"}),
    )
    .await;
    let storage = Arc::new(MemoryStorage::new());
    let service = auth_service(&stub.login_url(), Arc::clone(&storage));

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    service.subscribe(move |state| {
        sink.lock()
            .unwrap()
            .push((state.is_loading, state.username().map(str::to_string)));
    });

    service.restore();
    service.login("jane_smith", "pw").await.unwrap();
    service.logout();

    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            (false, None),
            (false, Some("jane_smith".to_string())),
            (false, None),
        ]
    );
    assert!(storage.is_empty());
}

#[test]
fn test_logout_without_session_is_a_no_op() {
    let storage = Arc::new(MemoryStorage::new());
    let service = auth_service("http://127.0.0.1:9/api/auth/login", Arc::clone(&storage));
    service.restore();

    service.logout();
    service.logout();

    assert!(!service.state().is_authenticated());
    assert!(!service.state().is_loading);
}

#[test]
fn test_demo_login_persists_canned_session() {
    let storage = Arc::new(MemoryStorage::new());
    let service = auth_service("http://127.0.0.1:9/api/auth/login", Arc::clone(&storage));
    service.restore();

    let session = service.demo_login(Role::Admin).unwrap();

    assert_eq!(session.token, "demo-jwt-token-admin");
    assert_eq!(storage.get("username").as_deref(), Some("admin"));
    assert!(service.state().is_admin());
}
