//! Shared helpers for integration tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{http::StatusCode, routing::post, Json, Router};
use serde_json::Value;

use luminalib::auth::{AuthClient, AuthService, SessionStore};
use luminalib::storage::MemoryStorage;

/// In-process stand-in for the authentication endpoint
pub struct StubServer {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    last_body: Arc<Mutex<Option<Value>>>,
}

impl StubServer {
    /// Answer every `POST /api/auth/login` with `status` and `body`
    pub async fn start(status: StatusCode, body: Value) -> Self {
        Self::start_with_delay(status, body, Duration::ZERO).await
    }

    pub async fn start_with_delay(status: StatusCode, body: Value, delay: Duration) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let last_body = Arc::new(Mutex::new(None));

        let handler = {
            let hits = Arc::clone(&hits);
            let last_body = Arc::clone(&last_body);
            move |Json(request): Json<Value>| {
                let hits = Arc::clone(&hits);
                let last_body = Arc::clone(&last_body);
                let body = body.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    *last_body.lock().unwrap() = Some(request);
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                    (status, Json(body))
                }
            }
        };

        let app = Router::new().route("/api/auth/login", post(handler));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub server");
        let addr = listener.local_addr().expect("stub address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub server");
        });

        Self {
            base_url: format!("http://{}/api", addr),
            hits,
            last_body,
        }
    }

    pub fn login_url(&self) -> String {
        format!("{}/auth/login", self.base_url)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn last_body(&self) -> Option<Value> {
        self.last_body.lock().unwrap().clone()
    }
}

/// Auth service over in-memory storage, pointed at `login_url`
pub fn auth_service(login_url: &str, storage: Arc<MemoryStorage>) -> AuthService {
    let client = AuthClient::new(login_url, Duration::from_secs(5)).expect("client");
    AuthService::new(SessionStore::new(storage), client)
}

/// A login URL nothing is listening on
pub async fn unreachable_login_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("address");
    drop(listener);
    format!("http://{}/api/auth/login", addr)
}
