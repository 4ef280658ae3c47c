//! Authentication service
//!
//! Owns the in-memory [`AuthState`], keeps it in step with the [`SessionStore`]
//! and tells subscribers about every transition before the mutating call
//! returns.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::auth::client::AuthClient;
use crate::auth::models::{AuthState, Role, Session};
use crate::auth::session::SessionStore;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::storage::FileStorage;

/// Callback invoked with the new state after each transition
pub type Listener = dyn Fn(&AuthState) + Send + Sync;

/// Handle returned by [`AuthService::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct AuthService {
    store: SessionStore,
    client: AuthClient,
    state: Mutex<AuthState>,
    restored: AtomicBool,
    login_pending: AtomicBool,
    listeners: Mutex<Vec<(SubscriptionId, Arc<Listener>)>>,
    next_listener_id: AtomicU64,
}

/// Holds the in-flight flag for the lifetime of one login call
struct PendingLogin<'a>(&'a AtomicBool);

impl<'a> PendingLogin<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| Self(flag))
            .map_err(|_| Error::LoginInProgress)
    }
}

impl Drop for PendingLogin<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl AuthService {
    /// Create a service in the loading state. Call [`AuthService::restore`] next.
    pub fn new(store: SessionStore, client: AuthClient) -> Self {
        Self {
            store,
            client,
            state: Mutex::new(AuthState::loading()),
            restored: AtomicBool::new(false),
            login_pending: AtomicBool::new(false),
            listeners: Mutex::new(Vec::new()),
            next_listener_id: AtomicU64::new(0),
        }
    }

    /// Service backed by the configured session file and login endpoint
    pub fn from_config(config: &Config) -> Result<Self> {
        let storage = Arc::new(FileStorage::new(&config.storage.session_path));
        Ok(Self::new(
            SessionStore::new(storage),
            AuthClient::from_config(config)?,
        ))
    }

    /// Current state snapshot
    pub fn state(&self) -> AuthState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_login_pending(&self) -> bool {
        self.login_pending.load(Ordering::Acquire)
    }

    /// Load the persisted session and leave the loading state.
    ///
    /// Only the first call reads storage; later calls return the current state.
    pub fn restore(&self) -> AuthState {
        if self.restored.swap(true, Ordering::AcqRel) {
            tracing::debug!("Session already restored, ignoring");
            return self.state();
        }

        let session = self.store.restore();
        match &session {
            Some(s) => tracing::info!("Restored session for {} ({})", s.username, s.role),
            None => tracing::debug!("No stored session"),
        }
        self.transition(|state| *state = AuthState::ready(session))
    }

    /// Authenticate against the login endpoint and persist the new session.
    ///
    /// A failed attempt leaves both storage and in-memory state as they were.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session> {
        let pending = PendingLogin::acquire(&self.login_pending)?;
        tracing::debug!("Signing in as {}", username);

        let session = self.client.login(username, password).await?;
        self.store.save(&session)?;
        drop(pending);

        tracing::info!("Signed in as {} ({})", session.username, session.role);
        self.transition(|state| state.session = Some(session.clone()));
        Ok(session)
    }

    /// Sign in with a canned session, no backend involved.
    ///
    /// Refused while a real login is in flight.
    pub fn demo_login(&self, role: Role) -> Result<Session> {
        if self.is_login_pending() {
            return Err(Error::LoginInProgress);
        }
        let session = match role {
            Role::Admin => Session::new("demo-jwt-token-admin", "admin", Role::Admin),
            Role::Member => Session::new("demo-jwt-token-user", "john_doe", Role::Member),
        };
        self.store.save(&session)?;

        tracing::info!("Demo session started for {} ({})", session.username, session.role);
        self.transition(|state| state.session = Some(session.clone()));
        Ok(session)
    }

    /// Forget the session. Never fails; storage errors are logged.
    pub fn logout(&self) {
        if let Err(e) = self.store.clear() {
            tracing::warn!("Failed to clear stored session: {}", e);
        }

        if self.state().session.is_some() {
            self.transition(|state| state.session = None);
            tracing::info!("Signed out");
        }
    }

    /// Register a callback for state transitions
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&AuthState) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_listener_id.fetch_add(1, Ordering::Relaxed));
        let listener: Arc<Listener> = Arc::new(listener);
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, listener));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|(listener_id, _)| *listener_id != id);
    }

    /// Apply a change, then notify with the completed state.
    ///
    /// Listeners run outside both locks so they may read state or
    /// (un)subscribe.
    fn transition(&self, apply: impl FnOnce(&mut AuthState)) -> AuthState {
        let snapshot = {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            apply(&mut state);
            state.clone()
        };

        let listeners: Vec<Arc<Listener>> = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in listeners {
            listener(&snapshot);
        }
        snapshot
    }
}
