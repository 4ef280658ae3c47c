//! Application shell
//!
//! One [`AuthService`] per process, restored on construction, plus the
//! navigator and the guard of whichever protected page is currently open.
//! The guard listens to the auth service so a sign-out while a protected
//! page is open sends the user to the login route immediately.

use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;

use crate::auth::{AuthService, AuthState, Session, SubscriptionId};
use crate::config::Config;
use crate::error::Result;
use crate::routing::{
    find_route, login_entry_redirect, normalize_path, AccessGuard, Decision, HistoryNavigator,
    Navigator,
};

/// Result of opening a route
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum Outcome {
    /// Session restoration has not finished
    Waiting,
    /// The page content is shown
    Rendered { path: String },
    /// The page showed nothing and navigation moved on
    Redirected { from: String, to: String },
}

type ActiveGuard = Arc<Mutex<Option<AccessGuard>>>;

pub struct App {
    config: Config,
    auth: Arc<AuthService>,
    navigator: Arc<HistoryNavigator>,
    active_guard: ActiveGuard,
    subscription: SubscriptionId,
}

impl App {
    /// Wire the shell around `auth` and restore the stored session
    pub fn new(config: Config, auth: AuthService) -> Self {
        let auth = Arc::new(auth);
        let navigator = Arc::new(HistoryNavigator::new(&config.routes.login));
        let active_guard: ActiveGuard = Arc::new(Mutex::new(None));

        let subscription = {
            let guard = Arc::clone(&active_guard);
            let navigator = Arc::clone(&navigator);
            auth.subscribe(move |state: &AuthState| {
                if let Some(guard) = guard
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .as_mut()
                {
                    guard.react(state, navigator.as_ref());
                }
            })
        };

        auth.restore();

        Self {
            config,
            auth,
            navigator,
            active_guard,
            subscription,
        }
    }

    pub fn from_config(config: Config) -> Result<Self> {
        let auth = AuthService::from_config(&config)?;
        Ok(Self::new(config, auth))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    pub fn navigator(&self) -> &HistoryNavigator {
        &self.navigator
    }

    pub fn state(&self) -> AuthState {
        self.auth.state()
    }

    /// Navigate to `path` and run its guard
    pub fn open(&self, path: &str) -> Outcome {
        self.navigator.push(path);

        if normalize_path(path) == normalize_path(&self.config.routes.login) {
            self.set_guard(None);
            return match login_entry_redirect(&self.state(), &self.config.routes) {
                Some(target) => {
                    let target = target.to_string();
                    self.navigator.replace(&target);
                    self.mount(&target);
                    Outcome::Redirected {
                        from: path.to_string(),
                        to: target,
                    }
                }
                None => Outcome::Rendered {
                    path: path.to_string(),
                },
            };
        }

        match self.mount(path) {
            Decision::Wait => Outcome::Waiting,
            Decision::Render => Outcome::Rendered {
                path: path.to_string(),
            },
            Decision::Redirect(to) => {
                // The redirect target is a page of its own
                if to != self.config.routes.login {
                    self.mount(&to);
                } else {
                    self.set_guard(None);
                }
                Outcome::Redirected {
                    from: path.to_string(),
                    to,
                }
            }
        }
    }

    /// Sign in and go to the landing route
    pub async fn login(&self, username: &str, password: &str) -> Result<Session> {
        let session = self.auth.login(username, password).await?;
        let landing = self.config.routes.landing.clone();
        self.navigator.push(&landing);
        self.mount(&landing);
        Ok(session)
    }

    /// Sign out and end up on the login route
    pub fn logout(&self) {
        self.auth.logout();
        self.set_guard(None);
        if self.navigator.current() != self.config.routes.login {
            self.navigator.push(&self.config.routes.login);
        }
    }

    /// Install the guard for `path` (if protected) and react to the current state
    fn mount(&self, path: &str) -> Decision {
        let Some(spec) = find_route(path) else {
            self.set_guard(None);
            return Decision::Render;
        };

        let mut guard = AccessGuard::new(spec.required_role, self.config.routes.clone());
        let decision = guard.react(&self.state(), self.navigator.as_ref());
        self.set_guard(Some(guard));
        decision
    }

    fn set_guard(&self, guard: Option<AccessGuard>) {
        *self
            .active_guard
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = guard;
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.auth.unsubscribe(self.subscription);
    }
}
