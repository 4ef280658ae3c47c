//! Access guard for protected pages
//!
//! [`decide`] is the pure half: it maps the auth state and the page's required
//! role to a [`Decision`]. [`AccessGuard::react`] is the effectful half: it
//! performs the redirect through a [`Navigator`], once per transition into a
//! redirecting state, and never while restoration is still running.

use serde::Serialize;

use crate::auth::{AuthState, Role};
use crate::config::RouteConfig;
use crate::routing::navigator::Navigator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GuardState {
    Loading,
    Unauthenticated,
    AuthenticatedNoRoleRequired,
    AuthenticatedRoleMatch,
    AuthenticatedRoleMismatch,
}

impl GuardState {
    pub fn evaluate(state: &AuthState, required_role: Option<Role>) -> Self {
        if state.is_loading {
            return GuardState::Loading;
        }
        let Some(session) = &state.session else {
            return GuardState::Unauthenticated;
        };
        match required_role {
            None => GuardState::AuthenticatedNoRoleRequired,
            Some(role) if role == session.role => GuardState::AuthenticatedRoleMatch,
            Some(_) => GuardState::AuthenticatedRoleMismatch,
        }
    }

    pub fn decision(self, routes: &RouteConfig) -> Decision {
        match self {
            GuardState::Loading => Decision::Wait,
            GuardState::Unauthenticated => Decision::Redirect(routes.login.clone()),
            GuardState::AuthenticatedNoRoleRequired | GuardState::AuthenticatedRoleMatch => {
                Decision::Render
            }
            GuardState::AuthenticatedRoleMismatch => Decision::Redirect(routes.landing.clone()),
        }
    }
}

/// What a protected page should do right now
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Decision {
    /// Show the waiting indicator
    Wait,
    /// Show the protected content
    Render,
    /// Show nothing; navigation goes to the given route
    Redirect(String),
}

impl Decision {
    pub fn renders(&self) -> bool {
        matches!(self, Decision::Render)
    }
}

pub fn decide(state: &AuthState, required_role: Option<Role>, routes: &RouteConfig) -> Decision {
    GuardState::evaluate(state, required_role).decision(routes)
}

/// Guard instance for one mounted page
#[derive(Debug, Clone)]
pub struct AccessGuard {
    required_role: Option<Role>,
    routes: RouteConfig,
    last_reacted: Option<GuardState>,
}

impl AccessGuard {
    pub fn new(required_role: Option<Role>, routes: RouteConfig) -> Self {
        Self {
            required_role,
            routes,
            last_reacted: None,
        }
    }

    pub fn required_role(&self) -> Option<Role> {
        self.required_role
    }

    /// Change the page's requirement; the next reaction starts fresh
    pub fn set_required_role(&mut self, required_role: Option<Role>) {
        if self.required_role != required_role {
            self.required_role = required_role;
            self.last_reacted = None;
        }
    }

    /// Pure evaluation, no navigation
    pub fn decide(&self, state: &AuthState) -> Decision {
        decide(state, self.required_role, &self.routes)
    }

    /// Evaluate and, on entering a redirecting state, navigate.
    ///
    /// Re-running with an unchanged guard state is a no-op for navigation.
    pub fn react(&mut self, state: &AuthState, navigator: &dyn Navigator) -> Decision {
        let guard_state = GuardState::evaluate(state, self.required_role);
        let decision = guard_state.decision(&self.routes);

        if self.last_reacted != Some(guard_state) {
            tracing::debug!(
                "Guard {:?} -> {:?} (required role: {:?})",
                self.last_reacted,
                guard_state,
                self.required_role
            );
            self.last_reacted = Some(guard_state);
            if let Decision::Redirect(target) = &decision {
                navigator.replace(target);
            }
        }
        decision
    }
}
