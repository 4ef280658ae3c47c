//! Route table

use serde::Serialize;

use crate::auth::{AuthState, Role};
use crate::config::RouteConfig;

/// A page and the role it demands, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteSpec {
    pub path: &'static str,
    pub title: &'static str,
    pub required_role: Option<Role>,
}

pub const DASHBOARD: &str = "/dashboard";
pub const BORROWINGS: &str = "/dashboard/borrowings";
pub const ADMIN_BOOKS: &str = "/admin";
pub const ADMIN_USERS: &str = "/admin/users";

/// Every protected page. Anything not listed here renders without a guard.
pub const PROTECTED_ROUTES: &[RouteSpec] = &[
    RouteSpec {
        path: DASHBOARD,
        title: "Browse Books",
        required_role: None,
    },
    RouteSpec {
        path: BORROWINGS,
        title: "My Borrowings",
        required_role: None,
    },
    RouteSpec {
        path: ADMIN_BOOKS,
        title: "Manage Books",
        required_role: Some(Role::Admin),
    },
    RouteSpec {
        path: ADMIN_USERS,
        title: "Manage Users",
        required_role: Some(Role::Admin),
    },
];

/// Strip trailing slashes; the root stays `/`
pub fn normalize_path(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        p => p,
    }
}

/// Look up a protected route; trailing slashes are ignored
pub fn find_route(path: &str) -> Option<&'static RouteSpec> {
    let normalized = normalize_path(path);
    PROTECTED_ROUTES.iter().find(|r| r.path == normalized)
}

/// Where the login page sends someone who is already signed in
pub fn login_entry_redirect<'a>(state: &AuthState, routes: &'a RouteConfig) -> Option<&'a str> {
    if !state.is_authenticated() {
        return None;
    }
    if state.is_admin() {
        Some(&routes.admin_landing)
    } else {
        Some(&routes.landing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Session;

    #[test]
    fn test_find_route() {
        assert_eq!(find_route("/admin/users/").unwrap().required_role, Some(Role::Admin));
        assert_eq!(find_route("/dashboard").unwrap().required_role, None);
        assert!(find_route("/about").is_none());
        assert!(find_route("/").is_none());
        assert_eq!(normalize_path("/login//"), "/login");
        assert_eq!(normalize_path("///"), "/");
    }

    #[test]
    fn test_login_entry_redirect_by_role() {
        let routes = RouteConfig::default();

        let anonymous = AuthState::ready(None);
        assert_eq!(login_entry_redirect(&anonymous, &routes), None);

        let admin = AuthState::ready(Some(Session::new("t", "admin", Role::Admin)));
        assert_eq!(login_entry_redirect(&admin, &routes), Some("/admin"));

        let member = AuthState::ready(Some(Session::new("t", "jane", Role::Member)));
        assert_eq!(login_entry_redirect(&member, &routes), Some("/dashboard"));
    }
}
