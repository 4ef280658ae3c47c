//! Sidebar navigation links

use serde::Serialize;

use crate::auth::{AuthState, Role};
use crate::routing::routes::{ADMIN_BOOKS, ADMIN_USERS, BORROWINGS, DASHBOARD};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub route: &'static str,
}

/// Shown to every signed-in role
pub const BASE_LINKS: &[NavLink] = &[
    NavLink {
        label: "Browse Books",
        route: DASHBOARD,
    },
    NavLink {
        label: "My Borrowings",
        route: BORROWINGS,
    },
];

/// Appended for administrators
pub const ADMIN_LINKS: &[NavLink] = &[
    NavLink {
        label: "Manage Books",
        route: ADMIN_BOOKS,
    },
    NavLink {
        label: "Manage Users",
        route: ADMIN_USERS,
    },
];

/// Links visible to `role`, base links first, declared order preserved
pub fn menu_for(role: Role) -> Vec<NavLink> {
    let mut links = BASE_LINKS.to_vec();
    if role == Role::Admin {
        links.extend_from_slice(ADMIN_LINKS);
    }
    links
}

/// The user block at the bottom of the sidebar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileSummary {
    pub initial: char,
    pub display_name: String,
    pub role_label: &'static str,
}

impl ProfileSummary {
    pub fn from_state(state: &AuthState) -> Self {
        let username = state.username().filter(|name| !name.is_empty());
        let initial = username
            .and_then(|name| name.chars().next())
            .map(|c| c.to_uppercase().next().unwrap_or(c))
            .unwrap_or('U');

        Self {
            initial,
            display_name: username.unwrap_or("User").to_string(),
            role_label: if state.is_admin() {
                Role::Admin.label()
            } else {
                Role::Member.label()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Session;

    #[test]
    fn test_member_menu() {
        let routes: Vec<_> = menu_for(Role::Member).iter().map(|l| l.route).collect();
        assert_eq!(routes, vec!["/dashboard", "/dashboard/borrowings"]);
    }

    #[test]
    fn test_admin_menu_appends_admin_links() {
        let labels: Vec<_> = menu_for(Role::Admin).iter().map(|l| l.label).collect();
        assert_eq!(
            labels,
            vec!["Browse Books", "My Borrowings", "Manage Books", "Manage Users"]
        );
    }

    #[test]
    fn test_profile_summary() {
        let admin = AuthState::ready(Some(Session::new("t", "admin", Role::Admin)));
        let summary = ProfileSummary::from_state(&admin);
        assert_eq!(summary.initial, 'A');
        assert_eq!(summary.role_label, "Administrator");

        let nobody = ProfileSummary::from_state(&AuthState::ready(None));
        assert_eq!(nobody.initial, 'U');
        assert_eq!(nobody.display_name, "User");
        assert_eq!(nobody.role_label, "Member");
    }
}
