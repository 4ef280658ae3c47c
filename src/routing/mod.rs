//! Routes, access guard, navigation menu

pub mod guard;
pub mod menu;
pub mod navigator;
pub mod routes;

pub use guard::{decide, AccessGuard, Decision, GuardState};
pub use menu::{menu_for, NavLink, ProfileSummary, ADMIN_LINKS, BASE_LINKS};
pub use navigator::{HistoryNavigator, NavigationEntry, NavigationKind, Navigator};
pub use routes::{find_route, login_entry_redirect, normalize_path, RouteSpec, PROTECTED_ROUTES};
