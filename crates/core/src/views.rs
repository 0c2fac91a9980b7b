//! Static informational views shown to callers who were turned away.

use serde::Serialize;

use crate::routes::Route;

const LOGIN_REQUIRED: &str = "User must be authenticated to access the KTP Database";

const ADMIN_REQUIRED: &str = "Only members of Kappa Theta Pi's Lambda Chapter (Boston University) \
with admin privileges. If you believe there has been a mistake, contact the head of the app committee.";

/// A fixed message with a single action back to the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StaticView {
    pub route: Route,
    pub message: &'static str,
    pub action_label: &'static str,
    pub action_target: Route,
}

impl StaticView {
    pub fn login_required() -> Self {
        Self::back_home(Route::LoginError, LOGIN_REQUIRED)
    }

    pub fn admin_required() -> Self {
        Self::back_home(Route::InvalidAdmin, ADMIN_REQUIRED)
    }

    /// The static view served at `route`, if any.
    pub fn for_route(route: Route) -> Option<Self> {
        match route {
            Route::LoginError => Some(Self::login_required()),
            Route::InvalidAdmin => Some(Self::admin_required()),
            _ => None,
        }
    }

    fn back_home(route: Route, message: &'static str) -> Self {
        Self {
            route,
            message,
            action_label: "Back to Home",
            action_target: Route::Home,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_routes_have_views() {
        let login = StaticView::for_route(Route::LoginError).unwrap();
        assert_eq!(login.message, LOGIN_REQUIRED);
        assert_eq!(login.action_target, Route::Home);

        let admin = StaticView::for_route(Route::InvalidAdmin).unwrap();
        assert!(admin.message.contains("admin privileges"));
        assert_eq!(admin.action_label, "Back to Home");
    }

    #[test]
    fn other_routes_have_none() {
        assert_eq!(StaticView::for_route(Route::Home), None);
        assert_eq!(StaticView::for_route(Route::AddUser), None);
    }
}
