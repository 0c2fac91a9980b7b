//! Navigable destinations of the admin console.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Home,
    Admin,
    ManageUsers,
    AddUser,
    LoginError,
    InvalidAdmin,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Admin => "/account/admin",
            Self::ManageUsers => "/account/admin/users",
            Self::AddUser => "/account/admin/users/add",
            Self::LoginError => "/error/login",
            Self::InvalidAdmin => "/error/admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Admin => "Admin",
            Self::ManageUsers => "Manage Users",
            Self::AddUser => "Add User",
            Self::LoginError => "Login Required",
            Self::InvalidAdmin => "Admin Required",
        }
    }

    pub fn parent(&self) -> Option<Self> {
        match self {
            Self::Home => None,
            Self::Admin | Self::LoginError | Self::InvalidAdmin => Some(Self::Home),
            Self::ManageUsers => Some(Self::Admin),
            Self::AddUser => Some(Self::ManageUsers),
        }
    }

    /// Trail from home down to this route, inclusive.
    pub fn breadcrumbs(&self) -> Vec<Self> {
        let mut trail = vec![*self];
        let mut current = *self;
        while let Some(parent) = current.parent() {
            trail.push(parent);
            current = parent;
        }
        trail.reverse();
        trail
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROUTES: [Route; 6] = [
        Route::Home,
        Route::Admin,
        Route::ManageUsers,
        Route::AddUser,
        Route::LoginError,
        Route::InvalidAdmin,
    ];

    #[test]
    fn paths_are_distinct() {
        for (i, a) in ROUTES.iter().enumerate() {
            for b in &ROUTES[i + 1..] {
                assert_ne!(a.path(), b.path());
            }
        }
    }

    #[test]
    fn add_user_breadcrumbs() {
        assert_eq!(
            Route::AddUser.breadcrumbs(),
            vec![Route::Home, Route::Admin, Route::ManageUsers, Route::AddUser]
        );
    }

    #[test]
    fn home_breadcrumbs_is_just_home() {
        assert_eq!(Route::Home.breadcrumbs(), vec![Route::Home]);
    }

    #[test]
    fn error_views_hang_off_home() {
        assert_eq!(Route::LoginError.parent(), Some(Route::Home));
        assert_eq!(Route::InvalidAdmin.parent(), Some(Route::Home));
    }
}
