//! Route guard: the client-side navigation decision function.
//!
//! Given the current authentication state and the path being navigated to,
//! `decide` returns what the client should do: render the requested view or
//! redirect somewhere else. It is evaluated on every navigation, not once at
//! startup, so stale client state cannot expose a restricted view.
//!
//! The guard is a UX convenience only. Every server-side handler re-checks
//! identity (and role where a route is role-reserved) independently; the
//! guard is never the sole enforcement point.

use crate::shared::roles::Role;

/// Outcome of evaluating the guard for one navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// The requested view may be rendered.
    Render,
    /// Not authenticated: go to the login page.
    RedirectToLogin,
    /// Already authenticated on an auth page: go to the role's dashboard.
    RedirectToRoleHome(Role),
    /// Authenticated, but the path belongs to a different role's area.
    RedirectToUnauthorized,
}

impl RouteDecision {
    /// The navigation target, or `None` when the view should render in place.
    pub fn target(&self) -> Option<&'static str> {
        match self {
            RouteDecision::Render => None,
            RouteDecision::RedirectToLogin => Some("/auth/login"),
            RouteDecision::RedirectToRoleHome(role) => Some(role.home_path()),
            RouteDecision::RedirectToUnauthorized => Some("/unauthorized"),
        }
    }
}

/// Decide what to do for a navigation to `path`.
///
/// `role` is `Some` when the user is authenticated. Rules are evaluated in
/// order, first match wins:
///
/// 1. unauthenticated and not on a login/register page → login;
/// 2. authenticated on a login/register page → the role's dashboard;
/// 3. authenticated inside another role's area → unauthorized page;
/// 4. otherwise render.
pub fn decide(role: Option<Role>, path: &str) -> RouteDecision {
    let on_auth_page = is_auth_page(path);

    let Some(role) = role else {
        if on_auth_page {
            return RouteDecision::Render;
        }
        return RouteDecision::RedirectToLogin;
    };

    if on_auth_page {
        return RouteDecision::RedirectToRoleHome(role);
    }

    if let Some(area) = area_of(path) {
        if area != role {
            return RouteDecision::RedirectToUnauthorized;
        }
    }

    RouteDecision::Render
}

/// Whether the path is one of the unauthenticated entry pages.
fn is_auth_page(path: &str) -> bool {
    segments(path).any(|s| s == "login" || s == "register")
}

/// The role an area of the route tree is reserved for, if any.
fn area_of(path: &str) -> Option<Role> {
    match segments(path).next() {
        Some("admin") => Some(Role::Admin),
        Some("doctor") => Some(Role::Doctor),
        Some("patient") => Some(Role::Patient),
        _ => None,
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unauthenticated_restricted_path_redirects_to_login() {
        assert_eq!(decide(None, "/admin/dashboard"), RouteDecision::RedirectToLogin);
        assert_eq!(decide(None, "/patient/chatbot"), RouteDecision::RedirectToLogin);
        assert_eq!(decide(None, "/"), RouteDecision::RedirectToLogin);
    }

    #[test]
    fn test_unauthenticated_auth_pages_render() {
        assert_eq!(decide(None, "/auth/login"), RouteDecision::Render);
        assert_eq!(decide(None, "/auth/register"), RouteDecision::Render);
    }

    #[test]
    fn test_authenticated_on_auth_page_goes_home() {
        assert_eq!(
            decide(Some(Role::Admin), "/auth/login"),
            RouteDecision::RedirectToRoleHome(Role::Admin)
        );
        assert_eq!(
            decide(Some(Role::Admin), "/auth/login").target(),
            Some("/admin/dashboard")
        );
        assert_eq!(
            decide(Some(Role::Patient), "/auth/register"),
            RouteDecision::RedirectToRoleHome(Role::Patient)
        );
    }

    #[test]
    fn test_wrong_role_area_is_unauthorized() {
        assert_eq!(
            decide(Some(Role::Doctor), "/admin/dashboard"),
            RouteDecision::RedirectToUnauthorized
        );
        assert_eq!(
            decide(Some(Role::Patient), "/doctor/reports"),
            RouteDecision::RedirectToUnauthorized
        );
        assert_eq!(
            decide(Some(Role::Admin), "/patient/dashboard"),
            RouteDecision::RedirectToUnauthorized
        );
    }

    #[test]
    fn test_matching_role_area_renders() {
        assert_eq!(decide(Some(Role::Admin), "/admin/users"), RouteDecision::Render);
        assert_eq!(decide(Some(Role::Doctor), "/doctor/dashboard"), RouteDecision::Render);
        assert_eq!(
            decide(Some(Role::Patient), "/patient/report-scanner"),
            RouteDecision::Render
        );
    }

    #[test]
    fn test_neutral_paths_render_for_any_role() {
        assert_eq!(decide(Some(Role::Doctor), "/unauthorized"), RouteDecision::Render);
        assert_eq!(decide(Some(Role::Patient), "/not-found"), RouteDecision::Render);
    }

    #[test]
    fn test_targets() {
        assert_eq!(RouteDecision::Render.target(), None);
        assert_eq!(RouteDecision::RedirectToLogin.target(), Some("/auth/login"));
        assert_eq!(RouteDecision::RedirectToUnauthorized.target(), Some("/unauthorized"));
    }
}
