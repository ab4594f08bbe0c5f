//! # Route guard and static route policy
//!
//! Decides, per navigation, whether a view may render or where to send the
//! user instead. The guard only reads [`SessionState`]; it never calls the
//! backend. A stale token is discovered later, when the API client sees a 401.
//!
//! | Path | Access |
//! |------|--------|
//! | `/login`, `/register`, `/unauthorized` | Always rendered. |
//! | `/` | Redirects to the role's dashboard, or to `/login` without a token. |
//! | `/admin`, `/owner`, `/tenant`, `/employee` | Exactly one role each. |
//! | anything else | Redirects to `/`. |
//!
//! `/login` is reserved for "no token". A token whose user has no resolvable
//! role is still authenticated, so role-restricted views send it to
//! `/unauthorized`.

use crate::models::Role;
use crate::session::SessionState;

pub const ROOT_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";
pub const ADMIN_PATH: &str = "/admin";
pub const OWNER_PATH: &str = "/owner";
pub const TENANT_PATH: &str = "/tenant";
pub const EMPLOYEE_PATH: &str = "/employee";

/// Outcome of a guard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Render,
    Redirect(&'static str),
}

/// Gate a view restricted to `allowed_roles` (`None` = any signed-in user).
pub fn authorize(session: &impl SessionState, allowed_roles: Option<&[Role]>) -> Decision {
    if !session.is_authenticated() {
        return Decision::Redirect(LOGIN_PATH);
    }
    match allowed_roles {
        Some(allowed) if !session.role().is_some_and(|r| allowed.contains(&r)) => {
            Decision::Redirect(UNAUTHORIZED_PATH)
        }
        _ => Decision::Render,
    }
}

/// Landing path for a role; no role lands on login.
pub fn default_landing_for(role: Option<Role>) -> &'static str {
    role.map_or(LOGIN_PATH, |r| r.dashboard_path())
}

/// The compiled-in route table.
pub struct RoutePolicy;

impl RoutePolicy {
    const PUBLIC: [&'static str; 3] = [LOGIN_PATH, REGISTER_PATH, UNAUTHORIZED_PATH];

    pub fn is_public(path: &str) -> bool {
        Self::PUBLIC.contains(&path)
    }

    /// Roles permitted on a protected path, or `None` if the path is not a
    /// protected dashboard.
    pub fn allowed_roles(path: &str) -> Option<&'static [Role]> {
        const ADMIN: &[Role] = &[Role::Admin];
        const OWNER: &[Role] = &[Role::Owner];
        const TENANT: &[Role] = &[Role::Tenant];
        const EMPLOYEE: &[Role] = &[Role::Employee];
        match path {
            ADMIN_PATH => Some(ADMIN),
            OWNER_PATH => Some(OWNER),
            TENANT_PATH => Some(TENANT),
            EMPLOYEE_PATH => Some(EMPLOYEE),
            _ => None,
        }
    }

    /// Resolve a full navigation to `path`.
    pub fn navigate(session: &impl SessionState, path: &str) -> Decision {
        if Self::is_public(path) {
            return Decision::Render;
        }
        if path == ROOT_PATH {
            return Decision::Redirect(Self::landing(session));
        }
        match Self::allowed_roles(path) {
            Some(allowed) => authorize(session, Some(allowed)),
            None => Decision::Redirect(ROOT_PATH),
        }
    }

    /// Where `/` sends the current session.
    pub fn landing(session: &impl SessionState) -> &'static str {
        if session.is_authenticated() {
            default_landing_for(session.role())
        } else {
            LOGIN_PATH
        }
    }

    /// Dashboard to leave `/login` for, if the session already has one.
    ///
    /// A token without a usable role has no dashboard, so the login form stays
    /// up and the user can sign in again.
    pub fn skip_login(session: &impl SessionState) -> Option<&'static str> {
        match Self::landing(session) {
            LOGIN_PATH => None,
            path => Some(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::models::UserInfo;
    use crate::session::{SessionSnapshot, SessionStore};

    fn signed_in(role: Option<Role>) -> SessionStore<MemoryStore> {
        let session = SessionStore::new(MemoryStore::new());
        session.begin(
            "token",
            &UserInfo {
                user_id: "U1".to_string(),
                username: "u".to_string(),
                role,
                ..Default::default()
            },
        );
        session
    }

    #[test]
    fn test_default_landing() {
        assert_eq!(default_landing_for(Some(Role::Admin)), "/admin");
        assert_eq!(default_landing_for(Some(Role::Owner)), "/owner");
        assert_eq!(default_landing_for(Some(Role::Tenant)), "/tenant");
        assert_eq!(default_landing_for(Some(Role::Employee)), "/employee");
        assert_eq!(default_landing_for(None), LOGIN_PATH);
    }

    #[test]
    fn test_authorize_admin_view() {
        let admin_only = Some(&[Role::Admin][..]);

        let anonymous = SessionStore::new(MemoryStore::new());
        assert_eq!(authorize(&anonymous, admin_only), Decision::Redirect(LOGIN_PATH));

        let tenant = signed_in(Some(Role::Tenant));
        assert_eq!(authorize(&tenant, admin_only), Decision::Redirect(UNAUTHORIZED_PATH));

        let admin = signed_in(Some(Role::Admin));
        assert_eq!(authorize(&admin, admin_only), Decision::Render);
    }

    #[test]
    fn test_authorize_without_role_restriction() {
        let tenant = signed_in(Some(Role::Tenant));
        assert_eq!(authorize(&tenant, None), Decision::Render);

        let anonymous = SessionSnapshot::default();
        assert_eq!(authorize(&anonymous, None), Decision::Redirect(LOGIN_PATH));
    }

    #[test]
    fn test_token_without_role_is_unauthorized_not_login() {
        let session = signed_in(None);
        for role in Role::ALL {
            assert_eq!(
                RoutePolicy::navigate(&session, role.dashboard_path()),
                Decision::Redirect(UNAUTHORIZED_PATH)
            );
        }

        // A token next to a malformed user record behaves the same
        let storage = MemoryStore::new();
        let session = SessionStore::new(storage.clone());
        session.set_token("t");
        crate::session::KeyValueStorage::set(&storage, crate::session::USER_KEY, "garbage");
        assert_eq!(
            RoutePolicy::navigate(&session, ADMIN_PATH),
            Decision::Redirect(UNAUTHORIZED_PATH)
        );
    }

    #[test]
    fn test_role_without_token_is_login() {
        let session = SessionStore::new(MemoryStore::new());
        session.set_user(&UserInfo {
            role: Some(Role::Admin),
            ..Default::default()
        });
        assert_eq!(RoutePolicy::navigate(&session, ADMIN_PATH), Decision::Redirect(LOGIN_PATH));
        assert_eq!(RoutePolicy::navigate(&session, ROOT_PATH), Decision::Redirect(LOGIN_PATH));
    }

    #[test]
    fn test_each_dashboard_admits_exactly_one_role() {
        for path in [ADMIN_PATH, OWNER_PATH, TENANT_PATH, EMPLOYEE_PATH] {
            let admitted: Vec<_> = Role::ALL
                .into_iter()
                .filter(|r| RoutePolicy::navigate(&signed_in(Some(*r)), path) == Decision::Render)
                .collect();
            assert_eq!(admitted.len(), 1, "{path}");
            assert_eq!(admitted[0].dashboard_path(), path);
        }
    }

    #[test]
    fn test_root_resolves_landing() {
        let anonymous = SessionStore::new(MemoryStore::new());
        assert_eq!(RoutePolicy::navigate(&anonymous, ROOT_PATH), Decision::Redirect(LOGIN_PATH));

        let owner = signed_in(Some(Role::Owner));
        assert_eq!(RoutePolicy::navigate(&owner, ROOT_PATH), Decision::Redirect(OWNER_PATH));

        let roleless = signed_in(None);
        assert_eq!(RoutePolicy::navigate(&roleless, ROOT_PATH), Decision::Redirect(LOGIN_PATH));
    }

    #[test]
    fn test_login_page_stays_for_roleless_token() {
        let roleless = signed_in(None);
        assert!(roleless.is_authenticated());
        assert_eq!(RoutePolicy::skip_login(&roleless), None);
        assert_eq!(RoutePolicy::navigate(&roleless, LOGIN_PATH), Decision::Render);

        let anonymous = SessionStore::new(MemoryStore::new());
        assert_eq!(RoutePolicy::skip_login(&anonymous), None);

        for role in Role::ALL {
            let session = signed_in(Some(role));
            assert_eq!(RoutePolicy::skip_login(&session), Some(role.dashboard_path()));
            assert_eq!(RoutePolicy::skip_login(&session.snapshot()), Some(role.dashboard_path()));
        }
    }

    #[test]
    fn test_public_and_unknown_paths() {
        let anonymous = SessionStore::new(MemoryStore::new());
        for path in [LOGIN_PATH, REGISTER_PATH, UNAUTHORIZED_PATH] {
            assert_eq!(RoutePolicy::navigate(&anonymous, path), Decision::Render);
        }
        assert_eq!(RoutePolicy::navigate(&anonymous, "/nope"), Decision::Redirect(ROOT_PATH));
        assert_eq!(
            RoutePolicy::navigate(&signed_in(Some(Role::Admin)), "/admin/extra"),
            Decision::Redirect(ROOT_PATH)
        );
    }
}
