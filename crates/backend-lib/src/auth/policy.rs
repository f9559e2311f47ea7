// ============================
// catalog-backend/src/auth/policy.rs
// ============================
//! Declarative route access rules.

use axum::http::Method;

use crate::auth::{AuthContext, Role};
use crate::error::AppError;

/// Routes reachable without credentials.
const PUBLIC_ROUTES: &[&str] = &["/api/auth/register", "/api/auth/login"];

/// (path pattern, method, required role); `{...}` segments match any value.
const RULES: &[(&str, Method, Role)] = &[
    ("/api/products", Method::POST, Role::Admin),
    ("/api/products/{id}", Method::PUT, Role::Admin),
    ("/api/products/{id}", Method::DELETE, Role::Admin),
];

/// Static access rule table, evaluated after authentication and before the
/// handler runs.
pub struct AccessPolicy;

impl AccessPolicy {
    /// Whether the route may be reached without credentials.
    pub fn is_public(path: &str) -> bool {
        PUBLIC_ROUTES.contains(&path)
    }

    /// The role a rule demands for this request, if any.
    pub fn required_role(method: &Method, path: &str) -> Option<Role> {
        RULES
            .iter()
            .find(|(pattern, rule_method, _)| {
                rule_method == method && pattern_matches(pattern, path)
            })
            .map(|(_, _, role)| *role)
    }

    /// Check a request against the rule table.
    ///
    /// Public routes always pass; every other route requires an
    /// authenticated context, and matched rules additionally require the
    /// named role. Membership only, no hierarchy between roles.
    pub fn check(
        context: Option<&AuthContext>,
        method: &Method,
        path: &str,
    ) -> Result<(), AppError> {
        if Self::is_public(path) {
            return Ok(());
        }

        let Some(context) = context else {
            return Err(AppError::MissingCredential);
        };

        if let Some(role) = Self::required_role(method, path) {
            if !context.has_role(role) {
                return Err(AppError::Forbidden);
            }
        }

        Ok(())
    }
}

/// Match a path against a pattern; `{...}` segments match any single
/// non-empty segment.
fn pattern_matches(pattern: &str, path: &str) -> bool {
    let mut pattern_segments = pattern.trim_matches('/').split('/');
    let mut path_segments = path.trim_matches('/').split('/');

    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return true,
            (Some(expected), Some(actual)) => {
                let wildcard = expected.starts_with('{') && expected.ends_with('}');
                if wildcard {
                    if actual.is_empty() {
                        return false;
                    }
                } else if expected != actual {
                    return false;
                }
            }
            _ => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(roles: Vec<Role>) -> AuthContext {
        AuthContext {
            user_id: 1,
            username: "alice".to_string(),
            roles,
        }
    }

    #[test]
    fn auth_routes_are_public() {
        assert!(AccessPolicy::is_public("/api/auth/register"));
        assert!(AccessPolicy::is_public("/api/auth/login"));
        assert!(!AccessPolicy::is_public("/api/products"));
    }

    #[test]
    fn mutations_require_admin() {
        assert_eq!(
            AccessPolicy::required_role(&Method::POST, "/api/products"),
            Some(Role::Admin)
        );
        assert_eq!(
            AccessPolicy::required_role(&Method::PUT, "/api/products/42"),
            Some(Role::Admin)
        );
        assert_eq!(
            AccessPolicy::required_role(&Method::DELETE, "/api/products/42"),
            Some(Role::Admin)
        );
    }

    #[test]
    fn reads_have_no_role_rule() {
        assert_eq!(AccessPolicy::required_role(&Method::GET, "/api/products"), None);
        assert_eq!(
            AccessPolicy::required_role(&Method::GET, "/api/products/42"),
            None
        );
    }

    #[test]
    fn pattern_wildcard_matches_one_segment() {
        assert!(pattern_matches("/api/products/{id}", "/api/products/42"));
        assert!(!pattern_matches("/api/products/{id}", "/api/products"));
        assert!(!pattern_matches("/api/products/{id}", "/api/products/42/extra"));
        assert!(!pattern_matches("/api/products/{id}", "/api/orders/42"));
    }

    #[test]
    fn check_rejects_anonymous_protected_requests() {
        let err = AccessPolicy::check(None, &Method::GET, "/api/products").unwrap_err();
        assert!(matches!(err, AppError::MissingCredential));
    }

    #[test]
    fn check_passes_public_routes_without_context() {
        assert!(AccessPolicy::check(None, &Method::POST, "/api/auth/login").is_ok());
    }

    #[test]
    fn check_enforces_role_membership() {
        let user = context(vec![Role::User]);
        let admin = context(vec![Role::User, Role::Admin]);

        assert!(matches!(
            AccessPolicy::check(Some(&user), &Method::POST, "/api/products").unwrap_err(),
            AppError::Forbidden
        ));
        assert!(AccessPolicy::check(Some(&admin), &Method::POST, "/api/products").is_ok());
        assert!(AccessPolicy::check(Some(&user), &Method::GET, "/api/products").is_ok());
    }

    #[test]
    fn admin_only_grants_what_it_names() {
        // no hierarchy: a bare Admin role set still passes only Admin rules
        let admin_only = context(vec![Role::Admin]);
        assert!(AccessPolicy::check(Some(&admin_only), &Method::POST, "/api/products").is_ok());
        assert!(!admin_only.has_role(Role::User));
    }
}
