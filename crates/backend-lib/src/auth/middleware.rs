// ============================
// catalog-backend/src/auth/middleware.rs
// ============================
//! Per-request authentication and route authorization.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use metrics::counter;
use tracing::warn;

use crate::auth::policy::AccessPolicy;
use crate::auth::AuthContext;
use crate::error::AppError;
use crate::metrics::AUTH_TOKEN_REJECTED;
use crate::AppState;

/// Establish the request identity from a bearer token.
///
/// Public routes pass through anonymously; everything else requires a valid
/// token whose subject resolves to an enabled account. One pass, no retries:
/// a failed validation terminates the request.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let token = match header.and_then(|value| value.strip_prefix("Bearer ")) {
        Some(token) => token,
        None => {
            if AccessPolicy::is_public(request.uri().path()) {
                return Ok(next.run(request).await);
            }
            counter!(AUTH_TOKEN_REJECTED).increment(1);
            return Err(AppError::MissingCredential);
        }
    };

    let claims = match state.tokens.validate(token) {
        Ok(claims) => claims,
        Err(err) => {
            counter!(AUTH_TOKEN_REJECTED).increment(1);
            warn!(event = "auth.token.rejected", "bearer token rejected");
            return Err(err);
        }
    };

    let user = match state.users.find_by_username(&claims.sub).await? {
        Some(user) if user.enabled => user,
        _ => {
            counter!(AUTH_TOKEN_REJECTED).increment(1);
            warn!(event = "auth.token.rejected", subject = %claims.sub, "token subject unresolvable");
            return Err(AppError::InvalidToken);
        }
    };

    request.extensions_mut().insert(AuthContext {
        user_id: user.id,
        username: user.username,
        roles: user.roles,
    });

    Ok(next.run(request).await)
}

/// Enforce the static role table after authentication.
pub async fn authorize(request: Request, next: Next) -> Result<Response, AppError> {
    let context = request.extensions().get::<AuthContext>();
    AccessPolicy::check(context, request.method(), request.uri().path())?;
    Ok(next.run(request).await)
}

/// Access the authenticated caller from a handler.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub AuthContext);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .map(CurrentUser)
            .ok_or(AppError::MissingCredential)
    }
}
