// ============================
// catalog-backend/src/auth/service.rs
// ============================
//! Registration and login orchestration.

use std::sync::Arc;

use metrics::counter;
use tracing::{info, warn};
use zeroize::Zeroize;

use catalog_common::{AuthResponse, LoginRequest, RegisterRequest};

use crate::auth::token::TokenCodec;
use crate::auth::{password, Role};
use crate::error::AppError;
use crate::metrics::{AUTH_LOGIN_FAILED, AUTH_LOGIN_OK, AUTH_REGISTERED};
use crate::store::{NewUser, UserStore};

/// Orchestrates credential registration and login.
pub struct AuthService {
    users: Arc<dyn UserStore>,
    tokens: Arc<TokenCodec>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, tokens: Arc<TokenCodec>) -> Self {
        Self { users, tokens }
    }

    /// Register a new account and issue its first token.
    pub async fn register(&self, mut request: RegisterRequest) -> Result<AuthResponse, AppError> {
        if self.users.username_exists(&request.username).await? {
            return Err(AppError::UsernameTaken);
        }

        let password_hash = password::hash_password_secure(&mut request.password)
            .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))?;

        // the insert re-checks uniqueness atomically; a lost race surfaces
        // as the same conflict
        let user = self
            .users
            .insert(NewUser {
                username: request.username,
                email: request.email,
                password_hash,
                enabled: true,
                roles: vec![Role::User],
            })
            .await?;

        let token = self.tokens.issue(&user.username)?;
        counter!(AUTH_REGISTERED).increment(1);
        info!(event = "auth.registered", username = %user.username, "account created");

        Ok(AuthResponse {
            token,
            username: user.username,
            email: user.email,
        })
    }

    /// Verify credentials and issue a token.
    ///
    /// Unknown username, disabled account, and wrong password are
    /// indistinguishable to the caller.
    pub async fn login(&self, mut request: LoginRequest) -> Result<AuthResponse, AppError> {
        let user = match self.users.find_by_username(&request.username).await? {
            Some(user) if user.enabled => user,
            _ => {
                counter!(AUTH_LOGIN_FAILED).increment(1);
                warn!(event = "auth.login.failed", username = %request.username, "login rejected");
                return Err(AppError::InvalidCredentials);
            }
        };

        let verified = password::verify_password(&user.password_hash, &request.password);
        request.password.zeroize();
        if !verified {
            counter!(AUTH_LOGIN_FAILED).increment(1);
            warn!(event = "auth.login.failed", username = %request.username, "login rejected");
            return Err(AppError::InvalidCredentials);
        }

        let token = self.tokens.issue(&user.username)?;
        counter!(AUTH_LOGIN_OK).increment(1);
        info!(event = "auth.login.ok", username = %user.username, "login succeeded");

        Ok(AuthResponse {
            token,
            username: user.username,
            email: user.email,
        })
    }
}
