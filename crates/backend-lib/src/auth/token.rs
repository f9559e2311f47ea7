// ============================
// catalog-backend/src/auth/token.rs
// ============================
//! Stateless bearer token issuance and validation.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::JwtSettings;
use crate::error::AppError;

/// Claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the username the token was issued to
    pub sub: String,
    /// Issue time, seconds since the epoch
    pub iat: i64,
    /// Expiry, seconds since the epoch
    pub exp: i64,
}

/// Encodes and validates signed, time-bounded access tokens.
///
/// Validation is self-contained: signature plus expiry, no store access.
/// Safe to share across request tasks without synchronization.
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: i64,
}

impl TokenCodec {
    pub fn new(settings: &JwtSettings) -> Self {
        Self {
            encoding: EncodingKey::from_secret(settings.secret.as_bytes()),
            decoding: DecodingKey::from_secret(settings.secret.as_bytes()),
            ttl_secs: settings.ttl_secs as i64,
        }
    }

    /// Issue a token for `subject`, valid from now for the configured TTL.
    pub fn issue(&self, subject: &str) -> Result<String, AppError> {
        self.issue_at(subject, Utc::now().timestamp())
    }

    /// Issue a token with an explicit issue time.
    pub fn issue_at(&self, subject: &str, issued_at: i64) -> Result<String, AppError> {
        let claims = Claims {
            sub: subject.to_string(),
            iat: issued_at,
            exp: issued_at + self.ttl_secs,
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AppError::Internal(format!("token encoding failed: {e}")))
    }

    /// Validate a token and return its claims.
    ///
    /// The expiry comparison is inclusive: a token checked exactly at its
    /// expiry instant is already expired.
    pub fn validate(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // expiry is compared below; jsonwebtoken's own bound is exclusive
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let data =
            decode::<Claims>(token, &self.decoding, &validation).map_err(|_| AppError::InvalidToken)?;

        if Utc::now().timestamp() >= data.claims.exp {
            return Err(AppError::ExpiredToken);
        }

        Ok(data.claims)
    }
}
