// ============================
// catalog-backend/src/auth/mod.rs
// ============================
//! Authentication and authorization.

pub mod middleware;
pub mod password;
pub mod policy;
pub mod service;
pub mod token;

use serde::{Deserialize, Serialize};

pub use middleware::{authenticate, authorize, CurrentUser};
pub use password::{hash_password, hash_password_secure, verify_password};
pub use policy::AccessPolicy;
pub use service::AuthService;
pub use token::{Claims, TokenCodec};

/// Access role attached to an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Admin,
}

/// Identity established for a request by the authentication middleware.
///
/// Lives in the request extensions and is dropped with the request.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: u64,
    pub username: String,
    pub roles: Vec<Role>,
}

impl AuthContext {
    /// Set-membership check; roles carry no hierarchy.
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}
