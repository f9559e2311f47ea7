// ==============
// catalog-backend/src/metrics.rs

//! Central place for Prometheus metric keys
pub const AUTH_REGISTERED: &str = "auth.registered";
pub const AUTH_LOGIN_OK: &str = "auth.login.ok";
pub const AUTH_LOGIN_FAILED: &str = "auth.login.failed";
pub const AUTH_TOKEN_REJECTED: &str = "auth.token.rejected";
pub const PRODUCT_CREATED: &str = "product.created";
pub const PRODUCT_DELETED: &str = "product.deleted";
