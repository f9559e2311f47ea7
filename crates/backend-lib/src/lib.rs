// ============================
// catalog-backend/src/lib.rs
// ============================
//! Core library for the product catalog backend.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod router;
pub mod store;
pub mod validation;

use std::sync::Arc;

use crate::auth::service::AuthService;
use crate::auth::token::TokenCodec;
use crate::config::Settings;
use crate::store::memory::{MemoryProductStore, MemoryUserStore};
use crate::store::{ProductStore, UserStore};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth: Arc<AuthService>,
    /// Token codec
    pub tokens: Arc<TokenCodec>,
    /// User store
    pub users: Arc<dyn UserStore>,
    /// Product store
    pub products: Arc<dyn ProductStore>,
    /// Settings, loaded once at startup
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Create a new application state with in-memory stores.
    pub fn new(settings: Settings) -> Self {
        let users: Arc<dyn UserStore> = Arc::new(MemoryUserStore::new());
        let products: Arc<dyn ProductStore> = Arc::new(MemoryProductStore::new());
        let tokens = Arc::new(TokenCodec::new(&settings.jwt));
        let auth = Arc::new(AuthService::new(users.clone(), tokens.clone()));

        Self {
            auth,
            tokens,
            users,
            products,
            settings: Arc::new(settings),
        }
    }
}
