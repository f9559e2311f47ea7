// ============================
// catalog-backend/src/router.rs
// ============================
//! HTTP router assembly.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::auth::middleware::{authenticate, authorize};
use crate::handlers;
use crate::AppState;

/// Build the service router.
///
/// `authenticate` runs first and establishes the request identity;
/// `authorize` then checks the access rule table before any handler.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/auth/register", post(handlers::auth::register))
        .route("/api/auth/login", post(handlers::auth::login))
        .route(
            "/api/products",
            post(handlers::products::create).get(handlers::products::list),
        )
        .route(
            "/api/products/{id}",
            get(handlers::products::get)
                .put(handlers::products::update)
                .delete(handlers::products::delete),
        )
        // layers run outermost-last: authenticate wraps authorize
        .layer(middleware::from_fn(authorize))
        .layer(middleware::from_fn_with_state(state.clone(), authenticate))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
