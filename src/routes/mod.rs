//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the admin entry redirect, the current-user API, and the health probe
//! under a single Axum router with request tracing.

pub mod admin;
pub mod auth;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::paths;
use crate::state::AppState;

/// Full application router.
#[must_use]
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route(paths::AUTH_ME, get(auth::me))
        .layer(cors);

    Router::new()
        .route(paths::ADMIN_ROOT, get(admin::admin_root))
        .route(&format!("{}/", paths::ADMIN_ROOT), get(admin::admin_root))
        .route(paths::HEALTHZ, get(healthz))
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
