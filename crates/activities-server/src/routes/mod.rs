//! HTTP route handlers.

pub mod activities;
mod error;

use std::sync::Arc;

use axum::response::Redirect;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub use error::ApiError;

/// Build the main Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(|| async { Redirect::temporary("/static/index.html") }))
        .merge(activities::routes())
        .nest_service("/static", static_files)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
