//! Axum router configuration with middleware.
//!
//! Routes: every catalog page (GET), `POST /ask`, `GET /health`.
//! Static assets are served under `/static` when the configured directory
//! exists. Middleware: CORS, tracing.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/ask", post(handlers::ask::ask))
        .route("/health", get(health_check));

    for page in state.catalog.all() {
        router = router.route(page.path, get(handlers::pages::page));
    }

    let static_dir = state.config.server.static_dir.clone();
    if std::path::Path::new(&static_dir).exists() {
        router = router.nest_service("/static", ServeDir::new(&static_dir));
        tracing::info!(path = %static_dir, "static file serving enabled");
    } else {
        tracing::warn!(path = %static_dir, "static directory missing, /static disabled");
    }

    router
        .fallback(handlers::pages::page)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
