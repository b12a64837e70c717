//! Site page handlers.
//!
//! Every catalog path is served from its template. The home page gets a
//! random greeting. The same handler is the router fallback, so trailing
//! slashes still resolve and anything else is a 404.

use axum::extract::State;
use axum::http::Uri;
use axum::response::Html;

use werkstatt_types::error::PageError;

use crate::http::error::AppError;
use crate::state::AppState;

/// GET /{page} - Render the page registered for the request path.
pub async fn page(State(state): State<AppState>, uri: Uri) -> Result<Html<String>, AppError> {
    let path = uri.path();
    let page = state
        .catalog
        .find(path)
        .ok_or_else(|| PageError::NotFound(path.to_string()))?;

    let greeting = page.has_greeting().then(|| state.engine.greeting());
    let html = state.templates.render(page, greeting).await?;

    tracing::debug!(path, template = page.template, "page rendered");
    Ok(Html(html))
}
