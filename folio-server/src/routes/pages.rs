//! Rendered page routes

use axum::{
    extract::{Path, State},
    http::Uri,
    response::Html,
    routing::get,
    Router,
};
use folio_core::Page;

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

/// GET /
async fn index(State(state): State<AppState>) -> ServerResult<Html<String>> {
    serve_page(&state, Page::index(), "/")
}

/// GET /{slug}, /{slug}/ and /{slug}/index.html
async fn page_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ServerResult<Html<String>> {
    let page = slug
        .parse::<Page>()
        .map_err(|_| ServerError::NotFound(format!("/{slug}")))?;
    serve_page(&state, page, &slug)
}

/// Fallback for anything no route matched
pub async fn not_found(uri: Uri) -> ServerError {
    ServerError::NotFound(uri.path().to_string())
}

fn serve_page(state: &AppState, page: Page, requested: &str) -> ServerResult<Html<String>> {
    let html = state
        .page(page)
        .ok_or_else(|| ServerError::NotFound(requested.to_string()))?;
    tracing::debug!(page = %page, "serving page");
    Ok(Html(html.to_string()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/index.html", get(index))
        .route("/{slug}", get(page_by_slug))
        .route("/{slug}/", get(page_by_slug))
        .route("/{slug}/index.html", get(page_by_slug))
}
