//! Axum router configuration with middleware.
//!
//! All API routes are under `/api/`. Middleware: session cookie
//! resolution/re-issue, CORS, tracing.
//!
//! In production the static front-end is served from a directory named by
//! `CLARITY_WEB_DIR` if it exists. API routes take priority; unknown
//! `/api/*` paths 404 from inside the nest so they still carry the
//! session cookie. OPTIONS preflights are answered by the CORS layer.

use axum::http::{header, Method, StatusCode};
use axum::routing::{get, post};
use axum::{middleware, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::http::{handlers, session};
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route("/chat", post(handlers::conversation::chat))
        .route("/history", get(handlers::conversation::history))
        .route("/reset", post(handlers::conversation::reset))
        .fallback(api_not_found)
        .layer(middleware::from_fn(session::attach));

    let mut router = Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Serve the static front-end from disk if the directory exists.
    // API routes take priority; unknown paths fall through to index.html.
    let web_dir = std::env::var("CLARITY_WEB_DIR").unwrap_or_else(|_| "web".to_string());
    if std::path::Path::new(&web_dir).exists() {
        let index_path = format!("{web_dir}/index.html");
        let serve_dir = ServeDir::new(&web_dir).fallback(ServeFile::new(index_path));
        router = router.fallback_service(serve_dir);
        tracing::info!(path = %web_dir, "static file serving enabled");
    }

    router
}

/// Unknown `/api/*` paths yield a plain 404.
async fn api_not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}
