use axum::Router;

/// No handlers are wired up yet; the group only reserves its mount point, so
/// every request under it falls through to the 404 fallback.
pub fn auth_routes() -> Router {
    Router::new()
}
