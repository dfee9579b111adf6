use crate::handlers::{issue_upload_url, preflight};
use crate::state::AppState;
use axum::{routing::post, Router};
use std::sync::Arc;

/// Build the issuer router.
///
/// API Gateway forwards the stage and resource path, which differ per deployment, so
/// the handlers are mounted on every path.
pub fn router(state: Arc<AppState>) -> Router {
    let upload = post(issue_upload_url).options(preflight);

    Router::new()
        .route("/", upload.clone())
        .route("/{*path}", upload)
        .with_state(state)
}
