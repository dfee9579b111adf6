use crate::error::{HttpAppError, LenientJson};
use crate::response::{cors_headers, CorsJson};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use shutterbell_core::constants::UPLOAD_URL_EXPIRES_IN_SECS;
use shutterbell_core::models::{UploadUrlRequest, UploadUrlResponse};
use shutterbell_storage::upload_object_key;
use std::sync::Arc;
use std::time::Duration;

/// Issue a presigned PUT URL for a direct browser upload
#[tracing::instrument(skip(state, request), fields(operation = "issue_upload_url"))]
pub async fn issue_upload_url(
    State(state): State<Arc<AppState>>,
    LenientJson(request): LenientJson<UploadUrlRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let file_name = request.file_name()?;
    let content_type = request.content_type();
    let bucket = state.config.bucket()?;

    let object_key = upload_object_key(file_name, (state.clock)());

    let presigned_url = state
        .signer
        .presigned_put_url(
            bucket,
            &object_key,
            content_type,
            Duration::from_secs(UPLOAD_URL_EXPIRES_IN_SECS),
        )
        .await?;

    tracing::info!(
        bucket = %bucket,
        key = %object_key,
        content_type = %content_type,
        "Issued presigned upload URL"
    );

    Ok(CorsJson(
        StatusCode::OK,
        UploadUrlResponse {
            presigned_url,
            object_key,
            expires_in: UPLOAD_URL_EXPIRES_IN_SECS,
        },
    ))
}

/// Answer a CORS preflight
pub async fn preflight() -> impl IntoResponse {
    (StatusCode::NO_CONTENT, cors_headers())
}
