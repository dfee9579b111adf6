//! Response helpers that attach the CORS header set browsers need to call the
//! issuer directly from a static page.

use axum::{
    http::{header, HeaderName, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Headers sent with successful and client-error responses
pub fn cors_headers() -> [(HeaderName, &'static str); 3] {
    [
        (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        (header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
    ]
}

/// Headers sent with server-error responses
pub fn origin_only_headers() -> [(HeaderName, &'static str); 1] {
    [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")]
}

/// JSON body with a status and the full CORS header set
#[derive(Debug)]
pub struct CorsJson<T>(pub StatusCode, pub T);

impl<T: Serialize> IntoResponse for CorsJson<T> {
    fn into_response(self) -> Response {
        let CorsJson(status, body) = self;
        (status, cors_headers(), Json(body)).into_response()
    }
}
