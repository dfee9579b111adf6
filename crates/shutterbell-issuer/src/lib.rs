//! Presigned upload URL issuer.
//!
//! An axum router served through `lambda_http`, so the same router runs behind
//! API Gateway and under `axum-test` in the integration tests.

pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;
