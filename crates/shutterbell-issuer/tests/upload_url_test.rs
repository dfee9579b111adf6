mod helpers;

use axum::http::{header, Method};
use helpers::{setup_test_app, setup_test_app_with, MockSigner, TEST_BUCKET};
use serde_json::{json, Value};
use std::time::Duration;

#[tokio::test]
async fn test_issue_upload_url() {
    let app = setup_test_app();

    let response = app
        .server
        .post("/")
        .json(&json!({ "fileName": "cat.png", "fileType": "image/png" }))
        .await;

    assert_eq!(response.status_code(), 200);

    let data: Value = response.json();
    assert_eq!(data["fileName"], "uploads/20240506_070809_cat.png");
    assert_eq!(data["expiresIn"], 3600);
    let url = data["presignedUrl"].as_str().unwrap();
    assert!(url.contains("uploads/20240506_070809_cat.png"));
    assert!(url.contains(TEST_BUCKET));

    let calls = app.signer.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].bucket, TEST_BUCKET);
    assert_eq!(calls[0].key, "uploads/20240506_070809_cat.png");
    assert_eq!(calls[0].content_type, "image/png");
    assert_eq!(calls[0].expires_in, Duration::from_secs(3600));
}

#[tokio::test]
async fn test_success_carries_cors_headers() {
    let app = setup_test_app();

    let response = app
        .server
        .post("/")
        .json(&json!({ "fileName": "cat.png" }))
        .await;

    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST, OPTIONS");
}

#[tokio::test]
async fn test_content_type_defaults_to_jpeg() {
    let app = setup_test_app();

    for body in [
        json!({ "fileName": "a.jpg" }),
        json!({ "fileName": "a.jpg", "fileType": "" }),
        json!({ "fileName": "a.jpg", "fileType": null }),
    ] {
        let response = app.server.post("/").json(&body).await;
        assert_eq!(response.status_code(), 200);
    }

    let calls = app.signer.calls();
    assert_eq!(calls.len(), 3);
    assert!(calls.iter().all(|call| call.content_type == "image/jpeg"));
}

#[tokio::test]
async fn test_file_name_with_spaces_is_kept_verbatim() {
    let app = setup_test_app();

    let response = app
        .server
        .post("/")
        .json(&json!({ "fileName": "my photo.jpg" }))
        .await;

    assert_eq!(response.status_code(), 200);
    let data: Value = response.json();
    assert_eq!(data["fileName"], "uploads/20240506_070809_my photo.jpg");
}

#[tokio::test]
async fn test_missing_file_name_is_rejected() {
    let app = setup_test_app();

    for body in [
        json!({ "fileType": "image/png" }),
        json!({ "fileName": "" }),
        json!({ "fileName": null }),
    ] {
        let response = app.server.post("/").json(&body).await;

        assert_eq!(response.status_code(), 400);
        let data: Value = response.json();
        assert_eq!(data, json!({ "error": "fileName is required" }));
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS],
            "POST, OPTIONS"
        );
    }

    assert!(app.signer.calls().is_empty());
}

#[tokio::test]
async fn test_empty_body_is_missing_file_name() {
    let app = setup_test_app();

    let response = app.server.post("/").await;

    assert_eq!(response.status_code(), 400);
    let data: Value = response.json();
    assert_eq!(data["error"], "fileName is required");
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let app = setup_test_app();

    let response = app.server.post("/").text("{not json").await;

    assert_eq!(response.status_code(), 400);
    let data: Value = response.json();
    assert!(data["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request body:"));
    assert!(app.signer.calls().is_empty());
}

#[tokio::test]
async fn test_body_without_json_content_type_is_accepted() {
    let app = setup_test_app();

    let response = app
        .server
        .post("/")
        .text(r#"{"fileName":"dog.gif","fileType":"image/gif"}"#)
        .await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(app.signer.calls()[0].content_type, "image/gif");
}

#[tokio::test]
async fn test_missing_bucket_is_server_error() {
    let app = setup_test_app_with(None, MockSigner::default());

    let response = app
        .server
        .post("/")
        .json(&json!({ "fileName": "cat.png" }))
        .await;

    assert_eq!(response.status_code(), 500);
    let data: Value = response.json();
    assert!(data["error"]
        .as_str()
        .unwrap()
        .starts_with("Internal server error:"));

    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert!(headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).is_none());
    assert!(app.signer.calls().is_empty());
}

#[tokio::test]
async fn test_blank_bucket_is_server_error() {
    let app = setup_test_app_with(Some("   "), MockSigner::default());

    let response = app
        .server
        .post("/")
        .json(&json!({ "fileName": "cat.png" }))
        .await;

    assert_eq!(response.status_code(), 500);
}

#[tokio::test]
async fn test_signer_failure_is_server_error() {
    let app = setup_test_app_with(Some(TEST_BUCKET), MockSigner::failing("no credentials"));

    let response = app
        .server
        .post("/")
        .json(&json!({ "fileName": "cat.png" }))
        .await;

    assert_eq!(response.status_code(), 500);
    let data: Value = response.json();
    assert_eq!(
        data["error"],
        "Internal server error: S3 error: no credentials"
    );
}

#[tokio::test]
async fn test_preflight() {
    let app = setup_test_app();

    let response = app.server.method(Method::OPTIONS, "/").await;

    assert_eq!(response.status_code(), 204);
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST, OPTIONS");
    assert!(app.signer.calls().is_empty());
}

#[tokio::test]
async fn test_stage_path_is_served() {
    let app = setup_test_app();

    let response = app
        .server
        .post("/prod/upload-url")
        .json(&json!({ "fileName": "cat.png" }))
        .await;
    assert_eq!(response.status_code(), 200);

    let preflight = app.server.method(Method::OPTIONS, "/prod/upload-url").await;
    assert_eq!(preflight.status_code(), 204);
}
