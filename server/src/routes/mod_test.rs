use axum::body::Body;
use axum::http::{Method, Request};
use http_body_util::BodyExt;
use tower::ServiceExt;

use super::*;
use crate::state::test_helpers::test_app_state;

async fn send(method: Method, uri: &str, body: Option<serde_json::Value>) -> (StatusCode, serde_json::Value) {
    let app = api_routes(test_app_state(), "*");
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            req = req.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let resp = app.oneshot(req.body(body).unwrap()).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() { serde_json::Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, value)
}

#[test]
fn allowed_origins_star_means_any() {
    assert_eq!(allowed_origins("*"), None);
    assert_eq!(allowed_origins(" * "), None);
}

#[test]
fn allowed_origins_parses_list() {
    let origins = allowed_origins("https://a.example, https://b.example,,").unwrap();
    assert_eq!(origins, vec![HeaderValue::from_static("https://a.example"), HeaderValue::from_static("https://b.example")]);
}

#[test]
fn error_body_wraps_message() {
    let (status, Json(body)) = error_body(StatusCode::UNPROCESSABLE_ENTITY, "name is required");
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, json!({ "error": "name is required" }));
}

#[tokio::test]
async fn healthz_is_ok() {
    let (status, _) = send(Method::GET, "/healthz", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn api_root_returns_welcome_message() {
    let (status, body) = send(Method::GET, "/api/", None).await;
    assert_eq!(status, StatusCode::OK);
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("Portfolio API"));
}

#[tokio::test]
async fn contact_with_blank_field_is_unprocessable() {
    let payload = json!({ "name": "Ada", "email": "ada@example.com", "subject": "  ", "message": "Hi" });
    let (status, body) = send(Method::POST, "/api/contact", Some(payload)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, json!({ "error": "subject is required" }));
}

#[tokio::test]
async fn contact_with_bad_email_is_unprocessable() {
    let payload = json!({ "name": "Ada", "email": "nope", "subject": "Hi", "message": "Hello" });
    let (status, body) = send(Method::POST, "/api/contact", Some(payload)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, json!({ "error": "invalid email" }));
}

#[tokio::test]
async fn contact_with_empty_object_names_first_field() {
    let (status, body) = send(Method::POST, "/api/contact", Some(json!({}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, json!({ "error": "name is required" }));
}

#[tokio::test]
async fn create_project_without_title_is_unprocessable() {
    let payload = json!({ "title": "", "description": "Something" });
    let (status, body) = send(Method::POST, "/api/projects", Some(payload)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, json!({ "error": "invalid project: title is required" }));
}

#[tokio::test]
async fn unknown_api_path_is_not_found() {
    let (status, _) = send(Method::GET, "/api/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
