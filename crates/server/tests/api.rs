use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use server::routes::build_router;
use server::state::ServerState;
use service::MemStore;

fn app() -> Router {
    let state = ServerState { store: Arc::new(MemStore::new()) };
    build_router(state, CorsLayer::very_permissive())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).expect("request")
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn body_json(res: axum::response::Response) -> Value {
    let bytes = res.into_body().collect().await.expect("body").to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn health_reports_ok() {
    let res = app().oneshot(get("/health")).await.expect("response");
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await, json!({"status": "ok"}));
}

#[tokio::test]
async fn contact_with_short_message_is_rejected_with_details() {
    let body = json!({"name": "Jo", "email": "jo@example.com", "message": "short"});
    let app = app();
    let res = app.clone().oneshot(post_json("/api/contact", &body)).await.expect("response");
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let json = body_json(res).await;
    assert_eq!(json["error"], "Validation error");
    let details = json["details"].as_array().expect("details array");
    assert_eq!(details.len(), 1);
    assert_eq!(details[0]["field"], "message");

    // The rejected submission never reached storage: the next valid
    // one gets the first id.
    let ok = json!({
        "name": "Alex Doe",
        "email": "alex@example.com",
        "message": "This is a sufficiently long message."
    });
    let res = app.oneshot(post_json("/api/contact", &ok)).await.expect("response");
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(body_json(res).await["messageId"], 1);
}

#[tokio::test]
async fn contact_happy_path_returns_ack_with_id() {
    let body = json!({
        "name": "Alex Doe",
        "email": "alex@example.com",
        "message": "This is a sufficiently long message."
    });
    let res = app().oneshot(post_json("/api/contact", &body)).await.expect("response");
    assert_eq!(res.status(), StatusCode::CREATED);

    let json = body_json(res).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["messageId"], 1);
    assert_eq!(json["message"], "Your message has been sent successfully.");
}

#[tokio::test]
async fn non_numeric_project_id_is_bad_request() {
    let res = app().oneshot(get("/api/projects/abc")).await.expect("response");
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(res).await, json!({"error": "Invalid project ID"}));
}

#[tokio::test]
async fn unknown_skill_id_is_not_found() {
    let res = app().oneshot(get("/api/skills/999")).await.expect("response");
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(res).await, json!({"error": "Skill not found"}));
}

#[tokio::test]
async fn non_numeric_skill_id_is_bad_request() {
    let res = app().oneshot(get("/api/skills/latest")).await.expect("response");
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(res).await, json!({"error": "Invalid skill ID"}));
}

#[tokio::test]
async fn project_create_then_fetch_roundtrip() {
    let app = app();
    let body = json!({
        "title": "Portfolio",
        "description": "Personal site",
        "tags": ["rust", "axum"],
        "link": "https://example.com"
    });
    let res = app.clone().oneshot(post_json("/api/projects", &body)).await.expect("response");
    assert_eq!(res.status(), StatusCode::CREATED);
    let created = body_json(res).await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["title"], "Portfolio");
    assert_eq!(created["tags"], json!(["rust", "axum"]));
    assert!(created["createdAt"].is_string());
    assert!(created["image"].is_null());

    let res = app.clone().oneshot(get("/api/projects/1")).await.expect("response");
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await, created);

    let res = app.oneshot(get("/api/projects")).await.expect("response");
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await, json!([created]));
}

#[tokio::test]
async fn project_listing_starts_empty() {
    let res = app().oneshot(get("/api/projects")).await.expect("response");
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await, json!([]));
}

#[tokio::test]
async fn invalid_project_reports_every_violation() {
    let body = json!({"description": ""});
    let res = app().oneshot(post_json("/api/projects", &body)).await.expect("response");
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let json = body_json(res).await;
    assert_eq!(json["error"], "Validation error");
    let fields: Vec<&str> = json["details"]
        .as_array()
        .expect("details array")
        .iter()
        .map(|d| d["field"].as_str().expect("field"))
        .collect();
    assert_eq!(fields, vec!["title", "description"]);
}

#[tokio::test]
async fn skill_create_returns_created_record() {
    let body = json!({"name": "Rust", "icon": "rust.svg", "proficiency": 90});
    let res = app().oneshot(post_json("/api/skills", &body)).await.expect("response");
    assert_eq!(res.status(), StatusCode::CREATED);

    let created = body_json(res).await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["proficiency"], 90);
    assert!(created["category"].is_null());
}

#[tokio::test]
async fn skill_validation_failure_lists_fields() {
    let body = json!({"name": "n".repeat(51), "proficiency": "high"});
    let res = app().oneshot(post_json("/api/skills", &body)).await.expect("response");
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let json = body_json(res).await;
    let fields: Vec<&str> = json["details"]
        .as_array()
        .expect("details array")
        .iter()
        .map(|d| d["field"].as_str().expect("field"))
        .collect();
    assert_eq!(fields, vec!["name", "icon", "proficiency"]);
}

#[tokio::test]
async fn non_object_contact_body_is_validation_error() {
    let body = json!(["not", "an", "object"]);
    let res = app().oneshot(post_json("/api/contact", &body)).await.expect("response");
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let json = body_json(res).await;
    assert_eq!(json["error"], "Validation error");
}
