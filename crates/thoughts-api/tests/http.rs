use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use bson::oid::ObjectId;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use thoughts_api::{AppStateInner, router};
use thoughts_db::MemoryStore;

fn test_router() -> Router {
    router(Arc::new(AppStateInner {
        store: Box::new(MemoryStore::new()),
    }))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    };
    (status, value)
}

#[tokio::test]
async fn index_lists_routes_as_plain_text() {
    let app = test_router();
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("GET    /thoughts"));
    assert!(text.contains("PATCH  /thoughts/{id}/like"));
}

#[tokio::test]
async fn post_like_get_lifecycle() {
    let app = test_router();

    let (status, body) = send(
        &app,
        "POST",
        "/thoughts",
        Some(json!({"message": "Today was great!"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["response"]["message"], json!("Today was great!"));
    assert_eq!(body["response"]["hearts"], json!(0));
    assert!(body["response"]["createdAt"].is_string());
    let id = body["response"]["id"].as_str().unwrap().to_owned();
    assert!(ObjectId::parse_str(&id).is_ok());

    let (status, body) = send(&app, "PATCH", &format!("/thoughts/{id}/like"), None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["response"]["hearts"], json!(1));

    let (status, body) = send(&app, "GET", &format!("/thoughts/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["response"]["hearts"], json!(1));
    assert_eq!(body["response"]["id"], json!(id));
}

#[tokio::test]
async fn create_trims_whitespace() {
    let app = test_router();
    let (status, body) = send(
        &app,
        "POST",
        "/thoughts",
        Some(json!({"message": "  a trimmed thought  "})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["response"]["message"], json!("a trimmed thought"));
}

#[tokio::test]
async fn create_rejects_out_of_bounds_messages() {
    let app = test_router();

    let (status, body) = send(&app, "POST", "/thoughts", Some(json!({"message": "hey"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert!(body["response"].as_str().unwrap().contains("too short"));

    let long = "x".repeat(121);
    let (status, body) = send(&app, "POST", "/thoughts", Some(json!({"message": long}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert!(body["response"].as_str().unwrap().contains("too long"));

    // Nothing was persisted by the rejected requests.
    let (_, body) = send(&app, "GET", "/thoughts", None).await;
    assert_eq!(body["response"], json!([]));
}

#[tokio::test]
async fn create_rejects_missing_message() {
    let app = test_router();
    let (status, body) = send(&app, "POST", "/thoughts", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["response"], json!("message is required"));
}

#[tokio::test]
async fn list_returns_twenty_newest_first() {
    let app = test_router();
    for i in 0..25 {
        let (status, _) = send(
            &app,
            "POST",
            "/thoughts",
            Some(json!({"message": format!("thought number {i:02}")})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, "GET", "/thoughts", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    let thoughts = body["response"].as_array().unwrap();
    assert_eq!(thoughts.len(), 20);
    assert_eq!(thoughts[0]["message"], json!("thought number 24"));
    assert_eq!(thoughts[19]["message"], json!("thought number 05"));
}

#[tokio::test]
async fn get_unknown_id_is_success_with_null() {
    let app = test_router();
    let id = ObjectId::new().to_hex();
    let (status, body) = send(&app, "GET", &format!("/thoughts/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["response"], Value::Null);
}

#[tokio::test]
async fn get_malformed_id_is_failure() {
    let app = test_router();
    let (status, body) = send(&app, "GET", "/thoughts/not-an-id", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Invalid thought id"));
}

#[tokio::test]
async fn like_unknown_id_is_failure() {
    let app = test_router();
    let id = ObjectId::new().to_hex();
    let (status, body) = send(&app, "PATCH", &format!("/thoughts/{id}/like"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Thought not found"));
}

#[tokio::test]
async fn like_malformed_id_is_failure() {
    let app = test_router();
    let (status, body) = send(&app, "PATCH", "/thoughts/12345/like", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn likes_accumulate() {
    let app = test_router();
    let (_, body) = send(
        &app,
        "POST",
        "/thoughts",
        Some(json!({"message": "count my hearts"})),
    )
    .await;
    let id = body["response"]["id"].as_str().unwrap().to_owned();

    for expected in 1..=3 {
        let (_, body) = send(&app, "PATCH", &format!("/thoughts/{id}/like"), None).await;
        assert_eq!(body["response"]["hearts"], json!(expected));
    }
}
