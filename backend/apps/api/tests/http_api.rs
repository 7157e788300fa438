//! HTTP integration tests driving the assembled router

use api::{ApiConfig, build_app};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    build_app(&ApiConfig::default()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_generate_numbers_defaults() {
    let response = app().oneshot(get("/lotto")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let rows = body["numbers"].as_array().unwrap();
    assert_eq!(rows.len(), 5);
    for row in rows {
        let row = row.as_array().unwrap();
        assert_eq!(row.len(), 7);
        for n in row {
            let n = n.as_i64().unwrap();
            assert!((1..=45).contains(&n), "{n} out of range");
        }
    }
}

#[tokio::test]
async fn test_submit_numbers_echo() {
    let payload = json!({"numbers": [[1, 2, 3, 4, 5, 6, 7], []]});

    let response = app()
        .oneshot(post_json("/lotto", payload.clone()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, payload);
}

#[tokio::test]
async fn test_check_results_scenarios() {
    let winning = json!({"numbers": [1, 2, 3, 4, 5, 6], "bonusNumber": 7});
    let payload = json!([
        {
            "index": 7,
            "winningNumbers": winning,
            "results": [
                {"numbers": [1, 2, 3, 4, 5, 6], "correctNumbers": winning},
                {"numbers": [1, 2, 3, 4, 5, 7], "correctNumbers": winning},
                {"numbers": [1, 2, 3, 4, 5, 8], "correctNumbers": winning},
                {"numbers": [1, 2, 3, 4, 9, 10], "correctNumbers": winning},
                {"numbers": [1, 2, 3, 11, 12, 13], "correctNumbers": winning},
                {"numbers": [1, 2, 14, 15, 16, 7], "correctNumbers": winning}
            ]
        },
        {
            "index": 3,
            "winningNumbers": {"numbers": [], "bonusNumber": 1},
            "results": [{"numbers": [1, 2, 3], "correctNumbers": winning}]
        }
    ]);

    let response = app()
        .oneshot(post_json("/lotto/check", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body[0]["index"], 7);
    assert_eq!(body[0]["winningNumbers"], winning);
    let labels: Vec<&str> = body[0]["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["result"].as_str().unwrap())
        .collect();
    assert_eq!(
        labels,
        vec!["1st place", "2nd place", "3rd place", "4th place", "5th place", "no win"]
    );
    assert_eq!(body[0]["results"][1]["numbers"], json!([1, 2, 3, 4, 5, 7]));
    assert_eq!(body[0]["results"][1]["correctNumbers"], winning);

    assert_eq!(body[1]["index"], 3);
    assert_eq!(body[1]["results"][0]["result"], "no win");
}

#[tokio::test]
async fn test_check_results_empty_batch() {
    let response = app()
        .oneshot(post_json("/lotto/check", json!([])))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/lotto/check")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("[{"))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["status"], 400);
    assert!(body["type"].as_str().unwrap().ends_with("/400"));
}

#[tokio::test]
async fn test_login() {
    let ok = app()
        .oneshot(post_json(
            "/user/login",
            json!({"email": "example@example.com", "password": "password123"}),
        ))
        .await
        .unwrap();
    assert_eq!(ok.status(), StatusCode::OK);
    assert_eq!(body_json(ok).await, json!({"message": "Login successful"}));

    let denied = app()
        .oneshot(post_json(
            "/user/login",
            json!({"email": "example@example.com", "password": "password1234"}),
        ))
        .await
        .unwrap();
    assert_eq!(denied.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_user() {
    let response = app()
        .oneshot(post_json(
            "/user/create",
            json!({"fullName": "Grace Hopper", "email": "grace@example.com", "password": "cobol-1959"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "message": "User created: Grace Hopper, grace@example.com",
            "fullName": "Grace Hopper",
            "email": "grace@example.com"
        })
    );
}

#[tokio::test]
async fn test_configured_dimensions_and_account() {
    let config = ApiConfig::from_lookup(|key| match key {
        "LOTTO_DRAW_COUNT" => Some("2".to_string()),
        "LOTTO_NUMBERS_PER_DRAW" => Some("3".to_string()),
        "AUTH_ACCOUNT_EMAIL" => Some("owner@example.net".to_string()),
        "AUTH_ACCOUNT_PASSWORD" => Some("owner-password".to_string()),
        _ => None,
    })
    .unwrap();
    let app = build_app(&config).unwrap();

    let response = app.clone().oneshot(get("/lotto")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["numbers"].as_array().unwrap().len(), 2);
    assert_eq!(body["numbers"][0].as_array().unwrap().len(), 3);

    let response = app
        .oneshot(post_json(
            "/user/login",
            json!({"email": "owner@example.net", "password": "owner-password"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_openapi_endpoint() {
    let response = app().oneshot(get("/api-docs/openapi.json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["paths"]["/lotto/check"]["post"].is_object());
    assert!(body["paths"]["/user/login"]["post"].is_object());
}

#[tokio::test]
async fn test_cors_preflight() {
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/lotto")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );
}

#[tokio::test]
async fn test_unknown_route() {
    let response = app().oneshot(get("/user/profile")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
