use std::path::Path;

use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode};
use course_catalog::api::router;
use course_catalog::catalog::CatalogState;
use course_catalog::config::AppConfig;
use course_catalog::loader;
use course_catalog::state::AppState;
use serde_json::{Value, json};
use tower::ServiceExt;

fn test_state() -> AppState {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/courses.json");
    let courses = loader::load_courses(&path).expect("Failed to load bundled courses");
    let config = AppConfig::from_parts(path, "127.0.0.1:0").expect("Failed to build config");
    AppState::new(CatalogState::new(courses), config)
}

async fn send(
    state: &AppState,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let body = match body {
        Some(json) => Body::from(json.to_string()),
        None => Body::empty(),
    };
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .expect("Failed to build request");

    let response = router(state.clone())
        .oneshot(request)
        .await
        .expect("Request failed");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Response is not JSON")
    };
    (status, value)
}

fn ids(view: &Value) -> Vec<u64> {
    view["courses"]
        .as_array()
        .expect("courses array")
        .iter()
        .map(|c| c["id"].as_u64().expect("numeric id"))
        .collect()
}

#[tokio::test]
async fn test_health() {
    let state = test_state();
    let (status, _) = send(&state, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_initial_catalog_view() {
    let state = test_state();
    let (status, view) = send(&state, Method::GET, "/catalog", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["total"], 24);
    assert_eq!(view["filtered"], 24);
    assert_eq!(view["shown"], 10);
    assert_eq!(view["current_page"], 1);
    assert_eq!(view["total_pages"], 3);
    assert_eq!(view["has_previous"], false);
    assert_eq!(view["criteria"]["level"], "any");
    assert_eq!(ids(&view), (1..=10).collect::<Vec<u64>>());
}

#[tokio::test]
async fn test_update_criteria_filters_and_echoes() {
    let state = test_state();
    let (status, view) = send(
        &state,
        Method::PATCH,
        "/catalog/criteria",
        Some(json!({ "level": "400", "semester": "W" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // 404, 428, 452, 460; the seminar has no course number
    assert_eq!(ids(&view), vec![19, 20, 21, 22]);
    assert_eq!(view["criteria"]["semester"], "W");

    let (_, view) =
        send(&state, Method::PATCH, "/catalog/criteria", Some(json!({ "search": "NETWORK" })))
            .await;
    assert_eq!(ids(&view), vec![22]);
    assert_eq!(view["criteria"]["level"], "400");

    let (_, view) = send(&state, Method::DELETE, "/catalog/search", None).await;
    assert_eq!(view["criteria"]["search"], "");
    assert_eq!(view["filtered"], 4);
}

#[tokio::test]
async fn test_unobserved_credit_value_is_rejected() {
    let state = test_state();
    let (status, body) =
        send(&state, Method::PATCH, "/catalog/criteria", Some(json!({ "credits": 7 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap_or_default().contains("7"));

    let (_, view) = send(&state, Method::GET, "/catalog", None).await;
    assert_eq!(view["criteria"]["credits"], "any");
}

#[tokio::test]
async fn test_pagination_routes_clamp() {
    let state = test_state();

    let (_, view) = send(&state, Method::POST, "/catalog/page/previous", None).await;
    assert_eq!(view["current_page"], 1);

    let (_, view) = send(&state, Method::PUT, "/catalog/page/3", None).await;
    assert_eq!(view["current_page"], 3);
    assert_eq!(ids(&view), vec![21, 22, 23, 24]);

    let (_, view) = send(&state, Method::POST, "/catalog/page/next", None).await;
    assert_eq!(view["current_page"], 3);
    assert_eq!(view["has_next"], false);

    // narrowing to 100-level (5 courses) pulls the page back into range
    let (_, view) =
        send(&state, Method::PATCH, "/catalog/criteria", Some(json!({ "level": "100" }))).await;
    assert_eq!(view["current_page"], 1);
    assert_eq!(view["total_pages"], 1);
    assert_eq!(view["shown"], 5);
}

#[tokio::test]
async fn test_favorites_flow() {
    let state = test_state();

    let (status, body) = send(&state, Method::POST, "/favorites/8/toggle", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 8, "is_favorite": true }));

    let (_, body) = send(&state, Method::POST, "/favorites/3/toggle", None).await;
    assert_eq!(body["is_favorite"], true);

    let (_, favorites) = send(&state, Method::GET, "/favorites", None).await;
    assert_eq!(favorites, json!([3, 8]));

    let (_, view) =
        send(&state, Method::PATCH, "/catalog/criteria", Some(json!({ "favorites_only": true })))
            .await;
    assert_eq!(ids(&view), vec![3, 8]);
    assert!(view["courses"][0]["is_favorite"].as_bool().unwrap_or(false));

    let (_, body) = send(&state, Method::POST, "/favorites/8/toggle", None).await;
    assert_eq!(body["is_favorite"], false);

    let (status, _) = send(&state, Method::POST, "/favorites/999/toggle", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_detail_flow() {
    let state = test_state();

    let (status, _) = send(&state, Method::GET, "/detail", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, detail) = send(&state, Method::PUT, "/detail/8", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["heading"], "CS 235: Data Structures and Algorithms");
    assert_eq!(detail["is_favorite"], false);
    assert_eq!(detail["semester_names"], json!(["Fall", "Winter", "Spring", "Summer"]));

    // favoriting from the detail view shows in both views
    send(&state, Method::POST, "/favorites/8/toggle", None).await;
    let (_, detail) = send(&state, Method::GET, "/detail", None).await;
    assert_eq!(detail["is_favorite"], true);
    let (_, view) = send(&state, Method::GET, "/catalog", None).await;
    assert_eq!(view["courses"][7]["is_favorite"], true);

    let (status, _) = send(&state, Method::PUT, "/detail/500", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, detail) = send(&state, Method::GET, "/detail", None).await;
    assert_eq!(detail["course"]["id"], 8);

    let (status, _) = send(&state, Method::DELETE, "/detail", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&state, Method::GET, "/detail", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_credit_options_and_reload() {
    let state = test_state();

    let (_, options) = send(&state, Method::GET, "/catalog/credit-options", None).await;
    assert_eq!(
        options,
        json!([
            { "value": 1, "label": "1 credit" },
            { "value": 2, "label": "2 credits" },
            { "value": 3, "label": "3 credits" },
            { "value": 4, "label": "4 credits" }
        ])
    );

    send(&state, Method::POST, "/favorites/2/toggle", None).await;
    let (status, view) = send(&state, Method::POST, "/catalog/reload", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["total"], 24);

    // same dataset, so the favorite survives the reload
    let (_, favorites) = send(&state, Method::GET, "/favorites", None).await;
    assert_eq!(favorites, json!([2]));
}
