// HTTP tests for the Travel Bot API

use actix_cors::Cors;
use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;
use travel_bot::core::{Dataset, Recommender};
use travel_bot::error::handle_json_payload_error;
use travel_bot::models::{BudgetDurationRecord, CityTypeRecord, Table};
use travel_bot::routes::{configure_routes, AppState};
use travel_bot::services::load_dataset;

fn fixture_state() -> AppState {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    AppState {
        recommender: Recommender::new(Arc::new(load_dataset(dir).unwrap())),
    }
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
                .configure(configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_recommend_cities() {
    let app = init_app!(fixture_state());

    let req = test::TestRequest::post()
        .uri("/api/cities")
        .set_json(json!({ "budget": 3000, "duration": 5, "experience_types": [1, 2] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body[0],
        json!({
            "name": "Manali",
            "match_score": 100.0,
            "matching_types": ["Adventure", "Cultural"]
        })
    );
    assert_eq!(body.as_array().unwrap().len(), 4);
}

#[actix_web::test]
async fn test_missing_field_is_bad_request() {
    let app = init_app!(fixture_state());

    let req = test::TestRequest::post()
        .uri("/api/cities")
        .set_json(json!({ "budget": 3000, "experience_types": [1] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "Missing key 'duration' in request JSON." }));
}

#[actix_web::test]
async fn test_non_numeric_budget_is_bad_request() {
    let app = init_app!(fixture_state());

    let req = test::TestRequest::post()
        .uri("/api/cities")
        .set_json(json!({ "budget": "lots", "duration": 5, "experience_types": [1] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Budget and duration must be numbers.");
}

#[actix_web::test]
async fn test_empty_experience_types_is_bad_request() {
    let app = init_app!(fixture_state());

    let req = test::TestRequest::post()
        .uri("/api/cities")
        .set_json(json!({ "budget": 3000, "duration": 5, "experience_types": [] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("experience_types"));
}

#[actix_web::test]
async fn test_invalid_json_is_bad_request() {
    let app = init_app!(fixture_state());

    let req = test::TestRequest::post()
        .uri("/api/cities")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON"));
}

#[actix_web::test]
async fn test_malformed_range_is_internal_error() {
    let dataset = Dataset::new(
        Table::default(),
        Table::default(),
        vec![BudgetDurationRecord {
            city_id: 1,
            city_name: None,
            budget_range: "affordable".to_string(),
            duration_range: "3-7".to_string(),
        }],
        vec![CityTypeRecord {
            city_id: 1,
            type_id: 1,
            type_name: "Adventure".to_string(),
            city_name: "Goa".to_string(),
        }],
    );
    let app = init_app!(AppState {
        recommender: Recommender::new(Arc::new(dataset)),
    });

    let req = test::TestRequest::post()
        .uri("/api/cities")
        .set_json(json!({ "budget": 3000, "duration": 5, "experience_types": [1] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("Budget_Range"));
}

#[actix_web::test]
async fn test_preflight() {
    let app = init_app!(fixture_state());

    let req = test::TestRequest::default()
        .method(actix_web::http::Method::OPTIONS)
        .uri("/api/cities")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "status": "ok" }));
}

#[actix_web::test]
async fn test_browser_preflight_answered_by_cors() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(fixture_state()))
            .wrap(Cors::permissive())
            .configure(configure_routes),
    )
    .await;

    // Origin + Access-Control-Request-Method: handled by the CORS layer
    let req = test::TestRequest::default()
        .method(actix_web::http::Method::OPTIONS)
        .uri("/api/cities")
        .insert_header(("Origin", "http://localhost:3000"))
        .insert_header(("Access-Control-Request-Method", "POST"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp
        .headers()
        .contains_key("access-control-allow-origin"));

    // Without CORS headers the request still reaches the handler
    let req = test::TestRequest::default()
        .method(actix_web::http::Method::OPTIONS)
        .uri("/api/cities")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "status": "ok" }));
}

#[actix_web::test]
async fn test_health_check() {
    let app = init_app!(fixture_state());

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body, json!({ "status": "healthy" }));
}

#[actix_web::test]
async fn test_service_info() {
    let app = init_app!(fixture_state());

    let req = test::TestRequest::get().uri("/").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["message"], "Travel Bot API is running!");
    assert_eq!(body["endpoints"]["/health"], "GET - Health check");
    assert_eq!(body["endpoints"]["/api/cities"], "POST - Get city recommendations");
}

#[actix_web::test]
async fn test_experience_types() {
    let app = init_app!(fixture_state());

    let req = test::TestRequest::get().uri("/api/experience-types").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body[0], json!({ "id": 1, "name": "Adventure" }));
    assert_eq!(body.as_array().unwrap().len(), 4);
}
