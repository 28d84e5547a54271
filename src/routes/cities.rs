use actix_web::{web, HttpResponse, Responder};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::core::Recommender;
use crate::error::ApiError;
use crate::models::{CitiesRequest, HealthResponse, PreflightResponse, ServiceInfoResponse};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub recommender: Recommender,
}

/// Configure all recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(service_info))
        .route("/health", web::get().to(health_check))
        .route("/api/cities", web::post().to(recommend_cities))
        .route("/api/cities", web::method(actix_web::http::Method::OPTIONS).to(preflight))
        .route("/api/experience-types", web::get().to(experience_types));
}

/// Service description endpoint
async fn service_info() -> impl Responder {
    let endpoints = BTreeMap::from([
        ("/api/cities".to_string(), "POST - Get city recommendations".to_string()),
        ("/api/experience-types".to_string(), "GET - List experience types".to_string()),
        ("/health".to_string(), "GET - Health check".to_string()),
    ]);

    HttpResponse::Ok().json(ServiceInfoResponse {
        message: "Travel Bot API is running!".to_string(),
        endpoints,
    })
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
    })
}

/// Respond to OPTIONS requests that reach the handler
///
/// Browser preflights (Origin plus Access-Control-Request-Method) are answered
/// by the `Cors` middleware with an empty 200 and never get here.
async fn preflight() -> impl Responder {
    HttpResponse::Ok().json(PreflightResponse {
        status: "ok".to_string(),
    })
}

/// Recommend cities endpoint
///
/// POST /api/cities
///
/// Request body:
/// ```json
/// {
///   "budget": 3000,
///   "duration": 5,
///   "experience_types": [1, 2]
/// }
/// ```
async fn recommend_cities(
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let request = CitiesRequest::from_json(&body).map_err(|e| {
        tracing::warn!("Rejected city request: {}", e);
        ApiError::from(e)
    })?;

    let cities = state
        .recommender
        .recommend(request.budget, request.duration, &request.experience_types)
        .map_err(|e| {
            let err = ApiError::from(e);
            match err {
                ApiError::Internal(_) => tracing::error!("Error: {}", err),
                _ => tracing::warn!("Rejected city request: {}", err),
            }
            err
        })?;

    tracing::info!(
        "Returning {} cities for budget={}, duration={}, types={:?}",
        cities.len(),
        request.budget,
        request.duration,
        request.experience_types
    );

    Ok(HttpResponse::Ok().json(cities))
}

/// List experience types endpoint
async fn experience_types(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.recommender.dataset().experience_types())
}
