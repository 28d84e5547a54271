use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Preflight acknowledgement for OPTIONS /api/cities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreflightResponse {
    pub status: String,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Static description of the service served at GET /
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfoResponse {
    pub message: String,
    pub endpoints: BTreeMap<String, String>,
}
