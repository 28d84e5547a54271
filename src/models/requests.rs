use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use validator::Validate;

use crate::models::domain::TypeId;

/// Failures while turning a raw JSON body into a [`CitiesRequest`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Missing key '{0}' in request JSON.")]
    MissingField(&'static str),

    #[error("{0}")]
    InvalidInput(String),
}

/// Request to recommend cities
///
/// POST /api/cities
///
/// ```json
/// {
///   "budget": 3000,
///   "duration": 5,
///   "experience_types": [1, 2]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CitiesRequest {
    pub budget: f64,
    pub duration: f64,
    #[validate(length(min = 1))]
    pub experience_types: Vec<TypeId>,
}

impl CitiesRequest {
    /// Validate a raw JSON body and build a typed request
    ///
    /// Keys are checked in the order budget, duration, experience_types so the
    /// first absent one is reported.
    pub fn from_json(body: &Value) -> Result<Self, RequestError> {
        let object = body.as_object().ok_or_else(|| {
            RequestError::InvalidInput("Request body must be a JSON object.".to_string())
        })?;

        let budget = object.get("budget").ok_or(RequestError::MissingField("budget"))?;
        let duration = object
            .get("duration")
            .ok_or(RequestError::MissingField("duration"))?;
        let experience_types = object
            .get("experience_types")
            .ok_or(RequestError::MissingField("experience_types"))?;

        let (budget, duration) = match (budget.as_f64(), duration.as_f64()) {
            (Some(b), Some(d)) => (b, d),
            _ => {
                return Err(RequestError::InvalidInput(
                    "Budget and duration must be numbers.".to_string(),
                ))
            }
        };

        let request = Self {
            budget,
            duration,
            experience_types: parse_type_ids(experience_types)?,
        };

        request.validate().map_err(|_| {
            RequestError::InvalidInput(
                "experience_types must contain at least one experience type.".to_string(),
            )
        })?;

        Ok(request)
    }
}

fn parse_type_ids(value: &Value) -> Result<Vec<TypeId>, RequestError> {
    let invalid = || {
        RequestError::InvalidInput(
            "experience_types must be an array of experience type identifiers.".to_string(),
        )
    };

    value
        .as_array()
        .ok_or_else(invalid)?
        .iter()
        .map(|id| {
            id.as_u64()
                .and_then(|id| TypeId::try_from(id).ok())
                .ok_or_else(invalid)
        })
        .collect()
}
