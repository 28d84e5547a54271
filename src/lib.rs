//! Travel Bot - City recommendation service
//!
//! This library provides the recommendation engine behind the Travel Bot API.
//! Cities are filtered by budget and trip duration, matched against requested
//! experience types, scored and ranked over an immutable in-memory dataset.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Dataset, Recommender, RecommendError};
pub use error::ApiError;
pub use models::{CitiesRequest, CityRecommendation, ExperienceType};
pub use services::{load_dataset, DatasetError};
