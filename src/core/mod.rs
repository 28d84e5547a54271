// Core algorithm exports
pub mod dataset;
pub mod filters;
pub mod ranges;
pub mod recommender;
pub mod scoring;

pub use dataset::{CityTypes, Dataset, DatasetStats};
pub use filters::{distinct_types, fits_budget_and_duration, matched_types};
pub use ranges::{parse_range, RangeError};
pub use recommender::{RecommendError, Recommender};
pub use scoring::{calculate_match_score, round_score};
