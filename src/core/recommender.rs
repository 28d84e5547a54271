use std::sync::Arc;
use thiserror::Error;

use crate::core::{
    dataset::Dataset,
    filters::{distinct_types, fits_budget_and_duration, matched_types},
    ranges::RangeError,
    scoring::calculate_match_score,
};
use crate::models::{CityId, CityRecommendation, TypeId};

/// Errors produced while running the recommendation pipeline
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecommendError {
    #[error("experience_types must contain at least one experience type.")]
    EmptyExperienceTypes,

    #[error("invalid {column} for city {city_id}: {source}")]
    MalformedRange {
        city_id: CityId,
        column: &'static str,
        #[source]
        source: RangeError,
    },
}

/// Main recommendation orchestrator - implements the filter/score/rank pipeline
///
/// # Pipeline Stages
/// 1. Budget and duration range filter
/// 2. Experience type intersection
/// 3. Scoring
/// 4. Stable ranking and type name resolution
#[derive(Debug, Clone)]
pub struct Recommender {
    dataset: Arc<Dataset>,
}

impl Recommender {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Recommend cities for a budget, trip duration and set of experience types
    ///
    /// # Arguments
    /// * `budget` - Must fall inside a city's budget range (inclusive)
    /// * `duration` - Must fall inside a city's duration range (inclusive)
    /// * `experience_types` - Requested type IDs; repeats are ignored
    ///
    /// # Returns
    /// Cities ordered by match score descending. Equal scores keep the order
    /// of the budget/duration table.
    pub fn recommend(
        &self,
        budget: f64,
        duration: f64,
        experience_types: &[TypeId],
    ) -> Result<Vec<CityRecommendation>, RecommendError> {
        let requested = distinct_types(experience_types);
        if requested.is_empty() {
            return Err(RecommendError::EmptyExperienceTypes);
        }

        let mut scored: Vec<CityRecommendation> = Vec::new();

        for record in self.dataset.budget_durations() {
            // Stage 1: Budget/duration filter
            if !fits_budget_and_duration(record, budget, duration)? {
                continue;
            }

            // Stage 2: Experience type intersection
            let Some(city) = self.dataset.city_types(record.city_id) else {
                continue;
            };
            let matched = matched_types(&city.type_ids, &requested);
            if matched.is_empty() {
                continue;
            }

            // Stage 3: Scoring
            let match_score = calculate_match_score(matched.len(), requested.len());

            let name = record
                .city_name
                .as_deref()
                .filter(|name| !name.is_empty())
                .unwrap_or(city.name.as_str())
                .to_string();

            let matching_types = matched
                .iter()
                .filter_map(|type_id| self.dataset.type_name(*type_id))
                .map(str::to_string)
                .collect();

            scored.push(CityRecommendation {
                name,
                match_score,
                matching_types,
            });
        }

        // Stage 4: Rank by score (descending); sort_by is stable
        scored.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        tracing::debug!(
            "Scored {} cities for budget={}, duration={}, types={:?}",
            scored.len(),
            budget,
            duration,
            requested
        );

        Ok(scored)
    }
}
