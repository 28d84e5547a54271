use crate::core::{ranges::parse_range, recommender::RecommendError};
use crate::models::{BudgetDurationRecord, TypeId};

/// Check if a city's budget and duration ranges both contain the query values
///
/// This is Stage 1 of the recommendation pipeline. Both ranges are parsed
/// before either is compared, so a malformed range always surfaces as an error.
#[inline]
pub fn fits_budget_and_duration(
    record: &BudgetDurationRecord,
    budget: f64,
    duration: f64,
) -> Result<bool, RecommendError> {
    let budget_range =
        parse_range(&record.budget_range).map_err(|source| RecommendError::MalformedRange {
            city_id: record.city_id,
            column: "Budget_Range",
            source,
        })?;

    let duration_range =
        parse_range(&record.duration_range).map_err(|source| RecommendError::MalformedRange {
            city_id: record.city_id,
            column: "Duration_Range",
            source,
        })?;

    Ok(budget_range.contains(budget) && duration_range.contains(duration))
}

/// Experience types offered by a city that the user asked for
///
/// Stage 2 - returns the intersection in the city's own row order, without
/// duplicates. An empty result means the city offers nothing requested.
pub fn matched_types(offered: &[TypeId], requested: &[TypeId]) -> Vec<TypeId> {
    let mut matched: Vec<TypeId> = Vec::new();

    for type_id in offered {
        if requested.contains(type_id) && !matched.contains(type_id) {
            matched.push(*type_id);
        }
    }

    matched
}

/// Drop repeated identifiers while keeping first-seen order
pub fn distinct_types(types: &[TypeId]) -> Vec<TypeId> {
    matched_types(types, types)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(budget_range: &str, duration_range: &str) -> BudgetDurationRecord {
        BudgetDurationRecord {
            city_id: 1,
            city_name: None,
            budget_range: budget_range.to_string(),
            duration_range: duration_range.to_string(),
        }
    }

    #[test]
    fn test_within_both_ranges() {
        let record = record("1000-5000", "3-7");
        assert_eq!(fits_budget_and_duration(&record, 3000.0, 5.0).unwrap(), true);
    }

    #[test]
    fn test_boundaries_included() {
        let record = record("1000-5000", "3-7");
        assert!(fits_budget_and_duration(&record, 1000.0, 7.0).unwrap());
        assert!(fits_budget_and_duration(&record, 5000.0, 3.0).unwrap());
    }

    #[test]
    fn test_outside_either_range() {
        let record = record("1000-5000", "3-7");
        assert!(!fits_budget_and_duration(&record, 6000.0, 5.0).unwrap());
        assert!(!fits_budget_and_duration(&record, 3000.0, 8.0).unwrap());
    }

    #[test]
    fn test_malformed_duration_is_error() {
        let record = record("1000-5000", "a week");
        let err = fits_budget_and_duration(&record, 99999.0, 5.0).unwrap_err();

        assert!(matches!(
            err,
            RecommendError::MalformedRange { column: "Duration_Range", .. }
        ));
    }

    #[test]
    fn test_matched_types_keeps_city_order() {
        assert_eq!(matched_types(&[3, 2, 1, 2], &[1, 2]), vec![2, 1]);
        assert!(matched_types(&[3], &[1, 2]).is_empty());
    }

    #[test]
    fn test_distinct_types() {
        assert_eq!(distinct_types(&[2, 1, 2, 3, 1]), vec![2, 1, 3]);
    }
}
