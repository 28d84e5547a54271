/// Calculate a match score (0-100) for a city
///
/// Scoring formula:
/// score = matched_types / requested_types * 100, rounded to 2 decimals
///
/// `matched` must only count requested types, so the score never exceeds 100.
/// A request with no types scores 0 rather than dividing by zero.
pub fn calculate_match_score(matched: usize, requested: usize) -> f64 {
    if requested == 0 {
        return 0.0;
    }

    let score = matched as f64 / requested as f64 * 100.0;
    round_score(score.clamp(0.0, 100.0))
}

/// Round to two decimal places
#[inline]
pub fn round_score(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_match_scores_hundred() {
        assert_eq!(calculate_match_score(2, 2), 100.0);
    }

    #[test]
    fn test_partial_match() {
        assert_eq!(calculate_match_score(1, 2), 50.0);
        assert_eq!(calculate_match_score(1, 3), 33.33);
        assert_eq!(calculate_match_score(2, 3), 66.67);
    }

    #[test]
    fn test_no_requested_types() {
        assert_eq!(calculate_match_score(0, 0), 0.0);
    }

    #[test]
    fn test_round_score() {
        assert_eq!(round_score(14.285714), 14.29);
        assert_eq!(round_score(100.0), 100.0);
    }
}
