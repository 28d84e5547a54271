use thiserror::Error;

use crate::models::RangeBounds;

/// Errors raised while parsing a range column such as "1000-5000"
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("range '{0}' is not of the form MIN-MAX")]
    Malformed(String),

    #[error("range '{raw}' has bound '{bound}' that is not an integer")]
    InvalidBound { raw: String, bound: String },

    #[error("range '{0}' has min greater than max")]
    Inverted(String),
}

/// Parse a range string into inclusive integer bounds
///
/// Every character that is not an ASCII digit or a hyphen is stripped first,
/// so currency symbols, thousands separators and units are ignored:
/// `"₹1,000 - 5,000"` parses to `1000..=5000`, `"3-7 days"` to `3..=7`.
pub fn parse_range(raw: &str) -> Result<RangeBounds, RangeError> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .collect();

    let (min, max) = cleaned
        .split_once('-')
        .ok_or_else(|| RangeError::Malformed(raw.to_string()))?;

    let parse_bound = |bound: &str| {
        bound.parse::<i64>().map_err(|_| RangeError::InvalidBound {
            raw: raw.to_string(),
            bound: bound.to_string(),
        })
    };

    let bounds = RangeBounds {
        min: parse_bound(min)?,
        max: parse_bound(max)?,
    };

    if bounds.min > bounds.max {
        return Err(RangeError::Inverted(raw.to_string()));
    }

    Ok(bounds)
}

impl RangeBounds {
    /// Inclusive on both ends
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.min as f64 <= value && value <= self.max as f64
    }
}
