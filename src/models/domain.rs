use serde::{Deserialize, Serialize};

/// Identifier of a city across all reference tables
pub type CityId = u32;

/// Identifier of an experience type (e.g. adventure, cultural)
pub type TypeId = u32;

/// Row of `city_budget_duration.csv`
///
/// Ranges are kept as written in the file (e.g. "₹1,000-5,000") and parsed
/// on demand by [`crate::core::ranges::parse_range`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetDurationRecord {
    #[serde(rename = "City_ID")]
    pub city_id: CityId,
    #[serde(rename = "City_Name", default)]
    pub city_name: Option<String>,
    #[serde(rename = "Budget_Range")]
    pub budget_range: String,
    #[serde(rename = "Duration_Range")]
    pub duration_range: String,
}

/// Row of `cities_type_data.csv`, one per experience type a city offers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityTypeRecord {
    #[serde(rename = "City_ID")]
    pub city_id: CityId,
    #[serde(rename = "Type_ID")]
    pub type_id: TypeId,
    #[serde(rename = "Type_Name")]
    pub type_name: String,
    #[serde(rename = "City_Name")]
    pub city_name: String,
}

/// Experience type with its human-readable name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceType {
    pub id: TypeId,
    pub name: String,
}

/// Untyped reference table (headers plus raw rows)
///
/// The states and cities tables are carried as-is: they must load cleanly but
/// the recommendation pipeline never reads their columns.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Inclusive integer range parsed from a range column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeBounds {
    pub min: i64,
    pub max: i64,
}

/// Ranked recommendation returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRecommendation {
    pub name: String,
    pub match_score: f64,
    pub matching_types: Vec<String>,
}
