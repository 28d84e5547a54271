use serde::Serialize;
use std::collections::HashMap;

use crate::models::{BudgetDurationRecord, CityId, CityTypeRecord, ExperienceType, Table, TypeId};

/// Experience types offered by a single city
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityTypes {
    /// Name from the first type row seen for the city
    pub name: String,
    /// Type IDs in table order
    pub type_ids: Vec<TypeId>,
}

/// Record counts per reference table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatasetStats {
    pub states: usize,
    pub cities: usize,
    pub budget_durations: usize,
    pub city_types: usize,
}

/// Immutable reference data the recommender works over
///
/// Built once at startup. City type rows are grouped by City_ID and the
/// Type_ID -> Type_Name lookup is resolved up front so requests only read.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    states: Table,
    cities: Table,
    budget_durations: Vec<BudgetDurationRecord>,
    city_types: HashMap<CityId, CityTypes>,
    type_names: HashMap<TypeId, String>,
    city_type_rows: usize,
}

impl Dataset {
    pub fn new(
        states: Table,
        cities: Table,
        budget_durations: Vec<BudgetDurationRecord>,
        city_type_records: Vec<CityTypeRecord>,
    ) -> Self {
        let city_type_rows = city_type_records.len();
        let mut city_types: HashMap<CityId, CityTypes> = HashMap::new();
        let mut type_names: HashMap<TypeId, String> = HashMap::new();

        for record in city_type_records {
            // Later rows overwrite earlier names for the same Type_ID
            type_names.insert(record.type_id, record.type_name.clone());

            city_types
                .entry(record.city_id)
                .or_insert_with(|| CityTypes {
                    name: record.city_name.clone(),
                    type_ids: Vec::new(),
                })
                .type_ids
                .push(record.type_id);
        }

        Self {
            states,
            cities,
            budget_durations,
            city_types,
            type_names,
            city_type_rows,
        }
    }

    /// Budget/duration rows in file order
    pub fn budget_durations(&self) -> &[BudgetDurationRecord] {
        &self.budget_durations
    }

    pub fn city_types(&self, city_id: CityId) -> Option<&CityTypes> {
        self.city_types.get(&city_id)
    }

    pub fn type_name(&self, type_id: TypeId) -> Option<&str> {
        self.type_names.get(&type_id).map(String::as_str)
    }

    /// All distinct experience types, ordered by ID
    pub fn experience_types(&self) -> Vec<ExperienceType> {
        let mut types: Vec<ExperienceType> = self
            .type_names
            .iter()
            .map(|(id, name)| ExperienceType {
                id: *id,
                name: name.clone(),
            })
            .collect();

        types.sort_by_key(|t| t.id);
        types
    }

    pub fn stats(&self) -> DatasetStats {
        DatasetStats {
            states: self.states.len(),
            cities: self.cities.len(),
            budget_durations: self.budget_durations.len(),
            city_types: self.city_type_rows,
        }
    }
}
