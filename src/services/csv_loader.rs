//! Startup loader for the four reference CSV files
//!
//! Loading is all-or-nothing: any missing, empty or malformed file aborts with
//! a [`DatasetError`] so the service never starts on a partial dataset.

use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::Dataset;
use crate::models::{BudgetDurationRecord, CityTypeRecord, Table};

pub const STATES_FILE: &str = "states_and_union_territories.csv";
pub const CITIES_FILE: &str = "cities.csv";
pub const BUDGET_DURATION_FILE: &str = "city_budget_duration.csv";
pub const CITY_TYPES_FILE: &str = "cities_type_data.csv";

const BUDGET_DURATION_COLUMNS: &[&str] = &["City_ID", "Budget_Range", "Duration_Range"];
const CITY_TYPE_COLUMNS: &[&str] = &["City_ID", "Type_ID", "Type_Name", "City_Name"];

/// Errors that abort startup while loading the dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Required dataset file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Dataset file is empty: {}", path.display())]
    Empty { path: PathBuf },

    #[error("Missing required column '{column}' in {}", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("Failed to parse {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Load all reference tables from `dir` and build the [`Dataset`]
pub fn load_dataset<P: AsRef<Path>>(dir: P) -> Result<Dataset, DatasetError> {
    let dir = dir.as_ref();

    let states = load_table(&dir.join(STATES_FILE))?;
    let cities = load_table(&dir.join(CITIES_FILE))?;
    let budget_durations: Vec<BudgetDurationRecord> =
        load_records(&dir.join(BUDGET_DURATION_FILE), BUDGET_DURATION_COLUMNS)?;
    let city_types: Vec<CityTypeRecord> =
        load_records(&dir.join(CITY_TYPES_FILE), CITY_TYPE_COLUMNS)?;

    tracing::info!("States: {} records", states.len());
    tracing::info!("Cities: {} records", cities.len());
    tracing::info!("Budget/Duration: {} records", budget_durations.len());
    tracing::info!("Cities Type Data: {} records", city_types.len());

    Ok(Dataset::new(states, cities, budget_durations, city_types))
}

fn open_reader(path: &Path) -> Result<csv::Reader<File>, DatasetError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => DatasetError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => DatasetError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    Ok(csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(file))
}

fn read_headers(
    reader: &mut csv::Reader<File>,
    path: &Path,
) -> Result<csv::StringRecord, DatasetError> {
    let headers = reader
        .headers()
        .map_err(|source| csv_error(path, source))?
        .clone();

    if headers.iter().all(str::is_empty) {
        return Err(DatasetError::Empty {
            path: path.to_path_buf(),
        });
    }

    Ok(headers)
}

/// Load a table without interpreting its columns
fn load_table(path: &Path) -> Result<Table, DatasetError> {
    let mut reader = open_reader(path)?;
    let headers = read_headers(&mut reader, path)?;

    let rows = reader
        .records()
        .map(|record| {
            record
                .map(|r| r.iter().map(str::to_string).collect::<Vec<String>>())
                .map_err(|source| csv_error(path, source))
        })
        .collect::<Result<Vec<Vec<String>>, _>>()?;

    if rows.is_empty() {
        return Err(DatasetError::Empty {
            path: path.to_path_buf(),
        });
    }

    Ok(Table {
        headers: headers.iter().map(str::to_string).collect(),
        rows,
    })
}

/// Load typed rows after checking the required columns are present
fn load_records<T: DeserializeOwned>(
    path: &Path,
    required: &[&'static str],
) -> Result<Vec<T>, DatasetError> {
    let mut reader = open_reader(path)?;
    let headers = read_headers(&mut reader, path)?;

    for column in required.iter().copied() {
        if !headers.iter().any(|h| h == column) {
            return Err(DatasetError::MissingColumn {
                path: path.to_path_buf(),
                column,
            });
        }
    }

    let records = reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|source| csv_error(path, source))?;

    if records.is_empty() {
        return Err(DatasetError::Empty {
            path: path.to_path_buf(),
        });
    }

    Ok(records)
}

fn csv_error(path: &Path, source: csv::Error) -> DatasetError {
    DatasetError::Csv {
        path: path.to_path_buf(),
        source,
    }
}
