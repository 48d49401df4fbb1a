//! CSV loading for the three source tables
//!
//! A dataset directory holds `people.csv`, `movies.csv` and `stars.csv`, each
//! with a header row. Required columns are checked before any row is read;
//! extra columns are ignored.

use serde::de::DeserializeOwned;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::dataset::{DatasetBuilder, DatasetIndex};
use crate::error::{DegreesError, Result};
use crate::paths::ensure_directory;
use crate::schema::{MovieRow, PersonRow, StarRow};

pub const PEOPLE_FILE: &str = "people.csv";
pub const MOVIES_FILE: &str = "movies.csv";
pub const STARS_FILE: &str = "stars.csv";

pub const PEOPLE_COLUMNS: &[&str] = &["id", "name", "birth"];
pub const MOVIES_COLUMNS: &[&str] = &["id", "title", "year"];
pub const STARS_COLUMNS: &[&str] = &["person_id", "movie_id"];

/// Load and index the dataset stored in `dir`.
pub fn load_dataset(dir: &Path) -> Result<DatasetIndex> {
    ensure_directory(dir)?;

    let [people, movies, stars] = table_paths(dir);
    let mut builder = DatasetBuilder::new();

    for row in read_table::<PersonRow>(&people, PEOPLE_COLUMNS)? {
        builder.add_person(row);
    }
    for row in read_table::<MovieRow>(&movies, MOVIES_COLUMNS)? {
        builder.add_movie(row);
    }
    for row in read_table::<StarRow>(&stars, STARS_COLUMNS)? {
        builder.add_star(row);
    }

    let index = builder.build();
    info!(dir = %dir.display(), "dataset loaded");
    Ok(index)
}

/// Read every row of one table, failing on the first malformed record.
pub fn read_table<T: DeserializeOwned>(path: &Path, required: &[&str]) -> Result<Vec<T>> {
    let file = File::open(path).map_err(|e| DegreesError::DataSource {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(file);

    let headers = reader.headers().map_err(|e| csv_error(path, e))?.clone();
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(DegreesError::MissingColumn {
                path: path.display().to_string(),
                column: (*column).to_string(),
            });
        }
    }

    reader
        .deserialize::<T>()
        .map(|row| row.map_err(|e| csv_error(path, e)))
        .collect()
}

/// Paths of the three tables inside `dir`
pub fn table_paths(dir: &Path) -> [PathBuf; 3] {
    [
        dir.join(PEOPLE_FILE),
        dir.join(MOVIES_FILE),
        dir.join(STARS_FILE),
    ]
}

fn csv_error(path: &Path, err: csv::Error) -> DegreesError {
    let message = match err.position() {
        Some(pos) => format!("line {}: {}", pos.line(), err),
        None => err.to_string(),
    };
    DegreesError::DataSource {
        path: path.display().to_string(),
        message,
    }
}
