// ============================================================
// Layer 4 — CSV Series Loader
// ============================================================
// Loads one class per CSV file from a directory.
//
// File format (one file per material, e.g. data/steel.csv):
//
//   strain;stress;force          ← header, skipped
//   0.000;0.0;0.0
//   0.001;12.4;105.2
//   ...
//
//   - class name = file stem ("steel")
//   - fields separated by ';' (configurable)
//   - surrounding whitespace trimmed, every field parsed as f64
//   - all records must have the same number of fields
//
// Classes are enumerated in sorted name order so that the same
// directory always produces the same class indices and the same
// sequence of random draws, whatever order the OS lists files in.

use std::{
    fs,
    path::{Path, PathBuf},
};

use csv::{ReaderBuilder, Trim};

use crate::domain::error::{Result, SplitError};
use crate::domain::series::{ClassSeries, Row};
use crate::domain::traits::SeriesSource;

pub const DEFAULT_DELIMITER: u8 = b';';

const CSV_EXTENSION: &str = "csv";

/// Reads `<dir>/<class>.csv` files.
#[derive(Debug, Clone)]
pub struct CsvSeriesLoader {
    dir:       PathBuf,
    delimiter: u8,
}

impl CsvSeriesLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir:       dir.into(),
            delimiter: DEFAULT_DELIMITER,
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{CSV_EXTENSION}"))
    }
}

impl SeriesSource for CsvSeriesLoader {
    fn class_names(&self) -> Result<Vec<String>> {
        let io_err = |error| SplitError::Io { path: self.dir.clone(), error };

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if !path.is_file() {
                continue;
            }

            let is_csv = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case(CSV_EXTENSION));
            if !is_csv {
                continue;
            }

            match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) => names.push(stem.to_string()),
                None => tracing::warn!("Skipping non UTF-8 file name '{}'", path.display()),
            }
        }

        if names.is_empty() {
            return Err(SplitError::EmptyInput {
                location: self.dir.display().to_string(),
            });
        }

        names.sort();
        tracing::debug!("Found {} class sources in '{}'", names.len(), self.dir.display());
        Ok(names)
    }

    fn load(&self, name: &str) -> Result<ClassSeries> {
        let path = self.path_for(name);
        if !path.is_file() {
            return Err(SplitError::UnknownClass { name: name.to_string() });
        }

        let csv_err = |error| SplitError::Csv { class: name.to_string(), error };

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .delimiter(self.delimiter)
            .trim(Trim::All)
            .from_path(&path)
            .map_err(csv_err)?;

        let mut rows: Vec<Row> = Vec::new();
        for (row_idx, record) in reader.records().enumerate() {
            let record = record.map_err(csv_err)?;

            let row = record
                .iter()
                .enumerate()
                .map(|(col_idx, field)| {
                    field.parse::<f64>().map_err(|_| SplitError::Parse {
                        class:  name.to_string(),
                        row:    row_idx + 1,
                        column: col_idx + 1,
                        value:  field.to_string(),
                    })
                })
                .collect::<Result<Row>>()?;

            rows.push(row);
        }

        tracing::debug!("Loaded '{}': {} rows", name, rows.len());
        Ok(ClassSeries::new(name, rows))
    }
}
