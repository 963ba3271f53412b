// ============================================================
// Layer 2 — SplitUseCase
// ============================================================
// Runs the pipeline end to end:
//
//   Step 1: Validate parameters       (Layer 4 - data)
//   Step 2: Enumerate class sources   (Layer 4 - data)
//   Step 3: Seed the generator once
//   Step 4: Load + window each class  (Layer 4 - data)
//   Step 5: Build the report          (Layer 6 - infra)

use std::{fs, path::Path};

use anyhow::{Context, Result};
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::data::{
    dataset::SplitDataset,
    loader::CsvSeriesLoader,
    splitter::WindowedSplitter,
};
use crate::domain::traits::SeriesSource;
use crate::infra::report::SplitReport;

// ─── Split Configuration ─────────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    pub data_dir:   String,
    pub test_split: f64,
    pub interval:   usize,
    pub seed:       u64,
    pub delimiter:  char,
    pub verbose:    bool,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            data_dir:   "data".to_string(),
            test_split: 0.1,
            interval:   3,
            seed:       11,
            delimiter:  ';',
            verbose:    false,
        }
    }
}

impl SplitConfig {
    /// Load a config from a JSON file. Missing keys take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config '{}'", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Invalid config '{}'", path.display()))
    }

    /// The delimiter as a single CSV byte.
    pub fn delimiter_byte(&self) -> Result<u8> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .with_context(|| format!("Delimiter '{}' is not a single ASCII character", self.delimiter))
    }
}

// ─── SplitUseCase ─────────────────────────────────────────────────────────────
pub struct SplitUseCase {
    config: SplitConfig,
}

impl SplitUseCase {
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    pub fn loader(&self) -> Result<CsvSeriesLoader> {
        Ok(CsvSeriesLoader::new(&self.config.data_dir)
            .with_delimiter(self.config.delimiter_byte()?))
    }

    /// Split the CSV directory named in the config.
    pub fn execute(&self) -> Result<(SplitDataset, SplitReport)> {
        let loader = self.loader()?;
        self.execute_with(&loader)
    }

    /// Split classes from any source.
    pub fn execute_with(&self, source: &dyn SeriesSource) -> Result<(SplitDataset, SplitReport)> {
        let cfg = &self.config;

        let splitter = WindowedSplitter::new(cfg.test_split, cfg.interval)
            .context("Invalid split parameters")?
            .with_verbose(cfg.verbose);

        tracing::info!(
            "Splitting classes from '{}' (test_split={}, interval={}, seed={})",
            cfg.data_dir,
            cfg.test_split,
            cfg.interval,
            cfg.seed,
        );

        let mut rng = StdRng::seed_from_u64(cfg.seed);
        let dataset = splitter
            .split_from_source(source, &mut rng)
            .with_context(|| format!("Split failed for '{}'", cfg.data_dir))?;

        let report = SplitReport::new(&dataset, cfg.test_split, cfg.interval, cfg.seed);
        Ok((dataset, report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::SplitError;
    use std::io::Write;

    fn write_series(dir: &Path, name: &str, rows: usize) {
        let mut f = fs::File::create(dir.join(format!("{name}.csv"))).unwrap();
        writeln!(f, "strain;stress").unwrap();
        for i in 0..rows {
            writeln!(f, "{};{}", i as f64 * 0.001, i as f64 * 1.5).unwrap();
        }
    }

    fn config_for(dir: &Path) -> SplitConfig {
        SplitConfig {
            data_dir: dir.display().to_string(),
            ..SplitConfig::default()
        }
    }

    #[test]
    fn test_execute_over_csv_directory() {
        let tmp = tempfile::tempdir().unwrap();
        write_series(tmp.path(), "steel", 120);
        write_series(tmp.path(), "copper", 80);

        let (dataset, report) = SplitUseCase::new(config_for(tmp.path())).execute().unwrap();

        // sorted enumeration: copper before steel
        assert_eq!(dataset.labels.get(0), Some("copper"));
        assert_eq!(dataset.labels.get(1), Some("steel"));
        assert_eq!(dataset.feature_width(), Some(6));
        assert_eq!(report.train_total, dataset.train_len());
        assert_eq!(report.classes.len(), 2);
    }

    #[test]
    fn test_execute_is_reproducible() {
        let tmp = tempfile::tempdir().unwrap();
        write_series(tmp.path(), "a", 64);
        write_series(tmp.path(), "b", 64);

        let use_case = SplitUseCase::new(config_for(tmp.path()));
        let (first, _)  = use_case.execute().unwrap();
        let (second, _) = use_case.execute().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_short_series_is_configuration_error() {
        let tmp = tempfile::tempdir().unwrap();
        write_series(tmp.path(), "tiny", 10);

        let cfg = SplitConfig { interval: 12, ..config_for(tmp.path()) };
        let err = SplitUseCase::new(cfg).execute().unwrap_err();
        let split_err = err.downcast_ref::<SplitError>().unwrap();
        assert!(split_err.is_configuration());
    }

    #[test]
    fn test_config_json_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("split.json");
        fs::write(&path, r#"{ "interval": 5, "seed": 3 }"#).unwrap();

        let cfg = SplitConfig::from_json_file(&path).unwrap();
        assert_eq!(cfg.interval, 5);
        assert_eq!(cfg.seed, 3);
        assert_eq!(cfg.test_split, 0.1);
        assert_eq!(cfg.delimiter, ';');
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        let cfg = SplitConfig { delimiter: 'é', ..SplitConfig::default() };
        assert!(cfg.delimiter_byte().is_err());
    }
}
