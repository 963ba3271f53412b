// ============================================================
// Layer 4 — Windowed Train/Test Splitter
// ============================================================
// Turns each class's ordered rows into sliding windows and
// reserves one contiguous block of rows per class for testing.
//
// Per class, in processing order:
//
//   1. draw x ∈ [0, 1) from the shared generator
//   2. SplitBoundary::compute → [test_start, test_end)
//   3. train windows ending before test_start
//   4. test windows lying entirely inside [test_start, test_end)
//   5. train windows starting at or after test_end
//   6. labels[i] = class name, y = i for every window emitted
//
//   rows:  0 1 2 3 4 5 | 6 7 8 9 10 11 | 12 13 14 15
//          └─ train ──┘ └─── test ───┘ └── train ──┘
//
// No row is ever shared between a training and a test window.
//
// The generator is one explicit value passed in by the caller
// and advanced exactly once per class, so a fixed seed and a
// fixed class order always give the same split.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::data::dataset::{ClassSummary, SplitDataset};
use crate::data::window::flatten_window;
use crate::domain::boundary::SplitBoundary;
use crate::domain::error::{ConfigError, Result, SplitError};
use crate::domain::series::ClassSeries;
use crate::domain::traits::SeriesSource;

/// Splits class series into train/test sliding windows.
#[derive(Debug, Clone)]
pub struct WindowedSplitter {
    test_split: f64,
    interval:   usize,
    verbose:    bool,
}

impl WindowedSplitter {
    /// Create a splitter.
    ///
    /// `test_split` must be strictly between 0 and 1 and `interval`
    /// at least 1.
    pub fn new(test_split: f64, interval: usize) -> std::result::Result<Self, ConfigError> {
        if !(test_split > 0.0 && test_split < 1.0) {
            return Err(ConfigError::TestSplitOutOfRange { test_split });
        }
        if interval == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(Self { test_split, interval, verbose: false })
    }

    /// Log per-class running totals at info level. Never changes output.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn test_split(&self) -> f64 {
        self.test_split
    }

    pub fn interval(&self) -> usize {
        self.interval
    }

    /// Pull every class from `source`, one at a time, in its order.
    pub fn split_from_source<R: Rng + ?Sized>(
        &self,
        source: &dyn SeriesSource,
        rng:    &mut R,
    ) -> Result<SplitDataset> {
        let names = source.class_names()?;
        self.split(names.iter().map(|name| source.load(name)), rng)
    }

    /// Split a sequence of classes. The first error stops the run.
    pub fn split<I, R>(&self, classes: I, rng: &mut R) -> Result<SplitDataset>
    where
        I: IntoIterator<Item = Result<ClassSeries>>,
        R: Rng + ?Sized,
    {
        let mut out = SplitDataset::default();

        for series in classes {
            let series = series?;
            self.split_class(&series, rng, &mut out)?;
        }

        if out.labels.is_empty() {
            return Err(SplitError::EmptyInput {
                location: "class source list".to_string(),
            });
        }

        if self.verbose {
            let labels: Vec<String> = out
                .labels
                .iter()
                .map(|(i, name)| format!("{i}: {name}"))
                .collect();
            tracing::info!("Labels: {{{}}}", labels.join(", "));
        }

        tracing::info!(
            "Split {} classes: {} train windows, {} test windows",
            out.labels.len(),
            out.train_len(),
            out.test_len(),
        );

        Ok(out)
    }

    fn split_class<R: Rng + ?Sized>(
        &self,
        series: &ClassSeries,
        rng:    &mut R,
        out:    &mut SplitDataset,
    ) -> Result<()> {
        let interval = self.interval;
        let num_rows = series.num_rows();

        // One draw per class, before any validation of this class
        let x: f64   = rng.gen();
        let boundary = SplitBoundary::compute(
            &series.name,
            num_rows,
            self.test_split,
            interval,
            x,
        )?;

        // A repeated name would break the one-name-per-index label map
        if out.labels.index_of(&series.name).is_some() {
            return Err(SplitError::DuplicateClass { name: series.name.clone() });
        }

        let index        = out.labels.push(series.name.clone());
        let train_before = out.x_train.len();
        let test_before  = out.x_test.len();

        for end in boundary.train_before_ends(interval) {
            out.x_train.push(flatten_window(&series.rows, end, interval));
            out.y_train.push(index);
        }

        for end in boundary.test_ends(num_rows, interval) {
            out.x_test.push(flatten_window(&series.rows, end, interval));
            out.y_test.push(index);
        }

        for end in boundary.train_after_ends(num_rows, interval) {
            out.x_train.push(flatten_window(&series.rows, end, interval));
            out.y_train.push(index);
        }

        let summary = ClassSummary {
            index,
            name:        series.name.clone(),
            num_rows,
            row_width:   series.row_width(),
            boundary,
            train_count: out.x_train.len() - train_before,
            test_count:  out.x_test.len() - test_before,
        };

        if self.verbose {
            tracing::info!(
                "Class {}: train total {}, test total {}, test rows [{}, {})",
                index,
                out.x_train.len(),
                out.x_test.len(),
                boundary.test_start,
                boundary.test_end,
            );
        } else {
            tracing::debug!(
                "Class {} '{}': {} train, {} test, test rows [{}, {})",
                index,
                summary.name,
                summary.train_count,
                summary.test_count,
                boundary.test_start,
                boundary.test_end,
            );
        }

        out.summaries.push(summary);
        Ok(())
    }
}

/// Split in-memory class series with a generator seeded from `seed`.
///
/// Returns `(x_train, y_train, x_test, y_test, labels)` inside a
/// `SplitDataset`.
pub fn split(
    class_sources: Vec<ClassSeries>,
    test_split:    f64,
    interval:      usize,
    seed:          u64,
) -> Result<SplitDataset> {
    let splitter = WindowedSplitter::new(test_split, interval)?;
    let mut rng  = StdRng::seed_from_u64(seed);
    splitter.split(class_sources.into_iter().map(Ok), &mut rng)
}
