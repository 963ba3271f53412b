// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The splitter never touches files. It asks a SeriesSource for
// the list of classes and then for each class's rows, one class
// at a time, in the order the source reports them.
//
// Implementations:
//   - CsvSeriesLoader → a directory of semicolon-separated CSVs
//   - Vec<ClassSeries> → series already in memory (tests, callers
//                        that build their own rows); names must be
//                        unique since load() looks classes up by name

use std::collections::HashSet;

use crate::domain::error::{Result, SplitError};
use crate::domain::series::ClassSeries;

// ─── SeriesSource ─────────────────────────────────────────────────────────────
/// Anything that can enumerate classes and produce their rows.
///
/// `class_names` must return the same order on every call; the
/// shared random generator is advanced once per class in that
/// order, so the order decides which split each class gets.
pub trait SeriesSource {
    /// Class names in processing order.
    fn class_names(&self) -> Result<Vec<String>>;

    /// Load the ordered rows of one class.
    fn load(&self, name: &str) -> Result<ClassSeries>;
}

impl SeriesSource for Vec<ClassSeries> {
    fn class_names(&self) -> Result<Vec<String>> {
        let mut seen = HashSet::new();
        for series in self {
            if !seen.insert(series.name.as_str()) {
                return Err(SplitError::DuplicateClass { name: series.name.clone() });
            }
        }
        Ok(self.iter().map(|s| s.name.clone()).collect())
    }

    fn load(&self, name: &str) -> Result<ClassSeries> {
        self.iter()
            .find(|s| s.name == name)
            .cloned()
            .ok_or_else(|| SplitError::UnknownClass { name: name.to_string() })
    }
}
