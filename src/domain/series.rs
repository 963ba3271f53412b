// ============================================================
// Layer 3 — ClassSeries Domain Type
// ============================================================
// One material's tensile-test series: an ordered list of rows,
// each row being the measurement vector for one increment.
//
// Example (interval = 2, row width = 3):
//   rows[0] = [0.00, 0.10, 12.5]
//   rows[1] = [0.01, 0.20, 25.1]
//   rows[2] = [0.02, 0.30, 37.4]
//   window ending at row 2 → [0.01, 0.20, 25.1, 0.02, 0.30, 37.4]
//
// Row width is expected to be constant within a class. The
// CSV reader enforces that; nothing here re-checks it.

use serde::{Deserialize, Serialize};

/// A single measurement increment.
pub type Row = Vec<f64>;

/// A named, ordered series of rows for one class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSeries {
    /// Display name used verbatim in the label map
    pub name: String,

    /// Rows in time order, oldest first
    pub rows: Vec<Row>,
}

impl ClassSeries {
    pub fn new(name: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Width of the first row, or 0 for an empty series.
    pub fn row_width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_width_uses_first_row() {
        let s = ClassSeries::new("steel", vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(s.num_rows(), 2);
        assert_eq!(s.row_width(), 2);
    }

    #[test]
    fn test_empty_series_has_zero_width() {
        let s = ClassSeries::new("empty", Vec::new());
        assert_eq!(s.num_rows(), 0);
        assert_eq!(s.row_width(), 0);
    }
}
