// ============================================================
// Layer 6 — Split Report
// ============================================================
// A printable summary of a finished split:
//
//   class                rows  width  test rows     train   test
//   aluminium            1200      3  [311, 431)      1074    118
//   steel                 980      3  [702, 800)       878     96
//   total                                             1952    214
//
// Rendered either as the plain table above or as JSON. Reading
// a report never changes the dataset it describes.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::dataset::{ClassSummary, LabelMap, SplitDataset};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitReport {
    pub test_split:    f64,
    pub interval:      usize,
    pub seed:          u64,
    pub feature_width: Option<usize>,
    pub train_total:   usize,
    pub test_total:    usize,
    pub labels:        LabelMap,
    pub classes:       Vec<ClassSummary>,
}

impl SplitReport {
    pub fn new(dataset: &SplitDataset, test_split: f64, interval: usize, seed: u64) -> Self {
        Self {
            test_split,
            interval,
            seed,
            feature_width: dataset.feature_width(),
            train_total:   dataset.train_len(),
            test_total:    dataset.test_len(),
            labels:        dataset.labels.clone(),
            classes:       dataset.summaries.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn render_table(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{:<20} {:>6} {:>6}  {:<12} {:>7} {:>6}\n",
            "class", "rows", "width", "test rows", "train", "test"
        ));

        for c in &self.classes {
            let range = format!("[{}, {})", c.boundary.test_start, c.boundary.test_end);
            out.push_str(&format!(
                "{:<20} {:>6} {:>6}  {:<12} {:>7} {:>6}\n",
                c.name, c.num_rows, c.row_width, range, c.train_count, c.test_count
            ));
        }

        out.push_str(&format!(
            "{:<20} {:>6} {:>6}  {:<12} {:>7} {:>6}\n",
            "total", "", "", "", self.train_total, self.test_total
        ));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::boundary::SplitBoundary;

    fn sample_dataset() -> SplitDataset {
        let mut labels = LabelMap::new();
        labels.push("steel");
        SplitDataset {
            x_train: vec![vec![0.0; 6]; 4],
            y_train: vec![0; 4],
            x_test:  vec![vec![0.0; 6]],
            y_test:  vec![0],
            labels,
            summaries: vec![ClassSummary {
                index:       0,
                name:        "steel".into(),
                num_rows:    10,
                row_width:   2,
                boundary:    SplitBoundary { test_start: 4, test_end: 7 },
                train_count: 4,
                test_count:  1,
            }],
        }
    }

    #[test]
    fn test_totals_follow_dataset() {
        let report = SplitReport::new(&sample_dataset(), 0.3, 3, 11);
        assert_eq!(report.train_total, 4);
        assert_eq!(report.test_total, 1);
        assert_eq!(report.feature_width, Some(6));
    }

    #[test]
    fn test_table_lists_each_class() {
        let table = SplitReport::new(&sample_dataset(), 0.3, 3, 11).render_table();
        assert!(table.contains("steel"));
        assert!(table.contains("[4, 7)"));
        assert_eq!(table.lines().count(), 3);
    }

    #[test]
    fn test_json_contains_labels() {
        let json = SplitReport::new(&sample_dataset(), 0.3, 3, 11).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["labels"]["0"], "steel");
        assert_eq!(value["classes"][0]["boundary"]["test_end"], 7);
    }
}
