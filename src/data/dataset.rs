// ============================================================
// Layer 4 — Split Dataset
// ============================================================
// The result of a split, and its hand-off to Burn:
//
//   LabelMap      — class index → material name, dense from 0
//   ClassSummary  — per-class boundary and window counts
//   SplitDataset  — x_train / y_train / x_test / y_test + labels
//   WindowDataset — Burn Dataset over (window, class index) pairs
//
// y_*[k] is always the class index of the window in x_*[k].

use std::collections::BTreeMap;

use burn::data::dataset::Dataset;
use serde::{Deserialize, Serialize};

use crate::domain::boundary::SplitBoundary;

// ─── LabelMap ─────────────────────────────────────────────────────────────────
/// Dense class index → display name mapping.
/// Indices are handed out 0, 1, 2, … in the order classes are pushed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelMap {
    names: BTreeMap<usize, String>,
}

impl LabelMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the next class and return its index.
    pub fn push(&mut self, name: impl Into<String>) -> usize {
        let index = self.names.len();
        self.names.insert(index, name.into());
        index
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(&index).map(String::as_str)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names
            .iter()
            .find(|(_, n)| n.as_str() == name)
            .map(|(&i, _)| i)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.names.iter().map(|(&i, n)| (i, n.as_str()))
    }
}

// ─── ClassSummary ─────────────────────────────────────────────────────────────
/// What happened to one class during the split. Observational only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSummary {
    pub index:       usize,
    pub name:        String,
    pub num_rows:    usize,
    pub row_width:   usize,
    pub boundary:    SplitBoundary,
    pub train_count: usize,
    pub test_count:  usize,
}

// ─── SplitDataset ─────────────────────────────────────────────────────────────
/// The four aggregate containers plus the label map.
///
/// `x_train[k]` is a flattened window and `y_train[k]` the index of the
/// class it came from; the same holds for the test pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SplitDataset {
    pub x_train:   Vec<Vec<f64>>,
    pub y_train:   Vec<usize>,
    pub x_test:    Vec<Vec<f64>>,
    pub y_test:    Vec<usize>,
    pub labels:    LabelMap,
    pub summaries: Vec<ClassSummary>,
}

impl SplitDataset {
    pub fn train_len(&self) -> usize {
        self.x_train.len()
    }

    pub fn test_len(&self) -> usize {
        self.x_test.len()
    }

    /// Width of the emitted windows, taken from the first window found.
    pub fn feature_width(&self) -> Option<usize> {
        self.x_train
            .first()
            .or_else(|| self.x_test.first())
            .map(Vec::len)
    }

    /// Destructure into `(x_train, y_train, x_test, y_test, labels)`.
    pub fn into_parts(
        self,
    ) -> (Vec<Vec<f64>>, Vec<usize>, Vec<Vec<f64>>, Vec<usize>, LabelMap) {
        (self.x_train, self.y_train, self.x_test, self.y_test, self.labels)
    }

    /// Convert into Burn datasets `(train, test)` for a classifier.
    pub fn into_datasets(self) -> (WindowDataset, WindowDataset) {
        let train = WindowDataset::from_pairs(self.x_train, self.y_train);
        let test  = WindowDataset::from_pairs(self.x_test, self.y_test);
        (train, test)
    }
}

// ─── Burn Dataset ─────────────────────────────────────────────────────────────
/// One window with its class index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSample {
    pub features: Vec<f64>,
    pub label:    usize,
}

pub struct WindowDataset {
    samples: Vec<WindowSample>,
}

impl WindowDataset {
    pub fn from_pairs(xs: Vec<Vec<f64>>, ys: Vec<usize>) -> Self {
        let samples = xs
            .into_iter()
            .zip(ys)
            .map(|(features, label)| WindowSample { features, label })
            .collect();
        Self { samples }
    }
}

impl Dataset<WindowSample> for WindowDataset {
    fn get(&self, index: usize) -> Option<WindowSample> {
        self.samples.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_map_is_dense() {
        let mut labels = LabelMap::new();
        assert_eq!(labels.push("aluminium"), 0);
        assert_eq!(labels.push("copper"), 1);
        assert_eq!(labels.push("steel"), 2);

        assert_eq!(labels.len(), 3);
        assert_eq!(labels.get(1), Some("copper"));
        assert_eq!(labels.index_of("steel"), Some(2));
        assert_eq!(labels.get(3), None);
    }

    #[test]
    fn test_label_map_json_shape() {
        let mut labels = LabelMap::new();
        labels.push("brass");
        let json = serde_json::to_string(&labels).unwrap();
        assert_eq!(json, r#"{"0":"brass"}"#);

        let back: LabelMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, labels);
    }

    #[test]
    fn test_into_datasets_keeps_pairs() {
        let ds = SplitDataset {
            x_train: vec![vec![1.0], vec![2.0]],
            y_train: vec![0, 1],
            x_test:  vec![vec![3.0]],
            y_test:  vec![1],
            ..Default::default()
        };
        let (train, test) = ds.into_datasets();
        assert_eq!(train.len(), 2);
        assert_eq!(test.len(), 1);
        assert_eq!(
            train.get(1),
            Some(WindowSample { features: vec![2.0], label: 1 })
        );
        assert!(test.get(1).is_none());
    }
}
