// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
//
//   <class>.csv files
//       │
//       ▼
//   CsvSeriesLoader   → ordered numeric rows per class
//       │
//       ▼
//   WindowedSplitter  → test block per class, sliding windows
//       │
//       ▼
//   SplitDataset      → x/y train, x/y test, label map
//       │
//       ▼
//   WindowDataset     → Burn Dataset for a downstream classifier
//       │
//       ▼
//   WindowBatcher     → feature / target tensors

/// Reads one class per CSV file
pub mod loader;

/// Flattens consecutive rows into one window
pub mod window;

/// Places the test block and emits train/test windows
pub mod splitter;

/// Aggregate containers, label map, Burn dataset
pub mod dataset;

/// Burn Batcher for window samples
pub mod batcher;
