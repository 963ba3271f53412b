// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types that describe the problem:
//
//   series.rs   — ClassSeries, one material's ordered rows
//   boundary.rs — SplitBoundary, the per-class test region
//                 and the window-end ranges derived from it
//   error.rs    — ConfigError / SplitError
//   traits.rs   — SeriesSource, the loader abstraction
//
// Rules for this layer:
//   - NO Burn framework types
//   - NO file I/O
//   - NO randomness (draws are passed in as plain f64)

pub mod boundary;

pub mod error;

pub mod series;

pub mod traits;
