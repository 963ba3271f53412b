//! Sliding-window train/test splitting of tensile-test series.
//!
//! Each material's ordered measurement rows are cut into windows of
//! `interval` consecutive rows. One contiguous block of every series,
//! placed by a seeded generator, is held out for testing, and no row
//! ever appears in both a training and a test window.

pub mod cli;
pub mod application;
pub mod domain;
pub mod data;
pub mod infra;

pub use data::dataset::{LabelMap, SplitDataset};
pub use data::splitter::{split, WindowedSplitter};
pub use domain::error::{ConfigError, SplitError};
pub use domain::series::ClassSeries;
pub use domain::traits::SeriesSource;
