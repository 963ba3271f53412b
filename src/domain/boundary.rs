// ============================================================
// Layer 3 — SplitBoundary
// ============================================================
// The contiguous test region of one class, as a half-open row
// range [test_start, test_end).
//
// Given a uniform draw x in [0, 1):
//
//   min_test_start = interval
//   max_test_start = floor(num_rows * (1 - test_split))
//   test_start     = floor(x * (max - min)) + min
//   test_end       = test_start + floor(num_rows * test_split)
//
// Window ends (a window ending at j covers rows j-interval+1..=j):
//
//   train (before) : [interval - 1,              test_start)
//   test           : [test_start + interval - 1, test_end)
//   train (after)  : [test_end + interval - 1,   num_rows)
//
// The latest row of a pre-test training window is test_start-1,
// and the earliest row of any test window is test_start. The
// same argument at test_end separates the test windows from the
// post-test training windows.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitBoundary {
    pub test_start: usize,
    pub test_end:   usize,
}

impl SplitBoundary {
    /// Compute the test region for a class of `num_rows` rows from a
    /// single uniform draw `x`.
    pub fn compute(
        class:      &str,
        num_rows:   usize,
        test_split: f64,
        interval:   usize,
        x:          f64,
    ) -> Result<Self, ConfigError> {
        if interval == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if interval >= num_rows {
            return Err(ConfigError::IntervalTooLarge {
                class: class.to_string(),
                interval,
                num_rows,
            });
        }

        let min_test_start = interval;
        let max_test_start = (num_rows as f64 * (1.0 - test_split)).floor() as usize;
        if max_test_start <= min_test_start {
            return Err(ConfigError::DegenerateBounds {
                class: class.to_string(),
                min_test_start,
                max_test_start,
            });
        }

        let span       = (max_test_start - min_test_start) as f64;
        let test_start = (x * span).floor() as usize + min_test_start;
        let test_len   = (num_rows as f64 * test_split).floor() as usize;

        Ok(Self {
            test_start,
            test_end: test_start + test_len,
        })
    }

    /// Number of rows reserved for testing.
    pub fn test_len(&self) -> usize {
        self.test_end - self.test_start
    }

    /// Window end indices for training windows before the test region.
    pub(crate) fn train_before_ends(&self, interval: usize) -> Range<usize> {
        (interval - 1)..self.test_start
    }

    /// Window end indices for test windows. Truncated at `num_rows`.
    pub(crate) fn test_ends(&self, num_rows: usize, interval: usize) -> Range<usize> {
        (self.test_start + interval - 1)..self.test_end.min(num_rows)
    }

    /// Window end indices for training windows after the test region.
    /// Empty when the tail is too short to hold a full window.
    pub(crate) fn train_after_ends(&self, num_rows: usize, interval: usize) -> Range<usize> {
        let first = self.test_end + interval - 1;
        if first < num_rows {
            first..num_rows
        } else {
            num_rows..num_rows
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_boundary() {
        // 10 rows, interval 3, split 0.1, x = 0.5
        let b = SplitBoundary::compute("a", 10, 0.1, 3, 0.5).unwrap();
        assert_eq!(b, SplitBoundary { test_start: 6, test_end: 7 });

        let before: Vec<usize> = b.train_before_ends(3).collect();
        let test:   Vec<usize> = b.test_ends(10, 3).collect();
        let after:  Vec<usize> = b.train_after_ends(10, 3).collect();
        assert_eq!(before, vec![2, 3, 4, 5]);
        assert_eq!(after,  vec![9]);
        // test_start + interval - 1 = 8 is not below test_end = 7
        assert!(test.is_empty());
    }

    #[test]
    fn test_draw_zero_starts_at_interval() {
        let b = SplitBoundary::compute("a", 100, 0.2, 5, 0.0).unwrap();
        assert_eq!(b.test_start, 5);
        assert_eq!(b.test_end,   25);
    }

    #[test]
    fn test_draw_near_one_stays_below_max() {
        let b = SplitBoundary::compute("a", 100, 0.2, 5, 0.999_999).unwrap();
        // max_test_start = 80, so test_start can be at most 79
        assert_eq!(b.test_start, 79);
        assert!(b.test_end <= 100);
    }

    #[test]
    fn test_interval_too_large() {
        let err = SplitBoundary::compute("a", 10, 0.1, 12, 0.5).unwrap_err();
        assert_eq!(
            err,
            ConfigError::IntervalTooLarge { class: "a".into(), interval: 12, num_rows: 10 }
        );
    }

    #[test]
    fn test_zero_interval() {
        let err = SplitBoundary::compute("a", 10, 0.1, 0, 0.5).unwrap_err();
        assert_eq!(err, ConfigError::ZeroInterval);
    }

    #[test]
    fn test_degenerate_bounds() {
        // max_test_start = floor(10 * 0.5) = 5, min_test_start = 5
        let err = SplitBoundary::compute("a", 10, 0.5, 5, 0.5).unwrap_err();
        assert!(matches!(err, ConfigError::DegenerateBounds { .. }));
    }

    #[test]
    fn test_short_tail_has_no_after_windows() {
        let b = SplitBoundary { test_start: 6, test_end: 9 };
        assert_eq!(b.train_after_ends(10, 3).count(), 0);
    }
}
