// ============================================================
// Layer 4 — Window Flattening
// ============================================================
// A window ending at row j covers rows [j - interval + 1, j]
// and is laid out oldest row first:
//
//   rows:   r0 = [a0, b0]   r1 = [a1, b1]   r2 = [a2, b2]
//   window(end = 2, interval = 3) → [a0, b0, a1, b1, a2, b2]

use crate::domain::series::Row;

/// Flatten the `interval` rows ending at `end` into one vector.
///
/// # Panics
/// Panics if `end + 1 < interval` or `end >= rows.len()`. Callers
/// only pass ends taken from a `SplitBoundary` range.
pub fn flatten_window(rows: &[Row], end: usize, interval: usize) -> Vec<f64> {
    let start = end + 1 - interval;
    let width = rows[start].len();

    let mut flat = Vec::with_capacity(interval * width);
    for row in &rows[start..=end] {
        flat.extend_from_slice(row);
    }
    flat
}

/// Lowest and highest row index covered by the window ending at `end`.
pub fn covered_rows(end: usize, interval: usize) -> (usize, usize) {
    (end + 1 - interval, end)
}
