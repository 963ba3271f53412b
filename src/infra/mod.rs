// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
//   report.rs — per-class summary of a finished split,
//               rendered as a table or as JSON

/// Split summary rendering
pub mod report;
