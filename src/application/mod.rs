// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Workflow coordination only: no windowing math, no printing.

// Load, split, and report
pub mod split_use_case;
